// ==========================================
// 球员交易计算器 - 表格导入引擎
// ==========================================
// 职责: 整合导入流程, 从字节流到规范化数据集
// 流程: 解析 → 列角色推断 → 必需列校验 → 行转换 → 排序
// 红线: 纯函数, 同一输入字节必得同一结果（id 与顺序一致）
// ==========================================

use crate::domain::player::{NormalizedDataset, PlayerRecord, SkippedRow};
use crate::domain::table::RawTable;
use crate::importer::column_resolver::SubstringRoleResolver;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{CsvParser, ExcelParser};
use crate::importer::importer_trait::{ColumnRoleResolver, SheetParser};
use crate::importer::row_coercer::RowCoercer;
use std::path::Path;
use tracing::{debug, error, info, instrument, warn};

// ==========================================
// TabularImportEngine
// ==========================================
pub struct TabularImportEngine {
    resolver: Box<dyn ColumnRoleResolver>,
}

impl Default for TabularImportEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TabularImportEngine {
    /// 使用默认列推断策略（子串匹配）
    pub fn new() -> Self {
        Self::with_resolver(Box::new(SubstringRoleResolver))
    }

    /// 替换列推断策略, 行转换逻辑不受影响
    pub fn with_resolver(resolver: Box<dyn ColumnRoleResolver>) -> Self {
        Self { resolver }
    }

    /// 导入工作簿（.xlsx/.xls, 仅首个工作表）
    ///
    /// # 返回
    /// - Ok(NormalizedDataset): 按 valueScore 降序的记录 + 跳过行数
    /// - Err(ImportError): Decode / EmptySheet / MissingColumn / NoValidRows
    #[instrument(skip_all, fields(bytes = source.len()))]
    pub fn import(&self, source: &[u8]) -> ImportResult<NormalizedDataset> {
        self.run(&ExcelParser, source)
    }

    /// 导入 CSV 文本表格（第 1 行为表头）
    #[instrument(skip_all, fields(bytes = source.len()))]
    pub fn import_csv(&self, source: &[u8]) -> ImportResult<NormalizedDataset> {
        self.run(&CsvParser, source)
    }

    /// 按路径导入（根据扩展名选择解析器）
    pub fn import_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<NormalizedDataset> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let parser: &dyn SheetParser = match ext.as_str() {
            "xlsx" | "xlsm" | "xls" => &ExcelParser,
            "csv" => &CsvParser,
            _ => return Err(ImportError::UnsupportedFormat(ext)),
        };

        let source = std::fs::read(path).map_err(|e| {
            error!(file_path = %path.display(), error = %e, "文件读取失败");
            ImportError::from(e)
        })?;
        info!(file_path = %path.display(), bytes = source.len(), "开始导入球员数据");

        self.run(parser, &source)
    }

    fn run(&self, parser: &dyn SheetParser, source: &[u8]) -> ImportResult<NormalizedDataset> {
        let result = self.run_stages(parser, source);
        if let Err(e) = &result {
            error!(kind = e.kind(), error = %e, "导入失败");
        }
        result
    }

    fn run_stages(
        &self,
        parser: &dyn SheetParser,
        source: &[u8],
    ) -> ImportResult<NormalizedDataset> {
        // === 步骤 1: 解析文件 ===
        debug!("步骤 1: 解析文件");
        let table = parser.parse_to_raw_table(source)?;
        if table.is_empty() {
            return Err(ImportError::EmptySheet);
        }
        let total_rows = table.data_row_count();
        info!(total_rows, columns = table.headers.len(), "文件解析完成");

        // === 步骤 2: 列角色推断 + 必需列校验（任何行处理之前） ===
        debug!(headers = ?table.headers, "步骤 2: 列角色推断");
        let role_map = self.resolver.resolve(&table.headers);
        let columns = role_map.require()?;
        info!(
            name = %columns.name,
            nb10 = %columns.nb10,
            value_score = %columns.value_score,
            ppg = ?columns.ppg,
            "列角色推断完成"
        );

        // === 步骤 3: 行转换 ===
        debug!("步骤 3: 行转换");
        let (records, skipped_rows) = coerce_rows(&table, &RowCoercer::new(&columns));
        info!(
            accepted = records.len(),
            skipped = skipped_rows.len(),
            "行转换完成"
        );

        if records.is_empty() {
            return Err(ImportError::NoValidRows {
                skipped: skipped_rows.len(),
            });
        }

        // === 步骤 4: 排序（稳定, valueScore 降序） ===
        let dataset = NormalizedDataset::new(records, skipped_rows);
        info!(
            players = dataset.len(),
            skipped = dataset.skipped(),
            "球员数据导入完成"
        );
        Ok(dataset)
    }
}

/// 逐行转换, id 序号取"已接受记录"中的位置
fn coerce_rows(table: &RawTable, coercer: &RowCoercer<'_>) -> (Vec<PlayerRecord>, Vec<SkippedRow>) {
    let mut records = Vec::new();
    let mut skipped_rows = Vec::new();

    for row in &table.rows {
        match coercer.coerce(row) {
            Ok(accepted) => {
                let index = records.len();
                records.push(accepted.into_record(index));
            }
            Err(reason) => {
                warn!(row_number = row.row_number, reason = %reason, "跳过无效行");
                skipped_rows.push(SkippedRow {
                    row_number: row.row_number,
                    reason,
                });
            }
        }
    }

    (records, skipped_rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ColumnRole, SkipReason};
    use crate::importer::column_resolver::ColumnRoleMap;

    #[test]
    fn test_acceptance_scenario_csv() {
        let csv = "Player,NB10,Value Score\nA,10,5\nB,,9\nC,3,7\n";
        let dataset = TabularImportEngine::new().import_csv(csv.as_bytes()).unwrap();

        let names: Vec<&str> = dataset.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A"]);
        assert_eq!(dataset.skipped(), 1);
        assert_eq!(dataset.skipped_rows()[0].reason, SkipReason::InvalidNb10);
        assert_eq!(dataset.skipped_rows()[0].row_number, 3);
    }

    #[test]
    fn test_id_uses_position_among_accepted_rows() {
        let csv = "Player,NB10,Value Score\n,1,1\nA,1,2\nA,1,3\n";
        let dataset = TabularImportEngine::new().import_csv(csv.as_bytes()).unwrap();

        let ids: Vec<&str> = dataset.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["A-1", "A-0"]);
    }

    #[test]
    fn test_empty_sheet() {
        let err = TabularImportEngine::new()
            .import_csv(b"Player,NB10,Value Score\n")
            .unwrap_err();
        assert_eq!(err, ImportError::EmptySheet);
    }

    #[test]
    fn test_missing_column_before_rows() {
        let err = TabularImportEngine::new()
            .import_csv(b"Player,Points\nA,abc\n")
            .unwrap_err();
        assert_eq!(
            err,
            ImportError::MissingColumn {
                kind: ColumnRole::Nb10
            }
        );
    }

    #[test]
    fn test_no_valid_rows_reports_skip_count() {
        let err = TabularImportEngine::new()
            .import_csv(b"Player,NB10,Value Score\n,1,1\nB,x,1\n")
            .unwrap_err();
        assert_eq!(err, ImportError::NoValidRows { skipped: 2 });
    }

    #[test]
    fn test_decode_error_for_non_workbook() {
        let err = TabularImportEngine::new().import(b"hello").unwrap_err();
        assert_eq!(err.kind(), "decode_error");
    }

    #[test]
    fn test_unsupported_extension() {
        let err = TabularImportEngine::new()
            .import_file("players.pdf")
            .unwrap_err();
        assert_eq!(err, ImportError::UnsupportedFormat("pdf".to_string()));
    }

    struct ExactResolver;

    impl ColumnRoleResolver for ExactResolver {
        fn resolve(&self, headers: &[String]) -> ColumnRoleMap {
            let pick = |want: &str| headers.iter().find(|h| h.as_str() == want).cloned();
            ColumnRoleMap {
                name: pick("name"),
                nb10: pick("nb10"),
                value_score: pick("score"),
                ppg: None,
            }
        }
    }

    #[test]
    fn test_custom_resolver_keeps_coercion_rules() {
        let engine = TabularImportEngine::with_resolver(Box::new(ExactResolver));
        let csv = "name,nb10,score\nA,1,2\n ,1,3\n";
        let dataset = engine.import_csv(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.skipped(), 1);
    }
}
