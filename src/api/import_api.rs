// ==========================================
// 球员数据导入API
// ==========================================
// 职责: 后台执行导入引擎, 成功后整体替换会话数据集
// 红线: 失败时保留原数据集不变
// ==========================================

use crate::api::error::ApiError;
use crate::domain::player::{NormalizedDataset, SkippedRow};
use crate::i18n;
use crate::importer::{ImportResult, TabularImportEngine};
use crate::repository::{LoadedDataset, SessionStore};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, instrument};
use uuid::Uuid;

/// 导入API响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportApiResponse {
    /// 导入批次ID
    pub import_id: String,
    /// 成功导入的球员数
    pub player_count: usize,
    /// 跳过的行数
    pub skipped_rows: usize,
    /// 跳过行明细（行号 + 原因）
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skipped: Vec<SkippedRow>,
    /// 提示信息（已本地化）
    pub message: String,
    /// 导入耗时（毫秒）
    pub elapsed_ms: u64,
}

/// 导入API
pub struct ImportApi {
    engine: Arc<TabularImportEngine>,
    store: Arc<SessionStore>,
    locale: String,
}

impl ImportApi {
    /// 创建新的ImportApi实例
    pub fn new(engine: Arc<TabularImportEngine>, store: Arc<SessionStore>, locale: String) -> Self {
        Self {
            engine,
            store,
            locale,
        }
    }

    /// 按路径导入球员数据
    ///
    /// # 参数
    /// - file_path: 文件路径（.xlsx/.xls/.csv）
    ///
    /// # 返回
    /// - Ok(ImportApiResponse): 导入结果
    /// - Err(ApiError): 错误信息（原数据集保持不变）
    #[instrument(skip(self), fields(import_id))]
    pub async fn import_file(&self, file_path: &str) -> Result<ImportApiResponse, ApiError> {
        let path = PathBuf::from(file_path);
        let source_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        let engine = Arc::clone(&self.engine);
        self.run_import(source_name, move || engine.import_file(&path))
            .await
    }

    /// 导入内存中的文件内容（按文件名后缀区分 CSV 与工作簿）
    #[instrument(skip(self, source), fields(import_id, bytes = source.len()))]
    pub async fn import_bytes(
        &self,
        source_name: &str,
        source: Vec<u8>,
    ) -> Result<ImportApiResponse, ApiError> {
        let is_csv = Path::new(source_name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

        let engine = Arc::clone(&self.engine);
        self.run_import(source_name.to_string(), move || {
            if is_csv {
                engine.import_csv(&source)
            } else {
                engine.import(&source)
            }
        })
        .await
    }

    async fn run_import<F>(&self, source_name: String, job: F) -> Result<ImportApiResponse, ApiError>
    where
        F: FnOnce() -> ImportResult<NormalizedDataset> + Send + 'static,
    {
        let import_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("import_id", import_id.as_str());
        let start_time = Instant::now();
        info!(source = %source_name, "开始导入");

        // 导入为同步纯计算, 放到阻塞线程池执行
        let dataset = tokio::task::spawn_blocking(job)
            .await
            .map_err(|e| {
                error!(error = %e, "导入任务异常终止");
                ApiError::InternalError(format!("导入任务异常终止: {}", e))
            })??;

        let elapsed_ms = start_time.elapsed().as_millis() as u64;
        let response = ImportApiResponse {
            import_id: import_id.clone(),
            player_count: dataset.len(),
            skipped_rows: dataset.skipped(),
            skipped: dataset.skipped_rows().to_vec(),
            message: success_message(&self.locale, &dataset),
            elapsed_ms,
        };

        self.store.replace_dataset(LoadedDataset {
            import_id,
            source_name,
            loaded_at: Utc::now(),
            dataset,
        })?;

        info!(
            players = response.player_count,
            skipped = response.skipped_rows,
            elapsed_ms,
            "导入完成"
        );
        Ok(response)
    }
}

/// 成功提示: 有跳过行时附带跳过数
pub fn success_message(locale: &str, dataset: &NormalizedDataset) -> String {
    let count = dataset.len().to_string();
    if dataset.skipped() > 0 {
        i18n::t_in(
            locale,
            "import.success_with_skipped",
            &[("count", &count), ("skipped", &dataset.skipped().to_string())],
        )
    } else {
        i18n::t_in(locale, "import.success", &[("count", &count)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> (ImportApi, Arc<SessionStore>) {
        let store = Arc::new(SessionStore::new());
        let api = ImportApi::new(
            Arc::new(TabularImportEngine::new()),
            Arc::clone(&store),
            "en".to_string(),
        );
        (api, store)
    }

    #[tokio::test]
    async fn test_import_csv_bytes_replaces_dataset() {
        let (api, store) = api();
        let csv = b"Player,NB10,Value Score\nA,10,5\nB,,9\nC,3,7\n".to_vec();

        let response = api.import_bytes("players.csv", csv).await.unwrap();
        assert_eq!(response.player_count, 2);
        assert_eq!(response.skipped_rows, 1);
        assert_eq!(response.message, "Successfully loaded 2 players (1 rows skipped)");

        let loaded = store.dataset().unwrap().unwrap();
        assert_eq!(loaded.source_name, "players.csv");
        assert_eq!(loaded.import_id, response.import_id);
    }

    #[tokio::test]
    async fn test_failed_import_keeps_previous_dataset() {
        let (api, store) = api();
        let good = b"Player,NB10,Value Score\nA,10,5\n".to_vec();
        let first = api.import_bytes("good.csv", good).await.unwrap();

        let bad = b"Player,Points\nA,1\n".to_vec();
        let err = api.import_bytes("bad.csv", bad).await.unwrap_err();
        assert_eq!(err.kind(), "missing_column");

        let loaded = store.dataset().unwrap().unwrap();
        assert_eq!(loaded.import_id, first.import_id);
        assert_eq!(loaded.dataset.len(), 1);
    }

    #[tokio::test]
    async fn test_non_csv_bytes_go_through_workbook_decoder() {
        let (api, store) = api();
        let err = api
            .import_bytes("players.xlsx", b"Player,NB10,Value Score\nA,1,1\n".to_vec())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "decode_error");
        assert!(store.dataset().unwrap().is_none());
    }

    #[test]
    fn test_success_message_without_skips() {
        let dataset = NormalizedDataset::new(Vec::new(), Vec::new());
        assert_eq!(success_message("en", &dataset), "Successfully loaded 0 players");
    }
}
