// ==========================================
// 球员交易计算器 - 行转换器
// ==========================================
// 职责: 单元格 → 类型化值 + 接受/拒绝判定
// 接受条件: name 去空白后非空 且 nb10、valueScore 均为有限数
// 说明: ppg 解析失败降级为缺失, 不拒绝整行
// ==========================================

use crate::domain::player::PlayerRecord;
use crate::domain::table::{RawCell, RawRow};
use crate::domain::types::SkipReason;
use crate::importer::column_resolver::ResolvedColumns;

/// 通过接受条件、尚未分配 id 的行
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedRow {
    pub name: String,
    pub nb10: f64,
    pub value_score: f64,
    pub ppg: Option<f64>,
}

impl AcceptedRow {
    /// 按已接受序号分配 id
    pub fn into_record(self, accepted_index: usize) -> PlayerRecord {
        PlayerRecord {
            id: PlayerRecord::derive_id(&self.name, accepted_index),
            name: self.name,
            nb10: self.nb10,
            value_score: self.value_score,
            ppg: self.ppg,
        }
    }
}

pub struct RowCoercer<'a> {
    columns: &'a ResolvedColumns,
}

impl<'a> RowCoercer<'a> {
    pub fn new(columns: &'a ResolvedColumns) -> Self {
        Self { columns }
    }

    /// 转换单行
    pub fn coerce(&self, row: &RawRow) -> Result<AcceptedRow, SkipReason> {
        let name = clean_name(row.get(&self.columns.name));
        if name.is_empty() {
            return Err(SkipReason::EmptyName);
        }

        let nb10 = parse_decimal(row.get(&self.columns.nb10)).ok_or(SkipReason::InvalidNb10)?;
        let value_score = parse_decimal(row.get(&self.columns.value_score))
            .ok_or(SkipReason::InvalidValueScore)?;
        let ppg = self
            .columns
            .ppg
            .as_deref()
            .and_then(|header| parse_decimal(row.get(header)));

        Ok(AcceptedRow {
            name,
            nb10,
            value_score,
            ppg,
        })
    }
}

/// 姓名单元格: 文本去空白, 数值渲染为文本
pub fn clean_name(cell: &RawCell) -> String {
    cell.to_text().trim().to_string()
}

/// 解析十进制数（与区域设置无关）
///
/// # 规则
/// - 数值单元格直接取值
/// - 文本去首尾空白后整体解析, 有残留字符即失败
/// - NaN / 无穷 一律视为失败
pub fn parse_decimal(cell: &RawCell) -> Option<f64> {
    let value = match cell {
        RawCell::Number(n) => *n,
        RawCell::Text(s) => parse_decimal_str(s)?,
        RawCell::Empty => return None,
    };
    value.is_finite().then_some(value)
}

fn parse_decimal_str(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !is_decimal_literal(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

// 仅接受 [+-] 数字 [. 数字] [e[+-]数字]，排除 "inf" / "NaN" 等 Rust 可解析的特殊字面量
fn is_decimal_literal(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        && value.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn columns(with_ppg: bool) -> ResolvedColumns {
        ResolvedColumns {
            name: "Player".to_string(),
            nb10: "NB10".to_string(),
            value_score: "Value Score".to_string(),
            ppg: with_ppg.then(|| "PPG".to_string()),
        }
    }

    fn row(cells: &[(&str, RawCell)]) -> RawRow {
        let cells: HashMap<String, RawCell> = cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        RawRow {
            row_number: 2,
            cells,
        }
    }

    fn text(s: &str) -> RawCell {
        RawCell::Text(s.to_string())
    }

    #[test]
    fn test_parse_decimal_variants() {
        assert_eq!(parse_decimal(&text(" 12.5 ")), Some(12.5));
        assert_eq!(parse_decimal(&text("-3")), Some(-3.0));
        assert_eq!(parse_decimal(&text(".5")), Some(0.5));
        assert_eq!(parse_decimal(&text("1e2")), Some(100.0));
        assert_eq!(parse_decimal(&RawCell::Number(7.25)), Some(7.25));
    }

    #[test]
    fn test_parse_decimal_rejects_non_numeric() {
        assert_eq!(parse_decimal(&text("abc")), None);
        assert_eq!(parse_decimal(&text("12abc")), None);
        assert_eq!(parse_decimal(&text("1,5")), None);
        assert_eq!(parse_decimal(&text("NaN")), None);
        assert_eq!(parse_decimal(&text("inf")), None);
        assert_eq!(parse_decimal(&text("")), None);
        assert_eq!(parse_decimal(&text("-")), None);
        assert_eq!(parse_decimal(&RawCell::Empty), None);
        assert_eq!(parse_decimal(&RawCell::Number(f64::NAN)), None);
    }

    #[test]
    fn test_clean_name() {
        assert_eq!(clean_name(&text("  Jane Doe ")), "Jane Doe");
        assert_eq!(clean_name(&RawCell::Number(12.0)), "12");
        assert_eq!(clean_name(&RawCell::Empty), "");
    }

    #[test]
    fn test_coerce_accepts_valid_row() {
        let cols = columns(true);
        let coercer = RowCoercer::new(&cols);
        let accepted = coercer
            .coerce(&row(&[
                ("Player", text(" A ")),
                ("NB10", text("10")),
                ("Value Score", RawCell::Number(5.0)),
                ("PPG", text("18.4")),
            ]))
            .unwrap();
        assert_eq!(accepted.name, "A");
        assert_eq!(accepted.nb10, 10.0);
        assert_eq!(accepted.ppg, Some(18.4));

        let record = accepted.into_record(4);
        assert_eq!(record.id, "A-4");
    }

    #[test]
    fn test_coerce_rejects_empty_name() {
        let cols = columns(false);
        let result = RowCoercer::new(&cols).coerce(&row(&[
            ("Player", text("   ")),
            ("NB10", text("12.5")),
            ("Value Score", text("8.0")),
        ]));
        assert_eq!(result, Err(SkipReason::EmptyName));
    }

    #[test]
    fn test_coerce_rejects_bad_numbers() {
        let cols = columns(false);
        let coercer = RowCoercer::new(&cols);
        let result = coercer.coerce(&row(&[
            ("Player", text("Jane Doe")),
            ("NB10", text("abc")),
            ("Value Score", text("8.0")),
        ]));
        assert_eq!(result, Err(SkipReason::InvalidNb10));

        let result = coercer.coerce(&row(&[
            ("Player", text("Jane Doe")),
            ("NB10", text("1")),
        ]));
        assert_eq!(result, Err(SkipReason::InvalidValueScore));
    }

    #[test]
    fn test_bad_ppg_degrades_to_absent() {
        let cols = columns(true);
        let accepted = RowCoercer::new(&cols)
            .coerce(&row(&[
                ("Player", text("A")),
                ("NB10", text("1")),
                ("Value Score", text("2")),
                ("PPG", text("n/a")),
            ]))
            .unwrap();
        assert_eq!(accepted.ppg, None);
    }
}
