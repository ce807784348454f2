// ==========================================
// 球员交易计算器 - 球员领域模型
// ==========================================
// 用途: 导入层写入, 交易层只读
// 红线: NormalizedDataset 由单次导入整体生成, 之后不再原地修改
// ==========================================

use crate::domain::types::SkipReason;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

// ==========================================
// PlayerRecord - 规范化球员记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: String,          // "{name}-{接受序号}"，数据集内唯一
    pub name: String,        // 去空白后的非空姓名
    pub nb10: f64,           // NB10 评分（必需）
    pub value_score: f64,    // 交易价值分（必需，排序与平衡计算依据）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ppg: Option<f64>,    // 场均得分（可选）
}

impl PlayerRecord {
    /// 由姓名与其在"已接受记录"中的序号（0 起始）派生 id
    pub fn derive_id(name: &str, accepted_index: usize) -> String {
        format!("{}-{}", name, accepted_index)
    }
}

// ==========================================
// SkippedRow - 被跳过的行
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    pub row_number: usize,
    pub reason: SkipReason,
}

// ==========================================
// NormalizedDataset - 规范化数据集
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedDataset {
    records: Vec<PlayerRecord>,
    skipped_rows: Vec<SkippedRow>,
}

impl NormalizedDataset {
    /// 按 value_score 降序稳定排序后构造（相等分值保持原行序, -0 与 0 视为相等）
    pub fn new(mut records: Vec<PlayerRecord>, skipped_rows: Vec<SkippedRow>) -> Self {
        records.sort_by(|a, b| {
            b.value_score
                .partial_cmp(&a.value_score)
                .unwrap_or(Ordering::Equal)
        });
        Self {
            records,
            skipped_rows,
        }
    }

    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 被跳过的行数
    pub fn skipped(&self) -> usize {
        self.skipped_rows.len()
    }

    pub fn skipped_rows(&self) -> &[SkippedRow] {
        &self.skipped_rows
    }

    pub fn get(&self, id: &str) -> Option<&PlayerRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// 按姓名搜索
    ///
    /// # 规则
    /// - 不区分大小写的子串匹配
    /// - 排除已选中的 id
    /// - 空查询返回前 limit 条未选中记录
    /// - 结果保持数据集顺序（即排名顺序）
    pub fn search(
        &self,
        query: &str,
        exclude_ids: &HashSet<String>,
        limit: usize,
    ) -> Vec<&PlayerRecord> {
        let needle = query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| !exclude_ids.contains(&r.id))
            .filter(|r| needle.is_empty() || r.name.to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }
}
