// ==========================================
// 球员交易计算器 - 交易选择与平衡判定
// ==========================================
// 职责: 两方交易名单（按 id 引用）+ 价值汇总 + 平衡判定
// 红线: 同一 id 同一时间只能出现在一方
// ==========================================

use crate::domain::player::NormalizedDataset;
use crate::domain::types::TradeSide;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// 默认平衡阈值: 差值严格小于该值视为平衡
pub const DEFAULT_BALANCE_THRESHOLD: f64 = 0.5;

/// 交易选择错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TradeError {
    #[error("球员已在交易中 (id: {id}, 所在方: {side})")]
    AlreadySelected { id: String, side: TradeSide },

    #[error("球员不在数据集中 (id: {0})")]
    UnknownPlayer(String),
}

// ==========================================
// TradeSelection - 交易双方名单
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeSelection {
    side_a: Vec<String>,
    side_b: Vec<String>,
}

impl TradeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn side(&self, side: TradeSide) -> &[String] {
        match side {
            TradeSide::A => &self.side_a,
            TradeSide::B => &self.side_b,
        }
    }

    fn side_mut(&mut self, side: TradeSide) -> &mut Vec<String> {
        match side {
            TradeSide::A => &mut self.side_a,
            TradeSide::B => &mut self.side_b,
        }
    }

    /// 查找 id 所在的一方
    pub fn side_of(&self, id: &str) -> Option<TradeSide> {
        if self.side_a.iter().any(|x| x == id) {
            Some(TradeSide::A)
        } else if self.side_b.iter().any(|x| x == id) {
            Some(TradeSide::B)
        } else {
            None
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.side_of(id).is_some()
    }

    /// 加入一方（已在任一方则拒绝）
    pub fn add(&mut self, side: TradeSide, id: impl Into<String>) -> Result<(), TradeError> {
        let id = id.into();
        if let Some(existing) = self.side_of(&id) {
            return Err(TradeError::AlreadySelected { id, side: existing });
        }
        self.side_mut(side).push(id);
        Ok(())
    }

    /// 从一方移除，返回是否确实移除
    pub fn remove(&mut self, side: TradeSide, id: &str) -> bool {
        let list = self.side_mut(side);
        let before = list.len();
        list.retain(|x| x != id);
        list.len() != before
    }

    pub fn clear(&mut self) {
        self.side_a.clear();
        self.side_b.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.side_a.is_empty() && self.side_b.is_empty()
    }

    pub fn selected_ids(&self) -> HashSet<String> {
        self.side_a.iter().chain(self.side_b.iter()).cloned().collect()
    }
}

// ==========================================
// TradeBalance - 平衡判定结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeBalance {
    Balanced,
    Ahead { side: TradeSide },
}

/// 单方高亮状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideHighlight {
    Winning,
    Losing,
    Neutral,
}

impl TradeBalance {
    /// 判定规则: |a - b| < threshold → 平衡，否则较大一方领先
    pub fn evaluate(side_a_total: f64, side_b_total: f64, threshold: f64) -> Self {
        let difference = (side_a_total - side_b_total).abs();
        if difference < threshold {
            TradeBalance::Balanced
        } else if side_a_total > side_b_total {
            TradeBalance::Ahead { side: TradeSide::A }
        } else {
            TradeBalance::Ahead { side: TradeSide::B }
        }
    }

    pub fn highlight(&self, side: TradeSide) -> SideHighlight {
        match self {
            TradeBalance::Balanced => SideHighlight::Neutral,
            TradeBalance::Ahead { side: ahead } if *ahead == side => SideHighlight::Winning,
            TradeBalance::Ahead { .. } => SideHighlight::Losing,
        }
    }
}

// ==========================================
// TradeSummary - 交易汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSummary {
    pub side_a_total: f64,
    pub side_b_total: f64,
    pub difference: f64,
    pub balance: TradeBalance,
    /// 名单中在当前数据集里找不到的 id（不计入汇总）
    pub missing_ids: Vec<String>,
}

impl TradeSummary {
    pub fn compute(
        dataset: &NormalizedDataset,
        selection: &TradeSelection,
        threshold: f64,
    ) -> Self {
        let mut missing_ids = Vec::new();
        let mut total = |side: TradeSide| -> f64 {
            selection
                .side(side)
                .iter()
                .filter_map(|id| match dataset.get(id) {
                    Some(record) => Some(record.value_score),
                    None => {
                        missing_ids.push(id.clone());
                        None
                    }
                })
                .sum()
        };

        let side_a_total = total(TradeSide::A);
        let side_b_total = total(TradeSide::B);

        Self {
            side_a_total,
            side_b_total,
            difference: (side_a_total - side_b_total).abs(),
            balance: TradeBalance::evaluate(side_a_total, side_b_total, threshold),
            missing_ids,
        }
    }

    pub fn empty(threshold: f64) -> Self {
        Self {
            side_a_total: 0.0,
            side_b_total: 0.0,
            difference: 0.0,
            balance: TradeBalance::evaluate(0.0, 0.0, threshold),
            missing_ids: Vec::new(),
        }
    }
}
