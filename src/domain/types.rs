// ==========================================
// 球员交易计算器 - 领域枚举类型
// ==========================================
// 职责: 列角色 / 跳过原因 / 交易方 等基础枚举
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// ColumnRole - 列角色
// ==========================================
// 用途: 逻辑含义 → 表头的映射键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnRole {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "nb10")]
    Nb10,
    #[serde(rename = "valueScore")]
    ValueScore,
    #[serde(rename = "ppg")]
    Ppg,
}

impl ColumnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnRole::Name => "name",
            ColumnRole::Nb10 => "nb10",
            ColumnRole::ValueScore => "valueScore",
            ColumnRole::Ppg => "ppg",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// SkipReason - 行被跳过的原因
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    EmptyName,       // 姓名为空
    InvalidNb10,     // NB10 无法解析
    InvalidValueScore, // Value Score 无法解析
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::EmptyName => "EMPTY_NAME",
            SkipReason::InvalidNb10 => "INVALID_NB10",
            SkipReason::InvalidValueScore => "INVALID_VALUE_SCORE",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// TradeSide - 交易方
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeSide {
    A,
    B,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::A => "A",
            TradeSide::B => "B",
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
