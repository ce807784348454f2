// ==========================================
// 球员交易计算器 - 领域层
// ==========================================
// 职责: 实体与类型定义（无 IO）
// ==========================================

pub mod player;
pub mod table;
pub mod trade;
pub mod types;

// 重导出核心类型
pub use player::{NormalizedDataset, PlayerRecord, SkippedRow};
pub use table::{RawCell, RawRow, RawTable};
pub use trade::{
    SideHighlight, TradeBalance, TradeError, TradeSelection, TradeSummary,
    DEFAULT_BALANCE_THRESHOLD,
};
pub use types::{ColumnRole, SkipReason, TradeSide};
