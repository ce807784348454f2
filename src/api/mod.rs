// ==========================================
// 球员交易计算器 - API 层
// ==========================================
// 职责: 面向调用方（界面层）的业务接口
// ==========================================

pub mod error;
pub mod import_api;
pub mod trade_api;

pub use error::ApiError;
pub use import_api::{ImportApi, ImportApiResponse};
pub use trade_api::{TradeApi, TradeSummaryResponse};
