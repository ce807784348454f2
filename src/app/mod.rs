// ==========================================
// 球员交易计算器 - 应用层
// ==========================================

pub mod state;

pub use state::AppState;
