// ==========================================
// 球员交易计算器 - 仓储层
// ==========================================
// 职责: 调用方持有的会话状态（内存）
// 说明: 跨会话持久化不在本层范围内
// ==========================================

pub mod error;
pub mod session_store;

pub use error::{RepositoryError, RepositoryResult};
pub use session_store::{LoadedDataset, SessionStore};
