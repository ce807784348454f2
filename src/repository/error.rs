// ==========================================
// 球员交易计算器 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepositoryError {
    #[error("状态锁获取失败: {0}")]
    LockError(String),
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
