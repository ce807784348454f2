// ==========================================
// 球员交易计算器 - API层错误类型
// ==========================================
// 职责: 汇总各层错误, 提供面向用户的提示信息
// 说明: 所有错误均可在调用方边界恢复, 不应导致进程退出
// ==========================================

use crate::config::ConfigError;
use crate::domain::trade::TradeError;
use crate::i18n;
use crate::importer::ImportError;
use crate::repository::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 导入错误
    // ==========================================
    #[error("文件导入失败: {0}")]
    ImportError(#[from] ImportError),

    // ==========================================
    // 交易操作错误
    // ==========================================
    #[error("交易操作失败: {0}")]
    TradeError(#[from] TradeError),

    #[error("尚未加载球员数据")]
    NoDataset,

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),
}

impl ApiError {
    /// 稳定的错误类别码
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::ImportError(e) => e.kind(),
            ApiError::TradeError(TradeError::AlreadySelected { .. }) => "already_selected",
            ApiError::TradeError(TradeError::UnknownPlayer(_)) => "unknown_player",
            ApiError::NoDataset => "no_dataset",
            ApiError::ConfigError(_) => "config_error",
            ApiError::InternalError(_) => "internal_error",
        }
    }

    /// 面向用户的提示信息
    pub fn user_message(&self, locale: &str) -> String {
        match self {
            ApiError::ImportError(e) => e.user_message(locale),
            ApiError::TradeError(TradeError::AlreadySelected { id, side }) => i18n::t_in(
                locale,
                "trade.already_selected",
                &[("id", id), ("side", side.as_str())],
            ),
            ApiError::TradeError(TradeError::UnknownPlayer(id)) => {
                i18n::t_in(locale, "trade.unknown_player", &[("id", id)])
            }
            ApiError::NoDataset => i18n::t_in(locale, "trade.no_dataset", &[]),
            ApiError::ConfigError(reason) => {
                i18n::t_in(locale, "error.config", &[("reason", reason)])
            }
            ApiError::InternalError(reason) => {
                i18n::t_in(locale, "error.internal", &[("reason", reason)])
            }
        }
    }
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::LockError(msg) => {
                ApiError::InternalError(format!("状态锁获取失败: {}", msg))
            }
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
