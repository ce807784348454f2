// ==========================================
// 球员交易计算器 - 应用配置
// ==========================================
// 存储: JSON 文件（默认位于系统配置目录）
// 缺失文件 → 默认值; 格式错误 → ConfigError
// ==========================================

use crate::config::config_reader::TradeConfigReader;
use crate::domain::trade::DEFAULT_BALANCE_THRESHOLD;
use crate::i18n;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// 配置目录名
pub const CONFIG_DIR_NAME: &str = "dynasty-trade";
/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.json";

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("配置文件格式错误 ({path}): {message}")]
    ParseError { path: String, message: String },

    #[error("配置值无效 (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },
}

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 提示信息语言（"en" / "zh-CN"）
    pub locale: String,
    /// 平衡阈值
    pub balance_threshold: f64,
    /// 搜索结果上限
    pub search_limit: usize,
    /// 日志过滤器（RUST_LOG 未设置时生效）
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            balance_threshold: DEFAULT_BALANCE_THRESHOLD,
            search_limit: 50,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 默认配置文件路径: <config_dir>/dynasty-trade/config.json
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// 从文件加载并校验
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: AppConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.validate()?;
        info!(path = %path.display(), "配置加载完成");
        Ok(config)
    }

    /// 加载配置; 文件不存在时返回默认值
    ///
    /// # 参数
    /// - path: 显式路径; None 时使用 default_path()
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(p) => p,
            None => {
                warn!("无法确定配置目录, 使用默认配置");
                return Ok(Self::default());
            }
        };

        if !path.exists() {
            info!(path = %path.display(), "配置文件不存在, 使用默认配置");
            return Ok(Self::default());
        }

        Self::load(path)
    }

    /// 校验配置值
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.balance_threshold.is_finite() || self.balance_threshold < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "balance_threshold".to_string(),
                value: self.balance_threshold.to_string(),
                message: "必须为非负有限数".to_string(),
            });
        }

        if self.search_limit == 0 {
            return Err(ConfigError::InvalidValue {
                key: "search_limit".to_string(),
                value: "0".to_string(),
                message: "必须 >= 1".to_string(),
            });
        }

        if !i18n::is_supported(&self.locale) {
            return Err(ConfigError::InvalidValue {
                key: "locale".to_string(),
                value: self.locale.clone(),
                message: format!("可选值: {}", i18n::SUPPORTED_LOCALES.join(", ")),
            });
        }

        Ok(())
    }
}

impl TradeConfigReader for AppConfig {
    fn balance_threshold(&self) -> f64 {
        self.balance_threshold
    }

    fn search_limit(&self) -> usize {
        self.search_limit
    }

    fn locale(&self) -> &str {
        &self.locale
    }
}
