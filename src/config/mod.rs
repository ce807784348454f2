// ==========================================
// 球员交易计算器 - 配置层
// ==========================================
// 职责: 应用配置加载与校验
// 存储: JSON 文件
// ==========================================

pub mod app_config;
pub mod config_reader;

// 重导出
pub use app_config::{AppConfig, ConfigError};
pub use config_reader::TradeConfigReader;
