// ==========================================
// 球员交易计算器 - 核心库
// ==========================================
// 核心: 表格数据导入与规范化引擎
//   列角色推断 → 行转换/校验 → 排序后的规范化数据集
// 外围: 会话状态、交易平衡汇总、配置、日志、国际化
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 表格数据导入引擎
pub mod importer;

// 数据仓储层 - 会话状态
pub mod repository;

// 配置层 - 应用配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态装配
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    ColumnRole, NormalizedDataset, PlayerRecord, SkipReason, TradeBalance, TradeSelection,
    TradeSide, TradeSummary,
};

// 导入引擎
pub use importer::{ImportError, ImportResult, TabularImportEngine};

// API
pub use api::{ApiError, ImportApi, TradeApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Dynasty Trade Calculator";
