// ==========================================
// 球员交易计算器 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::Arc;

use crate::api::{ImportApi, TradeApi};
use crate::config::AppConfig;
use crate::importer::TabularImportEngine;
use crate::repository::SessionStore;

/// 应用状态
///
/// 包含所有API实例和共享资源, 由界面层持有
pub struct AppState {
    /// 应用配置
    pub config: AppConfig,

    /// 会话状态（数据集 + 交易名单）
    pub store: Arc<SessionStore>,

    /// 导入API
    pub import_api: Arc<ImportApi>,

    /// 交易API
    pub trade_api: Arc<TradeApi<AppConfig>>,
}

impl AppState {
    /// 创建新的AppState实例
    pub fn new(config: AppConfig) -> Self {
        tracing::info!(locale = %config.locale, "初始化AppState");

        let store = Arc::new(SessionStore::new());
        let engine = Arc::new(TabularImportEngine::new());

        let import_api = Arc::new(ImportApi::new(
            engine,
            Arc::clone(&store),
            config.locale.clone(),
        ));
        let trade_api = Arc::new(TradeApi::new(Arc::clone(&store), config.clone()));

        Self {
            config,
            store,
            import_api,
            trade_api,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
