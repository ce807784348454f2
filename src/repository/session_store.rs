// ==========================================
// 球员交易计算器 - 会话状态仓储
// ==========================================
// 职责: 持有当前数据集与交易名单（调用方唯一事实源）
// 红线: 数据集只做整体替换, 不做原地修补
// 红线: 导入失败不得清空或破坏已加载的数据集
// 并发: 多个导入并发时以最后完成者为准
// ==========================================

use crate::domain::player::NormalizedDataset;
use crate::domain::trade::TradeSelection;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, RwLock};
use tracing::info;

// ==========================================
// LoadedDataset - 已加载数据集（含导入元信息）
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct LoadedDataset {
    pub import_id: String,       // 导入批次 ID（uuid v4）
    pub source_name: String,     // 源文件名
    pub loaded_at: DateTime<Utc>, // 加载完成时间
    pub dataset: NormalizedDataset,
}

// ==========================================
// SessionStore
// ==========================================
#[derive(Debug, Default)]
pub struct SessionStore {
    dataset: RwLock<Option<Arc<LoadedDataset>>>,
    selection: RwLock<TradeSelection>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前数据集快照
    pub fn dataset(&self) -> RepositoryResult<Option<Arc<LoadedDataset>>> {
        let guard = self
            .dataset
            .read()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        Ok(guard.clone())
    }

    /// 整体替换数据集, 同时清空交易名单（旧 id 已失效）
    pub fn replace_dataset(&self, loaded: LoadedDataset) -> RepositoryResult<()> {
        let mut dataset = self
            .dataset
            .write()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        let mut selection = self
            .selection
            .write()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        info!(
            import_id = %loaded.import_id,
            players = loaded.dataset.len(),
            "替换当前数据集"
        );
        *dataset = Some(Arc::new(loaded));
        selection.clear();
        Ok(())
    }

    /// 交易名单快照
    pub fn selection(&self) -> RepositoryResult<TradeSelection> {
        let guard = self
            .selection
            .read()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        Ok(guard.clone())
    }

    /// 持有数据集读锁的同时修改交易名单
    ///
    /// 加锁顺序与 replace_dataset 一致（先数据集后名单）, 期间数据集不会被替换
    pub fn update_selection_with_dataset<F, T>(&self, f: F) -> RepositoryResult<T>
    where
        F: FnOnce(Option<&LoadedDataset>, &mut TradeSelection) -> T,
    {
        let dataset = self
            .dataset
            .read()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        let mut selection = self
            .selection
            .write()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        Ok(f(dataset.as_deref(), &mut selection))
    }

    /// 在写锁内修改交易名单
    pub fn update_selection<F, T>(&self, f: F) -> RepositoryResult<T>
    where
        F: FnOnce(&mut TradeSelection) -> T,
    {
        let mut guard = self
            .selection
            .write()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        Ok(f(&mut guard))
    }
}
