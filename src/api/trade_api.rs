// ==========================================
// 交易API
// ==========================================
// 职责: 交易名单编辑 + 平衡汇总 + 球员搜索
// 说明: 汇总与搜索均为对会话状态的只读查询
// ==========================================

use crate::api::error::ApiError;
use crate::config::TradeConfigReader;
use crate::domain::player::PlayerRecord;
use crate::domain::trade::{SideHighlight, TradeBalance, TradeError, TradeSummary};
use crate::domain::types::TradeSide;
use crate::i18n;
use crate::repository::SessionStore;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// 交易汇总响应
#[derive(Debug, Clone, Serialize)]
pub struct TradeSummaryResponse {
    pub side_a: Vec<PlayerRecord>,
    pub side_b: Vec<PlayerRecord>,
    pub summary: TradeSummary,
    pub highlight_a: SideHighlight,
    pub highlight_b: SideHighlight,
    /// 结论文案（"Balanced Trade" / "Team A Wins"）
    pub verdict: String,
}

/// 交易API
pub struct TradeApi<C: TradeConfigReader> {
    store: Arc<SessionStore>,
    config: C,
}

impl<C: TradeConfigReader> TradeApi<C> {
    pub fn new(store: Arc<SessionStore>, config: C) -> Self {
        Self { store, config }
    }

    /// 将球员加入一方
    ///
    /// # 错误
    /// - NoDataset: 尚未导入数据
    /// - UnknownPlayer: id 不在当前数据集
    /// - AlreadySelected: id 已在任一方
    pub fn add_player(&self, side: TradeSide, player_id: &str) -> Result<TradeSummaryResponse, ApiError> {
        // id 校验与加入在同一临界区内完成, 避免与并发导入交错
        self.store
            .update_selection_with_dataset(|loaded, selection| -> Result<(), ApiError> {
                let loaded = loaded.ok_or(ApiError::NoDataset)?;
                if loaded.dataset.get(player_id).is_none() {
                    return Err(TradeError::UnknownPlayer(player_id.to_string()).into());
                }
                selection.add(side, player_id)?;
                Ok(())
            })??;
        debug!(side = %side, player_id, "球员加入交易");

        self.summary()
    }

    /// 将球员移出一方（不存在时无操作）
    pub fn remove_player(&self, side: TradeSide, player_id: &str) -> Result<TradeSummaryResponse, ApiError> {
        let removed = self
            .store
            .update_selection(|selection| selection.remove(side, player_id))?;
        debug!(side = %side, player_id, removed, "球员移出交易");

        self.summary()
    }

    /// 清空交易, 返回提示信息
    pub fn clear_trade(&self) -> Result<String, ApiError> {
        self.store.update_selection(|selection| selection.clear())?;
        info!("交易已清空");
        Ok(i18n::t_in(self.config.locale(), "trade.cleared", &[]))
    }

    /// 当前交易汇总
    pub fn summary(&self) -> Result<TradeSummaryResponse, ApiError> {
        let threshold = self.config.balance_threshold();
        let selection = self.store.selection()?;

        let (summary, side_a, side_b) = match self.store.dataset()? {
            Some(loaded) => {
                let resolve = |side: TradeSide| -> Vec<PlayerRecord> {
                    selection
                        .side(side)
                        .iter()
                        .filter_map(|id| loaded.dataset.get(id).cloned())
                        .collect()
                };
                (
                    TradeSummary::compute(&loaded.dataset, &selection, threshold),
                    resolve(TradeSide::A),
                    resolve(TradeSide::B),
                )
            }
            None => (TradeSummary::empty(threshold), Vec::new(), Vec::new()),
        };

        Ok(TradeSummaryResponse {
            highlight_a: summary.balance.highlight(TradeSide::A),
            highlight_b: summary.balance.highlight(TradeSide::B),
            verdict: verdict(self.config.locale(), &summary.balance),
            side_a,
            side_b,
            summary,
        })
    }

    /// 按姓名搜索未入选的球员
    pub fn search(&self, query: &str) -> Result<Vec<PlayerRecord>, ApiError> {
        let Some(loaded) = self.store.dataset()? else {
            return Ok(Vec::new());
        };
        let selected: HashSet<String> = self.store.selection()?.selected_ids();

        Ok(loaded
            .dataset
            .search(query, &selected, self.config.search_limit())
            .into_iter()
            .cloned()
            .collect())
    }
}

/// 结论文案
pub fn verdict(locale: &str, balance: &TradeBalance) -> String {
    match balance {
        TradeBalance::Balanced => i18n::t_in(locale, "trade.balanced", &[]),
        TradeBalance::Ahead { side } => {
            i18n::t_in(locale, "trade.side_ahead", &[("side", side.as_str())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::NormalizedDataset;
    use crate::repository::LoadedDataset;
    use chrono::Utc;

    struct TestConfig {
        threshold: f64,
        limit: usize,
    }

    impl TradeConfigReader for TestConfig {
        fn balance_threshold(&self) -> f64 {
            self.threshold
        }

        fn search_limit(&self) -> usize {
            self.limit
        }

        fn locale(&self) -> &str {
            "en"
        }
    }

    fn setup(threshold: f64, limit: usize) -> TradeApi<TestConfig> {
        let store = Arc::new(SessionStore::new());
        let records = [("Ace", 100.5), ("Bo", 60.0), ("Cy", 39.5), ("Dee", 99.5)]
            .iter()
            .enumerate()
            .map(|(idx, (name, score))| PlayerRecord {
                id: PlayerRecord::derive_id(name, idx),
                name: name.to_string(),
                nb10: 1.0,
                value_score: *score,
                ppg: None,
            })
            .collect();
        store
            .replace_dataset(LoadedDataset {
                import_id: "test".to_string(),
                source_name: "test.csv".to_string(),
                loaded_at: Utc::now(),
                dataset: NormalizedDataset::new(records, Vec::new()),
            })
            .unwrap();
        TradeApi::new(store, TestConfig { threshold, limit })
    }

    #[test]
    fn test_side_ahead_verdict() {
        let api = setup(0.5, 50);
        api.add_player(TradeSide::A, "Ace-0").unwrap();
        let response = api.add_player(TradeSide::B, "Dee-3").unwrap();

        assert_eq!(response.summary.balance, TradeBalance::Ahead { side: TradeSide::A });
        assert!((response.summary.difference - 1.0).abs() < 1e-9);
        assert_eq!(response.verdict, "Team A Wins");
        assert_eq!(response.highlight_a, SideHighlight::Winning);
        assert_eq!(response.highlight_b, SideHighlight::Losing);
        assert_eq!(response.side_a[0].name, "Ace");
    }

    #[test]
    fn test_configured_threshold_applies() {
        let api = setup(2.0, 50);
        api.add_player(TradeSide::A, "Ace-0").unwrap();
        let response = api.add_player(TradeSide::B, "Dee-3").unwrap();
        assert_eq!(response.summary.balance, TradeBalance::Balanced);
        assert_eq!(response.verdict, "Balanced Trade");
    }

    #[test]
    fn test_add_rejects_duplicates_and_unknown_ids() {
        let api = setup(0.5, 50);
        api.add_player(TradeSide::A, "Bo-1").unwrap();

        let err = api.add_player(TradeSide::B, "Bo-1").unwrap_err();
        assert_eq!(err.kind(), "already_selected");

        let err = api.add_player(TradeSide::B, "Nobody-7").unwrap_err();
        assert_eq!(err.kind(), "unknown_player");
    }

    #[test]
    fn test_remove_and_clear() {
        let api = setup(0.5, 50);
        api.add_player(TradeSide::A, "Bo-1").unwrap();
        let response = api.remove_player(TradeSide::A, "Bo-1").unwrap();
        assert!(response.side_a.is_empty());

        api.add_player(TradeSide::B, "Cy-2").unwrap();
        assert_eq!(api.clear_trade().unwrap(), "Trade cleared");
        assert!(api.summary().unwrap().side_b.is_empty());
    }

    #[test]
    fn test_search_excludes_selected_and_respects_limit() {
        let api = setup(0.5, 2);
        assert_eq!(api.search("").unwrap().len(), 2);

        api.add_player(TradeSide::A, "Ace-0").unwrap();
        let hits = api.search("E").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Dee");
    }

    #[test]
    fn test_no_dataset() {
        let api = TradeApi::new(
            Arc::new(SessionStore::new()),
            TestConfig {
                threshold: 0.5,
                limit: 50,
            },
        );
        assert_eq!(api.add_player(TradeSide::A, "x").unwrap_err().kind(), "no_dataset");
        assert!(api.search("x").unwrap().is_empty());
        assert_eq!(api.summary().unwrap().summary.balance, TradeBalance::Balanced);
    }
}
