// ==========================================
// 球员交易计算器 - 交易配置读取 Trait
// ==========================================
// 职责: 定义交易层所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入; 不影响列角色推断
// ==========================================

// ==========================================
// TradeConfigReader Trait
// ==========================================
// 用途: 交易层所需的配置读取接口
// 实现者: AppConfig
pub trait TradeConfigReader: Send + Sync {
    /// 获取平衡阈值
    ///
    /// # 返回
    /// - f64: 双方差值严格小于该值视为平衡
    ///
    /// # 默认值
    /// - 0.5
    fn balance_threshold(&self) -> f64;

    /// 获取搜索结果上限
    ///
    /// # 默认值
    /// - 50
    fn search_limit(&self) -> usize;

    /// 获取提示信息语言
    ///
    /// # 默认值
    /// - "en"
    fn locale(&self) -> &str;
}
