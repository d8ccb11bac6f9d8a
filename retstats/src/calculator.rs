//! ReturnStatsCalculator 收益统计计算器模块
//!
//! 本模块提供了持有最近一次计算结果的 [`ReturnStatsCalculator`]。
//!
//! # 工作流程
//!
//! 1. 调用 `compute_from_prices`（价格表）或 `compute_from_returns`（收益率表）
//! 2. 输入校验失败时立即返回错误，已有结果保持不变
//! 3. 计算成功后替换内部的 [`ReturnStats`]，并通过访问器读取
//!
//! 在任何成功计算之前调用访问器会返回 [`RetStatsError::NotComputed`]。

use crate::{
    FnvIndexMap, Timed,
    error::RetStatsError,
    returns::{PercentChange, ReturnsCalculator},
    statistic::{
        metric::year_on_year::AnnualValue, summary::ReturnStats, time::AnnualisationInterval,
    },
    table::Observations,
};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use tracing::info;

/// 收益统计计算器，持有最近一次成功计算的 [`ReturnStats`]。
///
/// 每个实例独占自己的结果；计算方法需要 `&mut self`，因此同一实例上的并发计算
/// 必须由调用方串行化。
///
/// ## 类型参数
///
/// - `Interval`: 年化间隔类型
/// - `Returns`: 价格到收益率的转换器，默认为 [`PercentChange`]
///
/// # 使用示例
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use retstats::{
///     calculator::ReturnStatsCalculator, statistic::time::Annual252, table::Observations,
/// };
///
/// let index = (1..=4)
///     .map(|day| Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap())
///     .collect();
/// let prices = Observations::new(index, [("AssetA", vec![100.0, 110.0, 99.0, 108.0])]).unwrap();
///
/// let mut calculator = ReturnStatsCalculator::new();
/// calculator.compute_from_prices(&prices, Annual252).unwrap();
///
/// let drawdowns = calculator.drawdowns().unwrap();
/// assert!((drawdowns["AssetA"] + 0.1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReturnStatsCalculator<Interval, Returns = PercentChange> {
    returns_calculator: Returns,
    stats: Option<ReturnStats<Interval>>,
}

impl<Interval> ReturnStatsCalculator<Interval> {
    /// 使用默认 [`PercentChange`] 收益率转换器构造计算器。
    pub fn new() -> Self {
        Self::with_returns_calculator(PercentChange)
    }
}

impl<Interval> Default for ReturnStatsCalculator<Interval> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Interval, Returns> ReturnStatsCalculator<Interval, Returns> {
    /// 使用自定义 [`ReturnsCalculator`] 构造计算器。
    pub fn with_returns_calculator(returns_calculator: Returns) -> Self {
        Self {
            returns_calculator,
            stats: None,
        }
    }
}

impl<Interval, Returns> ReturnStatsCalculator<Interval, Returns>
where
    Interval: AnnualisationInterval,
    Returns: ReturnsCalculator,
{
    /// 从价格表计算收益统计。
    ///
    /// 先通过 [`ReturnsCalculator`] 得到收益率表（比价格表少一行），再委托给
    /// [`Self::compute_from_returns`]。价格表至少需要 2 行。
    pub fn compute_from_prices(
        &mut self,
        prices: &Observations,
        interval: Interval,
    ) -> Result<&ReturnStats<Interval>, RetStatsError> {
        interval.validated_factor()?;
        let returns = self.returns_calculator.percent_change(prices)?;
        self.compute_from_returns(&returns, interval)
    }

    /// 从收益率表计算收益统计，并替换已有结果。
    ///
    /// 收益率表至少需要 1 行；校验失败时已有结果保持不变。
    pub fn compute_from_returns(
        &mut self,
        returns: &Observations,
        interval: Interval,
    ) -> Result<&ReturnStats<Interval>, RetStatsError> {
        let stats = ReturnStats::calculate(returns, interval)?;

        info!(
            columns = stats.columns.len(),
            observations = stats.observations,
            interval = %interval.name(),
            "ReturnStatsCalculator computed ReturnStats"
        );

        Ok(self.stats.insert(stats))
    }
}

impl<Interval, Returns> ReturnStatsCalculator<Interval, Returns> {
    /// 最近一次成功计算的 [`ReturnStats`]。
    pub fn stats(&self) -> Result<&ReturnStats<Interval>, RetStatsError> {
        self.stats.as_ref().ok_or(RetStatsError::NotComputed)
    }

    /// 每列的年化收益率。
    pub fn ann_returns(&self) -> Result<FnvIndexMap<SmolStr, f64>, RetStatsError> {
        self.stats().map(ReturnStats::ann_returns)
    }

    /// 每列的年化波动率。
    pub fn ann_vol(&self) -> Result<FnvIndexMap<SmolStr, f64>, RetStatsError> {
        self.stats().map(ReturnStats::ann_vol)
    }

    /// 每列的信息比率。
    pub fn info_ratio(&self) -> Result<FnvIndexMap<SmolStr, f64>, RetStatsError> {
        self.stats().map(ReturnStats::info_ratio)
    }

    /// 每列的最大回撤。
    pub fn drawdowns(&self) -> Result<FnvIndexMap<SmolStr, f64>, RetStatsError> {
        self.stats().map(ReturnStats::drawdowns)
    }

    /// 每列按 `1 / sqrt(年化因子)` 缩放的超额峰度。
    pub fn kurtosis(&self) -> Result<FnvIndexMap<SmolStr, f64>, RetStatsError> {
        self.stats().map(ReturnStats::kurtosis)
    }

    /// 每列的同比收益率序列。
    pub fn yoy_rets(&self) -> Result<FnvIndexMap<SmolStr, Vec<AnnualValue>>, RetStatsError> {
        self.stats().map(ReturnStats::yoy_rets)
    }

    /// 每列的完整回撤序列。
    pub fn drawdown_series(
        &self,
    ) -> Result<FnvIndexMap<SmolStr, Vec<Timed<f64>>>, RetStatsError> {
        self.stats().map(ReturnStats::drawdown_series)
    }

    /// 每列一行的摘要字符串。
    pub fn summary(&self) -> Result<Vec<String>, RetStatsError> {
        self.stats().map(ReturnStats::summary)
    }
}
