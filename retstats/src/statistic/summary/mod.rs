//! Summary 统计摘要模块
//!
//! 本模块提供了收益率表的统计摘要。
//!
//! # 核心概念
//!
//! - **ColumnStats**: 单列（单个资产或策略）的全部统计量
//! - **ReturnStats**: 按输入列顺序组织的 [`ColumnStats`] 集合
//!
//! [`ReturnStats`] 是一个不可变的值对象，每次计算都从头生成，不做增量更新。

use crate::{
    FnvIndexMap, Timed,
    error::RetStatsError,
    statistic::{
        algorithm::SampleMoments,
        metric::{
            drawdown::{DrawdownSeries, wealth_index},
            information_ratio::InformationRatio,
            kurtosis::ScaledKurtosis,
            rate_of_return::RateOfReturn,
            volatility::Volatility,
            year_on_year::{AnnualValue, year_on_year},
        },
        time::AnnualisationInterval,
    },
    table::Observations,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use tracing::{debug, warn};

/// 显示格式化模块。
pub mod display;

/// 单列收益率的全部统计量。
///
/// ## 字段说明
///
/// - **observations**: 收益率观测值数量
/// - **ann_return**: 年化收益率
/// - **ann_vol**: 年化波动率
/// - **info_ratio**: 信息比率
/// - **kurtosis**: 按年化因子缩放的超额峰度
/// - **wealth_index**: 复利财富指数
/// - **drawdown**: 回撤序列及最大回撤
/// - **yoy_returns**: 同比收益率
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ColumnStats<Interval> {
    pub observations: usize,
    pub ann_return: RateOfReturn<Interval>,
    pub ann_vol: Volatility<Interval>,
    pub info_ratio: InformationRatio<Interval>,
    pub kurtosis: ScaledKurtosis<Interval>,
    pub wealth_index: Vec<Timed<f64>>,
    pub drawdown: DrawdownSeries,
    pub yoy_returns: Vec<AnnualValue>,
}

impl<Interval> ColumnStats<Interval>
where
    Interval: AnnualisationInterval,
{
    /// 从一列收益率及其时间索引计算 [`ColumnStats`]。
    ///
    /// 退化情况（单个观测值、零波动率等）以 `NaN`/`Inf` 哨兵值保留在结果中。
    pub fn calculate(index: &[DateTime<Utc>], returns: &[f64], interval: Interval) -> Self {
        let moments = SampleMoments::calculate(returns);

        let ann_return = RateOfReturn::calculate(moments.mean, interval);
        let ann_vol = Volatility::calculate(moments.std_dev(), interval);
        let info_ratio = InformationRatio::calculate(&ann_return, &ann_vol);
        let kurtosis = ScaledKurtosis::calculate(returns, interval);

        let wealth_index = wealth_index(index, returns);
        let drawdown = DrawdownSeries::calculate(&wealth_index);
        let yoy_returns = year_on_year(&wealth_index);

        Self {
            observations: moments.count,
            ann_return,
            ann_vol,
            info_ratio,
            kurtosis,
            wealth_index,
            drawdown,
            yoy_returns,
        }
    }

    /// 最大回撤值（≤ 0）。
    pub fn max_drawdown(&self) -> f64 {
        self.drawdown.max_value()
    }

    /// 任一标量统计量为 `NaN` 或 `Inf` 时返回 `true`。
    pub fn is_degenerate(&self) -> bool {
        [
            self.ann_return.value,
            self.ann_vol.value,
            self.info_ratio.value,
            self.max_drawdown(),
            self.kurtosis.value,
        ]
        .iter()
        .any(|value| !value.is_finite())
    }
}

/// 收益率表的统计摘要，按输入列顺序保存每列的 [`ColumnStats`]。
///
/// # 使用示例
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use retstats::{
///     statistic::{summary::ReturnStats, time::Monthly},
///     table::Observations,
/// };
///
/// let index = (1..=6)
///     .map(|month| Utc.with_ymd_and_hms(2024, month, 28, 0, 0, 0).unwrap())
///     .collect();
///
/// let returns = Observations::new(
///     index,
///     [("Fund", vec![0.01, 0.02, -0.01, 0.03, 0.0, 0.01])],
/// )
/// .unwrap();
///
/// let stats = ReturnStats::calculate(&returns, Monthly).unwrap();
///
/// assert_eq!(stats.summary().len(), 1);
/// assert!(stats.drawdowns()["Fund"] < 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReturnStats<Interval> {
    /// 年化间隔。
    pub interval: Interval,
    /// 每列的收益率观测值数量。
    pub observations: usize,
    /// 按输入列顺序排列的每列统计量。
    pub columns: FnvIndexMap<SmolStr, ColumnStats<Interval>>,
}

impl<Interval> ReturnStats<Interval>
where
    Interval: AnnualisationInterval,
{
    /// 从收益率表计算 [`ReturnStats`]。
    ///
    /// 输入在计算开始前校验：至少 1 行、至少 1 列、所有观测值有限、年化因子为正。
    pub fn calculate(returns: &Observations, interval: Interval) -> Result<Self, RetStatsError> {
        interval.validated_factor()?;
        returns.validate(1)?;

        let columns = returns
            .columns()
            .map(|(name, values)| {
                let stats = ColumnStats::calculate(returns.index(), values, interval);

                debug!(
                    column = %name,
                    ann_return = stats.ann_return.value,
                    ann_vol = stats.ann_vol.value,
                    max_drawdown = stats.max_drawdown(),
                    "ReturnStats calculated column"
                );

                if stats.is_degenerate() {
                    warn!(
                        column = %name,
                        observations = stats.observations,
                        "ReturnStats column produced non-finite statistics"
                    );
                }

                (name.clone(), stats)
            })
            .collect();

        Ok(Self {
            interval,
            observations: returns.len(),
            columns,
        })
    }
}

impl<Interval> ReturnStats<Interval> {
    /// 按名称查找列统计量。
    pub fn column(&self, name: &str) -> Option<&ColumnStats<Interval>> {
        self.columns.get(name)
    }

    /// 按输入列顺序返回列名。
    pub fn column_names(&self) -> impl Iterator<Item = &SmolStr> {
        self.columns.keys()
    }

    /// 每列的年化收益率。
    pub fn ann_returns(&self) -> FnvIndexMap<SmolStr, f64> {
        self.map_columns(|stats| stats.ann_return.value)
    }

    /// 每列的年化波动率。
    pub fn ann_vol(&self) -> FnvIndexMap<SmolStr, f64> {
        self.map_columns(|stats| stats.ann_vol.value)
    }

    /// 每列的信息比率。
    pub fn info_ratio(&self) -> FnvIndexMap<SmolStr, f64> {
        self.map_columns(|stats| stats.info_ratio.value)
    }

    /// 每列的最大回撤（≤ 0）。
    pub fn drawdowns(&self) -> FnvIndexMap<SmolStr, f64> {
        self.map_columns(|stats| stats.drawdown.max_value())
    }

    /// 每列按 `1 / sqrt(年化因子)` 缩放的超额峰度。
    pub fn kurtosis(&self) -> FnvIndexMap<SmolStr, f64> {
        self.map_columns(|stats| stats.kurtosis.value)
    }

    /// 每列的同比收益率序列。
    pub fn yoy_rets(&self) -> FnvIndexMap<SmolStr, Vec<AnnualValue>> {
        self.map_columns(|stats| stats.yoy_returns.clone())
    }

    /// 每列的完整回撤序列。
    pub fn drawdown_series(&self) -> FnvIndexMap<SmolStr, Vec<Timed<f64>>> {
        self.map_columns(|stats| stats.drawdown.series.clone())
    }

    fn map_columns<T, F>(&self, f: F) -> FnvIndexMap<SmolStr, T>
    where
        F: Fn(&ColumnStats<Interval>) -> T,
    {
        self.columns
            .iter()
            .map(|(name, stats)| (name.clone(), f(stats)))
            .collect()
    }
}
