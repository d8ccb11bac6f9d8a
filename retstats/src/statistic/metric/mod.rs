//! Metric 金融指标模块
//!
//! 本模块提供了收益统计中各项金融指标的计算逻辑。
//! 年化指标都携带其 [`AnnualisationInterval`](crate::statistic::time::AnnualisationInterval)。
//!
//! # 核心指标
//!
//! - **Rate Of Return**: 年化收益率
//! - **Volatility**: 年化波动率
//! - **Information Ratio**: 信息比率
//! - **Kurtosis**: 按年化因子缩放的超额峰度
//! - **Drawdown**: 财富指数回撤与最大回撤
//! - **Year On Year**: 同比收益率

/// Drawdown 回撤计算逻辑。
pub mod drawdown;

/// Information Ratio 信息比率计算逻辑。
pub mod information_ratio;

/// Kurtosis 峰度计算逻辑。
pub mod kurtosis;

/// Rate Of Return 收益率计算逻辑。
pub mod rate_of_return;

/// Volatility 波动率计算逻辑。
pub mod volatility;

/// Year On Year 同比收益率计算逻辑。
pub mod year_on_year;
