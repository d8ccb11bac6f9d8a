//! Rate Of Return 收益率模块
//!
//! 本模块提供了年化收益率的计算逻辑。
//! 收益率随时间线性缩放：日均收益率乘以年化因子即为年化收益率。
//!
//! # 计算公式
//!
//! `年化收益率 = 平均收益率 × 年化因子`
//!
//! # 参考文档
//!
//! <https://www.investopedia.com/terms/r/rateofreturn.asp>

use crate::statistic::time::AnnualisationInterval;
use serde::{Deserialize, Serialize};

/// 表示在特定 [`AnnualisationInterval`] 下年化的 Rate Of Return 值。
///
/// 与风险指标使用平方根缩放不同，收益率使用线性缩放。例如，1% 的日收益率
/// 在 [`Annual252`](crate::statistic::time::Annual252) 下年化为 252%。
/// 这假设简单利息而不是复利。
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct RateOfReturn<Interval> {
    /// 年化收益率值。
    pub value: f64,
    /// 年化间隔。
    pub interval: Interval,
}

impl<Interval> RateOfReturn<Interval>
where
    Interval: AnnualisationInterval,
{
    /// 从每期平均收益率计算年化 [`RateOfReturn`]。
    pub fn calculate(mean_return: f64, interval: Interval) -> Self {
        Self {
            value: mean_return * interval.periods_per_year(),
            interval,
        }
    }
}
