//! Information Ratio 信息比率模块
//!
//! 本模块提供了 Information Ratio（信息比率）的计算逻辑。
//! 信息比率是年化收益率与年化波动率之比，是一种风险调整后的绩效指标。
//!
//! # 计算公式
//!
//! `Information Ratio = 年化收益率 / 年化波动率`
//!
//! # 参考文档
//!
//! <https://www.investopedia.com/terms/i/informationratio.asp>

use crate::statistic::{
    metric::{rate_of_return::RateOfReturn, volatility::Volatility},
    time::AnnualisationInterval,
};
use serde::{Deserialize, Serialize};

/// 表示特定 [`AnnualisationInterval`] 下的 Information Ratio 值。
///
/// ## 特殊情况
///
/// 波动率为零时不做特殊处理：正收益得到 `+Inf`，负收益得到 `-Inf`，
/// 零收益得到 `NaN`。这些哨兵值会原样保留在结果中。
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct InformationRatio<Interval> {
    /// Information Ratio 值。
    pub value: f64,
    /// 年化间隔。
    pub interval: Interval,
}

impl<Interval> InformationRatio<Interval>
where
    Interval: AnnualisationInterval,
{
    /// 从年化 [`RateOfReturn`] 和年化 [`Volatility`] 计算 [`InformationRatio`]。
    pub fn calculate(
        rate_of_return: &RateOfReturn<Interval>,
        volatility: &Volatility<Interval>,
    ) -> Self {
        Self {
            value: rate_of_return.value / volatility.value,
            interval: rate_of_return.interval,
        }
    }
}
