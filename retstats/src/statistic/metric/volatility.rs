//! Volatility 波动率模块
//!
//! 本模块提供了年化波动率的计算逻辑。
//! 波动率假设收益率独立同分布（IID），因此按年化因子的平方根缩放。
//!
//! # 计算公式
//!
//! `年化波动率 = 样本标准差 × sqrt(年化因子)`

use crate::statistic::time::AnnualisationInterval;
use serde::{Deserialize, Serialize};

/// 表示在特定 [`AnnualisationInterval`] 下年化的波动率。
///
/// 样本标准差使用 Bessel 校正（除以 N-1），因此单个观测值的波动率为 `NaN`。
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Volatility<Interval> {
    /// 年化波动率值。
    pub value: f64,
    /// 年化间隔。
    pub interval: Interval,
}

impl<Interval> Volatility<Interval>
where
    Interval: AnnualisationInterval,
{
    /// 从每期样本标准差计算年化 [`Volatility`]。
    pub fn calculate(std_dev_returns: f64, interval: Interval) -> Self {
        Self {
            value: std_dev_returns * interval.periods_per_year().sqrt(),
            interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        statistic::time::{Annual252, Quarterly},
        test_utils::f64_is_eq,
    };

    #[test]
    fn test_volatility_calculate() {
        struct TestCase {
            std_dev: f64,
            expected: f64,
        }

        let cases = vec![
            // TC0: 1% daily standard deviation
            TestCase {
                std_dev: 0.01,
                expected: 0.158_745_078_663_875_43,
            },
            // TC1: zero standard deviation
            TestCase {
                std_dev: 0.0,
                expected: 0.0,
            },
            // TC2: undefined standard deviation propagates
            TestCase {
                std_dev: f64::NAN,
                expected: f64::NAN,
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = Volatility::calculate(test.std_dev, Annual252);
            assert!(f64_is_eq(actual.value, test.expected, 1e-12), "TC{index} failed");
        }
    }

    #[test]
    fn test_volatility_quarterly() {
        let actual = Volatility::calculate(0.05, Quarterly);

        assert!(f64_is_eq(actual.value, 0.1, 1e-12));
        assert_eq!(actual.interval, Quarterly);
    }
}
