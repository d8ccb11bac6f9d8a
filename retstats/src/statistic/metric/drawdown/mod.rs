//! Drawdown 回撤模块
//!
//! 本模块提供了基于复利财富指数的回撤计算逻辑。
//! 回撤是财富指数相对其历史峰值（扩展窗口最大值，最小窗口为 1 个观测值）的下降幅度。
//!
//! # 核心概念
//!
//! - **wealth_index**: 通过复利收益率构建的财富指数
//! - **DrawdownGenerator**: 跟踪运行峰值并逐点生成回撤
//! - **DrawdownSeries**: 完整回撤序列及其最大回撤
//! - **MaxDrawdown**: 最大（最负）回撤
//!
//! # 计算公式
//!
//! - `index[0] = 1 + r[0]`，`index[t] = index[t-1] × (1 + r[t])`
//! - `drawdown[t] = index[t] / max(index[0..=t]) - 1`（始终 ≤ 0）
//!
//! # 参考文档
//!
//! <https://www.investopedia.com/terms/d/drawdown.asp>

use crate::{
    Timed,
    statistic::metric::drawdown::max::{MaxDrawdown, MaxDrawdownGenerator},
};
use chrono::{DateTime, Utc};
use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// 最大回撤计算逻辑。
pub mod max;

/// 通过复利收益率构建财富指数（1 单位货币的增长路径）。
///
/// 返回序列与输入等长，每个值带有对应的时间戳。
pub fn wealth_index(index: &[DateTime<Utc>], returns: &[f64]) -> Vec<Timed<f64>> {
    index
        .iter()
        .zip(returns)
        .scan(1.0, |wealth, (time, value)| {
            *wealth *= 1.0 + value;
            Some(Timed::new(*wealth, *time))
        })
        .collect()
}

/// 逐点回撤生成器。
///
/// 维护财富指数的运行峰值，并对每个新值生成相对峰值的回撤，
/// 同时通过 [`MaxDrawdownGenerator`] 跟踪最大回撤。
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize, Constructor)]
pub struct DrawdownGenerator {
    /// 当前峰值。
    pub peak: Option<Timed<f64>>,
    /// 最大回撤跟踪器。
    pub max: MaxDrawdownGenerator,
}

impl DrawdownGenerator {
    /// 使用下一个财富指数值更新运行峰值，并返回该时刻的回撤。
    pub fn update(&mut self, point: Timed<f64>) -> Timed<f64> {
        let peak = match self.peak {
            // NaN never replaces the running peak
            Some(peak) if point.value <= peak.value || point.value.is_nan() => peak,
            _ => {
                self.peak = Some(point);
                point
            }
        };

        let drawdown = Timed::new(point.value / peak.value - 1.0, point.time);

        self.max.update(MaxDrawdown {
            value: drawdown.value,
            time_peak: peak.time,
            time_trough: point.time,
        });

        drawdown
    }
}

/// 财富指数的完整回撤序列及其最大回撤。
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct DrawdownSeries {
    /// 每个观测时刻的回撤（≤ 0）。
    pub series: Vec<Timed<f64>>,
    /// 最大（最负）回撤，空序列时为 `None`。
    pub max: Option<MaxDrawdown>,
}

impl DrawdownSeries {
    /// 从财富指数计算 [`DrawdownSeries`]。
    pub fn calculate(wealth_index: &[Timed<f64>]) -> Self {
        let mut generator = DrawdownGenerator::default();

        let series = wealth_index
            .iter()
            .map(|point| generator.update(*point))
            .collect();

        Self {
            series,
            max: generator.max.generate(),
        }
    }

    /// 最大回撤值，空序列时为 `NaN`。
    pub fn max_value(&self) -> f64 {
        self.max.as_ref().map_or(f64::NAN, |max| max.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{f64_is_eq, time_plus_days, time_start};

    fn index(rows: u64) -> Vec<DateTime<Utc>> {
        (0..rows).map(|day| time_plus_days(time_start(), day)).collect()
    }

    #[test]
    fn test_wealth_index_compounds_returns() {
        let returns = [0.1, -0.1, 0.5];

        let actual = wealth_index(&index(3), &returns);

        let expected = [1.1, 0.99, 1.485];
        assert_eq!(actual.len(), expected.len());
        for (index, (actual, expected)) in actual.iter().zip(expected).enumerate() {
            assert!(f64_is_eq(actual.value, expected, 1e-12), "TC{index} failed");
            assert_eq!(actual.time, time_plus_days(time_start(), index as u64));
        }
    }

    #[test]
    fn test_drawdown_generator_update() {
        struct TestCase {
            input: Timed<f64>,
            expected_peak: Timed<f64>,
            expected_output: f64,
        }

        let time_base = time_start();
        let mut generator = DrawdownGenerator::default();

        let cases = vec![
            // TC0: first value becomes the peak
            TestCase {
                input: Timed::new(1.1, time_base),
                expected_peak: Timed::new(1.1, time_base),
                expected_output: 0.0,
            },
            // TC1: first drawdown
            TestCase {
                input: Timed::new(0.99, time_plus_days(time_base, 1)),
                expected_peak: Timed::new(1.1, time_base),
                expected_output: -0.1,
            },
            // TC2: partial recovery (still in drawdown)
            TestCase {
                input: Timed::new(1.08, time_plus_days(time_base, 2)),
                expected_peak: Timed::new(1.1, time_base),
                expected_output: 1.08 / 1.1 - 1.0,
            },
            // TC3: equal to previous peak keeps the earlier peak
            TestCase {
                input: Timed::new(1.1, time_plus_days(time_base, 3)),
                expected_peak: Timed::new(1.1, time_base),
                expected_output: 0.0,
            },
            // TC4: new peak
            TestCase {
                input: Timed::new(1.2, time_plus_days(time_base, 4)),
                expected_peak: Timed::new(1.2, time_plus_days(time_base, 4)),
                expected_output: 0.0,
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let output = generator.update(test.input);
            assert_eq!(generator.peak, Some(test.expected_peak), "TC{index} failed");
            assert!(
                f64_is_eq(output.value, test.expected_output, 1e-12),
                "TC{index} failed"
            );
            assert_eq!(output.time, test.input.time, "TC{index} failed");
        }

        let max = generator.max.generate().unwrap();
        assert!(f64_is_eq(max.value, -0.1, 1e-12));
        assert_eq!(max.time_peak, time_base);
        assert_eq!(max.time_trough, time_plus_days(time_base, 1));
    }

    #[test]
    fn test_drawdown_series_of_price_walk() {
        // prices [100, 110, 99, 108] -> returns [0.1, -0.1, 0.0909..]
        let returns = [110.0 / 100.0 - 1.0, 99.0 / 110.0 - 1.0, 108.0 / 99.0 - 1.0];
        let wealth = wealth_index(&index(3), &returns);

        let actual = DrawdownSeries::calculate(&wealth);

        let expected = [0.0, -0.1, -0.018_181_818_181_818_18];
        for (index, (actual, expected)) in actual.series.iter().zip(expected).enumerate() {
            assert!(f64_is_eq(actual.value, expected, 1e-12), "TC{index} failed");
        }
        assert!(f64_is_eq(actual.max_value(), -0.1, 1e-12));
    }

    #[test]
    fn test_drawdown_series_monotonic_is_zero() {
        let wealth = wealth_index(&index(5), &[0.01, 0.02, 0.0, 0.03, 0.01]);

        let actual = DrawdownSeries::calculate(&wealth);

        assert!(actual.series.iter().all(|drawdown| drawdown.value == 0.0));
        assert_eq!(actual.max_value(), 0.0);
    }

    #[test]
    fn test_drawdown_series_empty() {
        let actual = DrawdownSeries::calculate(&[]);

        assert!(actual.series.is_empty());
        assert!(actual.max.is_none());
        assert!(actual.max_value().is_nan());
    }
}
