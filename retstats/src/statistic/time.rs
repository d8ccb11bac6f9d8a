//! AnnualisationInterval 年化间隔模块
//!
//! 本模块定义了用于年化收益率、波动率等指标的观测周期类型。
//! 年化因子即每年包含的观测周期数。
//!
//! # 核心概念
//!
//! - **AnnualisationInterval**: Trait，定义年化间隔接口
//! - **Annual252**: 每年 252 个交易日（适用于传统市场）
//! - **Annual365**: 每年 365 天（适用于加密货币等 24/7 交易）
//! - **Weekly / Monthly / Quarterly**: 周度、月度、季度观测
//! - **f64**: 任意自定义年化因子

use crate::error::InvalidInputError;
use serde::{Deserialize, Serialize};
use smol_str::{SmolStr, format_smolstr};
use std::fmt::Debug;

/// 表示用于年化金融指标的观测周期类型的 Trait。
///
/// 调用方必须提供与观测表周期粒度一致的间隔，例如日度数据使用 [`Annual252`]，
/// 月度数据使用 [`Monthly`]。
///
/// # 使用示例
///
/// ```rust
/// use retstats::statistic::time::{AnnualisationInterval, Annual252, Monthly};
///
/// assert_eq!(Annual252.name().as_str(), "Annual(252)");
/// assert_eq!(Annual252.periods_per_year(), 252.0);
///
/// assert_eq!(Monthly.name().as_str(), "Monthly");
/// assert_eq!(Monthly.periods_per_year(), 12.0);
///
/// // 自定义年化因子
/// assert_eq!(260.0_f64.periods_per_year(), 260.0);
/// ```
pub trait AnnualisationInterval: Debug + Copy {
    /// 返回年化间隔的人类可读名称。
    fn name(&self) -> SmolStr;

    /// 返回每年包含的观测周期数（年化因子）。
    fn periods_per_year(&self) -> f64;

    /// 校验年化因子为正的有限数，并返回该因子。
    fn validated_factor(&self) -> Result<f64, InvalidInputError> {
        let factor = self.periods_per_year();
        if factor.is_finite() && factor > 0.0 {
            Ok(factor)
        } else {
            Err(InvalidInputError::AnnualisationFactor(factor))
        }
    }
}

/// 每年 252 个交易日的年化间隔。
///
/// 适用于传统市场的日度数据（排除周末和节假日）。
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Annual252;

impl AnnualisationInterval for Annual252 {
    fn name(&self) -> SmolStr {
        SmolStr::new("Annual(252)")
    }

    fn periods_per_year(&self) -> f64 {
        252.0
    }
}

/// 每年 365 天的年化间隔。
///
/// 适用于加密货币等 24/7 交易市场的日度数据。
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Annual365;

impl AnnualisationInterval for Annual365 {
    fn name(&self) -> SmolStr {
        SmolStr::new("Annual(365)")
    }

    fn periods_per_year(&self) -> f64 {
        365.0
    }
}

/// 周度观测，每年 52 个周期。
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Weekly;

impl AnnualisationInterval for Weekly {
    fn name(&self) -> SmolStr {
        SmolStr::new("Weekly")
    }

    fn periods_per_year(&self) -> f64 {
        52.0
    }
}

/// 月度观测，每年 12 个周期。
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Monthly;

impl AnnualisationInterval for Monthly {
    fn name(&self) -> SmolStr {
        SmolStr::new("Monthly")
    }

    fn periods_per_year(&self) -> f64 {
        12.0
    }
}

/// 季度观测，每年 4 个周期。
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Quarterly;

impl AnnualisationInterval for Quarterly {
    fn name(&self) -> SmolStr {
        SmolStr::new("Quarterly")
    }

    fn periods_per_year(&self) -> f64 {
        4.0
    }
}

impl AnnualisationInterval for f64 {
    /// 返回自定义年化因子的名称。
    fn name(&self) -> SmolStr {
        format_smolstr!("Custom({self})")
    }

    fn periods_per_year(&self) -> f64 {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_factor() {
        struct TestCase {
            input: f64,
            expected: Result<f64, InvalidInputError>,
        }

        let cases = vec![
            // TC0: positive factor
            TestCase {
                input: 12.0,
                expected: Ok(12.0),
            },
            // TC1: fractional factor
            TestCase {
                input: 0.5,
                expected: Ok(0.5),
            },
            // TC2: zero factor
            TestCase {
                input: 0.0,
                expected: Err(InvalidInputError::AnnualisationFactor(0.0)),
            },
            // TC3: negative factor
            TestCase {
                input: -252.0,
                expected: Err(InvalidInputError::AnnualisationFactor(-252.0)),
            },
            // TC4: infinite factor
            TestCase {
                input: f64::INFINITY,
                expected: Err(InvalidInputError::AnnualisationFactor(f64::INFINITY)),
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            assert_eq!(test.input.validated_factor(), test.expected, "TC{index} failed");
        }

        assert!(matches!(
            f64::NAN.validated_factor(),
            Err(InvalidInputError::AnnualisationFactor(factor)) if factor.is_nan()
        ));
    }

    #[test]
    fn test_interval_names_and_factors() {
        assert_eq!(Annual365.name().as_str(), "Annual(365)");
        assert_eq!(Annual365.periods_per_year(), 365.0);
        assert_eq!(Weekly.periods_per_year(), 52.0);
        assert_eq!(Quarterly.periods_per_year(), 4.0);
        assert_eq!(12.5_f64.name().as_str(), "Custom(12.5)");
    }
}
