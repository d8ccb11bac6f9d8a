//! Kurtosis 峰度模块
//!
//! 本模块提供了按年化因子缩放的超额峰度。
//!
//! # 计算公式
//!
//! `Scaled Kurtosis = 样本超额峰度 / sqrt(年化因子)`
//!
//! # 注意
//!
//! 峰度是尺度不变的，通常不做年化处理。除以 `sqrt(年化因子)` 没有标准的统计学依据，
//! 保留此约定仅为了与已有的该指标使用者保持输出兼容。需要真实超额峰度时请使用
//! [`ScaledKurtosis::excess`]。

use crate::statistic::{algorithm::excess_kurtosis, time::AnnualisationInterval};
use serde::{Deserialize, Serialize};

/// 按 `1 / sqrt(年化因子)` 缩放的超额峰度。
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct ScaledKurtosis<Interval> {
    /// 缩放后的峰度值。
    pub value: f64,
    /// 未缩放的样本超额峰度。
    pub excess: f64,
    /// 年化间隔。
    pub interval: Interval,
}

impl<Interval> ScaledKurtosis<Interval>
where
    Interval: AnnualisationInterval,
{
    /// 从原始（未年化）收益率计算 [`ScaledKurtosis`]。
    pub fn calculate(returns: &[f64], interval: Interval) -> Self {
        let excess = excess_kurtosis(returns);

        Self {
            value: excess / interval.periods_per_year().sqrt(),
            excess,
            interval,
        }
    }
}
