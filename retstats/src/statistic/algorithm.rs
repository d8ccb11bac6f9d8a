//! Algorithm 统计算法模块
//!
//! 本模块提供了用于分析收益率序列的统计算法。
//!
//! # 核心概念
//!
//! - **Welford Online 算法**: 单次遍历计算均值和样本方差
//! - **SampleMoments**: 样本计数、均值和样本方差
//! - **excess_kurtosis**: 无偏（样本）Fisher 超额峰度

use serde::{Deserialize, Serialize};

/// 小于此阈值的中心矩被视为浮点误差并归零。
const MOMENT_EPSILON: f64 = 1e-14;

/// [Welford Online](https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance#Welford's_online_algorithm)
/// 算法集合，用于单次遍历计算运行中的均值和方差。
pub mod welford_online {
    /// 计算下一个均值。
    ///
    /// `new_mean = prev_mean + (next_value - prev_mean) / count`
    pub fn calculate_mean<T>(mut prev_mean: T, next_value: T, count: T) -> T
    where
        T: Copy + std::ops::Sub<Output = T> + std::ops::Div<Output = T> + std::ops::AddAssign,
    {
        prev_mean += (next_value - prev_mean) / count;
        prev_mean
    }

    /// 计算下一个 Welford Online 递推关系 M。
    ///
    /// `M = prev_m + (new_value - prev_mean) * (new_value - new_mean)`
    pub fn calculate_recurrence_relation_m(
        prev_m: f64,
        prev_mean: f64,
        new_value: f64,
        new_mean: f64,
    ) -> f64 {
        prev_m + ((new_value - prev_mean) * (new_value - new_mean))
    }

    /// 使用 Bessel 校正（count - 1）计算无偏"样本"方差。
    ///
    /// 少于 2 个样本时样本方差无定义，返回 `NaN`。
    pub fn calculate_sample_variance(recurrence_relation_m: f64, count: f64) -> f64 {
        match count < 2.0 {
            true => f64::NAN,
            false => recurrence_relation_m / (count - 1.0),
        }
    }
}

/// 样本的计数、均值和无偏样本方差。
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct SampleMoments {
    pub count: usize,
    pub mean: f64,
    pub sample_variance: f64,
}

impl SampleMoments {
    /// 使用 Welford Online 算法单次遍历计算 [`SampleMoments`]。
    ///
    /// 空样本的均值和方差均为 `NaN`；单个样本的方差为 `NaN`。
    pub fn calculate(values: &[f64]) -> Self {
        let mut mean = 0.0;
        let mut m = 0.0;

        for (index, value) in values.iter().copied().enumerate() {
            let count = (index + 1) as f64;
            let new_mean = welford_online::calculate_mean(mean, value, count);
            m = welford_online::calculate_recurrence_relation_m(m, mean, value, new_mean);
            mean = new_mean;
        }

        Self {
            count: values.len(),
            mean: if values.is_empty() { f64::NAN } else { mean },
            sample_variance: welford_online::calculate_sample_variance(m, values.len() as f64),
        }
    }

    /// 样本标准差。
    pub fn std_dev(&self) -> f64 {
        self.sample_variance.sqrt()
    }
}

/// 计算无偏（样本）Fisher 超额峰度，正态分布的超额峰度为 0。
///
/// ## 计算公式
///
/// 令 `m2 = Σ(x - mean)²`、`m4 = Σ(x - mean)⁴`：
///
/// `kurt = n(n+1)(n-1) m4 / ((n-2)(n-3) m2²) - 3(n-1)² / ((n-2)(n-3))`
///
/// ## 特殊情况
///
/// - 少于 4 个样本：返回 `NaN`
/// - 方差为零：返回 `0.0`
pub fn excess_kurtosis(values: &[f64]) -> f64 {
    if values.len() < 4 {
        return f64::NAN;
    }

    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;

    let (m2, m4) = values.iter().fold((0.0, 0.0), |(m2, m4), value| {
        let deviation_squared = (value - mean).powi(2);
        (m2 + deviation_squared, m4 + deviation_squared.powi(2))
    });

    let m2 = zero_out_precision_error(m2);
    let m4 = zero_out_precision_error(m4);

    let denominator = (count - 2.0) * (count - 3.0) * m2.powi(2);
    if denominator == 0.0 {
        return 0.0;
    }

    let numerator = count * (count + 1.0) * (count - 1.0) * m4;
    let adjustment = 3.0 * (count - 1.0).powi(2) / ((count - 2.0) * (count - 3.0));

    numerator / denominator - adjustment
}

fn zero_out_precision_error(moment: f64) -> f64 {
    if moment.abs() < MOMENT_EPSILON {
        0.0
    } else {
        moment
    }
}
