//! Year On Year 同比收益率模块
//!
//! 本模块提供了按日历年重采样财富指数并计算同比收益率的逻辑。
//!
//! # 计算步骤
//!
//! 1. 将财富指数按日历年分组，以年内观测值的均值作为该年的代表值
//! 2. 第一年到最后一年之间没有观测值的年份代表值为 `NaN`
//! 3. 计算相邻年份代表值的百分比变化；`NaN` 年份的结果为 `NaN`，
//!    其后一年与最近一个有观测值的年份比较
//!
//! 第一年没有上一年基准，因此结果比年份数少一个。

use crate::Timed;
use chrono::{DateTime, Datelike, TimeZone, Utc};
use derive_more::Constructor;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// 某个日历年的值（年均财富指数或同比收益率）。
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize, Constructor)]
pub struct AnnualValue {
    /// 日历年。
    pub year: i32,
    /// 该年的值。
    pub value: f64,
}

impl AnnualValue {
    /// 年度标签时间（该年 12 月 31 日 00:00 UTC）。
    pub fn year_end(&self) -> Option<DateTime<Utc>> {
        Utc.with_ymd_and_hms(self.year, 12, 31, 0, 0, 0).single()
    }
}

/// 计算财富指数每个日历年的观测均值，覆盖从第一年到最后一年的每一年。
pub fn annual_means(wealth_index: &[Timed<f64>]) -> Vec<AnnualValue> {
    let (Some(first), Some(last)) = (wealth_index.first(), wealth_index.last()) else {
        return Vec::new();
    };

    let chunks = wealth_index.iter().chunk_by(|point| point.time.year());

    let mut observed = (&chunks)
        .into_iter()
        .map(|(year, points)| {
            let (sum, count) = points.fold((0.0, 0usize), |(sum, count), point| {
                (sum + point.value, count + 1)
            });
            AnnualValue::new(year, sum / count as f64)
        })
        .peekable();

    (first.time.year()..=last.time.year())
        .map(|year| match observed.next_if(|annual| annual.year == year) {
            Some(annual) => annual,
            None => AnnualValue::new(year, f64::NAN),
        })
        .collect()
}

/// 计算财富指数的同比收益率序列，每个第一年之后的年份对应一个值。
pub fn year_on_year(wealth_index: &[Timed<f64>]) -> Vec<AnnualValue> {
    let means = annual_means(wealth_index);

    let mut previous: Option<f64> = None;
    let mut returns = Vec::with_capacity(means.len().saturating_sub(1));

    for (position, annual) in means.iter().enumerate() {
        if position > 0 {
            let value = match previous {
                Some(previous) if !annual.value.is_nan() => annual.value / previous - 1.0,
                _ => f64::NAN,
            };
            returns.push(AnnualValue::new(annual.year, value));
        }

        if !annual.value.is_nan() {
            previous = Some(annual.value);
        }
    }

    returns
}
