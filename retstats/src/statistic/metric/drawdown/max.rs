//! Max Drawdown 最大回撤模块
//!
//! 本模块提供了 Max Drawdown（最大回撤）的计算逻辑。
//! 最大回撤是回撤序列中最负的值，即财富指数最大的峰值到谷值下降。
//!
//! # 参考文档
//!
//! <https://www.investopedia.com/terms/m/maximum-drawdown-mdd.asp>

use chrono::{DateTime, Utc};
use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// [`MaxDrawdown`] 是财富指数最大的峰值到谷值下降。
///
/// ## 字段说明
///
/// - **value**: 回撤值（≤ 0，例如 -0.2 表示 20% 的回撤）
/// - **time_peak**: 回撤开始的峰值时间
/// - **time_trough**: 回撤达到最低点的时间
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize, Constructor)]
pub struct MaxDrawdown {
    /// 回撤值（≤ 0）。
    pub value: f64,
    /// 峰值时间。
    pub time_peak: DateTime<Utc>,
    /// 谷值时间。
    pub time_trough: DateTime<Utc>,
}

/// [`MaxDrawdown`] 生成器。
///
/// 跟踪所有候选回撤并保留最负的一个；值相同时保留最早出现的回撤。
/// `NaN` 候选值永远不会替换已有的最大回撤。
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize, Constructor)]
pub struct MaxDrawdownGenerator {
    /// 当前最大回撤（可选）。
    pub max: Option<MaxDrawdown>,
}

impl MaxDrawdownGenerator {
    /// 如果候选回撤比当前 [`MaxDrawdown`] 更负，则替换它。
    pub fn update(&mut self, next_drawdown: MaxDrawdown) {
        let replace = match &self.max {
            Some(current) => next_drawdown.value < current.value || current.value.is_nan(),
            None => true,
        };

        if replace {
            self.max = Some(next_drawdown);
        }
    }

    /// 生成当前的 [`MaxDrawdown`]（如果存在）。
    pub fn generate(&self) -> Option<MaxDrawdown> {
        self.max.clone()
    }
}
