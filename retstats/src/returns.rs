//! Returns 收益率计算模块
//!
//! 本模块定义了将价格表转换为收益率表的 [`ReturnsCalculator`] 接口，
//! 以及默认的百分比变化实现 [`PercentChange`]。

use crate::{error::RetStatsError, table::Observations};
use serde::{Deserialize, Serialize};

/// 将价格表转换为收益率表的接口。
///
/// [`ReturnStatsCalculator`](crate::calculator::ReturnStatsCalculator) 在
/// `compute_from_prices` 中使用此接口，可以替换为自定义的收益率定义（例如对数收益率）。
pub trait ReturnsCalculator {
    /// 从价格表计算收益率表。
    fn percent_change(&self, prices: &Observations) -> Result<Observations, RetStatsError>;
}

/// 简单百分比变化：`r[t] = p[t] / p[t-1] - 1`。
///
/// 第一行没有上一期价格，因此收益率表比价格表少一行。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Deserialize, Serialize)]
pub struct PercentChange;

impl ReturnsCalculator for PercentChange {
    fn percent_change(&self, prices: &Observations) -> Result<Observations, RetStatsError> {
        prices.validate(2)?;

        let columns = prices.columns().map(|(name, values)| {
            let returns = values
                .windows(2)
                .map(|window| window[1] / window[0] - 1.0)
                .collect::<Vec<_>>();
            (name.clone(), returns)
        });

        Ok(Observations::new(prices.index()[1..].to_vec(), columns)?)
    }
}
