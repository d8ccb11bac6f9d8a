//! RetStatsConfig 配置模块
//!
//! 本模块提供了从 JSON 加载的收益统计配置。
//!
//! # 核心概念
//!
//! - **RetStatsConfig**: 顶级配置
//! - **Annualisation**: 年化间隔选择，本身实现了 [`AnnualisationInterval`]
//! - **LogFormat**: 日志输出格式
//!
//! # 配置示例
//!
//! ```json
//! {
//!     "annualisation": { "custom": 260.0 },
//!     "log_format": "json"
//! }
//! ```

use crate::{
    error::RetStatsError,
    statistic::time::{
        Annual252, Annual365, AnnualisationInterval, Monthly, Quarterly, Weekly,
    },
};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// 收益统计的顶级配置。
///
/// ## 字段说明
///
/// - **annualisation**: 年化间隔，必须与观测表的周期粒度一致
/// - **log_format**: 日志输出格式，缺省为 [`LogFormat::Text`]
///
/// # 使用示例
///
/// ```rust
/// use retstats::{
///     config::{Annualisation, RetStatsConfig},
///     statistic::time::AnnualisationInterval,
/// };
///
/// let config = RetStatsConfig::from_json_str(r#"{ "annualisation": "monthly" }"#).unwrap();
///
/// assert_eq!(config.annualisation, Annualisation::Monthly);
/// assert_eq!(config.annualisation.periods_per_year(), 12.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct RetStatsConfig {
    /// 年化间隔。
    pub annualisation: Annualisation,

    /// 日志输出格式。
    #[serde(default)]
    pub log_format: LogFormat,
}

impl RetStatsConfig {
    /// 从 JSON 字符串解析并校验配置。
    ///
    /// JSON 格式错误或年化因子不是正的有限数时返回 [`RetStatsError::Config`]。
    pub fn from_json_str(json: &str) -> Result<Self, RetStatsError> {
        let config = serde_json::from_str::<Self>(json)
            .map_err(|error| RetStatsError::Config(error.to_string()))?;

        config
            .annualisation
            .validated_factor()
            .map_err(|error| RetStatsError::Config(error.to_string()))?;

        Ok(config)
    }
}

/// 可配置的年化间隔选择。
///
/// 序列化为 snake_case 字符串，自定义因子序列化为 `{ "custom": <f64> }`。
#[derive(Debug, Copy, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Annualisation {
    /// 每年 252 个交易日
    #[default]
    #[serde(rename = "annual_252")]
    Annual252,
    /// 每年 365 天
    #[serde(rename = "annual_365")]
    Annual365,
    /// 每年 52 周
    Weekly,
    /// 每年 12 个月
    Monthly,
    /// 每年 4 个季度
    Quarterly,
    /// 自定义年化因子
    Custom(f64),
}

impl AnnualisationInterval for Annualisation {
    fn name(&self) -> SmolStr {
        match self {
            Self::Annual252 => Annual252.name(),
            Self::Annual365 => Annual365.name(),
            Self::Weekly => Weekly.name(),
            Self::Monthly => Monthly.name(),
            Self::Quarterly => Quarterly.name(),
            Self::Custom(factor) => factor.name(),
        }
    }

    fn periods_per_year(&self) -> f64 {
        match self {
            Self::Annual252 => Annual252.periods_per_year(),
            Self::Annual365 => Annual365.periods_per_year(),
            Self::Weekly => Weekly.periods_per_year(),
            Self::Monthly => Monthly.periods_per_year(),
            Self::Quarterly => Quarterly.periods_per_year(),
            Self::Custom(factor) => factor.periods_per_year(),
        }
    }
}

/// 日志输出格式。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// 人类可读格式
    #[default]
    Text,
    /// JSON 格式
    Json,
}
