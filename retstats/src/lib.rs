#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    unused_crate_dependencies,
    unused_extern_crates,
    clippy::unused_self,
    clippy::useless_let_if_seq,
    missing_debug_implementations,
    rust_2018_idioms,
    rust_2024_compatibility
)]
#![allow(clippy::type_complexity, clippy::too_many_arguments, type_alias_bounds)]

//! # RetStats
//! RetStats 是一个用于计算多列收益率时间序列统计摘要的 Rust 库。
//! * **准确**：年化收益率、年化波动率、信息比率、最大回撤、峰度和同比收益率。
//! * **健壮**：强类型。输入在计算前统一校验。退化情况以 `NaN`/`Inf` 哨兵值保留。
//! * **可定制**：即插即用的年化间隔和收益率转换器。
//!
//! ## 概述
//! 输入是一张以 UTC 时间为索引、每列代表一个资产或策略的 [`Observations`](table::Observations) 表，
//! 可以是价格也可以是收益率。[`ReturnStatsCalculator`](calculator::ReturnStatsCalculator)
//! 计算并持有一个不可变的 [`ReturnStats`](statistic::summary::ReturnStats) 值对象，
//! 所有统计量都按输入列顺序返回。
//!
//! 从高层次来看，它提供了几个主要组件：
//! * 带校验的观测值表 `Observations`。
//! * 价格到收益率的 `ReturnsCalculator` 接口及默认的 `PercentChange` 实现。
//! * 按列计算的统计指标（`RateOfReturn`、`Volatility`、`InformationRatio`、`ScaledKurtosis`、
//!   `DrawdownSeries`、同比收益率）。
//! * 文本摘要和表格输出。
//! * 基于 JSON 的配置和 Tracing 日志初始化器。
//!
//! ## 快速开始
//! 参见 `examples/ret_stats_summary.rs`。

use chrono::{DateTime, Utc};
use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// 持有最近一次计算结果的收益统计计算器。
///
/// 例如：`ReturnStatsCalculator`、`compute_from_prices`、`compute_from_returns` 等。
pub mod calculator;

/// 基于 JSON 的收益统计配置。
pub mod config;

/// 定义 RetStats 中所有可能的错误。
pub mod error;

/// 提供 RetStats 的默认 Tracing 日志初始化器。
pub mod logging;

/// 价格表到收益率表的转换。
pub mod returns;

/// 用于分析收益率序列、金融指标和统计摘要的统计算法。
///
/// 例如：`ReturnStats`、`RateOfReturn`、`DrawdownSeries` 等。
pub mod statistic;

/// 以 UTC 时间为索引的多列观测值表。
pub mod table;

/// 使用 FNV 哈希并保留插入顺序的 [`IndexMap`](indexmap::IndexMap)。
pub type FnvIndexMap<K, V> = indexmap::IndexMap<K, V, fnv::FnvBuildHasher>;

/// 带时间戳的值。
///
/// 用于将任意值与 UTC 时间戳关联，例如财富指数和回撤序列中的每个点。
///
/// # 类型参数
///
/// - `T`: 值的类型
///
/// # 字段
///
/// - `value`: 存储的值
/// - `time`: UTC 时间戳
///
/// # 使用示例
///
/// ```rust
/// use chrono::Utc;
/// use retstats::Timed;
///
/// let wealth = Timed::new(1.05, Utc::now());
/// assert_eq!(wealth.value, 1.05);
/// ```
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Deserialize,
    Serialize,
    Constructor,
)]
pub struct Timed<T> {
    /// 存储的值
    pub value: T,
    /// UTC 时间戳
    pub time: DateTime<Utc>,
}

/// RetStats 测试工具。
///
/// 提供用于测试的辅助函数，包括时间操作、浮点数比较和确定性测试数据生成。
pub mod test_utils {
    use chrono::{DateTime, Days, TimeZone, Utc};

    /// 比较两个 f64 浮点数是否相等（考虑 NaN 和无穷大）。
    ///
    /// # 特殊情况处理
    ///
    /// - 两个 NaN 值被视为相等
    /// - 两个同符号的无穷大值被视为相等
    /// - 其他包含 NaN 或无穷大的情况返回 `false`
    ///
    /// # 使用示例
    ///
    /// ```rust
    /// use retstats::test_utils::f64_is_eq;
    ///
    /// assert!(f64_is_eq(0.1 + 0.2, 0.3, 1e-10));
    /// assert!(f64_is_eq(f64::NAN, f64::NAN, 1e-10));
    /// ```
    pub fn f64_is_eq(actual: f64, expected: f64, epsilon: f64) -> bool {
        if actual.is_nan() && expected.is_nan() {
            true
        } else if actual.is_infinite() && expected.is_infinite() {
            actual.is_sign_positive() == expected.is_sign_positive()
        } else if actual.is_nan()
            || expected.is_nan()
            || actual.is_infinite()
            || expected.is_infinite()
        {
            false
        } else {
            (actual - expected).abs() < epsilon
        }
    }

    /// 测试用的起始时间：2020-01-01 00:00:00 UTC。
    pub fn time_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
    }

    /// 在基础时间上增加指定的天数。
    ///
    /// # Panics
    ///
    /// 如果时间溢出，此函数会 panic。
    pub fn time_plus_days(base: DateTime<Utc>, plus: u64) -> DateTime<Utc> {
        base.checked_add_days(Days::new(plus)).unwrap()
    }

    /// 从 `base` 开始的 `len` 个连续日历日索引。
    pub fn daily_index(base: DateTime<Utc>, len: usize) -> Vec<DateTime<Utc>> {
        (0..len as u64).map(|day| time_plus_days(base, day)).collect()
    }

    /// 生成 `n` 个服从 `N(mean, std²)` 的确定性伪随机样本。
    ///
    /// 使用 SplitMix64 生成均匀分布，再通过 Box-Muller 变换得到正态分布。
    /// 相同的 `seed` 总是产生相同的序列。
    pub fn gaussian_samples(seed: u64, n: usize, mean: f64, std: f64) -> Vec<f64> {
        let mut state = seed;
        let mut next_uniform = move || {
            state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = state;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            z ^= z >> 31;
            // (0, 1]，避免 ln(0)
            ((z >> 11) as f64 + 1.0) / (1u64 << 53) as f64
        };

        let mut samples = Vec::with_capacity(n + 1);
        while samples.len() < n {
            let u1 = next_uniform();
            let u2 = next_uniform();
            let radius = (-2.0 * u1.ln()).sqrt();
            let theta = 2.0 * std::f64::consts::PI * u2;
            samples.push(mean + std * radius * theta.cos());
            samples.push(mean + std * radius * theta.sin());
        }
        samples.truncate(n);
        samples
    }

    /// 从初始价格和逐期收益率复利生成价格序列（长度为 `returns.len() + 1`）。
    pub fn price_walk(initial: f64, returns: &[f64]) -> Vec<f64> {
        std::iter::once(initial)
            .chain(returns.iter().scan(initial, |price, ret| {
                *price *= 1.0 + ret;
                Some(*price)
            }))
            .collect()
    }
}
