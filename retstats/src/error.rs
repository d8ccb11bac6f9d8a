//! Error 错误处理模块
//!
//! 本模块定义了收益统计计算过程中可能遇到的所有错误类型。
//!
//! # 错误分类
//!
//! - **InvalidInput**: 输入表格或年化因子无效，在计算开始前立即失败
//! - **NotComputed**: 在任何成功计算之前调用访问器
//! - **Config**: 配置解析失败
//!
//! 退化统计量（例如单个观测值的波动率、零波动率的信息比率）不是错误，
//! 它们以 NaN/Inf 哨兵值的形式出现在结果中。

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use thiserror::Error;

/// retstats 中可能产生的所有错误。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Error)]
pub enum RetStatsError {
    /// 输入表格或年化因子无效。
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// 在 [`ReturnStatsCalculator`](crate::calculator::ReturnStatsCalculator) 完成任何成功计算
    /// 之前访问了统计结果。
    #[error("ReturnStats not computed: call compute_from_prices or compute_from_returns first")]
    NotComputed,

    /// 配置解析失败。
    #[error("config invalid: {0}")]
    Config(String),
}

/// 描述输入被拒绝的具体原因。
///
/// 所有校验都在计算开始时执行，校验失败时不会修改任何已有状态。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Error)]
pub enum InvalidInputError {
    /// 表格没有任何行。
    #[error("observation table has no rows")]
    EmptyTable,

    /// 表格没有任何列。
    #[error("observation table has no columns")]
    NoColumns,

    /// 计算所需的行数不足。
    #[error("observation table has {actual} rows, at least {required} required")]
    InsufficientRows { required: usize, actual: usize },

    /// 列的长度与时间索引长度不一致。
    #[error("column {column} has {actual} values, index has {expected} rows")]
    ColumnLengthMismatch {
        column: SmolStr,
        expected: usize,
        actual: usize,
    },

    /// 列名重复。
    #[error("duplicate column name: {0}")]
    DuplicateColumn(SmolStr),

    /// 时间索引不是严格递增的。
    #[error("index not strictly increasing at row {row}")]
    UnorderedIndex { row: usize },

    /// 列中包含 NaN 或无穷大的观测值。
    #[error("column {column} has non-finite value at row {row}")]
    NonFiniteValue { column: SmolStr, row: usize },

    /// 年化因子不是正的有限数。
    #[error("annualisation factor must be positive and finite, got {0}")]
    AnnualisationFactor(f64),
}
