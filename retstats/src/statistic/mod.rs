//! Statistic 统计模块
//!
//! 本模块提供了用于分析收益率序列的统计算法和指标。
//!
//! # 核心概念
//!
//! - **algorithm**: 样本矩、峰度等基础统计算法
//! - **metric**: 金融指标及其在不同年化间隔上的计算方法
//! - **summary**: 收益率表的统计摘要及其文本输出
//! - **time**: 用于年化计算的间隔定义

/// 用于分析数据集的统计算法。
pub mod algorithm;

/// 金融指标及其在不同 [`AnnualisationInterval`](time::AnnualisationInterval) 上的计算方法。
pub mod metric;

/// 收益率表的统计摘要。
///
/// 例如，`ReturnStats`、`ColumnStats` 等。
pub mod summary;

/// 用于年化计算的间隔定义。
///
/// 例如，`Annual252`、`Annual365`、`Monthly` 等。
pub mod time;
