//! Observations 观测表模块
//!
//! 本模块定义了按时间索引的矩形观测表，每列对应一个资产或策略。
//! 价格表和收益率表都使用 [`Observations`] 表示。
//!
//! # 不变量
//!
//! - 时间索引严格递增
//! - 列名唯一且保持插入顺序
//! - 每列的长度与时间索引长度相同

use crate::{FnvIndexMap, error::InvalidInputError};
use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// 按时间索引的观测表，每列包含一个资产或策略的数值序列。
///
/// 列顺序即插入顺序，所有按列计算的统计量都保持此顺序。
///
/// # 使用示例
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use retstats::table::Observations;
///
/// let index = vec![
///     Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
/// ];
///
/// let prices = Observations::new(
///     index,
///     [("AssetA", vec![100.0, 101.0]), ("AssetB", vec![50.0, 49.5])],
/// )
/// .unwrap();
///
/// assert_eq!(prices.len(), 2);
/// assert_eq!(prices.column_names().collect::<Vec<_>>(), ["AssetA", "AssetB"]);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Observations {
    index: Vec<DateTime<Utc>>,
    columns: FnvIndexMap<SmolStr, Vec<f64>>,
}

impl Observations {
    /// 从时间索引和 `(列名, 数值)` 集合构造 [`Observations`]。
    ///
    /// 校验时间索引严格递增、列名唯一，以及每列长度与索引长度一致。
    pub fn new<ColumnIter, Name>(
        index: Vec<DateTime<Utc>>,
        columns: ColumnIter,
    ) -> Result<Self, InvalidInputError>
    where
        ColumnIter: IntoIterator<Item = (Name, Vec<f64>)>,
        Name: Into<SmolStr>,
    {
        let mut map = FnvIndexMap::default();

        for (name, values) in columns {
            let name = name.into();
            if map.contains_key(&name) {
                return Err(InvalidInputError::DuplicateColumn(name));
            }
            map.insert(name, values);
        }

        let observations = Self {
            index,
            columns: map,
        };
        observations.validate_shape()?;

        Ok(observations)
    }

    /// 时间索引。
    pub fn index(&self) -> &[DateTime<Utc>] {
        &self.index
    }

    /// 行数。
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// 列数。
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// 按插入顺序返回列名。
    pub fn column_names(&self) -> impl Iterator<Item = &SmolStr> {
        self.columns.keys()
    }

    /// 按名称查找列。
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// 按插入顺序返回 `(列名, 数值)`。
    pub fn columns(&self) -> impl Iterator<Item = (&SmolStr, &[f64])> {
        self.columns
            .iter()
            .map(|(name, values)| (name, values.as_slice()))
    }

    /// 校验表格可用于计算：至少 `min_rows` 行、至少一列、形状一致且所有观测值有限。
    ///
    /// 反序列化得到的表格不经过 [`Observations::new`]，因此这里会重新校验形状。
    pub fn validate(&self, min_rows: usize) -> Result<(), InvalidInputError> {
        if self.is_empty() {
            return Err(InvalidInputError::EmptyTable);
        }
        if self.columns.is_empty() {
            return Err(InvalidInputError::NoColumns);
        }
        if self.len() < min_rows {
            return Err(InvalidInputError::InsufficientRows {
                required: min_rows,
                actual: self.len(),
            });
        }

        self.validate_shape()?;

        for (name, values) in &self.columns {
            if let Some(row) = values.iter().position(|value| !value.is_finite()) {
                return Err(InvalidInputError::NonFiniteValue {
                    column: name.clone(),
                    row,
                });
            }
        }

        Ok(())
    }

    fn validate_shape(&self) -> Result<(), InvalidInputError> {
        if let Some(position) = self
            .index
            .iter()
            .tuple_windows()
            .position(|(prev, next)| next <= prev)
        {
            return Err(InvalidInputError::UnorderedIndex { row: position + 1 });
        }

        for (name, values) in &self.columns {
            if values.len() != self.index.len() {
                return Err(InvalidInputError::ColumnLengthMismatch {
                    column: name.clone(),
                    expected: self.index.len(),
                    actual: values.len(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{time_plus_days, time_start};

    fn index(rows: u64) -> Vec<DateTime<Utc>> {
        (0..rows).map(|day| time_plus_days(time_start(), day)).collect()
    }

    #[test]
    fn test_observations_new_preserves_column_order() {
        let table = Observations::new(
            index(2),
            [
                ("Zeta", vec![1.0, 2.0]),
                ("Alpha", vec![3.0, 4.0]),
                ("Mid", vec![5.0, 6.0]),
            ],
        )
        .unwrap();

        assert_eq!(
            table.column_names().collect::<Vec<_>>(),
            ["Zeta", "Alpha", "Mid"]
        );
        assert_eq!(table.column("Alpha"), Some([3.0, 4.0].as_slice()));
        assert_eq!(table.column("Missing"), None);
    }

    #[test]
    fn test_observations_new_rejects_invalid_shape() {
        struct TestCase {
            index: Vec<DateTime<Utc>>,
            columns: Vec<(&'static str, Vec<f64>)>,
            expected: InvalidInputError,
        }

        let cases = vec![
            // TC0: duplicate column name
            TestCase {
                index: index(2),
                columns: vec![("A", vec![1.0, 2.0]), ("A", vec![3.0, 4.0])],
                expected: InvalidInputError::DuplicateColumn(SmolStr::new("A")),
            },
            // TC1: column shorter than index
            TestCase {
                index: index(3),
                columns: vec![("A", vec![1.0, 2.0])],
                expected: InvalidInputError::ColumnLengthMismatch {
                    column: SmolStr::new("A"),
                    expected: 3,
                    actual: 2,
                },
            },
            // TC2: index not strictly increasing
            TestCase {
                index: vec![
                    time_plus_days(time_start(), 0),
                    time_plus_days(time_start(), 2),
                    time_plus_days(time_start(), 2),
                ],
                columns: vec![("A", vec![1.0, 2.0, 3.0])],
                expected: InvalidInputError::UnorderedIndex { row: 2 },
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = Observations::new(test.index, test.columns).unwrap_err();
            assert_eq!(actual, test.expected, "TC{index} failed");
        }
    }

    #[test]
    fn test_observations_validate() {
        struct TestCase {
            input: Observations,
            min_rows: usize,
            expected: Result<(), InvalidInputError>,
        }

        let no_columns: Vec<(&str, Vec<f64>)> = vec![];

        let cases = vec![
            // TC0: valid table
            TestCase {
                input: Observations::new(index(2), [("A", vec![1.0, 2.0])]).unwrap(),
                min_rows: 2,
                expected: Ok(()),
            },
            // TC1: empty table
            TestCase {
                input: Observations::new(vec![], [("A", vec![])]).unwrap(),
                min_rows: 1,
                expected: Err(InvalidInputError::EmptyTable),
            },
            // TC2: rows but no columns
            TestCase {
                input: Observations::new(index(2), no_columns).unwrap(),
                min_rows: 1,
                expected: Err(InvalidInputError::NoColumns),
            },
            // TC3: too few rows
            TestCase {
                input: Observations::new(index(1), [("A", vec![1.0])]).unwrap(),
                min_rows: 2,
                expected: Err(InvalidInputError::InsufficientRows {
                    required: 2,
                    actual: 1,
                }),
            },
            // TC4: NaN observation
            TestCase {
                input: Observations::new(
                    index(3),
                    [("A", vec![1.0, 2.0, 3.0]), ("B", vec![1.0, f64::NAN, 3.0])],
                )
                .unwrap(),
                min_rows: 1,
                expected: Err(InvalidInputError::NonFiniteValue {
                    column: SmolStr::new("B"),
                    row: 1,
                }),
            },
            // TC5: infinite observation
            TestCase {
                input: Observations::new(index(2), [("A", vec![f64::INFINITY, 2.0])]).unwrap(),
                min_rows: 1,
                expected: Err(InvalidInputError::NonFiniteValue {
                    column: SmolStr::new("A"),
                    row: 0,
                }),
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            assert_eq!(
                test.input.validate(test.min_rows),
                test.expected,
                "TC{index} failed"
            );
        }
    }
}
