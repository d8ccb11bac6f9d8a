//! Display 显示格式化模块
//!
//! 本模块提供了 [`ReturnStats`] 的文本摘要和表格输出。
//!
//! 数值先四舍五入到指定小数位，再以最短表示输出（例如 `12.3`、`0.5`、`252.0`）。
//! `NaN`/`Inf` 哨兵值输出为 `nan`、`inf`、`-inf`。

use crate::statistic::summary::{ColumnStats, ReturnStats};
use prettytable::{Table, row};

impl<Interval> ReturnStats<Interval> {
    /// 生成每列一行的摘要字符串，顺序与输入列顺序一致。
    ///
    /// 格式：`"<列名> Ret = <ret×100, 1 位>% Vol = <vol×100, 1 位>% IR = <ir, 2 位> Dr = <dd×100, 1 位>% Kurt = <kurt, 2 位>"`
    pub fn summary(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|(name, stats)| format!("{name} {}", summary_line(stats)))
            .collect()
    }

    /// 生成摘要表格，每列统计量占一行。
    pub fn table(&self) -> Table {
        let mut table = Table::new();

        table.set_titles(row![
            "", "Ret %", "Vol %", "IR", "Dr %", "Kurt", "Obs", "Peak", "Trough"
        ]);

        for (name, stats) in &self.columns {
            let (peak, trough) = stats.drawdown.max.as_ref().map_or_else(
                || ("-".to_string(), "-".to_string()),
                |max| {
                    (
                        max.time_peak.date_naive().to_string(),
                        max.time_trough.date_naive().to_string(),
                    )
                },
            );

            table.add_row(row![
                name,
                format_rounded(stats.ann_return.value * 100.0, 1),
                format_rounded(stats.ann_vol.value * 100.0, 1),
                format_rounded(stats.info_ratio.value, 2),
                format_rounded(stats.drawdown.max_value() * 100.0, 1),
                format_rounded(stats.kurtosis.value, 2),
                stats.observations,
                peak,
                trough
            ]);
        }

        table
    }

    /// 将摘要表格打印到标准输出。
    pub fn print_summary(&self) {
        self.table().printstd();
    }
}

fn summary_line<Interval>(stats: &ColumnStats<Interval>) -> String {
    format!(
        "Ret = {}% Vol = {}% IR = {} Dr = {}% Kurt = {}",
        format_rounded(stats.ann_return.value * 100.0, 1),
        format_rounded(stats.ann_vol.value * 100.0, 1),
        format_rounded(stats.info_ratio.value, 2),
        format_rounded(stats.drawdown.max_value() * 100.0, 1),
        format_rounded(stats.kurtosis.value, 2),
    )
}

/// 将 `value` 四舍五入到 `decimals` 位小数，并以最短表示输出。
///
/// `NaN` 输出 `nan`，正负无穷输出 `inf` / `-inf`。
pub fn format_rounded(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return match value.is_sign_positive() {
            true => "inf".to_string(),
            false => "-inf".to_string(),
        };
    }

    let rounded = format!("{value:.decimals$}")
        .parse::<f64>()
        .unwrap_or(value);

    format!("{rounded:?}")
}
