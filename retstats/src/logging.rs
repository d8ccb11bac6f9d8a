//! Logging 日志模块
//!
//! 本模块提供了基于 `tracing-subscriber` 的默认日志初始化器。
//! 日志级别通过 `RUST_LOG` 环境变量控制，缺省为 `info`。
//!
//! 每个初始化器都会设置全局默认订阅器，进程内只能调用一次。

use crate::config::{LogFormat, RetStatsConfig};
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// 初始化人类可读格式的默认日志。
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer())
        .init()
}

/// 初始化 JSON 格式的默认日志。
pub fn init_json_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
        .init()
}

/// 按 [`RetStatsConfig::log_format`] 初始化日志。
pub fn init_logging_from_config(config: &RetStatsConfig) {
    match config.log_format {
        LogFormat::Text => init_logging(),
        LogFormat::Json => init_json_logging(),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}
