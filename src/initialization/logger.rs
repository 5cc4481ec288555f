//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON formats for structured logging. Logs go to stderr,
/// leaving stdout to the analysis output.
///
/// Without an explicit `level` the filter comes from `RUST_LOG`, falling
/// back to `warn`. An explicit `level` (from `--log-level`) overrides
/// `RUST_LOG`.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if logger initialization fails.
///
/// # Examples
///
/// ```bash
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=webpage_analyzer=debug,reqwest=info webpage_analyzer example.com
///
/// # CLI level takes precedence
/// webpage_analyzer example.com --log-level debug
/// ```
pub fn init_logger_with(
    level: Option<LevelFilter>,
    format: LogFormat,
) -> Result<(), InitializationError> {
    let rust_log = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    let mut builder = configure_builder(level, rust_log.as_deref());
    apply_format(&mut builder, format);

    // try_init: tests may initialize the logger more than once per process
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Filter setup: `warn` default, then `RUST_LOG`, then the CLI level.
fn configure_builder(level: Option<LevelFilter>, rust_log: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);

    if let Some(filters) = rust_log {
        builder.parse_filters(filters);
    }

    if let Some(level) = level {
        builder.filter_level(level);
        builder.filter_module("reqwest", LevelFilter::Info.min(level));
        builder.filter_module("hyper", LevelFilter::Info.min(level));
        builder.filter_module("hyper_util", LevelFilter::Info.min(level));
        builder.filter_module("webpage_analyzer", level);
    }

    builder
}

fn apply_format(builder: &mut env_logger::Builder, format: LogFormat) {
    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }
}
