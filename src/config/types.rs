//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How settled analysis states are written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Result panel with fixed labels, error line in red
    Plain,
    /// One JSON object per settled submission
    Json,
}

/// Exit code policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 once the session ends
    Never,
    /// Exit non-zero if any submission ended in failure
    AnyFailure,
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Analyze two pages and exit
/// webpage_analyzer https://example.com https://example.org
///
/// # Interactive: one URL per line on stdin
/// webpage_analyzer
///
/// # Machine-readable output, non-zero exit on any failure
/// webpage_analyzer https://example.com --output json --fail-on any-failure
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "webpage_analyzer",
    about = "Submits webpage URLs to the analysis service and shows what it found."
)]
pub struct Opt {
    /// URLs to analyze. Reads one URL per line from stdin when omitted.
    #[arg(value_parser)]
    pub urls: Vec<String>,

    /// Log level: error|warn|info|debug|trace (overrides RUST_LOG; default warn)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Output format for results: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    /// Exit code policy: never|any-failure
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,
}

impl Opt {
    /// Whether submissions come from stdin rather than the command line.
    pub fn is_interactive(&self) -> bool {
        self.urls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_opt_defaults() {
        let opt = Opt::try_parse_from(["webpage_analyzer"]).unwrap();
        assert!(opt.is_interactive());
        assert_eq!(opt.output, OutputFormat::Plain);
        assert_eq!(opt.fail_on, FailOn::Never);
        assert!(opt.log_level.is_none());
        assert!(matches!(opt.log_format, LogFormat::Plain));
    }

    #[test]
    fn test_opt_urls_are_kept_verbatim() {
        let opt =
            Opt::try_parse_from(["webpage_analyzer", "example.com", " https://a.test "]).unwrap();
        assert!(!opt.is_interactive());
        assert_eq!(opt.urls, vec!["example.com", " https://a.test "]);
    }

    #[test]
    fn test_opt_rejects_unknown_output() {
        let result = Opt::try_parse_from(["webpage_analyzer", "--output", "xml"]);
        assert!(result.is_err());
    }
}
