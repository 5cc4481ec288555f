//! Tests for CLI option parsing.

use clap::Parser;
use webpage_analyzer::{FailOn, LogLevel, Opt, OutputFormat};

#[test]
fn test_one_shot_urls() {
    let opt = Opt::try_parse_from(["webpage_analyzer", "https://example.com", "example.org"])
        .expect("Failed to parse");
    assert!(!opt.is_interactive());
    assert_eq!(opt.urls, vec!["https://example.com", "example.org"]);
}

#[test]
fn test_output_and_fail_on() {
    let opt = Opt::try_parse_from([
        "webpage_analyzer",
        "example.com",
        "--output",
        "json",
        "--fail-on",
        "any-failure",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("Failed to parse");
    assert_eq!(opt.output, OutputFormat::Json);
    assert_eq!(opt.fail_on, FailOn::AnyFailure);
    assert!(matches!(opt.log_level, Some(LogLevel::Debug)));
}

#[test]
fn test_service_origin_is_not_configurable() {
    let result = Opt::try_parse_from(["webpage_analyzer", "--endpoint", "http://other:1"]);
    assert!(result.is_err());
}
