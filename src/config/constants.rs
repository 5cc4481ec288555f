//! Configuration constants.
//!
//! The analysis service origin is fixed: the client talks to the analyzer
//! running next to it and exposes no option to change that.

/// Origin of the analysis service.
pub const ANALYZER_BASE_URL: &str = "http://localhost:8080";

/// Path of the analysis endpoint, relative to [`ANALYZER_BASE_URL`].
pub const ANALYZER_PATH: &str = "/analyzer";

/// User-Agent sent with every analysis request.
pub const USER_AGENT: &str = concat!("webpage_analyzer/", env!("CARGO_PKG_VERSION"));

// Failure messages shown in the error line
/// Shown when the service rejects a request without saying why.
pub const SERVICE_FAILURE_FALLBACK: &str = "Failed to analyze webpage";
/// Shown for transport failures and unreadable response bodies.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

// Presentation captions
pub const PAGE_TITLE: &str = "Webpage Analyzer";
pub const INPUT_PLACEHOLDER: &str = "Enter webpage URL";
pub const SUBMIT_LABEL_IDLE: &str = "Analyze";
pub const SUBMIT_LABEL_LOADING: &str = "Analyzing...";
pub const RESULT_PANEL_TITLE: &str = "Analysis Result";

/// Exit code used when `--fail-on` is triggered.
pub const EXIT_CODE_FAILURES: i32 = 2;
