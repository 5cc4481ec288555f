//! webpage_analyzer library: client for a webpage analysis service
//!
//! A user enters a URL; the client sends it to the analysis service and shows
//! what the service found (HTML version, title, heading counts, link counts,
//! login-form presence) or why it failed.
//!
//! The [`AnalysisController`] owns the request lifecycle and derives the
//! [`UiState`]; the [`view`] module turns that state into the submit control,
//! the error line and the result panel.
//!
//! # Example
//!
//! ```no_run
//! use webpage_analyzer::{AnalysisController, AnalyzerClient, UiState};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AnalyzerClient::new()?;
//! let mut controller = AnalysisController::new();
//! controller.set_input("https://example.com");
//!
//! match controller.submit(&client).await {
//!     Some(UiState::Success(result)) => println!("{} is {}", result.url, result.html_version),
//!     Some(UiState::Failure(message)) => eprintln!("{}", message),
//!     _ => {}
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Submitting requires a Tokio runtime.

pub mod app;
pub mod config;
pub mod controller;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod service;
pub mod view;

// Re-export public API
pub use config::{FailOn, LogFormat, LogLevel, Opt, OutputFormat};
pub use controller::{AnalysisController, PendingRequest, RequestId, UiState};
pub use error_handling::{AnalysisError, FailureKind, InitializationError, SessionStats};
pub use models::{AnalysisRequest, AnalysisResult, HeadingCounts};
pub use service::{AnalysisService, AnalyzerClient};
