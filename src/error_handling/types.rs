//! Error type definitions.

use log::SetLoggerError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::{SERVICE_FAILURE_FALLBACK, UNKNOWN_ERROR_MESSAGE};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    /// The analysis endpoint could not be built from the base URL.
    #[error("Invalid analysis endpoint: {0}")]
    EndpointError(#[from] url::ParseError),
}

/// A failed analysis request.
///
/// Every variant is recovered by the controller and turned into the text of
/// the error line via [`AnalysisError::user_message`].
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The service answered with a non-success status and an `error` message.
    #[error("analysis service responded with {status}: {message}")]
    ServiceReported { status: StatusCode, message: String },

    /// The service answered with a non-success status and no message.
    #[error("analysis service responded with {status}")]
    ServiceRejected { status: StatusCode },

    /// The request did not produce a response.
    #[error("request to analysis service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON the service promises.
    #[error("malformed response from analysis service: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Text shown to the user in place of a result.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::ServiceReported { message, .. } => message.clone(),
            AnalysisError::ServiceRejected { .. } => SERVICE_FAILURE_FALLBACK.to_string(),
            AnalysisError::Transport(_) | AnalysisError::MalformedResponse(_) => {
                UNKNOWN_ERROR_MESSAGE.to_string()
            }
        }
    }

    /// HTTP status of the response, when there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AnalysisError::ServiceReported { status, .. }
            | AnalysisError::ServiceRejected { status } => Some(*status),
            AnalysisError::Transport(e) => e.status(),
            AnalysisError::MalformedResponse(_) => None,
        }
    }
}

/// Failure categories tracked in the session statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    ServiceReported,
    ServiceRejected,
    Transport,
    MalformedResponse,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::ServiceReported => "Service-reported error",
            FailureKind::ServiceRejected => "Service rejected request without message",
            FailureKind::Transport => "Transport error",
            FailureKind::MalformedResponse => "Malformed response",
        }
    }
}
