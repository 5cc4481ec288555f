//! Presentation state derived from the request lifecycle.

use crate::models::AnalysisResult;

/// What the view shows. Exactly one variant is active at a time.
///
/// ```text
/// Idle -> Loading -> { Success | Failure } -> Loading -> ...
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success(AnalysisResult),
    Failure(String),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    /// `Success` or `Failure`: reachable only once a request has completed.
    pub fn is_settled(&self) -> bool {
        matches!(self, UiState::Success(_) | UiState::Failure(_))
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            UiState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UiState::Failure(message) => Some(message),
            _ => None,
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            UiState::Idle => "idle",
            UiState::Loading => "loading",
            UiState::Success(_) => "success",
            UiState::Failure(_) => "failure",
        }
    }
}

/// Identifies one submission. Later submissions get larger ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub(crate) fn first() -> Self {
        RequestId(1)
    }

    pub(crate) fn next(self) -> Self {
        RequestId(self.0 + 1)
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A submission that has entered `Loading` and awaits its completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: RequestId,
    pub url: String,
}
