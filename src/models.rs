//! Wire types exchanged with the analysis service.
//!
//! Field names follow the service's JSON: the request uses `webpageUrl`, the
//! result uses the service's PascalCase keys.

use serde::{Deserialize, Serialize};

/// Body of `POST /analyzer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    #[serde(rename = "webpageUrl")]
    pub url: String,
}

impl AnalysisRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Number of `h1`, `h2` and `h3` elements on the page.
///
/// The service sends these as a string-to-count map; absent levels are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingCounts {
    #[serde(default)]
    pub h1: u32,
    #[serde(default)]
    pub h2: u32,
    #[serde(default)]
    pub h3: u32,
}

/// Structural metadata the service reports for one webpage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "HTMLVersion")]
    pub html_version: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "HeadingCounts", default)]
    pub heading_counts: HeadingCounts,
    #[serde(rename = "InternalLinks")]
    pub internal_links: u32,
    #[serde(rename = "ExternalLinks")]
    pub external_links: u32,
    #[serde(rename = "InaccessibleLinks")]
    pub inaccessible_links: u32,
    #[serde(rename = "HasLoginForm")]
    pub has_login_form: bool,
}

/// Successful response body: the result sits under `content`.
#[derive(Debug, Deserialize)]
pub(crate) struct AnalysisEnvelope {
    pub content: AnalysisResult,
}

/// Failure response body. `error` is optional and may be empty.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ServiceErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ServiceErrorBody {
    /// The service's message, if it sent a non-empty one.
    pub fn message(self) -> Option<String> {
        self.error.filter(|m| !m.is_empty())
    }
}
