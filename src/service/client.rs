//! HTTP client for `POST /analyzer`.

use log::debug;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use super::AnalysisService;
use crate::config::{ANALYZER_BASE_URL, ANALYZER_PATH};
use crate::error_handling::{AnalysisError, InitializationError};
use crate::initialization::init_client;
use crate::models::{AnalysisEnvelope, AnalysisRequest, AnalysisResult, ServiceErrorBody};

/// Client for the analysis service.
#[derive(Debug, Clone)]
pub struct AnalyzerClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl AnalyzerClient {
    /// Client for the analysis service at its fixed local origin.
    pub fn new() -> Result<Self, InitializationError> {
        Self::with_base_url(ANALYZER_BASE_URL)
    }

    /// Client for an analysis service at another origin.
    ///
    /// Used to point the client at a stand-in service.
    pub fn with_base_url(base_url: &str) -> Result<Self, InitializationError> {
        let endpoint = Url::parse(base_url)?.join(ANALYZER_PATH)?;
        Ok(Self {
            http: init_client()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl AnalysisService for AnalyzerClient {
    async fn analyze(&self, url: &str) -> Result<AnalysisResult, AnalysisError> {
        debug!("POST {} for {:?}", self.endpoint, url);
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&AnalysisRequest::new(url))
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!("Analysis service answered {} ({} bytes)", status, body.len());

        if !status.is_success() {
            let error_body: ServiceErrorBody = serde_json::from_slice(&body)?;
            return Err(match error_body.message() {
                Some(message) => AnalysisError::ServiceReported { status, message },
                None => AnalysisError::ServiceRejected { status },
            });
        }

        let envelope: AnalysisEnvelope = serde_json::from_slice(&body)?;
        Ok(envelope.content)
    }
}
