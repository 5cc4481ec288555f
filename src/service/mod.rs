//! Access to the remote analysis service.
//!
//! [`AnalysisService`] is the seam between the controller and the network;
//! [`AnalyzerClient`] is the HTTP implementation used by the application.

mod client;

pub use client::AnalyzerClient;

use std::future::Future;

use crate::error_handling::AnalysisError;
use crate::models::AnalysisResult;

/// Something that can analyze a webpage URL.
pub trait AnalysisService {
    /// Submits `url` for analysis. The URL is passed through verbatim.
    fn analyze(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<AnalysisResult, AnalysisError>> + Send;
}
