//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::config::USER_AGENT;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used to reach the analysis service.
///
/// The client sets only the User-Agent. No timeout is configured: a
/// submission stays in flight until the service answers or the transport
/// fails.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client() -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new().user_agent(USER_AGENT).build()?;
    Ok(client)
}
