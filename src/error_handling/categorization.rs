//! Failure categorization.

use super::types::{AnalysisError, FailureKind};

/// Maps an analysis error onto the category counted in the session statistics.
pub fn categorize_analysis_error(error: &AnalysisError) -> FailureKind {
    match error {
        AnalysisError::ServiceReported { .. } => FailureKind::ServiceReported,
        AnalysisError::ServiceRejected { .. } => FailureKind::ServiceRejected,
        AnalysisError::Transport(_) => FailureKind::Transport,
        AnalysisError::MalformedResponse(_) => FailureKind::MalformedResponse,
    }
}

/// Short description of what went wrong at the transport level, for logs.
pub fn describe_transport_error(error: &reqwest::Error) -> &'static str {
    if error.is_builder() {
        "request builder error"
    } else if error.is_redirect() {
        "redirect error"
    } else if error.is_timeout() {
        "timeout"
    } else if error.is_connect() {
        "connection error"
    } else if error.is_request() {
        "request error"
    } else if error.is_body() {
        "body error"
    } else if error.is_decode() {
        "decode error"
    } else {
        "other error"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_categorize_service_errors() {
        let reported = AnalysisError::ServiceReported {
            status: StatusCode::BAD_REQUEST,
            message: "Invalid request format or missing webpageUrl".to_string(),
        };
        assert_eq!(
            categorize_analysis_error(&reported),
            FailureKind::ServiceReported
        );

        let rejected = AnalysisError::ServiceRejected {
            status: StatusCode::BAD_GATEWAY,
        };
        assert_eq!(
            categorize_analysis_error(&rejected),
            FailureKind::ServiceRejected
        );
    }

    #[test]
    fn test_categorize_malformed_response() {
        let json_err = serde_json::from_str::<serde_json::Value>("").unwrap_err();
        assert_eq!(
            categorize_analysis_error(&AnalysisError::from(json_err)),
            FailureKind::MalformedResponse
        );
    }

    #[tokio::test]
    async fn test_describe_builder_error() {
        let err = reqwest::Client::new()
            .get("not a url")
            .send()
            .await
            .unwrap_err();
        assert_eq!(describe_transport_error(&err), "request builder error");
        assert_eq!(
            categorize_analysis_error(&AnalysisError::from(err)),
            FailureKind::Transport
        );
    }
}
