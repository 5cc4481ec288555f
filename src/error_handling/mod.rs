//! Error handling and session statistics.
//!
//! This module provides:
//! - Error type definitions for initialization and analysis requests
//! - Failure categorization and the message shown to the user
//! - Session statistics (submissions, successes, failures by kind)
//!
//! Analysis failures are categorized into:
//! - **Service-reported**: non-2xx status with an `error` message
//! - **Service-rejected**: non-2xx status without a message
//! - **Transport**: the request never produced a response
//! - **Malformed response**: the body could not be read as the expected JSON

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_analysis_error, describe_transport_error};
pub use stats::SessionStats;
pub use types::{AnalysisError, FailureKind, InitializationError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_session_stats_initialization() {
        let stats = SessionStats::new();
        for kind in FailureKind::iter() {
            assert_eq!(stats.failure_count(kind), 0);
        }
        assert_eq!(stats.submitted(), 0);
        assert_eq!(stats.succeeded(), 0);
        assert_eq!(stats.total_failures(), 0);
    }

    #[test]
    fn test_session_stats_totals() {
        let mut stats = SessionStats::new();
        stats.record_submission();
        stats.record_success();
        stats.record_submission();
        stats.record_failure(FailureKind::ServiceReported);
        stats.record_submission();
        stats.record_failure(FailureKind::Transport);
        stats.record_submission();
        stats.record_failure(FailureKind::Transport);

        assert_eq!(stats.submitted(), 4);
        assert_eq!(stats.succeeded(), 1);
        assert_eq!(stats.total_failures(), 3);
        assert_eq!(stats.failure_count(FailureKind::Transport), 2);
        assert_eq!(stats.failure_count(FailureKind::MalformedResponse), 0);
    }
}
