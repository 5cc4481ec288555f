//! End-of-session statistics and exit code policy.

use log::info;
use strum::IntoEnumIterator;

use crate::config::{FailOn, EXIT_CODE_FAILURES};
use crate::error_handling::{FailureKind, SessionStats};

/// Logs a summary of the session at info level.
pub fn log_session_statistics(stats: &SessionStats) {
    info!(
        "Session statistics: submitted={}, succeeded={}, failed={}",
        stats.submitted(),
        stats.succeeded(),
        stats.total_failures()
    );
    for kind in FailureKind::iter() {
        let count = stats.failure_count(kind);
        if count > 0 {
            info!("   {}: {}", kind, count);
        }
    }
    if stats.stale_ignored() > 0 {
        info!("   Stale completions ignored: {}", stats.stale_ignored());
    }
}

/// Process exit code for a finished session under `fail_on`.
pub fn evaluate_exit_code(fail_on: FailOn, stats: &SessionStats) -> i32 {
    match fail_on {
        FailOn::Never => 0,
        FailOn::AnyFailure => {
            if stats.total_failures() > 0 {
                EXIT_CODE_FAILURES
            } else {
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_exits_zero() {
        let mut stats = SessionStats::new();
        stats.record_submission();
        stats.record_failure(FailureKind::Transport);
        assert_eq!(evaluate_exit_code(FailOn::Never, &stats), 0);
    }

    #[test]
    fn test_any_failure() {
        let mut stats = SessionStats::new();
        stats.record_submission();
        stats.record_success();
        assert_eq!(evaluate_exit_code(FailOn::AnyFailure, &stats), 0);

        stats.record_submission();
        stats.record_failure(FailureKind::ServiceRejected);
        assert_eq!(evaluate_exit_code(FailOn::AnyFailure, &stats), 2);
    }

    #[test]
    fn test_log_session_statistics_does_not_panic() {
        let mut stats = SessionStats::new();
        stats.record_failure(FailureKind::MalformedResponse);
        stats.record_stale();
        log_session_statistics(&stats);
    }
}
