//! Analysis request controller.
//!
//! Owns the URL input and the [`UiState`], issues requests to an
//! [`AnalysisService`] and applies their outcome. Every submission gets a
//! [`RequestId`]; a completion is applied only if it belongs to the latest
//! submission, so a slow response can never overwrite a newer one.
//!
//! The lifecycle is exposed in two halves, [`AnalysisController::begin_submit`]
//! and [`AnalysisController::complete`], for callers that drive several
//! requests from one event loop. [`AnalysisController::submit`] runs both
//! around a single request.

mod guard;
mod state;

pub use state::{PendingRequest, RequestId, UiState};

use log::{debug, warn};

use crate::error_handling::{categorize_analysis_error, AnalysisError, SessionStats};
use crate::models::AnalysisResult;
use crate::service::AnalysisService;
use crate::view::{self, ResultPanel, SubmitButton};
use guard::InFlight;

/// Form controller for the analysis view.
#[derive(Debug, Default)]
pub struct AnalysisController {
    input: String,
    state: UiState,
    in_flight: Option<PendingRequest>,
    last_id: Option<RequestId>,
    stats: SessionStats,
}

impl AnalysisController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the pending URL text.
    pub fn set_input(&mut self, url: impl Into<String>) {
        self.input = url.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Id of the submission currently awaited, if any.
    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight.as_ref().map(|p| p.id)
    }

    pub fn submit_button(&self) -> SubmitButton {
        view::submit_button(&self.input, &self.state)
    }

    pub fn error_line(&self) -> Option<&str> {
        view::error_line(&self.state)
    }

    pub fn result_panel(&self) -> Option<ResultPanel> {
        view::result_panel(&self.state)
    }

    /// Starts a submission of the current input.
    ///
    /// Enters `Loading`, which drops any displayed result or error, and
    /// returns the request to send. Returns `None` without touching the state
    /// when the input is empty.
    ///
    /// Calling this while another submission is in flight supersedes it: the
    /// older completion will be ignored by [`complete`](Self::complete).
    pub fn begin_submit(&mut self) -> Option<PendingRequest> {
        if self.input.is_empty() {
            debug!("Submit ignored: input is empty");
            return None;
        }

        let id = self.last_id.map_or_else(RequestId::first, RequestId::next);
        if let Some(previous) = &self.in_flight {
            debug!("Request {} superseded by {}", previous.id, id);
        }
        self.last_id = Some(id);

        let pending = PendingRequest {
            id,
            url: self.input.clone(),
        };
        debug!(
            "Request {} for {:?}: {} -> loading",
            id,
            pending.url,
            self.state.name()
        );
        self.state = UiState::Loading;
        self.in_flight = Some(pending.clone());
        self.stats.record_submission();
        Some(pending)
    }

    /// Applies the outcome of submission `id`.
    ///
    /// Returns `false`, leaving the state untouched, if `id` is not the
    /// submission currently awaited. Only completions for a superseded
    /// submission count as stale; a repeated or late completion for the
    /// latest one is dropped silently.
    pub fn complete(&mut self, id: RequestId, outcome: Result<AnalysisResult, AnalysisError>) -> bool {
        let Some(pending) = self.take_in_flight(id) else {
            if self.last_id.is_some_and(|latest| id < latest) {
                debug!("Ignoring completion for superseded request {}", id);
                self.stats.record_stale();
            } else {
                debug!("Ignoring completion for request {}: not in flight", id);
            }
            return false;
        };

        self.state = match outcome {
            Ok(result) => {
                self.stats.record_success();
                UiState::Success(result)
            }
            Err(e) => {
                match e.status() {
                    Some(status) => warn!(
                        "Analysis of {:?} failed with HTTP {}: {}",
                        pending.url,
                        status.as_u16(),
                        e
                    ),
                    None => warn!("Analysis of {:?} failed: {}", pending.url, e),
                }
                if let AnalysisError::Transport(ref source) = e {
                    debug!(
                        "Transport failure kind: {}",
                        crate::error_handling::describe_transport_error(source)
                    );
                }
                self.stats.record_failure(categorize_analysis_error(&e));
                UiState::Failure(e.user_message())
            }
        };
        debug!("Request {} settled: {}", id, self.state.name());
        true
    }

    /// Leaves `Loading` without a result or error when submission `id` ends
    /// without an outcome.
    fn abandon(&mut self, id: RequestId) {
        if self.take_in_flight(id).is_some() {
            debug!("Request {} abandoned before completion", id);
            self.state = UiState::Idle;
        }
    }

    fn take_in_flight(&mut self, id: RequestId) -> Option<PendingRequest> {
        match &self.in_flight {
            Some(pending) if pending.id == id => self.in_flight.take(),
            _ => None,
        }
    }

    /// Submits the current input to `service` and waits for the outcome.
    ///
    /// Returns `None` when the input is empty. Otherwise returns the settled
    /// state. If the returned future is dropped, or the service panics, before
    /// the outcome arrives, the controller goes back to `Idle`.
    pub async fn submit<S: AnalysisService>(&mut self, service: &S) -> Option<&UiState> {
        let pending = self.begin_submit()?;
        let in_flight = InFlight::new(self, pending.id);
        let outcome = service.analyze(&pending.url).await;
        in_flight.settle(outcome);
        Some(&self.state)
    }
}
