//! Cleanup for a submission awaiting its outcome.

use super::{AnalysisController, RequestId};
use crate::error_handling::AnalysisError;
use crate::models::AnalysisResult;

/// Holds the controller while submission `id` is awaited.
///
/// Dropping it without [`settle`](InFlight::settle) (the awaiting future was
/// cancelled or unwound) takes the controller out of `Loading`.
pub(super) struct InFlight<'a> {
    controller: &'a mut AnalysisController,
    id: RequestId,
    settled: bool,
}

impl<'a> InFlight<'a> {
    pub(super) fn new(controller: &'a mut AnalysisController, id: RequestId) -> Self {
        Self {
            controller,
            id,
            settled: false,
        }
    }

    pub(super) fn settle(mut self, outcome: Result<AnalysisResult, AnalysisError>) {
        self.controller.complete(self.id, outcome);
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.controller.abandon(self.id);
        }
    }
}
