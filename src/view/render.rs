//! Terminal rendering of settled states.

use colored::*;
use serde_json::{json, Value};

use super::result_panel;
use crate::controller::UiState;

/// Plain-text rendering: the result panel, or the error line in red.
///
/// Returns `None` for states that have nothing to show.
pub fn render_plain(state: &UiState) -> Option<String> {
    match state {
        UiState::Success(_) => result_panel(state).map(|panel| panel.to_string()),
        UiState::Failure(message) => Some(format!("{}\n", message.red())),
        UiState::Idle | UiState::Loading => None,
    }
}

/// JSON rendering, using the service's field names for the result.
pub fn render_json(state: &UiState) -> Option<Value> {
    match state {
        UiState::Success(result) => Some(json!({ "status": "success", "result": result })),
        UiState::Failure(message) => Some(json!({ "status": "failure", "error": message })),
        UiState::Idle | UiState::Loading => None,
    }
}
