//! Presentation of the controller state.
//!
//! The view is a pure function of the input text and the [`UiState`]: the
//! submit control, an optional error line and an optional result panel.

mod render;

pub use render::{render_json, render_plain};

use crate::config::{RESULT_PANEL_TITLE, SUBMIT_LABEL_IDLE, SUBMIT_LABEL_LOADING};
use crate::controller::UiState;
use crate::models::AnalysisResult;

/// State of the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    pub enabled: bool,
    pub label: &'static str,
}

/// Submit is disabled while the input is empty or a request is loading.
pub fn submit_button(input: &str, state: &UiState) -> SubmitButton {
    let loading = state.is_loading();
    SubmitButton {
        enabled: !input.is_empty() && !loading,
        label: if loading {
            SUBMIT_LABEL_LOADING
        } else {
            SUBMIT_LABEL_IDLE
        },
    }
}

pub fn error_line(state: &UiState) -> Option<&str> {
    state.error()
}

pub fn result_panel(state: &UiState) -> Option<ResultPanel> {
    state.result().map(ResultPanel::from_result)
}

/// Result fields under their fixed labels, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanel {
    pub title: &'static str,
    pub rows: Vec<(&'static str, String)>,
}

impl ResultPanel {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let headings = result.heading_counts;
        let rows = vec![
            ("URL", result.url.clone()),
            ("HTML Version", result.html_version.clone()),
            ("Title", result.title.clone()),
            (
                "Headings",
                format!(
                    "h1: {}, h2: {}, h3: {}",
                    headings.h1, headings.h2, headings.h3
                ),
            ),
            ("Internal Links", result.internal_links.to_string()),
            ("External Links", result.external_links.to_string()),
            ("Inaccessible Links", result.inaccessible_links.to_string()),
            (
                "Has Login Form",
                if result.has_login_form { "Yes" } else { "No" }.to_string(),
            ),
        ];
        Self {
            title: RESULT_PANEL_TITLE,
            rows,
        }
    }

    /// `"<label>: <value>"` for every row.
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect()
    }
}

impl std::fmt::Display for ResultPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        for line in self.lines() {
            writeln!(f, "  {}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HeadingCounts;

    fn example_result() -> AnalysisResult {
        AnalysisResult {
            url: "example.com".to_string(),
            html_version: "HTML5".to_string(),
            title: "Example".to_string(),
            heading_counts: HeadingCounts { h1: 1, h2: 2, h3: 0 },
            internal_links: 5,
            external_links: 2,
            inaccessible_links: 1,
            has_login_form: false,
        }
    }

    #[test]
    fn test_submit_button_states() {
        let idle = submit_button("", &UiState::Idle);
        assert!(!idle.enabled);
        assert_eq!(idle.label, "Analyze");

        let ready = submit_button("example.com", &UiState::Idle);
        assert!(ready.enabled);

        let loading = submit_button("example.com", &UiState::Loading);
        assert!(!loading.enabled);
        assert_eq!(loading.label, "Analyzing...");

        let after_failure = submit_button("example.com", &UiState::Failure("x".into()));
        assert!(after_failure.enabled);
        assert_eq!(after_failure.label, "Analyze");
    }

    #[test]
    fn test_result_panel_lines() {
        let panel = result_panel(&UiState::Success(example_result())).unwrap();
        assert_eq!(panel.title, "Analysis Result");
        assert_eq!(
            panel.lines(),
            vec![
                "URL: example.com",
                "HTML Version: HTML5",
                "Title: Example",
                "Headings: h1: 1, h2: 2, h3: 0",
                "Internal Links: 5",
                "External Links: 2",
                "Inaccessible Links: 1",
                "Has Login Form: No",
            ]
        );
    }

    #[test]
    fn test_login_form_yes() {
        let mut result = example_result();
        result.has_login_form = true;
        let panel = ResultPanel::from_result(&result);
        assert!(panel.lines().contains(&"Has Login Form: Yes".to_string()));
    }

    #[test]
    fn test_failure_shows_error_line_only() {
        let state = UiState::Failure("invalid URL".to_string());
        assert_eq!(error_line(&state), Some("invalid URL"));
        assert!(result_panel(&state).is_none());
    }

    #[test]
    fn test_loading_shows_neither() {
        assert!(error_line(&UiState::Loading).is_none());
        assert!(result_panel(&UiState::Loading).is_none());
    }
}
