//! The session loop: read a URL, submit it, show the settled state.

use std::future::Future;
use std::io::Write;

use anyhow::{Context, Result};
use log::{debug, info};

use super::input::InputSource;
use crate::config::{OutputFormat, INPUT_PLACEHOLDER, PAGE_TITLE, SUBMIT_LABEL_IDLE};
use crate::controller::{AnalysisController, UiState};
use crate::error_handling::SessionStats;
use crate::service::AnalysisService;
use crate::view::{render_json, render_plain};

/// Outcome of a finished session.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub stats: SessionStats,
    /// State of the view when the session ended
    pub last_state: UiState,
    /// The session was stopped by the shutdown signal
    pub interrupted: bool,
}

/// Runs every URL from `input` through a fresh controller.
///
/// Submissions are sequential: the next URL is read only after the previous
/// one has settled. Settled states are written to `out` in `format`;
/// prompts and the loading caption go to stderr. When `shutdown` resolves,
/// the in-flight submission (if any) is dropped and the session ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Analysis
/// failures are not errors here: they end up in the view and the report.
pub async fn run_session<S, W, F>(
    service: &S,
    mut input: InputSource,
    out: &mut W,
    format: OutputFormat,
    shutdown: F,
) -> Result<SessionReport>
where
    S: AnalysisService,
    W: Write,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut controller = AnalysisController::new();
    let interactive = input.is_interactive();
    let mut interrupted = false;

    if interactive {
        eprintln!("{}", PAGE_TITLE);
    }

    loop {
        if interactive {
            eprint!("{}: ", INPUT_PLACEHOLDER);
            std::io::stderr().flush().ok();
        }

        let next = tokio::select! {
            line = input.next_url() => line.context("Failed to read URL from input")?,
            _ = &mut shutdown => {
                interrupted = true;
                break;
            }
        };
        let Some(url) = next else {
            break;
        };

        controller.set_input(url);
        if !controller.submit_button().enabled {
            eprintln!("{} is disabled: enter a webpage URL", SUBMIT_LABEL_IDLE);
            continue;
        }

        let settled = tokio::select! {
            state = controller.submit(service) => state.cloned(),
            _ = &mut shutdown => {
                interrupted = true;
                None
            }
        };
        let Some(state) = settled else {
            break;
        };

        if state.is_settled() {
            write_state(out, &state, format)?;
        } else {
            debug!("Submission ended unsettled ({:?}); nothing to show", state);
        }
    }

    if interrupted {
        info!("Session interrupted");
    }
    debug!("Session ended in state {:?}", controller.state());

    Ok(SessionReport {
        stats: controller.stats().clone(),
        last_state: controller.state().clone(),
        interrupted,
    })
}

fn write_state<W: Write>(out: &mut W, state: &UiState, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            if let Some(text) = render_plain(state) {
                write!(out, "{}", text).context("Failed to write result")?;
            }
        }
        OutputFormat::Json => {
            if let Some(value) = render_json(state) {
                writeln!(out, "{}", value).context("Failed to write result")?;
            }
        }
    }
    out.flush().context("Failed to flush output")?;
    Ok(())
}
