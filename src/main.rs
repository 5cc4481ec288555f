//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `webpage_analyzer` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Exit code policy
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use webpage_analyzer::app::{evaluate_exit_code, log_session_statistics, run_session, InputSource};
use webpage_analyzer::initialization::init_logger_with;
use webpage_analyzer::{AnalyzerClient, Opt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Optional .env next to the working directory, e.g. for RUST_LOG
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().map(Into::into), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let client = AnalyzerClient::new().context("Failed to initialize analysis client")?;

    let input = if opt.is_interactive() {
        InputSource::stdin()
    } else {
        InputSource::from_args(opt.urls.clone())
    };

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    let mut stdout = std::io::stdout();
    match run_session(&client, input, &mut stdout, opt.output, shutdown).await {
        Ok(report) => {
            log_session_statistics(&report.stats);
            let code = evaluate_exit_code(opt.fail_on, &report.stats);
            if code != 0 {
                process::exit(code);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("webpage_analyzer error: {:#}", e);
            process::exit(1);
        }
    }
}
