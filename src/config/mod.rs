//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (service endpoint, fallback messages, labels)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{FailOn, LogFormat, LogLevel, Opt, OutputFormat};
