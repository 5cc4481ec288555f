//! Main application modules.
//!
//! This module provides the input sources, the session loop that feeds them
//! through the controller, and end-of-session statistics used by the binary.

pub mod input;
pub mod session;
pub mod statistics;

// Re-export public API
pub use input::InputSource;
pub use session::{run_session, SessionReport};
pub use statistics::{evaluate_exit_code, log_session_statistics};
