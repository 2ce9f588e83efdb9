//! CLI infrastructure for the noughts binary
//!
//! This module provides the command-line interface for playing against the
//! minimax AI and inspecting its decisions.

pub mod commands;
pub mod output;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks the level
/// (0 = warn, 1 = info, 2+ = debug).
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
