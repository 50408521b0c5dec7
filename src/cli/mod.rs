//! CLI infrastructure for the oxo game
//!
//! This module provides the command-line interface for playing against the
//! computer, analyzing positions and running batches of self-play.

pub mod commands;
pub mod output;

use tracing_subscriber::EnvFilter;

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbosity` picks the level
/// (0 = warn, 1 = info, 2 = debug, 3+ = trace).
pub fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .try_init(); // Don't panic if already initialized
}
