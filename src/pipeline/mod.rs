//! Session pipeline
//!
//! This module provides:
//! - Agent implementations (minimax, random)
//! - The session runner that plays rounds and keeps the tally
//! - Observers for batch runs

pub mod agents;
pub mod observers;
pub mod session;
pub mod tally;

// Re-export agent implementations (adapters)
pub use agents::{MinimaxAgent, RandomAgent};
pub use observers::ProgressObserver;
pub use session::Session;
pub use tally::{SessionSummary, Tally};

pub use crate::ports::{Agent, Observer};
