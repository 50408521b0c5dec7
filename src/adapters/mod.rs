//! Adapters binding the ports to concrete terminal IO

pub mod console;

pub use console::{ConsoleAgent, ConsoleObserver, render_board};
