//! Ports (trait boundaries) between the game core and its surroundings.
//!
//! The session layer drives rounds through these traits. Concrete move
//! sources and observers live in [`crate::pipeline`] and [`crate::adapters`].

pub mod agent;
pub mod observer;

pub use agent::Agent;
pub use observer::Observer;
