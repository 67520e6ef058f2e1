//! Rules trait for game implementations.
//!
//! Games implement `BoardGame` to define:
//! - Which pieces can be picked up
//! - Legal targets and how moves modify the board
//! - Turn handling and win conditions
//!
//! Front ends call into `BoardGame` and never interpret game-specific
//! concepts directly.

pub mod engine;

pub use engine::{BoardGame, SelectOutcome};
