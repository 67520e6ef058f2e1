//! Game implementations.
//!
//! Each game implements `BoardGame` and owns its board, turn and selection.

pub mod backgammon;
pub mod checkers;
pub mod chess;
