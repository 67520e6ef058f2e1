//! Checkers (draughts) on the 8×8 board.
//!
//! - 12 men per side on the dark squares, red moves first
//! - Men step diagonally forward; kings step either way
//! - Single jumps over an opposing checker capture it
//! - Men reaching the far row are crowned
//! - A side with no checkers or no valid move loses
//!
//! Multi-jump chains and compulsory capture are not modeled.

mod game;

pub use game::{Checker, CheckersEvent, CheckersGame, CheckersGrid, Color};
