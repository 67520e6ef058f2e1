//! Backgammon.
//!
//! - 24 points, 15 checkers a side, standard starting layout
//! - White moves first, toward higher point indices; Black the other way
//! - Two dice per turn, four moves on doubles; as many dice as possible
//!   must be played, the larger one when only one fits
//! - Hitting blots, entering from the bar, bearing off from the home board
//! - The first side to bear off every checker wins
//!
//! Selection works on `Location`s: a point, the bar, or off the board.

mod board;
mod game;
mod rules;

pub use board::{Board, Color, Location, PointStack, CHECKERS_PER_SIDE, POINTS};
pub use game::{BackgammonEvent, BackgammonGame};
pub use rules::{legal_moves, single_moves, CheckerMove, RemainingDice};
