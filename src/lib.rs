//! # board-engines
//!
//! Rule engines for chess, checkers and backgammon, driven by board clicks.
//!
//! ## Design Principles
//!
//! 1. **Rules, not rendering**: Engines expose board state, legal targets and
//!    move events. Drawing is left to the front end.
//!
//! 2. **One selection flow**: Every game answers the same questions through
//!    `BoardGame` (whose piece is this, where can it go, apply the move), and
//!    the click state machine is written once on top of them.
//!
//! 3. **Configuration Over Globals**: Theme, piece scale and dice seed live
//!    in a `GameConfig` handed to each engine at construction.
//!
//! ## Modules
//!
//! - `core`: Squares, sides, selection, RNG, configuration, errors
//! - `rules`: The `BoardGame` trait and the selection flow
//! - `games`: Chess, checkers and backgammon

pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, GameRngState, Selection, Side, SideMap, Square, Theme, ValidationError,
};

pub use crate::rules::{BoardGame, SelectOutcome};

pub use crate::games::backgammon::BackgammonGame;
pub use crate::games::checkers::CheckersGame;
pub use crate::games::chess::ChessGame;
