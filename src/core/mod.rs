//! Core engine types: squares, sides, selection, RNG, configuration, errors.
//!
//! This module contains the building blocks shared by every game. Games
//! receive configuration via `GameConfig` rather than reading global state.

pub mod config;
pub mod error;
pub mod rng;
pub mod selection;
pub mod side;
pub mod square;

pub use config::{GameConfig, OverlayStyle, PiecePalette, Theme};
pub use error::ValidationError;
pub use rng::{GameRng, GameRngState, DIE_FACES};
pub use selection::Selection;
pub use side::{Side, SideMap};
pub use square::{Square, BOARD_SIZE};
