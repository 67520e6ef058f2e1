//! Chess with pseudo-legal movement.
//!
//! - 8×8 board in the standard layout, white moves first
//! - Pawns push one or two squares and capture diagonally
//! - Rooks, bishops and queens slide; knights and kings jump
//! - Capturing the opposing king wins
//! - Move history with algebraic squares, JSON save/load
//!
//! Check, checkmate, castling, en passant and promotion are not modeled.

mod board;
mod game;
mod history;
mod movegen;
mod pieces;
mod serialize;

pub use board::{Board, Grid};
pub use game::{ChessEvent, ChessGame};
pub use history::{MoveRecord, SquareRecord};
pub use movegen::pseudo_legal_targets;
pub use pieces::{Color, Movement, Piece, PieceKind};
pub use serialize::{FORMAT_VERSION, MAX_PIECES, VERSION_PREFIX};
