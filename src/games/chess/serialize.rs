//! JSON save format.
//!
//! ```text
//! {
//!   "metadata": { "version": "1.0", "game": "chess", "exportedAt": 1700000000000 },
//!   "currentTurn": "white",
//!   "board": [[{"type": "rook", "color": "black"}, null, ...], ...],   // 8 rows of 8
//!   "moveHistory": [
//!     { "piece": "pawn", "color": "white",
//!       "from": {"row": 6, "col": 4, "algebraic": "e2"},
//!       "to":   {"row": 4, "col": 4, "algebraic": "e4"},
//!       "timestamp": 1700000000000 }
//!   ]
//! }
//! ```
//!
//! Loading is all-or-nothing: any validation failure leaves the game cleared.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{Square, ValidationError, BOARD_SIZE};
use crate::rules::BoardGame;

use super::board::{Board, Grid};
use super::game::ChessGame;
use super::history::{now_millis, MoveRecord};
use super::pieces::{Color, Piece, PieceKind};

/// Format version written by `export_to_json`.
pub const FORMAT_VERSION: &str = "1.0";

/// Accepted version prefix on load.
pub const VERSION_PREFIX: &str = "1.";

/// Upper bound on pieces in a loaded position.
pub const MAX_PIECES: usize = 32;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata {
    version: &'static str,
    game: &'static str,
    exported_at: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SavedGame<'a> {
    metadata: Metadata,
    current_turn: Color,
    board: &'a Grid,
    move_history: &'a [MoveRecord],
}

#[derive(Deserialize)]
struct RawMetadata {
    version: String,
}

#[derive(Deserialize)]
struct RawPiece {
    #[serde(rename = "type")]
    kind: String,
    color: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGame {
    metadata: RawMetadata,
    #[serde(default)]
    current_turn: Option<String>,
    board: Vec<Vec<Option<RawPiece>>>,
    #[serde(default)]
    move_history: Vec<Value>,
}

impl ChessGame {
    /// Serialize the full game state.
    #[must_use]
    pub fn export_to_json(&self) -> String {
        let saved = SavedGame {
            metadata: Metadata {
                version: FORMAT_VERSION,
                game: "chess",
                exported_at: now_millis(),
            },
            current_turn: self.current_turn(),
            board: self.board().grid(),
            move_history: self.history(),
        };
        serde_json::to_string_pretty(&saved).unwrap_or_default()
    }

    /// Replace the game state with a saved document.
    ///
    /// On error the game is left cleared (empty board, white to move, no
    /// history), never half-loaded.
    pub fn load_from_json(&mut self, json: &str) -> Result<(), ValidationError> {
        match parse_saved_game(json) {
            Ok((board, turn, history)) => {
                tracing::info!(
                    pieces = board.piece_count(),
                    moves = history.len(),
                    %turn,
                    "chess game loaded"
                );
                self.restore(board, turn, history);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "rejected chess save");
                self.clear();
                Err(err)
            }
        }
    }
}

fn parse_saved_game(json: &str) -> Result<(Board, Color, Vec<MoveRecord>), ValidationError> {
    let raw: RawGame = serde_json::from_str(json)?;

    if !raw.metadata.version.starts_with(VERSION_PREFIX) {
        return Err(ValidationError::UnsupportedVersion {
            found: raw.metadata.version,
        });
    }

    if raw.board.len() != BOARD_SIZE {
        return Err(ValidationError::BoardShape {
            rows: raw.board.len(),
            bad_row: None,
        });
    }
    if let Some(bad) = raw.board.iter().position(|row| row.len() != BOARD_SIZE) {
        return Err(ValidationError::BoardShape {
            rows: raw.board.len(),
            bad_row: Some(bad),
        });
    }

    let turn_name = raw.current_turn.unwrap_or_default();
    let turn = Color::parse(&turn_name).ok_or(ValidationError::InvalidTurn(turn_name))?;

    let mut grid: Grid = [[None; BOARD_SIZE]; BOARD_SIZE];
    let mut count = 0;
    for (row, cells) in raw.board.into_iter().enumerate() {
        for (col, cell) in cells.into_iter().enumerate() {
            let Some(raw_piece) = cell else { continue };
            grid[row][col] = Some(parse_piece(raw_piece, row, col)?);
            count += 1;
        }
    }
    if count > MAX_PIECES {
        return Err(ValidationError::TooManyPieces(count));
    }

    let history = raw
        .move_history
        .iter()
        .enumerate()
        .map(|(index, value)| parse_move(index, value))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((Board::from_grid(grid), turn, history))
}

fn parse_piece(raw: RawPiece, row: usize, col: usize) -> Result<Piece, ValidationError> {
    let kind = PieceKind::parse(&raw.kind).ok_or(ValidationError::InvalidPieceType {
        found: raw.kind,
        row,
        col,
    })?;
    let color = Color::parse(&raw.color).ok_or(ValidationError::InvalidPieceColor {
        found: raw.color,
        row,
        col,
    })?;
    Ok(Piece::new(kind, color))
}

fn parse_move(index: usize, value: &Value) -> Result<MoveRecord, ValidationError> {
    let malformed = |reason: &str| ValidationError::MalformedMoveRecord {
        index,
        reason: reason.to_string(),
    };

    let piece = value
        .get("piece")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("missing piece"))?;
    let piece = PieceKind::parse(piece).ok_or_else(|| malformed("unknown piece type"))?;

    let color = value
        .get("color")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("missing color"))?;
    let color = Color::parse(color).ok_or_else(|| malformed("unknown color"))?;

    let from = value
        .get("from")
        .and_then(parse_square)
        .ok_or_else(|| malformed("missing or invalid from"))?;
    let to = value
        .get("to")
        .and_then(parse_square)
        .ok_or_else(|| malformed("missing or invalid to"))?;

    let captured = match value.get("captured") {
        None | Some(Value::Null) => None,
        Some(v) => Some(
            serde_json::from_value::<Piece>(v.clone()).map_err(|_| malformed("invalid captured piece"))?,
        ),
    };

    let timestamp = value.get("timestamp").and_then(Value::as_u64).unwrap_or(0);

    Ok(MoveRecord {
        piece,
        color,
        from: from.into(),
        to: to.into(),
        captured,
        timestamp,
    })
}

/// A square given as `"e4"`, `{"algebraic": "e4"}` or `{"row": 4, "col": 4}`.
fn parse_square(value: &Value) -> Option<Square> {
    if let Some(name) = value.as_str() {
        return Square::from_algebraic(name);
    }
    if let Some(name) = value.get("algebraic").and_then(Value::as_str) {
        return Square::from_algebraic(name);
    }
    let row = value.get("row").and_then(Value::as_i64)?;
    let col = value.get("col").and_then(Value::as_i64)?;
    Square::try_new(i32::try_from(row).ok()?, i32::try_from(col).ok()?)
}
