//! Move history records.
//!
//! History is append-only for the life of a game and is cleared only by a
//! reset or a load.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::Square;

use super::pieces::{Color, Piece, PieceKind};

/// A square as stored in history: coordinates plus algebraic name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareRecord {
    pub row: u8,
    pub col: u8,
    pub algebraic: String,
}

impl From<Square> for SquareRecord {
    fn from(sq: Square) -> Self {
        Self {
            row: sq.row,
            col: sq.col,
            algebraic: sq.algebraic(),
        }
    }
}

impl SquareRecord {
    #[must_use]
    pub fn square(&self) -> Square {
        Square::new(self.row, self.col)
    }
}

/// One applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece: PieceKind,
    pub color: Color,
    pub from: SquareRecord,
    pub to: SquareRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured: Option<Piece>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

impl MoveRecord {
    #[must_use]
    pub fn new(piece: Piece, from: Square, to: Square, captured: Option<Piece>) -> Self {
        Self {
            piece: piece.kind,
            color: piece.color,
            from: from.into(),
            to: to.into(),
            captured,
            timestamp: now_millis(),
        }
    }

    /// Short notation such as `"e2-e4"` or `"d4xe5"`.
    #[must_use]
    pub fn notation(&self) -> String {
        let sep = if self.captured.is_some() { 'x' } else { '-' };
        format!("{}{}{}", self.from.algebraic, sep, self.to.algebraic)
    }
}

pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_notation() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        let quiet = MoveRecord::new(pawn, Square::new(6, 4), Square::new(4, 4), None);
        assert_eq!(quiet.notation(), "e2-e4");
        assert_eq!(quiet.from.algebraic, "e2");
        assert_eq!(quiet.to.square(), Square::new(4, 4));

        let capture = MoveRecord::new(
            pawn,
            Square::new(4, 3),
            Square::new(3, 4),
            Some(Piece::new(PieceKind::Pawn, Color::Black)),
        );
        assert_eq!(capture.notation(), "d4xe5");
    }

    #[test]
    fn test_record_json_shape() {
        let knight = Piece::new(PieceKind::Knight, Color::Black);
        let record = MoveRecord::new(knight, Square::new(0, 6), Square::new(2, 5), None);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["piece"], "knight");
        assert_eq!(value["color"], "black");
        assert_eq!(value["from"]["algebraic"], "g8");
        assert_eq!(value["to"]["algebraic"], "f6");
        assert!(value.get("captured").is_none());
    }
}
