//! Errors raised when loading a saved game.
//!
//! Loading is the only fallible operation in the engines; everything else is
//! a total function that turns bad input into a no-op.

/// Reasons a saved-game document is rejected.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported format version {found:?}, expected 1.x")]
    UnsupportedVersion { found: String },

    #[error("board must be 8x8, found {rows} rows")]
    BoardShape { rows: usize, bad_row: Option<usize> },

    #[error("invalid turn {0:?}")]
    InvalidTurn(String),

    #[error("invalid piece type {found:?} at row {row}, col {col}")]
    InvalidPieceType { found: String, row: usize, col: usize },

    #[error("invalid piece color {found:?} at row {row}, col {col}")]
    InvalidPieceColor { found: String, row: usize, col: usize },

    #[error("too many pieces: {0} (at most 32)")]
    TooManyPieces(usize),

    #[error("malformed move record #{index}: {reason}")]
    MalformedMoveRecord { index: usize, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ValidationError::UnsupportedVersion {
            found: "2.0".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported format version \"2.0\", expected 1.x");

        let err = ValidationError::InvalidPieceType {
            found: "wizard".to_string(),
            row: 1,
            col: 2,
        };
        assert_eq!(err.to_string(), "invalid piece type \"wizard\" at row 1, col 2");

        let err = ValidationError::TooManyPieces(33);
        assert_eq!(err.to_string(), "too many pieces: 33 (at most 32)");
    }

    #[test]
    fn json_errors_convert() {
        let err: ValidationError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ValidationError::Json(_)));
    }
}
