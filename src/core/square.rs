//! Square addressing for the 8×8 boards.
//!
//! Rows count from the top of the board as rendered: row 0 is black's back
//! rank in chess (rank 8), row 7 is white's (rank 1). Columns map to files
//! `a`..`h`.
//!
//! ```
//! use board_engines::core::Square;
//!
//! let e2 = Square::new(6, 4);
//! assert_eq!(e2.algebraic(), "e2");
//! assert_eq!(Square::from_algebraic("e2"), Some(e2));
//! ```

use serde::{Deserialize, Serialize};

/// Side length of the chess and checkers boards.
pub const BOARD_SIZE: usize = 8;

/// A square on an 8×8 board, addressed by `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Create a square.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is off the board.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE,
            "square off the board"
        );
        Self { row, col }
    }

    /// Create a square from signed coordinates, `None` when off the board.
    #[must_use]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// The square displaced by `(dr, dc)`, if still on the board.
    #[must_use]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        Self::try_new(i32::from(self.row) + dr, i32::from(self.col) + dc)
    }

    /// Iterate over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }

    /// True for the dark squares checkers are played on.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Algebraic name: file letter `a`..`h` plus rank digit `1`..`8`.
    #[must_use]
    pub fn algebraic(self) -> String {
        let file = char::from(b'a' + self.col);
        let rank = BOARD_SIZE as u8 - self.row;
        format!("{file}{rank}")
    }

    /// Parse an algebraic square name such as `"e4"`.
    #[must_use]
    pub fn from_algebraic(name: &str) -> Option<Self> {
        let bytes = name.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = bytes[0].checked_sub(b'a')?;
        let rank = bytes[1].checked_sub(b'0')?;
        if !(1..=BOARD_SIZE as u8).contains(&rank) {
            return None;
        }
        Self::try_new(i32::from(BOARD_SIZE as u8 - rank), i32::from(col))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algebraic_corners() {
        assert_eq!(Square::new(0, 0).algebraic(), "a8");
        assert_eq!(Square::new(7, 0).algebraic(), "a1");
        assert_eq!(Square::new(7, 7).algebraic(), "h1");
        assert_eq!(Square::new(4, 4).algebraic(), "e4");
    }

    #[test]
    fn test_from_algebraic() {
        assert_eq!(Square::from_algebraic("a8"), Some(Square::new(0, 0)));
        assert_eq!(Square::from_algebraic("h1"), Some(Square::new(7, 7)));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic("a0"), None);
        assert_eq!(Square::from_algebraic("e44"), None);
    }

    #[test]
    fn test_algebraic_round_trip_all_squares() {
        for sq in Square::all() {
            assert_eq!(Square::from_algebraic(&sq.algebraic()), Some(sq));
        }
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Square::new(1, 1)));
        assert_eq!(Square::new(7, 7).offset(1, 0), None);
    }

    #[test]
    fn test_dark_squares() {
        assert!(!Square::new(0, 0).is_dark());
        assert!(Square::new(0, 1).is_dark());
        assert_eq!(Square::all().filter(|s| s.is_dark()).count(), 32);
    }

    #[test]
    #[should_panic(expected = "square off the board")]
    fn test_new_rejects_off_board() {
        let _ = Square::new(8, 0);
    }
}
