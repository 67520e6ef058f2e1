//! The 8×8 chess board.
//!
//! The grid is the only record of where pieces stand, so a piece's position
//! and the board's occupant can never disagree.

use crate::core::{Square, BOARD_SIZE};

use super::pieces::{Color, Piece, PieceKind};

/// Grid of optional pieces, indexed `[row][col]`.
pub type Grid = [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE];

const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The standard starting position.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::Black, Color::White] {
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                board.grid[color.back_row() as usize][col] = Some(Piece::new(kind, color));
                board.grid[color.pawn_row() as usize][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Build a board from a full grid.
    #[must_use]
    pub fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row as usize][sq.col as usize]
    }

    /// Place `piece` on `sq`, returning whatever stood there.
    pub fn put(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.grid[sq.row as usize][sq.col as usize].replace(piece)
    }

    /// Empty `sq`, returning its occupant.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.grid[sq.row as usize][sq.col as usize].take()
    }

    /// All occupied squares with their pieces, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|p| (sq, p)))
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// True if `color` still has a king on the board.
    #[must_use]
    pub fn has_king(&self, color: Color) -> bool {
        self.pieces()
            .any(|(_, p)| p.kind == PieceKind::King && p.color == color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let board = Board::standard();
        assert_eq!(board.piece_count(), 32);
        assert_eq!(
            board.get(Square::new(7, 4)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.get(Square::new(0, 3)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        for col in 0..8 {
            assert_eq!(
                board.get(Square::new(6, col)),
                Some(Piece::new(PieceKind::Pawn, Color::White))
            );
            assert_eq!(board.get(Square::new(3, col)), None);
        }
    }

    #[test]
    fn test_put_and_take() {
        let mut board = Board::empty();
        let sq = Square::new(4, 4);
        let rook = Piece::new(PieceKind::Rook, Color::White);
        assert_eq!(board.put(sq, rook), None);
        assert_eq!(board.get(sq), Some(rook));
        assert_eq!(board.take(sq), Some(rook));
        assert_eq!(board.get(sq), None);
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_has_king() {
        let mut board = Board::standard();
        assert!(board.has_king(Color::Black));
        board.take(Square::new(0, 4));
        assert!(!board.has_king(Color::Black));
        assert!(board.has_king(Color::White));
    }
}
