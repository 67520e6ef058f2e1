//! Pseudo-legal move generation.
//!
//! Moves respect each piece's pattern and board occupancy only. There is no
//! check detection, castling, en passant or promotion.

use crate::core::Square;

use super::board::Board;
use super::pieces::{Color, Movement, Piece};

/// Pseudo-legal targets for the piece on `from`, in direction-scan order.
///
/// Empty if `from` is empty.
#[must_use]
pub fn pseudo_legal_targets(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    match piece.kind.movement() {
        Movement::Pawn => pawn_targets(board, from, piece.color, &mut out),
        Movement::Slide(dirs) => slide_targets(board, from, piece, dirs, &mut out),
        Movement::Step(deltas) => step_targets(board, from, piece, deltas, &mut out),
    }
    out
}

fn pawn_targets(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let fwd = color.forward();

    if let Some(one) = from.offset(fwd, 0).filter(|&sq| board.get(sq).is_none()) {
        out.push(one);
        if from.row == color.pawn_row() {
            if let Some(two) = from.offset(2 * fwd, 0).filter(|&sq| board.get(sq).is_none()) {
                out.push(two);
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(sq) = from.offset(fwd, dc) {
            if board.get(sq).is_some_and(|p| p.color != color) {
                out.push(sq);
            }
        }
    }
}

fn slide_targets(board: &Board, from: Square, piece: Piece, dirs: &[(i32, i32)], out: &mut Vec<Square>) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(next) = cur.offset(dr, dc) {
            match board.get(next) {
                None => out.push(next),
                Some(other) => {
                    if other.color != piece.color {
                        out.push(next);
                    }
                    break;
                }
            }
            cur = next;
        }
    }
}

fn step_targets(board: &Board, from: Square, piece: Piece, deltas: &[(i32, i32)], out: &mut Vec<Square>) {
    for &(dr, dc) in deltas {
        if let Some(sq) = from.offset(dr, dc) {
            if board.get(sq).map_or(true, |other| other.color != piece.color) {
                out.push(sq);
            }
        }
    }
}
