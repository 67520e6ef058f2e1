//! Which single-checker moves the remaining dice allow.
//!
//! A player must use as many dice as the position permits. When only one of
//! two different dice can be played, it must be the larger one if that is
//! playable.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::{Board, Color, Location, POINTS};

/// Dice still to be played this turn (two, or four on doubles).
pub type RemainingDice = SmallVec<[u8; 4]>;

/// One checker moved by one die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckerMove {
    pub from: Location,
    pub to: Location,
    pub die: u8,
}

fn sources() -> impl Iterator<Item = Location> {
    std::iter::once(Location::Bar).chain((0..POINTS as u8).map(Location::Point))
}

/// Dice values in `remaining`, each listed once.
fn distinct(remaining: &[u8]) -> SmallVec<[u8; 2]> {
    let mut dice: SmallVec<[u8; 2]> = SmallVec::new();
    for &die in remaining {
        if !dice.contains(&die) {
            dice.push(die);
        }
    }
    dice
}

fn without_one(remaining: &[u8], die: u8) -> RemainingDice {
    let mut rest: RemainingDice = remaining.iter().copied().collect();
    if let Some(pos) = rest.iter().position(|&d| d == die) {
        rest.remove(pos);
    }
    rest
}

/// Every move playable with one of `remaining`, ignoring later dice.
#[must_use]
pub fn single_moves(board: &Board, color: Color, remaining: &[u8]) -> Vec<CheckerMove> {
    let dice = distinct(remaining);
    let mut moves = Vec::new();
    for from in sources() {
        if board.count_at(from, color) == 0 {
            continue;
        }
        for &die in &dice {
            if let Some(to) = board.destination(color, from, die) {
                moves.push(CheckerMove { from, to, die });
            }
        }
    }
    moves
}

/// Most dice that can be played in sequence from this position.
fn max_playable(board: &Board, color: Color, remaining: &[u8]) -> usize {
    if remaining.is_empty() {
        return 0;
    }
    let mut best = 0;
    for mv in single_moves(board, color, remaining) {
        let mut next = board.clone();
        next.move_checker(color, mv.from, mv.to);
        let depth = 1 + max_playable(&next, color, &without_one(remaining, mv.die));
        best = best.max(depth);
        if best == remaining.len() {
            break;
        }
    }
    best
}

/// Moves that keep the turn on course to use the most dice possible.
#[must_use]
pub fn legal_moves(board: &Board, color: Color, remaining: &[u8]) -> Vec<CheckerMove> {
    let scored: Vec<(CheckerMove, usize)> = single_moves(board, color, remaining)
        .into_iter()
        .map(|mv| {
            let mut next = board.clone();
            next.move_checker(color, mv.from, mv.to);
            (mv, 1 + max_playable(&next, color, &without_one(remaining, mv.die)))
        })
        .collect();

    let Some(best) = scored.iter().map(|(_, depth)| *depth).max() else {
        return Vec::new();
    };
    let mut moves: Vec<CheckerMove> = scored
        .into_iter()
        .filter(|(_, depth)| *depth == best)
        .map(|(mv, _)| mv)
        .collect();

    if best == 1 {
        if let [a, b] = *remaining {
            let high = a.max(b);
            if a != b && moves.iter().any(|mv| mv.die == high) {
                moves.retain(|mv| mv.die == high);
            }
        }
    }
    moves
}

/// Remaining dice after spending `die`.
#[must_use]
pub fn spend(remaining: &[u8], die: u8) -> RemainingDice {
    without_one(remaining, die)
}
