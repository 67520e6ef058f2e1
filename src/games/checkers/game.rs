//! Checkers engine.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, Selection, Side, Square, BOARD_SIZE};
use crate::rules::BoardGame;

/// Checkers piece color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Row delta of a man's step. Red moves up the board.
    #[must_use]
    pub const fn forward(self) -> i32 {
        match self {
            Self::Red => -1,
            Self::Black => 1,
        }
    }

    /// Row on which a man of this color is crowned.
    #[must_use]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Self::Red => 0,
            Self::Black => BOARD_SIZE as u8 - 1,
        }
    }
}

impl Side for Color {
    const FIRST: Self = Color::Red;

    fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Black => write!(f, "black"),
        }
    }
}

/// A man, or a king once crowned. Crowning is permanent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checker {
    pub color: Color,
    pub king: bool,
}

impl Checker {
    #[must_use]
    pub const fn man(color: Color) -> Self {
        Self { color, king: false }
    }

    #[must_use]
    pub const fn king(color: Color) -> Self {
        Self { color, king: true }
    }
}

/// Grid of optional checkers, indexed `[row][col]`.
pub type CheckersGrid = [[Option<Checker>; BOARD_SIZE]; BOARD_SIZE];

/// Render-relevant facts produced by a checkers move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckersEvent {
    Moved { checker: Checker, from: Square, to: Square },
    /// The checker on `at` was jumped and removed.
    Captured { checker: Checker, at: Square },
    /// The checker now on `at` was crowned.
    Promoted { at: Square },
    TurnChanged(Color),
}

const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Clone, Debug)]
pub struct CheckersGame {
    config: GameConfig,
    grid: CheckersGrid,
    turn: Color,
    selection: Selection<Square>,
}

impl Default for CheckersGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl CheckersGame {
    /// A new game: black on the dark squares of rows 0–2, red on rows 5–7,
    /// red to move.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config: config.normalized(),
            grid: standard_grid(),
            turn: Color::FIRST,
            selection: Selection::default(),
        }
    }

    /// A game set up from an arbitrary position.
    #[must_use]
    pub fn from_position(config: GameConfig, grid: CheckersGrid, turn: Color) -> Self {
        Self {
            grid,
            turn,
            ..Self::new(config)
        }
    }

    /// Snapshot of every square's occupant.
    #[must_use]
    pub fn board_state(&self) -> CheckersGrid {
        self.grid
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Checker> {
        self.grid[sq.row as usize][sq.col as usize]
    }

    /// All checkers with their squares, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Checker)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|c| (sq, c)))
    }

    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, c)| c.color == color).count()
    }

    fn set(&mut self, sq: Square, checker: Option<Checker>) {
        self.grid[sq.row as usize][sq.col as usize] = checker;
    }

    /// Whether the checker on `from` may move to `to`.
    ///
    /// A step is one diagonal square onto an empty square, forward only for
    /// men. A jump is two diagonal squares over an opposing checker onto an
    /// empty square. There is no chaining and no compulsory capture.
    #[must_use]
    pub fn is_valid_move(&self, from: Square, to: Square) -> bool {
        let Some(checker) = self.piece_at(from) else {
            return false;
        };
        if self.piece_at(to).is_some() {
            return false;
        }

        let row_diff = i32::from(to.row) - i32::from(from.row);
        let col_diff = (i32::from(to.col) - i32::from(from.col)).abs();

        match (col_diff, row_diff.abs()) {
            (1, 1) => checker.king || row_diff == checker.color.forward(),
            (2, 2) => self
                .piece_at(midpoint(from, to))
                .is_some_and(|jumped| jumped.color != checker.color),
            _ => false,
        }
    }

    /// Every valid destination for the checker on `from`, steps first.
    #[must_use]
    pub fn valid_moves(&self, from: Square) -> Vec<Square> {
        [1, 2]
            .into_iter()
            .flat_map(|dist| DIAGONALS.iter().map(move |&(dr, dc)| (dr * dist, dc * dist)))
            .filter_map(|(dr, dc)| from.offset(dr, dc))
            .filter(|&to| self.is_valid_move(from, to))
            .collect()
    }

    fn has_any_move(&self, color: Color) -> bool {
        self.pieces()
            .filter(|(_, c)| c.color == color)
            .any(|(sq, _)| !self.valid_moves(sq).is_empty())
    }
}

fn midpoint(from: Square, to: Square) -> Square {
    Square::new((from.row + to.row) / 2, (from.col + to.col) / 2)
}

fn standard_grid() -> CheckersGrid {
    let mut grid: CheckersGrid = [[None; BOARD_SIZE]; BOARD_SIZE];
    for sq in Square::all().filter(|sq| sq.is_dark()) {
        let checker = match sq.row {
            0..=2 => Some(Checker::man(Color::Black)),
            5..=7 => Some(Checker::man(Color::Red)),
            _ => None,
        };
        grid[sq.row as usize][sq.col as usize] = checker;
    }
    grid
}

impl BoardGame for CheckersGame {
    type Side = Color;
    type Location = Square;
    type Event = CheckersEvent;

    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn current_turn(&self) -> Color {
        self.turn
    }

    fn holds_own_piece(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some_and(|c| c.color == self.turn)
    }

    fn legal_targets(&self, from: Square) -> Vec<Square> {
        if self.winner().is_some() || !self.holds_own_piece(from) {
            return Vec::new();
        }
        self.valid_moves(from)
    }

    fn apply_move(&mut self, from: Square, to: Square) -> Vec<CheckersEvent> {
        debug_assert!(
            self.is_valid_move(from, to),
            "apply_move({from}, {to}) with an invalid checkers move"
        );
        let Some(mut checker) = self.piece_at(from) else {
            return Vec::new();
        };

        let mut events = Vec::with_capacity(3);
        self.set(from, None);

        if (i32::from(to.col) - i32::from(from.col)).abs() == 2 {
            let mid = midpoint(from, to);
            if let Some(jumped) = self.piece_at(mid) {
                self.set(mid, None);
                tracing::debug!(at = %mid, color = %jumped.color, "checker captured");
                events.push(CheckersEvent::Captured { checker: jumped, at: mid });
            }
        }

        events.push(CheckersEvent::Moved { checker, from, to });

        if !checker.king && to.row == checker.color.promotion_row() {
            checker.king = true;
            tracing::debug!(at = %to, color = %checker.color, "checker crowned");
            events.push(CheckersEvent::Promoted { at: to });
        }

        self.set(to, Some(checker));
        self.selection.clear();
        events
    }

    fn end_move(&mut self, events: &mut Vec<CheckersEvent>) {
        self.turn = self.turn.opponent();
        tracing::debug!(turn = %self.turn, "turn changed");
        events.push(CheckersEvent::TurnChanged(self.turn));
    }

    fn selection(&self) -> &Selection<Square> {
        &self.selection
    }

    fn selection_mut(&mut self) -> &mut Selection<Square> {
        &mut self.selection
    }

    /// The opponent of the side to move, once the side to move has no
    /// checkers or no valid move.
    fn winner(&self) -> Option<Color> {
        if self.has_any_move(self.turn) {
            None
        } else {
            Some(self.turn.opponent())
        }
    }

    fn reset(&mut self) {
        self.grid = standard_grid();
        self.turn = Color::FIRST;
        self.selection.clear();
        tracing::info!("checkers game reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::SelectOutcome;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    fn empty() -> CheckersGrid {
        [[None; BOARD_SIZE]; BOARD_SIZE]
    }

    #[test]
    fn test_standard_layout() {
        let game = CheckersGame::default();
        assert_eq!(game.piece_count(Color::Red), 12);
        assert_eq!(game.piece_count(Color::Black), 12);
        assert_eq!(game.piece_at(sq(0, 1)), Some(Checker::man(Color::Black)));
        assert_eq!(game.piece_at(sq(5, 0)), Some(Checker::man(Color::Red)));
        assert_eq!(game.piece_at(sq(0, 0)), None);
        assert_eq!(game.current_turn(), Color::Red);
        assert!(game.pieces().all(|(sq, _)| sq.is_dark()));
    }

    #[test]
    fn test_men_step_forward_only() {
        let mut grid = empty();
        grid[4][3] = Some(Checker::man(Color::Red));
        grid[2][3] = Some(Checker::man(Color::Black));
        let game = CheckersGame::from_position(GameConfig::default(), grid, Color::Red);

        assert!(game.is_valid_move(sq(4, 3), sq(3, 2)));
        assert!(game.is_valid_move(sq(4, 3), sq(3, 4)));
        assert!(!game.is_valid_move(sq(4, 3), sq(5, 2)));
        assert!(game.is_valid_move(sq(2, 3), sq(3, 4)));
        assert!(!game.is_valid_move(sq(2, 3), sq(1, 2)));
        // straight and long moves are never valid
        assert!(!game.is_valid_move(sq(4, 3), sq(3, 3)));
        assert!(!game.is_valid_move(sq(4, 3), sq(1, 0)));
    }

    #[test]
    fn test_king_steps_both_ways() {
        let mut grid = empty();
        grid[4][3] = Some(Checker::king(Color::Red));
        let game = CheckersGame::from_position(GameConfig::default(), grid, Color::Red);
        let mut moves = game.valid_moves(sq(4, 3));
        moves.sort();
        assert_eq!(moves, vec![sq(3, 2), sq(3, 4), sq(5, 2), sq(5, 4)]);
    }

    #[test]
    fn test_jump_requires_opponent_in_middle() {
        let mut grid = empty();
        grid[5][2] = Some(Checker::man(Color::Red));
        grid[4][3] = Some(Checker::man(Color::Black));
        grid[4][1] = Some(Checker::man(Color::Red));
        let game = CheckersGame::from_position(GameConfig::default(), grid, Color::Red);

        assert!(game.is_valid_move(sq(5, 2), sq(3, 4)));
        assert!(!game.is_valid_move(sq(5, 2), sq(3, 0)));
        assert!(!game.is_valid_move(sq(5, 2), sq(7, 4)));
    }

    #[test]
    fn test_jump_removes_exactly_the_jumped_piece() {
        let mut grid = empty();
        grid[5][2] = Some(Checker::man(Color::Red));
        grid[4][3] = Some(Checker::man(Color::Black));
        grid[0][7] = Some(Checker::man(Color::Black));
        let mut game = CheckersGame::from_position(GameConfig::default(), grid, Color::Red);

        let events = game.apply_move(sq(5, 2), sq(3, 4));
        assert_eq!(
            events[0],
            CheckersEvent::Captured {
                checker: Checker::man(Color::Black),
                at: sq(4, 3),
            }
        );
        assert_eq!(game.piece_at(sq(4, 3)), None);
        assert_eq!(game.piece_at(sq(3, 4)), Some(Checker::man(Color::Red)));
        assert_eq!(game.piece_count(Color::Black), 1);
        assert_eq!(game.piece_count(Color::Red), 1);
    }

    #[test]
    fn test_promotion_is_permanent() {
        let mut grid = empty();
        grid[1][2] = Some(Checker::man(Color::Red));
        grid[6][5] = Some(Checker::man(Color::Black));
        let mut game = CheckersGame::from_position(GameConfig::default(), grid, Color::Red);

        assert_eq!(game.select(sq(1, 2)), SelectOutcome::Selected(sq(1, 2)));
        match game.select(sq(0, 1)) {
            SelectOutcome::Moved(events) => {
                assert!(events.contains(&CheckersEvent::Promoted { at: sq(0, 1) }));
            }
            other => panic!("expected a move, got {other:?}"),
        }
        assert_eq!(game.piece_at(sq(0, 1)), Some(Checker::king(Color::Red)));

        // black moves, then the red king steps back down and stays a king
        game.select(sq(6, 5));
        assert!(game.select(sq(7, 4)).is_move());
        game.select(sq(0, 1));
        assert!(game.select(sq(1, 2)).is_move());
        assert_eq!(game.piece_at(sq(1, 2)), Some(Checker::king(Color::Red)));
    }

    #[test]
    fn test_black_promotes_on_last_row() {
        let mut grid = empty();
        grid[6][1] = Some(Checker::man(Color::Black));
        grid[0][1] = Some(Checker::man(Color::Red));
        let mut game = CheckersGame::from_position(GameConfig::default(), grid, Color::Black);
        let events = game.apply_move(sq(6, 1), sq(7, 2));
        assert!(events.contains(&CheckersEvent::Promoted { at: sq(7, 2) }));
        assert!(game.piece_at(sq(7, 2)).is_some_and(|c| c.king));
    }

    #[test]
    fn test_winner_when_side_to_move_is_out_of_pieces() {
        let mut grid = empty();
        grid[5][2] = Some(Checker::man(Color::Red));
        grid[4][3] = Some(Checker::man(Color::Black));
        let mut game = CheckersGame::from_position(GameConfig::default(), grid, Color::Red);
        assert_eq!(game.winner(), None);

        game.select(sq(5, 2));
        assert!(game.select(sq(3, 4)).is_move());
        assert_eq!(game.winner(), Some(Color::Red));
        assert_eq!(game.select(sq(3, 4)), SelectOutcome::Ignored);
    }

    #[test]
    fn test_reset() {
        let mut game = CheckersGame::default();
        game.select(sq(5, 0));
        game.select(sq(4, 1));
        game.reset();
        assert_eq!(game.board_state(), CheckersGame::default().board_state());
        assert_eq!(game.current_turn(), Color::Red);
        assert_eq!(game.selected(), None);
    }
}
