//! Chess engine: board, turn, selection and history.

use crate::core::{GameConfig, Selection, Side, Square};
use crate::rules::BoardGame;

use super::board::{Board, Grid};
use super::history::MoveRecord;
use super::movegen::pseudo_legal_targets;
use super::pieces::{Color, Piece};

/// Render-relevant facts produced by a chess move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChessEvent {
    /// A piece left `from` and now stands on `to`.
    Moved { piece: Piece, from: Square, to: Square },
    /// The piece on `at` was captured (removed before the mover arrived).
    Captured { piece: Piece, at: Square },
    /// It is now `0`'s turn.
    TurnChanged(Color),
}

/// A chess game with pseudo-legal movement.
#[derive(Clone, Debug)]
pub struct ChessGame {
    config: GameConfig,
    board: Board,
    turn: Color,
    selection: Selection<Square>,
    history: Vec<MoveRecord>,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl ChessGame {
    /// A new game in the standard starting position, white to move.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config: config.normalized(),
            board: Board::standard(),
            turn: Color::FIRST,
            selection: Selection::default(),
            history: Vec::new(),
        }
    }

    /// A game set up from an arbitrary position, with empty history.
    #[must_use]
    pub fn from_position(config: GameConfig, board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            ..Self::new(config)
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Snapshot of every square's occupant.
    #[must_use]
    pub fn board_state(&self) -> Grid {
        *self.board.grid()
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq)
    }

    /// All pieces with their squares, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.board.pieces()
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Pseudo-legal targets for whatever piece stands on `from`, regardless
    /// of whose turn it is.
    #[must_use]
    pub fn valid_moves(&self, from: Square) -> Vec<Square> {
        pseudo_legal_targets(&self.board, from)
    }

    /// Empty board, white to move, no history. The state a rejected load
    /// leaves behind.
    pub fn clear(&mut self) {
        self.board = Board::empty();
        self.turn = Color::FIRST;
        self.selection.clear();
        self.history.clear();
    }

    pub(super) fn restore(&mut self, board: Board, turn: Color, history: Vec<MoveRecord>) {
        self.board = board;
        self.turn = turn;
        self.selection.clear();
        self.history = history;
    }
}

impl BoardGame for ChessGame {
    type Side = Color;
    type Location = Square;
    type Event = ChessEvent;

    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn current_turn(&self) -> Color {
        self.turn
    }

    fn holds_own_piece(&self, sq: Square) -> bool {
        self.board.get(sq).is_some_and(|p| p.color == self.turn)
    }

    fn legal_targets(&self, from: Square) -> Vec<Square> {
        if self.winner().is_some() || !self.holds_own_piece(from) {
            return Vec::new();
        }
        self.valid_moves(from)
    }

    fn apply_move(&mut self, from: Square, to: Square) -> Vec<ChessEvent> {
        debug_assert!(
            self.valid_moves(from).contains(&to),
            "apply_move({from}, {to}) with a target outside valid_moves"
        );
        let Some(piece) = self.board.take(from) else {
            return Vec::new();
        };

        let mut events = Vec::with_capacity(2);
        let captured = self.board.put(to, piece);
        if let Some(victim) = captured {
            tracing::debug!(%to, victim = %victim.kind, color = %victim.color, "piece captured");
            events.push(ChessEvent::Captured { piece: victim, at: to });
        }
        events.push(ChessEvent::Moved { piece, from, to });

        let record = MoveRecord::new(piece, from, to, captured);
        tracing::debug!(notation = %record.notation(), piece = %piece.kind, "chess move applied");
        self.history.push(record);
        self.selection.clear();
        events
    }

    fn end_move(&mut self, events: &mut Vec<ChessEvent>) {
        self.turn = self.turn.opponent();
        tracing::debug!(turn = %self.turn, "turn changed");
        events.push(ChessEvent::TurnChanged(self.turn));
    }

    fn selection(&self) -> &Selection<Square> {
        &self.selection
    }

    fn selection_mut(&mut self) -> &mut Selection<Square> {
        &mut self.selection
    }

    /// The side whose opponent has lost its king.
    fn winner(&self) -> Option<Color> {
        match (self.board.has_king(Color::White), self.board.has_king(Color::Black)) {
            (true, false) => Some(Color::White),
            (false, true) => Some(Color::Black),
            _ => None,
        }
    }

    fn reset(&mut self) {
        self.restore(Board::standard(), Color::FIRST, Vec::new());
        tracing::info!("chess game reset");
    }
}
