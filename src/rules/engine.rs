//! The `BoardGame` trait: the narrow interface a front end drives.
//!
//! Games implement the rules:
//! - Which locations hold a piece the side to move may pick up
//! - Legal targets for a picked-up piece
//! - How a move changes the board
//! - What happens to the turn after a move
//!
//! The selection flow (click handling) is written once, here, on top of
//! those rules.

use std::fmt::Debug;

use crate::core::{GameConfig, Selection, Side};

/// Result of feeding one click into the selection flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome<L, E> {
    /// A piece of the side to move is now selected (fresh pick or re-aim).
    Selected(L),
    /// The selected piece was clicked again and is no longer selected.
    Deselected,
    /// The selected piece moved. Carries everything the move caused.
    Moved(Vec<E>),
    /// Nothing happened: opponent piece, empty square, illegal target, or
    /// game over.
    Ignored,
}

impl<L, E> SelectOutcome<L, E> {
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, SelectOutcome::Moved(_))
    }
}

/// Rules of a two-player board game.
///
/// ## Two-phase moves
///
/// `legal_targets(from)` then `apply_move(from, to)`. `apply_move` does not
/// re-validate: passing a target that `legal_targets` did not return is a
/// bug in the caller and trips a debug assertion. `select` only ever applies
/// targets it has just generated.
pub trait BoardGame {
    /// The two colors of this game.
    type Side: Side;

    /// Where a piece can stand (a square, a point, the bar).
    type Location: Copy + Eq + Debug;

    /// Render-relevant facts produced by a move.
    type Event: Clone + Debug;

    /// The configuration this engine was built with.
    fn config(&self) -> &GameConfig;

    /// The side to move.
    fn current_turn(&self) -> Self::Side;

    /// True if `loc` holds a piece the side to move may pick up.
    fn holds_own_piece(&self, loc: Self::Location) -> bool;

    /// Legal destinations for the piece at `from`.
    ///
    /// Empty when `from` holds no piece of the side to move, or the game is
    /// over.
    fn legal_targets(&self, from: Self::Location) -> Vec<Self::Location>;

    /// Move the piece at `from` to `to`. Does not touch the turn.
    ///
    /// Precondition: `to` is in `legal_targets(from)`.
    fn apply_move(&mut self, from: Self::Location, to: Self::Location) -> Vec<Self::Event>;

    /// Turn bookkeeping after a completed move, appending any events it
    /// causes (typically a turn change).
    fn end_move(&mut self, events: &mut Vec<Self::Event>);

    fn selection(&self) -> &Selection<Self::Location>;

    fn selection_mut(&mut self) -> &mut Selection<Self::Location>;

    /// The winning side, once the game is decided.
    fn winner(&self) -> Option<Self::Side>;

    /// Restore the standard starting position.
    fn reset(&mut self);

    // === Convenience Methods ===

    /// The selected location, if any.
    fn selected(&self) -> Option<Self::Location> {
        self.selection().get()
    }

    fn clear_selection(&mut self) {
        self.selection_mut().clear();
    }

    /// Feed one click at `loc` into the selection flow.
    ///
    /// Precedence: clicking the selected piece deselects it; clicking a
    /// legal target of the selected piece moves there; clicking a piece of
    /// the side to move selects it (re-aiming if another was selected).
    /// Anything else is ignored and changes nothing.
    fn select(&mut self, loc: Self::Location) -> SelectOutcome<Self::Location, Self::Event> {
        if self.winner().is_some() {
            return SelectOutcome::Ignored;
        }

        if let Some(from) = self.selected() {
            if from == loc {
                self.clear_selection();
                return SelectOutcome::Deselected;
            }
            if self.legal_targets(from).contains(&loc) {
                tracing::debug!(?from, to = ?loc, "applying selected move");
                let mut events = self.apply_move(from, loc);
                self.clear_selection();
                self.end_move(&mut events);
                return SelectOutcome::Moved(events);
            }
        }

        if self.holds_own_piece(loc) {
            self.selection_mut().set(loc);
            SelectOutcome::Selected(loc)
        } else {
            SelectOutcome::Ignored
        }
    }

    /// Legal targets of the current selection, for move indicators.
    fn selected_targets(&self) -> Vec<Self::Location> {
        self.selected()
            .map(|from| self.legal_targets(from))
            .unwrap_or_default()
    }
}
