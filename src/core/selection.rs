//! Piece selection.
//!
//! At most one location is selected at a time. The engines only ever store a
//! location holding a piece of the side to move; the rules module enforces
//! that when driving the selection flow.

use serde::{Deserialize, Serialize};

/// The current selection: idle or one selected location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection<L> {
    selected: Option<L>,
}

impl<L> Default for Selection<L> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<L: Copy + Eq> Selection<L> {
    /// The selected location, if any.
    #[must_use]
    pub fn get(&self) -> Option<L> {
        self.selected
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.selected.is_none()
    }

    #[must_use]
    pub fn is_selected(&self, loc: L) -> bool {
        self.selected == Some(loc)
    }

    pub fn set(&mut self, loc: L) {
        self.selected = Some(loc);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}
