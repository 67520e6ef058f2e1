//! Sides (the two players) and per-side data storage.
//!
//! ## Side
//!
//! Every game names its two colors differently (white/black, red/black),
//! so the engines share a small trait instead of a concrete enum.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by a `Side`, for per-side counters such as
//! checkers on the bar or borne off.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::ops::{Index, IndexMut};

/// One of the two players of a game.
///
/// `index()` must map the two sides to 0 and 1, and `opponent()` must be an
/// involution.
pub trait Side: Copy + Eq + Debug {
    /// The side that moves first in a fresh game.
    const FIRST: Self;

    /// The other side.
    #[must_use]
    fn opponent(self) -> Self;

    /// Slot index (0 or 1).
    #[must_use]
    fn index(self) -> usize;
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use board_engines::core::SideMap;
/// use board_engines::games::chess::Color;
///
/// let mut captured: SideMap<u32> = SideMap::default();
/// captured[Color::Black] += 1;
/// assert_eq!(captured[Color::Black], 1);
/// assert_eq!(captured[Color::White], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map from the first mover's value and the second mover's value.
    #[must_use]
    pub const fn new(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get<S: Side>(&self, side: S) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut<S: Side>(&mut self, side: S) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over both values, first mover first.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T: Clone> SideMap<T> {
    /// Create a map with both entries set to the same value.
    #[must_use]
    pub fn with_value(value: T) -> Self {
        Self {
            data: [value.clone(), value],
        }
    }
}

impl<S: Side, T> Index<S> for SideMap<T> {
    type Output = T;

    fn index(&self, side: S) -> &Self::Output {
        self.get(side)
    }
}

impl<S: Side, T> IndexMut<S> for SideMap<T> {
    fn index_mut(&mut self, side: S) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Two {
        A,
        B,
    }

    impl Side for Two {
        const FIRST: Self = Two::A;

        fn opponent(self) -> Self {
            match self {
                Two::A => Two::B,
                Two::B => Two::A,
            }
        }

        fn index(self) -> usize {
            match self {
                Two::A => 0,
                Two::B => 1,
            }
        }
    }

    #[test]
    fn test_side_map_indexing() {
        let mut map = SideMap::new(1, 2);
        assert_eq!(map[Two::A], 1);
        assert_eq!(map[Two::B], 2);

        map[Two::B] = 7;
        assert_eq!(map[Two::B], 7);
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![1, 7]);
    }

    #[test]
    fn test_side_map_with_value() {
        let map: SideMap<Vec<i32>> = SideMap::with_value(vec![3]);
        assert_eq!(map[Two::A], vec![3]);
        assert_eq!(map[Two::B], vec![3]);
    }

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Two::A.opponent().opponent(), Two::A);
        assert_eq!(Two::B.opponent(), Two::A);
    }

    #[test]
    fn test_side_map_serialization() {
        let map = SideMap::new(4u8, 9u8);
        let json = serde_json::to_string(&map).unwrap();
        let back: SideMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }
}
