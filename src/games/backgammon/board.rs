//! Backgammon board: 24 points, the bar, and borne-off trays.
//!
//! Point indices run 0..24. White travels toward higher indices and bears off
//! past 23; Black travels toward lower indices and bears off below 0. Each
//! side's home board is the last six points of its journey.

use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap};

/// Number of points on the board.
pub const POINTS: usize = 24;

/// Checkers each side starts with.
pub const CHECKERS_PER_SIDE: u8 = 15;

/// Backgammon checker color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Index step per pip of movement.
    #[must_use]
    pub const fn direction(self) -> i32 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    /// Point a checker enters on from the bar with `die`.
    #[must_use]
    pub const fn entry_point(self, die: u8) -> u8 {
        match self {
            Self::White => die - 1,
            Self::Black => POINTS as u8 - die,
        }
    }

    /// Pips from `point` to borne off (1 for the last point of the journey).
    #[must_use]
    pub const fn pips_to_off(self, point: u8) -> u8 {
        match self {
            Self::White => POINTS as u8 - point,
            Self::Black => point + 1,
        }
    }

    /// True for the six points of this side's home board.
    #[must_use]
    pub const fn is_home(self, point: u8) -> bool {
        self.pips_to_off(point) <= 6
    }
}

impl Side for Color {
    const FIRST: Self = Color::White;

    fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::White => write!(f, "white"),
            Self::Black => write!(f, "black"),
        }
    }
}

/// Where a checker can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Point(u8),
    Bar,
    Off,
}

/// Checkers stacked on one point. `owner` is `None` exactly when `count` is 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointStack {
    pub owner: Option<Color>,
    pub count: u8,
}

impl PointStack {
    /// Checkers of `color` on this point.
    #[must_use]
    pub fn count_of(self, color: Color) -> u8 {
        if self.owner == Some(color) {
            self.count
        } else {
            0
        }
    }

    /// Two or more opposing checkers: `color` may not land here.
    #[must_use]
    pub fn blocks(self, color: Color) -> bool {
        self.owner == Some(color.opponent()) && self.count >= 2
    }

    /// Exactly one opposing checker: landing here hits it.
    #[must_use]
    pub fn is_blot_of(self, color: Color) -> bool {
        self.owner == Some(color) && self.count == 1
    }
}

const STARTING_STACKS: [(u8, Color, u8); 8] = [
    (0, Color::White, 2),
    (11, Color::White, 5),
    (16, Color::White, 3),
    (18, Color::White, 5),
    (23, Color::Black, 2),
    (12, Color::Black, 5),
    (7, Color::Black, 3),
    (5, Color::Black, 5),
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    points: [PointStack; POINTS],
    bar: SideMap<u8>,
    off: SideMap<u8>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no checkers anywhere.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            points: [PointStack::default(); POINTS],
            bar: SideMap::default(),
            off: SideMap::default(),
        }
    }

    /// The standard starting position.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (point, color, count) in STARTING_STACKS {
            board.place(Location::Point(point), color, count);
        }
        board
    }

    /// Add `count` checkers of `color` at `loc`.
    ///
    /// # Panics
    ///
    /// Panics if the point is held by the other color or is out of range.
    pub fn place(&mut self, loc: Location, color: Color, count: u8) {
        for _ in 0..count {
            self.push(loc, color);
        }
    }

    #[must_use]
    pub fn point(&self, index: u8) -> PointStack {
        self.points[index as usize]
    }

    #[must_use]
    pub fn points(&self) -> &[PointStack; POINTS] {
        &self.points
    }

    #[must_use]
    pub fn bar(&self, color: Color) -> u8 {
        self.bar[color]
    }

    #[must_use]
    pub fn borne_off(&self, color: Color) -> u8 {
        self.off[color]
    }

    /// Checkers of `color` at `loc`.
    #[must_use]
    pub fn count_at(&self, loc: Location, color: Color) -> u8 {
        match loc {
            Location::Point(i) => self.point(i).count_of(color),
            Location::Bar => self.bar[color],
            Location::Off => self.off[color],
        }
    }

    /// Checkers of `color` still in play (on points or the bar).
    #[must_use]
    pub fn in_play(&self, color: Color) -> u32 {
        let on_points: u32 = self.points.iter().map(|p| u32::from(p.count_of(color))).sum();
        on_points + u32::from(self.bar[color])
    }

    /// All checkers of `color` in play are in its home board.
    #[must_use]
    pub fn all_home(&self, color: Color) -> bool {
        self.bar[color] == 0
            && (0..POINTS as u8).all(|i| self.point(i).count_of(color) == 0 || color.is_home(i))
    }

    /// Any checker of `color` sits farther from bearing off than `pips`.
    fn has_checker_behind(&self, color: Color, pips: u8) -> bool {
        (0..POINTS as u8).any(|i| self.point(i).count_of(color) > 0 && color.pips_to_off(i) > pips)
    }

    pub(super) fn push(&mut self, loc: Location, color: Color) {
        match loc {
            Location::Point(i) => {
                let stack = &mut self.points[i as usize];
                assert!(
                    stack.owner.is_none() || stack.owner == Some(color),
                    "point {i} is held by the other color"
                );
                stack.owner = Some(color);
                stack.count += 1;
            }
            Location::Bar => self.bar[color] += 1,
            Location::Off => self.off[color] += 1,
        }
    }

    pub(super) fn pop(&mut self, loc: Location, color: Color) -> bool {
        match loc {
            Location::Point(i) => {
                let stack = &mut self.points[i as usize];
                if stack.count_of(color) == 0 {
                    return false;
                }
                stack.count -= 1;
                if stack.count == 0 {
                    stack.owner = None;
                }
                true
            }
            Location::Bar if self.bar[color] > 0 => {
                self.bar[color] -= 1;
                true
            }
            Location::Off if self.off[color] > 0 => {
                self.off[color] -= 1;
                true
            }
            _ => false,
        }
    }

    /// Where a checker of `color` on `from` lands using `die`, if it may.
    ///
    /// Checkers on the bar must enter before anything else moves. Points held
    /// by two or more opposing checkers are blocked. Bearing off needs every
    /// checker home, and a die larger than the exact count only works from
    /// the rearmost occupied point.
    #[must_use]
    pub fn destination(&self, color: Color, from: Location, die: u8) -> Option<Location> {
        if self.count_at(from, color) == 0 {
            return None;
        }
        if self.bar[color] > 0 && from != Location::Bar {
            return None;
        }

        let open = |i: u8| (!self.point(i).blocks(color)).then_some(Location::Point(i));

        match from {
            Location::Bar => open(color.entry_point(die)),
            Location::Point(i) => {
                let dest = i32::from(i) + color.direction() * i32::from(die);
                if (0..POINTS as i32).contains(&dest) {
                    return open(dest as u8);
                }
                if !self.all_home(color) {
                    return None;
                }
                let pips = color.pips_to_off(i);
                if die == pips || (die > pips && !self.has_checker_behind(color, pips)) {
                    Some(Location::Off)
                } else {
                    None
                }
            }
            Location::Off => None,
        }
    }

    /// Move one checker of `color` from `from` to `to`, hitting a blot on
    /// the destination. Returns the point of the hit, if any.
    pub(super) fn move_checker(&mut self, color: Color, from: Location, to: Location) -> Option<u8> {
        if !self.pop(from, color) {
            return None;
        }
        let mut hit = None;
        if let Location::Point(i) = to {
            let opponent = color.opponent();
            if self.point(i).is_blot_of(opponent) {
                self.pop(to, opponent);
                self.push(Location::Bar, opponent);
                hit = Some(i);
            }
        }
        self.push(to, color);
        hit
    }
}
