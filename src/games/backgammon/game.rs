//! Backgammon engine: dice, turn flow and selection over the board.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameRng, GameRngState, Selection, Side, DIE_FACES};
use crate::rules::BoardGame;

use super::board::{Board, Color, Location, PointStack, POINTS};
use super::rules::{legal_moves, spend, CheckerMove, RemainingDice};

/// Render-relevant facts produced by rolling or moving.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgammonEvent {
    DiceRolled { color: Color, dice: [u8; 2] },
    /// A `color` checker went from `from` to `to` spending `die`.
    Moved {
        color: Color,
        from: Location,
        to: Location,
        die: u8,
    },
    /// A lone `color` checker on point `at` was hit and sent to the bar.
    Hit { color: Color, at: u8 },
    BorneOff { color: Color },
    /// The roll could not be played (at all, or any further).
    NoLegalMoves(Color),
    TurnChanged(Color),
}

/// A backgammon game: White moves first, toward higher point indices.
#[derive(Clone, Debug)]
pub struct BackgammonGame {
    config: GameConfig,
    board: Board,
    turn: Color,
    selection: Selection<Location>,
    rng: GameRng,
    dice: Option<[u8; 2]>,
    remaining: RemainingDice,
}

impl Default for BackgammonGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl BackgammonGame {
    /// A new game in the standard layout. Dice use `config.seed` when set.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let config = config.normalized();
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            config,
            board: Board::standard(),
            turn: Color::FIRST,
            selection: Selection::default(),
            rng,
            dice: None,
            remaining: RemainingDice::new(),
        }
    }

    /// A game set up from an arbitrary position with no dice rolled.
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

    /// Owner and count of every point, index 0 first.
    #[must_use]
    pub fn points(&self) -> [PointStack; POINTS] {
        *self.board.points()
    }

    #[must_use]
    pub fn bar(&self, color: Color) -> u8 {
        self.board.bar(color)
    }

    #[must_use]
    pub fn borne_off(&self, color: Color) -> u8 {
        self.board.borne_off(color)
    }

    /// The last roll, while any of it is left to play.
    #[must_use]
    pub fn dice(&self) -> Option<[u8; 2]> {
        self.dice
    }

    /// Dice not yet spent this turn.
    #[must_use]
    pub fn remaining_dice(&self) -> &[u8] {
        &self.remaining
    }

    /// Position of the dice stream, for resuming a seeded game later.
    #[must_use]
    pub fn dice_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Continue rolling from a captured dice position.
    pub fn restore_dice(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
        tracing::debug!(seed = state.seed, "dice stream restored");
    }

    /// Every single-checker move the remaining dice allow right now.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<CheckerMove> {
        if self.winner().is_some() || self.remaining.is_empty() {
            return Vec::new();
        }
        legal_moves(&self.board, self.turn, &self.remaining)
    }

    /// Roll both dice for the side to move.
    ///
    /// Returns `None` while dice from the previous roll are still unplayed or
    /// once the game is over.
    pub fn roll_dice(&mut self) -> Option<Vec<BackgammonEvent>> {
        if !self.can_roll() {
            return None;
        }
        let dice = self.rng.roll_pair();
        self.roll_with(dice)
    }

    /// Start the turn with the given dice instead of rolling, for replaying
    /// physical dice or a recorded game.
    ///
    /// Returns `None` if a face is outside `1..=6`, dice are still unplayed,
    /// or the game is over.
    pub fn roll_with(&mut self, dice: [u8; 2]) -> Option<Vec<BackgammonEvent>> {
        if !self.can_roll() || !dice.iter().all(|d| (1..=DIE_FACES).contains(d)) {
            return None;
        }
        let [a, b] = dice;
        self.dice = Some(dice);
        self.remaining = if a == b {
            RemainingDice::from_slice(&[a; 4])
        } else {
            RemainingDice::from_slice(&[a, b])
        };
        self.selection.clear();
        tracing::debug!(color = %self.turn, a, b, "dice rolled");

        let mut events = vec![BackgammonEvent::DiceRolled {
            color: self.turn,
            dice,
        }];
        self.pass_if_stuck(&mut events);
        Some(events)
    }

    fn can_roll(&self) -> bool {
        self.remaining.is_empty() && self.winner().is_none()
    }

    /// Hand the turn over when the roll cannot be played any further.
    fn pass_if_stuck(&mut self, events: &mut Vec<BackgammonEvent>) {
        if !self.remaining.is_empty() && self.legal_moves().is_empty() {
            tracing::debug!(color = %self.turn, remaining = ?self.remaining, "no legal moves");
            events.push(BackgammonEvent::NoLegalMoves(self.turn));
            self.remaining.clear();
        }
        if self.remaining.is_empty() {
            self.pass_turn(events);
        }
    }

    fn pass_turn(&mut self, events: &mut Vec<BackgammonEvent>) {
        self.dice = None;
        self.selection.clear();
        self.turn = self.turn.opponent();
        tracing::debug!(turn = %self.turn, "turn changed");
        events.push(BackgammonEvent::TurnChanged(self.turn));
    }
}

impl BoardGame for BackgammonGame {
    type Side = Color;
    type Location = Location;
    type Event = BackgammonEvent;

    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn current_turn(&self) -> Color {
        self.turn
    }

    fn holds_own_piece(&self, loc: Location) -> bool {
        loc != Location::Off && self.board.count_at(loc, self.turn) > 0
    }

    fn legal_targets(&self, from: Location) -> Vec<Location> {
        let mut targets: Vec<Location> = self
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.from == from)
            .map(|mv| mv.to)
            .collect();
        targets.sort_unstable();
        targets.dedup();
        targets
    }

    /// Spends the smallest die that legally takes `from` to `to`.
    fn apply_move(&mut self, from: Location, to: Location) -> Vec<BackgammonEvent> {
        let die = self
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.from == from && mv.to == to)
            .map(|mv| mv.die)
            .min();
        debug_assert!(die.is_some(), "apply_move({from:?}, {to:?}) is not a legal move");
        let Some(die) = die else {
            return Vec::new();
        };

        let color = self.turn;
        let mut events = Vec::with_capacity(3);
        if let Some(at) = self.board.move_checker(color, from, to) {
            let victim = color.opponent();
            tracing::debug!(at, victim = %victim, "blot hit");
            events.push(BackgammonEvent::Hit { color: victim, at });
        }
        events.push(BackgammonEvent::Moved {
            color,
            from,
            to,
            die,
        });
        if to == Location::Off {
            events.push(BackgammonEvent::BorneOff { color });
        }
        self.remaining = spend(&self.remaining, die);
        self.selection.clear();
        tracing::debug!(%color, ?from, ?to, die, "checker moved");
        events
    }

    /// The turn passes once every die is spent or the rest cannot be played.
    fn end_move(&mut self, events: &mut Vec<BackgammonEvent>) {
        if let Some(winner) = self.winner() {
            tracing::info!(%winner, "backgammon game won");
            self.remaining.clear();
            self.dice = None;
            return;
        }
        self.pass_if_stuck(events);
    }

    fn selection(&self) -> &Selection<Location> {
        &self.selection
    }

    fn selection_mut(&mut self) -> &mut Selection<Location> {
        &mut self.selection
    }

    /// The first side with no checkers left on the points or the bar.
    fn winner(&self) -> Option<Color> {
        [Color::White, Color::Black]
            .into_iter()
            .find(|&c| self.board.borne_off(c) > 0 && self.board.in_play(c) == 0)
    }

    fn reset(&mut self) {
        self.board = Board::standard();
        self.turn = Color::FIRST;
        self.selection.clear();
        self.dice = None;
        self.remaining.clear();
        tracing::info!("backgammon game reset");
    }
}
