//! Seeded dice.
//!
//! A game built with the same seed rolls the same dice, so a recorded game
//! can be replayed move for move. The generator position can be captured and
//! restored without replaying earlier rolls.
//!
//! ```
//! use board_engines::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.roll_pair(), b.roll_pair());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Number of faces on a die.
pub const DIE_FACES: u8 = 6;

/// ChaCha8-backed dice that remember their seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seeded from the thread RNG, for unseeded play.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// One die, uniform in `1..=6`.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    /// Two independent dice.
    pub fn roll_pair(&mut self) -> [u8; 2] {
        [self.roll_die(), self.roll_die()]
    }

    /// Seed and stream position, enough to resume rolling later.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Captured dice position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 128-bit word counter
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_rolls() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        let rolls_a: Vec<[u8; 2]> = (0..50).map(|_| a.roll_pair()).collect();
        let rolls_b: Vec<[u8; 2]> = (0..50).map(|_| b.roll_pair()).collect();
        assert_eq!(rolls_a, rolls_b);
    }

    #[test]
    fn test_seeds_diverge() {
        let mut a = GameRng::new(1);
        let mut b = GameRng::new(2);
        let rolls_a: Vec<u8> = (0..30).map(|_| a.roll_die()).collect();
        let rolls_b: Vec<u8> = (0..30).map(|_| b.roll_die()).collect();
        assert_ne!(rolls_a, rolls_b);
    }

    #[test]
    fn test_every_face_appears() {
        let mut rng = GameRng::new(3);
        let mut seen = [0u32; DIE_FACES as usize];
        for _ in 0..600 {
            let face = rng.roll_die();
            assert!((1..=DIE_FACES).contains(&face));
            seen[usize::from(face - 1)] += 1;
        }
        assert!(seen.iter().all(|&n| n > 0));
    }

    #[test]
    fn test_resume_from_state() {
        let mut rng = GameRng::new(9);
        for _ in 0..25 {
            rng.roll_pair();
        }
        let saved = rng.state();
        let ahead: Vec<[u8; 2]> = (0..5).map(|_| rng.roll_pair()).collect();

        let mut resumed = GameRng::from_state(&saved);
        let replay: Vec<[u8; 2]> = (0..5).map(|_| resumed.roll_pair()).collect();
        assert_eq!(ahead, replay);
        assert_eq!(resumed.seed(), 9);
    }

    #[test]
    fn test_state_json_shape() {
        let state = GameRngState { seed: 5, word_pos: 64 };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"seed":5,"wordPos":64}"#);
        let back: GameRngState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
