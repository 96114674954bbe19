//! Deterministic dice rolling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Forkable**: Create independent branches for parallel playouts
//! - **Serializable**: O(1) state capture and restore
//! - **Injectable**: Rules code only sees the `DiceSource` trait, so tests can
//!   script exact rolls with `ScriptedDice`
//!
//! ## Usage
//!
//! ```
//! use ludo_engine::core::{DiceSource, GameRng};
//!
//! let mut dice = GameRng::new(42);
//! let roll = dice.roll();
//! assert!((1..=6).contains(&roll));
//!
//! // Same seed, same rolls
//! let mut replay = GameRng::new(42);
//! assert_eq!(replay.roll(), roll);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// Anything that can produce die rolls in `1..=6`.
pub trait DiceSource {
    /// Roll one die.
    fn roll(&mut self) -> u8;
}

/// Deterministic RNG for dice and playout choices.
///
/// Uses ChaCha8 for speed while maintaining high quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll a single die, uniformly in `1..=6`.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> u8 {
        self.roll_die()
    }
}

/// Serializable RNG state for replays.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many rolls have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// Replays a fixed sequence of rolls, cycling when exhausted.
///
/// ```
/// use ludo_engine::core::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([6, 3]);
/// assert_eq!(dice.roll(), 6);
/// assert_eq!(dice.roll(), 3);
/// assert_eq!(dice.roll(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    rolls: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create scripted dice from a non-empty sequence of values in `1..=6`.
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        let rolls: Vec<u8> = rolls.into_iter().collect();
        assert!(!rolls.is_empty(), "ScriptedDice needs at least one roll");
        assert!(
            rolls.iter().all(|r| (1..=DIE_FACES).contains(r)),
            "Scripted rolls must be in 1..=6"
        );
        Self { rolls, cursor: 0 }
    }

    /// Number of rolls handed out so far.
    #[must_use]
    pub fn rolls_made(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let value = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        value
    }
}
