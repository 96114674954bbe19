//! Core types: colors, per-color storage, dice.
//!
//! These have no knowledge of the board or the rules.

pub mod color;
pub mod rng;

pub use color::{Color, ColorMap};
pub use rng::{DiceSource, GameRng, GameRngState, ScriptedDice, DIE_FACES};
