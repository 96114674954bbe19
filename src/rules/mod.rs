//! Game rules: configuration, movement resolution, turn scheduling.
//!
//! `movement` and `turn` are free functions over `MatchState`;
//! `LudoEngine` bundles them with a `RuleSet` for callers.

pub mod config;
pub mod engine;
pub mod movement;
pub mod turn;

pub use config::{LandingBonus, RuleSet, SixWithoutMoves};
pub use engine::{LudoEngine, MatchResult, TurnDecision, DEFAULT_PLAYOUT_STEPS};
pub use movement::{apply_move, destination, is_movable, steps_to_finish, UNLOCK_ROLL};
pub use turn::advance;
