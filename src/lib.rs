//! # ludo-engine
//!
//! A deterministic rule engine for four-player Ludo-style race games.
//!
//! ## Design Principles
//!
//! 1. **Closed Types**: Colors, piece lifecycles and positions are enums.
//!    A piece at home has no position; a lane slot can only belong to the
//!    piece's own color.
//!
//! 2. **Value In, Value Out**: The engine holds no match state. Every
//!    command takes a `MatchState` by unique reference and runs to
//!    completion; illegal moves are no-ops.
//!
//! 3. **Configuration Over Convention**: Safe cells, the landing bonus and
//!    end-of-match rules are a `RuleSet`, loadable from TOML.
//!
//! 4. **Injected Randomness**: Dice come from a `DiceSource`, so matches
//!    replay exactly from a seed and tests can script rolls.
//!
//! ## Example
//!
//! ```
//! use ludo_engine::{Cell, Color, LudoEngine, PieceId, PieceRef, ScriptedDice};
//!
//! let engine = LudoEngine::standard();
//! let mut state = engine.new_match();
//!
//! // Red rolls a 6 and brings a piece out.
//! engine.roll_dice(&mut state, &mut ScriptedDice::new([6]));
//! let record = engine.play(&mut state, PieceId::new(1)).unwrap();
//!
//! assert!(record.bonus_turn);
//! assert_eq!(state.current_color(), Color::Red);
//! assert_eq!(
//!     state.piece(PieceRef::new(Color::Red, PieceId::new(1))).main_cell(),
//!     Some(Cell::new(1))
//! );
//! ```
//!
//! ## Modules
//!
//! - `core`: Colors, per-color storage, dice
//! - `board`: Static topology of the ring and home lanes
//! - `game`: Pieces, players, match state, move history
//! - `rules`: Rule configuration, movement, turn scheduling, engine facade
//! - `error`: Configuration errors

pub mod board;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Color, ColorMap, DiceSource, GameRng, GameRngState, ScriptedDice};

pub use crate::board::{Cell, LaneCell, LaneSlot, HOME_LANE_LEN, MAIN_PATH_LEN};

pub use crate::game::{MatchState, MoveRecord, Piece, PieceId, PieceRef, PieceState, Player, Position};

pub use crate::rules::{LudoEngine, MatchResult, RuleSet, SixWithoutMoves, TurnDecision};

pub use crate::error::{ConfigError, StateError};
