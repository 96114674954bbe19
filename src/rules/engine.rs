//! Rules engine facade.
//!
//! `LudoEngine` owns a validated `RuleSet` and exposes the queries and
//! commands a presentation layer drives a match with:
//! - Query which pieces may move (`is_movable`, `movable_pieces`, `decide`)
//! - Roll the dice (`roll_dice`), move a piece (`move_piece`)
//! - Pass or advance the turn (`pass`, `advance_turn`)
//! - Detect the end of the match (`is_over`, `result`)
//!
//! The engine is synchronous and holds no match state of its own: every
//! command takes the `MatchState` by unique reference and runs to
//! completion.

use smallvec::SmallVec;
use tracing::debug;

use super::config::{RuleSet, SixWithoutMoves};
use super::{movement, turn};
use crate::core::{Color, DiceSource, GameRng};
use crate::error::ConfigError;
use crate::game::{MatchState, MoveRecord, Piece, PieceId, PieceRef};

/// Upper bound on engine steps for `play_random_match`.
pub const DEFAULT_PLAYOUT_STEPS: usize = 20_000;

/// Final standings of a completed match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult {
    /// Ranked colors in finishing order, then the remaining colors in
    /// turn order.
    pub standings: Vec<Color>,
}

impl MatchResult {
    /// First color to bring all pieces home.
    #[must_use]
    pub fn winner(&self) -> Color {
        self.standings[0]
    }

    /// 1-based place of a color.
    #[must_use]
    pub fn place_of(&self, color: Color) -> usize {
        self.standings
            .iter()
            .position(|&c| c == color)
            .map_or(self.standings.len(), |i| i + 1)
    }
}

/// What the current color should do next.
///
/// Mirrors the auto-play a UI applies after each roll: skip when nothing
/// can move, move the only candidate automatically, otherwise ask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnDecision {
    /// Enough colors have finished.
    MatchOver,
    /// The current color has not rolled yet.
    AwaitRoll,
    /// No piece can use the roll.
    Pass,
    /// Exactly one piece can use the roll.
    AutoMove(PieceId),
    /// Several pieces can use the roll; the player picks.
    Choose(SmallVec<[PieceId; 4]>),
}

/// Rules engine for one rule set.
#[derive(Clone, Debug, Default)]
pub struct LudoEngine {
    rules: RuleSet,
}

impl LudoEngine {
    /// Create an engine, validating the rule set.
    pub fn new(rules: RuleSet) -> Result<Self, ConfigError> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Engine with the standard board rules.
    #[must_use]
    pub fn standard() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// A fresh match: all pieces home, Red to roll.
    #[must_use]
    pub fn new_match(&self) -> MatchState {
        MatchState::new()
    }

    // === Queries ===

    /// Whether `piece` may move with `dice` under this rule set.
    #[must_use]
    pub fn is_movable(&self, piece: &Piece, dice: u8) -> bool {
        movement::is_movable(&self.rules, piece, dice)
    }

    /// Pieces of the current color that can use the rolled dice.
    ///
    /// Empty until the dice has been rolled.
    #[must_use]
    pub fn movable_pieces(&self, state: &MatchState) -> SmallVec<[PieceId; 4]> {
        if !state.is_dice_rolled() {
            return SmallVec::new();
        }
        let dice = state.dice_value();
        state
            .current_player()
            .pieces()
            .iter()
            .filter(|p| self.is_movable(p, dice))
            .map(Piece::id)
            .collect()
    }

    /// The auto-play decision for the current state.
    #[must_use]
    pub fn decide(&self, state: &MatchState) -> TurnDecision {
        if self.is_over(state) {
            return TurnDecision::MatchOver;
        }
        if !state.is_dice_rolled() {
            return TurnDecision::AwaitRoll;
        }

        let movable = self.movable_pieces(state);
        match movable.len() {
            0 => TurnDecision::Pass,
            1 => TurnDecision::AutoMove(movable[0]),
            _ => TurnDecision::Choose(movable),
        }
    }

    /// Enough colors have finished to end the match.
    #[must_use]
    pub fn is_over(&self, state: &MatchState) -> bool {
        state.ranking().len() >= self.rules.finish_threshold
    }

    /// Final standings, once the match is over.
    #[must_use]
    pub fn result(&self, state: &MatchState) -> Option<MatchResult> {
        if !self.is_over(state) {
            return None;
        }
        let mut standings: Vec<Color> = state.ranking().to_vec();
        standings.extend(state.turn_order().iter().filter(|c| !state.is_ranked(**c)));
        Some(MatchResult { standings })
    }

    // === Commands ===

    /// Roll for the current color.
    ///
    /// Refused (`None`) if the dice is already rolled this turn or the
    /// match is over.
    pub fn roll_dice(&self, state: &mut MatchState, dice: &mut impl DiceSource) -> Option<u8> {
        if state.is_dice_rolled() || self.is_over(state) {
            return None;
        }
        let value = dice.roll();
        state.set_roll(value);
        debug!(color = %state.current_color(), value, "dice rolled");
        Some(value)
    }

    /// Move a piece by `dice` pips.
    ///
    /// A no-op returning `None` if the piece cannot move.
    pub fn move_piece(&self, state: &mut MatchState, piece: PieceRef, dice: u8) -> Option<MoveRecord> {
        movement::apply_move(&self.rules, state, piece, dice)
    }

    /// Move one of the current color's pieces with the rolled dice.
    ///
    /// A no-op if the dice has not been rolled.
    pub fn play(&self, state: &mut MatchState, piece: PieceId) -> Option<MoveRecord> {
        if !state.is_dice_rolled() {
            return None;
        }
        let dice = state.dice_value();
        let piece = PieceRef::new(state.current_color(), piece);
        self.move_piece(state, piece, dice)
    }

    /// Pass the turn to the next unfinished color.
    pub fn advance_turn(&self, state: &mut MatchState) {
        turn::advance(&self.rules, state);
    }

    /// Give up the current roll.
    ///
    /// A usable-nowhere 6 earns a re-roll under `SixWithoutMoves::RollAgain`,
    /// unless the current color has already finished; everything else
    /// passes the turn.
    pub fn pass(&self, state: &mut MatchState) {
        let reroll = self.rules.six_without_moves == SixWithoutMoves::RollAgain
            && state.is_dice_rolled()
            && state.dice_value() == movement::UNLOCK_ROLL
            && !state.current_player().has_finished();

        if reroll {
            state.clear_roll();
        } else {
            self.advance_turn(state);
        }
    }

    /// Play a whole match headlessly.
    ///
    /// Rolls with `rng`, applies `decide`, and picks uniformly when several
    /// pieces can move. Stops when the match is over or after `max_steps`
    /// engine steps.
    pub fn play_random_match(&self, rng: &mut GameRng, max_steps: usize) -> MatchState {
        let mut state = self.new_match();

        for _ in 0..max_steps {
            match self.decide(&state) {
                TurnDecision::MatchOver => break,
                TurnDecision::AwaitRoll => {
                    self.roll_dice(&mut state, rng);
                }
                TurnDecision::Pass => self.pass(&mut state),
                TurnDecision::AutoMove(piece) => {
                    self.play(&mut state, piece);
                }
                TurnDecision::Choose(pieces) => {
                    if let Some(&piece) = rng.choose(&pieces) {
                        self.play(&mut state, piece);
                    }
                }
            }
        }

        state
    }
}
