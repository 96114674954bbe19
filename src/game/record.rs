//! Move records for match history.
//!
//! Every resolved move is appended to `MatchState::history`. Used for:
//! - Replay/debugging
//! - Checking invariants in tests (captures, bonus turns)

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::piece::{PieceId, PieceRef, PieceState};
use crate::core::Color;

/// A resolved move with its consequences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Color that moved.
    pub color: Color,

    /// The piece that moved.
    pub piece: PieceId,

    /// Die value used.
    pub dice: u8,

    /// State before the move.
    pub from: PieceState,

    /// State after the move.
    pub to: PieceState,

    /// Opposing pieces sent home by this move.
    /// SmallVec covers the common 0-1 captures without heap allocation.
    pub captured: SmallVec<[PieceRef; 4]>,

    /// The mover's color completed all four pieces with this move.
    pub ranked: bool,

    /// The mover keeps the turn.
    pub bonus_turn: bool,

    /// Position of this record in the match history.
    pub sequence: u32,
}

impl MoveRecord {
    /// Reference to the piece that moved.
    #[must_use]
    pub fn piece_ref(&self) -> PieceRef {
        PieceRef::new(self.color, self.piece)
    }

    /// The move unlocked a piece from home.
    #[must_use]
    pub fn is_unlock(&self) -> bool {
        matches!(self.from, PieceState::AtHome)
    }

    /// The move brought the piece to the center.
    #[must_use]
    pub fn finished_piece(&self) -> bool {
        matches!(self.to, PieceState::Finished)
    }

    #[must_use]
    pub fn captured_any(&self) -> bool {
        !self.captured.is_empty()
    }
}
