//! Pieces and their lifecycle.
//!
//! A piece is always in exactly one `PieceState`:
//!
//! ```text
//! AtHome --[roll 6]--> Active(Main) --> Active(Lane) --> Finished
//!    ^                      |
//!    +------ captured ------+
//! ```
//!
//! Position only exists while the piece is `Active`, so a piece at home or
//! finished cannot carry a stale coordinate.

use serde::{Deserialize, Serialize};

use crate::board::{home_lane, Cell, LaneCell, LaneSlot};
use crate::core::Color;

/// Piece identity within its color, `1..=4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(u8);

impl PieceId {
    /// All piece ids of a color.
    pub const ALL: [PieceId; 4] = [PieceId(1), PieceId(2), PieceId(3), PieceId(4)];

    /// Create a piece id.
    ///
    /// Panics if `id` is not in `1..=4`.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id >= 1 && id <= 4, "PieceId must be in 1..=4");
        Self(id)
    }

    /// The raw id, `1..=4`.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Array index, `0..4`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Globally unique reference to a piece: its color plus its id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceRef {
    pub color: Color,
    pub id: PieceId,
}

impl PieceRef {
    #[must_use]
    pub const fn new(color: Color, id: PieceId) -> Self {
        Self { color, id }
    }
}

impl std::fmt::Display for PieceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.id)
    }
}

/// Where an active piece stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// On the shared ring.
    Main(Cell),
    /// On the owning color's home lane.
    Lane(LaneSlot),
}

/// Lifecycle of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceState {
    AtHome,
    Active(Position),
    Finished,
}

impl PieceState {
    /// Shorthand for a piece on a ring cell.
    #[must_use]
    pub const fn on_main(cell: Cell) -> Self {
        PieceState::Active(Position::Main(cell))
    }

    /// Shorthand for a piece in its home lane.
    ///
    /// Panics if `slot` is not a lane slot.
    #[must_use]
    pub const fn in_lane(slot: u8) -> Self {
        PieceState::Active(Position::Lane(LaneSlot::new(slot)))
    }
}

/// One token on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    id: PieceId,
    color: Color,
    state: PieceState,
}

impl Piece {
    /// Create a piece waiting at home.
    #[must_use]
    pub const fn new(color: Color, id: PieceId) -> Self {
        Self {
            id,
            color,
            state: PieceState::AtHome,
        }
    }

    #[must_use]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn reference(&self) -> PieceRef {
        PieceRef::new(self.color, self.id)
    }

    #[must_use]
    pub const fn state(&self) -> PieceState {
        self.state
    }

    /// Position on the board, `None` unless the piece is active.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self.state {
            PieceState::Active(position) => Some(position),
            PieceState::AtHome | PieceState::Finished => None,
        }
    }

    /// Ring cell occupied by this piece, if it is on the main path.
    #[must_use]
    pub const fn main_cell(&self) -> Option<Cell> {
        match self.state {
            PieceState::Active(Position::Main(cell)) => Some(cell),
            _ => None,
        }
    }

    /// Home-lane square occupied by this piece, if it is in its lane.
    #[must_use]
    pub fn lane_cell(&self) -> Option<LaneCell> {
        match self.state {
            PieceState::Active(Position::Lane(slot)) => Some(home_lane(self.color)[slot.index()]),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_at_home(&self) -> bool {
        matches!(self.state, PieceState::AtHome)
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, PieceState::Active(_))
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, PieceState::Finished)
    }

    pub(crate) fn set_state(&mut self, state: PieceState) {
        self.state = state;
    }
}
