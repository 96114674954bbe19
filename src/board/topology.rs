//! Static board topology.
//!
//! The board is a shared ring of 52 main-path cells plus one private
//! 5-cell home lane per color.
//!
//! ## Coordinates
//!
//! - `Cell`: a ring cell, numbered `1..=52`. The numbering is shared by all
//!   colors, so "cell 20" is the same square for everyone.
//! - Main-path index: a color-relative `0..52` offset. Each color's path is
//!   the ring rotated to start at that color's entry cell.
//! - `LaneCell`: a home-lane square, identified by its owning color and a
//!   slot `0..5`. Lane cells are a different type from ring cells, so the
//!   lanes cannot intersect the ring or each other.
//!
//! ```
//! use ludo_engine::board::{entry_cell, main_path, Cell, MAIN_PATH_LEN};
//! use ludo_engine::core::Color;
//!
//! let green = main_path(Color::Green);
//! assert_eq!(green.len(), MAIN_PATH_LEN);
//! assert_eq!(green[0], entry_cell(Color::Green));
//! assert_eq!(green[0], Cell::new(14));
//! assert_eq!(green[MAIN_PATH_LEN - 1], Cell::new(13));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::error::StateError;

/// Number of cells on the shared ring.
pub const MAIN_PATH_LEN: usize = 52;

/// Number of slots in each home lane.
pub const HOME_LANE_LEN: usize = 5;

/// Lane index of the finish marker: one past the last lane slot.
pub const FINISH_INDEX: usize = HOME_LANE_LEN;

/// Entry cell per color, in `Color::ALL` order.
const ENTRY_CELLS: [u8; 4] = [1, 14, 27, 40];

/// Cells that are safe on the standard board: the four entry cells and
/// the four star cells eight steps past each of them.
pub const STANDARD_SAFE_CELLS: [Cell; 8] = [
    Cell(1),
    Cell(8),
    Cell(14),
    Cell(21),
    Cell(27),
    Cell(34),
    Cell(40),
    Cell(47),
];

/// A cell on the shared ring, numbered `1..=52`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cell(u8);

impl Cell {
    /// Create a ring cell.
    ///
    /// Panics if `number` is not in `1..=52`.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        assert!(number >= 1 && number as usize <= MAIN_PATH_LEN, "Cell must be in 1..=52");
        Self(number)
    }

    /// Create a ring cell, returning `None` if `number` is off the ring.
    #[must_use]
    pub const fn try_new(number: u8) -> Option<Self> {
        if number >= 1 && number as usize <= MAIN_PATH_LEN {
            Some(Self(number))
        } else {
            None
        }
    }

    /// The shared cell number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Whether this value names a real ring cell.
    ///
    /// Only values deserialized from untrusted input can fail this.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 >= 1 && self.0 as usize <= MAIN_PATH_LEN
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

/// A slot in a home lane, `0..5`.
///
/// Deserializing rejects out-of-range slots, so a lane position held by a
/// piece always indexes into its color's lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LaneSlot(u8);

impl LaneSlot {
    /// Create a lane slot.
    ///
    /// Panics if `slot` is not in `0..5`.
    #[must_use]
    pub const fn new(slot: u8) -> Self {
        assert!((slot as usize) < HOME_LANE_LEN, "lane slot must be in 0..5");
        Self(slot)
    }

    #[must_use]
    pub const fn try_new(slot: u8) -> Option<Self> {
        if (slot as usize) < HOME_LANE_LEN {
            Some(Self(slot))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for LaneSlot {
    type Error = StateError;

    fn try_from(slot: u8) -> Result<Self, StateError> {
        Self::try_new(slot).ok_or(StateError::LaneSlot(slot))
    }
}

impl From<LaneSlot> for u8 {
    fn from(slot: LaneSlot) -> u8 {
        slot.0
    }
}

/// A square in one color's home lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaneCell {
    pub color: Color,
    pub slot: u8,
}

impl std::fmt::Display for LaneCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-lane({})", self.color.name(), self.slot)
    }
}

const fn rotate_from(entry: u8) -> [Cell; MAIN_PATH_LEN] {
    let mut path = [Cell(1); MAIN_PATH_LEN];
    let mut i = 0;
    while i < MAIN_PATH_LEN {
        path[i] = Cell(((entry as usize - 1 + i) % MAIN_PATH_LEN) as u8 + 1);
        i += 1;
    }
    path
}

static MAIN_PATHS: [[Cell; MAIN_PATH_LEN]; 4] = [
    rotate_from(ENTRY_CELLS[0]),
    rotate_from(ENTRY_CELLS[1]),
    rotate_from(ENTRY_CELLS[2]),
    rotate_from(ENTRY_CELLS[3]),
];

/// The ordered main path a color travels, starting at its entry cell.
#[must_use]
pub fn main_path(color: Color) -> &'static [Cell; MAIN_PATH_LEN] {
    &MAIN_PATHS[color.index()]
}

/// The ordered home lane a color travels after its main path.
#[must_use]
pub fn home_lane(color: Color) -> [LaneCell; HOME_LANE_LEN] {
    std::array::from_fn(|slot| LaneCell { color, slot: slot as u8 })
}

/// First main-path cell reached when a piece leaves home.
#[must_use]
pub const fn entry_cell(color: Color) -> Cell {
    Cell(ENTRY_CELLS[color.index()])
}

/// Last ring cell before a color peels off into its home lane.
#[must_use]
pub fn lane_turn_cell(color: Color) -> Cell {
    main_path(color)[MAIN_PATH_LEN - 1]
}

/// Color-relative index of a ring cell, `0..52`.
#[must_use]
pub const fn main_index(color: Color, cell: Cell) -> usize {
    (cell.0 as usize + MAIN_PATH_LEN - ENTRY_CELLS[color.index()] as usize) % MAIN_PATH_LEN
}

/// Whether a cell is safe on the standard board.
///
/// Matches use `RuleSet::is_safe`, which may carry a different set.
#[must_use]
pub fn is_standard_safe(cell: Cell) -> bool {
    STANDARD_SAFE_CELLS.contains(&cell)
}
