//! Board topology: the shared ring, per-color paths and home lanes.
//!
//! Pure data. Nothing here changes during a match.

pub mod topology;

pub use topology::{
    entry_cell, home_lane, is_standard_safe, lane_turn_cell, main_index, main_path, Cell, LaneCell,
    LaneSlot, FINISH_INDEX, HOME_LANE_LEN, MAIN_PATH_LEN, STANDARD_SAFE_CELLS,
};
