//! Rule configuration.
//!
//! House rules differ between Ludo boards. The variations the engine
//! supports are fixed once per match in a `RuleSet`:
//! - `safe_cells`: ring cells where no capture can happen
//! - `landing_bonus`: per-color cell that carries a piece one step further
//! - `finish_threshold`: how many colors must finish before the match ends
//! - `six_without_moves`: whether an unusable 6 still earns a re-roll
//! - `reset_dice_on_advance`: whether the dice face resets to 1 between turns
//!
//! Rule sets load from TOML; every field is optional and falls back to the
//! standard board.
//!
//! ```
//! use ludo_engine::board::Cell;
//! use ludo_engine::rules::{RuleSet, SixWithoutMoves};
//!
//! let rules = RuleSet::from_toml_str(r#"
//!     safe_cells = [1, 14, 27, 40]
//!     six_without_moves = "roll_again"
//! "#).unwrap();
//!
//! assert!(rules.is_safe(Cell::new(14)));
//! assert!(!rules.is_safe(Cell::new(8)));
//! assert_eq!(rules.six_without_moves, SixWithoutMoves::RollAgain);
//! assert_eq!(rules.finish_threshold, 3);
//! ```

use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::{Cell, STANDARD_SAFE_CELLS};
use crate::core::Color;
use crate::error::ConfigError;

/// What happens when a 6 is rolled but no piece can use it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SixWithoutMoves {
    /// The same color rolls again.
    RollAgain,
    /// The turn passes like any other unusable roll.
    #[default]
    PassTurn,
}

/// Optional landing-bonus cell per color.
///
/// A piece moving along its main path that would land exactly on its
/// color's bonus cell is carried one extra step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingBonus {
    pub red: Option<Cell>,
    pub green: Option<Cell>,
    pub yellow: Option<Cell>,
    pub blue: Option<Cell>,
}

impl LandingBonus {
    #[must_use]
    pub fn for_color(&self, color: Color) -> Option<Cell> {
        match color {
            Color::Red => self.red,
            Color::Green => self.green,
            Color::Yellow => self.yellow,
            Color::Blue => self.blue,
        }
    }

    pub fn set(&mut self, color: Color, cell: Option<Cell>) {
        let slot = match color {
            Color::Red => &mut self.red,
            Color::Green => &mut self.green,
            Color::Yellow => &mut self.yellow,
            Color::Blue => &mut self.blue,
        };
        *slot = cell;
    }

    fn iter(&self) -> impl Iterator<Item = (Color, Cell)> + '_ {
        Color::ALL
            .into_iter()
            .filter_map(|color| self.for_color(color).map(|cell| (color, cell)))
    }
}

/// Complete rule configuration for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Ring cells where pieces cannot be captured.
    pub safe_cells: FxHashSet<Cell>,

    /// Per-color landing bonus cells.
    pub landing_bonus: LandingBonus,

    /// Number of ranked colors at which the match is over.
    pub finish_threshold: usize,

    /// Handling of a 6 that no piece can use.
    pub six_without_moves: SixWithoutMoves,

    /// Reset the dice face to 1 whenever the turn passes.
    pub reset_dice_on_advance: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            safe_cells: STANDARD_SAFE_CELLS.iter().copied().collect(),
            landing_bonus: LandingBonus::default(),
            finish_threshold: 3,
            six_without_moves: SixWithoutMoves::default(),
            reset_dice_on_advance: true,
        }
    }
}

impl RuleSet {
    /// Parse and validate a rule set from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let rules: RuleSet = toml::from_str(content)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Load a rule set from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(cell) = self.safe_cells.iter().find(|c| !c.is_valid()) {
            return Err(ConfigError::Validation(format!(
                "safe cell {} is not on the ring (1..=52)",
                cell.number()
            )));
        }
        for (color, cell) in self.landing_bonus.iter() {
            if !cell.is_valid() {
                return Err(ConfigError::Validation(format!(
                    "landing_bonus.{} cell {} is not on the ring (1..=52)",
                    color.name(),
                    cell.number()
                )));
            }
        }
        if !(1..=Color::COUNT).contains(&self.finish_threshold) {
            return Err(ConfigError::Validation(
                "finish_threshold must be in 1..=4".into(),
            ));
        }
        Ok(())
    }

    /// Whether pieces standing on `cell` are protected from capture.
    #[must_use]
    pub fn is_safe(&self, cell: Cell) -> bool {
        self.safe_cells.contains(&cell)
    }

    /// Builder-style override of the safe cells.
    #[must_use]
    pub fn with_safe_cells(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.safe_cells = cells.into_iter().collect();
        self
    }

    /// Builder-style landing bonus for one color.
    #[must_use]
    pub fn with_landing_bonus(mut self, color: Color, cell: Cell) -> Self {
        self.landing_bonus.set(color, Some(cell));
        self
    }

    #[must_use]
    pub fn with_six_without_moves(mut self, policy: SixWithoutMoves) -> Self {
        self.six_without_moves = policy;
        self
    }

    #[must_use]
    pub fn with_finish_threshold(mut self, threshold: usize) -> Self {
        self.finish_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = RuleSet::default();

        assert_eq!(rules.safe_cells.len(), 8);
        for n in [1, 8, 14, 21, 27, 34, 40, 47] {
            assert!(rules.is_safe(Cell::new(n)));
        }
        assert!(!rules.is_safe(Cell::new(2)));
        assert_eq!(rules.finish_threshold, 3);
        assert_eq!(rules.six_without_moves, SixWithoutMoves::PassTurn);
        assert!(rules.reset_dice_on_advance);
        assert!(Color::ALL.iter().all(|&c| rules.landing_bonus.for_color(c).is_none()));
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let rules = RuleSet::from_toml_str("").unwrap();
        assert_eq!(rules, RuleSet::default());
    }

    #[test]
    fn test_landing_bonus_from_toml() {
        let rules = RuleSet::from_toml_str(
            r#"
            [landing_bonus]
            green = 20
            "#,
        )
        .unwrap();

        assert_eq!(rules.landing_bonus.for_color(Color::Green), Some(Cell::new(20)));
        assert_eq!(rules.landing_bonus.for_color(Color::Red), None);
    }

    #[test]
    fn test_validation_rejects_off_ring_safe_cell() {
        let err = RuleSet::from_toml_str("safe_cells = [1, 53]").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("53"));
    }

    #[test]
    fn test_validation_rejects_off_ring_bonus() {
        let err = RuleSet::from_toml_str("[landing_bonus]\nblue = 0").unwrap_err();
        assert!(err.to_string().contains("landing_bonus.blue"));
    }

    #[test]
    fn test_validation_rejects_threshold() {
        let rules = RuleSet::default().with_finish_threshold(0);
        assert!(rules.validate().is_err());

        let rules = RuleSet::default().with_finish_threshold(5);
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = RuleSet::from_toml_str("finish_threshold = \"three\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }
}
