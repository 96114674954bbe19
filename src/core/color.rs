//! Player colors and per-color storage.
//!
//! ## Color
//!
//! The four seats of the board. The set is closed: every table in the
//! crate is indexed by `Color`, so there is no "invalid color" at runtime.
//!
//! ## ColorMap
//!
//! Fixed per-color storage backed by an array for O(1) access.
//! Supports iteration and indexing by `Color`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the four player colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    /// All colors in standard turn order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

    /// Number of colors on the board.
    pub const COUNT: usize = 4;

    /// Get the table index (0-based) for this color.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as used in rule files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Blue => "Blue",
        };
        f.write_str(label)
    }
}

/// Per-color data storage with O(1) access.
///
/// Backed by a `[T; 4]` with one entry per color, in `Color::ALL` order.
///
/// ## Example
///
/// ```
/// use ludo_engine::core::{Color, ColorMap};
///
/// let mut finished: ColorMap<u8> = ColorMap::new(|_| 0);
/// finished[Color::Blue] = 2;
///
/// assert_eq!(finished[Color::Red], 0);
/// assert_eq!(finished[Color::Blue], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 4],
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: Color::ALL.map(factory),
        }
    }

    /// Create a new ColorMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Color, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Color, &mut T)> {
        Color::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Iterate over the stored values in color order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_index_matches_all_order() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn test_color_display_and_name() {
        assert_eq!(format!("{}", Color::Yellow), "Yellow");
        assert_eq!(Color::Yellow.name(), "yellow");
    }

    #[test]
    fn test_color_serde_is_lowercase() {
        let json = serde_json::to_string(&Color::Green).unwrap();
        assert_eq!(json, "\"green\"");
        let back: Color = serde_json::from_str("\"blue\"").unwrap();
        assert_eq!(back, Color::Blue);
    }

    #[test]
    fn test_color_map_new() {
        let map: ColorMap<usize> = ColorMap::new(|c| c.index() * 10);

        assert_eq!(map[Color::Red], 0);
        assert_eq!(map[Color::Green], 10);
        assert_eq!(map[Color::Yellow], 20);
        assert_eq!(map[Color::Blue], 30);
    }

    #[test]
    fn test_color_map_mutation() {
        let mut map: ColorMap<i32> = ColorMap::with_value(0);

        map[Color::Green] = 7;
        *map.get_mut(Color::Blue) += 3;

        assert_eq!(map[Color::Red], 0);
        assert_eq!(map[Color::Green], 7);
        assert_eq!(map[Color::Blue], 3);
    }

    #[test]
    fn test_color_map_iter() {
        let map: ColorMap<usize> = ColorMap::new(|c| c.index());

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0], (Color::Red, &0));
        assert_eq!(pairs[3], (Color::Blue, &3));
    }

    #[test]
    fn test_color_map_serialization() {
        let map: ColorMap<u8> = ColorMap::new(|c| c.index() as u8 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: ColorMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
