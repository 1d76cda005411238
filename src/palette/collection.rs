//! Ordered, name-keyed color collection with nearest-color search

use crate::palette::color::Color;
use std::collections::HashMap;

/// An ordered collection of uniquely named colors
///
/// Entries live in a single append-only sequence that defines the canonical
/// iteration order; a name→position index is kept in sync on every mutation
/// so lookup by name and lookup by position can never drift apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    entries: Vec<(String, Color)>,
    positions: HashMap<String, usize>,
}

impl Palette {
    /// Create an empty palette
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a named color if the name is not already present
    ///
    /// First write wins: adding an existing name is a no-op and the original
    /// color is kept. Returns whether an insertion occurred.
    pub fn add(&mut self, name: &str, color: Color) -> bool {
        if self.positions.contains_key(name) {
            return false;
        }
        self.positions.insert(name.to_string(), self.entries.len());
        self.entries.push((name.to_string(), color));
        true
    }

    /// Apply [`Self::add`] for every entry in iteration order
    pub fn add_all<I>(&mut self, colors: I)
    where
        I: IntoIterator<Item = (String, Color)>,
    {
        for (name, color) in colors {
            self.add(&name, color);
        }
    }

    /// Remove a named color, preserving the relative order of the rest
    ///
    /// Returns whether a removal occurred.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(position) = self.positions.remove(name) else {
            return false;
        };
        self.entries.remove(position);
        // Entries after the removal point shift down by one
        for index in self.positions.values_mut() {
            if *index > position {
                *index -= 1;
            }
        }
        true
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    /// Look up a color by name
    pub fn get(&self, name: &str) -> Option<Color> {
        self.positions
            .get(name)
            .and_then(|&index| self.entries.get(index))
            .map(|(_, color)| *color)
    }

    /// Look up a color by insertion position
    pub fn get_at(&self, index: usize) -> Option<Color> {
        self.entries.get(index).map(|(_, color)| *color)
    }

    /// Look up an entry name by insertion position
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(name, _)| name.as_str())
    }

    /// Whether a name is present
    pub fn contains_name(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Whether any entry equals the given color (structural scan)
    pub fn contains_color(&self, color: Color) -> bool {
        self.entries.iter().any(|(_, entry)| *entry == color)
    }

    /// Reverse lookup: the name of the first entry matching the given color
    pub fn name_of(&self, color: Color) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, entry)| *entry == color)
            .map(|(name, _)| name.as_str())
    }

    /// Find the palette color nearest to `target` by Euclidean distance
    ///
    /// The scan runs in insertion order with a strict `<` comparison, so the
    /// first-inserted entry wins exact ties. An empty palette returns
    /// `target` itself, which callers rely on as a safe default.
    pub fn find_closest(&self, target: Color) -> Color {
        let mut closest = target;
        let mut min_distance = f64::MAX;

        for (_, color) in &self.entries {
            let distance = target.distance_to(*color);
            if distance < min_distance {
                min_distance = distance;
                closest = *color;
            }
        }

        closest
    }

    /// Legend code for the palette entry matching `color`
    ///
    /// Returns the positional [`bead_code`] of the first entry equal to
    /// `color`. Yields `None` when the color is not in the palette, or when
    /// `hide_transparent` is set and the color is fully transparent, so
    /// legends can leave transparent cells unlabeled.
    pub fn legend_code_for(&self, color: Color, hide_transparent: bool) -> Option<String> {
        if hide_transparent && color.is_transparent() {
            return None;
        }
        self.entries
            .iter()
            .position(|(_, entry)| *entry == color)
            .map(bead_code)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.entries
            .iter()
            .map(|(name, color)| (name.as_str(), *color))
    }
}

/// Legend code for a palette position: `A1..A10, B1..B10, ...`
///
/// Bead pattern legends label palette slots with a letter for the decade and
/// a 1-based digit within it.
pub fn bead_code(index: usize) -> String {
    let letter = char::from(b'A' + (index / 10) as u8);
    let number = index % 10 + 1;
    format!("{letter}{number}")
}

#[cfg(test)]
mod tests {
    use super::{Palette, bead_code};
    use crate::palette::color::Color;

    #[test]
    fn test_remove_repairs_position_index() {
        let mut palette = Palette::new();
        palette.add("a", Color::opaque(1, 0, 0));
        palette.add("b", Color::opaque(2, 0, 0));
        palette.add("c", Color::opaque(3, 0, 0));

        assert!(palette.remove("b"));
        assert!(!palette.remove("b"));
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get("c"), Some(Color::opaque(3, 0, 0)));
        assert_eq!(palette.get_at(1), Some(Color::opaque(3, 0, 0)));
        assert_eq!(palette.name_at(0), Some("a"));
    }

    #[test]
    fn test_bead_codes_advance_by_decade() {
        assert_eq!(bead_code(0), "A1");
        assert_eq!(bead_code(9), "A10");
        assert_eq!(bead_code(10), "B1");
        assert_eq!(bead_code(25), "C6");
    }
}
