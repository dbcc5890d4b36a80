use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// One of the four colored markers attached to the arm.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    /// Base marker. Fused first; its point is the fallback reference for the others.
    Green,
    /// Anchors the kinematic chain (start of the first link).
    Yellow,
    /// Mid-link marker.
    Blue,
    /// End-link marker.
    Red,
}

impl MarkerColor {
    /// All colors, origin first.
    pub const ALL: [MarkerColor; 4] = [
        MarkerColor::Green,
        MarkerColor::Yellow,
        MarkerColor::Blue,
        MarkerColor::Red,
    ];

    /// The origin (base) marker.
    pub const ORIGIN: MarkerColor = MarkerColor::Green;

    pub fn is_origin(self) -> bool {
        self == Self::ORIGIN
    }

    pub fn name(self) -> &'static str {
        match self {
            MarkerColor::Green => "green",
            MarkerColor::Yellow => "yellow",
            MarkerColor::Blue => "blue",
            MarkerColor::Red => "red",
        }
    }
}

impl fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per marker color.
///
/// Serializes as a map keyed by the lowercase color name. Missing keys
/// deserialize to `T::default()`, so a detection set may simply omit markers
/// that were not found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkerSet<T> {
    #[serde(default)]
    pub green: T,
    #[serde(default)]
    pub yellow: T,
    #[serde(default)]
    pub blue: T,
    #[serde(default)]
    pub red: T,
}

impl<T> MarkerSet<T> {
    pub fn from_fn(mut f: impl FnMut(MarkerColor) -> T) -> Self {
        Self {
            green: f(MarkerColor::Green),
            yellow: f(MarkerColor::Yellow),
            blue: f(MarkerColor::Blue),
            red: f(MarkerColor::Red),
        }
    }

    pub fn get(&self, color: MarkerColor) -> &T {
        match color {
            MarkerColor::Green => &self.green,
            MarkerColor::Yellow => &self.yellow,
            MarkerColor::Blue => &self.blue,
            MarkerColor::Red => &self.red,
        }
    }

    pub fn get_mut(&mut self, color: MarkerColor) -> &mut T {
        match color {
            MarkerColor::Green => &mut self.green,
            MarkerColor::Yellow => &mut self.yellow,
            MarkerColor::Blue => &mut self.blue,
            MarkerColor::Red => &mut self.red,
        }
    }

    /// Iterate `(color, value)` pairs, origin first.
    pub fn iter(&self) -> impl Iterator<Item = (MarkerColor, &T)> + '_ {
        MarkerColor::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(MarkerColor, &T) -> U) -> MarkerSet<U> {
        MarkerSet::from_fn(|c| f(c, self.get(c)))
    }
}

impl<T> Index<MarkerColor> for MarkerSet<T> {
    type Output = T;

    fn index(&self, color: MarkerColor) -> &T {
        self.get(color)
    }
}

impl<T> IndexMut<MarkerColor> for MarkerSet<T> {
    fn index_mut(&mut self, color: MarkerColor) -> &mut T {
        self.get_mut(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_iterated_first() {
        let set = MarkerSet::from_fn(|c| c.name().len());
        let order: Vec<MarkerColor> = set.iter().map(|(c, _)| c).collect();
        assert_eq!(order[0], MarkerColor::ORIGIN);
        assert_eq!(order.len(), 4);
    }

    #[test]
    fn index_matches_named_fields() {
        let mut set = MarkerSet::<u32>::default();
        set[MarkerColor::Blue] = 7;
        assert_eq!(set.blue, 7);
        assert_eq!(set[MarkerColor::Red], 0);
    }

    #[test]
    fn missing_keys_deserialize_to_default() {
        let set: MarkerSet<Option<u8>> = serde_json::from_str(r#"{"red": 3}"#).expect("parse");
        assert_eq!(set.red, Some(3));
        assert_eq!(set.green, None);
    }
}
