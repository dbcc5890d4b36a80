use arm_vision_core::MarkerSet;
use serde::{Deserialize, Serialize};

/// Inclusive per-channel RGB range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    pub lo: [u8; 3],
    pub hi: [u8; 3],
}

impl ColorRange {
    pub const fn new(lo: [u8; 3], hi: [u8; 3]) -> Self {
        Self { lo, hi }
    }

    #[inline]
    pub fn contains(&self, px: [u8; 3]) -> bool {
        (0..3).all(|c| self.lo[c] <= px[c] && px[c] <= self.hi[c])
    }
}

/// Marker detector settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectorParams {
    /// Mask range per marker color.
    #[serde(default = "default_ranges")]
    pub ranges: MarkerSet<ColorRange>,
    /// Largest accepted marker radius, in pixels.
    #[serde(default = "default_max_radius")]
    pub max_radius: f64,
    /// Smallest accepted blob area, in pixels.
    #[serde(default = "default_min_area")]
    pub min_area: usize,
    /// Roundness thresholds in `(0, 1]`, tried in order. Keep them decreasing.
    #[serde(default = "default_circularity_steps")]
    pub circularity_steps: Vec<f64>,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            ranges: default_ranges(),
            max_radius: default_max_radius(),
            min_area: default_min_area(),
            circularity_steps: default_circularity_steps(),
        }
    }
}

fn default_ranges() -> MarkerSet<ColorRange> {
    MarkerSet {
        green: ColorRange::new([0, 20, 0], [20, 255, 20]),
        yellow: ColorRange::new([10, 10, 0], [255, 255, 0]),
        blue: ColorRange::new([0, 0, 10], [20, 20, 255]),
        red: ColorRange::new([20, 0, 0], [255, 20, 20]),
    }
}

fn default_max_radius() -> f64 {
    20.0
}

fn default_min_area() -> usize {
    4
}

fn default_circularity_steps() -> Vec<f64> {
    (1..=9).rev().map(|i| i as f64 / 10.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ranges_separate_pure_colors() {
        let ranges = default_ranges();
        let red = [200, 5, 5];
        let green = [5, 200, 5];
        let blue = [5, 5, 200];
        let yellow = [200, 200, 0];

        assert!(ranges.red.contains(red));
        assert!(!ranges.red.contains(green));
        assert!(ranges.green.contains(green));
        assert!(ranges.blue.contains(blue));
        assert!(!ranges.blue.contains(red));
        assert!(ranges.yellow.contains(yellow));
        assert!(!ranges.yellow.contains(red));
    }

    #[test]
    fn steps_go_from_strict_to_loose() {
        let steps = default_circularity_steps();
        assert_eq!(steps.len(), 9);
        assert!(steps.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let params: DetectorParams = serde_json::from_str(r#"{"max_radius": 12.0}"#).expect("json");
        assert_eq!(params.max_radius, 12.0);
        assert_eq!(params.ranges, default_ranges());
        assert_eq!(params.min_area, 4);
    }
}
