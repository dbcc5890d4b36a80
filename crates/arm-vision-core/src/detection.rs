use std::fmt;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::MarkerSet;

/// Which of the two orthogonal cameras produced a frame.
///
/// Camera A observes the (X, Z′) plane, camera B the (Y, Z″) plane. Both see
/// the same vertical axis.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraId {
    A,
    B,
}

impl CameraId {
    pub fn other(self) -> Self {
        match self {
            CameraId::A => CameraId::B,
            CameraId::B => CameraId::A,
        }
    }
}

impl fmt::Display for CameraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraId::A => f.write_str("camera A"),
            CameraId::B => f.write_str("camera B"),
        }
    }
}

/// Pixel location `(u, v)` of one marker in one camera, or `None` when the
/// marker was not found in that frame.
///
/// `v` is the pixel row negated, so "up" is positive.
pub type Detection2D = Option<Point2<f64>>;

/// Latest detection of every marker in one camera frame.
pub type DetectionSet = MarkerSet<Detection2D>;

/// Build a detection from a raw pixel `(column, row)` position.
pub fn detection_from_pixel(col: f64, row: f64) -> Detection2D {
    Some(Point2::new(col, -row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MarkerColor;

    #[test]
    fn pixel_row_is_negated() {
        let d = detection_from_pixel(12.0, 30.0).expect("present");
        assert_eq!(d, Point2::new(12.0, -30.0));
    }

    #[test]
    fn detection_set_parses_partial_json() {
        let raw = r#"{"green":[5.0,5.0],"red":null}"#;
        let set: DetectionSet = serde_json::from_str(raw).expect("parse");
        assert_eq!(set[MarkerColor::Green], Some(Point2::new(5.0, 5.0)));
        assert!(set[MarkerColor::Red].is_none());
        assert!(set[MarkerColor::Blue].is_none());
    }

    #[test]
    fn other_camera_swaps() {
        assert_eq!(CameraId::A.other(), CameraId::B);
        assert_eq!(CameraId::B.other(), CameraId::A);
    }
}
