//! Core types shared by the `arm-vision-*` crates.
//!
//! This crate is intentionally small. It knows about marker colors, the two
//! camera views and their per-frame detections, fused 3-D marker points and
//! a borrowed RGB image view. It does *not* know how detections are produced
//! or how joint angles are computed.

mod detection;
mod image;
mod logger;
mod marker;
mod point;

pub use detection::{detection_from_pixel, CameraId, Detection2D, DetectionSet};
pub use image::{ImageError, RgbImageView};
pub use marker::{MarkerColor, MarkerSet};
pub use point::{FusedMarkers, MarkerPoint3D};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
