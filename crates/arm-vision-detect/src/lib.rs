//! Marker detection in a single RGB camera frame.
//!
//! Design:
//! - Threshold the frame with a per-color RGB range to get a binary mask.
//! - Label 4-connected blobs in the mask.
//! - Keep blobs small enough to be a marker (`max_radius`) and round enough
//!   to be a circle. Roundness thresholds are tried from strict to loose;
//!   the largest blob passing the first threshold that accepts anything wins.
//! - Report the blob centroid as a [`Detection2D`](arm_vision_core::Detection2D)
//!   with the row negated.

mod blob;
mod detector;
mod params;

pub use blob::{find_blobs, Blob};
pub use detector::MarkerDetector;
pub use params::{ColorRange, DetectorParams};
