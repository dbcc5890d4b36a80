//! Helpers for frames held as `image::RgbImage`.

use std::path::Path;

use arm_vision_core::{DetectionSet, RgbImageView};
use arm_vision_detect::MarkerDetector;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::RawFrame;

/// Borrow an `image::RgbImage` as the lightweight core view type.
pub fn rgb_view(img: &::image::RgbImage) -> RgbImageView<'_> {
    RgbImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Decode any format supported by `image` and convert it to RGB8.
pub fn load_rgb(path: impl AsRef<Path>) -> Result<::image::RgbImage, ::image::ImageError> {
    Ok(::image::ImageReader::open(path)?.decode()?.to_rgb8())
}

/// Run marker detection on one decoded frame.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img, detector), fields(width = img.width(), height = img.height()))
)]
pub fn detect_markers(img: &::image::RgbImage, detector: &MarkerDetector) -> DetectionSet {
    detector.detect(&rgb_view(img))
}

/// Copy a decoded frame into an owned [`RawFrame`] for the runtime.
pub fn raw_frame(img: &::image::RgbImage) -> RawFrame {
    RawFrame {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw().clone(),
    }
}
