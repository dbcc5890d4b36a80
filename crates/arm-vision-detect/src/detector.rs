use arm_vision_core::{
    detection_from_pixel, Detection2D, DetectionSet, MarkerColor, RgbImageView,
};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::blob::{find_blobs, Blob};
use crate::params::{ColorRange, DetectorParams};

/// Finds the four arm markers in one camera frame.
#[derive(Clone, Debug, Default)]
pub struct MarkerDetector {
    params: DetectorParams,
}

impl MarkerDetector {
    pub fn new(params: DetectorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Detect every marker color in `img`.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self, img), fields(width = img.width, height = img.height))
    )]
    pub fn detect(&self, img: &RgbImageView<'_>) -> DetectionSet {
        DetectionSet::from_fn(|color| self.detect_color(img, color))
    }

    /// Detect a single marker color, `None` when no acceptable blob exists.
    pub fn detect_color(&self, img: &RgbImageView<'_>, color: MarkerColor) -> Detection2D {
        let mask = color_mask(img, &self.params.ranges[color]);
        let candidates: Vec<Blob> = find_blobs(&mask, img.width, img.height)
            .into_iter()
            .filter(|b| b.area >= self.params.min_area && b.radius() <= self.params.max_radius)
            .collect();
        if candidates.is_empty() {
            log::debug!("{color}: no mask blob within size limits");
            return None;
        }

        // Loosen the roundness requirement until something is accepted.
        for &threshold in &self.params.circularity_steps {
            let best = candidates
                .iter()
                .filter(|b| b.circularity() >= threshold)
                .max_by_key(|b| b.area);
            if let Some(blob) = best {
                log::trace!(
                    "{color}: accepted blob area={} at circularity>={threshold:.2}",
                    blob.area
                );
                let (cx, cy) = blob.centroid;
                return detection_from_pixel(cx.round(), cy.round());
            }
        }

        log::debug!(
            "{color}: {} blob(s) rejected at every circularity threshold",
            candidates.len()
        );
        None
    }
}

fn color_mask(img: &RgbImageView<'_>, range: &ColorRange) -> Vec<bool> {
    img.data
        .chunks_exact(3)
        .map(|px| range.contains([px[0], px[1], px[2]]))
        .collect()
}
