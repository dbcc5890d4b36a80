use arm_vision_core::{Detection2D, DetectionSet, FusedMarkers, MarkerColor, MarkerPoint3D};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Fuse one marker's detections from camera A and camera B.
///
/// `origin_fallback` is `None` for the origin marker itself and the already
/// fused origin point for every other marker.
pub fn fuse(
    a: Detection2D,
    b: Detection2D,
    origin_fallback: Option<&MarkerPoint3D>,
) -> MarkerPoint3D {
    match origin_fallback {
        None => fuse_origin(a, b),
        Some(origin) => fuse_marker(a, b, origin),
    }
}

/// Fuse the origin marker, which has no fallback reference.
///
/// With a single view the observed horizontal reading is copied into *both*
/// horizontal axes. This mirrors the deployed node and is kept as is.
pub fn fuse_origin(a: Detection2D, b: Detection2D) -> MarkerPoint3D {
    match (a, b) {
        (None, None) => MarkerPoint3D::Occluded,
        (None, Some(b)) => MarkerPoint3D::resolved(b.x, b.x, b.y),
        (Some(a), None) => MarkerPoint3D::resolved(a.x, a.x, a.y),
        (Some(a), Some(b)) => both_views(a.x, a.y, b.x, b.y),
    }
}

/// Fuse a non-origin marker, borrowing the missing axis from `origin`.
///
/// Camera A missing: X comes from the origin. Camera B missing: Y comes from
/// the origin. If the origin is itself occluded there is nothing to borrow
/// and the marker is occluded too.
pub fn fuse_marker(a: Detection2D, b: Detection2D, origin: &MarkerPoint3D) -> MarkerPoint3D {
    match (a, b) {
        (None, None) => MarkerPoint3D::Occluded,
        (None, Some(b)) => match origin.point() {
            Some(o) => MarkerPoint3D::resolved(o.x, b.x, b.y),
            None => MarkerPoint3D::Occluded,
        },
        (Some(a), None) => match origin.point() {
            Some(o) => MarkerPoint3D::resolved(a.x, o.y, a.y),
            None => MarkerPoint3D::Occluded,
        },
        (Some(a), Some(b)) => both_views(a.x, a.y, b.x, b.y),
    }
}

#[inline]
fn both_views(au: f64, av: f64, bu: f64, bv: f64) -> MarkerPoint3D {
    MarkerPoint3D::resolved(au, bu, (av + bv) / 2.0)
}

/// Fuse every marker: the origin first, then the remaining colors against it.
#[cfg_attr(feature = "tracing", instrument(level = "debug", skip_all))]
pub fn fuse_all(a: &DetectionSet, b: &DetectionSet) -> FusedMarkers {
    let origin = fuse_origin(a[MarkerColor::ORIGIN], b[MarkerColor::ORIGIN]);
    let fused = FusedMarkers::from_fn(|color| {
        if color.is_origin() {
            origin
        } else {
            fuse_marker(a[color], b[color], &origin)
        }
    });

    for (color, point) in fused.iter() {
        if point.is_occluded() {
            log::debug!("{color} marker occluded in both views or unresolvable");
        }
    }
    fused
}
