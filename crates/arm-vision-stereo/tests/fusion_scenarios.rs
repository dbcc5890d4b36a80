use arm_vision_core::{CameraId, DetectionSet, MarkerColor, MarkerPoint3D};
use arm_vision_stereo::FrameCache;
use nalgebra::{Point2, Point3};

fn set(entries: &[(MarkerColor, f64, f64)]) -> DetectionSet {
    let mut out = DetectionSet::default();
    for &(color, u, v) in entries {
        out[color] = Some(Point2::new(u, v));
    }
    out
}

#[test]
fn red_missing_in_camera_a_falls_back_to_origin_x() {
    let mut cache = FrameCache::new();
    cache.update(CameraId::A, set(&[(MarkerColor::Green, 5.0, 5.0)]));
    cache.update(
        CameraId::B,
        set(&[(MarkerColor::Green, 5.0, 5.0), (MarkerColor::Red, 8.0, 3.0)]),
    );

    let fused = cache.fuse();
    assert_eq!(
        fused.green,
        MarkerPoint3D::Resolved(Point3::new(5.0, 5.0, 5.0))
    );
    assert_eq!(fused.red, MarkerPoint3D::Resolved(Point3::new(5.0, 8.0, 3.0)));
}

#[test]
fn fused_z_is_mean_of_both_views_for_every_color() {
    let entries: Vec<_> = MarkerColor::ALL.iter().map(|&c| (c, 2.0, 6.0)).collect();
    let entries_b: Vec<_> = MarkerColor::ALL.iter().map(|&c| (c, 3.0, 8.0)).collect();

    let mut cache = FrameCache::new();
    cache.update(CameraId::A, set(&entries));
    cache.update(CameraId::B, set(&entries_b));
    let fused = cache.fuse();

    for (color, point) in fused.iter() {
        assert_eq!(
            point.to_array_or_sentinel(),
            [2.0, 3.0, 7.0],
            "unexpected fusion for {color}"
        );
    }
}

#[test]
fn fully_occluded_marker_degrades_without_touching_others() {
    let mut cache = FrameCache::new();
    cache.update(
        CameraId::A,
        set(&[(MarkerColor::Green, 1.0, 1.0), (MarkerColor::Blue, 4.0, -6.0)]),
    );
    cache.update(CameraId::B, set(&[(MarkerColor::Green, 2.0, 3.0)]));

    let fused = cache.fuse();
    assert_eq!(fused.yellow.to_array_or_sentinel(), [-1.0, -1.0, -1.0]);
    assert_eq!(fused.blue.to_array_or_sentinel(), [4.0, 2.0, -6.0]);
    assert_eq!(
        fused.occluded(),
        vec![MarkerColor::Yellow, MarkerColor::Red]
    );
}
