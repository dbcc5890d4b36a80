use arm_vision_core::{CameraId, DetectionSet, FusedMarkers};

use crate::fuse_all;

/// Latest detection set received from each camera.
///
/// There is no expiry: camera A's entry is whatever arrived last, which may
/// lag camera B by several frames. The cache is plain owned state; callers
/// that feed it from two streams must serialize access themselves.
#[derive(Clone, Debug, Default)]
pub struct FrameCache {
    a: DetectionSet,
    b: DetectionSet,
    a_frames_since_trigger: u64,
}

impl FrameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached detections for `camera`.
    pub fn update(&mut self, camera: CameraId, detections: DetectionSet) {
        match camera {
            CameraId::A => {
                self.a = detections;
                self.a_frames_since_trigger += 1;
            }
            CameraId::B => self.b = detections,
        }
    }

    pub fn get(&self, camera: CameraId) -> &DetectionSet {
        match camera {
            CameraId::A => &self.a,
            CameraId::B => &self.b,
        }
    }

    /// Camera-A frames stored since the last call to [`Self::fuse`].
    ///
    /// Zero means the camera-A entry was already used by the previous
    /// trigger; large values mean camera B is lagging.
    pub fn a_frames_since_trigger(&self) -> u64 {
        self.a_frames_since_trigger
    }

    /// Fuse whatever both cameras currently hold.
    pub fn fuse(&mut self) -> FusedMarkers {
        if self.a_frames_since_trigger == 0 {
            log::debug!("reusing stale camera A detections for this trigger");
        } else if self.a_frames_since_trigger > 1 {
            log::debug!(
                "camera A delivered {} frames since the last trigger",
                self.a_frames_since_trigger
            );
        }
        self.a_frames_since_trigger = 0;
        fuse_all(&self.a, &self.b)
    }
}
