use arm_vision_core::{CameraId, DetectionSet, FusedMarkers};
use arm_vision_kinematics::{JointAngleSet, LinkVectors};
use arm_vision_stereo::FrameCache;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{ArmMessage, PipelineConfig, ResultSink};

/// Everything computed for one camera-B trigger, before scaling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArmEstimate {
    pub markers: FusedMarkers,
    /// `None` when a chain marker is occluded.
    pub links: Option<LinkVectors>,
    /// `None` when a chain marker is occluded.
    pub angles: Option<JointAngleSet>,
}

/// Frame cache -> stereo fusion -> kinematics -> sink.
///
/// Camera-A frames only refresh the cache. Every camera-B frame refreshes
/// the cache and then runs the full chain against whatever camera A last
/// delivered. The pipeline takes `&mut self`, so the two camera handlers
/// cannot overlap; see [`crate::StereoRuntime`] for feeding it from two
/// threads.
pub struct ArmPipeline<S> {
    cache: FrameCache,
    config: PipelineConfig,
    sink: S,
    triggers: u64,
}

impl<S: ResultSink> ArmPipeline<S> {
    pub fn new(config: PipelineConfig, sink: S) -> Self {
        Self {
            cache: FrameCache::new(),
            config,
            sink,
            triggers: 0,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn cache(&self) -> &FrameCache {
        &self.cache
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Number of camera-B frames processed so far.
    pub fn triggers(&self) -> u64 {
        self.triggers
    }

    /// Handle one camera frame. Returns the estimate for camera-B frames.
    pub fn on_frame(&mut self, camera: CameraId, detections: DetectionSet) -> Option<ArmEstimate> {
        self.cache.update(camera, detections);
        match camera {
            CameraId::A => None,
            CameraId::B => Some(self.trigger()),
        }
    }

    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self), fields(trigger = self.triggers)))]
    fn trigger(&mut self) -> ArmEstimate {
        self.triggers += 1;
        let markers = self.cache.fuse();

        let (links, angles) = match JointAngleSet::from_fused(&markers, &self.config.limits) {
            Ok((links, angles)) => (Some(links), Some(angles)),
            Err(err) => {
                log::warn!("trigger {}: {err}", self.triggers);
                (None, None)
            }
        };

        let estimate = ArmEstimate {
            markers,
            links,
            angles,
        };

        let message = ArmMessage::from_estimate(&estimate, self.config.scale_divisor);
        if let Err(err) = self.sink.publish(&message) {
            log::warn!("trigger {}: failed to publish result: {err}", self.triggers);
        }
        estimate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SinkError, VecSink};
    use arm_vision_core::detection_from_pixel;

    struct FailingSink;

    impl ResultSink for FailingSink {
        fn publish(&mut self, _message: &ArmMessage) -> Result<(), SinkError> {
            Err(SinkError::Disconnected)
        }
    }

    #[test]
    fn camera_a_only_caches() {
        let mut pipeline = ArmPipeline::new(PipelineConfig::default(), VecSink::default());
        let mut a = DetectionSet::default();
        a.green = detection_from_pixel(1.0, 1.0);
        assert!(pipeline.on_frame(CameraId::A, a).is_none());
        assert!(pipeline.sink().messages.is_empty());
        assert_eq!(pipeline.cache().get(CameraId::A).green, a.green);
        assert_eq!(pipeline.triggers(), 0);
    }

    #[test]
    fn camera_b_publishes_even_without_camera_a() {
        let mut pipeline = ArmPipeline::new(PipelineConfig::default(), VecSink::default());
        let est = pipeline
            .on_frame(CameraId::B, DetectionSet::default())
            .expect("estimate");
        assert!(est.angles.is_none());
        assert_eq!(pipeline.sink().messages.len(), 1);
        assert_eq!(pipeline.triggers(), 1);
    }

    #[test]
    fn sink_failure_does_not_stop_the_pipeline() {
        let mut pipeline = ArmPipeline::new(PipelineConfig::default(), FailingSink);
        assert!(pipeline.on_frame(CameraId::B, DetectionSet::default()).is_some());
        assert!(pipeline.on_frame(CameraId::B, DetectionSet::default()).is_some());
        assert_eq!(pipeline.triggers(), 2);
    }
}
