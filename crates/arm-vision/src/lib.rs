//! High-level facade crate for the `arm-vision-*` workspace.
//!
//! This crate provides:
//! - re-exports of the underlying crates (core types, stereo fusion,
//!   kinematics, marker detection)
//! - [`ArmPipeline`]: frame cache -> fusion -> kinematics -> [`ResultSink`]
//! - [`StereoRuntime`]: a single worker thread that serializes the two
//!   camera streams into one pipeline
//! - JSON configuration and detection-event IO used by the `arm-vision` CLI
//!
//! ## Quickstart
//!
//! ```
//! use arm_vision::{ArmPipeline, CameraId, DetectionSet, PipelineConfig, VecSink};
//! use arm_vision::core::detection_from_pixel;
//!
//! let mut pipeline = ArmPipeline::new(PipelineConfig::default(), VecSink::default());
//!
//! let mut a = DetectionSet::default();
//! a.green = detection_from_pixel(5.0, -5.0);
//! let mut b = a;
//! b.red = detection_from_pixel(8.0, -3.0);
//!
//! assert!(pipeline.on_frame(CameraId::A, a).is_none());
//! let estimate = pipeline.on_frame(CameraId::B, b).expect("camera B triggers");
//! assert!(!estimate.markers.red.is_occluded());
//! assert_eq!(pipeline.sink().messages.len(), 1);
//! ```
//!
//! ## API map
//! - `arm_vision::core`: markers, detections, fused points, image view, logger.
//! - `arm_vision::stereo`: per-marker fusion and the frame cache.
//! - `arm_vision::kinematics`: link vectors and clamped joint angles.
//! - `arm_vision::detect`: color-mask marker detection.
//! - `arm_vision::image_io` (feature `image`): helpers for `image::RgbImage`.

pub use arm_vision_core as core;
pub use arm_vision_detect as detect;
pub use arm_vision_kinematics as kinematics;
pub use arm_vision_stereo as stereo;

pub use arm_vision_core::{CameraId, DetectionSet, FusedMarkers, MarkerColor, MarkerPoint3D};
pub use arm_vision_kinematics::{JointAngleSet, JointLimits, LinkVectors};

mod config;
mod io;
mod message;
mod pipeline;
mod runtime;
mod sink;

pub use config::{ArmVisionConfig, ConfigError, PipelineConfig};
pub use io::{parse_event_line, read_events, DetectionEvent};
pub use message::ArmMessage;
pub use pipeline::{ArmEstimate, ArmPipeline};
pub use runtime::{CameraEvent, CameraHandle, RawFrame, RuntimeError, StereoRuntime};
pub use sink::{ChannelSink, JsonLinesSink, ResultSink, SinkError, VecSink};

#[cfg(feature = "image")]
pub mod image_io;
