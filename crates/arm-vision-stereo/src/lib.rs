//! Stereo fusion of marker detections from two orthogonal cameras.
//!
//! Camera A sees the (X, Z′) plane and camera B the (Y, Z″) plane. A marker
//! seen by both yields `(A.u, B.u, mean(A.v, B.v))`; the shared vertical axis
//! is averaged for noise, it does not help with occlusion. When only one
//! camera sees a marker, the missing horizontal axis is borrowed from the
//! already fused origin marker, so the origin must be fused first.
//!
//! [`FrameCache`] keeps the latest detections per camera. Only a camera-B
//! frame triggers fusion; camera-A data may be a few frames old.

mod cache;
mod fusion;

pub use cache::FrameCache;
pub use fusion::{fuse, fuse_all, fuse_marker, fuse_origin};
