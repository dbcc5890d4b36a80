//! Joint angles of a three-joint arm from fused 3-D marker positions.
//!
//! Two link vectors are derived from the yellow, blue and red markers:
//! `yb = blue - yellow` and `br = red - blue`. From them:
//!
//! - `joint1`: signed rotation about the vertical axis, from the horizontal
//!   projection of `yb` (sign-flipped for the camera convention) against the
//!   reference direction `(0, -1)`.
//! - `joint3`: unsigned angle between `(0, -1)` and
//!   `(|yb.xy|, br.z)`.
//! - `joint4`: unsigned angle between `yb` and `br`.
//!
//! Every angle is hard-clamped to a mechanical limit. The unsigned formula
//! only yields values in `[0, π]`, so the symmetric clamp of joints 3 and 4
//! effectively bounds them to `[0, limit]`.

mod angles;
mod error;
mod joints;

pub use angles::{
    angle_bound, cross_2d, pythagoras, signed_angle_2d, unsigned_angle_2d, unsigned_angle_3d,
    REFERENCE_DIRECTION,
};
pub use error::KinematicsError;
pub use joints::{joint_angles, JointAngleSet, JointLimits, LinkVectors};
