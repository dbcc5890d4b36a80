use std::f64::consts::{FRAC_PI_2, PI};

use arm_vision_core::{FusedMarkers, MarkerColor};
use nalgebra::{Point3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::angles::{
    angle_bound, pythagoras, reference, signed_angle_2d, unsigned_angle_2d, unsigned_angle_3d,
};
use crate::KinematicsError;

/// Mechanical limits, in radians, each applied as a symmetric hard clamp.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JointLimits {
    pub joint1: f64,
    pub joint3: f64,
    pub joint4: f64,
}

impl Default for JointLimits {
    fn default() -> Self {
        Self {
            joint1: PI,
            joint3: FRAC_PI_2,
            joint4: FRAC_PI_2,
        }
    }
}

/// Clamped joint angles in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JointAngleSet {
    pub joint1: f64,
    pub joint3: f64,
    pub joint4: f64,
}

/// Link direction vectors between fused marker points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkVectors {
    /// `blue - yellow`, the first link.
    pub yb: Vector3<f64>,
    /// `red - blue`, the second/third link.
    pub br: Vector3<f64>,
}

impl LinkVectors {
    pub fn from_points(yellow: &Point3<f64>, blue: &Point3<f64>, red: &Point3<f64>) -> Self {
        Self {
            yb: blue - yellow,
            br: red - blue,
        }
    }

    /// Link vectors from fused markers, refusing occluded inputs.
    pub fn from_fused(fused: &FusedMarkers) -> Result<Self, KinematicsError> {
        let point = |color: MarkerColor| {
            fused[color]
                .point()
                .ok_or(KinematicsError::Occluded(color))
        };
        let yellow = point(MarkerColor::Yellow)?;
        let blue = point(MarkerColor::Blue)?;
        let red = point(MarkerColor::Red)?;
        Ok(Self::from_points(yellow, blue, red))
    }

    /// `yb - br`, published alongside `yb`.
    pub fn yb_minus_br(&self) -> Vector3<f64> {
        self.yb - self.br
    }
}

/// Compute clamped joint angles from the two link vectors.
pub fn joint_angles(links: &LinkVectors, limits: &JointLimits) -> JointAngleSet {
    let LinkVectors { yb, br } = links;
    let r = reference();

    // Camera orientation flips both horizontal axes.
    let base = Vector2::new(-yb.x, -yb.y);
    let joint1 = signed_angle_2d(&r, &base);

    let elevation = Vector2::new(pythagoras(yb.x, yb.y), br.z);
    let joint3 = unsigned_angle_2d(&r, &elevation);

    let joint4 = unsigned_angle_3d(yb, br);

    JointAngleSet {
        joint1: angle_bound(joint1, limits.joint1),
        joint3: angle_bound(joint3, limits.joint3),
        joint4: angle_bound(joint4, limits.joint4),
    }
}

impl JointAngleSet {
    /// Link vectors and joint angles for one trigger.
    ///
    /// Fails when yellow, blue or red is occluded; the origin marker is not
    /// used here.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip_all))]
    pub fn from_fused(
        fused: &FusedMarkers,
        limits: &JointLimits,
    ) -> Result<(LinkVectors, Self), KinematicsError> {
        let links = LinkVectors::from_fused(fused)?;
        let angles = joint_angles(&links, limits);
        log::trace!(
            "joint angles: j1={:.4} j3={:.4} j4={:.4}",
            angles.joint1,
            angles.joint3,
            angles.joint4
        );
        Ok((links, angles))
    }
}
