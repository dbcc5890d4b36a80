use arm_vision_core::{MarkerColor, MarkerPoint3D};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::ArmEstimate;

/// Transport form of one estimate, as handed to a [`crate::ResultSink`].
///
/// Positions and vectors are divided by the configured scale divisor.
/// Occluded markers carry the scaled `(-1, -1, -1)` sentinel and are listed
/// in `occluded`. Vectors and angles are `None` when kinematics refused an
/// occluded chain marker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArmMessage {
    pub green_center: [f64; 3],
    pub yellow_center: [f64; 3],
    pub blue_center: [f64; 3],
    pub red_center: [f64; 3],
    pub vector_yb: Option<[f64; 3]>,
    pub vector_yb_br: Option<[f64; 3]>,
    pub joint_angle_1: Option<f64>,
    pub joint_angle_3: Option<f64>,
    pub joint_angle_4: Option<f64>,
    #[serde(default)]
    pub occluded: Vec<MarkerColor>,
}

impl ArmMessage {
    pub fn from_estimate(estimate: &ArmEstimate, scale_divisor: f64) -> Self {
        let center = |p: &MarkerPoint3D| p.to_array_or_sentinel().map(|c| c / scale_divisor);
        let scaled = |v: Vector3<f64>| -> [f64; 3] { (v / scale_divisor).into() };
        let markers = &estimate.markers;

        Self {
            green_center: center(&markers.green),
            yellow_center: center(&markers.yellow),
            blue_center: center(&markers.blue),
            red_center: center(&markers.red),
            vector_yb: estimate.links.map(|l| scaled(l.yb)),
            vector_yb_br: estimate.links.map(|l| scaled(l.yb_minus_br())),
            joint_angle_1: estimate.angles.map(|a| a.joint1),
            joint_angle_3: estimate.angles.map(|a| a.joint3),
            joint_angle_4: estimate.angles.map(|a| a.joint4),
            occluded: markers.occluded(),
        }
    }
}
