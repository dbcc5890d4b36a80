use arm_vision_core::MarkerColor;

/// Errors returned when joint angles cannot be derived.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KinematicsError {
    #[error("{0} marker is occluded, joint angles would be meaningless")]
    Occluded(MarkerColor),
}
