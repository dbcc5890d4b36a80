use nalgebra::{Vector2, Vector3};

/// Fixed reference direction for joints 1 and 3 (the vertical axis is flipped).
pub const REFERENCE_DIRECTION: [f64; 2] = [0.0, -1.0];

#[inline]
pub(crate) fn reference() -> Vector2<f64> {
    Vector2::from(REFERENCE_DIRECTION)
}

pub fn pythagoras(a: f64, b: f64) -> f64 {
    (a * a + b * b).sqrt()
}

/// Hard clamp into `[-limit, limit]`. Not a wrap.
#[inline]
pub fn angle_bound(value: f64, limit: f64) -> f64 {
    value.min(limit).max(-limit)
}

/// Scalar 2-D cross product `a.x * b.y - a.y * b.x`.
#[inline]
pub fn cross_2d(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Signed angle from `from` to `to`, in `(-π, π]`.
pub fn signed_angle_2d(from: &Vector2<f64>, to: &Vector2<f64>) -> f64 {
    cross_2d(to, from).atan2(from.dot(to))
}

/// Unsigned angle between two 2-D vectors, in `[0, π]`.
pub fn unsigned_angle_2d(from: &Vector2<f64>, to: &Vector2<f64>) -> f64 {
    cross_2d(to, from).abs().atan2(from.dot(to))
}

/// Unsigned angle between two 3-D vectors, in `[0, π]`.
pub fn unsigned_angle_3d(from: &Vector3<f64>, to: &Vector3<f64>) -> f64 {
    to.cross(from).norm().atan2(from.dot(to))
}
