//! Squared distances used by every proximity check.
//!
//! Queries compare squared distances against `radius²` so no square root is
//! taken per entity.

use glam::Vec3;

/// Squared distance between two world positions.
///
/// With `horizontal_only` the height axis (Y) is ignored and the distance is
/// measured on the X/Z plane, the same plane the region grid lies on.
#[must_use]
#[inline]
pub fn sqr_distance(a: Vec3, b: Vec3, horizontal_only: bool) -> f32 {
    if horizontal_only {
        sqr_distance_2d(a, b)
    } else {
        a.distance_squared(b)
    }
}

/// Squared X/Z-plane distance between two world positions.
#[must_use]
#[inline]
pub fn sqr_distance_2d(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    dx * dx + dz * dz
}
