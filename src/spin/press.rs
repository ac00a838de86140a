//! Press-and-hold spin input
//!
//! Holding a pointer in the wheel's center zone charges velocity along a
//! linear ramp instead of relying on drag-release momentum.

use glam::DVec2;

use crate::consts::{MAX_VELOCITY, PRESS_VELOCITY_PER_SECOND};

/// Spin speed (deg/s) earned by holding for `hold_duration` seconds
///
/// Linear ramp at `PRESS_VELOCITY_PER_SECOND`, capped at `MAX_VELOCITY`.
#[inline]
pub fn press_velocity(hold_duration: f64) -> f64 {
    ramp_velocity(hold_duration, PRESS_VELOCITY_PER_SECOND, MAX_VELOCITY)
}

/// Signed form of [`press_velocity`]; positive is clockwise
#[inline]
pub fn signed_press_velocity(hold_duration: f64, clockwise: bool) -> f64 {
    let speed = press_velocity(hold_duration);
    if clockwise { speed } else { -speed }
}

/// Ramp with explicit tuning, used by config-driven callers
pub(crate) fn ramp_velocity(hold_duration: f64, per_second: f64, max: f64) -> f64 {
    if hold_duration <= 0.0 {
        return 0.0;
    }
    (hold_duration * per_second).min(max)
}

/// Whether `point` falls inside the press zone of a `wheel_size` square
pub fn is_in_center_region(point: DVec2, wheel_size: f64, center_radius: f64) -> bool {
    let center = DVec2::splat(wheel_size / 2.0);
    point.distance(center) <= center_radius
}

/// Hold time after which the ramp saturates (≈3.33s with defaults)
///
/// Only meaningful for progress-ring normalization.
#[inline]
pub fn max_hold_duration() -> f64 {
    MAX_VELOCITY / PRESS_VELOCITY_PER_SECOND
}
