//! Momentum physics for a free-spinning wheel
//!
//! Angles are degrees, positive = clockwise on screen (Y-down). Every
//! function is total: degenerate frames produce 0 instead of dividing by zero.

use glam::DVec2;

/// Angular velocity (deg/s) from an angle change over `duration` seconds
///
/// Zero-duration frames happen when two touch samples share a timestamp;
/// they carry no velocity information and yield 0.
#[inline]
pub fn angular_velocity(angle_delta: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 0.0;
    }
    angle_delta / duration
}

/// Angle of `point` around `center`, in (-180, 180]
///
/// 0° is directly right of center and 90° directly below it, since screen
/// Y grows downward.
pub fn angle_from_center(center: DVec2, point: DVec2) -> f64 {
    let offset = point - center;
    let degrees = offset.y.atan2(offset.x).to_degrees();
    // atan2 reports -180 for points left of center with a -0.0 offset
    if degrees <= -180.0 { degrees + 360.0 } else { degrees }
}

/// One frame of friction decay
#[inline]
pub fn apply_friction(velocity: f64, friction: f64) -> f64 {
    velocity * friction
}

/// Whether the wheel is slow enough to be considered stopped
#[inline]
pub fn should_stop(velocity: f64, threshold: f64) -> bool {
    velocity.abs() < threshold
}

/// Limit velocity to [-max, max]
///
/// Written as min/max rather than `f64::clamp`, which panics on a negative
/// or NaN bound.
#[inline]
pub fn clamp_velocity(velocity: f64, max: f64) -> f64 {
    velocity.min(max).max(-max)
}

/// Rotation (degrees) covered in one frame at `fps`
#[inline]
pub fn rotation_delta_per_frame(velocity: f64, fps: f64) -> f64 {
    if fps <= 0.0 {
        return 0.0;
    }
    velocity / fps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_angular_velocity() {
        assert_eq!(angular_velocity(20.0, 0.1), 200.0);
        assert_eq!(angular_velocity(-45.0, 0.5), -90.0);
        assert_eq!(angular_velocity(30.0, 0.0), 0.0);
        assert_eq!(angular_velocity(30.0, -1.0), 0.0);
    }

    #[test]
    fn test_angle_from_center_screen_axes() {
        let center = DVec2::new(100.0, 100.0);
        assert_eq!(angle_from_center(center, DVec2::new(150.0, 100.0)), 0.0);
        assert!((angle_from_center(center, DVec2::new(100.0, 150.0)) - 90.0).abs() < 1e-9);
        assert!((angle_from_center(center, DVec2::new(100.0, 50.0)) + 90.0).abs() < 1e-9);
        assert!((angle_from_center(center, DVec2::new(50.0, 100.0)) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_from_center_negative_zero_left() {
        let angle = angle_from_center(DVec2::ZERO, DVec2::new(-1.0, -0.0));
        assert!(angle > -180.0 && angle <= 180.0);
        assert!((angle.abs() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_friction_and_stop() {
        assert!((apply_friction(100.0, FRICTION) - 99.0).abs() < 1e-9);
        assert!(should_stop(0.5, STOP_THRESHOLD));
        assert!(should_stop(-0.5, STOP_THRESHOLD));
        assert!(!should_stop(1.0, STOP_THRESHOLD));
        assert!(!should_stop(-1.0, STOP_THRESHOLD));
        assert!(!should_stop(-250.0, STOP_THRESHOLD));
    }

    #[test]
    fn test_clamp_velocity() {
        assert_eq!(clamp_velocity(2500.0, MAX_VELOCITY), 2000.0);
        assert_eq!(clamp_velocity(-2500.0, MAX_VELOCITY), -2000.0);
        assert_eq!(clamp_velocity(123.0, MAX_VELOCITY), 123.0);
    }

    #[test]
    fn test_rotation_delta_per_frame() {
        assert_eq!(rotation_delta_per_frame(600.0, FRAME_RATE), 10.0);
        assert_eq!(rotation_delta_per_frame(600.0, 0.0), 0.0);
        assert_eq!(rotation_delta_per_frame(600.0, -30.0), 0.0);
    }

    #[test]
    fn test_max_velocity_decays_to_stop_in_bounded_frames() {
        let mut v = MAX_VELOCITY;
        let mut frames = 0;
        while !should_stop(v, STOP_THRESHOLD) {
            v = apply_friction(v, FRICTION);
            frames += 1;
            assert!(frames < 1000, "friction never stopped the wheel");
        }
        // ln(2000) / -ln(0.99) ≈ 756.3
        assert_eq!(frames, 757);
    }
}
