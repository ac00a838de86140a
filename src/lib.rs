//! Spin Wheel - gesture-driven decision wheel engine
//!
//! Core modules:
//! - `spin`: Spin engine (physics, session state machine, sector resolution, frame driver)
//! - `settings`: Tunable physics configuration
//! - `platform`: Browser bindings for the gesture/render layer

pub mod platform;
pub mod settings;
pub mod spin;

pub use settings::SpinConfig;
pub use spin::{DragDelta, SpinDriver, SpinEvent, SpinPhase, SpinSession};

/// Physics configuration constants
pub mod consts {
    /// Per-frame multiplicative velocity decay
    pub const FRICTION: f64 = 0.99;
    /// Below this speed (deg/s) the wheel is considered stopped
    pub const STOP_THRESHOLD: f64 = 1.0;
    /// Hard cap on angular speed (deg/s)
    pub const MAX_VELOCITY: f64 = 2000.0;
    /// Assumed animation frame rate (friction is applied once per frame)
    pub const FRAME_RATE: f64 = 60.0;
    /// Maximum frame steps per `advance` call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Press-and-hold velocity ramp (deg/s gained per second held)
    pub const PRESS_VELOCITY_PER_SECOND: f64 = 600.0;
    /// Radius of the press-to-spin activation zone around the wheel center
    pub const CENTER_RADIUS: f64 = 25.0;

    /// Drag-release amplification applied before clamping
    pub const FLING_MULTIPLIER: f64 = 1.5;
    /// Tap-to-spin velocity range (deg/s)
    pub const RANDOM_SPIN_MIN_VELOCITY: f64 = 900.0;
    pub const RANDOM_SPIN_MAX_VELOCITY: f64 = 1800.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let normalized = angle % 360.0;
    if normalized < 0.0 {
        // -1e-20 + 360 rounds up to 360
        (normalized + 360.0) % 360.0
    } else {
        normalized
    }
}

/// Shortest signed angular difference from `from` to `to`, in (-180, 180]
///
/// Raw gesture angles come from `atan2` and wrap at ±180°, so a finger moving
/// clockwise across the left edge produces samples like 170° then -170°. The
/// true motion there is +20°, not -340°. Non-finite inputs yield 0.
#[inline]
pub fn angle_difference(from: f64, to: f64) -> f64 {
    let delta = to - from;
    if !delta.is_finite() {
        return 0.0;
    }
    let wrapped = delta.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}
