//! Spin engine
//!
//! Everything that turns gesture samples into a landed sector lives here.
//! Like a fixed-step simulation, nothing in this module owns a clock:
//! - Timestamps and frame deltas are supplied by the caller
//! - Physics helpers are pure functions
//! - `SpinSession` is the only mutable state and is driven from one thread

pub mod driver;
pub mod physics;
pub mod press;
pub mod sector;
pub mod session;

pub use driver::{SpinDriver, SpinEvent};
pub use physics::{
    angle_from_center, angular_velocity, apply_friction, clamp_velocity, rotation_delta_per_frame,
    should_stop,
};
pub use press::{is_in_center_region, max_hold_duration, press_velocity, signed_press_velocity};
pub use sector::{landing_sector, normalize_rotation, safe_landing_sector, sector_angle, sector_rotation};
pub use session::{DragDelta, SpinPhase, SpinSession};
