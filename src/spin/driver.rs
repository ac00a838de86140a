//! Frame driver: the caller side of the spin engine
//!
//! Owns the rotation accumulator and runs the friction loop at a fixed
//! frame rate, the same way the game loop runs the sim at a fixed timestep.
//! Pointer events go in, `SpinEvent`s come out; nothing here draws.

use glam::DVec2;
use rand::Rng;

use super::physics::{
    angle_from_center, angular_velocity, apply_friction, clamp_velocity, rotation_delta_per_frame,
    should_stop,
};
use super::press::{is_in_center_region, ramp_velocity};
use super::sector::safe_landing_sector;
use super::session::{SpinPhase, SpinSession};
use crate::consts::MAX_SUBSTEPS;
use crate::settings::SpinConfig;

/// A release this long after the last drag sample carries no momentum
const FLING_WINDOW: f64 = 0.1;

/// Something the presentation layer should react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinEvent {
    /// A new spin attempt began
    SpinStarted { generation: u64, velocity: f64 },
    /// The wheel came to rest; `None` when there are no sectors
    Landed {
        generation: u64,
        sector: Option<usize>,
    },
    /// A touch grabbed the wheel while it was still spinning
    Interrupted { generation: u64 },
}

/// Drives a `SpinSession` from pointer events and frame ticks
#[derive(Debug, Clone)]
pub struct SpinDriver {
    config: SpinConfig,
    session: SpinSession,
    sector_count: usize,
    /// Accumulated rotation (degrees, unbounded)
    rotation: f64,
    /// Unsimulated time carried between `advance` calls
    accumulator: f64,
    /// Generation captured when the current spin started
    pending: Option<u64>,
    /// Latest non-degenerate drag velocity sample (deg/s)
    drag_velocity: f64,
    last_move_time: f64,
}

impl SpinDriver {
    pub fn new(config: SpinConfig, sector_count: usize) -> Self {
        let config = config.sanitized();
        Self {
            session: SpinSession::with_max_velocity(config.max_velocity),
            config,
            sector_count,
            rotation: 0.0,
            accumulator: 0.0,
            pending: None,
            drag_velocity: 0.0,
            last_move_time: 0.0,
        }
    }

    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[inline]
    pub fn session(&self) -> &SpinSession {
        &self.session
    }

    #[inline]
    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    #[inline]
    pub fn sector_count(&self) -> usize {
        self.sector_count
    }

    /// Sector currently under the pointer
    pub fn current_sector(&self) -> Option<usize> {
        safe_landing_sector(self.rotation, self.sector_count)
    }

    /// Press charge in [0, 1] for a progress ring
    pub fn hold_progress(&self) -> f64 {
        if self.session.phase() != SpinPhase::Pressing {
            return 0.0;
        }
        (self.session.current_hold_duration() / self.config.max_hold_duration()).clamp(0.0, 1.0)
    }

    /// Swap the wheel's content; any in-flight spin is abandoned
    pub fn set_sector_count(&mut self, sector_count: usize) {
        log::info!("Sector count {} -> {}", self.sector_count, sector_count);
        self.sector_count = sector_count;
        self.session.reset();
        self.pending = None;
        self.accumulator = 0.0;
        self.drag_velocity = 0.0;
    }

    // === Pointer input ===

    /// Touch began at `point` inside a `wheel_size` square
    ///
    /// The center zone charges a press spin; anywhere else grabs the rim.
    pub fn pointer_down(&mut self, point: DVec2, wheel_size: f64, time: f64) -> Option<SpinEvent> {
        let interrupted = self.session.is_spinning().then(|| SpinEvent::Interrupted {
            generation: self.session.generation(),
        });

        if is_in_center_region(point, wheel_size, self.config.center_radius) {
            self.session.start_press(time);
        } else {
            let center = DVec2::splat(wheel_size / 2.0);
            self.session.start_drag(time, angle_from_center(center, point));
            self.drag_velocity = 0.0;
            self.last_move_time = time;
        }
        interrupted
    }

    pub fn pointer_move(&mut self, point: DVec2, wheel_size: f64, time: f64) {
        match self.session.phase() {
            SpinPhase::Dragging => {
                let center = DVec2::splat(wheel_size / 2.0);
                let angle = angle_from_center(center, point);
                let Some(delta) = self.session.update_drag(angle, time) else {
                    return;
                };
                // The wheel follows the finger
                self.rotation += delta.angle_delta;
                if delta.time_delta > 0.0 {
                    self.drag_velocity = angular_velocity(delta.angle_delta, delta.time_delta);
                    self.last_move_time = time;
                }
            }
            SpinPhase::Pressing => self.session.update_press(time),
            SpinPhase::Idle | SpinPhase::Spinning => {}
        }
    }

    /// Touch ended; flicks and charged presses turn into spins
    pub fn pointer_up(&mut self, time: f64) -> Option<SpinEvent> {
        match self.session.phase() {
            SpinPhase::Dragging => {
                self.session.end_drag();
                let velocity = if time - self.last_move_time > FLING_WINDOW {
                    0.0
                } else {
                    clamp_velocity(
                        self.drag_velocity * self.config.fling_multiplier,
                        self.config.max_velocity,
                    )
                };
                self.drag_velocity = 0.0;
                if should_stop(velocity, self.config.stop_threshold) {
                    self.session.stop_spin();
                    return None;
                }
                Some(self.spin(velocity))
            }
            SpinPhase::Pressing => {
                let held = self.session.end_press(time);
                let speed = ramp_velocity(
                    held,
                    self.config.press_velocity_per_second,
                    self.config.max_velocity,
                );
                if should_stop(speed, self.config.stop_threshold) {
                    self.session.stop_spin();
                    return None;
                }
                let velocity = if self.config.press_clockwise { speed } else { -speed };
                Some(self.spin(velocity))
            }
            SpinPhase::Idle | SpinPhase::Spinning => None,
        }
    }

    // === Spinning ===

    /// Start a spin at `velocity` (clamped to the configured cap)
    pub fn spin(&mut self, velocity: f64) -> SpinEvent {
        self.session.start_spin(velocity);
        let generation = self.session.generation();
        self.pending = Some(generation);
        self.accumulator = 0.0;
        SpinEvent::SpinStarted {
            generation,
            velocity: self.session.angular_velocity(),
        }
    }

    /// Tap-to-spin with a random speed and direction
    pub fn spin_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SpinEvent {
        let speed = rng.random_range(
            self.config.random_spin_min_velocity..=self.config.random_spin_max_velocity,
        );
        let velocity = if rng.random_bool(0.5) { speed } else { -speed };
        self.spin(velocity)
    }

    /// Advance the friction loop by `dt` seconds of wall time
    pub fn advance(&mut self, dt: f64) -> Vec<SpinEvent> {
        let mut events = Vec::new();
        let Some(generation) = self.pending else {
            return events;
        };
        if !(dt > 0.0) {
            return events;
        }

        let fps = self.config.frame_rate;
        let step = 1.0 / fps;
        self.accumulator += dt.min(step * MAX_SUBSTEPS as f64);

        let mut substeps = 0;
        while self.accumulator >= step && substeps < MAX_SUBSTEPS {
            self.accumulator -= step;
            substeps += 1;

            // A newer spin, an interruption or a reset invalidates this one
            if !self.session.should_complete(generation) {
                log::debug!("Dropping completion for stale spin {}", generation);
                self.pending = None;
                self.accumulator = 0.0;
                break;
            }

            let velocity = self.session.angular_velocity();
            self.rotation += rotation_delta_per_frame(velocity, fps);
            let velocity = apply_friction(velocity, self.config.friction);
            self.session.update_velocity(velocity);

            if should_stop(velocity, self.config.stop_threshold) {
                self.session.stop_spin();
                events.push(self.land(generation));
                break;
            }
        }
        events
    }

    /// Touch-to-stop: land immediately at the current rotation
    ///
    /// Returns `None` if the spin already finished or was superseded.
    pub fn manual_stop(&mut self) -> Option<SpinEvent> {
        let generation = self.pending?;
        if !self.session.complete_manual_stop(generation) {
            self.pending = None;
            return None;
        }
        Some(self.land(generation))
    }

    fn land(&mut self, generation: u64) -> SpinEvent {
        self.pending = None;
        self.accumulator = 0.0;
        let sector = safe_landing_sector(self.rotation, self.sector_count);
        match sector {
            Some(index) => log::info!("Spin {} landed on sector {}", generation, index),
            None => log::warn!("Spin {} finished on an empty wheel", generation),
        }
        SpinEvent::Landed { generation, sector }
    }
}
