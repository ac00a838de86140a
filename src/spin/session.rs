//! Spin session state machine
//!
//! ```text
//! Idle -> Dragging -> Spinning -> Idle
//! Idle -> Pressing -> Spinning -> Idle
//! Spinning -> Dragging | Pressing   (touched while still spinning)
//! ```
//!
//! Deferred "spin finished" work must capture [`SpinSession::generation`]
//! when the spin starts and re-check [`SpinSession::should_complete`] before
//! acting. A newer spin or a stop makes the stale check fail.

use super::physics::clamp_velocity;
use crate::angle_difference;
use crate::consts::MAX_VELOCITY;

/// Current interaction mode of the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinPhase {
    /// At rest, waiting for input
    #[default]
    Idle,
    /// Finger/pointer is turning the wheel
    Dragging,
    /// Finger/pointer is held in the center zone, charging a spin
    Pressing,
    /// Free-spinning under friction
    Spinning,
}

/// Motion between two consecutive drag samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragDelta {
    /// Shortest-path angle change (degrees)
    pub angle_delta: f64,
    /// Time between samples (seconds)
    pub time_delta: f64,
}

/// Transient interaction state for one wheel
///
/// Not internally synchronized. Confine it to one thread, or wrap it in a
/// single `Mutex` so phase and generation always change together.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinSession {
    generation: u64,
    phase: SpinPhase,
    /// Signed deg/s, positive = clockwise
    angular_velocity: f64,
    max_velocity: f64,

    // Drag sub-state
    last_angle: f64,
    last_sample_time: Option<f64>,

    // Press sub-state
    press_start_time: Option<f64>,
    current_hold_duration: f64,
}

impl Default for SpinSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinSession {
    pub fn new() -> Self {
        Self::with_max_velocity(MAX_VELOCITY)
    }

    /// Session whose velocity is capped at `max_velocity` instead of the default
    pub fn with_max_velocity(max_velocity: f64) -> Self {
        Self {
            generation: 0,
            phase: SpinPhase::Idle,
            angular_velocity: 0.0,
            max_velocity: max_velocity.abs(),
            last_angle: 0.0,
            last_sample_time: None,
            press_start_time: None,
            current_hold_duration: 0.0,
        }
    }

    /// Identifier of the most recent spin attempt (0 = none yet)
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    #[inline]
    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    #[inline]
    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    #[inline]
    pub fn is_spinning(&self) -> bool {
        self.phase == SpinPhase::Spinning
    }

    /// Whether a drag anchor is set
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.last_sample_time.is_some()
    }

    /// Whether a press is being held
    #[inline]
    pub fn is_pressing(&self) -> bool {
        self.press_start_time.is_some()
    }

    /// Hold time as of the last `update_press` (UI feedback only)
    #[inline]
    pub fn current_hold_duration(&self) -> f64 {
        self.current_hold_duration
    }

    // === Drag ===

    /// Anchor a drag at `angle`; re-entry replaces the previous anchor
    pub fn start_drag(&mut self, time: f64, angle: f64) {
        if self.phase == SpinPhase::Spinning {
            log::debug!("Spin {} interrupted by drag", self.generation);
        }
        self.phase = SpinPhase::Dragging;
        self.last_angle = angle;
        self.last_sample_time = Some(time);
    }

    /// Slide the drag window to a new sample
    ///
    /// Returns `None` when no drag is anchored; the caller should skip the frame.
    pub fn update_drag(&mut self, current_angle: f64, time: f64) -> Option<DragDelta> {
        let last_time = self.last_sample_time?;
        let delta = DragDelta {
            angle_delta: angle_difference(self.last_angle, current_angle),
            time_delta: time - last_time,
        };
        self.last_angle = current_angle;
        self.last_sample_time = Some(time);
        log::trace!("Drag sample: {:?}", delta);
        Some(delta)
    }

    /// Drop the drag anchor; phase and velocity are left to the caller
    pub fn end_drag(&mut self) {
        self.last_sample_time = None;
    }

    // === Press ===

    pub fn start_press(&mut self, time: f64) {
        if self.phase == SpinPhase::Spinning {
            log::debug!("Spin {} interrupted by press", self.generation);
        }
        self.phase = SpinPhase::Pressing;
        self.press_start_time = Some(time);
        self.current_hold_duration = 0.0;
    }

    /// Refresh the hold time shown by the UI; never touches velocity
    pub fn update_press(&mut self, time: f64) {
        if let Some(start) = self.press_start_time {
            self.current_hold_duration = time - start;
        }
    }

    /// Release the press and report how long it was held (0 if none was active)
    pub fn end_press(&mut self, time: f64) -> f64 {
        let Some(start) = self.press_start_time.take() else {
            return 0.0;
        };
        let held = time - start;
        log::trace!("Press released after {:.3}s", held);
        held
    }

    // === Spin ===

    /// Begin a new, uniquely numbered spin attempt
    pub fn start_spin(&mut self, velocity: f64) {
        self.generation += 1;
        self.phase = SpinPhase::Spinning;
        self.angular_velocity = clamp_velocity(velocity, self.max_velocity);
        log::debug!(
            "Spin {} started at {:.1} deg/s",
            self.generation,
            self.angular_velocity
        );
    }

    /// Return to Idle with zero velocity; safe from any phase
    pub fn stop_spin(&mut self) {
        if self.phase == SpinPhase::Spinning {
            log::debug!("Spin {} stopped", self.generation);
        }
        self.phase = SpinPhase::Idle;
        self.angular_velocity = 0.0;
    }

    /// Persist a decayed velocity from the frame loop (clamped to the cap)
    pub fn update_velocity(&mut self, velocity: f64) {
        self.angular_velocity = clamp_velocity(velocity, self.max_velocity);
    }

    /// Whether a completion captured at `generation` may still act
    pub fn should_complete(&self, generation: u64) -> bool {
        generation == self.generation && self.phase == SpinPhase::Spinning
    }

    /// Check-and-stop in one step for touch-to-stop
    ///
    /// Returns `false` without mutating anything if `generation` is stale or
    /// the session already stopped.
    pub fn complete_manual_stop(&mut self, generation: u64) -> bool {
        if !self.should_complete(generation) {
            log::debug!(
                "Ignoring manual stop for spin {} (current {}, {:?})",
                generation,
                self.generation,
                self.phase
            );
            return false;
        }
        self.stop_spin();
        true
    }

    /// Invalidate everything, including in-flight spins (sector content changed)
    pub fn reset(&mut self) {
        log::debug!("Session reset at generation {}", self.generation);
        *self = Self::with_max_velocity(self.max_velocity);
    }
}
