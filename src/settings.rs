//! Spin physics tuning
//!
//! Defaults come from `consts`. On the web a tuned copy can be persisted in
//! LocalStorage so designers can tweak feel without rebuilding.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable wheel physics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    // === Momentum ===
    /// Per-frame velocity multiplier, in (0, 1)
    pub friction: f64,
    /// Speed (deg/s) below which the wheel counts as stopped
    pub stop_threshold: f64,
    /// Speed cap (deg/s)
    pub max_velocity: f64,
    /// Frames per second the friction loop runs at
    pub frame_rate: f64,

    // === Drag ===
    /// Release velocity multiplier for flicks
    pub fling_multiplier: f64,

    // === Press ===
    /// Velocity gained per second of hold (deg/s²)
    pub press_velocity_per_second: f64,
    /// Press-zone radius around the wheel center
    pub center_radius: f64,
    /// Direction of press-charged spins
    pub press_clockwise: bool,

    // === Tap-to-spin ===
    pub random_spin_min_velocity: f64,
    pub random_spin_max_velocity: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            friction: FRICTION,
            stop_threshold: STOP_THRESHOLD,
            max_velocity: MAX_VELOCITY,
            frame_rate: FRAME_RATE,

            fling_multiplier: FLING_MULTIPLIER,

            press_velocity_per_second: PRESS_VELOCITY_PER_SECOND,
            center_radius: CENTER_RADIUS,
            press_clockwise: true,

            random_spin_min_velocity: RANDOM_SPIN_MIN_VELOCITY,
            random_spin_max_velocity: RANDOM_SPIN_MAX_VELOCITY,
        }
    }
}

impl SpinConfig {
    /// Parse a (possibly partial) JSON config; missing fields keep defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(|config| config.sanitized())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Hold time at which a press reaches `max_velocity`
    pub fn max_hold_duration(&self) -> f64 {
        self.max_velocity / self.press_velocity_per_second
    }

    /// Replace values that would break the physics with defaults
    ///
    /// Friction outside (0, 1) would never stop the wheel (or reverse it),
    /// and non-positive rates divide by zero in the ramp and frame math.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.friction > 0.0 && self.friction < 1.0) {
            log::warn!("Friction {} out of range, using {}", self.friction, defaults.friction);
            self.friction = defaults.friction;
        }
        fix_positive("stop_threshold", &mut self.stop_threshold, defaults.stop_threshold);
        fix_positive("max_velocity", &mut self.max_velocity, defaults.max_velocity);
        fix_positive("frame_rate", &mut self.frame_rate, defaults.frame_rate);
        fix_positive("fling_multiplier", &mut self.fling_multiplier, defaults.fling_multiplier);
        fix_positive(
            "press_velocity_per_second",
            &mut self.press_velocity_per_second,
            defaults.press_velocity_per_second,
        );
        fix_positive("center_radius", &mut self.center_radius, defaults.center_radius);
        fix_positive(
            "random_spin_min_velocity",
            &mut self.random_spin_min_velocity,
            defaults.random_spin_min_velocity,
        );
        fix_positive(
            "random_spin_max_velocity",
            &mut self.random_spin_max_velocity,
            defaults.random_spin_max_velocity,
        );

        if self.random_spin_min_velocity > self.random_spin_max_velocity {
            log::warn!("Random spin range inverted, swapping bounds");
            std::mem::swap(
                &mut self.random_spin_min_velocity,
                &mut self.random_spin_max_velocity,
            );
        }
        self
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "spin_wheel_config";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded spin config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Stored spin config unreadable: {}", e),
                }
            }
        }

        log::info!("Using default spin config");
        Self::default()
    }

    /// Save config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Spin config saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

fn fix_positive(name: &str, value: &mut f64, default: f64) {
    if !(*value > 0.0 && value.is_finite()) {
        log::warn!("{} must be positive, got {}; using {}", name, value, default);
        *value = default;
    }
}
