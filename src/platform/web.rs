//! `wasm-bindgen` surface for the browser
//!
//! JS owns the canvas, pointer events and `requestAnimationFrame`; it feeds
//! them here and reads back the rotation to draw.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;

use crate::settings::SpinConfig;
use crate::spin::{SpinDriver, SpinEvent};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier module instance
        return;
    }
    log::info!("Spin wheel ready");
}

/// Landed sector handed to JS; -1 means "nothing yet" or "empty wheel"
const NO_SECTOR: i32 = -1;

#[wasm_bindgen]
pub struct WheelHandle {
    driver: SpinDriver,
    rng: Pcg32,
    wheel_size: f64,
    last_landed: i32,
}

#[wasm_bindgen]
impl WheelHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(sector_count: u32, wheel_size: f64, seed: u64) -> WheelHandle {
        WheelHandle {
            driver: SpinDriver::new(SpinConfig::load(), sector_count as usize),
            rng: Pcg32::seed_from_u64(seed),
            wheel_size,
            last_landed: NO_SECTOR,
        }
    }

    pub fn set_wheel_size(&mut self, wheel_size: f64) {
        self.wheel_size = wheel_size;
    }

    pub fn set_sector_count(&mut self, sector_count: u32) {
        self.driver.set_sector_count(sector_count as usize);
        self.last_landed = NO_SECTOR;
    }

    /// Returns true if the touch interrupted a spin
    pub fn pointer_down(&mut self, x: f64, y: f64, time: f64) -> bool {
        self.driver
            .pointer_down(DVec2::new(x, y), self.wheel_size, time)
            .is_some()
    }

    pub fn pointer_move(&mut self, x: f64, y: f64, time: f64) {
        self.driver.pointer_move(DVec2::new(x, y), self.wheel_size, time);
    }

    /// Returns true if the release started a spin
    pub fn pointer_up(&mut self, time: f64) -> bool {
        self.driver.pointer_up(time).is_some()
    }

    pub fn spin_random(&mut self) {
        self.driver.spin_random(&mut self.rng);
    }

    /// Touch-to-stop; returns the landed sector or -1
    pub fn stop(&mut self) -> i32 {
        match self.driver.manual_stop() {
            Some(event) => self.record(event),
            None => NO_SECTOR,
        }
    }

    /// Step the friction loop; returns the landed sector this frame or -1
    pub fn advance(&mut self, dt: f64) -> i32 {
        let mut landed = NO_SECTOR;
        for event in self.driver.advance(dt) {
            landed = self.record(event);
        }
        landed
    }

    /// Rotation in degrees to draw the wheel at
    pub fn rotation(&self) -> f64 {
        self.driver.rotation()
    }

    pub fn velocity(&self) -> f64 {
        self.driver.session().angular_velocity()
    }

    pub fn is_spinning(&self) -> bool {
        self.driver.session().is_spinning()
    }

    pub fn hold_progress(&self) -> f64 {
        self.driver.hold_progress()
    }

    pub fn last_landed(&self) -> i32 {
        self.last_landed
    }
}

impl WheelHandle {
    fn record(&mut self, event: SpinEvent) -> i32 {
        if let SpinEvent::Landed { sector, .. } = event {
            self.last_landed = sector.map_or(NO_SECTOR, |s| s as i32);
            return self.last_landed;
        }
        NO_SECTOR
    }
}
