//! Spin Wheel entry point
//!
//! The browser build is driven from JS through `platform::web`. Natively this
//! runs a headless session: one flick, one press-and-hold and a few seeded
//! tap-to-spins, logging where each lands.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use spin_wheel::SpinConfig;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => seed,
            Err(e) => {
                log::error!("Invalid seed {:?}: {}", arg, e);
                std::process::exit(2);
            }
        },
        None => 42,
    };
    log::info!("Spin Wheel (native) starting with seed {}", seed);

    let config = SpinConfig::load();
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut demo = demo::Demo::new(config, 8);

    demo.flick();
    demo.press_and_hold(1.8);
    for _ in 0..5 {
        demo.tap_to_spin(&mut rng);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use glam::DVec2;
    use rand::Rng;
    use spin_wheel::consts::FRAME_RATE;
    use spin_wheel::{SpinConfig, SpinDriver, SpinEvent};

    const WHEEL_SIZE: f64 = 320.0;
    /// Frames to simulate before declaring the wheel stuck
    const MAX_FRAMES: u32 = 60 * 120;

    pub struct Demo {
        driver: SpinDriver,
        time: f64,
    }

    impl Demo {
        pub fn new(config: SpinConfig, sector_count: usize) -> Self {
            Self {
                driver: SpinDriver::new(config, sector_count),
                time: 0.0,
            }
        }

        fn rim(angle: f64) -> DVec2 {
            let theta = angle.to_radians();
            DVec2::splat(WHEEL_SIZE / 2.0) + DVec2::new(theta.cos(), theta.sin()) * WHEEL_SIZE * 0.4
        }

        /// Quick clockwise swipe across the left edge of the wheel
        pub fn flick(&mut self) {
            let samples = [150.0, 165.0, 180.0, -165.0, -150.0];
            self.driver.pointer_down(Self::rim(samples[0]), WHEEL_SIZE, self.time);
            for angle in &samples[1..] {
                self.time += 1.0 / FRAME_RATE;
                self.driver.pointer_move(Self::rim(*angle), WHEEL_SIZE, self.time);
            }
            match self.driver.pointer_up(self.time) {
                Some(event) => self.settle("flick", event),
                None => log::warn!("Flick too slow to spin"),
            }
        }

        pub fn press_and_hold(&mut self, seconds: f64) {
            let center = DVec2::splat(WHEEL_SIZE / 2.0);
            self.driver.pointer_down(center, WHEEL_SIZE, self.time);
            self.time += seconds;
            self.driver.pointer_move(center, WHEEL_SIZE, self.time);
            log::info!("Hold charge {:.0}%", self.driver.hold_progress() * 100.0);
            match self.driver.pointer_up(self.time) {
                Some(event) => self.settle("press", event),
                None => log::warn!("Press released too early to spin"),
            }
        }

        pub fn tap_to_spin<R: Rng>(&mut self, rng: &mut R) {
            let event = self.driver.spin_random(rng);
            self.settle("tap", event);
        }

        fn settle(&mut self, source: &str, started: SpinEvent) {
            if let SpinEvent::SpinStarted { velocity, .. } = started {
                log::info!("{} spin at {:.0} deg/s", source, velocity);
            }

            let dt = 1.0 / FRAME_RATE;
            for _ in 0..MAX_FRAMES {
                self.time += dt;
                for event in self.driver.advance(dt) {
                    if let SpinEvent::Landed { generation, sector } = event {
                        println!(
                            "spin {:>2} ({:<5}) rotation {:>9.2} -> sector {}",
                            generation,
                            source,
                            self.driver.rotation(),
                            sector.map_or_else(|| "none".to_string(), |s| s.to_string())
                        );
                        return;
                    }
                }
            }
            log::error!("{} spin did not settle within {} frames", source, MAX_FRAMES);
        }
    }
}
