//! The watch as host of the watchface

use core::sync::atomic::{AtomicBool, Ordering};

use brewface::{Host, Scene, TimeUnit};
use chrono::NaiveDateTime;

use super::{config::DEFAULT_24H_STYLE, time::TimeManager};

/// User preference for 24 hour time, toggled by the side button
pub static CLOCK_24H: AtomicBool = AtomicBool::new(DEFAULT_24H_STYLE);

/// Flip the clock style, returning the new setting
pub fn toggle_clock_style() -> bool {
    !CLOCK_24H.fetch_xor(true, Ordering::Relaxed)
}

pub struct WatchHost {
    scene: Scene,
    time: TimeManager,
    subscription: Option<TimeUnit>,
}

impl WatchHost {
    pub fn new(time: TimeManager) -> Self {
        Self {
            scene: Scene::new(),
            time,
            subscription: None,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn subscription(&self) -> Option<TimeUnit> {
        self.subscription
    }
}

impl Host for WatchHost {
    type Compositor = Scene;

    fn compositor(&mut self) -> &mut Scene {
        &mut self.scene
    }

    fn is_24h_style(&self) -> bool {
        CLOCK_24H.load(Ordering::Relaxed)
    }

    fn local_time(&self) -> NaiveDateTime {
        self.time.local_time()
    }

    fn subscribe_ticks(&mut self, unit: TimeUnit) {
        defmt::info!("Tick subscription: {:?}", unit);
        self.subscription = Some(unit);
    }

    fn unsubscribe_ticks(&mut self) {
        self.subscription = None;
    }
}
