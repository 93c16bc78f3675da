//! Host simulator
//!
//! Stands in for the watch's event loop on the desktop: it owns a
//! [`Scene`], answers the clock preference and time queries, tracks the tick
//! subscription and dispatches callbacks one at a time.

use chrono::{Duration, NaiveDateTime};
use embedded_graphics::geometry::Size;

use crate::{
    error::Error,
    platform::{Host, TimeUnit, WindowHandlers},
    scene::Scene,
};

pub struct Simulator {
    scene: Scene,
    bounds: Size,
    is_24h: bool,
    now: NaiveDateTime,
    subscription: Option<TimeUnit>,
    delivered: usize,
    dropped: usize,
}

impl Simulator {
    pub fn new(bounds: Size, now: NaiveDateTime) -> Self {
        Self {
            scene: Scene::new(),
            bounds,
            is_24h: true,
            now,
            subscription: None,
            delivered: 0,
            dropped: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Change the user's clock preference
    pub fn set_24h_style(&mut self, is_24h: bool) {
        self.is_24h = is_24h;
    }

    pub fn set_time(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn subscription(&self) -> Option<TimeUnit> {
        self.subscription
    }

    /// Ticks handed to the window so far
    pub fn delivered_ticks(&self) -> usize {
        self.delivered
    }

    /// Ticks that fired while nobody was subscribed
    pub fn dropped_ticks(&self) -> usize {
        self.dropped
    }

    /// Show the window
    pub fn load<W: WindowHandlers>(&mut self, window: &mut W) -> Result<(), Error> {
        let bounds = self.bounds;
        window.on_load(self, bounds)
    }

    /// Fire a tick at `now`. Returns whether it reached the window.
    pub fn tick<W: WindowHandlers>(
        &mut self,
        window: &mut W,
        now: NaiveDateTime,
    ) -> Result<bool, Error> {
        self.now = now;
        if self.subscription.is_none() {
            self.dropped += 1;
            return Ok(false);
        }
        self.delivered += 1;
        window.on_tick(self, &now)?;
        Ok(true)
    }

    /// Dismiss the window
    pub fn unload<W: WindowHandlers>(&mut self, window: &mut W) {
        window.on_unload(self);
    }

    /// Run a whole window session: load, `minutes` ticks one minute apart,
    /// then unload.
    pub fn run<W: WindowHandlers>(&mut self, window: &mut W, minutes: usize) -> Result<(), Error> {
        self.load(window)?;
        for _ in 0..minutes {
            let next = self.now + Duration::minutes(1);
            self.tick(window, next)?;
        }
        self.unload(window);
        Ok(())
    }
}

impl Host for Simulator {
    type Compositor = Scene;

    fn compositor(&mut self) -> &mut Scene {
        &mut self.scene
    }

    fn is_24h_style(&self) -> bool {
        self.is_24h
    }

    fn local_time(&self) -> NaiveDateTime {
        self.now
    }

    fn subscribe_ticks(&mut self, unit: TimeUnit) {
        self.subscription = Some(unit);
    }

    fn unsubscribe_ticks(&mut self) {
        self.subscription = None;
    }
}
