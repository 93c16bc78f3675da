//! Watchface lifecycle
//!
//! `Uninitialized` until started, `Active` while the host may load, tick and
//! unload the window, `Terminated` once the window is gone.

use chrono::NaiveDateTime;
use embedded_graphics::geometry::Size;
use rand::{rngs::SmallRng, RngCore};

use crate::{
    error::Error,
    platform::{Host, TimeUnit, WindowHandlers},
    resources::LogoSet,
    ui::{format_date, format_time, ClockStyle, DisplayStrings, LogoRotator, Screen},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Uninitialized,
    Active,
    Terminated,
}

/// The watchface application
pub struct Watchface<R = SmallRng> {
    phase: Phase,
    logos: LogoSet,
    rotator: Option<LogoRotator<R>>,
    screen: Option<Screen>,
}

impl Watchface<SmallRng> {
    /// Create and start a watchface whose logo rotation is seeded with
    /// `seed`, typically the current time
    pub fn start_seeded(logos: LogoSet, seed: u64) -> Self {
        let mut watchface = Self::new(logos);
        watchface.start_with(LogoRotator::seeded(logos, seed));
        watchface
    }
}

impl<R: RngCore> Watchface<R> {
    pub fn new(logos: LogoSet) -> Self {
        Self {
            phase: Phase::Uninitialized,
            logos,
            rotator: None,
            screen: None,
        }
    }

    /// Seed the logo rotation and become ready for the window callbacks
    pub fn start(&mut self, rng: R) {
        self.start_with(LogoRotator::new(self.logos, rng));
    }

    fn start_with(&mut self, rotator: LogoRotator<R>) {
        defmt_or_log::info!("Starting watchface with {} logos", self.logos.len());
        self.rotator = Some(rotator);
        self.phase = Phase::Active;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn screen(&self) -> Option<&Screen> {
        self.screen.as_ref()
    }

    pub fn rotator(&self) -> Option<&LogoRotator<R>> {
        self.rotator.as_ref()
    }

    /// Re-render time and date at the host's current time without counting
    /// a tick, e.g. after the clock preference changed
    pub fn redraw<H: Host>(&mut self, host: &mut H) -> Result<(), Error> {
        let now = host.local_time();
        self.update(host, &now, false)
    }

    /// Recompute the strings and, when `rotate` is set, the logo, and push
    /// them to the screen
    fn update<H: Host>(
        &mut self,
        host: &mut H,
        now: &NaiveDateTime,
        rotate: bool,
    ) -> Result<(), Error> {
        let (Some(screen), Some(rotator)) = (self.screen.as_mut(), self.rotator.as_mut()) else {
            defmt_or_log::warn!("Update without a screen, ignoring");
            return Ok(());
        };

        let time = format_time(now, ClockStyle::from_24h(host.is_24h_style()));
        let logo = if rotate { rotator.advance() } else { None };
        let date = format_date(now);

        screen.refresh(host.compositor(), &DisplayStrings { time, date }, logo)
    }
}

impl<R: RngCore> WindowHandlers for Watchface<R> {
    fn on_load<H: Host>(&mut self, host: &mut H, bounds: Size) -> Result<(), Error> {
        match self.phase {
            Phase::Active if self.screen.is_none() => {}
            Phase::Active => return Err(Error::AlreadyLoaded),
            Phase::Uninitialized | Phase::Terminated => return Err(Error::NotStarted),
        }

        defmt_or_log::info!("Loading window {}x{}", bounds.width, bounds.height);
        self.screen = Some(Screen::build(host.compositor(), bounds)?);

        let now = host.local_time();
        if let Err(error) = self.update(host, &now, true) {
            defmt_or_log::warn!("Initial refresh failed, releasing the screen");
            if let Some(screen) = self.screen.take() {
                screen.teardown(host.compositor());
            }
            // The next load must come up with a logo again
            if let Some(rotator) = self.rotator.as_mut() {
                rotator.rewind();
            }
            return Err(error);
        }

        host.subscribe_ticks(TimeUnit::Minute);
        Ok(())
    }

    fn on_tick<H: Host>(&mut self, host: &mut H, now: &NaiveDateTime) -> Result<(), Error> {
        self.update(host, now, true)
    }

    fn on_unload<H: Host>(&mut self, host: &mut H) {
        // No tick may observe a half destroyed screen
        host.unsubscribe_ticks();

        if let Some(screen) = self.screen.take() {
            screen.teardown(host.compositor());
        }
        self.phase = Phase::Terminated;
        defmt_or_log::info!("Window unloaded");
    }
}
