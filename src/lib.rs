//! Brewery logo watchface
//!
//! A digital clock, a date line, a separator and a brewery logo that
//! rotates every quarter of an hour. The host (the PineTime firmware or the
//! [`sim::Simulator`]) owns the event loop and calls into the
//! [`watchface::Watchface`] through [`platform::WindowHandlers`].

#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod platform;
pub mod resources;
pub mod scene;
pub mod sim;
pub mod ui;
pub mod watchface;

pub use error::Error;
pub use platform::{Compositor, Host, TimeUnit, WindowHandlers};
pub use resources::{FontId, ImageId, LogoSet, LOGOS};
pub use scene::Scene;
pub use watchface::{Phase, Watchface};
