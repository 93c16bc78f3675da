//! UI definitions module
//!
//! Formatting, layout, logo rotation and the screen composer. None of it
//! touches pixels directly, that is left to the host's compositor.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

pub mod clock;
pub mod layout;
pub mod rotator;
pub mod screen;
pub mod text;

pub use clock::{format_date, format_time, ClockStyle, DisplayStrings};
pub use layout::Layout;
pub use rotator::{LogoRotator, ROTATION_PERIOD};
pub use screen::Screen;
pub use text::{DisplayText, DISPLAY_TEXT_CAPACITY};

/// Window and text background
pub const BACKGROUND_COLOR: Rgb565 = Rgb565::BLACK;
/// Text and separator color
pub const FOREGROUND_COLOR: Rgb565 = Rgb565::WHITE;
