//! Host platform contract
//!
//! The watchface never owns the event loop. A host creates the window,
//! delivers ticks and tears the window down again, calling into a
//! [`WindowHandlers`] implementation strictly one callback at a time.
//! Compositing, font rasterization and image decoding stay on the host side
//! behind [`Compositor`].

use chrono::NaiveDateTime;
use embedded_graphics::{geometry::Size, pixelcolor::Rgb565, primitives::Rectangle};

use crate::{
    error::Error,
    resources::{FontId, ImageId},
};

/// Loaded font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FontHandle(u16);

/// Decoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitmapHandle(u16);

/// Visual element in the window's layer tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerHandle(u16);

macro_rules! raw_handle {
    ($($handle:ident),*) => {
        $(
            impl $handle {
                /// Wrap a host-issued raw value
                pub const fn from_raw(raw: u16) -> Self {
                    Self(raw)
                }

                pub const fn raw(self) -> u16 {
                    self.0
                }
            }
        )*
    };
}

raw_handle!(FontHandle, BitmapHandle, LayerHandle);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextAlignment {
    Left,
    Center,
}

/// Styling of a text layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextAttributes {
    pub font: FontHandle,
    pub alignment: TextAlignment,
    pub text_color: Rgb565,
    pub background_color: Rgb565,
}

/// Tick granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeUnit {
    Second,
    Minute,
}

/// Compositing services of the host
///
/// Every `load`/`create` must be paired with exactly one `unload`/`destroy`.
/// Releasing never fails: a host that does not know the handle ignores it.
pub trait Compositor {
    fn load_font(&mut self, font: FontId) -> Result<FontHandle, Error>;
    fn unload_font(&mut self, font: FontHandle);

    fn create_bitmap(&mut self, image: ImageId) -> Result<BitmapHandle, Error>;
    fn destroy_bitmap(&mut self, bitmap: BitmapHandle);

    /// Create an empty image layer and stack it on top of the window
    fn create_bitmap_layer(&mut self, frame: Rectangle) -> Result<LayerHandle, Error>;
    /// Create an empty text layer and stack it on top of the window
    fn create_text_layer(
        &mut self,
        frame: Rectangle,
        attributes: TextAttributes,
    ) -> Result<LayerHandle, Error>;
    /// Create a layer drawing a horizontal line along its top edge
    fn create_line_layer(&mut self, frame: Rectangle, color: Rgb565)
        -> Result<LayerHandle, Error>;
    fn destroy_layer(&mut self, layer: LayerHandle);

    fn set_text(&mut self, layer: LayerHandle, text: &str) -> Result<(), Error>;
    fn set_bitmap(&mut self, layer: LayerHandle, bitmap: BitmapHandle) -> Result<(), Error>;
}

/// Everything a window callback may ask of the host
pub trait Host {
    type Compositor: Compositor;

    fn compositor(&mut self) -> &mut Self::Compositor;

    /// User preference for 24 hour time. May change between calls.
    fn is_24h_style(&self) -> bool;

    /// Current local wall-clock time
    fn local_time(&self) -> NaiveDateTime;

    fn subscribe_ticks(&mut self, unit: TimeUnit);
    fn unsubscribe_ticks(&mut self);
}

/// Callbacks the host drives, never concurrently and never re-entered
pub trait WindowHandlers {
    /// The window became visible
    fn on_load<H: Host>(&mut self, host: &mut H, bounds: Size) -> Result<(), Error>;

    /// A subscribed tick fired
    fn on_tick<H: Host>(&mut self, host: &mut H, now: &NaiveDateTime) -> Result<(), Error>;

    /// The window is being dismissed
    fn on_unload<H: Host>(&mut self, host: &mut H);
}
