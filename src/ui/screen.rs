//! Screen composer
//!
//! Owns the four visual elements of the watchface and the two fonts they
//! use. Everything is acquired once in [`Screen::build`] and released once in
//! [`Screen::teardown`], which consumes the screen.

use embedded_graphics::geometry::Size;
use heapless::Vec;

use super::{
    clock::DisplayStrings, layout::Layout, BACKGROUND_COLOR, FOREGROUND_COLOR,
};
use crate::{
    error::Error,
    platform::{BitmapHandle, Compositor, FontHandle, LayerHandle, TextAlignment, TextAttributes},
    resources::{FontId, ImageId},
};

/// Fonts loaded for the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fonts {
    pub time: FontHandle,
    pub date: FontHandle,
}

/// Watchface screen
#[derive(Debug)]
pub struct Screen {
    layout: Layout,
    /// Logo, top right
    logo_layer: LayerHandle,
    /// Time, large and centered at the bottom
    time_layer: LayerHandle,
    /// One pixel line above the time
    separator_layer: LayerHandle,
    /// Date, left aligned above the separator
    date_layer: LayerHandle,
    fonts: Fonts,
    /// Image currently shown in the logo layer
    logo: Option<(ImageId, BitmapHandle)>,
}

/// Resources taken so far by an unfinished build
#[derive(Default)]
struct Acquired {
    layers: Vec<LayerHandle, 4>,
    fonts: Vec<FontHandle, 2>,
}

impl Acquired {
    fn layer(&mut self, layer: Result<LayerHandle, Error>) -> Result<LayerHandle, Error> {
        let layer = layer?;
        self.layers.push(layer).map_err(|_| Error::ResourceExhausted)?;
        Ok(layer)
    }

    fn font(&mut self, font: Result<FontHandle, Error>) -> Result<FontHandle, Error> {
        let font = font?;
        self.fonts.push(font).map_err(|_| Error::ResourceExhausted)?;
        Ok(font)
    }

    fn release<C: Compositor>(self, compositor: &mut C) {
        for layer in self.layers.iter().rev() {
            compositor.destroy_layer(*layer);
        }
        for font in self.fonts.iter().rev() {
            compositor.unload_font(*font);
        }
    }
}

impl Screen {
    /// Create all elements for a window of size `bounds`, bottom to top:
    /// logo, time, separator, date.
    ///
    /// On failure everything created so far is released again.
    pub fn build<C: Compositor>(compositor: &mut C, bounds: Size) -> Result<Self, Error> {
        let layout = Layout::compute(bounds);
        let mut acquired = Acquired::default();

        match Self::acquire(compositor, layout, &mut acquired) {
            Ok(screen) => Ok(screen),
            Err(err) => {
                defmt_or_log::warn!("Screen build failed: {:?}", err);
                acquired.release(compositor);
                Err(err)
            }
        }
    }

    fn acquire<C: Compositor>(
        compositor: &mut C,
        layout: Layout,
        acquired: &mut Acquired,
    ) -> Result<Self, Error> {
        let logo_layer = acquired.layer(compositor.create_bitmap_layer(layout.logo))?;

        let time_font = acquired.font(compositor.load_font(FontId::RobotoRegular48))?;
        let time_layer = acquired.layer(compositor.create_text_layer(
            layout.time,
            TextAttributes {
                font: time_font,
                alignment: TextAlignment::Center,
                text_color: FOREGROUND_COLOR,
                background_color: BACKGROUND_COLOR,
            },
        ))?;

        let separator_layer =
            acquired.layer(compositor.create_line_layer(layout.separator, FOREGROUND_COLOR))?;

        let date_font = acquired.font(compositor.load_font(FontId::RobotoRegular24))?;
        let date_layer = acquired.layer(compositor.create_text_layer(
            layout.date,
            TextAttributes {
                font: date_font,
                alignment: TextAlignment::Left,
                text_color: FOREGROUND_COLOR,
                background_color: BACKGROUND_COLOR,
            },
        ))?;

        Ok(Self {
            layout,
            logo_layer,
            time_layer,
            separator_layer,
            date_layer,
            fonts: Fonts {
                time: time_font,
                date: date_font,
            },
            logo: None,
        })
    }

    /// Push new content into the existing elements.
    ///
    /// Time first, then the logo if a new one was selected, then the date.
    pub fn refresh<C: Compositor>(
        &mut self,
        compositor: &mut C,
        strings: &DisplayStrings,
        logo: Option<ImageId>,
    ) -> Result<(), Error> {
        compositor.set_text(self.time_layer, &strings.time)?;
        if let Some(image) = logo {
            self.show_logo(compositor, image)?;
        }
        compositor.set_text(self.date_layer, &strings.date)
    }

    /// Replace the logo image. The previous image is destroyed before the
    /// new one is created.
    pub fn show_logo<C: Compositor>(
        &mut self,
        compositor: &mut C,
        image: ImageId,
    ) -> Result<(), Error> {
        if let Some((_, previous)) = self.logo.take() {
            compositor.destroy_bitmap(previous);
        }
        let bitmap = compositor.create_bitmap(image)?;
        self.logo = Some((image, bitmap));
        compositor.set_bitmap(self.logo_layer, bitmap)
    }

    /// Release every resource taken by [`Screen::build`] and the current logo
    pub fn teardown<C: Compositor>(self, compositor: &mut C) {
        if let Some((_, bitmap)) = self.logo {
            compositor.destroy_bitmap(bitmap);
        }

        compositor.destroy_layer(self.time_layer);
        compositor.destroy_layer(self.date_layer);
        compositor.destroy_layer(self.logo_layer);
        compositor.destroy_layer(self.separator_layer);

        compositor.unload_font(self.fonts.time);
        compositor.unload_font(self.fonts.date);
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn fonts(&self) -> Fonts {
        self.fonts
    }

    /// Image currently shown, `None` before the first refresh
    pub fn logo(&self) -> Option<ImageId> {
        self.logo.map(|(image, _)| image)
    }

    /// Layers in stacking order, bottom first
    pub fn layers(&self) -> [LayerHandle; 4] {
        [
            self.logo_layer,
            self.time_layer,
            self.separator_layer,
            self.date_layer,
        ]
    }

    pub fn time_layer(&self) -> LayerHandle {
        self.time_layer
    }

    pub fn date_layer(&self) -> LayerHandle {
        self.date_layer
    }

    pub fn logo_layer(&self) -> LayerHandle {
        self.logo_layer
    }
}
