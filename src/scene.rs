//! Retained layer scene
//!
//! A fixed-capacity [`Compositor`] that keeps the window's layer tree in
//! memory and draws it onto any `embedded-graphics` target. The firmware
//! renders it to the LCD, the simulator inspects it.
//!
//! Handles carry a generation byte next to the slot index, so a handle
//! that was released can never reach a slot that has been reused since.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle, RoundedRectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use heapless::Vec;
use profont::{PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_24_POINT};

use crate::{
    error::Error,
    platform::{BitmapHandle, Compositor, FontHandle, LayerHandle, TextAlignment, TextAttributes},
    resources::{FontId, ImageId},
    ui::{DisplayText, BACKGROUND_COLOR, FOREGROUND_COLOR},
};

pub const MAX_FONTS: usize = 4;
pub const MAX_BITMAPS: usize = 4;
pub const MAX_LAYERS: usize = 8;

const INDEX_MASK: u16 = 0x00ff;
const GENERATION_SHIFT: u16 = 8;

/// Slots addressed by generation-checked raw handles
struct Pool<T, const N: usize> {
    slots: [Option<T>; N],
    generations: [u8; N],
}

impl<T, const N: usize> Pool<T, N> {
    fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
            generations: [0; N],
        }
    }

    fn split(raw: u16) -> (usize, u8) {
        ((raw & INDEX_MASK) as usize, (raw >> GENERATION_SHIFT) as u8)
    }

    fn insert(&mut self, value: T) -> Result<u16, Error> {
        let index = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(Error::ResourceExhausted)?;
        self.slots[index] = Some(value);
        Ok(((self.generations[index] as u16) << GENERATION_SHIFT) | index as u16)
    }

    fn live_index(&self, raw: u16) -> Option<usize> {
        let (index, generation) = Self::split(raw);
        match self.generations.get(index) {
            Some(g) if *g == generation && self.slots[index].is_some() => Some(index),
            _ => None,
        }
    }

    fn get(&self, raw: u16) -> Option<&T> {
        let index = self.live_index(raw)?;
        self.slots[index].as_ref()
    }

    fn get_mut(&mut self, raw: u16) -> Option<&mut T> {
        let index = self.live_index(raw)?;
        self.slots[index].as_mut()
    }

    fn remove(&mut self, raw: u16) -> Option<T> {
        let index = self.live_index(raw)?;
        self.generations[index] = self.generations[index].wrapping_add(1);
        self.slots[index].take()
    }

    fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

enum Content {
    Bitmap(Option<BitmapHandle>),
    Text {
        attributes: TextAttributes,
        text: DisplayText,
    },
    Line(Rgb565),
}

struct Layer {
    frame: Rectangle,
    content: Content,
}

/// In-memory window contents
pub struct Scene {
    fonts: Pool<FontId, MAX_FONTS>,
    bitmaps: Pool<ImageId, MAX_BITMAPS>,
    layers: Pool<Layer, MAX_LAYERS>,
    /// Layers bottom to top
    order: Vec<LayerHandle, MAX_LAYERS>,
    background: Rgb565,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            fonts: Pool::new(),
            bitmaps: Pool::new(),
            layers: Pool::new(),
            order: Vec::new(),
            background: BACKGROUND_COLOR,
        }
    }

    fn add_layer(&mut self, frame: Rectangle, content: Content) -> Result<LayerHandle, Error> {
        let layer = LayerHandle::from_raw(self.layers.insert(Layer { frame, content })?);
        if self.order.push(layer).is_err() {
            self.layers.remove(layer.raw());
            return Err(Error::ResourceExhausted);
        }
        Ok(layer)
    }

    /// Text shown by a text layer
    pub fn text(&self, layer: LayerHandle) -> Option<&str> {
        match &self.layers.get(layer.raw())?.content {
            Content::Text { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }

    /// Image shown by a bitmap layer, if its bitmap is still alive
    pub fn bitmap(&self, layer: LayerHandle) -> Option<ImageId> {
        match self.layers.get(layer.raw())?.content {
            Content::Bitmap(Some(bitmap)) => self.bitmaps.get(bitmap.raw()).copied(),
            _ => None,
        }
    }

    pub fn frame(&self, layer: LayerHandle) -> Option<Rectangle> {
        self.layers.get(layer.raw()).map(|layer| layer.frame)
    }

    /// Layers in stacking order, bottom first
    pub fn stacking_order(&self) -> &[LayerHandle] {
        &self.order
    }

    pub fn live_fonts(&self) -> usize {
        self.fonts.len()
    }

    pub fn live_bitmaps(&self) -> usize {
        self.bitmaps.len()
    }

    pub fn live_layers(&self) -> usize {
        self.layers.len()
    }

    /// Whether every resource handed out has been released
    pub fn is_empty(&self) -> bool {
        self.live_fonts() == 0 && self.live_bitmaps() == 0 && self.live_layers() == 0
    }

    /// Draw the whole window, bottom layer first
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        target.clear(self.background)?;
        for handle in &self.order {
            if let Some(layer) = self.layers.get(handle.raw()) {
                self.draw_layer(layer, target)?;
            }
        }
        Ok(())
    }

    fn draw_layer<D>(&self, layer: &Layer, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let frame = layer.frame;
        match &layer.content {
            Content::Bitmap(bitmap) => {
                let image = bitmap.and_then(|bitmap| self.bitmaps.get(bitmap.raw()));
                if let Some(image) = image {
                    draw_badge(*image, frame, &mut target.clipped(&frame))?;
                }
            }
            Content::Text { attributes, text } => {
                let mut target = target.clipped(&frame);
                frame
                    .into_styled(PrimitiveStyle::with_fill(attributes.background_color))
                    .draw(&mut target)?;

                // An unloaded font leaves the layer blank
                if let Some(font) = self.fonts.get(attributes.font.raw()) {
                    let character_style = MonoTextStyle::new(mono_font(*font), attributes.text_color);
                    let (position, alignment) = match attributes.alignment {
                        TextAlignment::Left => (frame.top_left, Alignment::Left),
                        TextAlignment::Center => (
                            frame.top_left + Point::new(frame.size.width as i32 / 2, 0),
                            Alignment::Center,
                        ),
                    };
                    let text_style = TextStyleBuilder::new()
                        .alignment(alignment)
                        .baseline(Baseline::Top)
                        .build();
                    Text::with_text_style(text, position, character_style, text_style)
                        .draw(&mut target)?;
                }
            }
            Content::Line(color) => {
                if frame.size.width > 0 {
                    let start = frame.top_left;
                    let end = start + Point::new(frame.size.width as i32 - 1, 0);
                    Line::new(start, end)
                        .into_styled(PrimitiveStyle::with_stroke(*color, 1))
                        .draw(target)?;
                }
            }
        }
        Ok(())
    }
}

/// ProFont faces standing in for the packaged Roboto fonts
fn mono_font(font: FontId) -> &'static MonoFont<'static> {
    match font {
        FontId::RobotoRegular48 => &PROFONT_24_POINT,
        FontId::RobotoRegular24 => &PROFONT_14_POINT,
    }
}

/// Logos are drawn as a rounded badge carrying the brewery's initials
fn draw_badge<D>(image: ImageId, frame: Rectangle, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(frame, Size::new(10, 10))
        .into_styled(PrimitiveStyle::with_stroke(FOREGROUND_COLOR, 2))
        .draw(target)?;

    let character_style = MonoTextStyle::new(&PROFONT_12_POINT, FOREGROUND_COLOR);
    let text_style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();
    Text::with_text_style(image.label(), frame.center(), character_style, text_style)
        .draw(target)?;
    Ok(())
}

impl Compositor for Scene {
    fn load_font(&mut self, font: FontId) -> Result<FontHandle, Error> {
        Ok(FontHandle::from_raw(self.fonts.insert(font)?))
    }

    fn unload_font(&mut self, font: FontHandle) {
        if self.fonts.remove(font.raw()).is_none() {
            defmt_or_log::warn!("Unloading unknown font {}", font.raw());
        }
    }

    fn create_bitmap(&mut self, image: ImageId) -> Result<BitmapHandle, Error> {
        Ok(BitmapHandle::from_raw(self.bitmaps.insert(image)?))
    }

    fn destroy_bitmap(&mut self, bitmap: BitmapHandle) {
        if self.bitmaps.remove(bitmap.raw()).is_none() {
            defmt_or_log::warn!("Destroying unknown bitmap {}", bitmap.raw());
        }
    }

    fn create_bitmap_layer(&mut self, frame: Rectangle) -> Result<LayerHandle, Error> {
        self.add_layer(frame, Content::Bitmap(None))
    }

    fn create_text_layer(
        &mut self,
        frame: Rectangle,
        attributes: TextAttributes,
    ) -> Result<LayerHandle, Error> {
        self.add_layer(
            frame,
            Content::Text {
                attributes,
                text: DisplayText::new(),
            },
        )
    }

    fn create_line_layer(
        &mut self,
        frame: Rectangle,
        color: Rgb565,
    ) -> Result<LayerHandle, Error> {
        self.add_layer(frame, Content::Line(color))
    }

    fn destroy_layer(&mut self, layer: LayerHandle) {
        if self.layers.remove(layer.raw()).is_none() {
            defmt_or_log::warn!("Destroying unknown layer {}", layer.raw());
            return;
        }
        self.order.retain(|handle| *handle != layer);
    }

    fn set_text(&mut self, layer: LayerHandle, text: &str) -> Result<(), Error> {
        match self.layers.get_mut(layer.raw()) {
            Some(Layer {
                content: Content::Text { text: current, .. },
                ..
            }) => {
                *current = DisplayText::from_fmt(format_args!("{}", text));
                Ok(())
            }
            _ => Err(Error::UnknownHandle),
        }
    }

    fn set_bitmap(&mut self, layer: LayerHandle, bitmap: BitmapHandle) -> Result<(), Error> {
        if self.bitmaps.get(bitmap.raw()).is_none() {
            return Err(Error::UnknownHandle);
        }
        match self.layers.get_mut(layer.raw()) {
            Some(Layer {
                content: Content::Bitmap(current),
                ..
            }) => {
                *current = Some(bitmap);
                Ok(())
            }
            _ => Err(Error::UnknownHandle),
        }
    }
}
