//! Display control module for PineTime

use brewface::Scene;
use display_interface_spi::SPIInterface;
use embassy_nrf::{
    gpio::Output,
    peripherals::{P0_18, P0_25, P0_26},
    spim::{self, Spim},
};
use embassy_time::Delay;
use embedded_graphics::geometry::Size;
use mipidsi::{models::ST7789, Builder, Orientation};

const LCD_W: u16 = 240;
const LCD_H: u16 = 240;

type Lcd<'a, SPI> = mipidsi::Display<
    SPIInterface<Spim<'a, SPI>, Output<'a, P0_18>, Output<'a, P0_25>>,
    ST7789,
    Output<'a, P0_26>,
>;

/// ST7789 LCD
pub struct Display<'a, SPI>
where
    SPI: spim::Instance,
{
    lcd: Lcd<'a, SPI>,
}

impl<'a, SPI> Display<'a, SPI>
where
    SPI: spim::Instance,
{
    /// Initialize the display
    pub fn init(
        spim: Spim<'a, SPI>,
        cs: Output<'a, P0_25>,
        dc: Output<'a, P0_18>,
        rst: Output<'a, P0_26>,
        delay: &mut Delay,
    ) -> Result<Self, Error> {
        let lcd = Builder::st7789(SPIInterface::new(spim, dc, cs))
            .with_display_size(LCD_W, LCD_H)
            .with_orientation(Orientation::Portrait(false))
            .init(delay, Some(rst))
            .map_err(|_| Error::Init)?;

        Ok(Self { lcd })
    }

    /// Size of the visible area
    pub fn bounds(&self) -> Size {
        Size::new(LCD_W as u32, LCD_H as u32)
    }

    /// Draw the whole scene to the panel
    pub fn render(&mut self, scene: &Scene) {
        if scene.draw(&mut self.lcd).is_err() {
            defmt::warn!("Failed to draw scene");
        }
    }
}

#[derive(Debug, defmt::Format)]
pub enum Error {
    Init,
}
