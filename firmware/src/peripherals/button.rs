//! Side button of the PineTime

use debouncr::{debounce_2, Debouncer, Edge, Repeat2};
use embassy_nrf::{
    gpio::{Input, Output},
    peripherals::{P0_13, P0_15},
};
use embassy_time::{Duration, Timer};

/// Debounced push button
pub struct Button {
    /// Button detection pin (high/low)
    pin: Input<'static, P0_13>,
    /// Button enable pin
    enable: Output<'static, P0_15>,
    debouncer: Debouncer<u8, Repeat2>,
}

impl Button {
    pub fn init(pin: Input<'static, P0_13>, enable: Output<'static, P0_15>) -> Self {
        Self {
            pin,
            enable,
            debouncer: debounce_2(false),
        }
    }

    /// Sample the button once. True on a debounced press.
    pub async fn pressed(&mut self) -> bool {
        self.enable.set_high();
        // The button needs a short time to give stable outputs
        Timer::after(Duration::from_nanos(1)).await;

        let edge = self.debouncer.update(self.pin.is_high());

        // Button consumes around 34µA when P0.15 is left high.
        // To reduce current consumption, set it low most of the time.
        self.enable.set_low();

        edge == Some(Edge::Rising)
    }
}
