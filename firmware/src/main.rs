#![no_std]
#![no_main]

mod peripherals;
mod system;

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::{
    bind_interrupts,
    gpio::{Input, Level, Output, OutputDrive, Pull},
    peripherals::SPI2,
    spim,
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use embassy_time::{Delay, Duration, Instant, Ticker, Timer};
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use peripherals::{backlight::Backlight, button::Button, display::Display};
use system::{
    config::{SystemConfig, BACKLIGHT_LEVEL, TIMEZONE},
    host::{toggle_clock_style, WatchHost},
    time::{TimeManager, TimeReference},
};

// Others
use brewface::{Host, TimeUnit, Watchface, WindowHandlers, LOGOS};
use chrono::Timelike;

// Include current UTC epoch at compile time
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

static BACKLIGHT: StaticCell<Backlight<'static>> = StaticCell::new();

// Shared data
static REFRESH: Signal<ThreadModeRawMutex, ()> = Signal::new();

/// Polls the button state every 10ms
#[embassy_executor::task(pool_size = 1)]
async fn poll_button(mut button: Button) {
    loop {
        if button.pressed().await {
            let is_24h = toggle_clock_style();
            defmt::info!("24h style: {}", is_24h);
            REFRESH.signal(());
        }

        // Re-schedule the timer interrupt in 10ms
        Timer::after(Duration::from_millis(10)).await;
    }
}

/// Drive the watchface: load once, then one tick per minute boundary.
/// A button press redraws right away, without counting a tick.
#[embassy_executor::task(pool_size = 1)]
async fn run_watchface(mut display: Display<'static, SPI2>, time: TimeManager) {
    let seed = UTC_TIME as u64 ^ Instant::now().as_ticks();
    let mut watchface = Watchface::start_seeded(LOGOS, seed);
    let mut host = WatchHost::new(time);

    unwrap!(watchface.on_load(&mut host, display.bounds()));
    display.render(host.scene());

    let mut last = host.local_time();
    let mut tick = Ticker::every(Duration::from_secs(1));
    loop {
        // Wake on the next second or on a button press
        match select(tick.next(), REFRESH.wait()).await {
            Either::First(()) => {}
            Either::Second(()) => {
                unwrap!(watchface.redraw(&mut host));
                display.render(host.scene());
                continue;
            }
        }

        let now = host.local_time();
        let due = match host.subscription() {
            Some(TimeUnit::Second) => now.second() != last.second(),
            Some(TimeUnit::Minute) => now.minute() != last.minute(),
            None => false,
        };
        last = now;

        if due {
            defmt::debug!("Tick at {}:{}", now.hour(), now.minute());
            unwrap!(watchface.on_tick(&mut host, &now));
            display.render(host.scene());
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(SystemConfig::new());
    defmt::info!("Initializing");

    // Initialize Backlight
    let backlight = BACKLIGHT.init(Backlight::init(
        Output::new(p.P0_14, Level::High, OutputDrive::Standard),
        Output::new(p.P0_22, Level::High, OutputDrive::Standard),
        Output::new(p.P0_23, Level::High, OutputDrive::Standard),
    ));

    // Initialize Button
    let button = Button::init(
        Input::new(p.P0_13, Pull::None),
        Output::new(p.P0_15, Level::Low, OutputDrive::Standard),
    );

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let display = unwrap!(Display::init(
        spim,
        Output::new(p.P0_25, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_18, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26, Level::Low, OutputDrive::Standard),
        &mut Delay,
    ));
    unwrap!(backlight.set(BACKLIGHT_LEVEL));

    // Start the wall clock from the build time
    let time = TimeManager::init(TimeReference::from_epoch(UTC_TIME, TIMEZONE));

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(spawner.spawn(poll_button(button)));
    unwrap!(spawner.spawn(run_watchface(display, time)));
}
