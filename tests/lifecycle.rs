use brewface::{
    sim::Simulator,
    ui::ROTATION_PERIOD,
    Phase, TimeUnit, Watchface, LOGOS,
};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use embedded_graphics::geometry::Size;

const BOUNDS: Size = Size::new(240, 240);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn at(hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 7)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

#[test]
fn session_leaves_no_resources_behind() {
    init_logging();
    let mut sim = Simulator::new(BOUNDS, at(9, 0));
    let mut watchface = Watchface::start_seeded(LOGOS, 42);

    sim.run(&mut watchface, 0).unwrap();
    assert!(sim.scene().is_empty());

    let mut sim = Simulator::new(BOUNDS, at(9, 0));
    let mut watchface = Watchface::start_seeded(LOGOS, 42);
    sim.run(&mut watchface, 24 * 60).unwrap();
    assert_eq!(sim.delivered_ticks(), 24 * 60);
    assert!(sim.scene().is_empty());
    assert_eq!(watchface.phase(), Phase::Terminated);
}

#[test]
fn logo_rotates_every_period_from_load() {
    init_logging();
    let mut sim = Simulator::new(BOUNDS, at(9, 0));
    let mut watchface = Watchface::start_seeded(LOGOS, 5);

    // Loading counts as tick 0
    sim.load(&mut watchface).unwrap();
    assert_eq!(watchface.rotator().unwrap().counter(), 0);

    let mut now = at(9, 0);
    for n in 1..=120u32 {
        let before = watchface.screen().unwrap().logo();
        now += Duration::minutes(1);
        assert!(sim.tick(&mut watchface, now).unwrap());

        let rotated = watchface.rotator().unwrap().counter() == 0;
        assert_eq!(rotated, n % ROTATION_PERIOD as u32 == 0, "tick {}", n);
        if !rotated {
            assert_eq!(watchface.screen().unwrap().logo(), before, "tick {}", n);
        }
        // Exactly one image alive at any time
        assert_eq!(sim.scene().live_bitmaps(), 1);
    }

    sim.unload(&mut watchface);
    assert!(sim.scene().is_empty());
}

#[test]
fn ticks_update_time_and_date() {
    init_logging();
    let mut sim = Simulator::new(BOUNDS, at(23, 58));
    let mut watchface = Watchface::start_seeded(LOGOS, 6);
    sim.load(&mut watchface).unwrap();

    let (time_layer, date_layer) = {
        let screen = watchface.screen().unwrap();
        (screen.time_layer(), screen.date_layer())
    };
    assert_eq!(sim.scene().text(time_layer), Some("23:58"));

    sim.tick(&mut watchface, at(23, 59)).unwrap();
    assert_eq!(sim.scene().text(time_layer), Some("23:59"));
    assert_eq!(sim.scene().text(date_layer), Some("Mar 07"));

    let midnight = at(23, 59) + Duration::minutes(1);
    sim.tick(&mut watchface, midnight).unwrap();
    assert_eq!(sim.scene().text(time_layer), Some("00:00"));
    assert_eq!(sim.scene().text(date_layer), Some("Mar 08"));
}

#[test]
fn clock_preference_is_read_on_every_tick() {
    init_logging();
    let mut sim = Simulator::new(BOUNDS, at(14, 5));
    let mut watchface = Watchface::start_seeded(LOGOS, 7);
    sim.load(&mut watchface).unwrap();
    let time_layer = watchface.screen().unwrap().time_layer();
    assert_eq!(sim.scene().text(time_layer), Some("14:05"));

    sim.set_24h_style(false);
    sim.tick(&mut watchface, at(14, 6)).unwrap();
    assert_eq!(sim.scene().text(time_layer), Some("02:06"));

    sim.set_24h_style(true);
    sim.tick(&mut watchface, at(14, 7)).unwrap();
    assert_eq!(sim.scene().text(time_layer), Some("14:07"));
}

#[test]
fn no_tick_is_delivered_after_unload() {
    init_logging();
    let mut sim = Simulator::new(BOUNDS, at(9, 0));
    let mut watchface = Watchface::start_seeded(LOGOS, 8);
    sim.load(&mut watchface).unwrap();
    sim.tick(&mut watchface, at(9, 1)).unwrap();
    assert_eq!(sim.subscription(), Some(TimeUnit::Minute));

    sim.unload(&mut watchface);
    assert_eq!(sim.subscription(), None);

    assert!(!sim.tick(&mut watchface, at(9, 2)).unwrap());
    assert_eq!(sim.delivered_ticks(), 1);
    assert_eq!(sim.dropped_ticks(), 1);
    assert!(sim.scene().is_empty());
}

#[test]
fn ticks_before_load_are_not_delivered() {
    init_logging();
    let mut sim = Simulator::new(BOUNDS, at(9, 0));
    let mut watchface = Watchface::start_seeded(LOGOS, 9);

    assert!(!sim.tick(&mut watchface, at(9, 1)).unwrap());
    sim.load(&mut watchface).unwrap();
    assert!(sim.tick(&mut watchface, at(9, 2)).unwrap());
}

#[test]
fn independent_screens_do_not_interfere() {
    init_logging();
    let mut small = Simulator::new(Size::new(144, 168), at(9, 0));
    let mut large = Simulator::new(BOUNDS, at(21, 30));
    let mut first = Watchface::start_seeded(LOGOS, 10);
    let mut second = Watchface::start_seeded(LOGOS, 11);

    small.load(&mut first).unwrap();
    large.load(&mut second).unwrap();

    let first_time = first.screen().unwrap().time_layer();
    let second_time = second.screen().unwrap().time_layer();
    assert_eq!(small.scene().text(first_time), Some("09:00"));
    assert_eq!(large.scene().text(second_time), Some("21:30"));
    assert_ne!(
        small.scene().frame(first_time),
        large.scene().frame(second_time)
    );

    small.unload(&mut first);
    assert!(small.scene().is_empty());
    assert_eq!(large.scene().live_layers(), 4);
    large.unload(&mut second);
}
