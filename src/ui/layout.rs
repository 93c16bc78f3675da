//! Fixed screen layout
//!
//! All offsets are measured upwards from the bottom edge of the window.

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

/// Distance from the bottom edge to the top of the time block
pub const TIME_OFFSET: u32 = 58;
/// The separator sits one pixel above the time block
pub const SEPARATOR_OFFSET: u32 = TIME_OFFSET + 1;
/// Distance from the bottom edge to the top of the date block
pub const DATE_OFFSET: u32 = SEPARATOR_OFFSET + 27;

pub const TIME_HEIGHT: u32 = 48;
pub const DATE_HEIGHT: u32 = 24;

/// Left margin of the date and both side margins of the separator
pub const MARGIN: u32 = 10;
/// Share of the usable width given to the date block
pub const DATE_WIDTH_PERCENT: u32 = 75;

pub const LOGO_SIZE: u32 = 50;
pub const LOGO_TOP: u32 = 10;
/// Distance from the right edge to the left side of the logo
pub const LOGO_RIGHT_INSET: u32 = 60;

/// Frames of the four screen elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layout {
    pub logo: Rectangle,
    pub time: Rectangle,
    pub separator: Rectangle,
    pub date: Rectangle,
}

impl Layout {
    /// Lay the elements out inside a window of the given size
    pub fn compute(bounds: Size) -> Self {
        let Size { width, height } = bounds;
        let from_bottom = |offset: u32| height as i32 - offset as i32;

        Self {
            logo: Rectangle::new(
                Point::new(width.saturating_sub(LOGO_RIGHT_INSET) as i32, LOGO_TOP as i32),
                Size::new(LOGO_SIZE, LOGO_SIZE),
            ),
            time: Rectangle::new(
                Point::new(0, from_bottom(TIME_OFFSET)),
                Size::new(width, TIME_HEIGHT),
            ),
            separator: Rectangle::new(
                Point::new(MARGIN as i32, from_bottom(SEPARATOR_OFFSET)),
                Size::new(width.saturating_sub(2 * MARGIN), 1),
            ),
            date: Rectangle::new(
                Point::new(MARGIN as i32, from_bottom(DATE_OFFSET)),
                Size::new(
                    width.saturating_sub(MARGIN) * DATE_WIDTH_PERCENT / 100,
                    DATE_HEIGHT,
                ),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_chain() {
        assert_eq!(SEPARATOR_OFFSET, 59);
        assert_eq!(DATE_OFFSET, 86);
    }

    #[test]
    fn pebble_sized_window() {
        let layout = Layout::compute(Size::new(144, 168));
        assert_eq!(layout.logo, Rectangle::new(Point::new(84, 10), Size::new(50, 50)));
        assert_eq!(layout.time, Rectangle::new(Point::new(0, 110), Size::new(144, 48)));
        assert_eq!(layout.separator, Rectangle::new(Point::new(10, 109), Size::new(124, 1)));
        assert_eq!(layout.date, Rectangle::new(Point::new(10, 82), Size::new(100, 24)));
    }

    #[test]
    fn pinetime_window() {
        let layout = Layout::compute(Size::new(240, 240));
        assert_eq!(layout.logo.top_left, Point::new(180, 10));
        assert_eq!(layout.time.top_left, Point::new(0, 182));
        assert_eq!(layout.separator.size, Size::new(220, 1));
        assert_eq!(layout.date.size, Size::new(172, 24));
    }

    #[test]
    fn separator_sits_between_date_and_time() {
        let layout = Layout::compute(Size::new(240, 240));
        assert!(layout.date.top_left.y < layout.separator.top_left.y);
        assert!(layout.separator.top_left.y < layout.time.top_left.y);
    }

    #[test]
    fn tiny_window_saturates() {
        let layout = Layout::compute(Size::new(8, 8));
        assert_eq!(layout.logo.top_left.x, 0);
        assert_eq!(layout.separator.size.width, 0);
        assert_eq!(layout.date.size.width, 0);
    }
}
