//! Clock and date formatting

use chrono::{Datelike, Timelike};

use super::text::DisplayText;

/// Hour notation chosen by the user on the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockStyle {
    TwentyFourHour,
    TwelveHour,
}

impl ClockStyle {
    pub fn from_24h(is_24h: bool) -> Self {
        if is_24h {
            ClockStyle::TwentyFourHour
        } else {
            ClockStyle::TwelveHour
        }
    }
}

/// Strings shown on one refresh of the screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayStrings {
    pub time: DisplayText,
    pub date: DisplayText,
}

/// Format the time as `HH:MM`, or `hh:MM` in twelve hour style.
///
/// The twelve hour form carries no AM/PM marker.
pub fn format_time<T: Timelike>(now: &T, style: ClockStyle) -> DisplayText {
    let hour = match style {
        ClockStyle::TwentyFourHour => now.hour(),
        ClockStyle::TwelveHour => now.hour12().1,
    };
    DisplayText::from_fmt(format_args!("{:02}:{:02}", hour, now.minute()))
}

/// Format the date as abbreviated month and zero padded day, e.g. `Mar 07`
pub fn format_date<D: Datelike>(now: &D) -> DisplayText {
    DisplayText::from_fmt(format_args!(
        "{} {:02}",
        month_abbreviation(now.month0()),
        now.day()
    ))
}

fn month_abbreviation(month0: u32) -> &'static str {
    match month0 {
        0 => "Jan",
        1 => "Feb",
        2 => "Mar",
        3 => "Apr",
        4 => "May",
        5 => "Jun",
        6 => "Jul",
        7 => "Aug",
        8 => "Sep",
        9 => "Oct",
        10 => "Nov",
        // chrono never yields more than 11
        _ => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, month, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn afternoon_in_24h_style() {
        let now = at(3, 7, 14, 5);
        assert_eq!(format_time(&now, ClockStyle::TwentyFourHour).as_str(), "14:05");
    }

    #[test]
    fn afternoon_in_12h_style_has_no_marker() {
        let now = at(3, 7, 14, 5);
        let text = format_time(&now, ClockStyle::TwelveHour);
        assert_eq!(text.as_str(), "02:05");
        assert!(!text.contains("PM"));
        assert!(!text.is_truncated());
    }

    #[test]
    fn midnight_and_noon() {
        assert_eq!(format_time(&at(1, 1, 0, 0), ClockStyle::TwentyFourHour).as_str(), "00:00");
        assert_eq!(format_time(&at(1, 1, 0, 0), ClockStyle::TwelveHour).as_str(), "12:00");
        assert_eq!(format_time(&at(1, 1, 12, 30), ClockStyle::TwelveHour).as_str(), "12:30");
        assert_eq!(format_time(&at(1, 1, 23, 59), ClockStyle::TwelveHour).as_str(), "11:59");
    }

    #[test]
    fn date_is_month_and_padded_day() {
        assert_eq!(format_date(&at(3, 7, 14, 5)).as_str(), "Mar 07");
        assert_eq!(format_date(&at(12, 31, 0, 0)).as_str(), "Dec 31");
        assert_eq!(format_date(&at(1, 10, 0, 0)).as_str(), "Jan 10");
    }

    #[test]
    fn every_month_has_three_letters() {
        for month in 1..=12 {
            let text = format_date(&at(month, 1, 0, 0));
            assert_eq!(text.len(), 6);
            assert!(text.ends_with(" 01"));
        }
    }

    #[test]
    fn style_from_preference() {
        assert_eq!(ClockStyle::from_24h(true), ClockStyle::TwentyFourHour);
        assert_eq!(ClockStyle::from_24h(false), ClockStyle::TwelveHour);
    }
}
