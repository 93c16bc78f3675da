//! Bounded display text

use core::{fmt, ops::Deref};

use heapless::String;

/// Maximum length of a formatted display string, in bytes
pub const DISPLAY_TEXT_CAPACITY: usize = 8;

/// Short text buffer for the clock and date labels
///
/// Holds at most [`DISPLAY_TEXT_CAPACITY`] bytes. Writes past the capacity
/// are dropped without error, one whole character at a time, so the buffer
/// keeps the longest prefix that fits.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DisplayText {
    buf: String<DISPLAY_TEXT_CAPACITY>,
    truncated: bool,
}

impl DisplayText {
    pub const fn new() -> Self {
        Self {
            buf: String::new(),
            truncated: false,
        }
    }

    /// Format `args` into a new buffer, truncating as needed
    pub fn from_fmt(args: fmt::Arguments<'_>) -> Self {
        let mut text = Self::new();
        // Never fails, overflow is truncated
        let _ = fmt::Write::write_fmt(&mut text, args);
        text
    }

    pub fn as_str(&self) -> &str {
        self.buf.as_str()
    }

    /// Whether any output was dropped
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn clear(&mut self) {
        self.buf.clear();
        self.truncated = false;
    }
}

impl fmt::Write for DisplayText {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        for c in s.chars() {
            if self.buf.push(c).is_err() {
                self.truncated = true;
                break;
            }
        }
        Ok(())
    }
}

impl Deref for DisplayText {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DisplayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for DisplayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayText {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_kept_whole() {
        let text = DisplayText::from_fmt(format_args!("{:02}:{:02}", 9, 5));
        assert_eq!(text.as_str(), "09:05");
        assert!(!text.is_truncated());
    }

    #[test]
    fn long_text_keeps_prefix() {
        let text = DisplayText::from_fmt(format_args!("{}:{} {}", "02", "05", "PM"));
        assert_eq!(text.as_str(), "02:05 PM");
        let text = DisplayText::from_fmt(format_args!("{} {}", "Wednesday", 7));
        assert_eq!(text.as_str(), "Wednesda");
        assert!(text.is_truncated());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 'ä' is two bytes, the third one would land on byte 8
        let text = DisplayText::from_fmt(format_args!("abcdefgä"));
        assert_eq!(text.as_str(), "abcdefg");
        assert!(text.is_truncated());
    }

    #[test]
    fn clear_resets_truncation() {
        let mut text = DisplayText::from_fmt(format_args!("0123456789"));
        text.clear();
        assert!(text.is_empty());
        assert!(!text.is_truncated());
    }
}
