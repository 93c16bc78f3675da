//! Error type shared by the watchface components

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The host has no room left for another font, bitmap or layer
    ResourceExhausted,
    /// A handle that was never issued or has already been released
    UnknownHandle,
    /// A window callback arrived before the watchface was started
    NotStarted,
    /// The window was loaded a second time without an unload
    AlreadyLoaded,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ResourceExhausted => f.write_str("host resources exhausted"),
            Error::UnknownHandle => f.write_str("unknown or released handle"),
            Error::NotStarted => f.write_str("watchface not started"),
            Error::AlreadyLoaded => f.write_str("window already loaded"),
        }
    }
}
