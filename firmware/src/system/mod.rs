pub(crate) mod config;
pub(crate) mod host;
pub(crate) mod time;
