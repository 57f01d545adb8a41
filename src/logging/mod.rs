//! Logging for Color Catcher
//!
//! Bracketed event formatting, written to stdout and to a timestamped file
//! under `logs/`.

mod formatter;
mod setup;

pub use setup::setup_logging;
