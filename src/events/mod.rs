//! # Log records and severity levels.

mod event;

pub use event::{Level, LogEvent};
