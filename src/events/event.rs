//! # Log records consumed by a publish cycle.
//!
//! [`LogEvent`] is the minimal record the publisher hands to helpers and
//! renders through the layout: a timestamp, a severity [`Level`], an
//! optional target (the logger or subsystem that produced it), and the
//! message text. The publisher reads events; it never mutates or keeps
//! them.
//!
//! ## Example
//! ```rust
//! use logfan::{Level, LogEvent};
//!
//! let ev = LogEvent::new(Level::Warn, "disk usage at 91%").with_target("sys.disk");
//!
//! assert_eq!(ev.level, Level::Warn);
//! assert_eq!(ev.target.as_deref(), Some("sys.disk"));
//! assert_eq!(&*ev.message, "disk usage at 91%");
//! ```

use std::sync::Arc;
use std::time::SystemTime;

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Returns the conventional uppercase label for rendering.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

/// One log record with optional metadata.
#[derive(Clone, Debug)]
pub struct LogEvent {
    /// Wall-clock timestamp of the record.
    pub at: SystemTime,
    /// Severity level.
    pub level: Level,
    /// Logger name or subsystem that produced the record, if any.
    pub target: Option<Arc<str>>,
    /// Message text.
    pub message: Arc<str>,
}

impl LogEvent {
    /// Creates a record with the current timestamp and no target.
    pub fn new(level: Level, message: impl Into<Arc<str>>) -> Self {
        Self {
            at: SystemTime::now(),
            level,
            target: None,
            message: message.into(),
        }
    }

    /// Attaches a target (logger name).
    #[inline]
    pub fn with_target(mut self, target: impl Into<Arc<str>>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Overrides the record timestamp.
    #[inline]
    pub fn with_timestamp(mut self, at: SystemTime) -> Self {
        self.at = at;
        self
    }
}
