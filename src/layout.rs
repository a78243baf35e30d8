//! # Event rendering.
//!
//! A [`Layout`] turns one [`LogEvent`] into display text. The publisher
//! renders every published record exactly once for its record notice; the
//! per-cycle context also carries the layout so helpers can render records
//! for their own destinations.

use chrono::{DateTime, Local};

use crate::error::PublishError;
use crate::events::LogEvent;

/// Renders one log record to display text.
pub trait Layout: Send + Sync {
    /// Renders `event` to a single display string.
    ///
    /// A failure here propagates unchanged out of the phase that triggered
    /// the rendering.
    fn format(&self, event: &LogEvent) -> Result<String, PublishError>;
}

/// Single-line layout: `LEVEL target: message`, with an optional
/// `YYYY-MM-DD HH:MM:SS` timestamp prefix.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineLayout {
    /// Prefix each line with the record timestamp.
    pub stamped: bool,
}

impl Layout for LineLayout {
    fn format(&self, event: &LogEvent) -> Result<String, PublishError> {
        let mut line = String::new();
        if self.stamped {
            let at: DateTime<Local> = event.at.into();
            line.push_str(&at.format("%Y-%m-%d %H:%M:%S ").to_string());
        }
        line.push_str(event.level.as_str());
        if let Some(target) = event.target.as_deref() {
            line.push(' ');
            line.push_str(target);
        }
        line.push_str(": ");
        line.push_str(&event.message);
        Ok(line)
    }
}
