//! # Notice lines and the sink capability.
//!
//! [`Notice`] enumerates the three informational lines of a publish cycle.
//! `Display` produces the exact line format:
//! ```text
//! BEGIN publishing to 20240115103045_h1_orders...
//! 7:INFO flush: cache flushed
//! END publishing to 20240115103045_h1_orders
//! ```

use std::fmt;
use std::sync::Arc;

/// One informational line in a publish cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// A cycle began for the named cache.
    ///
    /// Sets:
    /// - `cache_name`: the namespaced cache name
    CycleStarted {
        /// Namespaced cache name.
        cache_name: Arc<str>,
    },

    /// One record was accepted by every registered helper.
    ///
    /// Sets:
    /// - `sequence`: caller-supplied sequence number
    /// - `rendered`: the record as rendered by the publisher's layout
    RecordPublished {
        /// Caller-supplied sequence number.
        sequence: u64,
        /// The record as rendered by the publisher's layout.
        rendered: String,
    },

    /// A cycle ended for the named cache.
    ///
    /// Sets:
    /// - `cache_name`: the namespaced cache name
    CycleEnded {
        /// Namespaced cache name.
        cache_name: Arc<str>,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::CycleStarted { cache_name } => {
                write!(f, "BEGIN publishing to {cache_name}...")
            }
            Notice::RecordPublished { sequence, rendered } => {
                write!(f, "{sequence}:{rendered}")
            }
            Notice::CycleEnded { cache_name } => {
                write!(f, "END publishing to {cache_name}")
            }
        }
    }
}

/// Receives the informational notices of a publish cycle.
///
/// Inject a custom sink to capture output deterministically; the default
/// sink is [`StdoutNotices`](crate::StdoutNotices).
pub trait NoticeSink: Send + Sync {
    /// Accepts one notice.
    fn emit(&self, notice: &Notice);
}
