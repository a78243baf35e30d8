//! Error types surfaced during a publish cycle.
//!
//! A single enum, [`PublishError`], covers every failure a cycle can raise:
//! a destination rejecting content, a layout failing to render an event, or
//! an underlying I/O error. Helpers and layouts construct these; the
//! publisher never catches, wraps, or translates: the first failure of a
//! phase propagates unchanged to the caller and the remaining helpers are
//! skipped.

use thiserror::Error;

/// # Errors produced by publish helpers and layouts.
///
/// The publisher itself adds no context to these: whatever the first
/// failing collaborator returns is what the caller of the phase sees.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum PublishError {
    /// A destination rejected or failed to accept content.
    #[error("destination failure: {error}")]
    Destination {
        /// The underlying error message.
        error: String,
    },

    /// An event could not be rendered by the layout.
    #[error("render failure: {error}")]
    Render {
        /// The underlying error message.
        error: String,
    },

    /// An underlying I/O operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PublishError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use logfan::PublishError;
    ///
    /// let err = PublishError::Destination { error: "bucket gone".into() };
    /// assert_eq!(err.as_label(), "publish_destination");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            PublishError::Destination { .. } => "publish_destination",
            PublishError::Render { .. } => "publish_render",
            PublishError::Io(_) => "publish_io",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            PublishError::Destination { error } => format!("destination: {error}"),
            PublishError::Render { error } => format!("render: {error}"),
            PublishError::Io(err) => format!("io: {err}"),
        }
    }
}
