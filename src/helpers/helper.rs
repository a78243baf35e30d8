//! # Publish helper capability.
//!
//! [`PublishHelper`] is the extension point for destination adapters: each
//! helper is told when a cycle starts, receives every buffered record in
//! sequence, and is told when the cycle ends.
//!
//! ## Protocol
//! ```text
//! Publisher::start_publish ──► helper.start(ctx)          (each helper, in order)
//! Publisher::publish       ──► helper.publish(ctx, n, ev) (each helper, in order)
//! Publisher::end_publish   ──► helper.end(ctx)            (each helper, in order)
//! ```
//!
//! ## Rules
//! - Helpers run strictly in registration order, one at a time.
//! - The first error aborts the phase; later helpers are not invoked.
//! - The context is shared and immutable for the whole cycle.
//!
//! ## Example
//! ```rust
//! use std::sync::atomic::{AtomicU64, Ordering};
//!
//! use async_trait::async_trait;
//! use logfan::{LogEvent, PublishContext, PublishError, PublishHelper};
//!
//! struct Counter(AtomicU64);
//!
//! #[async_trait]
//! impl PublishHelper for Counter {
//!     async fn start(&self, _ctx: &PublishContext) -> Result<(), PublishError> {
//!         Ok(())
//!     }
//!
//!     async fn publish(
//!         &self,
//!         _ctx: &PublishContext,
//!         _sequence: u64,
//!         _event: &LogEvent,
//!     ) -> Result<(), PublishError> {
//!         self.0.fetch_add(1, Ordering::Relaxed);
//!         Ok(())
//!     }
//!
//!     async fn end(&self, _ctx: &PublishContext) -> Result<(), PublishError> {
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &'static str { "counter" }
//! }
//! ```

use async_trait::async_trait;

use crate::context::PublishContext;
use crate::error::PublishError;
use crate::events::LogEvent;

/// Destination adapter notified across the three-phase publish protocol.
///
/// ### Implementation requirements
/// - Finish each call before returning; the publisher awaits helpers one at
///   a time and the next helper does not run until this one completes.
/// - Return an error to abort the phase; do not panic.
#[async_trait]
pub trait PublishHelper: Send + Sync + 'static {
    /// Called once at the start of a cycle.
    async fn start(&self, context: &PublishContext) -> Result<(), PublishError>;

    /// Called once per buffered record, in the caller's sequence order.
    ///
    /// `sequence` is supplied by the caller driving the cycle; the
    /// publisher passes it through unvalidated.
    async fn publish(
        &self,
        context: &PublishContext,
        sequence: u64,
        event: &LogEvent,
    ) -> Result<(), PublishError>;

    /// Called once at the end of a cycle.
    async fn end(&self, context: &PublishContext) -> Result<(), PublishError>;

    /// Returns the helper name used in logs.
    ///
    /// Prefer short, descriptive names (e.g., "file", "s3", "console").
    /// The default uses `type_name::<Self>()`, which can be verbose -
    /// override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
