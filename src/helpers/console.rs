//! # Simple logging helper for debugging and demos.
//!
//! [`ConsoleHelper`] prints one human-readable line per lifecycle call and
//! never fails. Primarily useful for development, debugging, and the
//! bundled demos.
//!
//! ## Output format
//! ```text
//! [start] cache=20240115103045_h1_orders
//! [publish] seq=0 level=INFO cache=20240115103045_h1_orders
//! [end] cache=20240115103045_h1_orders
//! ```

use async_trait::async_trait;

use super::PublishHelper;
use crate::context::PublishContext;
use crate::error::PublishError;
use crate::events::LogEvent;

/// Simple stdout helper.
///
/// Enabled via the `logging` feature. Not intended for production use -
/// implement a custom [`PublishHelper`] for real destinations.
pub struct ConsoleHelper;

#[async_trait]
impl PublishHelper for ConsoleHelper {
    async fn start(&self, context: &PublishContext) -> Result<(), PublishError> {
        println!("[start] cache={}", context.cache_name());
        Ok(())
    }

    async fn publish(
        &self,
        context: &PublishContext,
        sequence: u64,
        event: &LogEvent,
    ) -> Result<(), PublishError> {
        println!(
            "[publish] seq={sequence} level={} cache={}",
            event.level.as_str(),
            context.cache_name()
        );
        Ok(())
    }

    async fn end(&self, context: &PublishContext) -> Result<(), PublishError> {
        println!("[end] cache={}", context.cache_name());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "console"
    }
}
