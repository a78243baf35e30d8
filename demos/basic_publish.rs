//! # Example: basic_publish
//!
//! Walks one full publish cycle with the built-in console helper.
//!
//! Shows how to:
//! - Configure a [`Publisher`] with a host identifier and tags.
//! - Register a helper and drain a small batch through the three phases.
//!
//! ## Flow
//! ```text
//! start_publish("orders")
//!     ├─► BEGIN publishing to <stamp>_demo-host_orders...
//!     └─► ConsoleHelper.start(ctx)
//! publish(ctx, n, event)                    (once per buffered record)
//!     ├─► ConsoleHelper.publish(ctx, n, event)
//!     └─► <n>:<rendered record>
//! end_publish(ctx)
//!     ├─► ConsoleHelper.end(ctx)
//!     └─► END publishing to <stamp>_demo-host_orders
//! ```
//!
//! ## Run
//! Requires the `logging` feature to export [`ConsoleHelper`].
//! ```bash
//! cargo run --example basic_publish --features logging
//! ```

use std::sync::Arc;

use logfan::{ConsoleHelper, Level, LineLayout, LogEvent, Publisher, PublisherConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cfg = PublisherConfig {
        host: "demo-host".into(),
        tags: vec!["demo".into()],
    };

    let mut publisher = Publisher::new(cfg, Arc::new(LineLayout::default()));
    publisher.add_helper(Arc::new(ConsoleHelper));

    let batch = [
        LogEvent::new(Level::Info, "cache primed").with_target("flush"),
        LogEvent::new(Level::Warn, "eviction threshold at 80%").with_target("flush"),
        LogEvent::new(Level::Info, "cache flushed").with_target("flush"),
    ];

    let ctx = publisher.start_publish("orders").await?;
    for (sequence, event) in batch.iter().enumerate() {
        publisher.publish(&ctx, sequence as u64, event).await?;
    }
    publisher.end_publish(&ctx).await?;

    println!("\nfinished");
    Ok(())
}
