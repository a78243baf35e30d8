//! # Example: custom_helper
//!
//! Demonstrates how to build and register a custom publish helper.
//!
//! Shows how to:
//! - Implement the [`PublishHelper`] trait.
//! - Collect per-cycle content in memory and hand it off on `end`.
//! - Pin the clock so cycle names are reproducible across runs.
//! - Drive two cycles against the same publisher (the helper list is live).
//!
//! ## Run
//! ```bash
//! cargo run --example custom_helper
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use logfan::{
    FixedClock, Level, LineLayout, LogEvent, PublishContext, PublishError, PublishHelper,
    Publisher, PublisherConfig,
};

/// Buffers rendered records per cycle and "ships" them on `end`.
/// In real life this would write to a file, a bucket, or a remote store.
struct BufferingHelper {
    pending: Mutex<Vec<String>>,
}

#[async_trait]
impl PublishHelper for BufferingHelper {
    async fn start(&self, ctx: &PublishContext) -> Result<(), PublishError> {
        println!("[buffer] opening batch for {}", ctx.cache_name());
        self.pending.lock().unwrap().clear();
        Ok(())
    }

    async fn publish(
        &self,
        ctx: &PublishContext,
        sequence: u64,
        event: &LogEvent,
    ) -> Result<(), PublishError> {
        let rendered = ctx.layout().format(event)?;
        self.pending
            .lock()
            .unwrap()
            .push(format!("{sequence} {rendered}"));
        Ok(())
    }

    async fn end(&self, ctx: &PublishContext) -> Result<(), PublishError> {
        let batch = std::mem::take(&mut *self.pending.lock().unwrap());
        println!(
            "[buffer] shipping {} records for {}",
            batch.len(),
            ctx.cache_name()
        );
        for line in &batch {
            println!("[buffer]   {line}");
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "buffer"
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cfg = PublisherConfig {
        host: "demo-host".into(),
        tags: Vec::new(),
    };

    // Pinned clock so every run produces the same cycle names.
    let at = chrono::NaiveDate::from_ymd_opt(2024, 1, 15)
        .expect("valid date")
        .and_hms_opt(10, 30, 45)
        .expect("valid time");

    let mut publisher = Publisher::new(cfg, Arc::new(LineLayout::default()))
        .with_clock(Arc::new(FixedClock::new(at)));
    publisher.add_helper(Arc::new(BufferingHelper {
        pending: Mutex::new(Vec::new()),
    }));

    for cycle in ["orders", "payments"] {
        let ctx = publisher.start_publish(cycle).await?;
        for (sequence, message) in ["first record", "second record"].iter().enumerate() {
            let event = LogEvent::new(Level::Info, *message).with_target(cycle);
            publisher.publish(&ctx, sequence as u64, &event).await?;
        }
        publisher.end_publish(&ctx).await?;
        println!();
    }

    println!("finished");
    Ok(())
}
