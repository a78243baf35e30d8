//! # logfan
//!
//! **logfan** is a small fan-out publisher for buffered log event batches.
//!
//! A buffering appender accumulates log events until a flush threshold,
//! then drains the batch through a three-phase protocol. logfan names the
//! batch, notifies every registered destination helper phase by phase, and
//! renders each record through a formatting layout. The crate is designed
//! as a building block for appender plugins that ship the same batch to
//! several destinations (files, remote stores, custom sinks).
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   caller (buffering appender)
//!        │
//!        │  start_publish(raw) ──► publish(ctx, n, ev)* ──► end_publish(ctx)
//!        ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │ Publisher                                               │
//! │  - composes "<stamp>_<host>_<raw>" cycle names          │
//! │  - fans each phase out to the helpers, in order         │
//! │  - renders records through the Layout                   │
//! │  - emits begin / record / end notices                   │
//! └───────┬───────────────────┬───────────────────┬─────────┘
//!         ▼                   ▼                   ▼
//!     helper 1            helper 2            helper N        (Arc<dyn PublishHelper>)
//!     (file, ...)         (remote, ...)       (custom)
//! ```
//!
//! ### Lifecycle
//! One publish cycle:
//! ```text
//! start_publish(raw)
//!   ├─► compose namespaced cache name (second-granularity stamp + host + raw)
//!   ├─► notice: BEGIN publishing to <name>...
//!   ├─► helper.start(ctx) for each helper, in registration order
//!   └─► PublishContext
//!
//! publish(ctx, sequence, event)              (once per buffered record)
//!   ├─► helper.publish(ctx, sequence, event) for each helper, in order
//!   └─► notice: <sequence>:<rendered>
//!
//! end_publish(ctx)
//!   ├─► helper.end(ctx) for each helper, in order
//!   └─► notice: END publishing to <name>
//! ```
//! Helpers are awaited one at a time; the first error aborts the phase and
//! propagates unchanged to the caller.
//!
//! ## Features
//! | Area              | Description                                            | Key types / traits            |
//! |-------------------|--------------------------------------------------------|-------------------------------|
//! | **Helper API**    | Plug destination adapters into the publish lifecycle.  | [`PublishHelper`]             |
//! | **Naming**        | Sortable, host-disambiguated cycle names.              | [`Clock`], [`SystemClock`]    |
//! | **Rendering**     | Render records to display text.                        | [`Layout`], [`LineLayout`]    |
//! | **Observability** | Cycle notices through an injectable sink.              | [`Notice`], [`NoticeSink`]    |
//! | **Errors**        | Typed failures for destinations and rendering.         | [`PublishError`]              |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in `ConsoleHelper` _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//!
//! use logfan::{Level, LineLayout, LogEvent, Publisher, PublisherConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut cfg = PublisherConfig::default();
//!     cfg.host = "app-01".into();
//!
//!     let mut publisher = Publisher::new(cfg, Arc::new(LineLayout::default()));
//!     // publisher.add_helper(Arc::new(MyHelper)); // any Arc<dyn PublishHelper>
//!
//!     let ctx = publisher.start_publish("orders").await?;
//!     for (n, message) in ["cache primed", "cache flushed"].iter().enumerate() {
//!         let event = LogEvent::new(Level::Info, *message);
//!         publisher.publish(&ctx, n as u64, &event).await?;
//!     }
//!     publisher.end_publish(&ctx).await?;
//!     Ok(())
//! }
//! ```

mod clock;
mod config;
mod context;
mod error;
mod events;
mod helpers;
mod layout;
mod notices;
mod publisher;

// ---- Public re-exports ----

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::PublisherConfig;
pub use context::PublishContext;
pub use error::PublishError;
pub use events::{Level, LogEvent};
pub use helpers::PublishHelper;
pub use layout::{Layout, LineLayout};
pub use notices::{Notice, NoticeSink, StdoutNotices};
pub use publisher::Publisher;

// Optional: expose a simple built-in console helper (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use helpers::ConsoleHelper;
