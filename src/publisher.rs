//! # Publisher: three-phase fan-out over registered helpers.
//!
//! [`Publisher`] names each publish cycle, notifies every registered
//! [`PublishHelper`] at cycle start, once per record, and at cycle end, and
//! renders each record through the configured [`Layout`].
//!
//! ## Diagram
//! ```text
//! start_publish(raw)                 publish(ctx, n, ev)             end_publish(ctx)
//!     │                                  │                               │
//!     ├─ compose "<stamp>_<host>_<raw>"  ├─► helper 1.publish(..)        ├─► helper 1.end(ctx)
//!     ├─ notice: CycleStarted            ├─► helper 2.publish(..)        ├─► helper 2.end(ctx)
//!     ├─► helper 1.start(ctx)            ├─► helper N.publish(..)        ├─► helper N.end(ctx)
//!     ├─► helper 2.start(ctx)            └─ notice: RecordPublished      └─ notice: CycleEnded
//!     └─► helper N.start(ctx)
//! ```
//!
//! ## Rules
//! - Helpers run strictly in registration order, one at a time.
//! - The first helper error aborts the phase and propagates unchanged;
//!   remaining helpers are not invoked for that phase.
//! - The helper list is live: a helper added between cycles takes part in
//!   the next cycle without re-construction.
//! - One cycle = `start_publish` → zero-or-more `publish` → `end_publish`,
//!   driven by the caller; the publisher keeps no cycle state of its own
//!   and does not enforce phase ordering.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::PublisherConfig;
use crate::context::PublishContext;
use crate::error::PublishError;
use crate::events::LogEvent;
use crate::helpers::PublishHelper;
use crate::layout::Layout;
use crate::notices::{Notice, NoticeSink, StdoutNotices};

/// Coordinates publishing one batch of buffered log events to every
/// registered helper.
///
/// Owns the formatting layout, the host identifier, the tag set, and the
/// ordered helper list; drives the three-phase protocol against them.
pub struct Publisher {
    layout: Arc<dyn Layout>,
    host: Arc<str>,
    tags: Arc<[String]>,
    helpers: Vec<Arc<dyn PublishHelper>>,
    clock: Arc<dyn Clock>,
    notices: Arc<dyn NoticeSink>,
}

impl Publisher {
    /// Creates a publisher with the given identity and layout.
    ///
    /// Uses [`SystemClock`] for cycle naming and
    /// [`StdoutNotices`] for informational output; swap either with
    /// [`Publisher::with_clock`] / [`Publisher::with_notices`].
    pub fn new(config: PublisherConfig, layout: Arc<dyn Layout>) -> Self {
        Self {
            layout,
            host: Arc::from(config.host),
            tags: config.tags.into(),
            helpers: Vec::new(),
            clock: Arc::new(SystemClock),
            notices: Arc::new(StdoutNotices),
        }
    }

    /// Replaces the time source used for cycle naming.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the sink receiving informational notices.
    #[must_use]
    pub fn with_notices(mut self, notices: Arc<dyn NoticeSink>) -> Self {
        self.notices = notices;
        self
    }

    /// Appends `helper` to the invocation list.
    ///
    /// The list is live: a helper added after one cycle completes takes
    /// part in the next cycle. There is no removal operation.
    pub fn add_helper(&mut self, helper: Arc<dyn PublishHelper>) {
        self.helpers.push(helper);
    }

    /// Opens a publish cycle for `raw_cache_name`.
    ///
    /// Composes the namespaced cache name, emits the cycle-started notice,
    /// builds the per-cycle context, then invokes [`PublishHelper::start`]
    /// on every registered helper in registration order. The first helper
    /// error propagates unchanged and the context is not returned.
    pub async fn start_publish(
        &self,
        raw_cache_name: &str,
    ) -> Result<PublishContext, PublishError> {
        let cache_name: Arc<str> = self.compose_namespaced_cache_name(raw_cache_name).into();
        self.notices.emit(&Notice::CycleStarted {
            cache_name: Arc::clone(&cache_name),
        });
        let context = PublishContext::new(
            cache_name,
            Arc::clone(&self.host),
            Arc::clone(&self.tags),
            Arc::clone(&self.layout),
        );
        for helper in &self.helpers {
            helper.start(&context).await?;
        }
        Ok(context)
    }

    /// Publishes one buffered record to every registered helper.
    ///
    /// Helpers run first, in registration order; the first error propagates
    /// unchanged and suppresses the record notice. On success the record is
    /// rendered through the layout and a record notice pairing `sequence`
    /// with the rendered text is emitted.
    ///
    /// `sequence` is caller-supplied and not validated for monotonicity or
    /// uniqueness.
    pub async fn publish(
        &self,
        context: &PublishContext,
        sequence: u64,
        event: &LogEvent,
    ) -> Result<(), PublishError> {
        for helper in &self.helpers {
            helper.publish(context, sequence, event).await?;
        }
        let rendered = self.layout.format(event)?;
        self.notices
            .emit(&Notice::RecordPublished { sequence, rendered });
        Ok(())
    }

    /// Closes a publish cycle.
    ///
    /// Invokes [`PublishHelper::end`] on every registered helper in
    /// registration order, then emits the cycle-ended notice for the
    /// context's namespaced cache name.
    pub async fn end_publish(&self, context: &PublishContext) -> Result<(), PublishError> {
        for helper in &self.helpers {
            helper.end(context).await?;
        }
        self.notices.emit(&Notice::CycleEnded {
            cache_name: context.shared_cache_name(),
        });
        Ok(())
    }

    /// Composes the namespaced cache name: the clock's current time as a
    /// fixed 14-digit stamp, the host, and the raw name, joined by `_`
    /// (e.g. `20240115103045_h1_orders`).
    ///
    /// Names sort by creation time at second granularity; two cycles on the
    /// same host with the same raw name within one second produce the same
    /// name.
    fn compose_namespaced_cache_name(&self, raw_cache_name: &str) -> String {
        let stamp = self.clock.now().format("%Y%m%d%H%M%S");
        format!("{stamp}_{}_{raw_cache_name}", self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::events::Level;
    use crate::layout::LineLayout;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    /// Shared ordered log of helper calls and notices, so tests can assert
    /// the relative order of both.
    #[derive(Default)]
    struct CallLog(Mutex<Vec<String>>);

    impl CallLog {
        fn push(&self, entry: String) {
            self.0.lock().unwrap().push(entry);
        }

        fn entries(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    struct RecordingHelper {
        tag: &'static str,
        log: Arc<CallLog>,
    }

    #[async_trait]
    impl PublishHelper for RecordingHelper {
        async fn start(&self, ctx: &PublishContext) -> Result<(), PublishError> {
            self.log.push(format!("{}:start:{}", self.tag, ctx.cache_name()));
            Ok(())
        }

        async fn publish(
            &self,
            _ctx: &PublishContext,
            sequence: u64,
            event: &LogEvent,
        ) -> Result<(), PublishError> {
            self.log
                .push(format!("{}:publish:{}:{}", self.tag, sequence, event.message));
            Ok(())
        }

        async fn end(&self, ctx: &PublishContext) -> Result<(), PublishError> {
            self.log.push(format!("{}:end:{}", self.tag, ctx.cache_name()));
            Ok(())
        }

        fn name(&self) -> &'static str {
            self.tag
        }
    }

    /// Records the call, then fails on the named phase.
    struct FailingHelper {
        tag: &'static str,
        fail_on: &'static str,
        log: Arc<CallLog>,
    }

    impl FailingHelper {
        fn fail(&self, phase: &'static str) -> Result<(), PublishError> {
            self.log.push(format!("{}:{}", self.tag, phase));
            if self.fail_on == phase {
                return Err(PublishError::Destination {
                    error: "refused".into(),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl PublishHelper for FailingHelper {
        async fn start(&self, _ctx: &PublishContext) -> Result<(), PublishError> {
            self.fail("start")
        }

        async fn publish(
            &self,
            _ctx: &PublishContext,
            _sequence: u64,
            _event: &LogEvent,
        ) -> Result<(), PublishError> {
            self.fail("publish")
        }

        async fn end(&self, _ctx: &PublishContext) -> Result<(), PublishError> {
            self.fail("end")
        }

        fn name(&self) -> &'static str {
            self.tag
        }
    }

    struct CapturedNotices(Arc<CallLog>);

    impl NoticeSink for CapturedNotices {
        fn emit(&self, notice: &Notice) {
            self.0.push(notice.to_string());
        }
    }

    fn fixed_clock() -> Arc<FixedClock> {
        let at = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 45)
            .unwrap();
        Arc::new(FixedClock::new(at))
    }

    fn publisher(log: &Arc<CallLog>) -> Publisher {
        let cfg = PublisherConfig {
            host: "h1".into(),
            tags: vec!["prod".into()],
        };
        Publisher::new(cfg, Arc::new(LineLayout::default()))
            .with_clock(fixed_clock())
            .with_notices(Arc::new(CapturedNotices(Arc::clone(log))))
    }

    fn recording(tag: &'static str, log: &Arc<CallLog>) -> Arc<RecordingHelper> {
        Arc::new(RecordingHelper {
            tag,
            log: Arc::clone(log),
        })
    }

    #[test]
    fn test_namespaced_cache_name_composition() {
        let log = Arc::new(CallLog::default());
        let p = publisher(&log);
        assert_eq!(
            p.compose_namespaced_cache_name("orders"),
            "20240115103045_h1_orders"
        );
    }

    #[tokio::test]
    async fn test_start_invokes_helpers_in_registration_order() {
        let log = Arc::new(CallLog::default());
        let mut p = publisher(&log);
        for tag in ["a", "b", "c"] {
            p.add_helper(recording(tag, &log));
        }

        let ctx = p.start_publish("orders").await.unwrap();

        assert_eq!(ctx.cache_name(), "20240115103045_h1_orders");
        assert_eq!(
            log.entries(),
            vec![
                "BEGIN publishing to 20240115103045_h1_orders...",
                "a:start:20240115103045_h1_orders",
                "b:start:20240115103045_h1_orders",
                "c:start:20240115103045_h1_orders",
            ]
        );
    }

    #[tokio::test]
    async fn test_start_failure_aborts_remaining_helpers() {
        let log = Arc::new(CallLog::default());
        let mut p = publisher(&log);
        p.add_helper(recording("a", &log));
        p.add_helper(Arc::new(FailingHelper {
            tag: "f",
            fail_on: "start",
            log: Arc::clone(&log),
        }));
        p.add_helper(recording("c", &log));

        let err = p.start_publish("orders").await.unwrap_err();

        assert_eq!(err.as_label(), "publish_destination");
        let entries = log.entries();
        assert!(entries.contains(&"a:start:20240115103045_h1_orders".to_string()));
        assert!(entries.contains(&"f:start".to_string()));
        assert!(
            !entries.iter().any(|e| e.starts_with("c:")),
            "helper after the failing one must not run: {entries:?}"
        );
    }

    #[tokio::test]
    async fn test_publish_fans_out_then_emits_record_notice() {
        let log = Arc::new(CallLog::default());
        let mut p = publisher(&log);
        p.add_helper(recording("a", &log));
        p.add_helper(recording("b", &log));

        let ctx = p.start_publish("orders").await.unwrap();
        let event = LogEvent::new(Level::Info, "cache flushed").with_target("flush");
        p.publish(&ctx, 7, &event).await.unwrap();

        let entries = log.entries();
        assert_eq!(
            &entries[entries.len() - 3..],
            &[
                "a:publish:7:cache flushed".to_string(),
                "b:publish:7:cache flushed".to_string(),
                "7:INFO flush: cache flushed".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_publish_failure_suppresses_record_notice() {
        let log = Arc::new(CallLog::default());
        let mut p = publisher(&log);
        p.add_helper(Arc::new(FailingHelper {
            tag: "f",
            fail_on: "publish",
            log: Arc::clone(&log),
        }));

        let ctx = p.start_publish("orders").await.unwrap();
        let event = LogEvent::new(Level::Info, "cache flushed");
        let err = p.publish(&ctx, 7, &event).await.unwrap_err();

        assert_eq!(err.as_label(), "publish_destination");
        assert!(
            !log.entries().iter().any(|e| e.starts_with("7:")),
            "record notice must not follow a failed fan-out"
        );
    }

    #[tokio::test]
    async fn test_end_emits_notice_after_helpers() {
        let log = Arc::new(CallLog::default());
        let mut p = publisher(&log);
        p.add_helper(recording("a", &log));
        p.add_helper(recording("b", &log));

        let ctx = p.start_publish("orders").await.unwrap();
        p.end_publish(&ctx).await.unwrap();

        let entries = log.entries();
        assert_eq!(
            &entries[entries.len() - 3..],
            &[
                "a:end:20240115103045_h1_orders".to_string(),
                "b:end:20240115103045_h1_orders".to_string(),
                "END publishing to 20240115103045_h1_orders".to_string(),
            ]
        );
        let end_notices = entries
            .iter()
            .filter(|e| e.starts_with("END publishing"))
            .count();
        assert_eq!(end_notices, 1);
    }

    #[tokio::test]
    async fn test_helper_list_is_live_between_cycles() {
        let log = Arc::new(CallLog::default());
        let mut p = publisher(&log);
        p.add_helper(recording("a", &log));

        let ctx = p.start_publish("orders").await.unwrap();
        p.end_publish(&ctx).await.unwrap();

        p.add_helper(recording("b", &log));
        let ctx = p.start_publish("orders").await.unwrap();
        p.end_publish(&ctx).await.unwrap();

        let entries = log.entries();
        let starts: Vec<&str> = entries
            .iter()
            .filter(|e| e.contains(":start:"))
            .map(String::as_str)
            .collect();
        assert_eq!(
            starts,
            vec![
                "a:start:20240115103045_h1_orders",
                "a:start:20240115103045_h1_orders",
                "b:start:20240115103045_h1_orders",
            ]
        );
    }

    #[tokio::test]
    async fn test_cycle_with_no_helpers_still_emits_notices() {
        let log = Arc::new(CallLog::default());
        let p = publisher(&log);

        let ctx = p.start_publish("orders").await.unwrap();
        let event = LogEvent::new(Level::Info, "cache flushed");
        p.publish(&ctx, 5, &event).await.unwrap();
        p.end_publish(&ctx).await.unwrap();

        assert_eq!(
            log.entries(),
            vec![
                "BEGIN publishing to 20240115103045_h1_orders...",
                "5:INFO: cache flushed",
                "END publishing to 20240115103045_h1_orders",
            ]
        );
    }

    #[tokio::test]
    async fn test_context_carries_publisher_identity() {
        let log = Arc::new(CallLog::default());
        let p = publisher(&log);

        let ctx = p.start_publish("orders").await.unwrap();

        assert_eq!(ctx.host(), "h1");
        assert_eq!(ctx.tags(), ["prod".to_string()]);
        assert_eq!(ctx.cache_name(), "20240115103045_h1_orders");
    }
}
