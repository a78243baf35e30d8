//! # Publisher identity configuration.
//!
//! [`PublisherConfig`] captures the identity stamped onto every publish
//! cycle: the host identifier embedded in namespaced cache names and the
//! tag set handed to helpers through the per-cycle context.
//!
//! # Example
//! ```
//! use logfan::PublisherConfig;
//!
//! let mut cfg = PublisherConfig::default();
//! cfg.host = "app-01".into();
//! cfg.tags = vec!["prod".into(), "orders".into()];
//!
//! assert_eq!(cfg.host, "app-01");
//! assert_eq!(cfg.tags.len(), 2);
//! ```

/// Identity configuration for a [`Publisher`](crate::Publisher).
///
/// Captured once at construction and shared read-only across all publish
/// cycles for the publisher's lifetime.
#[derive(Clone, Debug)]
pub struct PublisherConfig {
    /// Host identifier embedded in every namespaced cache name.
    pub host: String,
    /// Tags handed to helpers through the per-cycle context.
    pub tags: Vec<String>,
}

impl Default for PublisherConfig {
    /// Provides a default configuration:
    /// - `host = "localhost"`
    /// - `tags = []`
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            tags: Vec::new(),
        }
    }
}
