//! # Per-cycle publish context.
//!
//! One [`PublishContext`] is built per publish cycle and handed by
//! reference to every helper call. It is immutable after creation: the
//! namespaced cache name, host, tags, and layout it carries never change
//! for the lifetime of the cycle, and the context is discarded when the
//! cycle ends.

use std::fmt;
use std::sync::Arc;

use crate::layout::Layout;

/// Immutable value object describing one publish cycle.
///
/// Cheap to clone; all clones refer to the same name, tags, and layout.
#[derive(Clone)]
pub struct PublishContext {
    cache_name: Arc<str>,
    host: Arc<str>,
    tags: Arc<[String]>,
    layout: Arc<dyn Layout>,
}

impl PublishContext {
    pub(crate) fn new(
        cache_name: Arc<str>,
        host: Arc<str>,
        tags: Arc<[String]>,
        layout: Arc<dyn Layout>,
    ) -> Self {
        Self {
            cache_name,
            host,
            tags,
            layout,
        }
    }

    /// The namespaced cache name identifying this cycle.
    #[must_use]
    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    /// Host identifier the publisher was configured with.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Tags the publisher was configured with.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Layout for rendering records at the destination.
    #[must_use]
    pub fn layout(&self) -> &Arc<dyn Layout> {
        &self.layout
    }

    pub(crate) fn shared_cache_name(&self) -> Arc<str> {
        Arc::clone(&self.cache_name)
    }
}

impl fmt::Debug for PublishContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishContext")
            .field("cache_name", &self.cache_name)
            .field("host", &self.host)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}
