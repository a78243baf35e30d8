use super::{Notice, NoticeSink};

/// Prints each notice to stdout, one line per notice.
///
/// This is the default sink of a [`Publisher`](crate::Publisher).
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutNotices;

impl NoticeSink for StdoutNotices {
    fn emit(&self, notice: &Notice) {
        println!("{notice}");
    }
}
