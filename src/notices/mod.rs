//! # Informational notices emitted around the publish protocol.
//!
//! The publisher marks cycle start, every published record, and cycle end
//! with a [`Notice`], delivered through an injectable [`NoticeSink`].
//! Notices are observability output, not part of the protocol: helpers
//! never see them, and a failing phase suppresses the notice that would
//! have followed it.

mod notice;
mod stdout;

pub use notice::{Notice, NoticeSink};
pub use stdout::StdoutNotices;
