//! # Publish helpers: the destination-adapter capability and built-ins.
//!
//! This module provides the [`PublishHelper`] trait, the extension point
//! destination adapters implement to take part in the publish lifecycle,
//! and the built-in [`ConsoleHelper`] (feature `logging`).

#[cfg(feature = "logging")]
mod console;
mod helper;

#[cfg(feature = "logging")]
pub use console::ConsoleHelper;
pub use helper::PublishHelper;
