//! # Tour Common Utilities
//!
//! Shared support for the basics tour chapters.
//!
//! ## Modules
//!
//! - [`console`]: Section headings and banners written to any `io::Write` sink
//! - [`error`]: The single [`TourError`] type every fallible routine returns
//! - [`scope`]: A LIFO cleanup stack that runs deferred actions on scope exit
//! - [`topic`]: The catalogue of demonstration topics and their run order
//!
//! ## Design Principles
//!
//! 1. **Sink-agnostic output**: demos write to `&mut impl Write`, never straight to stdout
//! 2. **Explicit errors**: fallible operations return `Result`, no paired sentinel values
//! 3. **RAII cleanup**: deferred work is tied to `Drop`, so every exit path runs it

pub mod console;
pub mod error;
pub mod scope;
pub mod topic;

// Re-export main types for convenience
pub use error::{Result, TourError};
pub use scope::Scope;
pub use topic::Topic;
