//! # cocoagraph-error
//!
//! Unified error handling for cocoagraph.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., RenderFailed, ConfigInvalid)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use cocoagraph_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::RenderFailed, "dot exited with status 1")
//!         .with_operation("dot::write_graph")
//!         .with_context("artifact", "out/project.pdf"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All functions return `Result<T, cocoagraph_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context
//! - Don't abuse `From<OtherError>` to prevent raw error leakage

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using cocoagraph Error
pub type Result<T> = std::result::Result<T, Error>;
