//! # cocoagraph-core
//!
//! The language-independent heart of cocoagraph:
//!
//! - [`graph`]: the accumulator for class/protocol nodes and their edges
//! - [`policy`]: name-based exclusion rules for directories and nodes
//! - [`dialect`]: the contract each source dialect implements, plus the
//!   registry that maps file extensions to dialects

pub mod dialect;
pub mod graph;
pub mod policy;

pub use cocoagraph_error::{Error, ErrorKind, Result};
pub use dialect::{Dialect, DialectRegistry, IDENT_PATTERN, split_type_list};
pub use graph::{Edge, TypeGraph};
pub use policy::IgnorePolicy;
