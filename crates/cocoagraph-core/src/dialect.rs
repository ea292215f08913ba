//! Dialect contract and dynamic dialect registry.
//!
//! Each source dialect (Objective-C headers, Swift files) implements
//! [`Dialect`] and is registered at startup. The registry provides runtime
//! polymorphism over dialects, so traversal and extraction never branch on
//! a language name: they look up the dialect by file extension and call
//! through the trait.

use std::collections::HashMap;
use std::sync::Arc;

use crate::graph::TypeGraph;
use crate::policy::IgnorePolicy;

/// Regex fragment matching a type name: ASCII letters, digits, underscore.
/// Dialects splice this into their declaration patterns so that all of them
/// agree on what counts as a name.
pub const IDENT_PATTERN: &str = "[0-9A-Za-z_]+";

/// Split a captured supertype list into its name tokens.
///
/// Accepts both the Objective-C form (`<UITableViewDelegate, NSCopying>`)
/// and the Swift form (`UIView, Renderable`): surrounding angle brackets and
/// whitespace are stripped, tokens are split on commas and trimmed, and
/// empty tokens are dropped.
pub fn split_type_list(raw: &str) -> impl Iterator<Item = &str> + '_ {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '<' || c == '>')
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Object-safe extraction contract implemented by every source dialect.
///
/// Extraction is pattern driven and line oriented: implementations scan the
/// text for declaration shapes and record what they find. They never build a
/// syntax tree, so malformed source degrades to "no match", not an error.
pub trait Dialect: Send + Sync {
    /// Unique name of this dialect (e.g. "objc", "swift")
    fn name(&self) -> &'static str;

    /// File extensions handled by this dialect, without the leading dot
    fn extensions(&self) -> &'static [&'static str];

    /// Check if a file extension is handled by this dialect
    fn supports_extension(&self, ext: &str) -> bool {
        self.extensions().contains(&ext)
    }

    /// Scan for class-like declarations and record the nodes and edges they
    /// introduce. Runs before [`Dialect::extract_protocols`] on each file.
    fn extract_classes(&self, source: &str, graph: &mut TypeGraph, policy: &IgnorePolicy);

    /// Scan for protocol declarations and record the nodes and refinement
    /// edges they introduce.
    fn extract_protocols(&self, source: &str, graph: &mut TypeGraph, policy: &IgnorePolicy);
}

/// Registry of available dialects.
pub struct DialectRegistry {
    /// Map from dialect name to implementation
    dialects: HashMap<&'static str, Arc<dyn Dialect>>,
    /// Map from file extension to implementation
    extension_map: HashMap<&'static str, Arc<dyn Dialect>>,
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DialectRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            dialects: HashMap::new(),
            extension_map: HashMap::new(),
        }
    }

    /// Register a dialect under its name and all of its extensions
    pub fn register(&mut self, dialect: Arc<dyn Dialect>) {
        let name = dialect.name();
        self.dialects.insert(name, dialect.clone());
        for ext in dialect.extensions() {
            self.extension_map.insert(*ext, dialect.clone());
        }
    }

    /// Get a dialect by name
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn Dialect>> {
        self.dialects.get(name).cloned()
    }

    /// Get a dialect by file extension
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn Dialect>> {
        self.extension_map.get(ext).cloned()
    }

    /// Get all registered extensions
    pub fn all_extensions(&self) -> Vec<&'static str> {
        self.extension_map.keys().copied().collect()
    }

    /// Get all registered dialect names
    pub fn all_dialects(&self) -> Vec<&'static str> {
        self.dialects.keys().copied().collect()
    }

    /// Check if the registry has any dialects registered
    pub fn is_empty(&self) -> bool {
        self.dialects.is_empty()
    }

    /// Get the number of registered dialects
    pub fn len(&self) -> usize {
        self.dialects.len()
    }
}
