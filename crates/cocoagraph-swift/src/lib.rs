//! # cocoagraph-swift
//!
//! Swift source dialect. Declarations are recognized by their textual shape:
//! a `class`, `protocol` or `extension` keyword, a name, an optional
//! `: A, B` supertype list and an opening brace.
//!
//! Swift writes superclass and protocol conformances into one flat list, so
//! the dialect cannot tell them apart from the text alone. By default the
//! first entry is treated as the superclass and the rest as protocols; that
//! guess is wrong for classes with no superclass that conform to something.
//! Strict mode drops the guess and records every entry as a protocol.
//!
//! Known limits, shared with the declaration patterns this mirrors: generic
//! parameter lists and `where` clauses keep a declaration from matching at
//! all, and a declaration without an opening brace records nothing.

use std::sync::LazyLock;

use cocoagraph_core::dialect::{Dialect, IDENT_PATTERN, split_type_list};
use cocoagraph_core::{IgnorePolicy, TypeGraph};
use regex::Regex;

/// Optional `: A, B` supertype list plus the opening brace that ends every
/// matchable declaration head.
const SUPERTYPE_LIST: &str = r"(?:\s*:\s*([0-9A-Za-z_, ]+))?\s*\{";

// Declaration patterns compiled once. Swift keywords are case-sensitive, so
// no `(?i)` here; `\b` keeps `subclass` and friends from matching.
static RE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\bclass\s+({IDENT_PATTERN}){SUPERTYPE_LIST}")).unwrap()
});
static RE_PROTOCOL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\bprotocol\s+({IDENT_PATTERN}){SUPERTYPE_LIST}")).unwrap()
});
static RE_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\bextension\s+({IDENT_PATTERN}){SUPERTYPE_LIST}")).unwrap()
});

/// Swift source dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwiftDialect {
    strict_conformance: bool,
}

impl SwiftDialect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat every supertype entry as a protocol instead of guessing that
    /// the first one is a superclass.
    pub fn with_strict_conformance(mut self, strict: bool) -> Self {
        self.strict_conformance = strict;
        self
    }
}

impl Dialect for SwiftDialect {
    fn name(&self) -> &'static str {
        "swift"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["swift"]
    }

    fn extract_classes(&self, source: &str, graph: &mut TypeGraph, policy: &IgnorePolicy) {
        for caps in RE_CLASS.captures_iter(source) {
            let class_node = &caps[1];
            let subject_ignored = policy.is_ignored_node(class_node);
            if !subject_ignored {
                graph.add_class(class_node);
            }
            let Some(list) = caps.get(2) else { continue };
            for (index, entry) in split_type_list(list.as_str()).enumerate() {
                if policy.is_ignored_node(entry) {
                    continue;
                }
                if index == 0 && !self.strict_conformance {
                    // Probably the superclass; the source alone cannot
                    // confirm it.
                    graph.add_class(entry);
                } else {
                    graph.add_protocol(entry);
                }
                if !subject_ignored {
                    graph.add_class_edge(class_node, entry);
                }
            }
        }

        // Extensions attach conformances to a type declared elsewhere, like
        // Objective-C categories do.
        for caps in RE_EXTENSION.captures_iter(source) {
            let class_node = &caps[1];
            let subject_ignored = policy.is_ignored_node(class_node);
            if !subject_ignored {
                graph.add_class(class_node);
            }
            let Some(list) = caps.get(2) else { continue };
            for entry in split_type_list(list.as_str()) {
                if policy.is_ignored_node(entry) {
                    continue;
                }
                graph.add_protocol(entry);
                if !subject_ignored {
                    graph.add_class_edge(class_node, entry);
                }
            }
        }
    }

    fn extract_protocols(&self, source: &str, graph: &mut TypeGraph, policy: &IgnorePolicy) {
        for caps in RE_PROTOCOL.captures_iter(source) {
            let protocol_node = &caps[1];
            let subject_ignored = policy.is_ignored_node(protocol_node);
            if !subject_ignored {
                graph.add_protocol(protocol_node);
            }
            let Some(list) = caps.get(2) else { continue };
            for refined in split_type_list(list.as_str()) {
                if policy.is_ignored_node(refined) {
                    continue;
                }
                graph.add_protocol(refined);
                if !subject_ignored {
                    graph.add_protocol_edge(protocol_node, refined);
                }
            }
        }
    }
}
