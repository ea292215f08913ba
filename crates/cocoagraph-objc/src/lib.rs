//! # cocoagraph-objc
//!
//! Objective-C header dialect. Declarations are recognized by their textual
//! shape, not by parsing the language:
//!
//! - `@interface Name : Super <P1, P2>` introduces a class, its superclass
//!   and its conformances
//! - `@interface Name (Category) <P1>` attaches conformances to an already
//!   declared class
//! - `@protocol Name <P1, P2>` introduces a protocol and its refinements
//!
//! Forward declarations such as `@protocol Remote;` still register a node;
//! the `@protocol(...)` expression form never matches because it has no
//! whitespace between keyword and name.

use std::sync::LazyLock;

use cocoagraph_core::dialect::{Dialect, IDENT_PATTERN, split_type_list};
use cocoagraph_core::{IgnorePolicy, TypeGraph};
use regex::Regex;

/// Optional `<A, B>` conformance block trailing a declaration head.
const PROTOCOL_BLOCK: &str = r"(<[0-9A-Za-z_,\s]+>)?";

// Declaration patterns compiled once. Keywords match case-insensitively;
// old headers are not consistent about casing.
static RE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)@interface\s+({IDENT_PATTERN})\s*:\s*({IDENT_PATTERN})\s*{PROTOCOL_BLOCK}"
    ))
    .unwrap()
});
static RE_CATEGORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)@interface\s+({IDENT_PATTERN})\s*(?:\({IDENT_PATTERN}\))?\s*{PROTOCOL_BLOCK}"
    ))
    .unwrap()
});
static RE_PROTOCOL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)@protocol\s+({IDENT_PATTERN})\s*{PROTOCOL_BLOCK}"
    ))
    .unwrap()
});

/// Objective-C header dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjcDialect;

impl ObjcDialect {
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for ObjcDialect {
    fn name(&self) -> &'static str {
        "objc"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["h"]
    }

    fn extract_classes(&self, source: &str, graph: &mut TypeGraph, policy: &IgnorePolicy) {
        for caps in RE_CLASS.captures_iter(source) {
            let class_node = &caps[1];
            let superclass = &caps[2];
            let subject_ignored = policy.is_ignored_node(class_node);
            if !subject_ignored {
                graph.add_class(class_node);
            }
            if !policy.is_ignored_node(superclass) {
                graph.add_class(superclass);
                if !subject_ignored {
                    graph.add_class_edge(class_node, superclass);
                }
            }
            if let Some(block) = caps.get(3) {
                record_conformances(graph, policy, class_node, subject_ignored, block.as_str());
            }
        }

        // The category pattern also matches plain `@interface Name` heads, so
        // root classes and forward-declared bases end up as nodes here.
        for caps in RE_CATEGORY.captures_iter(source) {
            let class_node = &caps[1];
            let subject_ignored = policy.is_ignored_node(class_node);
            if !subject_ignored {
                graph.add_class(class_node);
            }
            if let Some(block) = caps.get(2) {
                record_conformances(graph, policy, class_node, subject_ignored, block.as_str());
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
            let Some(block) = caps.get(2) else { continue };
            for refined in split_type_list(block.as_str()) {
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

/// Record `class_node`'s conformance to every protocol named in `block`.
fn record_conformances(
    graph: &mut TypeGraph,
    policy: &IgnorePolicy,
    class_node: &str,
    subject_ignored: bool,
    block: &str,
) {
    for protocol in split_type_list(block) {
        if policy.is_ignored_node(protocol) {
            continue;
        }
        graph.add_protocol(protocol);
        if !subject_ignored {
            graph.add_class_edge(class_node, protocol);
        }
    }
}
