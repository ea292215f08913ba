//! Node and edge accumulation for the project graph.
//!
//! Extraction appends into a [`TypeGraph`]; rendering reads it back out.
//! Node sets are ordered so that repeated runs over the same tree produce
//! byte-identical output. Edges keep their discovery order and are not
//! deduplicated here: the strict digraph emitted later collapses repeats.

use std::collections::BTreeSet;

/// A directed relationship between two named types.
///
/// `from` inherits from `to` (class to class), conforms to it (class to
/// protocol) or refines it (protocol to protocol).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Accumulated class/protocol nodes and the edges between them.
///
/// A name may legitimately appear in both node sets: a class and a protocol
/// can share a name, and Swift superclass detection is heuristic. Rendering
/// keeps the two populations in separate clusters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeGraph {
    class_nodes: BTreeSet<String>,
    protocol_nodes: BTreeSet<String>,
    class_edges: Vec<Edge>,
    protocol_edges: Vec<Edge>,
}

impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a class node. Re-adding an existing name is a no-op.
    pub fn add_class(&mut self, name: impl Into<String>) {
        self.class_nodes.insert(name.into());
    }

    /// Record a protocol node. Re-adding an existing name is a no-op.
    pub fn add_protocol(&mut self, name: impl Into<String>) {
        self.protocol_nodes.insert(name.into());
    }

    /// Record an inheritance or conformance edge rooted at a class.
    pub fn add_class_edge(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.class_edges.push(Edge::new(from, to));
    }

    /// Record a refinement edge between two protocols.
    pub fn add_protocol_edge(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.protocol_edges.push(Edge::new(from, to));
    }

    pub fn class_nodes(&self) -> &BTreeSet<String> {
        &self.class_nodes
    }

    pub fn protocol_nodes(&self) -> &BTreeSet<String> {
        &self.protocol_nodes
    }

    pub fn class_edges(&self) -> &[Edge] {
        &self.class_edges
    }

    pub fn protocol_edges(&self) -> &[Edge] {
        &self.protocol_edges
    }

    pub fn is_empty(&self) -> bool {
        self.class_nodes.is_empty()
            && self.protocol_nodes.is_empty()
            && self.class_edges.is_empty()
            && self.protocol_edges.is_empty()
    }

    /// Fold another graph into this one.
    ///
    /// Set union for nodes; `other`'s edges are appended after the existing
    /// ones, so merging per-file graphs in a fixed file order yields the same
    /// edge order a sequential scan would have produced.
    pub fn merge(&mut self, other: TypeGraph) {
        self.class_nodes.extend(other.class_nodes);
        self.protocol_nodes.extend(other.protocol_nodes);
        self.class_edges.extend(other.class_edges);
        self.protocol_edges.extend(other.protocol_edges);
    }
}
