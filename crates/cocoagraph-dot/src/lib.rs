//! # cocoagraph-dot
//!
//! Turns an accumulated [`TypeGraph`] into a rendered artifact:
//!
//! - [`dot`]: a small builder for well-formed DOT text
//! - [`render`]: output formats and the graphviz subprocess driver
//!
//! The emitted digraph is `strict`, so duplicate edges recorded during
//! extraction collapse at render time. Protocols and classes live in two
//! subgraphs with their own node styles, protocols first.

pub mod dot;
pub mod render;

pub use dot::DotBuilder;
pub use render::{ARTIFACT_STEM, OutputFormat, write_graph};

use cocoagraph_core::TypeGraph;

/// Visual styling for the emitted digraph.
#[derive(Debug, Clone)]
pub struct GraphStyle {
    /// Caption drawn under the whole graph
    pub label: String,
    /// Layout direction; `LR` keeps deep hierarchies readable
    pub rankdir: &'static str,
    pub class_shape: &'static str,
    pub class_color: &'static str,
    pub protocol_shape: &'static str,
    pub protocol_color: &'static str,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            label: "Project Digraph".to_string(),
            rankdir: "LR",
            class_shape: "Mrecord",
            class_color: "#3399FF",
            protocol_shape: "rect",
            protocol_color: "#00CC66",
        }
    }
}

/// Render the graph into DOT source.
///
/// Protocol nodes and edges are written before class nodes and edges, and
/// node names double as labels. The output is stable for a given graph:
/// nodes iterate in set order, edges in discovery order.
pub fn render_graph(graph: &TypeGraph, style: &GraphStyle) -> String {
    let mut builder = DotBuilder::strict("project");
    builder
        .attr("label", &style.label)
        .attr("rankdir", style.rankdir)
        .node_style("style=filled")
        .blank();

    builder.start_subgraph("r1_protocol");
    builder.node_style(&format!(
        "shape={}, color=\"{}\"",
        style.protocol_shape, style.protocol_color
    ));
    for node in graph.protocol_nodes() {
        builder.node(node);
    }
    for edge in graph.protocol_edges() {
        builder.edge(&edge.from, &edge.to);
    }
    builder.end_subgraph();

    builder.start_subgraph("r2_classes");
    builder.node_style(&format!(
        "shape={}, color=\"{}\"",
        style.class_shape, style.class_color
    ));
    for node in graph.class_nodes() {
        builder.node(node);
    }
    for edge in graph.class_edges() {
        builder.edge(&edge.from, &edge.to);
    }
    builder.end_subgraph();

    builder.build()
}
