pub mod discovery;
pub mod pipeline;

use std::path::PathBuf;
use std::sync::Arc;

use cocoagraph_core::{DialectRegistry, Error, IgnorePolicy, Result};
use cocoagraph_dot::{GraphStyle, render_graph, write_graph};
use cocoagraph_objc::ObjcDialect;
use cocoagraph_swift::SwiftDialect;

pub use cocoagraph_dot::OutputFormat;
pub use pipeline::extract_project;

/// Options for running cocoagraph.
pub struct ScanOptions {
    /// Project directory to scan recursively
    pub root: PathBuf,
    /// Where to write the artifact; the project root when absent
    pub output_dir: Option<PathBuf>,
    pub format: OutputFormat,
    /// Directory names pruned during traversal
    pub ignore_dirs: Vec<String>,
    /// Type names kept out of the graph
    pub ignore_nodes: Vec<String>,
    /// Record every Swift conformance entry as a protocol
    pub strict_protocols: bool,
    /// Keep the intermediate DOT source next to the rendered artifact
    pub keep_dot: bool,
    /// Scan files on the rayon pool
    pub parallel: bool,
}

/// What a completed run produced.
#[derive(Debug)]
pub struct ScanSummary {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub classes: usize,
    pub protocols: usize,
    pub class_edges: usize,
    pub protocol_edges: usize,
    /// Path of the written artifact
    pub artifact: PathBuf,
}

/// Build the registry of shipped dialects: Objective-C headers and Swift.
pub fn default_registry(strict_protocols: bool) -> DialectRegistry {
    let mut registry = DialectRegistry::new();
    registry.register(Arc::new(ObjcDialect::new()));
    registry.register(Arc::new(
        SwiftDialect::new().with_strict_conformance(strict_protocols),
    ));
    registry
}

/// Main entry point: discover, extract, render, write.
///
/// Unreadable files are skipped and counted, never fatal; a rendering
/// problem after extraction is fatal and carries the phase in its context.
pub fn run_main(opts: &ScanOptions) -> Result<ScanSummary> {
    if !opts.root.is_dir() {
        return Err(Error::invalid_argument(format!(
            "project root '{}' is not a directory",
            opts.root.display()
        ))
        .with_operation("cli::run_main"));
    }

    let policy = IgnorePolicy::new(
        opts.ignore_dirs.iter().cloned(),
        opts.ignore_nodes.iter().cloned(),
    );
    let registry = default_registry(opts.strict_protocols);

    let discovered = discovery::discover_sources(&opts.root, &registry, &policy);
    let (graph, stats) = pipeline::extract_project(&discovered.files, &policy, opts.parallel);

    let output_dir = opts
        .output_dir
        .clone()
        .unwrap_or_else(|| opts.root.clone());
    let dot_source = render_graph(&graph, &GraphStyle::default());
    let artifact = write_graph(&dot_source, &output_dir, opts.format, opts.keep_dot)
        .map_err(|err| err.with_context("phase", "extraction succeeded, rendering failed"))?;

    Ok(ScanSummary {
        files_scanned: stats.files_scanned,
        files_skipped: discovered.skipped + stats.files_skipped,
        classes: graph.class_nodes().len(),
        protocols: graph.protocol_nodes().len(),
        class_edges: graph.class_edges().len(),
        protocol_edges: graph.protocol_edges().len(),
        artifact,
    })
}
