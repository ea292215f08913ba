//! Source file discovery for cocoagraph.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use ignore::WalkBuilder;
use tracing::{info, warn};

use cocoagraph_core::{Dialect, DialectRegistry, IgnorePolicy};

/// A discovered source file paired with the dialect that will scan it.
pub struct SourceFile {
    pub path: PathBuf,
    pub dialect: Arc<dyn Dialect>,
}

/// Discovery result: files to scan, plus entries skipped on walk errors.
pub struct Discovered {
    pub files: Vec<SourceFile>,
    pub skipped: usize,
}

/// Recursively collect the source files under `root` that some registered
/// dialect handles.
///
/// Directories on the ignore list are pruned before descent. Symlinks are
/// never followed and hidden files are treated like any other file, so the
/// walk sees exactly what sits in the tree. Unreadable entries are logged
/// and counted instead of failing the run. The result is sorted by path,
/// which keeps everything downstream deterministic regardless of the order
/// the filesystem returned entries in.
pub fn discover_sources(
    root: &Path,
    registry: &DialectRegistry,
    policy: &IgnorePolicy,
) -> Discovered {
    let discovery_start = Instant::now();

    let mut files = Vec::new();
    let mut skipped = 0usize;

    let dir_policy = policy.clone();
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(move |entry| {
            // Always include root
            if entry.depth() == 0 {
                return true;
            }
            // Non-directories pass through
            let Some(file_type) = entry.file_type() else {
                return true;
            };
            if !file_type.is_dir() {
                return true;
            }
            // Prune ignored directories by exact name
            let Some(name) = entry.file_name().to_str() else {
                return true;
            };
            !dir_policy.is_ignored_dir(name)
        });

    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                skipped += 1;
                continue;
            }
        };

        // Only process files
        if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
            continue;
        }

        let path = entry.into_path();
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        let Some(dialect) = registry.get_by_extension(ext) else {
            continue;
        };
        files.push(SourceFile { path, dialect });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));

    info!(
        "File discovery: {:.2}s ({} files)",
        discovery_start.elapsed().as_secs_f64(),
        files.len()
    );

    Discovered { files, skipped }
}
