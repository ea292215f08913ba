//! Output formats and the graphviz `dot` subprocess driver.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

use cocoagraph_error::{Error, Result};
use tracing::{debug, info, warn};

/// File stem of the written artifact: `project.pdf`, `project.dot`, ...
pub const ARTIFACT_STEM: &str = "project";

/// Supported output formats.
///
/// `Dot` writes the generated DOT source and stops; the other formats hand
/// the source to the graphviz `dot` executable for layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Pdf,
    Png,
    Svg,
    Dot,
}

impl OutputFormat {
    /// File extension of the artifact, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Dot => "dot",
        }
    }

    /// Whether this format needs graphviz to run.
    pub fn is_rendered(&self) -> bool {
        !matches!(self, OutputFormat::Dot)
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "pdf" => Ok(OutputFormat::Pdf),
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            "dot" => Ok(OutputFormat::Dot),
            other => Err(Error::config_invalid(format!(
                "unknown output format '{other}', expected pdf, png, svg or dot"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Write `dot_source` into `output_dir` and render it to `format`.
///
/// The DOT source always lands in `project.dot` first. For rendered formats
/// the graphviz `dot` executable is invoked on it and the intermediate file
/// is removed afterwards unless `keep_dot` is set. Returns the path of the
/// final artifact.
pub fn write_graph(
    dot_source: &str,
    output_dir: &Path,
    format: OutputFormat,
    keep_dot: bool,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|err| {
        Error::from(err)
            .with_operation("dot::write_graph")
            .with_context("output_dir", output_dir.display().to_string())
    })?;

    let dot_path = output_dir.join(format!("{ARTIFACT_STEM}.dot"));
    fs::write(&dot_path, dot_source).map_err(|err| {
        Error::from(err)
            .with_operation("dot::write_graph")
            .with_context("path", dot_path.display().to_string())
    })?;
    debug!(path = %dot_path.display(), bytes = dot_source.len(), "wrote DOT source");

    if !format.is_rendered() {
        return Ok(dot_path);
    }

    let artifact = output_dir.join(format!("{}.{}", ARTIFACT_STEM, format.extension()));
    let output = Command::new("dot")
        .arg(format!("-T{}", format.extension()))
        .arg(&dot_path)
        .arg("-o")
        .arg(&artifact)
        .output()
        .map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                Error::graphviz_not_found()
                    .with_operation("dot::write_graph")
                    .set_source(err)
            } else {
                Error::from(err).with_operation("dot::write_graph")
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::render_failed(stderr.trim().to_string())
            .with_operation("dot::write_graph")
            .with_context("artifact", artifact.display().to_string()));
    }

    if !keep_dot && let Err(err) = fs::remove_file(&dot_path) {
        warn!(path = %dot_path.display(), error = %err, "could not remove intermediate DOT file");
    }

    info!(artifact = %artifact.display(), format = %format, "graph rendered");
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cocoagraph_error::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_parsing() {
        assert_eq!("pdf".parse::<OutputFormat>().unwrap(), OutputFormat::Pdf);
        assert_eq!("PNG".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
        assert_eq!("svg".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
        assert_eq!("dot".parse::<OutputFormat>().unwrap(), OutputFormat::Dot);

        let err = "tiff".parse::<OutputFormat>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert!(err.message().contains("tiff"));
    }

    #[test]
    fn test_format_display_and_extension() {
        assert_eq!(OutputFormat::Pdf.to_string(), "pdf");
        assert_eq!(OutputFormat::Dot.extension(), "dot");
        assert_eq!(OutputFormat::default(), OutputFormat::Pdf);
        assert!(OutputFormat::Pdf.is_rendered());
        assert!(!OutputFormat::Dot.is_rendered());
    }

    #[test]
    fn test_write_graph_dot_format_keeps_source() {
        let dir = tempfile::tempdir().unwrap();
        let artifact =
            write_graph("digraph g {\n}\n", dir.path(), OutputFormat::Dot, false).unwrap();

        assert_eq!(artifact, dir.path().join("project.dot"));
        let written = fs::read_to_string(&artifact).unwrap();
        assert_eq!(written, "digraph g {\n}\n");
    }

    #[test]
    fn test_write_graph_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("graphs");
        let artifact = write_graph("digraph g {\n}\n", &nested, OutputFormat::Dot, false).unwrap();
        assert!(artifact.starts_with(&nested));
        assert!(artifact.exists());
    }
}
