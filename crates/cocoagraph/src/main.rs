use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[cfg(target_env = "msvc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use cocoagraph::OutputFormat;
use cocoagraph::ScanOptions;
use cocoagraph::run_main;
use cocoagraph_core::policy::{DEFAULT_IGNORED_DIRS, DEFAULT_IGNORED_NODES};

#[derive(Parser, Debug)]
#[command(
    name = "cocoagraph",
    about = "cocoagraph: draw the class and protocol hierarchy of an iOS/macOS project",
    version
)]
pub struct Cli {
    /// Project directory to scan recursively
    #[arg(value_name = "PROJECT_ROOT")]
    root: PathBuf,

    /// Directory for the rendered graph (defaults to the project root)
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Output format: 'pdf', 'png', 'svg' or 'dot'
    #[arg(long, value_name = "FORMAT", default_value = "pdf")]
    format: OutputFormat,

    /// Directory names to prune during traversal (repeatable)
    #[arg(
        long = "ignore-dir",
        value_name = "NAME",
        default_values_t = DEFAULT_IGNORED_DIRS.map(String::from)
    )]
    ignore_dirs: Vec<String>,

    /// Type names to keep out of the graph (repeatable)
    #[arg(
        long = "ignore-node",
        value_name = "NAME",
        default_values_t = DEFAULT_IGNORED_NODES.map(String::from)
    )]
    ignore_nodes: Vec<String>,

    /// Record every Swift conformance entry as a protocol instead of
    /// guessing that the first one is a superclass
    #[arg(long = "strict-protocols", default_value_t = false)]
    strict_protocols: bool,

    /// Keep the intermediate project.dot next to the rendered artifact
    #[arg(long = "keep-dot", default_value_t = false)]
    keep_dot: bool,

    /// Scan files in parallel
    #[arg(long, default_value_t = false)]
    parallel: bool,
}

pub fn run(args: Cli) -> ExitCode {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = ScanOptions {
        root: args.root,
        output_dir: args.output_dir,
        format: args.format,
        ignore_dirs: args.ignore_dirs,
        ignore_nodes: args.ignore_nodes,
        strict_protocols: args.strict_protocols,
        keep_dot: args.keep_dot,
        parallel: args.parallel,
    };

    let exit_code = match run_main(&opts) {
        Ok(summary) => {
            eprintln!(
                "Scanned {} files ({} skipped): {} classes, {} protocols, {} edges",
                summary.files_scanned,
                summary.files_skipped,
                summary.classes,
                summary.protocols,
                summary.class_edges + summary.protocol_edges
            );
            println!("{}", summary.artifact.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            ExitCode::FAILURE
        }
    };

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    eprintln!("Total time: {total_secs:.2}s");
    exit_code
}

pub fn main() -> ExitCode {
    let args = Cli::parse();
    run(args)
}
