//! volren - volume rendering and reconstruction helpers
//!
//! Builds transfer-function lookup tables and random COLMAP point clouds.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "volren")]
#[command(author, version, about = "Volume rendering and reconstruction helpers")]
#[command(long_about = "
Small tools for volume rendering and 3D reconstruction workflows.

Examples:
  volren tf -i \"0.3 255 0 0 0.2\" -i \"0.7 0 0 255 0.8\" -o lut.txt
  volren tf -f points.txt -l 256 -o out/lut.txt -p preview.png
  volren points -1 -1 -1 1 1 1 -n 10000 -o sparse/points3D.txt
  RUST_LOG=debug volren tf -f points.txt
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a transfer-function LUT from control points.
    /// Colors are 0..255, alpha 0..1. Implicitly starts at (0, 0, 0, 0) and ends at (255, 255, 255, 1).
    #[command(visible_alias = "transfer")]
    Tf(TfArgs),

    /// Generate random points inside a box and save them as COLMAP points3D.txt
    #[command(visible_alias = "pts")]
    Points(PointsArgs),
}

#[derive(Args)]
struct TfArgs {
    /// Control point as 'pos r g b a' (quote each one), position in [0..1]
    #[arg(short, long, num_args = 1..)]
    input: Vec<String>,

    /// Load control points from this file, one 'pos, r, g, b, a' per line
    #[arg(short = 'f', long)]
    infile: Option<PathBuf>,

    /// File to store the LUT in
    #[arg(short, long, default_value = "lut.txt")]
    outfile: PathBuf,

    /// Number of LUT entries
    #[arg(short, long, default_value = "2048")]
    lines: usize,

    /// Also write a PNG preview strip of the transfer function
    #[arg(short, long)]
    preview: Option<PathBuf>,
}

#[derive(Args)]
struct PointsArgs {
    /// Minimum X
    #[arg(allow_negative_numbers = true)]
    xmin: f64,
    /// Minimum Y
    #[arg(allow_negative_numbers = true)]
    ymin: f64,
    /// Minimum Z
    #[arg(allow_negative_numbers = true)]
    zmin: f64,
    /// Maximum X
    #[arg(allow_negative_numbers = true)]
    xmax: f64,
    /// Maximum Y
    #[arg(allow_negative_numbers = true)]
    ymax: f64,
    /// Maximum Z
    #[arg(allow_negative_numbers = true)]
    zmax: f64,

    /// Number of points
    #[arg(short, long, default_value = "50000")]
    num: usize,

    /// Output file
    #[arg(short, long, default_value = "points3D.txt")]
    output: PathBuf,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Tf(args) => commands::tf::run(args, cli.verbose),
        Commands::Points(args) => commands::points::run(args, cli.verbose),
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the level picked from flags.
fn init_tracing(verbose: u8, quiet: bool, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbose, quiet)));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    match log_file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(log_appender(path)?);
            builder.with_writer(writer).with_ansi(false).init();
            Ok(Some(guard))
        }
        None => {
            builder.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

/// Default filter directive for the verbosity flags.
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Opens the log file appender, creating its directory.
fn log_appender(path: &Path) -> Result<RollingFileAppender> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let name = path
        .file_name()
        .with_context(|| format!("Log file has no file name: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    Ok(tracing_appender::rolling::never(dir, name))
}
