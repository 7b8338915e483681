use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pixel2ansi::config::{AnalysisConfig, DEFAULT_WORKERS};
use pixel2ansi::{HasRecoverySuggestion, Pixel2AnsiError};
use tracing_subscriber::EnvFilter;

const ABOUT: &str = "\
pixel2ansi analyzes pixel art images. It finds the smallest repeating pixel
block, tolerates small color variations when asked to, and prints the image
as ANSI art in the terminal with optional transparency and cropping. Rows
and columns are scanned in parallel.

Lossless formats such as PNG or BMP work best. For JPEG input raise
--tolerance (something around 150 is a reasonable starting point).";

/// Detect the pixel size of upscaled pixel art and print it as ANSI blocks
#[derive(Parser, Debug)]
#[command(name = "pixel2ansi", version)]
#[command(about = "Detect the pixel size of upscaled pixel art and print it as ANSI blocks")]
struct Cli {
    /// Log progress to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Get unit pixel and grid dimensions
    Inspect(InspectArgs),
    /// Print image as ANSI blocks
    Print(PrintArgs),
    /// Get the current version number
    Version,
    /// Show about info
    About,
}

#[derive(Args, Debug)]
struct ScanArgs {
    /// Number of concurrent workers
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Color tolerance for grouping similar colors
    #[arg(long, default_value_t = 0)]
    tolerance: u32,
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// Image file to analyze
    file: PathBuf,

    #[command(flatten)]
    scan: ScanArgs,
}

#[derive(Args, Debug)]
struct PrintArgs {
    /// Image file to print
    file: PathBuf,

    #[command(flatten)]
    scan: ScanArgs,

    /// Transparent color (HEX or tl, tr, bl, br)
    #[arg(short, long)]
    transparent: Option<String>,

    /// Crop transparent pixels from the output
    #[arg(long)]
    crop: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Inspect(args) => {
            let config = AnalysisConfig::new(args.scan.workers, args.scan.tolerance, None, false);
            let report = pixel2ansi::inspect_file(&args.file, &config).map_err(with_hint)?;
            println!("{report}");
        }
        Command::Print(args) => {
            let config = AnalysisConfig::new(
                args.scan.workers,
                args.scan.tolerance,
                args.transparent,
                args.crop,
            );
            let stdout = io::stdout();
            let mut out = io::BufWriter::new(stdout.lock());
            pixel2ansi::print_file(&args.file, &config, &mut out).map_err(with_hint)?;
            out.flush().context("Failed to flush output")?;
        }
        Command::Version => println!("{}", env!("CARGO_PKG_VERSION")),
        Command::About => println!("{ABOUT}"),
    }
    Ok(())
}

/// Logs go to stderr so the rendered art on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Convert to `anyhow`, printing the recovery hint first when there is one.
fn with_hint(error: Pixel2AnsiError) -> anyhow::Error {
    if let Some(hint) = error.recovery_suggestion() {
        eprintln!("hint: {hint}");
    }
    let operation = error.context().operation.clone();
    let error = anyhow::Error::new(error);
    match operation {
        Some(operation) => error.context(format!("{operation} failed")),
        None => error,
    }
}
