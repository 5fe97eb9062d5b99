//! lutify - import .cube LUTs and grade images with them

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "lutify")]
#[command(author, version, about = "3D LUT color grading for photos")]
#[command(long_about = "
Imports .cube 3D LUTs into a fixed 512x512 atlas and grades images with them.

Examples:
  lutify info look.cube                        # Show LUT size, domain, title
  lutify import look.cube -o look.rgba         # Build and store the atlas blob
  lutify import look.cube -o look.png --meta look.json
  lutify apply photo.jpg -l look.cube -o out.png --strength 80 --exposure 0.3
  lutify apply photo.jpg -l look.rgba -o preview.png --preview
  lutify identity -s 33 -o neutral.cube
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and validate a .cube file
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Convert a .cube file into an atlas blob
    Import(ImportArgs),

    /// Grade an image through a LUT
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),

    /// Write an identity .cube file
    Identity(IdentityArgs),
}

#[derive(Args)]
pub struct InfoArgs {
    /// Input .cube file
    input: PathBuf,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Input .cube file
    input: PathBuf,

    /// Output atlas: raw RGBA8 blob, or PNG when the extension is .png
    #[arg(short, long)]
    output: PathBuf,

    /// Also write LUT metadata as JSON
    #[arg(long)]
    meta: Option<PathBuf>,
}

#[derive(Args)]
pub struct ApplyArgs {
    /// Input image
    input: PathBuf,

    /// LUT: .cube text, .png atlas, or raw atlas blob
    #[arg(short, long)]
    lut: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Render parameters as JSON; flags below override its fields
    #[arg(long)]
    params: Option<PathBuf>,

    /// LUT strength in percent (0-100)
    #[arg(long)]
    strength: Option<f32>,

    /// Exposure in stops (-2..2)
    #[arg(long, allow_hyphen_values = true)]
    exposure: Option<f32>,

    /// Contrast (-1..1)
    #[arg(long, allow_hyphen_values = true)]
    contrast: Option<f32>,

    /// Saturation (-1..1)
    #[arg(long, allow_hyphen_values = true)]
    saturation: Option<f32>,

    /// Temperature, warm + / cool - (-1..1)
    #[arg(long, allow_hyphen_values = true)]
    temperature: Option<f32>,

    /// Tint, green + / magenta - (-1..1)
    #[arg(long, allow_hyphen_values = true)]
    tint: Option<f32>,

    /// Render a downsampled preview instead of a full-resolution export
    #[arg(long)]
    preview: bool,
}

#[derive(Args)]
pub struct IdentityArgs {
    /// Lattice size per axis
    #[arg(short, long, default_value = "33")]
    size: u32,

    /// Output .cube file
    #[arg(short, long)]
    output: PathBuf,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let config = config::CliConfig::from_env();

    match cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Import(args) => commands::import::run(args),
        Commands::Apply(args) => commands::apply::run(args, &config),
        Commands::Identity(args) => commands::identity::run(args),
    }
}
