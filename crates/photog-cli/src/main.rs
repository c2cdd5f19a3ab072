//! photog - color conversion and white balance on raw f32 buffers
//!
//! Images are headerless little-endian `f32` files holding `width * height * 3`
//! samples in the layout given by `--layout`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use photog_core::Layout;
use tracing_subscriber::EnvFilter;

mod commands;
mod raw;

use commands::{adapt::AdaptArgs, average::AverageArgs, convert::ConvertArgs};
use commands::{histogram::HistogramArgs, mask::MaskArgs};

#[derive(Parser)]
#[command(name = "photog")]
#[command(author, version, about = "Color conversion and chromatic adaptation for raw RGB buffers")]
#[command(long_about = "
Color conversion, image statistics and chromatic adaptation on headerless
little-endian f32 RGB buffers.

Examples:
  photog average shot.raw -W 640 -H 480
  photog convert shot.raw -W 640 -H 480 --op srgb-to-xyz -o shot_xyz.raw
  photog mask shot.raw -W 640 -H 480 -o valid.mask
  photog histogram shot.raw -W 640 -H 480 --mask valid.mask -o hist.raw
  photog adapt shot.raw -W 640 -H 480 --dest D50 -o balanced.raw
  photog --layout planar adapt shot.raw -W 640 -H 480 --source A --dest D65 -o out.raw
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Memory layout of every buffer read or written: planar, interleaved
    #[arg(long, global = true, env = "PHOTOG_LAYOUT", default_value = "interleaved")]
    layout: Layout,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert between sRGB, gamma-encoded RGB, linear RGB and XYZ
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Print the per-channel average (gray-world estimate)
    #[command(visible_alias = "avg")]
    Average(AverageArgs),

    /// Write the mask of pixels with all channels above zero
    Mask(MaskArgs),

    /// Toroidal log-chroma histogram of the masked pixels
    #[command(visible_alias = "hist")]
    Histogram(HistogramArgs),

    /// Chromatic adaptation (white balance)
    #[command(visible_alias = "a")]
    Adapt(AdaptArgs),
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
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

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.layout),
        Commands::Average(args) => commands::average::run(args, cli.layout),
        Commands::Mask(args) => commands::mask::run(args, cli.layout),
        Commands::Histogram(args) => commands::histogram::run(args, cli.layout),
        Commands::Adapt(args) => commands::adapt::run(args, cli.layout),
    }
}
