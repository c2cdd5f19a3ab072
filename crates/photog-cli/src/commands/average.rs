//! Channel average command.
//!
//! Prints the per-channel mean, and optionally the gray-world white it
//! implies in XYZ.

use anyhow::Result;
use clap::Args;
use photog_color::{GrayWorld, IlluminantEstimator, average};
use photog_core::Layout;
use photog_primaries::WorkingSpace;

use super::{InputArgs, format_vec};

/// Arguments for the `average` command.
#[derive(Args, Debug)]
pub struct AverageArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Also print the gray-world white in XYZ
    #[arg(long)]
    pub xyz: bool,

    /// Working space the pixels are encoded in
    #[arg(long, default_value = "srgb")]
    pub space: WorkingSpace,
}

/// Run the average command.
pub fn run(args: AverageArgs, layout: Layout) -> Result<()> {
    let image = args.input.load(layout)?;

    println!("average: {}", format_vec(average(&image).to_array()));
    if args.xyz {
        let white = GrayWorld.estimate(&image, args.space)?;
        println!("white:   {}", format_vec(white.to_array()));
    }
    Ok(())
}
