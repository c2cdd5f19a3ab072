//! Zero mask command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use photog_color::zero_mask;
use photog_core::Layout;
use tracing::info;

use super::InputArgs;
use crate::raw;

/// Arguments for the `mask` command.
#[derive(Args, Debug)]
pub struct MaskArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output mask, one byte per pixel
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Run the mask command.
pub fn run(args: MaskArgs, layout: Layout) -> Result<()> {
    let image = args.input.load(layout)?;
    let mask = zero_mask(&image);

    println!("valid: {} / {}", mask.count(), image.pixel_count());
    raw::write_mask(&args.output, &mask)?;
    info!(path = %args.output.display(), "saved");
    Ok(())
}
