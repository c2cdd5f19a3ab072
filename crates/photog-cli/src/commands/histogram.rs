//! Toroidal histogram command.
//!
//! Uses the zero mask of the input unless a mask file is given. Prints the
//! peak cell and occupancy; `-o` also writes the 64x64 grid.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use photog_color::histogram::BIN_WIDTH;
use photog_color::{toroidal_histogram, zero_mask};
use photog_core::Layout;
use tracing::info;

use super::InputArgs;
use crate::raw;

/// Arguments for the `histogram` command.
#[derive(Args, Debug)]
pub struct HistogramArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Byte-per-pixel mask selecting the pixels to count
    #[arg(short, long)]
    pub mask: Option<PathBuf>,

    /// Output raw f32 histogram (64x64, u-major)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the histogram command.
pub fn run(args: HistogramArgs, layout: Layout) -> Result<()> {
    let image = args.input.load(layout)?;
    let mask = match &args.mask {
        Some(path) => raw::read_mask(path, image.width(), image.height())?,
        None => zero_mask(&image),
    };

    let hist = toroidal_histogram(&image, &mask)?;
    let (u, v, peak) = hist.peak();
    println!("cells:  {}", hist.nonzero().count());
    println!("sum:    {:.6}", hist.sum());
    println!("peak:   ({u}, {v}) = {peak:.6}");
    println!("width:  {BIN_WIDTH}");

    if let Some(path) = &args.output {
        raw::write_histogram(path, &hist)?;
        info!(path = %path.display(), "saved");
    }
    Ok(())
}
