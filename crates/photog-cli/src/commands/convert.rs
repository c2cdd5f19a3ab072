//! Color conversion command.
//!
//! Runs one of the image conversions of `photog_color::convert` and writes
//! the result, optionally re-addressed into another layout.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use photog_color::convert;
use photog_core::{Image, Layout};
use photog_primaries::{WorkingSpace, rgb_to_xyz_matrix, xyz_to_rgb_matrix};
use tracing::info;

use super::InputArgs;
use crate::raw;

/// Conversion to run.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conversion {
    SrgbToLinear,
    LinearToSrgb,
    RgbToLinear,
    LinearToRgb,
    RgbToXyz,
    XyzToRgb,
    SrgbToXyz,
    XyzToSrgb,
}

/// Arguments for the `convert` command.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output raw f32 RGB buffer
    #[arg(short, long)]
    pub output: PathBuf,

    /// Conversion to apply
    #[arg(long)]
    pub op: Conversion,

    /// Working space for the gamma and matrix conversions
    #[arg(long, default_value = "srgb")]
    pub space: WorkingSpace,

    /// Override the working space gamma
    #[arg(short, long)]
    pub gamma: Option<f32>,

    /// Write the output in this layout instead of the input one
    #[arg(long)]
    pub out_layout: Option<Layout>,
}

/// Applies `op` in the given working space.
pub fn apply(image: &Image, op: Conversion, space: WorkingSpace, gamma: f32) -> Image {
    match op {
        Conversion::SrgbToLinear => convert::srgb_to_linear(image),
        Conversion::LinearToSrgb => convert::linear_to_srgb(image),
        Conversion::RgbToLinear => convert::rgb_to_linear(image, gamma),
        Conversion::LinearToRgb => convert::linear_to_rgb(image, gamma),
        Conversion::RgbToXyz => convert::rgb_to_xyz(image, gamma, &rgb_to_xyz_matrix(space)),
        Conversion::XyzToRgb => convert::xyz_to_rgb(image, gamma, &xyz_to_rgb_matrix(space)),
        Conversion::SrgbToXyz => convert::srgb_to_xyz(image),
        Conversion::XyzToSrgb => convert::xyz_to_srgb(image),
    }
}

/// Run the convert command.
pub fn run(args: ConvertArgs, layout: Layout) -> Result<()> {
    let image = args.input.load(layout)?;
    let gamma = args.gamma.unwrap_or_else(|| photog_primaries::gamma(args.space));
    info!(op = ?args.op, space = %args.space, gamma, "converting");

    let mut out = apply(&image, args.op, args.space, gamma);
    if let Some(target) = args.out_layout {
        out = out.to_layout(target);
    }

    raw::write_image(&args.output, &out)?;
    info!(path = %args.output.display(), layout = %out.layout(), "saved");
    Ok(())
}
