//! CLI command implementations

pub mod adapt;
pub mod average;
pub mod convert;
pub mod histogram;
pub mod mask;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use photog_core::{Image, Layout};
use tracing::info;

use crate::raw;

/// Input buffer shared by every command.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Input raw f32 RGB buffer
    pub input: PathBuf,

    /// Image width in pixels
    #[arg(short = 'W', long)]
    pub width: u32,

    /// Image height in pixels
    #[arg(short = 'H', long)]
    pub height: u32,
}

impl InputArgs {
    /// Loads the input image.
    pub fn load(&self, layout: Layout) -> Result<Image> {
        let image = raw::read_image(&self.input, self.width, self.height, layout)?;
        info!(
            path = %self.input.display(),
            width = self.width,
            height = self.height,
            %layout,
            "loaded"
        );
        Ok(image)
    }
}

/// Formats a vector as `a b c` with fixed precision.
pub fn format_vec(v: [f32; 3]) -> String {
    format!("{:.6} {:.6} {:.6}", v[0], v[1], v[2])
}
