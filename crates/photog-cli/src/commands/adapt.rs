//! Chromatic adaptation command.
//!
//! Without `--source` the scene white is estimated with the gray-world
//! assumption. A white is either an illuminant name (`D65`, `A`, ...) or an
//! explicit `X,Y,Z` triple.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Result, bail};
use clap::Args;
use photog_color::{chromadapt_auto, chromadapt_diy};
use photog_core::Layout;
use photog_math::Vec3;
use photog_primaries::{ChromadaptMethod, Illuminant, WorkingSpace, reference_white};
use tracing::info;

use super::InputArgs;
use crate::raw;

/// A white point given on the command line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum White {
    /// Standard illuminant.
    Named(Illuminant),
    /// Explicit XYZ tristimulus.
    Xyz(Vec3),
}

impl White {
    /// XYZ of this white.
    pub fn xyz(self) -> Vec3 {
        match self {
            White::Named(i) => reference_white(i),
            White::Xyz(v) => v,
        }
    }
}

impl FromStr for White {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if !s.contains(',') {
            return Ok(White::Named(s.parse()?));
        }
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<f32>())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let [x, y, z] = parts[..] else {
            bail!("expected X,Y,Z, got {s:?}");
        };
        Ok(White::Xyz(Vec3::new(x, y, z)))
    }
}

/// Arguments for the `adapt` command.
#[derive(Args, Debug)]
pub struct AdaptArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output raw f32 RGB buffer
    #[arg(short, long)]
    pub output: PathBuf,

    /// Source white (illuminant name or X,Y,Z); estimated when omitted
    #[arg(short, long)]
    pub source: Option<White>,

    /// Destination white (illuminant name or X,Y,Z)
    #[arg(short, long, default_value = "D65")]
    pub dest: White,

    /// Working space the pixels are encoded in
    #[arg(long, default_value = "srgb")]
    pub space: WorkingSpace,

    /// Cone response model
    #[arg(long, default_value = "bradford")]
    pub method: ChromadaptMethod,
}

/// Run the adapt command.
pub fn run(args: AdaptArgs, layout: Layout) -> Result<()> {
    let image = args.input.load(layout)?;

    let out = match (args.source, args.dest) {
        (None, White::Named(dest)) => {
            info!(%dest, method = %args.method, "adapting from gray-world estimate");
            chromadapt_auto(&image, args.space, args.method, dest)?
        }
        (None, White::Xyz(_)) => {
            bail!("an explicit XYZ destination needs an explicit --source white");
        }
        (Some(source), dest) => {
            info!(source = ?source, dest = ?dest, method = %args.method, "adapting");
            chromadapt_diy(&image, args.space, args.method, source.xyz(), dest.xyz())?
        }
    };

    raw::write_image(&args.output, &out)?;
    info!(path = %args.output.display(), "saved");
    Ok(())
}
