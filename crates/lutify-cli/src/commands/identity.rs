//! Identity LUT generator

use anyhow::{Context, Result, bail};
use lutify_core::Lattice;

use crate::IdentityArgs;

pub fn run(args: IdentityArgs) -> Result<()> {
    if !(2..=256).contains(&args.size) {
        bail!("LUT size must be between 2 and 256, got {}", args.size);
    }
    let mut lattice = Lattice::identity(args.size);
    lattice.title = Some(format!("Identity {}", args.size));
    std::fs::write(&args.output, lattice.to_cube_string())
        .with_context(|| format!("Failed to write: {}", args.output.display()))
}
