//! LUT import command

use anyhow::{Context, Result};
use tracing::info;

use crate::ImportArgs;

pub fn run(args: ImportArgs) -> Result<()> {
    let imported = super::import_file(&args.input)?;
    super::save_atlas(&args.output, &imported.atlas)?;
    info!(
        name = %imported.meta.name,
        output = %args.output.display(),
        "wrote atlas"
    );

    if let Some(meta_path) = &args.meta {
        let json = serde_json::to_string_pretty(&imported.meta)?;
        std::fs::write(meta_path, json)
            .with_context(|| format!("Failed to write: {}", meta_path.display()))?;
    }

    Ok(())
}
