//! LUT grading command

use anyhow::{Context, Result};
use lutify_core::{RenderParams, render_export, render_preview};
use tracing::{debug, info};

use crate::ApplyArgs;
use crate::config::CliConfig;

pub fn run(args: ApplyArgs, config: &CliConfig) -> Result<()> {
    let params = resolve_params(&args)?;
    debug!(?params, "render parameters");

    let atlas = super::load_atlas(&args.lut)?;
    let image = super::load_image(&args.input)?;
    info!(
        input = %args.input.display(),
        width = image.width,
        height = image.height,
        depth = %image.source_bit_depth,
        "grading"
    );

    let graded = if args.preview {
        render_preview(&atlas, &params, &image, &config.preview)
    } else {
        render_export(&atlas, &params, &image)
    };

    super::save_image(&args.output, &graded)?;
    info!(output = %args.output.display(), "done");
    Ok(())
}

/// JSON file first, then individual flags, then clamp into slider ranges.
fn resolve_params(args: &ApplyArgs) -> Result<RenderParams> {
    let base = match &args.params {
        Some(path) => {
            let json = super::read_text(path)?;
            RenderParams::from_json(&json)
                .with_context(|| format!("Invalid render parameters: {}", path.display()))?
        }
        None => RenderParams::default(),
    };
    Ok(apply_overrides(base, args))
}

fn apply_overrides(mut params: RenderParams, args: &ApplyArgs) -> RenderParams {
    let overrides = [
        (&mut params.strength, args.strength),
        (&mut params.exposure, args.exposure),
        (&mut params.contrast, args.contrast),
        (&mut params.saturation, args.saturation),
        (&mut params.temperature, args.temperature),
        (&mut params.tint, args.tint),
    ];
    for (field, value) in overrides {
        if let Some(v) = value {
            *field = v;
        }
    }
    params.clamped()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> ApplyArgs {
        ApplyArgs {
            input: PathBuf::from("in.png"),
            lut: PathBuf::from("look.cube"),
            output: PathBuf::from("out.png"),
            params: None,
            strength: None,
            exposure: None,
            contrast: None,
            saturation: None,
            temperature: None,
            tint: None,
            preview: false,
        }
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let base = RenderParams {
            strength: 60.0,
            tint: 0.2,
            ..RenderParams::default()
        };
        let mut a = args();
        a.exposure = Some(0.5);
        a.tint = Some(-0.3);
        let p = apply_overrides(base, &a);
        assert_eq!(p.strength, 60.0);
        assert_eq!(p.exposure, 0.5);
        assert_eq!(p.tint, -0.3);
    }

    #[test]
    fn test_overrides_are_clamped() {
        let mut a = args();
        a.strength = Some(250.0);
        a.exposure = Some(-9.0);
        let p = apply_overrides(RenderParams::default(), &a);
        assert_eq!(p.strength, 100.0);
        assert_eq!(p.exposure, -2.0);
    }
}
