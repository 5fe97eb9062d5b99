//! Per-pixel color grade — LUT blend followed by tone adjustments.

use glam::Vec3;

use crate::atlas::{Atlas, sample_lut};
use crate::grading::sliders::{apply_contrast, apply_exposure, apply_saturation};
use crate::grading::white_balance::{apply_temperature, apply_tint};
use crate::transform::params::RenderParams;

/// Grade one pixel. The fragment shader mirrors this exactly.
///
/// 1. Clamp the source to `[0, 1]`, look it up in the atlas and blend by
///    `strength / 100` (skipped when strength is 0)
/// 2. Exposure
/// 3. Contrast
/// 4. Saturation
/// 5. Temperature
/// 6. Tint
/// 7. Clamp to `[0, 1]`
///
/// Steps 2–6 run only for non-zero parameters, always in this order.
pub fn apply(atlas: &Atlas, params: &RenderParams, source: Vec3) -> Vec3 {
    let mut c = source.clamp(Vec3::ZERO, Vec3::ONE);

    if params.strength != 0.0 {
        let lut = sample_lut(atlas, c);
        c = c.lerp(lut, params.strength_factor());
    }

    if params.exposure != 0.0 {
        c = apply_exposure(c, params.exposure);
    }
    if params.contrast != 0.0 {
        c = apply_contrast(c, params.contrast);
    }
    if params.saturation != 0.0 {
        c = apply_saturation(c, params.saturation);
    }
    if params.temperature != 0.0 {
        c = apply_temperature(c, params.temperature);
    }
    if params.tint != 0.0 {
        c = apply_tint(c, params.tint);
    }

    c.clamp(Vec3::ZERO, Vec3::ONE)
}

/// Grade one straight-alpha RGBA pixel. Alpha passes through untouched.
#[inline]
pub fn apply_rgba(atlas: &Atlas, params: &RenderParams, rgba: [f32; 4]) -> [f32; 4] {
    let out = apply(atlas, params, Vec3::new(rgba[0], rgba[1], rgba[2]));
    [out.x, out.y, out.z, rgba[3]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::build;
    use crate::lut::Lattice;

    const EPSILON: f32 = 1e-6;

    fn inverted_atlas() -> Atlas {
        let mut lattice = Lattice::identity(17);
        for s in &mut lattice.samples {
            *s = s.map(|v| 1.0 - v);
        }
        build(&lattice)
    }

    #[test]
    fn test_passthrough_clamps_only() {
        let atlas = inverted_atlas();
        let out = apply(&atlas, &RenderParams::PASSTHROUGH, Vec3::new(1.4, 0.3, -0.2));
        assert_eq!(out, Vec3::new(1.0, 0.3, 0.0));
    }

    #[test]
    fn test_full_strength_uses_lut() {
        let atlas = inverted_atlas();
        let out = apply(&atlas, &RenderParams::default(), Vec3::new(0.0, 0.0, 0.0));
        assert!((out - Vec3::ONE).abs().max_element() < 2.0 / 255.0, "{out:?}");
    }

    #[test]
    fn test_half_strength_blends() {
        let atlas = inverted_atlas();
        let params = RenderParams {
            strength: 50.0,
            ..RenderParams::default()
        };
        let out = apply(&atlas, &params, Vec3::ZERO);
        assert!((out - Vec3::splat(0.5)).abs().max_element() < 1.0 / 255.0, "{out:?}");
    }

    #[test]
    fn test_adjustments_without_lut() {
        let atlas = inverted_atlas();
        let params = RenderParams {
            exposure: 1.0,
            ..RenderParams::PASSTHROUGH
        };
        let out = apply(&atlas, &params, Vec3::new(0.1, 0.2, 0.3));
        assert!((out - Vec3::new(0.2, 0.4, 0.6)).abs().max_element() < EPSILON);
    }

    #[test]
    fn test_output_is_clamped() {
        let atlas = inverted_atlas();
        let params = RenderParams {
            exposure: 2.0,
            contrast: 1.0,
            ..RenderParams::PASSTHROUGH
        };
        let out = apply(&atlas, &params, Vec3::new(0.9, 0.05, 0.5));
        assert_eq!(out.x, 1.0);
        assert_eq!(out.y, 0.0);
    }

    #[test]
    fn test_fixed_order_exposure_before_contrast() {
        let atlas = inverted_atlas();
        let params = RenderParams {
            exposure: 0.5,
            contrast: 0.5,
            ..RenderParams::PASSTHROUGH
        };
        let src = Vec3::new(0.3, 0.3, 0.3);
        let want = apply_contrast(apply_exposure(src, 0.5), 0.5);
        let out = apply(&atlas, &params, src);
        assert!((out - want).abs().max_element() < EPSILON);
    }

    #[test]
    fn test_apply_rgba_passes_alpha() {
        let atlas = inverted_atlas();
        let out = apply_rgba(&atlas, &RenderParams::default(), [0.2, 0.4, 0.6, 0.25]);
        assert_eq!(out[3], 0.25);
    }
}
