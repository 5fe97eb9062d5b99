//! Per-session render parameters.
//!
//! `RenderParams` is what the editor's sliders write and what both the CPU
//! pipeline and the shader uniforms read. Persisting it is the caller's job;
//! serde is derived so a record store can keep it as JSON.

use serde::{Deserialize, Serialize};

use crate::atlas::layout::{ATLAS_DIM, CANONICAL_SIZE, GRID_DIM};

/// Valid `strength` range, in percent.
pub const STRENGTH_RANGE: (f32, f32) = (0.0, 100.0);
/// Valid `exposure` range, in stops.
pub const EXPOSURE_RANGE: (f32, f32) = (-2.0, 2.0);
/// Valid range of the remaining unit sliders.
pub const UNIT_RANGE: (f32, f32) = (-1.0, 1.0);

/// LUT strength plus tone adjustments for one edit session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// LUT contribution in percent, `[0, 100]`. Default 100.
    pub strength: f32,
    /// Exposure in stops, `[-2, 2]`.
    pub exposure: f32,
    /// Contrast around mid-grey, `[-1, 1]`.
    pub contrast: f32,
    /// Saturation, `[-1, 1]`. −1 is greyscale.
    pub saturation: f32,
    /// Warm (+) / cool (−), `[-1, 1]`.
    pub temperature: f32,
    /// Green (+) / magenta (−), `[-1, 1]`.
    pub tint: f32,
}

impl Default for RenderParams {
    /// Full-strength LUT with no grading adjustments.
    fn default() -> Self {
        Self {
            strength: 100.0,
            exposure: 0.0,
            contrast: 0.0,
            saturation: 0.0,
            temperature: 0.0,
            tint: 0.0,
        }
    }
}

impl RenderParams {
    /// Parameters that leave every pixel unchanged apart from the final clamp.
    pub const PASSTHROUGH: Self = Self {
        strength: 0.0,
        exposure: 0.0,
        contrast: 0.0,
        saturation: 0.0,
        temperature: 0.0,
        tint: 0.0,
    };

    /// Copy with every field clamped into its slider range.
    ///
    /// The pipeline never calls this; UI and config layers do before invoking it.
    pub fn clamped(&self) -> Self {
        let unit = |v: f32| v.clamp(UNIT_RANGE.0, UNIT_RANGE.1);
        Self {
            strength: self.strength.clamp(STRENGTH_RANGE.0, STRENGTH_RANGE.1),
            exposure: self.exposure.clamp(EXPOSURE_RANGE.0, EXPOSURE_RANGE.1),
            contrast: unit(self.contrast),
            saturation: unit(self.saturation),
            temperature: unit(self.temperature),
            tint: unit(self.tint),
        }
    }

    /// LUT blend factor in `[0, 1]`.
    #[inline]
    pub fn strength_factor(&self) -> f32 {
        self.strength / 100.0
    }

    /// True when no tone adjustment is active.
    pub fn adjustments_are_neutral(&self) -> bool {
        self.exposure == 0.0
            && self.contrast == 0.0
            && self.saturation == 0.0
            && self.temperature == 0.0
            && self.tint == 0.0
    }

    /// True when the whole pipeline reduces to a clamp.
    pub fn is_identity(&self) -> bool {
        self.strength == 0.0 && self.adjustments_are_neutral()
    }

    /// Decode from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// GPU-compatible uniform block for hosts that grade on the GPU with the same atlas.
///
/// Mirrors a WGSL `var<uniform> params: RenderUniforms` binding laid out as
/// ten `f32`s followed by a `vec2<f32>` pad, 48 bytes in total. The atlas is
/// bound alongside it as a 512×512 `texture_2d<f32>`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RenderUniforms {
    /// Blend factor in `[0, 1]` (already divided by 100).
    pub strength: f32,
    pub exposure: f32,
    pub contrast: f32,
    pub saturation: f32,
    pub temperature: f32,
    pub tint: f32,
    /// Canonical lattice size (64).
    pub lut_size: f32,
    /// Tiles per atlas row (8).
    pub grid_dim: f32,
    /// Atlas width in pixels (512).
    pub atlas_width: f32,
    /// Atlas height in pixels (512).
    pub atlas_height: f32,
    _pad: [f32; 2],
}

impl RenderUniforms {
    /// Pack `params` for upload.
    pub fn from_params(params: &RenderParams) -> Self {
        Self {
            strength: params.strength_factor(),
            exposure: params.exposure,
            contrast: params.contrast,
            saturation: params.saturation,
            temperature: params.temperature,
            tint: params.tint,
            lut_size: CANONICAL_SIZE as f32,
            grid_dim: GRID_DIM as f32,
            atlas_width: ATLAS_DIM as f32,
            atlas_height: ATLAS_DIM as f32,
            _pad: [0.0; 2],
        }
    }

    /// Raw bytes for a uniform buffer write.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
