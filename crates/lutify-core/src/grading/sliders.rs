//! Slider-based tone adjustments (exposure, contrast, saturation).
//!
//! Each function is a pure map over a display-referred RGB triple. Nothing here
//! clamps; the pipeline clamps once after the last adjustment.

use glam::Vec3;

/// Rec. 601 luma weights used for the desaturation reference.
pub const LUMA_REC601: Vec3 = Vec3::new(0.299, 0.587, 0.114);

/// Contrast pivot. Mid-grey in display-referred values.
pub const CONTRAST_PIVOT: f32 = 0.5;

/// Scale by `2^stops`.
///
/// ```text
/// out = in × 2^stops
/// ```
///
/// `stops = 0.0` produces no change.
pub fn apply_exposure(rgb: Vec3, stops: f32) -> Vec3 {
    rgb * stops.exp2()
}

/// Linear contrast around mid-grey.
///
/// ```text
/// out = (in − 0.5) × (1 + contrast) + 0.5
/// ```
///
/// `contrast = 0.0` produces no change; `-1.0` collapses everything to 0.5.
pub fn apply_contrast(rgb: Vec3, contrast: f32) -> Vec3 {
    (rgb - Vec3::splat(CONTRAST_PIVOT)) * (1.0 + contrast) + Vec3::splat(CONTRAST_PIVOT)
}

/// Scale chroma relative to Rec. 601 luma.
///
/// ```text
/// luma = dot(in, [0.299, 0.587, 0.114])
/// out  = mix(luma, in, 1 + saturation)
/// ```
///
/// `saturation = 0.0` produces no change; `-1.0` gives greyscale.
pub fn apply_saturation(rgb: Vec3, saturation: f32) -> Vec3 {
    let luma = Vec3::splat(rgb.dot(LUMA_REC601));
    luma.lerp(rgb, 1.0 + saturation)
}
