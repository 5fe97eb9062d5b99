//! Temperature and tint as direct channel offsets.
//!
//! Not a chromatic-adaptation model. The coefficients differ between the
//! positive and negative halves of each slider and must match the shader
//! exactly.

use glam::Vec3;

/// Shift along a warm/cool axis. Range −1.0 to +1.0, 0.0 = neutral.
///
/// ```text
/// t > 0:  r += 0.1 t,  b −= 0.05 t
/// t ≤ 0:  b −= 0.1 t,  r += 0.05 t
/// ```
///
/// Evaluated with the signed value, so cooling raises blue by `0.1|t|` and
/// lowers red by `0.05|t|`.
pub fn apply_temperature(rgb: Vec3, temperature: f32) -> Vec3 {
    let mut out = rgb;
    if temperature > 0.0 {
        out.x += temperature * 0.1;
        out.z -= temperature * 0.05;
    } else {
        out.z -= temperature * 0.1;
        out.x += temperature * 0.05;
    }
    out
}

/// Shift along a green/magenta axis. Range −1.0 to +1.0, 0.0 = neutral.
///
/// ```text
/// t > 0:  g += 0.1 t
/// t ≤ 0:  r −= 0.1 t,  b −= 0.1 t
/// ```
pub fn apply_tint(rgb: Vec3, tint: f32) -> Vec3 {
    let mut out = rgb;
    if tint > 0.0 {
        out.y += tint * 0.1;
    } else {
        out.x -= tint * 0.1;
        out.z -= tint * 0.1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).abs().max_element() < EPSILON, "{a:?} vs {b:?}");
    }

    #[test]
    fn test_temperature_zero_is_identity() {
        let rgb = Vec3::new(0.5, 0.4, 0.3);
        assert_eq!(apply_temperature(rgb, 0.0), rgb);
    }

    #[test]
    fn test_temperature_warm_coefficients() {
        let out = apply_temperature(Vec3::splat(0.5), 1.0);
        assert_close(out, Vec3::new(0.6, 0.5, 0.45));
    }

    #[test]
    fn test_temperature_cool_coefficients() {
        let out = apply_temperature(Vec3::splat(0.5), -1.0);
        assert_close(out, Vec3::new(0.45, 0.5, 0.6));
    }

    #[test]
    fn test_temperature_is_asymmetric() {
        let warm = apply_temperature(Vec3::splat(0.5), 0.5);
        let cool = apply_temperature(Vec3::splat(0.5), -0.5);
        assert_close(warm, Vec3::new(0.55, 0.5, 0.475));
        assert_close(cool, Vec3::new(0.475, 0.5, 0.55));
    }

    #[test]
    fn test_tint_positive_lifts_green() {
        assert_close(apply_tint(Vec3::splat(0.5), 1.0), Vec3::new(0.5, 0.6, 0.5));
    }

    #[test]
    fn test_tint_negative_lifts_red_and_blue() {
        assert_close(apply_tint(Vec3::splat(0.5), -0.5), Vec3::new(0.55, 0.5, 0.55));
    }
}
