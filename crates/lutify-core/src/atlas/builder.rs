//! Lattice → atlas canonicalization.
//!
//! A 64³ lattice is copied straight into the atlas. Any other size is
//! trilinearly resampled onto the 64³ grid first. Both paths floor to 8 bits.
//!
//! # Complexity
//! - O(64³) texel writes, parallel over atlas rows
//! - Resample path: 8 lattice fetches + 7 lerps per texel

use rayon::prelude::*;

use crate::atlas::Atlas;
use crate::atlas::layout::{ATLAS_DIM, ATLAS_PIXELS, CANONICAL_SIZE, lattice_coord};
use crate::lut::Lattice;

/// Canonicalize `lattice` into a 512×512 atlas.
///
/// Expects a lattice that passed [`validate`](crate::lut::validate). Missing
/// samples read as black rather than panicking.
pub fn build(lattice: &Lattice) -> Atlas {
    let direct = lattice.size == CANONICAL_SIZE;
    if direct {
        tracing::debug!("building atlas from 64³ lattice (direct copy)");
    } else {
        tracing::debug!(size = lattice.size, "building atlas by trilinear resampling");
    }

    let mut pixels = vec![[0_u8, 0, 0, 255]; ATLAS_PIXELS];
    pixels
        .par_chunks_mut(ATLAS_DIM as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.iter_mut().enumerate() {
                let [r, g, b] = lattice_coord(x as u32, y as u32);
                let rgb = if direct {
                    lattice.sample(r, g, b)
                } else {
                    trilinear(lattice, source_coord(lattice.size, [r, g, b]))
                };
                *px = [quantize(rgb[0]), quantize(rgb[1]), quantize(rgb[2]), 255];
            }
        });

    Atlas::from_pixels(pixels)
}

/// Map a canonical grid index onto continuous source-lattice coordinates.
///
/// `t / 63 * (size - 1)`, so index 0 and 63 land exactly on the lattice corners.
#[inline]
fn source_coord(size: u32, rgb: [u32; 3]) -> [f32; 3] {
    let span = size.saturating_sub(1) as f32;
    let last = (CANONICAL_SIZE - 1) as f32;
    rgb.map(|t| t as f32 / last * span)
}

/// Trilinear lookup at continuous lattice coordinates `pos` (each in `[0, size-1]`).
///
/// Interpolates along blue first, then green, then red. The upper corner is
/// clamped to `size - 1`; nothing wraps.
pub fn trilinear(lattice: &Lattice, pos: [f32; 3]) -> [f32; 3] {
    if lattice.size == 0 {
        return [0.0; 3];
    }
    let max = lattice.size - 1;

    let axis = |p: f32| -> (u32, u32, f32) {
        let p = p.clamp(0.0, max as f32);
        let lo = p.floor() as u32;
        let hi = (lo + 1).min(max);
        (lo, hi, p - lo as f32)
    };
    let (r0, r1, rf) = axis(pos[0]);
    let (g0, g1, gf) = axis(pos[1]);
    let (b0, b1, bf) = axis(pos[2]);

    let c000 = lattice.sample(r0, g0, b0);
    let c001 = lattice.sample(r0, g0, b1);
    let c010 = lattice.sample(r0, g1, b0);
    let c011 = lattice.sample(r0, g1, b1);
    let c100 = lattice.sample(r1, g0, b0);
    let c101 = lattice.sample(r1, g0, b1);
    let c110 = lattice.sample(r1, g1, b0);
    let c111 = lattice.sample(r1, g1, b1);

    let c00 = lerp3(c000, c001, bf);
    let c01 = lerp3(c010, c011, bf);
    let c10 = lerp3(c100, c101, bf);
    let c11 = lerp3(c110, c111, bf);

    let c0 = lerp3(c00, c01, gf);
    let c1 = lerp3(c10, c11, gf);

    lerp3(c0, c1, rf)
}

#[inline]
fn lerp3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// `floor(v * 255)` clamped to a byte.
#[inline]
pub(crate) fn quantize(v: f32) -> u8 {
    (v * 255.0).floor().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn ramp_lattice(size: u32) -> Lattice {
        // Non-identity: channels are swapped and scaled.
        let mut lattice = Lattice::identity(size);
        for s in &mut lattice.samples {
            *s = [s[2], s[0] * 0.5, s[1]];
        }
        lattice
    }

    #[test]
    fn test_quantize_floors_and_clamps() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(1.0), 255);
        assert_eq!(quantize(0.5), 127);
        assert_eq!(quantize(-0.2), 0);
        assert_eq!(quantize(1.7), 255);
        assert_eq!(quantize(f32::NAN), 0);
    }

    #[test]
    fn test_trilinear_hits_lattice_points() {
        let lattice = ramp_lattice(5);
        for &(r, g, b) in &[(0, 0, 0), (4, 0, 2), (1, 3, 4), (4, 4, 4)] {
            let got = trilinear(&lattice, [r as f32, g as f32, b as f32]);
            let want = lattice.sample(r, g, b);
            for c in 0..3 {
                assert!((got[c] - want[c]).abs() < EPSILON, "({r},{g},{b}) ch{c}");
            }
        }
    }

    #[test]
    fn test_trilinear_midpoint_averages_corners() {
        let lattice = Lattice::new(
            2,
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
                [1.0, 0.0, 1.0],
                [0.0, 1.0, 1.0],
                [1.0, 1.0, 1.0],
            ],
        );
        let got = trilinear(&lattice, [0.5, 0.5, 0.5]);
        for c in got {
            assert!((c - 0.5).abs() < EPSILON);
        }
    }

    #[test]
    fn test_trilinear_clamps_outside_lattice() {
        let lattice = ramp_lattice(3);
        assert_eq!(trilinear(&lattice, [-1.0, -1.0, -1.0]), lattice.sample(0, 0, 0));
        assert_eq!(trilinear(&lattice, [9.0, 9.0, 9.0]), lattice.sample(2, 2, 2));
    }

    #[test]
    fn test_trilinear_zero_size_is_black() {
        assert_eq!(trilinear(&Lattice::new(0, Vec::new()), [0.5; 3]), [0.0; 3]);
    }

    #[test]
    fn test_build_zero_size_does_not_panic() {
        let atlas = build(&Lattice::new(0, Vec::new()));
        assert_eq!(atlas.lattice_color(10, 10, 10), [0, 0, 0, 255]);
    }

    #[test]
    fn test_source_coord_endpoints() {
        assert_eq!(source_coord(33, [0, 0, 0]), [0.0; 3]);
        assert_eq!(source_coord(33, [63, 63, 63]), [32.0; 3]);
        assert_eq!(source_coord(17, [63, 0, 63]), [16.0, 0.0, 16.0]);
    }

    #[test]
    fn test_direct_path_copies_samples() {
        let lattice = ramp_lattice(64);
        let atlas = build(&lattice);
        for &(r, g, b) in &[(0, 0, 0), (5, 9, 13), (63, 0, 31), (63, 63, 63)] {
            let s = lattice.sample(r, g, b);
            let px = atlas.lattice_color(r, g, b);
            assert_eq!(px, [quantize(s[0]), quantize(s[1]), quantize(s[2]), 255]);
        }
    }

    #[test]
    fn test_resample_path_alpha_is_opaque() {
        let atlas = build(&ramp_lattice(17));
        assert!(atlas.pixels().iter().all(|px| px[3] == 255));
    }
}
