//! Atlas lookups: bilinear within a slice tile, linear across slices.
//!
//! This is the CPU mirror of the fragment shader sampling path. It reads the
//! atlas through the same [`layout`](crate::atlas::layout) mapping the builder
//! writes through.

use glam::{Vec2, Vec3};

use crate::atlas::Atlas;
use crate::atlas::layout::{CANONICAL_SIZE, texel};

const LAST: f32 = (CANONICAL_SIZE - 1) as f32;

/// Atlas texel as a `[0, 1]` color.
#[inline]
fn fetch(atlas: &Atlas, r: u32, g: u32, slice: u32) -> Vec3 {
    let (x, y) = texel(r, g, slice);
    let [pr, pg, pb, _] = atlas.pixel(x, y);
    Vec3::new(pr as f32, pg as f32, pb as f32) / 255.0
}

/// Bilinear sample inside the tile of `slice`.
///
/// `pos` is in tile pixel space with texel centers at `i + 0.5`, the way a
/// GPU sampler addresses an image. Reads clamp to the tile edge so a lookup
/// never bleeds into the neighbouring slice.
pub fn sample_tile_bilinear(atlas: &Atlas, slice: u32, pos: Vec2) -> Vec3 {
    let slice = slice.min(CANONICAL_SIZE - 1);
    let p = (pos - Vec2::splat(0.5)).clamp(Vec2::ZERO, Vec2::splat(LAST));
    let x0 = p.x.floor() as u32;
    let y0 = p.y.floor() as u32;
    let x1 = (x0 + 1).min(CANONICAL_SIZE - 1);
    let y1 = (y0 + 1).min(CANONICAL_SIZE - 1);
    let fx = p.x - x0 as f32;
    let fy = p.y - y0 as f32;

    let top = fetch(atlas, x0, y0, slice).lerp(fetch(atlas, x1, y0, slice), fx);
    let bottom = fetch(atlas, x0, y1, slice).lerp(fetch(atlas, x1, y1, slice), fx);
    top.lerp(bottom, fy)
}

/// Sample one blue slice at lattice-space red/green coordinates (`[0, 63]`).
///
/// The UV is pixel-center aligned, `(rg + 0.5) / 64`, then scaled back into
/// the tile's pixel footprint before filtering.
pub fn sample_slice(atlas: &Atlas, slice: u32, rg: Vec2) -> Vec3 {
    let size = CANONICAL_SIZE as f32;
    let uv = (rg + Vec2::splat(0.5)) / size;
    sample_tile_bilinear(atlas, slice, uv * size)
}

/// Look up `rgb` (expected in `[0, 1]`) through the atlas.
///
/// Red/green are filtered bilinearly inside the two blue slices that bracket
/// `rgb.b`; the two results are then blended linearly by the blue fraction.
pub fn sample_lut(atlas: &Atlas, rgb: Vec3) -> Vec3 {
    let scaled = rgb.clamp(Vec3::ZERO, Vec3::ONE) * LAST;

    let slice_floor = scaled.z.floor();
    let slice_frac = scaled.z - slice_floor;
    let slice = slice_floor as u32;
    let next = (slice + 1).min(CANONICAL_SIZE - 1);

    let rg = Vec2::new(scaled.x, scaled.y);
    let a = sample_slice(atlas, slice, rg);
    let b = sample_slice(atlas, next, rg);
    a.lerp(b, slice_frac)
}
