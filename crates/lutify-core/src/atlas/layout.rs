//! Tile packing of the canonical 64³ lattice into a 512×512 image.
//!
//! Blue slice `b` occupies tile `(b mod 8, b div 8)`; inside a tile, red runs
//! along x and green along y. The builder writes through [`lattice_coord`] and
//! the sampler reads through [`texel`], so both sides share this one mapping.

/// Resolution every atlas is canonicalized to, per axis.
pub const CANONICAL_SIZE: u32 = 64;

/// Tiles per atlas row and column.
pub const GRID_DIM: u32 = 8;

/// Atlas width and height in pixels.
pub const ATLAS_DIM: u32 = GRID_DIM * CANONICAL_SIZE;

/// Total atlas pixel count.
pub const ATLAS_PIXELS: usize = (ATLAS_DIM * ATLAS_DIM) as usize;

/// Raw RGBA8 blob length in bytes.
pub const ATLAS_BYTES: usize = ATLAS_PIXELS * 4;

const _: () = assert!(GRID_DIM * GRID_DIM == CANONICAL_SIZE);

/// Top-left pixel of the tile holding blue slice `slice`.
#[inline]
pub const fn tile_origin(slice: u32) -> (u32, u32) {
    (
        (slice % GRID_DIM) * CANONICAL_SIZE,
        (slice / GRID_DIM) * CANONICAL_SIZE,
    )
}

/// Atlas pixel holding canonical lattice coordinate `(r, g, b)`.
#[inline]
pub const fn texel(r: u32, g: u32, b: u32) -> (u32, u32) {
    let (x0, y0) = tile_origin(b);
    (x0 + r, y0 + g)
}

/// Row-major pixel index of canonical lattice coordinate `(r, g, b)`.
#[inline]
pub const fn texel_index(r: u32, g: u32, b: u32) -> usize {
    let (x, y) = texel(r, g, b);
    (y * ATLAS_DIM + x) as usize
}

/// Inverse of [`texel`]: canonical `(r, g, b)` stored at atlas pixel `(x, y)`.
#[inline]
pub const fn lattice_coord(x: u32, y: u32) -> [u32; 3] {
    let tile_x = x / CANONICAL_SIZE;
    let tile_y = y / CANONICAL_SIZE;
    [
        x % CANONICAL_SIZE,
        y % CANONICAL_SIZE,
        tile_y * GRID_DIM + tile_x,
    ]
}
