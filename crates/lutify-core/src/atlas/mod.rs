//! Canonical LUT atlas — a fixed 512×512 RGBA8 image holding a 64³ lattice.
//!
//! Every imported LUT, whatever its native resolution, is resampled into the
//! same tiled layout (see [`layout`]). The atlas is built once at import, then
//! persisted and reloaded as a raw blob without touching the `.cube` text.

pub mod builder;
pub mod layout;
pub mod sampler;

use crate::error::AtlasError;

pub use builder::{build, trilinear};
pub use layout::{ATLAS_BYTES, ATLAS_DIM, CANONICAL_SIZE, GRID_DIM};
pub use sampler::sample_lut;

/// Immutable tiled RGBA8 atlas. Alpha is always 255.
#[derive(Clone, PartialEq, Eq)]
pub struct Atlas {
    pixels: Vec<[u8; 4]>,
}

impl std::fmt::Debug for Atlas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Atlas")
            .field("width", &ATLAS_DIM)
            .field("height", &ATLAS_DIM)
            .finish_non_exhaustive()
    }
}

impl Atlas {
    /// Wrap a full-size pixel buffer. Callers guarantee the length.
    pub(crate) fn from_pixels(pixels: Vec<[u8; 4]>) -> Self {
        debug_assert_eq!(pixels.len(), layout::ATLAS_PIXELS);
        Self { pixels }
    }

    /// Width and height in pixels (always 512).
    pub const fn dim(&self) -> u32 {
        ATLAS_DIM
    }

    /// Row-major pixels, top-to-bottom.
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, clamped to the atlas edge.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let x = x.min(ATLAS_DIM - 1);
        let y = y.min(ATLAS_DIM - 1);
        self.pixels[(y * ATLAS_DIM + x) as usize]
    }

    /// Stored color for canonical lattice coordinate `(r, g, b)`.
    #[inline]
    pub fn lattice_color(&self, r: u32, g: u32, b: u32) -> [u8; 4] {
        let max = CANONICAL_SIZE - 1;
        self.pixels[layout::texel_index(r.min(max), g.min(max), b.min(max))]
    }

    /// Borrow the raw RGBA8 blob.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copy out the raw RGBA8 blob for persistence.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Reload a blob previously produced by [`Atlas::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AtlasError> {
        if bytes.len() != ATLAS_BYTES {
            return Err(AtlasError::InvalidLength {
                expected: ATLAS_BYTES,
                found: bytes.len(),
            });
        }
        let pixels: &[[u8; 4]] = bytemuck::cast_slice(bytes);
        Ok(Self::from_pixels(pixels.to_vec()))
    }

    /// Copy into an [`image::RgbaImage`], e.g. to store the atlas as PNG.
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(ATLAS_DIM, ATLAS_DIM, |x, y| image::Rgba(self.pixel(x, y)))
    }

    /// Reload an atlas stored as an image. Must be exactly 512×512.
    pub fn from_image(img: &image::RgbaImage) -> Result<Self, AtlasError> {
        let (width, height) = img.dimensions();
        if width != ATLAS_DIM || height != ATLAS_DIM {
            return Err(AtlasError::InvalidDimensions {
                expected: ATLAS_DIM,
                width,
                height,
            });
        }
        Self::from_bytes(img.as_raw())
    }
}
