//! Image representation for the grading pipeline.
//!
//! Decoding from files (HEIF, JPEG, PNG) happens outside the core. The core
//! takes already-decoded RGBA buffers and works on straight-alpha `f32` pixels.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FrameError;

/// Bit depth of the buffer an image was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BitDepth {
    /// 8-bit unsigned integer.
    U8,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit floating point.
    F32,
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U8 => write!(f, "8-bit"),
            Self::U16 => write!(f, "16-bit"),
            Self::F32 => write!(f, "32-bit float"),
        }
    }
}

/// Internal image representation. Always RGBA `f32`, straight alpha, `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct GradingImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Row-major RGBA pixels.
    pub pixels: Vec<[f32; 4]>,
    /// Bit depth of the source buffer.
    pub source_bit_depth: BitDepth,
}

impl GradingImage {
    /// Wrap a tightly packed RGBA8 buffer.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self, FrameError> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(FrameError::InvalidLength {
                width,
                height,
                expected,
                found: bytes.len(),
            });
        }
        let pixels: Vec<[f32; 4]> = bytes.chunks_exact(4).map(unit_pixel).collect();
        Ok(Self {
            width,
            height,
            pixels,
            source_bit_depth: BitDepth::U8,
        })
    }

    /// Convert an `image` crate RGBA8 buffer.
    pub fn from_rgba_image(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels: Vec<[f32; 4]> = img.pixels().map(|p| unit_pixel(&p.0)).collect();
        Self {
            width,
            height,
            pixels,
            source_bit_depth: BitDepth::U8,
        }
    }

    /// Convert any decoded `image` crate buffer, remembering its bit depth.
    pub fn from_dynamic(img: &image::DynamicImage) -> Self {
        let rgba = img.to_rgba32f();
        let (width, height) = rgba.dimensions();
        let pixels: Vec<[f32; 4]> = rgba
            .pixels()
            .map(|p| [p.0[0], p.0[1], p.0[2], p.0[3]])
            .collect();

        let source_bit_depth = match img.color() {
            image::ColorType::Rgb16
            | image::ColorType::Rgba16
            | image::ColorType::L16
            | image::ColorType::La16 => BitDepth::U16,
            image::ColorType::Rgb32F | image::ColorType::Rgba32F => BitDepth::F32,
            _ => BitDepth::U8,
        };

        Self {
            width,
            height,
            pixels,
            source_bit_depth,
        }
    }

    /// Pack to RGBA8, clamping and rounding each channel.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|px| px.map(unit_to_u8))
            .collect()
    }

    /// Pack into an `image` crate RGBA8 buffer.
    ///
    /// Fails when `pixels` does not hold exactly `width × height` entries.
    pub fn to_rgba_image(&self) -> Result<image::RgbaImage, FrameError> {
        let bytes = self.to_rgba8();
        let expected = self.width as usize * self.height as usize * 4;
        let found = bytes.len();
        image::RgbaImage::from_raw(self.width, self.height, bytes)
            .filter(|_| found == expected)
            .ok_or(FrameError::InvalidLength {
                width: self.width,
                height: self.height,
                expected,
                found,
            })
    }
}

/// Round a `[0, 1]` value to a byte.
#[inline]
pub(crate) fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Expand one RGBA8 pixel to `[0, 1]` floats.
#[inline]
fn unit_pixel(px: &[u8]) -> [f32; 4] {
    [
        px[0] as f32 / 255.0,
        px[1] as f32 / 255.0,
        px[2] as f32 / 255.0,
        px[3] as f32 / 255.0,
    ]
}
