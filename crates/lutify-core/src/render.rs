//! Whole-frame rendering for the live preview and the full-resolution export.
//!
//! Both contexts run the same per-pixel [`apply_rgba`]; the preview only
//! shrinks the pixel grid first. Pixels are independent, so frames are mapped
//! with rayon and nothing is cached between calls. A stale preview is simply
//! dropped by the caller.

use glam::Vec3;
use rayon::prelude::*;

use crate::atlas::Atlas;
use crate::image::GradingImage;
use crate::transform::evaluate::apply_rgba;
use crate::transform::params::RenderParams;

/// Default preview box: a 1080-wide canvas capped at 1.5× its width in height.
const DEFAULT_PREVIEW_WIDTH: u32 = 1080;
const DEFAULT_PREVIEW_HEIGHT: u32 = 1620;

/// Size limits for the interactive preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewConfig {
    /// Maximum preview width in pixels.
    pub max_width: u32,
    /// Maximum preview height in pixels.
    pub max_height: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_PREVIEW_WIDTH,
            max_height: DEFAULT_PREVIEW_HEIGHT,
        }
    }
}

/// Fit `width × height` inside the preview box, keeping aspect ratio.
///
/// Never upscales, and never shrinks a non-empty side below one pixel.
pub fn preview_dimensions(width: u32, height: u32, config: &PreviewConfig) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width, height);
    }
    let sx = config.max_width.max(1) as f64 / width as f64;
    let sy = config.max_height.max(1) as f64 / height as f64;
    let scale = sx.min(sy).min(1.0);
    if scale >= 1.0 {
        return (width, height);
    }
    let w = ((width as f64 * scale).round() as u32).clamp(1, width);
    let h = ((height as f64 * scale).round() as u32).clamp(1, height);
    (w, h)
}

/// Box-filter `image` down to `width × height`.
///
/// Each output pixel averages the source rectangle it covers. Requesting the
/// source size returns a copy.
pub fn downsample(image: &GradingImage, width: u32, height: u32) -> GradingImage {
    if (width, height) == (image.width, image.height) || image.width == 0 || image.height == 0 {
        return image.clone();
    }

    let (sw, sh) = (image.width as u64, image.height as u64);
    let (tw, th) = (width.max(1) as u64, height.max(1) as u64);
    let span = |t: u64, src: u64, dst: u64| -> (u64, u64) {
        let lo = t * src / dst;
        let hi = ((t + 1) * src / dst).max(lo + 1).min(src);
        (lo, hi)
    };

    let mut pixels = vec![[0.0_f32; 4]; (tw * th) as usize];
    pixels
        .par_chunks_mut(tw as usize)
        .enumerate()
        .for_each(|(ty, row)| {
            let (y0, y1) = span(ty as u64, sh, th);
            for (tx, out) in row.iter_mut().enumerate() {
                let (x0, x1) = span(tx as u64, sw, tw);
                let mut acc = [0.0_f32; 4];
                for y in y0..y1 {
                    let line = &image.pixels[(y * sw) as usize..((y + 1) * sw) as usize];
                    for px in &line[x0 as usize..x1 as usize] {
                        for c in 0..4 {
                            acc[c] += px[c];
                        }
                    }
                }
                let n = ((y1 - y0) * (x1 - x0)) as f32;
                *out = acc.map(|v| v / n);
            }
        });

    GradingImage {
        width: tw as u32,
        height: th as u32,
        pixels,
        source_bit_depth: image.source_bit_depth,
    }
}

/// Grade every pixel of `image`.
pub fn render_frame(atlas: &Atlas, params: &RenderParams, image: &GradingImage) -> GradingImage {
    let pixels: Vec<[f32; 4]> = if params.is_identity() {
        image
            .pixels
            .par_iter()
            .map(|&[r, g, b, a]| {
                let c = Vec3::new(r, g, b).clamp(Vec3::ZERO, Vec3::ONE);
                [c.x, c.y, c.z, a]
            })
            .collect()
    } else {
        image
            .pixels
            .par_iter()
            .map(|px| apply_rgba(atlas, params, *px))
            .collect()
    };

    GradingImage {
        width: image.width,
        height: image.height,
        pixels,
        source_bit_depth: image.source_bit_depth,
    }
}

/// Downsample to the preview box, then grade.
pub fn render_preview(
    atlas: &Atlas,
    params: &RenderParams,
    image: &GradingImage,
    config: &PreviewConfig,
) -> GradingImage {
    let (w, h) = preview_dimensions(image.width, image.height, config);
    tracing::debug!(
        src_width = image.width,
        src_height = image.height,
        width = w,
        height = h,
        "rendering preview"
    );
    render_frame(atlas, params, &downsample(image, w, h))
}

/// Grade at full resolution.
pub fn render_export(atlas: &Atlas, params: &RenderParams, image: &GradingImage) -> GradingImage {
    tracing::debug!(width = image.width, height = image.height, "rendering export");
    render_frame(atlas, params, image)
}
