//! CLI command implementations

pub mod apply;
pub mod identity;
pub mod import;
pub mod info;

use anyhow::{Context, Result};
use lutify_core::{Atlas, GradingImage, ImportedLut};
use std::path::Path;

/// How an on-disk LUT argument should be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LutSource {
    /// `.cube` text, imported on the fly.
    Cube,
    /// Atlas stored as a 512x512 PNG.
    AtlasPng,
    /// Raw RGBA8 atlas blob.
    AtlasBlob,
}

impl LutSource {
    pub fn from_path(path: &Path) -> Self {
        match extension(path).as_str() {
            "cube" => Self::Cube,
            "png" => Self::AtlasPng,
            _ => Self::AtlasBlob,
        }
    }
}

/// Lowercased file extension, or empty.
pub fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// File name as UTF-8, if it has one.
pub fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

/// Read a text file
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read: {}", path.display()))
}

/// Parse and import a .cube file
pub fn import_file(path: &Path) -> Result<ImportedLut> {
    let text = read_text(path)?;
    lutify_core::import_cube(&text, file_name(path))
        .with_context(|| format!("Failed to import LUT: {}", path.display()))
}

/// Load an atlas from a .cube, .png, or raw blob
pub fn load_atlas(path: &Path) -> Result<Atlas> {
    match LutSource::from_path(path) {
        LutSource::Cube => Ok(import_file(path)?.atlas),
        LutSource::AtlasPng => {
            let img = image::open(path)
                .with_context(|| format!("Failed to load: {}", path.display()))?
                .to_rgba8();
            Atlas::from_image(&img).with_context(|| format!("Not an atlas: {}", path.display()))
        }
        LutSource::AtlasBlob => {
            let bytes =
                std::fs::read(path).with_context(|| format!("Failed to read: {}", path.display()))?;
            Atlas::from_bytes(&bytes).with_context(|| format!("Not an atlas: {}", path.display()))
        }
    }
}

/// Store an atlas as PNG or raw blob, by extension
pub fn save_atlas(path: &Path, atlas: &Atlas) -> Result<()> {
    if extension(path) == "png" {
        atlas
            .to_image()
            .save(path)
            .with_context(|| format!("Failed to save: {}", path.display()))
    } else {
        std::fs::write(path, atlas.as_bytes())
            .with_context(|| format!("Failed to write: {}", path.display()))
    }
}

/// Load image from path
pub fn load_image(path: &Path) -> Result<GradingImage> {
    let img = image::open(path).with_context(|| format!("Failed to load: {}", path.display()))?;
    Ok(GradingImage::from_dynamic(&img))
}

/// Save image to path as RGBA8 (RGB8 for formats without alpha)
pub fn save_image(path: &Path, image: &GradingImage) -> Result<()> {
    let rgba = image
        .to_rgba_image()
        .with_context(|| format!("Failed to encode: {}", path.display()))?;
    let result = match extension(path).as_str() {
        "jpg" | "jpeg" => image::DynamicImage::ImageRgba8(rgba).to_rgb8().save(path),
        _ => rgba.save(path),
    };
    result.with_context(|| format!("Failed to save: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lut_source_from_extension() {
        assert_eq!(LutSource::from_path(Path::new("a/look.cube")), LutSource::Cube);
        assert_eq!(LutSource::from_path(Path::new("LOOK.CUBE")), LutSource::Cube);
        assert_eq!(LutSource::from_path(Path::new("look.png")), LutSource::AtlasPng);
        assert_eq!(LutSource::from_path(Path::new("look.rgba")), LutSource::AtlasBlob);
        assert_eq!(LutSource::from_path(Path::new("look")), LutSource::AtlasBlob);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(Path::new("/tmp/Teal.cube")), Some("Teal.cube"));
    }
}
