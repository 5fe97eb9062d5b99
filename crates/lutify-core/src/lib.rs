//! Lutify Core — domain layer for LUT color grading.
//!
//! Decodes `.cube` text into a lattice, canonicalizes it into a tiled 512×512
//! atlas, and grades pixels through that atlas plus tone sliders. No GPU, no
//! file I/O.

pub mod atlas;
pub mod cache;
pub mod error;
pub mod grading;
pub mod image;
pub mod import;
pub mod lut;
pub mod render;
pub mod transform;

// Re-exports for convenience.
pub use atlas::Atlas;
pub use cache::AtlasCache;
pub use error::{AtlasError, FrameError, ImportError, ParseError};
pub use image::{BitDepth, GradingImage};
pub use import::{ImportedLut, LutMeta, import_cube};
pub use lut::{Lattice, parse, validate};
pub use render::{PreviewConfig, render_export, render_frame, render_preview};
pub use transform::evaluate::{apply, apply_rgba};
pub use transform::params::{RenderParams, RenderUniforms};
