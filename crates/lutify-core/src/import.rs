//! LUT import: parse, validate, canonicalize.
//!
//! The lattice is dropped once the atlas exists; callers persist the atlas blob
//! and [`LutMeta`], and keep the raw `.cube` text if they ever need to rebuild.

use serde::{Deserialize, Serialize};

use crate::atlas::{self, Atlas};
use crate::error::ImportError;
use crate::lut::{self, Lattice};

/// Name used when a LUT has neither a title nor a file name.
pub const UNTITLED: &str = "Untitled LUT";

/// Record-store metadata for an imported LUT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LutMeta {
    /// Display name: title, else file stem, else [`UNTITLED`].
    pub name: String,
    /// Native lattice size before canonicalization.
    pub size: u32,
    pub domain_min: [f32; 3],
    pub domain_max: [f32; 3],
    /// `TITLE` from the file, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl LutMeta {
    fn from_lattice(lattice: &Lattice, file_name: Option<&str>) -> Self {
        Self {
            name: display_name(lattice.title.as_deref(), file_name),
            size: lattice.size,
            domain_min: lattice.domain_min,
            domain_max: lattice.domain_max,
            title: lattice.title.clone(),
        }
    }
}

/// Result of a successful import.
#[derive(Debug, Clone)]
pub struct ImportedLut {
    pub meta: LutMeta,
    pub atlas: Atlas,
}

/// Pick a display name for a LUT.
///
/// A non-empty title wins; otherwise the file name minus a trailing `.cube`.
pub fn display_name(title: Option<&str>, file_name: Option<&str>) -> String {
    if let Some(title) = title.map(str::trim).filter(|t| !t.is_empty()) {
        return title.to_string();
    }
    file_name
        .map(|name| name.strip_suffix(".cube").unwrap_or(name).trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNTITLED)
        .to_string()
}

/// Parse, validate, and canonicalize `.cube` text.
///
/// Nothing partial is returned: a parse error or failed validation rejects the
/// whole import.
pub fn import_cube(text: &str, file_name: Option<&str>) -> Result<ImportedLut, ImportError> {
    let lattice = lut::parse(text)?;
    if !lut::validate(&lattice) {
        tracing::warn!(
            domain_min = ?lattice.domain_min,
            domain_max = ?lattice.domain_max,
            "rejecting LUT that failed validation"
        );
        return Err(ImportError::Validation);
    }

    let meta = LutMeta::from_lattice(&lattice, file_name);
    let atlas = atlas::build(&lattice);
    tracing::info!(name = %meta.name, size = meta.size, "imported LUT");

    Ok(ImportedLut { meta, atlas })
}
