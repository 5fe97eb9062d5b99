//! Error types for LUT import, atlas persistence, and frame conversion.

/// Errors raised while decoding `.cube` text.
///
/// Fatal to the import: no partial [`Lattice`](crate::lut::Lattice) is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("missing size: LUT_3D_SIZE not found")]
    MissingSize,
    #[error("invalid LUT_3D_SIZE value: {0:?}")]
    InvalidSize(String),
    #[error("data count mismatch: expected {expected} rows, found {found}")]
    DataCountMismatch { expected: usize, found: usize },
    #[error("invalid number {token:?} on line {line}")]
    InvalidNumber { line: usize, token: String },
}

/// Errors raised when reloading a persisted atlas.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AtlasError {
    #[error("atlas blob must be {expected} bytes, found {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("atlas image must be {expected}x{expected}, found {width}x{height}")]
    InvalidDimensions {
        expected: u32,
        width: u32,
        height: u32,
    },
}

/// Errors raised when wrapping raw pixel buffers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    #[error("{width}x{height} RGBA8 frame needs {expected} bytes, found {found}")]
    InvalidLength {
        width: u32,
        height: u32,
        expected: usize,
        found: usize,
    },
}

/// Errors raised by the import flow (parse, then validate).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImportError {
    #[error("failed to parse LUT: {0}")]
    Parse(#[from] ParseError),
    #[error("LUT failed validation: bad domain bounds or sample count")]
    Validation,
}
