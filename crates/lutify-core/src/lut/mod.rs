//! 3D LUT decoding — `.cube` parsing and the validated lattice it produces.

pub mod cube;
pub mod lattice;

pub use cube::parse;
pub use lattice::{Lattice, validate};
