//! Transform pipeline — render parameters and per-pixel evaluation.

pub mod evaluate;
pub mod params;
