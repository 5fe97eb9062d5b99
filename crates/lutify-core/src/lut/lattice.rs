//! Decoded 3D LUT lattice.

use std::fmt::Write as _;

/// Default lower domain bound.
pub const DEFAULT_DOMAIN_MIN: [f32; 3] = [0.0, 0.0, 0.0];

/// Default upper domain bound.
pub const DEFAULT_DOMAIN_MAX: [f32; 3] = [1.0, 1.0, 1.0];

/// A cube lattice of `size³` color samples decoded from `.cube` text.
///
/// Samples are stored red-fastest, blue-slowest: logical `(r, g, b)` lives at
/// `(b * size + g) * size + r`. This is also the row order of the file, so the
/// parser never reorders and every sampler indexes through [`Lattice::index`].
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    /// Grid size per axis (typically 17, 33 or 64).
    pub size: u32,
    /// Minimum domain values per channel.
    pub domain_min: [f32; 3],
    /// Maximum domain values per channel.
    pub domain_max: [f32; 3],
    /// Output colors. Length = size³.
    pub samples: Vec<[f32; 3]>,
    /// Optional `TITLE` from the file.
    pub title: Option<String>,
}

impl Lattice {
    /// Build a lattice with the default `[0, 1]` domain and no title.
    pub fn new(size: u32, samples: Vec<[f32; 3]>) -> Self {
        Self {
            size,
            domain_min: DEFAULT_DOMAIN_MIN,
            domain_max: DEFAULT_DOMAIN_MAX,
            samples,
            title: None,
        }
    }

    /// Identity lattice: every lattice point maps to its own coordinate.
    pub fn identity(size: u32) -> Self {
        let n = size as usize;
        let denom = size.saturating_sub(1).max(1) as f32;
        let mut samples = Vec::with_capacity(n * n * n);
        for b in 0..n {
            for g in 0..n {
                for r in 0..n {
                    samples.push([r as f32 / denom, g as f32 / denom, b as f32 / denom]);
                }
            }
        }
        Self::new(size, samples)
    }

    /// Expected sample count, `size³`.
    pub fn expected_len(&self) -> usize {
        let n = self.size as usize;
        n * n * n
    }

    /// Linear index of logical coordinate `(r, g, b)`.
    #[inline]
    pub fn index(&self, r: u32, g: u32, b: u32) -> usize {
        let n = self.size as usize;
        (b as usize * n + g as usize) * n + r as usize
    }

    /// Sample at `(r, g, b)`. Out-of-range reads yield black instead of panicking.
    #[inline]
    pub fn sample(&self, r: u32, g: u32, b: u32) -> [f32; 3] {
        self.samples
            .get(self.index(r, g, b))
            .copied()
            .unwrap_or([0.0; 3])
    }

    /// Serialize back to `.cube` text in canonical row order.
    pub fn to_cube_string(&self) -> String {
        let mut out = String::with_capacity(self.samples.len() * 28 + 128);
        if let Some(title) = &self.title {
            let _ = writeln!(out, "TITLE \"{title}\"");
        }
        let _ = writeln!(out, "LUT_3D_SIZE {}", self.size);
        if self.domain_min != DEFAULT_DOMAIN_MIN || self.domain_max != DEFAULT_DOMAIN_MAX {
            let [a, b, c] = self.domain_min;
            let _ = writeln!(out, "DOMAIN_MIN {a} {b} {c}");
            let [a, b, c] = self.domain_max;
            let _ = writeln!(out, "DOMAIN_MAX {a} {b} {c}");
        }
        for [r, g, b] in &self.samples {
            let _ = writeln!(out, "{r:.6} {g:.6} {b:.6}");
        }
        out
    }
}

/// Check a lattice before accepting it into an import.
///
/// Returns `false` when the sample count is not `size³` (including size 0) or
/// any `domain_min[i] >= domain_max[i]`. Never panics.
pub fn validate(lattice: &Lattice) -> bool {
    if lattice.size == 0 || lattice.samples.len() != lattice.expected_len() {
        return false;
    }
    // NaN bounds compare false and fail here as well.
    (0..3).all(|i| lattice.domain_min[i] < lattice.domain_max[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_index_order_is_red_fastest() {
        let lattice = Lattice::identity(3);
        assert_eq!(lattice.samples[1], [0.5, 0.0, 0.0]);
        assert_eq!(lattice.samples[3], [0.0, 0.5, 0.0]);
        assert_eq!(lattice.samples[9], [0.0, 0.0, 0.5]);
        assert_eq!(lattice.sample(2, 1, 0), [1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_validate_accepts_identity() {
        assert!(validate(&Lattice::identity(17)));
    }

    #[test]
    fn test_validate_rejects_wrong_sample_count() {
        let mut lattice = Lattice::identity(4);
        lattice.samples.pop();
        assert!(!validate(&lattice));
    }

    #[test]
    fn test_validate_rejects_zero_size() {
        assert!(!validate(&Lattice::new(0, Vec::new())));
    }

    #[test]
    fn test_validate_rejects_inverted_domain() {
        let mut lattice = Lattice::identity(2);
        lattice.domain_min = [0.0, 1.0, 0.0];
        lattice.domain_max = [1.0, 1.0, 1.0];
        assert!(!validate(&lattice));
    }

    #[test]
    fn test_sample_out_of_range_is_black() {
        let lattice = Lattice::new(2, vec![[1.0; 3]; 3]);
        assert_eq!(lattice.sample(1, 1, 1), [0.0; 3]);
    }
}
