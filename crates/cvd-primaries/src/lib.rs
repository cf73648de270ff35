//! # cvd-primaries
//!
//! The fixed colorimetric constants of the simulation: the RGB/XYZ matrix
//! pair, the neutral white point and the three dichromat confusion lines.
//!
//! # Contents
//!
//! | Constant | Meaning |
//! |----------|---------|
//! | [`RGB_TO_XYZ`] | linear display RGB -> CIE XYZ |
//! | [`XYZ_TO_RGB`] | CIE XYZ -> linear display RGB |
//! | [`NEUTRAL_WHITE`] | white point the gamut fix pulls toward |
//! | [`PROTAN`], [`DEUTAN`], [`TRITAN`] | confusion-line coefficient sets |
//!
//! The matrix pair is not derived from primaries at runtime; the values are
//! used exactly as written so simulated output is reproducible to the bit.
//! The two matrices are inverses only to about 6 significant digits.
//!
//! # Usage
//!
//! ```rust
//! use cvd_core::Deficiency;
//! use cvd_math::Vec3;
//! use cvd_primaries::{ConfusionLine, RGB_TO_XYZ};
//!
//! let xyz = RGB_TO_XYZ * Vec3::ONE;
//! assert!((xyz.y - 1.0).abs() < 1e-3);
//!
//! let line = ConfusionLine::for_deficiency(Deficiency::Deutan);
//! assert_eq!(line.cpu, 1.140);
//! ```
//!
//! # Used By
//!
//! - `cvd-sim` - the dichromat projection

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod confusion;

pub use confusion::{CONFUSION_LINES, ConfusionLine, DEUTAN, PROTAN, TRITAN};

use cvd_math::Mat3;

// ============================================================================
// Matrices
// ============================================================================

/// Linear display RGB to CIE XYZ.
pub const RGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.430574, 0.341550, 0.178325],
    [0.222015, 0.706655, 0.071330],
    [0.020183, 0.129553, 0.939180],
]);

/// CIE XYZ to linear display RGB.
pub const XYZ_TO_RGB: Mat3 = Mat3::from_rows([
    [3.063218, -1.393325, -0.475802],
    [-0.969243, 1.875966, 0.041555],
    [0.067871, -0.228834, 1.069251],
]);

// ============================================================================
// White Point
// ============================================================================

/// Chromaticity of the neutral point, as (x, y, z) with x + y + z = 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// x chromaticity
    pub x: f64,
    /// y chromaticity
    pub y: f64,
    /// z chromaticity
    pub z: f64,
}

impl WhitePoint {
    /// XYZ of the neutral color with luminance `lum`, as `(X, Z)`.
    ///
    /// Evaluated as `x * lum / y` and `z * lum / y`.
    #[inline]
    pub fn neutral_xz(&self, lum: f64) -> (f64, f64) {
        (self.x * lum / self.y, self.z * lum / self.y)
    }
}

/// Neutral point used by the gamut fix (close to D65).
pub const NEUTRAL_WHITE: WhitePoint = WhitePoint {
    x: 0.312713,
    y: 0.329016,
    z: 0.358271,
};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use cvd_math::Vec3;

    #[test]
    fn test_white_maps_to_unit_luminance() {
        let white = RGB_TO_XYZ * Vec3::ONE;
        assert_abs_diff_eq!(white.y, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_matrices_are_near_inverse() {
        let roundtrip = XYZ_TO_RGB * (RGB_TO_XYZ * Vec3::new(0.5, 0.3, 0.8));
        assert_abs_diff_eq!(roundtrip.x, 0.5, epsilon = 1e-4);
        assert_abs_diff_eq!(roundtrip.y, 0.3, epsilon = 1e-4);
        assert_abs_diff_eq!(roundtrip.z, 0.8, epsilon = 1e-4);
    }

    #[test]
    fn test_white_point_chromaticity_sums_to_one() {
        let w = NEUTRAL_WHITE;
        assert_abs_diff_eq!(w.x + w.y + w.z, 1.0, epsilon = 1e-12);
        let (x, z) = w.neutral_xz(w.y);
        assert_abs_diff_eq!(x, w.x, epsilon = 1e-15);
        assert_abs_diff_eq!(z, w.z, epsilon = 1e-15);
    }

    #[test]
    fn test_white_point_matches_white_chromaticity() {
        let xyz = RGB_TO_XYZ * Vec3::ONE;
        assert_abs_diff_eq!(xyz.x / xyz.sum(), NEUTRAL_WHITE.x, epsilon = 1e-4);
        assert_abs_diff_eq!(xyz.y / xyz.sum(), NEUTRAL_WHITE.y, epsilon = 1e-4);
    }
}
