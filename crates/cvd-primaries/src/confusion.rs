//! Dichromat confusion lines.
//!
//! For each missing cone class, colors that differ only along lines radiating
//! from a single *confusion point* in (u, v) chromaticity look identical. The
//! simulation slides a color along its confusion line until it meets a fixed
//! *anchor line* `v = am * u + ayi`, which approximates the colors the
//! dichromat still perceives as distinct.
//!
//! # Coefficient Sets
//!
//! | Set | Deficiency | cpu | cpv | am | ayi |
//! |-----|------------|-----|-----|----|-----|
//! | 0 | Protan | 0.735 | 0.265 | 1.273463 | -0.073894 |
//! | 1 | Deutan | 1.140 | -0.140 | 0.968437 | 0.003331 |
//! | 2 | Tritan | 0.171 | -0.003 | 0.062921 | 0.292119 |

use cvd_core::Deficiency;

/// Confusion point and anchor line for one deficiency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfusionLine {
    /// Confusion point u chromaticity.
    pub cpu: f64,
    /// Confusion point v chromaticity.
    pub cpv: f64,
    /// Anchor line slope.
    pub am: f64,
    /// Anchor line intercept.
    pub ayi: f64,
}

/// Protan (L cone) coefficients.
pub const PROTAN: ConfusionLine = ConfusionLine {
    cpu: 0.735,
    cpv: 0.265,
    am: 1.273463,
    ayi: -0.073894,
};

/// Deutan (M cone) coefficients.
pub const DEUTAN: ConfusionLine = ConfusionLine {
    cpu: 1.140,
    cpv: -0.140,
    am: 0.968437,
    ayi: 0.003331,
};

/// Tritan (S cone) coefficients.
pub const TRITAN: ConfusionLine = ConfusionLine {
    cpu: 0.171,
    cpv: -0.003,
    am: 0.062921,
    ayi: 0.292119,
};

/// All coefficient sets, indexed by [`Deficiency::index`].
pub const CONFUSION_LINES: [ConfusionLine; 3] = [PROTAN, DEUTAN, TRITAN];

impl ConfusionLine {
    /// Coefficient set for a deficiency.
    #[inline]
    pub const fn for_deficiency(deficiency: Deficiency) -> ConfusionLine {
        CONFUSION_LINES[deficiency.index()]
    }

    /// Slope of the line through `(cu, cv)` and the confusion point.
    ///
    /// The two branches are not interchangeable: which numerator and
    /// denominator order is used depends on which side of the confusion
    /// point `cu` lies. At `cu == cpu` the second branch divides by zero.
    #[inline]
    pub fn slope_through(&self, cu: f64, cv: f64) -> f64 {
        if cu < self.cpu {
            (self.cpv - cv) / (self.cpu - cu)
        } else {
            (cv - self.cpv) / (cu - self.cpu)
        }
    }

    /// Intersection `(du, dv)` of the line `v = clm * u + clyi` with the
    /// anchor line.
    #[inline]
    pub fn intersect(&self, clm: f64, clyi: f64) -> (f64, f64) {
        let du = (self.ayi - clyi) / (clm - self.am);
        let dv = (clm * du) + clyi;
        (du, dv)
    }
}
