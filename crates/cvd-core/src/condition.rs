//! Simulated vision conditions.
//!
//! # Supported Conditions
//!
//! | Index | Condition | Description | Path |
//! |-------|-----------|-------------|------|
//! | 0 | [`Normal`](Condition::Normal) | normal vision | identity |
//! | 1 | [`Protanopia`](Condition::Protanopia) | red-blind | dichromat, protan line |
//! | 2 | [`Deuteranopia`](Condition::Deuteranopia) | green-blind | dichromat, deutan line |
//! | 3 | [`Tritanopia`](Condition::Tritanopia) | blue-blind | dichromat, tritan line |
//! | 4 | [`Protanomaly`](Condition::Protanomaly) | red-weak | anomalous, protan line |
//! | 5 | [`Deuteranomaly`](Condition::Deuteranomaly) | green-weak | anomalous, deutan line |
//! | 6 | [`Tritanomaly`](Condition::Tritanomaly) | blue-weak | anomalous, tritan line |
//! | 7 | [`Monochromacy`](Condition::Monochromacy) | totally colorblind | luminance |
//!
//! A dichromat and its "-anomaly" counterpart share one [`Deficiency`], and
//! with it one set of confusion-line coefficients.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A vision condition to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Normal trichromatic vision.
    Normal,
    /// Missing L cones (red-blind).
    Protanopia,
    /// Missing M cones (green-blind).
    Deuteranopia,
    /// Missing S cones (blue-blind).
    Tritanopia,
    /// Shifted L cones (red-weak).
    Protanomaly,
    /// Shifted M cones (green-weak).
    Deuteranomaly,
    /// Shifted S cones (blue-weak).
    Tritanomaly,
    /// No color discrimination at all.
    Monochromacy,
}

/// The cone class a dichromatic or anomalous condition affects.
///
/// Each deficiency owns exactly one confusion-line coefficient set; see
/// [`Deficiency::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deficiency {
    /// L cone (red).
    Protan,
    /// M cone (green).
    Deutan,
    /// S cone (blue).
    Tritan,
}

/// How a [`Condition`] is simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    /// Output equals input.
    Identity,
    /// Full projection onto the deficiency's confusion line.
    Dichromat(Deficiency),
    /// Partial blend toward the dichromat result.
    Anomalous(Deficiency),
    /// Luminance only.
    Monochrome,
}

impl Condition {
    /// Number of conditions.
    pub const COUNT: usize = 8;

    /// All conditions in index order.
    pub const ALL: [Condition; Self::COUNT] = [
        Condition::Normal,
        Condition::Protanopia,
        Condition::Deuteranopia,
        Condition::Tritanopia,
        Condition::Protanomaly,
        Condition::Deuteranomaly,
        Condition::Tritanomaly,
        Condition::Monochromacy,
    ];

    /// Resolves a numeric selector.
    ///
    /// Indices outside `0..8` fail with [`Error::InvalidCondition`]; there is
    /// no fallback condition.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(Error::InvalidCondition(index))
    }

    /// Position in [`Condition::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name, e.g. `"Protanopia"`.
    pub const fn name(self) -> &'static str {
        match self {
            Condition::Normal => "Normal",
            Condition::Protanopia => "Protanopia",
            Condition::Deuteranopia => "Deuteranopia",
            Condition::Tritanopia => "Tritanopia",
            Condition::Protanomaly => "Protanomaly",
            Condition::Deuteranomaly => "Deuteranomaly",
            Condition::Tritanomaly => "Tritanomaly",
            Condition::Monochromacy => "Monochromacy",
        }
    }

    /// Short human description, e.g. `"(red-blind)"`.
    pub const fn description(self) -> &'static str {
        match self {
            Condition::Normal => "(normal vision)",
            Condition::Protanopia => "(red-blind)",
            Condition::Deuteranopia => "(green-blind)",
            Condition::Tritanopia => "(blue-blind)",
            Condition::Protanomaly => "(red-weak)",
            Condition::Deuteranomaly => "(green-weak)",
            Condition::Tritanomaly => "(blue-weak)",
            Condition::Monochromacy => "(totally colorblind)",
        }
    }

    /// Simulation path for this condition.
    pub const fn kind(self) -> ConditionKind {
        use ConditionKind::*;
        use Deficiency::*;
        match self {
            Condition::Normal => Identity,
            Condition::Protanopia => Dichromat(Protan),
            Condition::Deuteranopia => Dichromat(Deutan),
            Condition::Tritanopia => Dichromat(Tritan),
            Condition::Protanomaly => Anomalous(Protan),
            Condition::Deuteranomaly => Anomalous(Deutan),
            Condition::Tritanomaly => Anomalous(Tritan),
            Condition::Monochromacy => Monochrome,
        }
    }

    /// The affected cone class, if any.
    pub const fn deficiency(self) -> Option<Deficiency> {
        match self.kind() {
            ConditionKind::Dichromat(d) | ConditionKind::Anomalous(d) => Some(d),
            ConditionKind::Identity | ConditionKind::Monochrome => None,
        }
    }
}

impl Deficiency {
    /// All deficiencies in coefficient-set order.
    pub const ALL: [Deficiency; 3] = [Deficiency::Protan, Deficiency::Deutan, Deficiency::Tritan];

    /// Index of this deficiency's confusion-line coefficient set.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Deficiency::Protan => 0,
            Deficiency::Deutan => 1,
            Deficiency::Tritan => 2,
        }
    }

    /// The full-loss condition for this cone class.
    pub const fn dichromat(self) -> Condition {
        match self {
            Deficiency::Protan => Condition::Protanopia,
            Deficiency::Deutan => Condition::Deuteranopia,
            Deficiency::Tritan => Condition::Tritanopia,
        }
    }

    /// The weakened condition for this cone class.
    pub const fn anomaly(self) -> Condition {
        match self {
            Deficiency::Protan => Condition::Protanomaly,
            Deficiency::Deutan => Condition::Deuteranomaly,
            Deficiency::Tritan => Condition::Tritanomaly,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Condition {
    type Err = Error;

    /// Exact, case-insensitive name match.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownCondition(s.to_string()))
    }
}

impl TryFrom<usize> for Condition {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        Self::from_index(index)
    }
}
