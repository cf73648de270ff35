//! Anomalous trichromacy.
//!
//! An anomalous trichromat still has all three cone classes, one of them
//! shifted. It is modeled as a fixed-weight blend from the original color
//! toward the dichromat simulation of the same deficiency:
//!
//! ```text
//! out = trunc((v * simulated + original) / (v + 1))     v = 1.75
//! ```

use cvd_core::Rgb8;

/// Weight of the dichromat result relative to the original.
pub const ANOMALY_STRENGTH: f64 = 1.75;

/// Blends `original` toward its dichromat simulation.
///
/// # Example
///
/// ```rust
/// use cvd_core::Rgb8;
/// use cvd_sim::anomaly::blend;
///
/// let out = blend(Rgb8::new(255, 0, 0), Rgb8::new(144, 128, 33));
/// assert_eq!(out, Rgb8::new(184, 81, 21));
/// ```
pub fn blend(original: Rgb8, simulated: Rgb8) -> Rgb8 {
    let d = ANOMALY_STRENGTH + 1.0;
    let mix = |o: u8, s: u8| ((ANOMALY_STRENGTH * f64::from(s) + f64::from(o)) / d) as u8;
    Rgb8::new(
        mix(original.r, simulated.r),
        mix(original.g, simulated.g),
        mix(original.b, simulated.b),
    )
}
