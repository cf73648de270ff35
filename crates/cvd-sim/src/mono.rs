//! Monochromacy: luminance only.

use cvd_core::Rgb8;

/// Luma weights for R, G, B.
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Collapses a color to its truncated luma, replicated on all channels.
///
/// # Example
///
/// ```rust
/// use cvd_core::Rgb8;
/// use cvd_sim::mono::reduce;
///
/// assert_eq!(reduce(Rgb8::new(255, 0, 0)), Rgb8::gray(76));
/// assert_eq!(reduce(Rgb8::WHITE), Rgb8::WHITE);
/// ```
pub fn reduce(color: Rgb8) -> Rgb8 {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    let luma = (f64::from(color.r) * wr) + (f64::from(color.g) * wg) + (f64::from(color.b) * wb);
    Rgb8::gray(luma as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries() {
        assert_eq!(reduce(Rgb8::new(0, 255, 0)), Rgb8::gray(149));
        assert_eq!(reduce(Rgb8::new(0, 0, 255)), Rgb8::gray(29));
        assert_eq!(reduce(Rgb8::BLACK), Rgb8::BLACK);
    }

    #[test]
    fn test_grays_map_to_themselves_or_one_below() {
        for v in 0..=255u8 {
            let out = reduce(Rgb8::gray(v)).r;
            assert!(out == v || out + 1 == v, "{v} -> {out}");
        }
    }
}
