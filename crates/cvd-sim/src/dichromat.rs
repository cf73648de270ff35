//! Dichromat projection onto a confusion line.
//!
//! # Algorithm
//!
//! 1. Linearize each channel through the gamma table
//! 2. Linear RGB -> XYZ
//! 3. Chromaticity `(cu, cv) = (X, Y) / (X + Y + Z)`, or `(0, 0)` for black
//! 4. Neutral point with the same luminance: `nx = wx*Y/wy`, `nz = wz*Y/wy`
//! 5. Line through `(cu, cv)` and the confusion point (sided slope, see
//!    [`ConfusionLine::slope_through`])
//! 6. Intersect it with the anchor line -> `(du, dv)`
//! 7. Rebuild XYZ at that chromaticity, keeping `Y`
//! 8. Back to linear RGB, plus the RGB direction toward the neutral point
//!    (with its Y component forced to 0)
//! 9. Gamut fix: the largest fraction of that direction, in [0, 1], that
//!    brings an out-of-range channel back to 0 or 1
//! 10. Apply the fix
//! 11. Encode back to 8 bits
//!
//! Degenerate geometry (parallel lines, `dv == 0`) is not guarded; the
//! resulting non-finite values flow into the encoder, which saturates them.

use cvd_core::Rgb8;
use cvd_math::Vec3;
use cvd_primaries::{ConfusionLine, NEUTRAL_WHITE, RGB_TO_XYZ, XYZ_TO_RGB};
use cvd_transfer::GammaTable;
use tracing::trace;

/// Projects `color` onto the dichromat's confusion line.
pub fn project(gamma: &GammaTable, line: &ConfusionLine, color: Rgb8) -> Rgb8 {
    let c = RGB_TO_XYZ * Vec3::from_array(gamma.linearize_rgb(color.to_array()));

    let sum = c.sum();
    let (cu, cv) = if sum != 0.0 {
        (c.x / sum, c.y / sum)
    } else {
        (0.0, 0.0)
    };

    let (nx, nz) = NEUTRAL_WHITE.neutral_xz(c.y);

    let clm = line.slope_through(cu, cv);
    let clyi = cv - cu * clm;
    let (du, dv) = line.intersect(clm, clyi);

    let sx = du * c.y / dv;
    let sy = c.y;
    let sz = (1.0 - (du + dv)) * c.y / dv;

    let sim = XYZ_TO_RGB * Vec3::new(sx, sy, sz);
    let toward_neutral = XYZ_TO_RGB * Vec3::new(nx - sx, 0.0, nz - sz);

    let adjust = gamut_adjustment(sim, toward_neutral);
    if adjust > 0.0 {
        trace!(%color, adjust, "gamut fix applied");
    }
    let fixed = sim + toward_neutral * adjust;

    Rgb8::new(
        gamma.encode(fixed.x),
        gamma.encode(fixed.y),
        gamma.encode(fixed.z),
    )
}

/// Fraction of `delta` to add to `rgb` so that no channel is left outside
/// [0, 1], as far as a single step in [0, 1] can achieve it.
///
/// Per channel, only a positive gradient counts; fractions outside [0, 1]
/// are dropped to 0. The result is the maximum over R, G, B, scanned in that
/// order with strict `>` so a NaN in the red slot is kept.
pub fn gamut_adjustment(rgb: Vec3, delta: Vec3) -> f64 {
    let adj = [
        channel_adjustment(rgb.x, delta.x),
        channel_adjustment(rgb.y, delta.y),
        channel_adjustment(rgb.z, delta.z),
    ];
    adj[1..]
        .iter()
        .fold(adj[0], |max, &a| if a > max { a } else { max })
}

fn channel_adjustment(value: f64, gradient: f64) -> f64 {
    let adj = if gradient > 0.0 {
        let target = if value < 0.0 { 0.0 } else { 1.0 };
        (target - value) / gradient
    } else {
        0.0
    };
    if adj > 1.0 || adj < 0.0 { 0.0 } else { adj }
}
