//! Pure power-law gamma.
//!
//! Display values are treated as a plain 2.2 power curve (no linear toe
//! segment as in the piecewise sRGB curve).
//!
//! # Range
//!
//! - Input/Output: [0, 1]; [`encode_channel`] clamps anything outside

/// Display gamma exponent.
pub const DISPLAY_GAMMA: f64 = 2.2;

/// EOTF for arbitrary gamma: `v^gamma`.
///
/// # Example
///
/// ```rust
/// use cvd_transfer::gamma::gamma_eotf;
///
/// let linear = gamma_eotf(0.5, 2.2);
/// assert!((linear - 0.2176).abs() < 1e-4);
/// ```
#[inline]
pub fn gamma_eotf(v: f64, gamma: f64) -> f64 {
    if v <= 0.0 { 0.0 } else { v.powf(gamma) }
}

/// OETF for arbitrary gamma: `l^(1/gamma)`.
///
/// # Example
///
/// ```rust
/// use cvd_transfer::gamma::gamma_oetf;
///
/// let encoded = gamma_oetf(0.218, 2.2);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn gamma_oetf(l: f64, gamma: f64) -> f64 {
    if l <= 0.0 { 0.0 } else { l.powf(1.0 / gamma) }
}

/// Encodes a linear value to an 8-bit display channel.
///
/// The order is fixed: clamp to [0, 1], apply `x^(1/2.2)`, scale by 255,
/// then truncate toward zero. Truncation (not rounding) means most
/// intermediate values land one step lower than a round-to-nearest encoder
/// would give. NaN saturates to 0.
///
/// # Example
///
/// ```rust
/// use cvd_transfer::encode_channel;
///
/// assert_eq!(encode_channel(-0.5), 0);
/// assert_eq!(encode_channel(1.5), 255);
/// assert_eq!(encode_channel(0.5), 186);
/// ```
#[inline]
pub fn encode_channel(x: f64) -> u8 {
    encode_channel_with(x, DISPLAY_GAMMA)
}

/// [`encode_channel`] for an arbitrary gamma.
#[inline]
pub fn encode_channel_with(x: f64, gamma: f64) -> u8 {
    let encoded = if x <= 0.0 {
        0.0
    } else if x >= 1.0 {
        1.0
    } else {
        x.powf(1.0 / gamma)
    };
    (255.0 * encoded) as u8
}
