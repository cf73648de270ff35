//! 8-bit sRGB color triple.
//!
//! [`Rgb8`] is the value type every simulation consumes and produces. Channels
//! are gamma-encoded sRGB intensities; the `u8` storage enforces the
//! `[0, 255]` range at the type level.

use std::fmt;

use crate::{Error, Result};

/// An sRGB-encoded color with 8 bits per channel.
///
/// # Example
///
/// ```rust
/// use cvd_core::Rgb8;
///
/// let red = Rgb8::new(255, 0, 0);
/// assert_eq!(red.to_array(), [255, 0, 0]);
/// assert_eq!(red.to_string(), "(255, 0, 0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[u8; 3]", into = "[u8; 3]"))]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White (255, 255, 255).
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a color from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color with all three channels set to `v`.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Creates a color from wide integers, rejecting values outside `[0, 255]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cvd_core::{Error, Rgb8};
    ///
    /// assert_eq!(Rgb8::try_from_ints(1, 2, 3), Ok(Rgb8::new(1, 2, 3)));
    /// assert_eq!(
    ///     Rgb8::try_from_ints(256, 0, 0),
    ///     Err(Error::ChannelOutOfRange { value: 256 })
    /// );
    /// ```
    pub fn try_from_ints(r: i64, g: i64, b: i64) -> Result<Self> {
        let channel = |value: i64| {
            u8::try_from(value).map_err(|_| Error::ChannelOutOfRange { value })
        };
        Ok(Self::new(channel(r)?, channel(g)?, channel(b)?))
    }

    /// Returns the channels as `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns true if all channels are equal.
    #[inline]
    pub const fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Squared Euclidean distance in RGB space.
    #[inline]
    pub fn distance_sq(self, other: Self) -> u32 {
        let d = |a: u8, b: u8| {
            let d = a.abs_diff(b) as u32;
            d * d
        };
        d(self.r, other.r) + d(self.g, other.g) + d(self.b, other.b)
    }
}

impl From<[u8; 3]> for Rgb8 {
    #[inline]
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Rgb8> for [u8; 3] {
    #[inline]
    fn from(c: Rgb8) -> Self {
        c.to_array()
    }
}

impl From<(u8, u8, u8)> for Rgb8 {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}
