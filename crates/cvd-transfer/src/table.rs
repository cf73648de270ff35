//! Precomputed 8-bit to linear lookup table.
//!
//! # Sampling
//!
//! The table holds 256 samples of `t^gamma` where the sample positions are
//! 256 evenly spaced points over `[0, 256]` divided by 256:
//!
//! ```text
//! s_i = i * (256 / 255)      for i in 0..255
//! s_255 = 256                (endpoint pinned exactly)
//! entry_i = (s_i / 256)^gamma
//! ```
//!
//! On paper `s_i / 256 == i / 255`, but the two are not the same in floating
//! point: for 24 of the 256 code values (33, 37, 41, ...) the scaled position
//! differs from `i / 255` in the last bit, and so does the entry. Simulation
//! output is defined against this exact evaluation order, so the table must
//! be built this way and not "simplified" to `(i / 255)^gamma`.

use crate::gamma::{DISPLAY_GAMMA, encode_channel_with, gamma_eotf};

/// Number of entries, one per 8-bit code value.
pub const TABLE_SIZE: usize = 256;

/// 8-bit code value to linear light lookup.
///
/// Built once, read-only afterwards; cheap to share by reference across
/// threads.
///
/// # Example
///
/// ```rust
/// use cvd_transfer::GammaTable;
///
/// let table = GammaTable::display();
/// assert_eq!(table.linearize(0), 0.0);
/// assert_eq!(table.linearize(255), 1.0);
/// assert!(table.linearize(128) > 0.2 && table.linearize(128) < 0.23);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GammaTable {
    gamma: f64,
    entries: [f64; TABLE_SIZE],
}

impl GammaTable {
    /// Builds a table for the given exponent.
    pub fn new(gamma: f64) -> Self {
        let mut entries = [0.0; TABLE_SIZE];
        for (i, entry) in entries.iter_mut().enumerate() {
            *entry = gamma_eotf(sample_position(i) / 256.0, gamma);
        }
        Self { gamma, entries }
    }

    /// Table for the 2.2 display gamma.
    pub fn display() -> Self {
        Self::new(DISPLAY_GAMMA)
    }

    /// Exponent the table was built with.
    #[inline]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Linear-light value of an 8-bit channel.
    #[inline]
    pub fn linearize(&self, channel: u8) -> f64 {
        self.entries[channel as usize]
    }

    /// Linearizes three channels at once.
    #[inline]
    pub fn linearize_rgb(&self, rgb: [u8; 3]) -> [f64; 3] {
        [self.linearize(rgb[0]), self.linearize(rgb[1]), self.linearize(rgb[2])]
    }

    /// Inverse direction: clamp, apply `1/gamma`, scale and truncate.
    ///
    /// See [`crate::encode_channel`].
    #[inline]
    pub fn encode(&self, linear: f64) -> u8 {
        encode_channel_with(linear, self.gamma)
    }

    /// All entries in code-value order.
    #[inline]
    pub fn entries(&self) -> &[f64; TABLE_SIZE] {
        &self.entries
    }
}

impl Default for GammaTable {
    fn default() -> Self {
        Self::display()
    }
}

/// Position of sample `i` on the `[0, 256]` axis.
fn sample_position(i: usize) -> f64 {
    const STEP: f64 = 256.0 / (TABLE_SIZE - 1) as f64;
    if i == TABLE_SIZE - 1 {
        256.0
    } else {
        i as f64 * STEP
    }
}
