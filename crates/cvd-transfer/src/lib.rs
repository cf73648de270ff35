//! # cvd-transfer
//!
//! Transfer functions for moving 8-bit display values into linear light and
//! back.
//!
//! # Terminology
//!
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **Gamma**: The exponent of the power-law curve (2.2 here)
//!
//! # Contents
//!
//! | Item | Direction | Domain |
//! |------|-----------|--------|
//! | [`gamma_eotf`] | encoded -> linear | [0, 1] |
//! | [`gamma_oetf`] | linear -> encoded | [0, 1] |
//! | [`GammaTable`] | 8-bit -> linear, precomputed | 0..=255 |
//! | [`encode_channel`] | linear -> 8-bit, clamped and truncated | any f64 |
//!
//! # Usage
//!
//! ```rust
//! use cvd_transfer::{GammaTable, encode_channel};
//!
//! let table = GammaTable::display();
//! assert_eq!(table.linearize(0), 0.0);
//! let linear = table.linearize(200);
//! assert_eq!(encode_channel(linear), 200);
//! ```
//!
//! # Used By
//!
//! - `cvd-sim` - decode before the XYZ projection, encode after the gamut fix

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamma;
pub mod table;

pub use gamma::{DISPLAY_GAMMA, encode_channel, encode_channel_with, gamma_eotf, gamma_oetf};
pub use table::GammaTable;
