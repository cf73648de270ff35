//! Error types for cvd-rs operations.
//!
//! The simulation itself never fails: every well-typed input yields a color.
//! Errors only arise at the boundary, where loosely typed caller input
//! (numeric condition indices, selector strings, hex strings, wide integers)
//! is turned into the strong types of this crate.
//!
//! # Usage
//!
//! ```rust
//! use cvd_core::{Condition, Error};
//!
//! let err = Condition::from_index(8).unwrap_err();
//! assert!(matches!(err, Error::InvalidCondition(8)));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building cvd-rs inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Numeric condition selector outside `0..8`.
    #[error("invalid condition index {0} (expected 0..{max})", max = crate::Condition::COUNT)]
    InvalidCondition(usize),

    /// Condition name that matches no variant.
    #[error("unknown condition '{0}'")]
    UnknownCondition(String),

    /// Malformed hex color string.
    #[error("invalid hex color '{0}' (expected #rgb or #rrggbb)")]
    InvalidHex(String),

    /// Channel value outside the 8-bit range.
    #[error("channel value {value} out of range [0, 255]")]
    ChannelOutOfRange {
        /// Offending value.
        value: i64,
    },
}
