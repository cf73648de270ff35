//! # cvd-core
//!
//! Core types for color vision deficiency simulation.
//!
//! This crate provides the foundational types used throughout the cvd-rs workspace:
//!
//! - [`Rgb8`] - An 8-bit sRGB color triple
//! - [`Condition`] - The eight simulated vision conditions
//! - [`Deficiency`], [`ConditionKind`] - How a condition maps onto the simulation paths
//! - [`Error`], [`Result`] - Unified error handling
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The crates that deal in colors
//! and conditions build on it:
//!
//! ```text
//! cvd-core (this crate)
//!    ^
//!    |
//!    +-- cvd-primaries (XYZ matrices, confusion lines)
//!    +-- cvd-sim (the simulator)
//!    +-- cvd-names (nearest color name)
//!    +-- cvd-cli
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize [`Rgb8`] as a `[r, g, b]` array

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod condition;
pub mod error;
pub mod hex;

pub use color::Rgb8;
pub use condition::{Condition, ConditionKind, Deficiency};
pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```
/// use cvd_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgb8;
    pub use crate::condition::{Condition, ConditionKind, Deficiency};
    pub use crate::error::{Error, Result};
}
