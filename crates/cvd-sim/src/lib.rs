//! # cvd-sim
//!
//! Simulates how an sRGB color appears under each supported vision condition.
//!
//! # Architecture
//!
//! ```text
//!                     cvd-sim
//!                        |
//!          +-------------+-------------+
//!          |                           |
//!    cvd-transfer               cvd-primaries
//!   (gamma table)         (matrices, confusion lines)
//!                                      |
//!                            +---------+---------+
//!                            |                   |
//!                        cvd-math            cvd-core
//! ```
//!
//! # Conversion Paths
//!
//! | Condition | Path |
//! |-----------|------|
//! | Normal | identity |
//! | Protanopia, Deuteranopia, Tritanopia | [`dichromat::project`] |
//! | Protanomaly, Deuteranomaly, Tritanomaly | [`dichromat::project`] then [`anomaly::blend`] |
//! | Monochromacy | [`mono::reduce`] |
//!
//! # Quick Start
//!
//! ```rust
//! use cvd_sim::{Condition, Rgb8, Simulator};
//!
//! let sim = Simulator::new();
//! let seen = sim.convert(Rgb8::new(255, 0, 0), Condition::Protanopia);
//! assert_eq!(seen, Rgb8::new(144, 128, 33));
//!
//! // Numeric selectors fail fast instead of defaulting
//! assert!(sim.convert_index(Rgb8::BLACK, 8).is_err());
//! ```
//!
//! A [`Simulator`] holds only immutable tables; build one per process and
//! share it by reference, including across threads.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod anomaly;
pub mod dichromat;
pub mod mono;
mod simulator;

pub use simulator::Simulator;

pub use cvd_core::{Condition, ConditionKind, Deficiency, Error, Result, Rgb8};

// Re-export sub-crates for convenience
pub use cvd_primaries as primaries;
pub use cvd_transfer as transfer;
