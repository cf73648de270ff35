//! # cvd-math
//!
//! Math primitives for color vision deficiency simulation:
//!
//! - [`Mat3`] - 3x3 matrices for RGB/XYZ transforms
//! - [`Vec3`] - 3D vectors for RGB and XYZ triplets
//!
//! # Design
//!
//! Everything is `f64`. The simulation must reproduce reference output
//! bit for bit, so the types deliberately avoid SIMD lanes and fused
//! multiply-add: every product and sum is evaluated left to right in the
//! written order. All matrix operations assume **row-major** storage and
//! **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use cvd_math::{Mat3, Vec3};
//!
//! let m = Mat3::from_rows([
//!     [0.430574, 0.341550, 0.178325],
//!     [0.222015, 0.706655, 0.071330],
//!     [0.020183, 0.129553, 0.939180],
//! ]);
//!
//! let xyz = m * Vec3::new(1.0, 0.5, 0.25);
//! ```
//!
//! # Used By
//!
//! - `cvd-primaries` - fixed RGB/XYZ matrices
//! - `cvd-sim` - the confusion-line projection

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;
