//! Double-precision triplet for linear RGB and XYZ values.

use std::ops::{Add, Mul};

/// Linear RGB (`x`=R, `y`=G, `z`=B) or XYZ triplet.
///
/// # Example
///
/// ```rust
/// use cvd_math::Vec3;
///
/// let v = Vec3::new(0.25, 0.5, 0.125) + Vec3::ONE * 0.5;
/// assert_eq!(v.sum(), 2.375);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// R or X
    pub x: f64,
    /// G or Y
    pub y: f64,
    /// B or Z
    pub z: f64,
}

impl Vec3 {
    /// (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector from `[x, y, z]`.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// `x + y + z`, summed left to right.
    #[inline]
    pub fn sum(self) -> f64 {
        self.x + self.y + self.z
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
