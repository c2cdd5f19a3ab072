//! Three-component vector for tristimulus values and RGB triplets.
//!
//! [`Vec3`] is a plain `Copy` value: every operation returns a new vector
//! and leaves its operands untouched.
//!
//! # Usage
//!
//! ```rust
//! use photog_math::Vec3;
//!
//! let lms_dest = Vec3::new(3.0, 4.0, 5.0);
//! let lms_source = Vec3::new(3.0, 2.0, 1.0);
//! assert_eq!(lms_dest / lms_source, Vec3::new(1.0, 2.0, 5.0));
//! ```

use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

/// A 3-vector of `f32`.
///
/// For RGB: x=R, y=G, z=B. For XYZ: x=X, y=Y, z=Z. For LMS: x=L, y=M, z=S.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// First component (R, X or L)
    pub x: f32,
    /// Second component (G, Y or M)
    pub y: f32,
    /// Third component (B, Z or S)
    pub z: f32,
}

impl Vec3 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// All ones.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Same value in every component.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Componentwise quotient `self[i] / rhs[i]`.
    ///
    /// No guard: a zero divisor yields IEEE infinity or NaN.
    ///
    /// ```rust
    /// use photog_math::Vec3;
    ///
    /// let q = Vec3::new(1.0, 0.0, -1.0).div_elem(Vec3::ZERO);
    /// assert!(q.x.is_infinite() && q.y.is_nan() && q.z.is_infinite());
    /// ```
    #[inline]
    pub fn div_elem(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }

    /// Applies `f` to each component.
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// `true` if no component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to [`glam::Vec3`].
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    /// Creates from [`glam::Vec3`].
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index {i} out of range"),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index {i} out of range"),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// Vec3 / Vec3 is componentwise
impl Div for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.div_elem(rhs)
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> [f32; 3] {
        v.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_elem() {
        let q = Vec3::new(3.0, 4.0, 5.0).div_elem(Vec3::new(3.0, 2.0, 1.0));
        assert_eq!(q, Vec3::new(1.0, 2.0, 5.0));
    }

    #[test]
    fn test_div_by_zero_propagates() {
        let q = Vec3::ONE / Vec3::new(0.0, 1.0, 1.0);
        assert!(q.x.is_infinite());
        assert!(!q.is_finite());
    }

    #[test]
    fn test_index() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v[1] = 7.0;
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 7.0);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn test_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::splat(1.0);
        assert_eq!(a + b, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(a - b, Vec3::new(0.0, 1.0, 2.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a / Vec3::new(1.0, 2.0, 3.0), Vec3::ONE);
    }

    #[test]
    fn test_glam_roundtrip() {
        let v = Vec3::new(0.25, -1.0, 8.0);
        assert_eq!(Vec3::from_glam(v.to_glam()), v);
    }
}
