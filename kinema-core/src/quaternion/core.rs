//! The quaternion value type.
//!
//! A [`Quaternion`] is a real part `w` plus an imaginary 3-vector `(x, y, z)`,
//! stored contiguously in `(w, x, y, z)` order. That order is also what
//! [`from_slice`](Quaternion::from_slice) expects and what
//! [`as_slice`](Quaternion::as_slice) exposes.

use crate::{LinalgError, LinalgResult, MathErrorKind, Real, Vector3};
use std::fmt;

/// A quaternion `w + xi + yj + zk`.
///
/// Unit quaternions represent rotations; see
/// [`from_axis_angle`](Quaternion::from_axis_angle) and
/// [`to_rotation_matrix`](Quaternion::to_rotation_matrix). The default value is
/// the identity rotation `(1, 0, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T = f64> {
    wxyz: [T; 4],
}

impl<T: Real> Quaternion<T> {
    /// The multiplicative identity `(1, 0, 0, 0)`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    #[inline]
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { wxyz: [w, x, y, z] }
    }

    /// Builds a quaternion from its real scalar and imaginary vector.
    #[inline]
    pub fn from_parts(real: T, imag: Vector3<T>) -> Self {
        Self::new(real, imag.x(), imag.y(), imag.z())
    }

    /// Builds a quaternion from `[w, x, y, z]`.
    #[inline]
    pub fn from_array(wxyz: [T; 4]) -> Self {
        Self { wxyz }
    }

    /// Builds a quaternion from a `(w, x, y, z)` buffer of exactly 4 scalars.
    pub fn from_slice(values: &[T]) -> LinalgResult<Self> {
        let wxyz: [T; 4] = values.try_into().map_err(|_| {
            LinalgError::dimension_mismatch("Quaternion::from_slice", 4, values.len())
        })?;
        Ok(Self { wxyz })
    }

    #[inline]
    pub fn w(&self) -> T {
        self.wxyz[0]
    }

    #[inline]
    pub fn x(&self) -> T {
        self.wxyz[1]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.wxyz[2]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.wxyz[3]
    }

    /// The scalar part `w`.
    #[inline]
    pub fn real(&self) -> T {
        self.w()
    }

    /// The vector part `(x, y, z)`.
    #[inline]
    pub fn imag(&self) -> Vector3<T> {
        Vector3::new(self.x(), self.y(), self.z())
    }

    #[inline]
    pub fn set_real(&mut self, real: T) {
        self.wxyz[0] = real;
    }

    #[inline]
    pub fn set_imag(&mut self, imag: Vector3<T>) {
        self.wxyz[1] = imag.x();
        self.wxyz[2] = imag.y();
        self.wxyz[3] = imag.z();
    }

    /// Borrows the storage as `[w, x, y, z]`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.wxyz
    }

    /// Mutably borrows the storage as `[w, x, y, z]`.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.wxyz
    }

    #[inline]
    pub fn to_array(&self) -> [T; 4] {
        self.wxyz
    }

    /// Four-component dot product `w₁w₂ + x₁x₂ + y₁y₂ + z₁z₂`.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.wxyz
            .iter()
            .zip(other.wxyz.iter())
            .map(|(&a, &b)| a * b)
            .sum()
    }

    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Negates the imaginary part.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w(), -self.x(), -self.y(), -self.z())
    }

    /// Scales `self` to unit norm in place.
    ///
    /// Fails with [`NormalizeZeroQuaternion`](MathErrorKind::NormalizeZeroQuaternion)
    /// and leaves `self` unchanged if the norm is exactly zero.
    pub fn normalize(&mut self) -> LinalgResult<()> {
        let norm = self.norm();
        if norm == T::zero() {
            return Err(LinalgError::math_error(
                "Quaternion::normalize",
                MathErrorKind::NormalizeZeroQuaternion,
                "cannot normalize a zero-norm quaternion",
            ));
        }
        for c in self.wxyz.iter_mut() {
            *c /= norm;
        }
        Ok(())
    }

    /// Returns a unit-norm copy.
    pub fn normalized(&self) -> LinalgResult<Self> {
        let mut q = *self;
        q.normalize()?;
        Ok(q)
    }

    /// Computes `conjugate() / norm()²`, so that `q * q.inverse()` is the
    /// identity.
    ///
    /// ```
    /// use kinema_core::Quaternion;
    /// use approx::assert_relative_eq;
    ///
    /// let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    /// let inv = q.inverse().unwrap();
    /// assert_relative_eq!(q * inv, Quaternion::<f64>::identity(), epsilon = 1e-15);
    /// ```
    pub fn inverse(&self) -> LinalgResult<Self> {
        let norm_squared = self.norm_squared();
        if norm_squared == T::zero() {
            return Err(LinalgError::math_error(
                "Quaternion::inverse",
                MathErrorKind::ZeroQuaternion,
                "zero-norm quaternion has no inverse",
            ));
        }
        self.conjugate().try_div(norm_squared)
    }

    /// Divides every component by `divisor`.
    pub fn try_div(&self, divisor: T) -> LinalgResult<Self> {
        let mut q = *self;
        q.try_div_assign(divisor)?;
        Ok(q)
    }

    /// Divides every component by `divisor` in place.
    pub fn try_div_assign(&mut self, divisor: T) -> LinalgResult<()> {
        if divisor == T::zero() {
            return Err(LinalgError::division_by_zero("Quaternion::try_div"));
        }
        for c in self.wxyz.iter_mut() {
            *c /= divisor;
        }
        Ok(())
    }
}

impl<T: Real> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> From<[T; 4]> for Quaternion<T> {
    fn from(wxyz: [T; 4]) -> Self {
        Self::from_array(wxyz)
    }
}

impl<T: Real> From<Quaternion<T>> for [T; 4] {
    fn from(q: Quaternion<T>) -> Self {
        q.wxyz
    }
}

impl<T: Real> AsRef<[T]> for Quaternion<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Real> AsMut<[T]> for Quaternion<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Real> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion({:.9}, {:.9}, {:.9}, {:.9})",
            self.w(),
            self.x(),
            self.y(),
            self.z()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_and_default() {
        let q = Quaternion::<f64>::identity();
        assert_eq!(q.to_array(), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(Quaternion::<f64>::default(), q);
        assert_eq!(q.norm(), 1.0);
    }

    #[test]
    fn test_parts() {
        let q = Quaternion::from_parts(0.5, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(q.real(), 0.5);
        assert_eq!(q.imag(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(q, Quaternion::new(0.5, 1.0, 2.0, 3.0));

        let mut r = q;
        r.set_real(-1.0);
        r.set_imag(Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(r.to_array(), [-1.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_from_slice() {
        let q = Quaternion::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!((q.w(), q.x(), q.y(), q.z()), (1.0, 2.0, 3.0, 4.0));

        let err = Quaternion::<f64>::from_slice(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            LinalgError::dimension_mismatch("Quaternion::from_slice", 4, 3)
        );
        assert!(Quaternion::<f64>::from_slice(&[0.0; 5]).is_err());
    }

    #[test]
    fn test_flat_view_is_wxyz() {
        let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.as_slice(), &[1.0, 2.0, 3.0, 4.0]);

        q.as_mut_slice()[0] = 9.0;
        assert_eq!(q.real(), 9.0);
        let arr: [f64; 4] = q.into();
        assert_eq!(arr, [9.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_norm_and_conjugate() {
        let q = Quaternion::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(q.norm_squared(), 25.0);
        assert_eq!(q.norm(), 5.0);
        assert_eq!(q.conjugate(), Quaternion::new(1.0, -2.0, -2.0, -4.0));
        assert_eq!(q.conjugate().conjugate(), q);
    }

    #[test]
    fn test_normalize() {
        let mut q = Quaternion::new(0.0, 3.0, 0.0, 4.0);
        q.normalize().unwrap();
        assert_eq!(q, Quaternion::new(0.0, 0.6, 0.0, 0.8));
        assert_relative_eq!(q.norm(), 1.0);
    }

    #[test]
    fn test_normalize_zero_quaternion() {
        let mut q = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        let err = q.normalize().unwrap_err();
        assert!(err.is_kind(MathErrorKind::NormalizeZeroQuaternion));
        assert_eq!(q.to_array(), [0.0; 4]);
        assert!(q.normalized().is_err());
    }

    #[test]
    fn test_inverse_zero_quaternion() {
        let q = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        let err = q.inverse().unwrap_err();
        assert!(err.is_kind(MathErrorKind::ZeroQuaternion));
    }

    #[test]
    fn test_inverse_of_unit_is_conjugate() {
        let q = Quaternion::new(0.0, 0.6, 0.0, 0.8);
        assert_relative_eq!(q.inverse().unwrap(), q.conjugate());
    }

    #[test]
    fn test_try_div() {
        let q = Quaternion::new(2.0, 4.0, 6.0, 8.0);
        assert_eq!(q.try_div(2.0).unwrap(), Quaternion::new(1.0, 2.0, 3.0, 4.0));

        let mut r = q;
        let err = r.try_div_assign(0.0).unwrap_err();
        assert!(err.is_kind(MathErrorKind::DivisionByZero));
        assert_eq!(r, q);
    }

    #[test]
    fn test_display() {
        let q = Quaternion::new(1.0, 0.0, -0.5, 0.25);
        assert_eq!(
            format!("{}", q),
            "Quaternion(1.000000000, 0.000000000, -0.500000000, 0.250000000)"
        );
    }
}
