//! Conversions between quaternions and rotations.
//!
//! A unit quaternion `(cos(θ/2), n̂·sin(θ/2))` rotates by `θ` radians about the
//! unit axis `n̂`. `q` and `-q` describe the same rotation; extraction from a
//! matrix always returns the representative with `w ≥ 0`.
//!
//! The 4×4 forms are homogeneous: the rotation sits in the upper-left 3×3
//! block and the last row and column are those of the identity.
//!
//! # Extraction from a matrix
//!
//! `w` is recovered from the trace. When `w` dominates, the imaginary parts
//! come from the antisymmetric differences divided by `4w`:
//!
//! ```text
//! x = (m21 − m12) / 4w    y = (m02 − m20) / 4w    z = (m10 − m01) / 4w
//! ```
//!
//! Near a half turn `w → 0` and that division loses precision, so the
//! largest imaginary magnitude is read off the diagonal instead,
//!
//! ```text
//! |x| = ½·sqrt(m00 − m11 − m22 + m33)   (and cyclic for |y|, |z|)
//! ```
//!
//! and everything else is divided out of the off-diagonal terms by four times
//! that component (Shepperd's method). Only the largest radicand is passed
//! through a square root.

use super::core::Quaternion;
use crate::{LinalgError, LinalgResult, Matrix4, MathErrorKind, Real, Vector3};
use tracing::trace;

impl<T: Real> Quaternion<T> {
    /// Rotation by `angle` radians about `axis`.
    ///
    /// The axis is normalized first, so any nonzero length works. Fails with
    /// [`ZeroVector`](MathErrorKind::ZeroVector) for the zero axis.
    ///
    /// ```
    /// use kinema_core::{Quaternion, Vector3};
    /// use kinema_core::constants::HALF_PI;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let q = Quaternion::from_axis_angle(&Vector3::new(0.0, 0.0, 2.0), HALF_PI).unwrap();
    /// let v = q.rotate_vector(&Vector3::x_axis()).unwrap();
    /// assert_abs_diff_eq!(v, Vector3::y_axis(), epsilon = 1e-12);
    /// ```
    pub fn from_axis_angle(axis: &Vector3<T>, angle: T) -> LinalgResult<Self> {
        if axis.is_zero() {
            return Err(LinalgError::math_error(
                "Quaternion::from_axis_angle",
                MathErrorKind::ZeroVector,
                "rotation axis is the zero vector",
            ));
        }
        let axis = axis.normalized()?;
        let half = angle / (T::one() + T::one());
        Ok(Self::from_parts(half.cos(), axis * half.sin()))
    }

    /// Homogeneous rotation matrix for this quaternion.
    ///
    /// The scale factor is `s = 2 / |q|²`, not `2 / |q|`. The two agree for
    /// unit quaternions; with the squared norm a non-unit quaternion still
    /// yields the rotation of its normalized form rather than a scaled,
    /// non-orthogonal matrix. Fails with
    /// [`ZeroQuaternion`](MathErrorKind::ZeroQuaternion) if the norm is zero.
    pub fn to_rotation_matrix(&self) -> LinalgResult<Matrix4<T>> {
        let norm_squared = self.norm_squared();
        if norm_squared == T::zero() {
            return Err(LinalgError::math_error(
                "Quaternion::to_rotation_matrix",
                MathErrorKind::ZeroQuaternion,
                "zero-norm quaternion has no rotation",
            ));
        }
        let s = (T::one() + T::one()) / norm_squared;
        let (w, x, y, z) = (self.w(), self.x(), self.y(), self.z());

        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        let (o, l) = (T::zero(), T::one());
        Ok(Matrix4::from_rows([
            [l - s * (yy + zz), s * (xy - wz), s * (xz + wy), o],
            [s * (xy + wz), l - s * (xx + zz), s * (yz - wx), o],
            [s * (xz - wy), s * (yz + wx), l - s * (xx + yy), o],
            [o, o, o, l],
        ]))
    }

    /// Extracts the rotation from a homogeneous rotation matrix.
    ///
    /// `m` is expected to hold a proper rotation in its upper-left block with
    /// `m33 = 1`. Other matrices give a quaternion, but not a meaningful one.
    ///
    /// ```
    /// use kinema_core::{Matrix4, Quaternion};
    ///
    /// let q = Quaternion::from_rotation_matrix(&Matrix4::<f64>::identity());
    /// assert_eq!(q, Quaternion::identity());
    /// ```
    pub fn from_rotation_matrix(m: &Matrix4<T>) -> Self {
        let two = T::one() + T::one();
        let four = two * two;
        let (m00, m11, m22, m33) = (m[(0, 0)], m[(1, 1)], m[(2, 2)], m[(3, 3)]);
        let w = non_negative(m.trace()).sqrt() / two;
        let u = m00 + m11 + m22 - T::one();

        // 4wx, 4wy, 4wz
        let (dx, dy, dz) = (
            m[(2, 1)] - m[(1, 2)],
            m[(0, 2)] - m[(2, 0)],
            m[(1, 0)] - m[(0, 1)],
        );

        if w > T::zero() && u > m00 && u > m11 && u > m22 {
            trace!(w = %w, "extracting quaternion from large real part");
            let four_w = four * w;
            return Self::new(w, dx / four_w, dy / four_w, dz / four_w);
        }

        trace!(w = %w, "extracting quaternion from diagonal");
        // 4x², 4y², 4z²
        let (rx, ry, rz) = (
            m00 - m11 - m22 + m33,
            -m00 + m11 - m22 + m33,
            -m00 - m11 + m22 + m33,
        );
        // 4xy, 4xz, 4yz
        let (sxy, sxz, syz) = (
            m[(0, 1)] + m[(1, 0)],
            m[(0, 2)] + m[(2, 0)],
            m[(1, 2)] + m[(2, 1)],
        );

        let largest = non_negative(rx.max(ry).max(rz)).sqrt() / two;
        if largest == T::zero() {
            return Self::new(w, T::zero(), T::zero(), T::zero());
        }

        // The largest component takes the sign that makes w non-negative.
        if rx >= ry && rx >= rz {
            let x = with_sign_of(largest, dx);
            let four_x = four * x;
            Self::new(dx / four_x, x, sxy / four_x, sxz / four_x)
        } else if ry >= rz {
            let y = with_sign_of(largest, dy);
            let four_y = four * y;
            Self::new(dy / four_y, sxy / four_y, y, syz / four_y)
        } else {
            let z = with_sign_of(largest, dz);
            let four_z = four * z;
            Self::new(dz / four_z, sxz / four_z, syz / four_z, z)
        }
    }

    /// Rotates `v` by computing `q · (0, v) · q⁻¹`.
    ///
    /// Fails with [`ZeroQuaternion`](MathErrorKind::ZeroQuaternion) if the
    /// norm is zero.
    pub fn rotate_vector(&self, v: &Vector3<T>) -> LinalgResult<Vector3<T>> {
        let pure = Self::from_parts(T::zero(), *v);
        Ok((*self * pure * self.inverse()?).imag())
    }
}

#[inline]
fn non_negative<T: Real>(value: T) -> T {
    if value > T::zero() {
        value
    } else {
        T::zero()
    }
}

/// `magnitude` carrying the sign of `sign` (positive when `sign` is zero).
#[inline]
fn with_sign_of<T: Real>(magnitude: T, sign: T) -> T {
    if sign < T::zero() {
        -magnitude
    } else {
        magnitude
    }
}
