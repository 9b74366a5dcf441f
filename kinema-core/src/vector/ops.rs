//! Arithmetic operators for [`Vector`].
//!
//! Implements `+`, `-`, scalar `*` in both operand orders, the compound
//! assignment forms, and unary `-`. Scalar division is deliberately absent
//! from the operator set: use [`Vector::try_div`], which rejects a zero divisor.

use super::core::Vector;
use crate::Real;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use core::ops::*;

/// Vector + Vector
impl<T: Real, const N: usize> Add for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

/// Vector += Vector
impl<T: Real, const N: usize> AddAssign for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for (a, &b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a += b;
        }
    }
}

/// Vector - Vector
impl<T: Real, const N: usize> Sub for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

/// Vector -= Vector
impl<T: Real, const N: usize> SubAssign for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for (a, &b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a -= b;
        }
    }
}

/// Vector * scalar
impl<T: Real, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn mul(mut self, scalar: T) -> Self {
        self *= scalar;
        self
    }
}

/// Vector *= scalar
impl<T: Real, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        for c in self.as_mut_slice() {
            *c *= scalar;
        }
    }
}

/// -Vector
impl<T: Real, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_fn(|i| -self[i])
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        /// scalar * Vector
        impl<const N: usize> Mul<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;
            #[inline]
            fn mul(self, vec: Vector<$t, N>) -> Vector<$t, N> {
                vec * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64);

impl<T: Real, const N: usize> AbsDiffEq for Vector<T, N> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: Real, const N: usize> RelativeEq for Vector<T, N> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T: Real, const N: usize> UlpsEq for Vector<T, N> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
