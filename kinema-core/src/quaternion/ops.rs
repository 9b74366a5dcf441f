//! Arithmetic operators for [`Quaternion`].
//!
//! `q * r` is the Hamilton product, which does not commute. `q * s` and
//! `s * q` scale every component.

use super::core::Quaternion;
use crate::Real;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use core::ops::*;

/// Quaternion + Quaternion
impl<T: Real> Add for Quaternion<T> {
    type Output = Self;
    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

/// Quaternion += Quaternion
impl<T: Real> AddAssign for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for (a, &b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a += b;
        }
    }
}

/// Quaternion - Quaternion
impl<T: Real> Sub for Quaternion<T> {
    type Output = Self;
    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

/// Quaternion -= Quaternion
impl<T: Real> SubAssign for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for (a, &b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a -= b;
        }
    }
}

/// -Quaternion
impl<T: Real> Neg for Quaternion<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.w(), -self.x(), -self.y(), -self.z())
    }
}

/// Quaternion * scalar
impl<T: Real> Mul<T> for Quaternion<T> {
    type Output = Self;
    #[inline]
    fn mul(mut self, scalar: T) -> Self {
        self *= scalar;
        self
    }
}

/// Quaternion *= scalar
impl<T: Real> MulAssign<T> for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        for c in self.as_mut_slice() {
            *c *= scalar;
        }
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        /// scalar * Quaternion
        impl Mul<Quaternion<$t>> for $t {
            type Output = Quaternion<$t>;
            #[inline]
            fn mul(self, q: Quaternion<$t>) -> Quaternion<$t> {
                q * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64);

/// Hamilton product.
///
/// ```text
/// real = l.real · r.real − l.imag · r.imag
/// imag = l.imag × r.imag + l.real · r.imag + r.real · l.imag
/// ```
impl<T: Real> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (lr, li) = (self.real(), self.imag());
        let (rr, ri) = (rhs.real(), rhs.imag());
        Self::from_parts(lr * rr - li.dot(&ri), li.cross(&ri) + ri * lr + li * rr)
    }
}

/// Quaternion *= Quaternion, i.e. `self = self * rhs`
impl<T: Real> MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> AbsDiffEq for Quaternion<T> {
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

impl<T: Real> RelativeEq for Quaternion<T> {
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

impl<T: Real> UlpsEq for Quaternion<T> {
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
