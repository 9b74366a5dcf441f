//! Arithmetic operators for [`Matrix`].
//!
//! Element-wise `+`/`-`, scalar `*` in both operand orders, the matrix product,
//! and matrix-vector products (`m * v` treats `v` as a column, `v * m` as a row).

use super::core::Matrix;
use crate::{Real, Vector};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use core::ops::*;

/// Matrix + Matrix
impl<T: Real, const N: usize> Add for Matrix<T, N> {
    type Output = Self;
    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

/// Matrix += Matrix
impl<T: Real, const N: usize> AddAssign for Matrix<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for (a, &b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a += b;
        }
    }
}

/// Matrix - Matrix
impl<T: Real, const N: usize> Sub for Matrix<T, N> {
    type Output = Self;
    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

/// Matrix -= Matrix
impl<T: Real, const N: usize> SubAssign for Matrix<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for (a, &b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a -= b;
        }
    }
}

/// -Matrix
impl<T: Real, const N: usize> Neg for Matrix<T, N> {
    type Output = Self;
    #[inline]
    fn neg(mut self) -> Self {
        for e in self.as_mut_slice() {
            *e = -*e;
        }
        self
    }
}

/// Matrix * scalar
impl<T: Real, const N: usize> Mul<T> for Matrix<T, N> {
    type Output = Self;
    #[inline]
    fn mul(mut self, scalar: T) -> Self {
        self *= scalar;
        self
    }
}

/// Matrix *= scalar
impl<T: Real, const N: usize> MulAssign<T> for Matrix<T, N> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        for e in self.as_mut_slice() {
            *e *= scalar;
        }
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        /// scalar * Matrix
        impl<const N: usize> Mul<Matrix<$t, N>> for $t {
            type Output = Matrix<$t, N>;
            #[inline]
            fn mul(self, matrix: Matrix<$t, N>) -> Matrix<$t, N> {
                matrix * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64);

impl<T: Real, const N: usize> Mul for Matrix<T, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Real, const N: usize> Mul<&Matrix<T, N>> for Matrix<T, N> {
    type Output = Matrix<T, N>;

    fn mul(self, rhs: &Matrix<T, N>) -> Matrix<T, N> {
        self.multiply(rhs)
    }
}

impl<T: Real, const N: usize> Mul<Matrix<T, N>> for &Matrix<T, N> {
    type Output = Matrix<T, N>;

    fn mul(self, rhs: Matrix<T, N>) -> Matrix<T, N> {
        self.multiply(&rhs)
    }
}

impl<T: Real, const N: usize> Mul<&Matrix<T, N>> for &Matrix<T, N> {
    type Output = Matrix<T, N>;

    fn mul(self, rhs: &Matrix<T, N>) -> Matrix<T, N> {
        self.multiply(rhs)
    }
}

/// Matrix *= Matrix, i.e. `self = self * rhs`
impl<T: Real, const N: usize> MulAssign for Matrix<T, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

/// Matrix * column vector
impl<T: Real, const N: usize> Mul<Vector<T, N>> for Matrix<T, N> {
    type Output = Vector<T, N>;

    fn mul(self, vec: Vector<T, N>) -> Vector<T, N> {
        self.mul_vector(&vec)
    }
}

impl<T: Real, const N: usize> Mul<Vector<T, N>> for &Matrix<T, N> {
    type Output = Vector<T, N>;

    fn mul(self, vec: Vector<T, N>) -> Vector<T, N> {
        self.mul_vector(&vec)
    }
}

/// row vector * Matrix
impl<T: Real, const N: usize> Mul<Matrix<T, N>> for Vector<T, N> {
    type Output = Vector<T, N>;

    fn mul(self, matrix: Matrix<T, N>) -> Vector<T, N> {
        matrix.vector_mul(&self)
    }
}

impl<T: Real, const N: usize> AbsDiffEq for Matrix<T, N> {
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

impl<T: Real, const N: usize> RelativeEq for Matrix<T, N> {
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

impl<T: Real, const N: usize> UlpsEq for Matrix<T, N> {
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
