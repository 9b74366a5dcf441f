//! Determinants, cofactors, adjugates and inverses.
//!
//! The determinant of an `N × N` matrix is computed by Laplace expansion along
//! the first row, recursing through `(N-1) × (N-1)` submatrices down to the
//! closed-form 2×2 case:
//!
//! ```text
//! det(M) = Σ_j (-1)^j · M(0, j) · det(M with row 0 and column j deleted)
//! ```
//!
//! The expansion costs `O(N!)`, so it is only provided for `N ≤ 4`. Each
//! submatrix is its own fixed-size value, which is why the machinery is
//! expressed through the [`Determinant`] and [`Submatrix`] traits: they are
//! implemented for the supported sizes only, and asking for the determinant of
//! a larger matrix is a compile-time error.
//!
//! ```
//! use kinema_core::{Determinant, Matrix3};
//!
//! let m = Matrix3::from_rows([
//!     [2.0, 0.0, 1.0],
//!     [1.0, 1.0, 1.0],
//!     [1.0, 0.0, 1.0],
//! ]);
//! assert_eq!(m.determinant(), 1.0);
//!
//! let inv = m.inverse().unwrap();
//! assert_eq!(m * inv, Matrix3::<f64>::identity());
//! ```

use super::core::Matrix;
use crate::{LinalgError, LinalgResult, MathErrorKind, Real};

/// Types with a scalar determinant.
pub trait Determinant<T: Real> {
    fn determinant(&self) -> T;
}

/// Square matrices that can drop one row and one column.
pub trait Submatrix<T: Real> {
    /// The `(N-1) × (N-1)` matrix left after the deletion.
    type Minor: Determinant<T>;

    /// Deletes `row` and `col`, keeping the remaining elements in order.
    ///
    /// Panics if either index is out of range; use
    /// [`Matrix::submatrix`] for a checked version.
    fn strike(&self, row: usize, col: usize) -> Self::Minor;
}

/// Copies `m` without `row` and `col` into an `M × M` matrix, `M = N - 1`.
fn strike_into<T: Real, const N: usize, const M: usize>(
    m: &Matrix<T, N>,
    row: usize,
    col: usize,
) -> Matrix<T, M> {
    debug_assert_eq!(M + 1, N);
    assert!(
        row < N && col < N,
        "Matrix{} submatrix index out of bounds: ({}, {})",
        N,
        row,
        col
    );
    Matrix::from_fn(|r, c| {
        let src_row = if r < row { r } else { r + 1 };
        let src_col = if c < col { c } else { c + 1 };
        m[(src_row, src_col)]
    })
}

impl<T: Real> Determinant<T> for Matrix<T, 1> {
    #[inline]
    fn determinant(&self) -> T {
        self[(0, 0)]
    }
}

impl<T: Real> Determinant<T> for Matrix<T, 2> {
    #[inline]
    fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }
}

macro_rules! impl_submatrix {
    ($($n:literal => $m:literal),* $(,)?) => {$(
        impl<T: Real> Submatrix<T> for Matrix<T, $n> {
            type Minor = Matrix<T, $m>;

            #[inline]
            fn strike(&self, row: usize, col: usize) -> Matrix<T, $m> {
                strike_into::<T, $n, $m>(self, row, col)
            }
        }
    )*};
}

impl_submatrix!(2 => 1, 3 => 2, 4 => 3);

macro_rules! impl_laplace_determinant {
    ($($n:literal),* $(,)?) => {$(
        impl<T: Real> Determinant<T> for Matrix<T, $n> {
            fn determinant(&self) -> T {
                (0..$n).fold(T::zero(), |det, col| {
                    let term = self[(0, col)] * self.strike(0, col).determinant();
                    if col % 2 == 0 {
                        det + term
                    } else {
                        det - term
                    }
                })
            }
        }
    )*};
}

impl_laplace_determinant!(3, 4);

/// Embeds `m` in the top-left block of an `N × N` identity matrix.
fn embed<T: Real, const M: usize, const N: usize>(m: &Matrix<T, M>) -> Matrix<T, N> {
    Matrix::from_fn(|row, col| {
        if row < M && col < M {
            m[(row, col)]
        } else if row == col {
            T::one()
        } else {
            T::zero()
        }
    })
}

macro_rules! impl_embed {
    ($($m:literal => $n:literal),* $(,)?) => {$(
        /// Pads with the identity: the new last row and column are the
        /// standard basis vector.
        impl<T: Real> From<Matrix<T, $m>> for Matrix<T, $n> {
            fn from(m: Matrix<T, $m>) -> Self {
                embed::<T, $m, $n>(&m)
            }
        }
    )*};
}

impl_embed!(2 => 3, 3 => 4);

impl<T: Real, const N: usize> Matrix<T, N>
where
    Self: Submatrix<T> + Determinant<T>,
{
    /// Returns a copy without `row` and `col`.
    pub fn submatrix(
        &self,
        row: usize,
        col: usize,
    ) -> LinalgResult<<Self as Submatrix<T>>::Minor> {
        if row >= N {
            return Err(LinalgError::index_out_of_range("Matrix::submatrix", row, N));
        }
        if col >= N {
            return Err(LinalgError::index_out_of_range("Matrix::submatrix", col, N));
        }
        Ok(self.strike(row, col))
    }

    /// Determinant of the submatrix without `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> LinalgResult<T> {
        Ok(self.submatrix(row, col)?.determinant())
    }

    /// Signed minor: `(-1)^(row + col) · minor(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> LinalgResult<T> {
        self.minor(row, col)
            .map(|minor| Self::checkerboard(row, col, minor))
    }

    /// Matrix of all cofactors.
    pub fn cofactor_matrix(&self) -> Self {
        Self::from_fn(|row, col| {
            Self::checkerboard(row, col, self.strike(row, col).determinant())
        })
    }

    /// Transpose of the cofactor matrix.
    ///
    /// Satisfies `M · adj(M) = det(M) · I` for every square `M`, singular or not.
    pub fn adjugate(&self) -> Self {
        self.cofactor_matrix().transpose()
    }

    /// Returns `true` if the determinant is nonzero.
    pub fn is_invertible(&self) -> bool {
        self.determinant() != T::zero()
    }

    /// Computes `adjugate() / determinant()`.
    ///
    /// Fails with [`SingularMatrix`](MathErrorKind::SingularMatrix) when the
    /// determinant is exactly zero. Nearly singular matrices are inverted as
    /// they are; check [`determinant`](Determinant::determinant) yourself if
    /// you need a conditioning threshold.
    ///
    /// ```
    /// use kinema_core::{Matrix2, MathErrorKind};
    ///
    /// // Second row is half the first
    /// let m = Matrix2::from_rows([[2.6, 4.8], [1.3, 2.4]]);
    /// let err = m.inverse().unwrap_err();
    /// assert!(err.is_kind(MathErrorKind::SingularMatrix));
    /// ```
    pub fn inverse(&self) -> LinalgResult<Self> {
        let det = self.determinant();
        if det == T::zero() {
            tracing::debug!(dimension = N, "rejecting inverse of singular matrix");
            return Err(LinalgError::math_error(
                "Matrix::inverse",
                MathErrorKind::SingularMatrix,
                "determinant is zero",
            ));
        }
        self.adjugate().try_div(det)
    }

    /// Checks whether the rows form an orthonormal set within `tolerance` and
    /// the determinant is +1 (a proper rotation).
    ///
    /// ```
    /// use kinema_core::Matrix3;
    ///
    /// let rot = Matrix3::from_rows([
    ///     [0.0, -1.0, 0.0],
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]);
    /// assert!(rot.is_orthonormal(1e-14));
    ///
    /// let scaled = Matrix3::from_rows([
    ///     [2.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]);
    /// assert!(!scaled.is_orthonormal(1e-14));
    /// ```
    pub fn is_orthonormal(&self, tolerance: T) -> bool {
        if (self.determinant() - T::one()).abs() > tolerance {
            return false;
        }
        let product = self.multiply(&self.transpose());
        product.max_difference(&Self::identity()) <= tolerance
    }

    #[inline]
    fn checkerboard(row: usize, col: usize, value: T) -> T {
        if (row + col) % 2 == 0 {
            value
        } else {
            -value
        }
    }
}
