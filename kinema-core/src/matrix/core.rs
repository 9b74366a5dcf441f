//! Fixed-size square matrices.
//!
//! [`Matrix<T, N>`] holds `N × N` scalars in row-major order. The default value
//! is the identity matrix, which is also the natural starting point for
//! building up transforms.
//!
//! # Storage Layout
//!
//! Elements are stored as `[[T; N]; N]`, which is one contiguous row-major
//! buffer of `N²` scalars. The element at row `i`, column `j` is `m[(i, j)]`,
//! `m.get(i, j)`, or `m.as_slice()[i * N + j]`. When the matrix multiplies a
//! column vector, the result is the standard matrix-vector product:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! A row vector on the left (`v * m`) multiplies by the transpose instead.
//!
//! # Composing Transformations
//!
//! Matrix products do not commute. To apply `a` first and then `b` to a
//! column vector, compute `b * a`:
//!
//! ```
//! use kinema_core::{Matrix3, Vector3};
//!
//! let swap_xy = Matrix3::from_rows([
//!     [0.0, 1.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [0.0, 0.0, 1.0],
//! ]);
//! let scale_x = Matrix3::from_rows([
//!     [2.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0],
//!     [0.0, 0.0, 1.0],
//! ]);
//!
//! let v = Vector3::new(1.0, 0.0, 0.0);
//! assert_eq!((scale_x * swap_xy) * v, Vector3::new(0.0, 1.0, 0.0));
//! assert_eq!((swap_xy * scale_x) * v, Vector3::new(0.0, 2.0, 0.0));
//! ```

use crate::{LinalgError, LinalgResult, Real, Vector};
use std::fmt;

/// An `N × N` matrix of `T`, row-major.
///
/// ```
/// use kinema_core::Matrix2;
///
/// // Identity by default
/// let m = Matrix2::<f64>::default();
/// assert_eq!(m, Matrix2::identity());
///
/// // Explicit rows
/// let m = Matrix2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(m[(1, 0)], 3.0);
///
/// // Flat row-major buffer; the length must be exactly N²
/// let m2 = Matrix2::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(m, m2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const N: usize> {
    elements: [[T; N]; N],
}

impl<T: Real, const N: usize> Matrix<T, N> {
    /// Number of rows (and columns).
    pub const DIM: usize = N;

    /// Creates the identity matrix: ones on the diagonal, zeros elsewhere.
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::one() } else { T::zero() })
    }

    /// Creates the all-zero matrix.
    pub fn zeros() -> Self {
        Self {
            elements: [[T::zero(); N]; N],
        }
    }

    /// Creates a matrix from its rows; `rows[i][j]` is row `i`, column `j`.
    pub fn from_rows(rows: [[T; N]; N]) -> Self {
        Self { elements: rows }
    }

    /// Creates a matrix by evaluating `f(row, col)` for every element.
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        Self {
            elements: std::array::from_fn(|row| std::array::from_fn(|col| f(row, col))),
        }
    }

    /// Copies a matrix out of a row-major buffer of exactly `N²` scalars.
    pub fn from_slice(values: &[T]) -> LinalgResult<Self> {
        if values.len() != N * N {
            return Err(LinalgError::dimension_mismatch(
                "Matrix::from_slice",
                N * N,
                values.len(),
            ));
        }
        Ok(Self::from_fn(|row, col| values[row * N + col]))
    }

    /// Returns the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> LinalgResult<T> {
        Self::check_cell("Matrix::get", row, col)?;
        Ok(self.elements[row][col])
    }

    /// Overwrites the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> LinalgResult<()> {
        Self::check_cell("Matrix::set", row, col)?;
        self.elements[row][col] = value;
        Ok(())
    }

    /// Returns the element at flat row-major index `index`.
    pub fn get_flat(&self, index: usize) -> LinalgResult<T> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or_else(|| LinalgError::index_out_of_range("Matrix::get_flat", index, N * N))
    }

    /// Overwrites the element at flat row-major index `index`.
    pub fn set_flat(&mut self, index: usize, value: T) -> LinalgResult<()> {
        let slot = self.as_mut_slice().get_mut(index).ok_or_else(|| {
            LinalgError::index_out_of_range("Matrix::set_flat", index, N * N)
        })?;
        *slot = value;
        Ok(())
    }

    /// Returns row `row` as a vector.
    pub fn row(&self, row: usize) -> LinalgResult<Vector<T, N>> {
        if row >= N {
            return Err(LinalgError::index_out_of_range("Matrix::row", row, N));
        }
        Ok(Vector::from_array(self.elements[row]))
    }

    /// Returns column `col` as a vector.
    pub fn column(&self, col: usize) -> LinalgResult<Vector<T, N>> {
        if col >= N {
            return Err(LinalgError::index_out_of_range("Matrix::column", col, N));
        }
        Ok(Vector::from_fn(|row| self.elements[row][col]))
    }

    /// Returns a reference to the underlying rows.
    pub fn rows(&self) -> &[[T; N]; N] {
        &self.elements
    }

    /// Borrows the `N²` elements as one contiguous row-major slice.
    pub fn as_slice(&self) -> &[T] {
        self.elements.as_flattened()
    }

    /// Mutably borrows the `N²` elements as one contiguous row-major slice.
    ///
    /// Writing through the slice is the same as setting elements directly.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.elements.as_flattened_mut()
    }

    /// Multiplies this matrix by another, returning `self * other`.
    ///
    /// `result(i, j) = Σ_k self(i, k) · other(k, j)`. Matrix multiplication is
    /// not commutative. You can also use the `*` operator: `a * b` or `&a * &b`.
    pub fn multiply(&self, other: &Self) -> Self {
        Self::from_fn(|i, j| (0..N).map(|k| self.elements[i][k] * other.elements[k][j]).sum())
    }

    /// Treats `vector` as a column: `result[i] = Σ_j self(i, j) · vector[j]`.
    pub fn mul_vector(&self, vector: &Vector<T, N>) -> Vector<T, N> {
        Vector::from_fn(|i| {
            self.elements[i]
                .iter()
                .zip(vector.as_slice())
                .map(|(&m, &v)| m * v)
                .sum()
        })
    }

    /// Treats `vector` as a row: `result[j] = Σ_i vector[i] · self(i, j)`.
    ///
    /// Equivalent to `self.transpose().mul_vector(vector)`.
    pub fn vector_mul(&self, vector: &Vector<T, N>) -> Vector<T, N> {
        Vector::from_fn(|j| (0..N).map(|i| vector[i] * self.elements[i][j]).sum())
    }

    /// Returns the transpose, `result(i, j) = self(j, i)`.
    pub fn transpose(&self) -> Self {
        Self::from_fn(|i, j| self.elements[j][i])
    }

    /// Sum of the diagonal elements.
    pub fn trace(&self) -> T {
        (0..N).map(|i| self.elements[i][i]).sum()
    }

    /// Divides every element by `divisor`.
    ///
    /// Fails with [`DivisionByZero`](crate::MathErrorKind::DivisionByZero)
    /// instead of producing infinities.
    pub fn try_div(&self, divisor: T) -> LinalgResult<Self> {
        let mut result = *self;
        result.try_div_assign(divisor)?;
        Ok(result)
    }

    /// In-place form of [`try_div`](Self::try_div).
    pub fn try_div_assign(&mut self, divisor: T) -> LinalgResult<()> {
        if divisor == T::zero() {
            return Err(LinalgError::division_by_zero("Matrix::try_div"));
        }
        for e in self.as_mut_slice() {
            *e /= divisor;
        }
        Ok(())
    }

    /// Returns the maximum absolute difference between corresponding elements.
    ///
    /// ```
    /// use kinema_core::Matrix3;
    ///
    /// let a = Matrix3::<f64>::identity();
    /// let mut b = a;
    /// b[(0, 1)] = 0.001;
    ///
    /// assert!((a.max_difference(&b) - 0.001).abs() < 1e-15);
    /// ```
    pub fn max_difference(&self, other: &Self) -> T {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .fold(T::zero(), |max, (&a, &b)| {
                let diff = (a - b).abs();
                if diff > max {
                    diff
                } else {
                    max
                }
            })
    }

    fn check_cell(operation: &str, row: usize, col: usize) -> LinalgResult<()> {
        if row >= N {
            return Err(LinalgError::index_out_of_range(operation, row, N));
        }
        if col >= N {
            return Err(LinalgError::index_out_of_range(operation, col, N));
        }
        Ok(())
    }
}

impl<T: Real, const N: usize> Default for Matrix<T, N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real, const N: usize> From<[[T; N]; N]> for Matrix<T, N> {
    fn from(rows: [[T; N]; N]) -> Self {
        Self::from_rows(rows)
    }
}

impl<T: Real, const N: usize> AsRef<[T]> for Matrix<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Real, const N: usize> AsMut<[T]> for Matrix<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// m[(row, col)] indexing (panics if either index >= N)
impl<T, const N: usize> std::ops::Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.elements.get(row).and_then(|r| r.get(col)) {
            Some(e) => e,
            None => panic!("Matrix{} index out of bounds: ({}, {})", N, row, col),
        }
    }
}

impl<T, const N: usize> std::ops::IndexMut<(usize, usize)> for Matrix<T, N> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.elements.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(e) => e,
            None => panic!("Matrix{} index out of bounds: ({}, {})", N, row, col),
        }
    }
}

/// m[k] flat row-major indexing (panics if k >= N²)
impl<T, const N: usize> std::ops::Index<usize> for Matrix<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.elements.as_flattened().get(index) {
            Some(e) => e,
            None => panic!("Matrix{} flat index out of bounds: {}", N, index),
        }
    }
}

impl<T, const N: usize> std::ops::IndexMut<usize> for Matrix<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.elements.as_flattened_mut().get_mut(index) {
            Some(e) => e,
            None => panic!("Matrix{} flat index out of bounds: {}", N, index),
        }
    }
}

impl<T: Real, const N: usize> fmt::Display for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix{}x{}:", N, N)?;
        for row in &self.elements {
            write!(f, "  [")?;
            for (j, e) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:12.9}", e)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
