//! Error types for the linear-algebra kernel.
//!
//! Every fallible operation in this crate returns [`LinalgResult<T>`]. Errors are
//! detected before any mutation happens, so a failed call leaves its receiver
//! exactly as it was.
//!
//! # Error Categories
//!
//! | Kind | Raised by |
//! |------|-----------|
//! | [`IndexOutOfRange`](MathErrorKind::IndexOutOfRange) | `get`/`set` on vectors and matrices, `submatrix` |
//! | [`DivisionByZero`](MathErrorKind::DivisionByZero) | `try_div` on vectors, matrices, quaternions |
//! | [`NormalizeZeroVector`](MathErrorKind::NormalizeZeroVector) | `Vector::normalize` |
//! | [`NormalizeZeroQuaternion`](MathErrorKind::NormalizeZeroQuaternion) | `Quaternion::normalize` |
//! | [`SingularMatrix`](MathErrorKind::SingularMatrix) | `Matrix::inverse` |
//! | [`ZeroQuaternion`](MathErrorKind::ZeroQuaternion) | `Quaternion::inverse`, `to_rotation_matrix` |
//! | [`EqualVectors`](MathErrorKind::EqualVectors) | orthonormal basis construction |
//! | [`ZeroVector`](MathErrorKind::ZeroVector) | orthonormal basis construction, axis-angle |
//!
//! Buffer constructors that receive the wrong number of scalars fail with
//! [`LinalgError::DimensionMismatch`] instead.
//!
//! ```
//! use kinema_core::{LinalgError, MathErrorKind};
//!
//! fn safe_divide(a: f64, b: f64) -> Result<f64, LinalgError> {
//!     if b == 0.0 {
//!         return Err(LinalgError::division_by_zero("safe_divide"));
//!     }
//!     Ok(a / b)
//! }
//!
//! let err = safe_divide(1.0, 0.0).unwrap_err();
//! assert_eq!(err.kind(), Some(&MathErrorKind::DivisionByZero));
//! ```

use thiserror::Error;

/// Classification of numerical failures.
///
/// Carried by [`LinalgError::MathError`] so callers can branch on the failure
/// without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathErrorKind {
    /// Element access outside the valid index range.
    IndexOutOfRange,
    /// Scalar division by exactly zero.
    DivisionByZero,
    /// Normalization of a vector whose length is exactly zero.
    NormalizeZeroVector,
    /// Normalization of a quaternion whose norm is exactly zero.
    NormalizeZeroQuaternion,
    /// Inversion of a matrix whose determinant is exactly zero.
    SingularMatrix,
    /// Rotation or inverse requested from a zero-norm quaternion.
    ZeroQuaternion,
    /// Two basis inputs compare equal.
    EqualVectors,
    /// A basis input (or rotation axis) is the zero vector.
    ZeroVector,
}

/// Unified error type for kernel operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Numerical precondition violated.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// A flat buffer had the wrong number of scalars for the target type.
    #[error("Dimension mismatch in {operation}: expected {expected} scalars, got {actual}")]
    DimensionMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },
}

/// Convenience alias for `Result<T, LinalgError>`.
pub type LinalgResult<T> = Result<T, LinalgError>;

impl LinalgError {
    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates an [`IndexOutOfRange`](MathErrorKind::IndexOutOfRange) error for
    /// a container holding `len` elements.
    pub fn index_out_of_range(operation: &str, index: usize, len: usize) -> Self {
        Self::math_error(
            operation,
            MathErrorKind::IndexOutOfRange,
            &format!(
                "index {} out of bounds (valid range: 0-{})",
                index,
                len.saturating_sub(1)
            ),
        )
    }

    /// Creates a [`DivisionByZero`](MathErrorKind::DivisionByZero) error.
    pub fn division_by_zero(operation: &str) -> Self {
        Self::math_error(operation, MathErrorKind::DivisionByZero, "divisor is zero")
    }

    /// Creates a [`DimensionMismatch`](Self::DimensionMismatch) error.
    pub fn dimension_mismatch(operation: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            operation: operation.to_string(),
            expected,
            actual,
        }
    }

    /// Returns the numerical failure kind, or `None` for dimension mismatches.
    pub fn kind(&self) -> Option<&MathErrorKind> {
        match self {
            Self::MathError { kind, .. } => Some(kind),
            Self::DimensionMismatch { .. } => None,
        }
    }

    /// Returns `true` if this error carries the given kind.
    pub fn is_kind(&self, kind: MathErrorKind) -> bool {
        self.kind() == Some(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_error_with_kind() {
        let err = LinalgError::math_error(
            "Matrix::inverse",
            MathErrorKind::SingularMatrix,
            "determinant is zero",
        );
        assert!(err.to_string().contains("Math error in Matrix::inverse"));
        assert!(err.to_string().contains("SingularMatrix"));
        assert!(err.is_kind(MathErrorKind::SingularMatrix));
    }

    #[test]
    fn test_index_out_of_range_message() {
        let err = LinalgError::index_out_of_range("Vector::get", 3, 3);
        assert_eq!(
            err.to_string(),
            "Math error in Vector::get (IndexOutOfRange): index 3 out of bounds (valid range: 0-2)"
        );
        assert_eq!(err.kind(), Some(&MathErrorKind::IndexOutOfRange));
    }

    #[test]
    fn test_division_by_zero() {
        let err = LinalgError::division_by_zero("Quaternion::try_div");
        assert!(err.is_kind(MathErrorKind::DivisionByZero));
        assert!(err.to_string().contains("divisor is zero"));
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = LinalgError::dimension_mismatch("Matrix::from_slice", 16, 15);
        assert_eq!(
            err.to_string(),
            "Dimension mismatch in Matrix::from_slice: expected 16 scalars, got 15"
        );
        assert_eq!(err.kind(), None);
        assert!(!err.is_kind(MathErrorKind::IndexOutOfRange));
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<LinalgError>();
        _assert_sync::<LinalgError>();
    }
}
