//! Square matrices.
//!
//! - [`Matrix`]: `N × N` scalars, row-major, identity by default
//! - [`Determinant`], [`Submatrix`]: cofactor expansion for `N ≤ 4`, which
//!   backs `adjugate` and `inverse`
//! - [`Matrix2`], [`Matrix3`], [`Matrix4`]: aliases for the common sizes

mod cofactor;
mod core;
mod ops;

pub use self::cofactor::{Determinant, Submatrix};
pub use self::core::Matrix;

/// 2×2 matrix; `T` defaults to `f64`.
pub type Matrix2<T = f64> = Matrix<T, 2>;
/// 3×3 matrix; `T` defaults to `f64`.
pub type Matrix3<T = f64> = Matrix<T, 3>;
/// 4×4 matrix; `T` defaults to `f64`.
pub type Matrix4<T = f64> = Matrix<T, 4>;
