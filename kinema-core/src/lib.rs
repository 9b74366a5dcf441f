//! Fixed-size linear algebra for kinematics and rendering.
//!
//! `kinema-core` provides the small, dimension-generic value types that
//! physics integrators and transform pipelines are built from: vectors,
//! square matrices with cofactor-based inversion, and rotation quaternions.
//! Dimensions are const generics, so a 3-vector and a 4-vector are different
//! types and dimension-specific operations such as `cross` only exist where
//! they make sense.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`vector`] | `Vector<T, N>`: arithmetic, dot product, length, normalization, `perp`/`cross` |
//! | [`matrix`] | `Matrix<T, N>`: products, transpose, determinant, cofactors, adjugate, inverse |
//! | [`quaternion`] | `Quaternion<T>`: Hamilton product, rotation matrices, axis-angle, slerp |
//! | [`basis`] | Orthonormal frames from two or three seed vectors |
//! | [`scalar`] | The [`Real`] trait implemented by `f32` and `f64` |
//! | [`constants`] | Comparison tolerances and angle constants |
//! | [`errors`] | [`LinalgError`], [`MathErrorKind`] and [`LinalgResult`] |
//!
//! # Example
//!
//! ```
//! use kinema_core::{Matrix4, Quaternion, Vector3};
//! use kinema_core::constants::HALF_PI;
//! use approx::assert_abs_diff_eq;
//!
//! // A quarter turn about Z, as a quaternion and as a homogeneous matrix
//! let q = Quaternion::from_axis_angle(&Vector3::z_axis(), HALF_PI)?;
//! let m: Matrix4 = q.to_rotation_matrix()?;
//!
//! let v = Vector3::new(1.0, 0.0, 0.0);
//! let rotated = (m * v.extend(0.0)).truncate();
//! assert_abs_diff_eq!(rotated, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
//!
//! // Rotation matrices invert to their transpose
//! assert_abs_diff_eq!(m.inverse()?, m.transpose(), epsilon = 1e-12);
//! # Ok::<(), kinema_core::LinalgError>(())
//! ```
//!
//! # Re-exports
//!
//! Common types are re-exported at the crate root for convenience:
//!
//! ```
//! use kinema_core::{Vector, Vector2, Vector3, Vector4};
//! use kinema_core::{Matrix, Matrix2, Matrix3, Matrix4, Determinant, Submatrix};
//! use kinema_core::{Quaternion, orthonormal_basis_2d, orthonormal_basis_3d};
//! use kinema_core::{LinalgError, LinalgResult, MathErrorKind, Real};
//! ```
//!
//! # Design Notes
//!
//! - **Checked by default**: anything that can fail on its inputs (division,
//!   normalization, inversion, buffer construction, checked element access)
//!   returns [`LinalgResult`]. There is no `/` operator for scalar division;
//!   use `try_div`. Only the `Index` operators panic, like slice indexing.
//!
//! - **Exact-zero preconditions**: a determinant, norm or divisor is rejected
//!   only when it is exactly zero. Nearly singular inputs pass through and
//!   produce large but finite results.
//!
//! - **Small sizes only**: determinants use Laplace expansion, which is only
//!   implemented up to 4×4.
//!
//! - **Diagnostics**: rejected inversions and numerically delicate branches
//!   emit `tracing` events at `debug`/`trace` level. No subscriber is
//!   installed by this crate.

pub mod basis;
pub mod constants;
pub mod errors;
pub mod matrix;
pub mod quaternion;
pub mod scalar;
pub mod vector;

pub use basis::{orthonormal_basis_2d, orthonormal_basis_3d};
pub use errors::{LinalgError, LinalgResult, MathErrorKind};
pub use matrix::{Determinant, Matrix, Matrix2, Matrix3, Matrix4, Submatrix};
pub use quaternion::Quaternion;
pub use scalar::Real;
pub use vector::{Vector, Vector2, Vector3, Vector4};
