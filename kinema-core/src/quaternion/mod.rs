//! Quaternions and 3D rotations.
//!
//! - [`Quaternion`]: `(w, x, y, z)` with Hamilton product, conjugate, norm and inverse
//! - Rotation helpers: axis-angle construction, conversion to and from 4×4
//!   homogeneous rotation matrices, and vector rotation
//! - [`Quaternion::slerp`]: spherical linear interpolation between unit quaternions

mod core;
mod ops;
mod rotation;
mod slerp;

pub use self::core::Quaternion;
