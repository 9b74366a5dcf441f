//! Fixed-length vectors.
//!
//! - [`Vector`]: `N` scalars with arithmetic, dot product, length, normalization
//! - [`Vector2`], [`Vector3`], [`Vector4`]: aliases with dimension-specific
//!   methods (`perp` on 2-vectors, `cross` on 3-vectors)

mod core;
mod fixed;
mod ops;

pub use self::core::Vector;
pub use self::fixed::{Vector2, Vector3, Vector4};
