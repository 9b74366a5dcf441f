//! Orthonormal frames built from a few seed vectors.
//!
//! Both functions overwrite their arguments with an orthonormal set anchored on
//! the direction of the first one. They validate every input before touching
//! anything, so a failed call leaves all arguments unchanged.
//!
//! ```
//! use kinema_core::{orthonormal_basis_3d, Vector3};
//! use approx::assert_abs_diff_eq;
//!
//! let mut forward = Vector3::new(0.0, 0.0, 2.0);
//! let mut up = Vector3::new(0.0, 1.0, 0.0);
//! let mut side = Vector3::new(1.0, 1.0, 0.0);
//! orthonormal_basis_3d(&mut forward, &mut up, &mut side).unwrap();
//!
//! assert_eq!(forward, Vector3::z_axis());
//! assert_abs_diff_eq!(forward.dot(&up), 0.0);
//! assert_abs_diff_eq!(up.dot(&side), 0.0);
//! assert_abs_diff_eq!(side.length(), 1.0, epsilon = 1e-15);
//! ```

use crate::{LinalgError, LinalgResult, MathErrorKind, Real, Vector2, Vector3};

fn zero_vector(operation: &str) -> LinalgError {
    LinalgError::math_error(
        operation,
        MathErrorKind::ZeroVector,
        "basis input is the zero vector",
    )
}

fn equal_vectors(operation: &str) -> LinalgError {
    LinalgError::math_error(
        operation,
        MathErrorKind::EqualVectors,
        "basis inputs are equal",
    )
}

/// Replaces `a` with its unit vector and `b` with `a.perp()`.
///
/// The original value of `b` only participates in validation. Fails with
/// [`EqualVectors`](MathErrorKind::EqualVectors) if `a == b`, then with
/// [`ZeroVector`](MathErrorKind::ZeroVector) if either is zero.
pub fn orthonormal_basis_2d<T: Real>(a: &mut Vector2<T>, b: &mut Vector2<T>) -> LinalgResult<()> {
    const OP: &str = "orthonormal_basis_2d";

    if a == b {
        return Err(equal_vectors(OP));
    }
    if a.is_zero() || b.is_zero() {
        return Err(zero_vector(OP));
    }

    let first = a.normalized()?;
    *b = first.perp();
    *a = first;
    Ok(())
}

/// Builds a right-handed frame from `a`, using `c` only to pick the plane.
///
/// ```text
/// b' = a × c
/// c' = a × b'
/// ```
///
/// and then normalizes all three. The original `b` only participates in
/// validation. Fails with [`ZeroVector`](MathErrorKind::ZeroVector) if any
/// input is zero, then with [`EqualVectors`](MathErrorKind::EqualVectors) if
/// any two are equal. If `a` and `c` are parallel (but not equal), `b'` is
/// zero and normalization fails with
/// [`NormalizeZeroVector`](MathErrorKind::NormalizeZeroVector).
pub fn orthonormal_basis_3d<T: Real>(
    a: &mut Vector3<T>,
    b: &mut Vector3<T>,
    c: &mut Vector3<T>,
) -> LinalgResult<()> {
    const OP: &str = "orthonormal_basis_3d";

    if a.is_zero() || b.is_zero() || c.is_zero() {
        return Err(zero_vector(OP));
    }
    if a == b || a == c || b == c {
        return Err(equal_vectors(OP));
    }

    let second = a.cross(c);
    let third = a.cross(&second);

    let first = a.normalized()?;
    let second = second.normalized()?;
    let third = third.normalized()?;

    *a = first;
    *b = second;
    *c = third;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_TOLERANCE;
    use approx::assert_abs_diff_eq;

    fn assert_orthonormal_3d(a: &Vector3, b: &Vector3, c: &Vector3) {
        for v in [a, b, c] {
            assert_abs_diff_eq!(v.length(), 1.0, epsilon = DEFAULT_TOLERANCE);
        }
        assert_abs_diff_eq!(a.dot(b), 0.0, epsilon = DEFAULT_TOLERANCE);
        assert_abs_diff_eq!(a.dot(c), 0.0, epsilon = DEFAULT_TOLERANCE);
        assert_abs_diff_eq!(b.dot(c), 0.0, epsilon = DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_basis_2d() {
        let mut a = Vector2::new(3.0, 4.0);
        let mut b = Vector2::new(1.0, 0.0);
        orthonormal_basis_2d(&mut a, &mut b).unwrap();

        assert_eq!(a, Vector2::new(0.6, 0.8));
        assert_eq!(b, Vector2::new(0.8, -0.6));
        assert_eq!(a.dot(&b), 0.0);
        assert_abs_diff_eq!(b.length(), 1.0, epsilon = DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_basis_2d_equal_inputs() {
        let mut a = Vector2::new(1.0, 2.0);
        let mut b = a;
        let err = orthonormal_basis_2d(&mut a, &mut b).unwrap_err();
        assert!(err.is_kind(MathErrorKind::EqualVectors));
        assert_eq!(a, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn test_basis_2d_both_zero_reports_equal() {
        let mut a = Vector2::<f64>::zeros();
        let mut b = Vector2::zeros();
        let err = orthonormal_basis_2d(&mut a, &mut b).unwrap_err();
        assert!(err.is_kind(MathErrorKind::EqualVectors));
    }

    #[test]
    fn test_basis_2d_zero_input() {
        let mut a = Vector2::new(1.0, 2.0);
        let mut b = Vector2::zeros();
        let err = orthonormal_basis_2d(&mut a, &mut b).unwrap_err();
        assert!(err.is_kind(MathErrorKind::ZeroVector));

        let mut a = Vector2::zeros();
        let mut b = Vector2::new(1.0, 2.0);
        let err = orthonormal_basis_2d(&mut a, &mut b).unwrap_err();
        assert!(err.is_kind(MathErrorKind::ZeroVector));
        assert_eq!(b, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn test_basis_3d_axes() {
        let mut a = Vector3::<f64>::x_axis();
        let mut b = Vector3::y_axis();
        let mut c = Vector3::z_axis();
        orthonormal_basis_3d(&mut a, &mut b, &mut c).unwrap();

        assert_eq!(a, Vector3::x_axis());
        assert_eq!(b, -Vector3::<f64>::y_axis());
        assert_eq!(c, -Vector3::<f64>::z_axis());
    }

    #[test]
    fn test_basis_3d_general() {
        let mut a = Vector3::new(1.0, 2.0, 3.0);
        let mut b = Vector3::new(-4.0, 0.5, 2.0);
        let mut c = Vector3::new(0.0, 1.0, -1.0);
        let direction = a.normalized().unwrap();
        orthonormal_basis_3d(&mut a, &mut b, &mut c).unwrap();

        assert_orthonormal_3d(&a, &b, &c);
        assert_eq!(a, direction);
        // right-handed
        assert_abs_diff_eq!(a.cross(&b), c, epsilon = DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_basis_3d_zero_input() {
        let original = [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::zeros(),
            Vector3::new(0.0, 0.0, 1.0),
        ];
        let [mut a, mut b, mut c] = original;
        let err = orthonormal_basis_3d(&mut a, &mut b, &mut c).unwrap_err();
        assert!(err.is_kind(MathErrorKind::ZeroVector));
        assert_eq!([a, b, c], original);
    }

    #[test]
    fn test_basis_3d_equal_inputs() {
        let p = Vector3::new(1.0, 2.0, 3.0);
        let q = Vector3::new(0.0, 1.0, 0.0);

        for [mut a, mut b, mut c] in [[p, p, q], [p, q, p], [q, p, p]] {
            let err = orthonormal_basis_3d(&mut a, &mut b, &mut c).unwrap_err();
            assert!(err.is_kind(MathErrorKind::EqualVectors));
        }
    }

    #[test]
    fn test_basis_3d_parallel_seed() {
        let mut a = Vector3::new(1.0, 1.0, 0.0);
        let mut b = Vector3::new(0.0, 0.0, 1.0);
        let mut c = Vector3::new(2.0, 2.0, 0.0);
        let err = orthonormal_basis_3d(&mut a, &mut b, &mut c).unwrap_err();
        assert!(err.is_kind(MathErrorKind::NormalizeZeroVector));
        assert_eq!(a, Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(c, Vector3::new(2.0, 2.0, 0.0));
    }

    #[test]
    fn test_basis_single_precision() {
        let mut a = Vector3::new(0.3_f32, -1.0, 2.0);
        let mut b = Vector3::new(1.0_f32, 0.0, 0.0);
        let mut c = Vector3::new(0.0_f32, 1.0, 1.0);
        orthonormal_basis_3d(&mut a, &mut b, &mut c).unwrap();
        let tol = crate::constants::F32_TOLERANCE;
        assert_abs_diff_eq!(a.dot(&b), 0.0, epsilon = tol);
        assert_abs_diff_eq!(b.dot(&c), 0.0, epsilon = tol);
        assert_abs_diff_eq!(c.length(), 1.0, epsilon = tol);
    }
}
