//! Operations that only exist for particular dimensions.
//!
//! `perp` is defined on 2-vectors and `cross` on 3-vectors; calling either on
//! any other dimension does not compile.
//!
//! ```compile_fail
//! use kinema_core::Vector4;
//!
//! let a = Vector4::new(1.0, 0.0, 0.0, 0.0);
//! let _ = a.cross(&a);
//! ```

use super::core::Vector;
use crate::Real;

/// Two-component vector; `T` defaults to `f64`.
pub type Vector2<T = f64> = Vector<T, 2>;
/// Three-component vector; `T` defaults to `f64`.
pub type Vector3<T = f64> = Vector<T, 3>;
/// Four-component vector; `T` defaults to `f64`.
pub type Vector4<T = f64> = Vector<T, 4>;

impl<T: Real> Vector<T, 2> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }

    #[inline]
    pub fn x(&self) -> T {
        self[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self[1]
    }

    /// Rotates by 90° clockwise: `(x, y) -> (y, -x)`.
    ///
    /// The result has the same length as `self` and is orthogonal to it; it is
    /// the zero vector only when `self` is.
    ///
    /// ```
    /// use kinema_core::Vector2;
    ///
    /// let v = Vector2::new(1.0, 2.0);
    /// assert_eq!(v.perp(), Vector2::new(2.0, -1.0));
    /// assert_eq!(v.dot(&v.perp()), 0.0);
    /// ```
    #[inline]
    pub fn perp(&self) -> Self {
        Self::new(self.y(), -self.x())
    }
}

impl<T: Real> Vector<T, 3> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    /// Returns the unit vector along the X axis `[1, 0, 0]`.
    #[inline]
    pub fn x_axis() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// Returns the unit vector along the Y axis `[0, 1, 0]`.
    #[inline]
    pub fn y_axis() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// Returns the unit vector along the Z axis `[0, 0, 1]`.
    #[inline]
    pub fn z_axis() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    #[inline]
    pub fn x(&self) -> T {
        self[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self[2]
    }

    /// Computes the cross product with another vector.
    ///
    /// The result is perpendicular to both inputs with direction given by the
    /// right-hand rule. It is anticommutative and is the zero vector exactly
    /// when the operands are parallel (including either being zero).
    ///
    /// ```
    /// use kinema_core::Vector3;
    ///
    /// let x = Vector3::<f64>::x_axis();
    /// let y = Vector3::<f64>::y_axis();
    /// assert_eq!(x.cross(&y), Vector3::<f64>::z_axis());  // X × Y = Z
    /// assert_eq!(y.cross(&x), -Vector3::<f64>::z_axis());
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }
}

impl<T: Real> Vector<T, 4> {
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }

    #[inline]
    pub fn x(&self) -> T {
        self[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self[2]
    }

    #[inline]
    pub fn w(&self) -> T {
        self[3]
    }

    /// Drops the last component.
    #[inline]
    pub fn truncate(&self) -> Vector3<T> {
        Vector3::new(self.x(), self.y(), self.z())
    }
}

impl<T: Real> Vector<T, 3> {
    /// Appends `w` as a fourth component (e.g. `1` for points, `0` for directions).
    #[inline]
    pub fn extend(&self, w: T) -> Vector4<T> {
        Vector4::new(self.x(), self.y(), self.z(), w)
    }
}
