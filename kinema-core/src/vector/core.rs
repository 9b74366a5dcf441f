//! Fixed-length vectors generic over dimension and scalar type.
//!
//! [`Vector<T, N>`] stores `N` scalars in a plain array. It is a value type:
//! copying is cheap, equality is exact component-wise comparison, and the only
//! invariant is the length, which the type system enforces.
//!
//! # Construction
//!
//! ```
//! use kinema_core::{Vector, Vector3};
//!
//! let a = Vector3::new(1.0, 2.0, 3.0);
//! let b = Vector::from_array([1.0, 2.0, 3.0]);
//! assert_eq!(a, b);
//!
//! // Buffers of the wrong length are rejected rather than truncated or padded.
//! assert!(Vector3::<f64>::from_slice(&[1.0, 2.0]).is_err());
//! ```
//!
//! # Length and Direction
//!
//! [`normalize`](Vector::normalize) rescales in place and refuses the zero
//! vector instead of filling it with NaN:
//!
//! ```
//! use kinema_core::{MathErrorKind, Vector3};
//!
//! let mut v = Vector3::new(3.0, 4.0, 0.0);
//! v.normalize().unwrap();
//! assert_eq!(v, Vector3::new(0.6, 0.8, 0.0));
//!
//! let err = Vector3::<f64>::zeros().normalize().unwrap_err();
//! assert!(err.is_kind(MathErrorKind::NormalizeZeroVector));
//! ```
use crate::{LinalgError, LinalgResult, MathErrorKind, Real};
use std::fmt;

/// An `N`-component vector of `T`.
///
/// Components are private; use [`get`](Self::get)/[`set`](Self::set) for
/// checked access, indexing (`v[i]`) for panicking access, or
/// [`as_slice`](Self::as_slice) for the contiguous storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T, const N: usize> {
    components: [T; N],
}

impl<T: Real, const N: usize> Vector<T, N> {
    /// Number of components.
    pub const DIM: usize = N;

    /// Returns the zero vector.
    #[inline]
    pub fn zeros() -> Self {
        Self {
            components: [T::zero(); N],
        }
    }

    /// Creates a vector from an array of exactly `N` scalars.
    #[inline]
    pub fn from_array(components: [T; N]) -> Self {
        Self { components }
    }

    /// Creates a vector by evaluating `f` for each index `0..N`.
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self {
            components: std::array::from_fn(f),
        }
    }

    /// Copies a vector out of a buffer that must hold exactly `N` scalars.
    pub fn from_slice(values: &[T]) -> LinalgResult<Self> {
        let components: [T; N] = values.try_into().map_err(|_| {
            LinalgError::dimension_mismatch("Vector::from_slice", N, values.len())
        })?;
        Ok(Self { components })
    }

    /// Returns the component at `index`.
    pub fn get(&self, index: usize) -> LinalgResult<T> {
        self.components
            .get(index)
            .copied()
            .ok_or_else(|| LinalgError::index_out_of_range("Vector::get", index, N))
    }

    /// Overwrites the component at `index`.
    pub fn set(&mut self, index: usize, value: T) -> LinalgResult<()> {
        let slot = self
            .components
            .get_mut(index)
            .ok_or_else(|| LinalgError::index_out_of_range("Vector::set", index, N))?;
        *slot = value;
        Ok(())
    }

    /// Borrows the `N` contiguous components.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    /// Mutably borrows the `N` contiguous components.
    ///
    /// Writing through the slice is the same as setting components directly.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.components
    }

    /// Returns the components as an array.
    #[inline]
    pub fn to_array(&self) -> [T; N] {
        self.components
    }

    /// Sum of pairwise products.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.components
            .iter()
            .zip(other.components.iter())
            .map(|(&a, &b)| a * b)
            .sum()
    }

    /// Squared Euclidean length, `self.dot(self)`.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns `true` if every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.components.iter().all(|&c| c == T::zero())
    }

    /// Scales this vector to unit length in place.
    ///
    /// Fails with [`NormalizeZeroVector`](MathErrorKind::NormalizeZeroVector)
    /// when the length is exactly zero; the vector is left untouched.
    pub fn normalize(&mut self) -> LinalgResult<()> {
        let length = self.length();
        if length == T::zero() {
            return Err(LinalgError::math_error(
                "Vector::normalize",
                MathErrorKind::NormalizeZeroVector,
                "cannot normalize a zero-length vector",
            ));
        }
        for c in self.components.iter_mut() {
            *c /= length;
        }
        Ok(())
    }

    /// Returns a unit-length copy of this vector.
    pub fn normalized(&self) -> LinalgResult<Self> {
        let mut unit = *self;
        unit.normalize()?;
        Ok(unit)
    }

    /// Component-wise (Hadamard) product.
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::from_fn(|i| self.components[i] * other.components[i])
    }

    /// Component-wise product in place.
    pub fn component_mul_assign(&mut self, other: &Self) {
        for (a, &b) in self.components.iter_mut().zip(other.components.iter()) {
            *a *= b;
        }
    }

    /// Divides every component by `divisor`.
    ///
    /// Fails with [`DivisionByZero`](MathErrorKind::DivisionByZero) instead of
    /// producing infinities.
    pub fn try_div(&self, divisor: T) -> LinalgResult<Self> {
        let mut result = *self;
        result.try_div_assign(divisor)?;
        Ok(result)
    }

    /// In-place form of [`try_div`](Self::try_div).
    pub fn try_div_assign(&mut self, divisor: T) -> LinalgResult<()> {
        if divisor == T::zero() {
            return Err(LinalgError::division_by_zero("Vector::try_div"));
        }
        for c in self.components.iter_mut() {
            *c /= divisor;
        }
        Ok(())
    }
}

impl<T: Real, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Real, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(components: [T; N]) -> Self {
        Self::from_array(components)
    }
}

impl<T: Real, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(vector: Vector<T, N>) -> Self {
        vector.components
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.components
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.components
    }
}

/// v[i] indexing (panics if i >= N)
impl<T, const N: usize> std::ops::Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.components.get(index) {
            Some(c) => c,
            None => panic!("Vector{} index out of bounds: {}", N, index),
        }
    }
}

/// v[i] = value mutable indexing (panics if i >= N)
impl<T, const N: usize> std::ops::IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.components.get_mut(index) {
            Some(c) => c,
            None => panic!("Vector{} index out of bounds: {}", N, index),
        }
    }
}

impl<T: Real, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector{}(", N)?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.9}", c)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vector2, Vector3, Vector4};

    #[test]
    fn test_vector_construction() {
        let zeros = Vector3::<f64>::zeros();
        assert_eq!(zeros.as_slice(), &[0.0, 0.0, 0.0]);
        assert_eq!(Vector3::<f64>::default(), zeros);

        let from_array = Vector::from_array([4.0, 5.0, 6.0]);
        assert_eq!(from_array, Vector3::new(4.0, 5.0, 6.0));

        let from_fn: Vector4 = Vector::from_fn(|i| i as f64);
        assert_eq!(from_fn.to_array(), [0.0, 1.0, 2.0, 3.0]);

        let converted: Vector2 = [1.0, 2.0].into();
        assert_eq!(converted, Vector2::new(1.0, 2.0));
        assert_eq!(Vector3::<f64>::DIM, 3);
    }

    #[test]
    fn test_from_slice() {
        let v = Vector3::<f64>::from_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));

        let short = Vector3::<f64>::from_slice(&[1.0, 2.0]);
        assert_eq!(
            short.unwrap_err(),
            LinalgError::dimension_mismatch("Vector::from_slice", 3, 2)
        );

        let long = Vector2::<f32>::from_slice(&[1.0, 2.0, 3.0]);
        assert!(long.is_err());
    }

    #[test]
    fn test_get_set_methods() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);

        assert_eq!(v.get(0).unwrap(), 1.0);
        assert_eq!(v.get(2).unwrap(), 3.0);

        v.set(1, 20.0).unwrap();
        assert_eq!(v, Vector3::new(1.0, 20.0, 3.0));
    }

    #[test]
    fn test_get_error() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let err = v.get(3).unwrap_err();
        assert!(err.is_kind(MathErrorKind::IndexOutOfRange));
        assert!(err.to_string().contains("index 3 out of bounds"));
    }

    #[test]
    fn test_set_error_leaves_vector_untouched() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        let err = v.set(5, 42.0).unwrap_err();
        assert!(err.to_string().contains("index 5 out of bounds"));
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_dot_and_length() {
        let c = Vector3::new(1.0, 2.0, 3.0);
        let d = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(c.dot(&d), 32.0);

        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn test_normalize() {
        let mut v = Vector3::<f64>::new(3.0, 4.0, 0.0);
        v.normalize().unwrap();
        assert!((v.length() - 1.0).abs() < 1e-15);
        assert_eq!(v, Vector3::new(0.6, 0.8, 0.0));

        let unit = Vector4::new(0.0, 0.0, 0.0, 2.0).normalized().unwrap();
        assert_eq!(unit, Vector4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_normalize_zero_vector() {
        let mut zero = Vector3::<f64>::zeros();
        let err = zero.normalize().unwrap_err();
        assert!(err.is_kind(MathErrorKind::NormalizeZeroVector));
        assert_eq!(zero, Vector3::zeros());
        assert!(zero.normalized().is_err());
    }

    #[test]
    fn test_component_mul() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a.component_mul(&b), Vector3::new(4.0, 10.0, 18.0));

        let mut c = a;
        c.component_mul_assign(&b);
        assert_eq!(c, Vector3::new(4.0, 10.0, 18.0));
    }

    #[test]
    fn test_try_div() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a.try_div(2.0).unwrap(), Vector3::new(0.5, 1.0, 1.5));

        let mut b = Vector3::new(10.0, 20.0, 30.0);
        b.try_div_assign(10.0).unwrap();
        assert_eq!(b, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_divide_by_zero() {
        let mut a = Vector3::new(1.0, 2.0, 3.0);
        assert!(a.try_div(0.0).unwrap_err().is_kind(MathErrorKind::DivisionByZero));
        assert!(a
            .try_div_assign(0.0)
            .unwrap_err()
            .is_kind(MathErrorKind::DivisionByZero));
        assert_eq!(a, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_is_zero() {
        assert!(Vector2::<f64>::zeros().is_zero());
        assert!(!Vector2::new(0.0, 1e-300).is_zero());
    }

    #[test]
    fn test_slice_views() {
        let mut v = Vector3::new(1.5, 2.5, 3.5);
        assert_eq!(v.as_slice().len(), 3);
        v.as_mut_slice()[1] = 9.0;
        assert_eq!(v, Vector3::new(1.5, 9.0, 3.5));

        let r: &[f64] = v.as_ref();
        assert_eq!(r, &[1.5, 9.0, 3.5]);
        let arr: [f64; 3] = v.into();
        assert_eq!(arr, [1.5, 9.0, 3.5]);
    }

    #[test]
    fn test_indexing_operators() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);

        v[0] = 10.0;
        v[2] = 30.0;
        assert_eq!(v, Vector3::new(10.0, 2.0, 30.0));
    }

    #[test]
    #[should_panic(expected = "Vector3 index out of bounds: 4")]
    fn test_index_panic() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let _ = v[4];
    }

    #[test]
    #[should_panic(expected = "Vector2 index out of bounds: 7")]
    fn test_index_mut_panic() {
        let mut v = Vector2::new(1.0, 2.0);
        v[7] = 42.0;
    }

    #[test]
    fn test_display_formatting() {
        let v = Vector3::new(1.234567890, -2.345678901, 3.456789012);
        let display_output = format!("{}", v);

        assert!(display_output.starts_with("Vector3("));
        assert!(display_output.contains("1.234567890"));
        assert!(display_output.contains("-2.345678901"));
        assert!(display_output.ends_with(")"));
    }

    #[test]
    fn test_single_precision() {
        let mut v = Vector3::new(0.0_f32, 3.0, 4.0);
        assert_eq!(v.length(), 5.0_f32);
        v.normalize().unwrap();
        assert!((v.length() - 1.0).abs() < 1e-6);
    }
}
