//! The scalar contract shared by every kernel type.
//!
//! All vectors, matrices and quaternions are generic over a single [`Real`]
//! type. It is a bound bundle over [`num_traits::Float`] plus the `approx`
//! comparison traits, with a blanket impl, so `f32` and `f64` qualify without
//! any code in this crate. Mixing precisions inside one expression is not
//! supported; convert explicitly at the boundary.
//!
//! `num-traits` is built with its `libm` feature, so transcendental functions
//! do not depend on the platform's C math library when `std` is off.

use core::fmt::{Debug, Display};
use core::iter::Sum;
use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use num_traits::{Float, FloatConst};

/// A real floating-point scalar.
pub trait Real:
    Float
    + FloatConst
    + Debug
    + Display
    + Default
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Sum
    + approx::AbsDiffEq<Epsilon = Self>
    + approx::RelativeEq
    + approx::UlpsEq
    + Send
    + Sync
    + 'static
{
}

impl<T> Real for T where
    T: Float
        + FloatConst
        + Debug
        + Display
        + Default
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + Sum
        + approx::AbsDiffEq<Epsilon = T>
        + approx::RelativeEq
        + approx::UlpsEq
        + Send
        + Sync
        + 'static
{
}
