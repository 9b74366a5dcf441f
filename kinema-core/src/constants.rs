/// Tolerance for `f64` round-trip checks such as `M * M⁻¹ ≈ I`.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Tolerance for the same checks in single precision.
pub const F32_TOLERANCE: f32 = 1e-5;

/// A quarter turn in radians (`π/2`).
pub const HALF_PI: f64 = core::f64::consts::FRAC_PI_2;

/// A half turn in radians (`π`).
pub const PI: f64 = core::f64::consts::PI;
