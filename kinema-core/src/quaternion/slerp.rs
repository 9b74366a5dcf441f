//! Spherical linear interpolation.

use super::core::Quaternion;
use crate::Real;
use tracing::debug;

impl<T: Real> Quaternion<T> {
    /// Interpolates from `from` to `to` along the great arc between them.
    ///
    /// With `angle = acos(from · to)`:
    ///
    /// ```text
    /// slerp = from · sin((1 − t)·angle) / sin(angle) + to · sin(t·angle) / sin(angle)
    /// ```
    ///
    /// Both operands should be unit quaternions; this is not checked. The dot
    /// product is clamped to `[-1, 1]` before `acos`. When `sin(angle)` is
    /// within machine epsilon of zero (the operands are equal or antipodal),
    /// the formula is undefined and the result falls back to the linear blend
    /// `from·(1 − t) + to·t`.
    ///
    /// No shortest-path correction is applied: if `from · to < 0` the
    /// interpolation takes the long way round. Negate one operand first to
    /// avoid that.
    ///
    /// ```
    /// use kinema_core::{Quaternion, Vector3};
    /// use approx::assert_relative_eq;
    ///
    /// let from = Quaternion::<f64>::identity();
    /// let to = Quaternion::from_axis_angle(&Vector3::z_axis(), 1.0).unwrap();
    ///
    /// let halfway = Quaternion::slerp(&from, &to, 0.5);
    /// let expected = Quaternion::from_axis_angle(&Vector3::z_axis(), 0.5).unwrap();
    /// assert_relative_eq!(halfway, expected, epsilon = 1e-12);
    /// ```
    pub fn slerp(from: &Self, to: &Self, t: T) -> Self {
        if t == T::zero() {
            return *from;
        }
        if t == T::one() {
            return *to;
        }

        let cos_angle = from.dot(to).max(-T::one()).min(T::one());
        let angle = cos_angle.acos();
        let sin_angle = angle.sin();

        if sin_angle.abs() <= T::epsilon() {
            debug!(
                cos_angle = %cos_angle,
                "slerp operands are parallel, falling back to linear interpolation"
            );
            return *from * (T::one() - t) + *to * t;
        }

        let from_weight = ((T::one() - t) * angle).sin() / sin_angle;
        let to_weight = (t * angle).sin() / sin_angle;
        *from * from_weight + *to * to_weight
    }
}

#[cfg(test)]
mod tests {
    use crate::constants::PI;
    use crate::{Quaternion, Vector3};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn about_z(angle: f64) -> Quaternion {
        Quaternion::from_axis_angle(&Vector3::z_axis(), angle).unwrap()
    }

    #[test]
    fn test_endpoints_are_exact() {
        let from = about_z(0.3);
        let to = Quaternion::from_axis_angle(&Vector3::new(1.0, -1.0, 2.0), 1.7).unwrap();
        assert_eq!(Quaternion::slerp(&from, &to, 0.0), from);
        assert_eq!(Quaternion::slerp(&from, &to, 1.0), to);
    }

    #[test]
    fn test_constant_angular_velocity() {
        let from = about_z(0.0);
        let to = about_z(1.2);
        for (t, expected) in [(0.25, 0.3), (0.5, 0.6), (0.75, 0.9)] {
            assert_relative_eq!(
                Quaternion::slerp(&from, &to, t),
                about_z(expected),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_result_stays_unit() {
        let from = about_z(0.4);
        let to = Quaternion::from_axis_angle(&Vector3::new(0.2, 1.0, -0.4), 2.1).unwrap();
        for i in 1..10 {
            let t = i as f64 / 10.0;
            let q = Quaternion::slerp(&from, &to, t);
            assert_abs_diff_eq!(q.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_equal_operands_fall_back_to_lerp() {
        let q = about_z(0.8);
        let mid = Quaternion::slerp(&q, &q, 0.5);
        assert_relative_eq!(mid, q, epsilon = 1e-15);
        assert!(mid.as_slice().iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_antipodal_operands_stay_finite() {
        let q = Quaternion::<f64>::identity();
        let mid = Quaternion::slerp(&q, &-q, 0.25);
        assert!(mid.as_slice().iter().all(|c| c.is_finite()));
        assert_relative_eq!(mid, q * 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_long_way_round_without_sign_correction() {
        // -about_z(1.0) is the same rotation, but the path goes the other way
        let from = about_z(0.0);
        let to = -about_z(1.0);
        let mid = Quaternion::slerp(&from, &to, 0.5);
        assert_relative_eq!(mid, about_z(0.5 - PI), epsilon = 1e-12);
        assert_abs_diff_eq!(mid.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_precision() {
        let from = Quaternion::<f32>::identity();
        let to = Quaternion::from_axis_angle(&Vector3::<f32>::x_axis(), 1.0).unwrap();
        let mid = Quaternion::slerp(&from, &to, 0.5);
        let expected = Quaternion::from_axis_angle(&Vector3::<f32>::x_axis(), 0.5).unwrap();
        assert_relative_eq!(mid, expected, epsilon = 1e-6);
    }
}
