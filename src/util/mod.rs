pub mod linalg;
pub mod rng;

pub mod gg_float {
    use crate::core::config::EPSILON;
    use num_traits::{Float, FloatConst};
    use rand::distributions::uniform::SampleUniform;
    use std::fmt;

    /// The component type of [`Vec2`](crate::util::linalg::Vec2) and
    /// [`Vec3`](crate::util::linalg::Vec3).
    ///
    /// Implemented for [`f32`] and [`f64`].
    pub trait Scalar:
        Float + FloatConst + SampleUniform + Default + fmt::Debug + fmt::Display + 'static
    {
        /// Tolerance used by `equal()` when none is given explicitly.
        const TOLERANCE: Self;

        /// Computes `numerator / denominator` in this type. A zero denominator gives an infinite
        /// or `NaN` result, as float division does.
        fn ratio(numerator: i32, denominator: i32) -> Self;
    }

    impl Scalar for f32 {
        #[allow(clippy::cast_possible_truncation)]
        const TOLERANCE: f32 = EPSILON as f32;

        #[allow(clippy::cast_precision_loss)]
        fn ratio(numerator: i32, denominator: i32) -> f32 {
            numerator as f32 / denominator as f32
        }
    }

    impl Scalar for f64 {
        const TOLERANCE: f64 = EPSILON;

        fn ratio(numerator: i32, denominator: i32) -> f64 {
            f64::from(numerator) / f64::from(denominator)
        }
    }

    pub fn force_positive_zero<T: Scalar>(x: T) -> T {
        if x.is_zero() { T::zero() } else { x }
    }

    /// Component-wise closeness check shared by the vector types.
    ///
    /// Finite values are close when they differ by at most `tolerance`. If either value is not
    /// finite, only an exact match counts; `NaN` matches `NaN` and nothing else.
    pub fn within<T: Scalar>(a: T, b: T, tolerance: T) -> bool {
        if a.is_finite() && b.is_finite() {
            (a - b).abs() <= tolerance
        } else {
            (a.is_nan() && b.is_nan()) || a == b
        }
    }

}
