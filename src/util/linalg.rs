use crate::util::gg_float::Scalar;

pub mod vec2;
pub mod vec3;

pub use vec2::Vec2;
pub use vec3::Vec3;

/// A [`Vec2`] with 32-bit components.
pub type Vec2f = Vec2<f32>;
/// A [`Vec3`] with 32-bit components.
pub type Vec3f = Vec3<f32>;

/// A linear interpolation between two values.
///
/// `t` is not clamped, so values outside `[0, 1]` extrapolate past either end.
///
/// # Examples
/// ```
/// use ggvec::core::prelude::*;
/// let start = 0.0_f32;
/// let end = 10.0;
/// assert_eq!(linalg::lerp(start, end, 0.0), start);
/// assert_eq!(linalg::lerp(start, end, 1.0), end);
/// assert_eq!(linalg::lerp(start, end, 0.5), 5.0);
/// assert_eq!(linalg::lerp(start, end, 1.5), 15.0);
/// ```
pub fn lerp<T: Scalar>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_extrapolates() {
        assert_eq!(lerp(1.0_f32, 3.0, -1.0), -1.0);
        assert_eq!(lerp(1.0_f64, 3.0, 2.0), 5.0);
        assert_eq!(lerp(2.0_f32, 2.0, 100.0), 2.0);
    }
}
