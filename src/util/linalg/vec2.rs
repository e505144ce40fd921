#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::core::error::{Result, VectorError};
use crate::util::gg_float::{self, Scalar};
use crate::util::linalg;
use rand::Rng;
use std::cmp::Ordering;
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A 2D Euclidean vector.
///
/// [`Vec2`] follows the same conventions as [`Vec3`](crate::util::linalg::Vec3): it is a
/// [`Copy`] value, mutators return `&mut Self` for chaining, and pure forms return new vectors.
/// Its direction is a single signed heading, measured counter-clockwise from the X-axis.
///
/// Unlike [`Vec3`](crate::util::linalg::Vec3), [`Vec2`] supports division by a scalar. It is
/// always checked: dividing by zero returns [`VectorError::DivisionByZero`] rather than an
/// infinite vector, which is why there is no `/` operator.
///
/// # Examples
///
/// ```
/// use ggvec::core::prelude::*;
///
/// let mut v = Vec2f::new(3.0, 4.0);
/// assert_eq!(v.mag(), 5.0);
/// v.div_mut(2.0)?.add_mut(Vec2f::new(0.5, 0.0));
/// assert_eq!(v, Vec2f::new(2.0, 2.0));
/// assert_eq!(v.div_mut(0.0).unwrap_err(), VectorError::DivisionByZero);
/// # Ok::<(), VectorError>(())
/// ```
///
/// # Equality
/// As for [`Vec3`](crate::util::linalg::Vec3), components are compared independently within
/// [`Scalar::TOLERANCE`] by default.
#[derive(Default, Debug, Copy, Clone)]
pub struct Vec2<T = f32> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> PartialEq for Vec2<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(*other)
    }
}

impl<T: Scalar> Vec2<T> {
    #[must_use]
    pub fn new(x: T, y: T) -> Vec2<T> {
        Vec2 { x, y }
    }
    #[must_use]
    pub fn zero() -> Vec2<T> {
        Vec2::new(T::zero(), T::zero())
    }
    #[must_use]
    pub fn x_axis() -> Vec2<T> {
        Vec2::new(T::one(), T::zero())
    }
    #[must_use]
    pub fn y_axis() -> Vec2<T> {
        Vec2::new(T::zero(), T::one())
    }

    /// Returns the unit vector with the given heading.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggvec::core::prelude::*;
    /// let v = Vec2f::from_angle(std::f32::consts::PI);
    /// assert!(v.equal_within(Vec2f::new(-1.0, 0.0), 1e-6));
    /// ```
    #[must_use]
    pub fn from_angle(radians: T) -> Vec2<T> {
        Self::from_angle_with_len(radians, T::one())
    }
    #[must_use]
    pub fn from_angle_with_len(radians: T, length: T) -> Vec2<T> {
        let (sin, cos) = radians.sin_cos();
        Vec2 {
            x: cos * length,
            y: sin * length,
        }
    }

    #[must_use]
    pub fn random() -> Vec2<T> {
        Self::random_with_len(T::one())
    }
    #[must_use]
    pub fn random_with_len(length: T) -> Vec2<T> {
        Self::random_from(&mut rand::thread_rng(), length)
    }
    /// Returns a vector of the given length with a heading drawn uniformly from `[0, 2π)`.
    #[must_use]
    pub fn random_from<R: Rng>(rng: &mut R, length: T) -> Vec2<T> {
        Self::from_angle_with_len(rng.gen_range(T::zero()..T::TAU()), length)
    }

    pub fn equal(&self, other: Vec2<T>) -> bool {
        self.equal_within(other, T::TOLERANCE)
    }
    pub fn equal_within(&self, other: Vec2<T>, tolerance: T) -> bool {
        gg_float::within(self.x, other.x, tolerance) && gg_float::within(self.y, other.y, tolerance)
    }

    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    #[must_use]
    pub fn mag_sq(&self) -> T {
        self.dot(*self)
    }
    #[must_use]
    pub fn mag(&self) -> T {
        let mag_sq = self.mag_sq();
        if mag_sq.is_normal() {
            mag_sq.sqrt()
        } else {
            // The square overflowed or underflowed (or the vector is zero).
            self.x.hypot(self.y)
        }
    }

    /// Returns the angle of this vector from the X-axis, in `(-π, π]`. The zero vector has
    /// heading `0`.
    #[must_use]
    pub fn heading(&self) -> T {
        self.y.atan2(self.x)
    }
    /// Points the vector at the given heading, keeping its magnitude.
    pub fn set_heading(&mut self, radians: T) -> &mut Self {
        *self = Vec2::from_angle_with_len(radians, self.mag());
        self
    }

    /// Returns this vector rotated counter-clockwise by `radians`.
    ///
    /// The result is rebuilt from the new heading and the current magnitude.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggvec::core::prelude::*;
    /// let v = Vec2f::new(2.0, 0.0).rotated(std::f32::consts::FRAC_PI_2);
    /// assert!(v.equal_within(Vec2f::new(0.0, 2.0), 1e-6));
    /// ```
    #[must_use]
    pub fn rotated(&self, radians: T) -> Vec2<T> {
        Vec2::from_angle_with_len(self.heading() + radians, self.mag())
    }
    pub fn rotate(&mut self, radians: T) -> &mut Self {
        *self = self.rotated(radians);
        self
    }

    /// Returns the unit vector in the same direction, or the zero vector if this vector has zero
    /// magnitude.
    #[must_use]
    pub fn normed(&self) -> Vec2<T> {
        let mag = self.mag();
        if mag.is_zero() {
            return Vec2::zero();
        }
        Vec2 {
            x: gg_float::force_positive_zero(self.x / mag),
            y: gg_float::force_positive_zero(self.y / mag),
        }
    }
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normed();
        self
    }

    #[must_use]
    pub fn resized(&self, mag: T) -> Vec2<T> {
        self.normed() * mag
    }
    pub fn resize(&mut self, mag: T) -> &mut Self {
        *self = self.resized(mag);
        self
    }

    pub fn add_mut(&mut self, other: Vec2<T>) -> &mut Self {
        *self += other;
        self
    }
    pub fn sub_mut(&mut self, other: Vec2<T>) -> &mut Self {
        *self -= other;
        self
    }
    pub fn mul_mut(&mut self, scalar: T) -> &mut Self {
        *self *= scalar;
        self
    }

    /// Divides each component by `scalar`.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] if `scalar` is zero.
    pub fn checked_div(&self, scalar: T) -> Result<Vec2<T>> {
        if scalar.is_zero() {
            return Err(VectorError::DivisionByZero);
        }
        Ok(Vec2 {
            x: self.x / scalar,
            y: self.y / scalar,
        })
    }
    /// Divides in place. On error the vector is left unchanged.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] if `scalar` is zero.
    pub fn div_mut(&mut self, scalar: T) -> Result<&mut Self> {
        *self = self.checked_div(scalar)?;
        Ok(self)
    }

    #[must_use]
    pub fn dist(&self, other: Vec2<T>) -> T {
        (*self - other).mag()
    }

    #[must_use]
    pub fn dot(&self, other: Vec2<T>) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product: the Z component of the cross product of the two vectors
    /// embedded in the XY-plane.
    ///
    /// It is the signed area of the parallelogram the vectors span: positive if `other` is
    /// counter-clockwise from this vector, and negative if clockwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggvec::core::prelude::*;
    /// assert_eq!(Vec2f::x_axis().cross(Vec2f::y_axis()), 1.0);
    /// assert_eq!(Vec2f::y_axis().cross(Vec2f::x_axis()), -1.0);
    /// ```
    #[must_use]
    pub fn cross(&self, other: Vec2<T>) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Returns the signed angle from this vector to `other`, in `(-π, π]`; negative when `other`
    /// is clockwise from this vector.
    ///
    /// Returns `NaN` if either vector is zero; see
    /// [`try_angle_between`](Vec2::try_angle_between) for a checked version.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggvec::core::prelude::*;
    /// use std::f32::consts::FRAC_PI_2;
    /// let angle = Vec2f::y_axis().angle_between(Vec2f::x_axis());
    /// assert!((angle + FRAC_PI_2).abs() < 1e-6);
    /// assert!(Vec2f::zero().angle_between(Vec2f::x_axis()).is_nan());
    /// ```
    #[must_use]
    pub fn angle_between(&self, other: Vec2<T>) -> T {
        self.try_angle_between(other).unwrap_or_else(|_| T::nan())
    }
    /// Returns the signed angle from this vector to `other`, in `(-π, π]`.
    ///
    /// # Errors
    /// Returns [`VectorError::ZeroVector`] if either vector is zero.
    pub fn try_angle_between(&self, other: Vec2<T>) -> Result<T> {
        let m1 = self.mag();
        let m2 = other.mag();
        if m1.is_zero() || m2.is_zero() {
            return Err(VectorError::ZeroVector);
        }
        let u1 = *self * m1.recip();
        let u2 = other * m2.recip();
        let angle = u1.dot(u2).max(-T::one()).min(T::one()).acos();
        if u1.cross(u2) < T::zero() {
            Ok(-angle)
        } else {
            Ok(angle)
        }
    }

    /// Linearly interpolates between this vector and `to`, component-wise. `t` is not clamped.
    #[must_use]
    pub fn lerp(&self, to: Vec2<T>, t: T) -> Vec2<T> {
        Vec2 {
            x: linalg::lerp(self.x, to.x, t),
            y: linalg::lerp(self.y, to.y, t),
        }
    }

    #[must_use]
    pub fn cmp_by_mag(&self, other: &Vec2<T>) -> Ordering {
        let self_len = self.mag_sq();
        let other_len = other.mag_sq();
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            warn!("cmp_by_mag(): partial_cmp() failed: {} vs. {}", self, other);
            self_len
                .to_f64()
                .unwrap_or(f64::NAN)
                .total_cmp(&other_len.to_f64().unwrap_or(f64::NAN))
        })
    }
}

pub fn add<T: Scalar>(v1: Vec2<T>, v2: Vec2<T>) -> Vec2<T> {
    v1 + v2
}
pub fn sub<T: Scalar>(v1: Vec2<T>, v2: Vec2<T>) -> Vec2<T> {
    v1 - v2
}
pub fn mult<T: Scalar>(v: Vec2<T>, scalar: T) -> Vec2<T> {
    v * scalar
}
/// See [`Vec2::checked_div`].
///
/// # Errors
/// Returns [`VectorError::DivisionByZero`] if `scalar` is zero.
pub fn checked_div<T: Scalar>(v: Vec2<T>, scalar: T) -> Result<Vec2<T>> {
    v.checked_div(scalar)
}
pub fn dist<T: Scalar>(v1: Vec2<T>, v2: Vec2<T>) -> T {
    v1.dist(v2)
}
pub fn dot<T: Scalar>(v1: Vec2<T>, v2: Vec2<T>) -> T {
    v1.dot(v2)
}
pub fn cross<T: Scalar>(v1: Vec2<T>, v2: Vec2<T>) -> T {
    v1.cross(v2)
}
pub fn angle_between<T: Scalar>(v1: Vec2<T>, v2: Vec2<T>) -> T {
    v1.angle_between(v2)
}
/// See [`Vec2::try_angle_between`].
///
/// # Errors
/// Returns [`VectorError::ZeroVector`] if either vector is zero.
pub fn try_angle_between<T: Scalar>(v1: Vec2<T>, v2: Vec2<T>) -> Result<T> {
    v1.try_angle_between(v2)
}
pub fn unit<T: Scalar>(v: Vec2<T>) -> Vec2<T> {
    v.normed()
}
pub fn lerp<T: Scalar>(v1: Vec2<T>, v2: Vec2<T>, t: T) -> Vec2<T> {
    v1.lerp(v2, t)
}
pub fn lerp_steps<T: Scalar>(v1: Vec2<T>, v2: Vec2<T>, n: i32, i: i32) -> Vec2<T> {
    v1.lerp(v2, T::ratio(i, n))
}

impl<T: Scalar> num_traits::Zero for Vec2<T> {
    fn zero() -> Self {
        Vec2::zero()
    }

    fn is_zero(&self) -> bool {
        Vec2::is_zero(self)
    }
}

impl<T: Scalar> From<[T; 2]> for Vec2<T> {
    fn from(value: [T; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}

impl<T: Scalar> From<Vec2<T>> for [T; 2] {
    fn from(value: Vec2<T>) -> Self {
        [value.x, value.y]
    }
}

impl<T: Scalar> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(p) = f.precision() {
            write!(f, "{{X: {0:.2$}, Y: {1:.2$}}}", self.x, self.y, p)
        } else {
            write!(f, "{{X: {}, Y: {}}}", self.x, self.y)
        }
    }
}

impl<T: Scalar> Add<Vec2<T>> for Vec2<T> {
    type Output = Vec2<T>;

    fn add(self, rhs: Vec2<T>) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl<T: Scalar> AddAssign<Vec2<T>> for Vec2<T> {
    fn add_assign(&mut self, rhs: Vec2<T>) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
    }
}

impl<T: Scalar> Sub<Vec2<T>> for Vec2<T> {
    type Output = Vec2<T>;

    fn sub(self, rhs: Vec2<T>) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl<T: Scalar> SubAssign<Vec2<T>> for Vec2<T> {
    fn sub_assign(&mut self, rhs: Vec2<T>) {
        self.x = self.x - rhs.x;
        self.y = self.y - rhs.y;
    }
}

impl<T: Scalar> Sum<Vec2<T>> for Vec2<T> {
    fn sum<I: Iterator<Item = Vec2<T>>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), |acc, v| acc + v)
    }
}

impl<T: Scalar> Mul<T> for Vec2<T> {
    type Output = Vec2<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Vec2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl<T: Scalar> MulAssign<T> for Vec2<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.x = self.x * rhs;
        self.y = self.y * rhs;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Vec2<$t>> for $t {
                type Output = Vec2<$t>;

                fn mul(self, rhs: Vec2<$t>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}
impl_scalar_lhs_mul!(f32, f64);

impl<T: Scalar> Neg for Vec2<T> {
    type Output = Vec2<T>;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}
