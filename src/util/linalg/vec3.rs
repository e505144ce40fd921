#[allow(unused_imports)]
use crate::core::prelude::*;

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

/// A 3D Euclidean vector.
///
/// [`Vec3`] is a plain value: it is [`Copy`], has no identity beyond its components, and every
/// operation is available in two forms:
/// - a mutator on `&mut self` that returns `&mut Self`, so that calls can be chained;
/// - a pure form (a `&self` method or a free function in this module) that returns a new vector.
///
/// Directions are expressed in spherical coordinates: the azimuth `theta` is measured in the
/// XY-plane from the X-axis, and the zenith `phi` is measured from the Z-axis.
///
/// # Examples
///
/// ```
/// use ggvec::core::prelude::*;
///
/// let mut v = Vec3f::new(1.0, 2.0, 2.0);
/// assert_eq!(v.mag(), 3.0);
/// v.add_mut(Vec3f::new(2.0, 2.0, 10.0)).mul_mut(0.5);
/// assert_eq!(v, Vec3f::new(1.5, 2.0, 6.0));
/// ```
///
/// # Equality
/// Two vectors are equal if each pair of components differs by at most
/// [`Scalar::TOLERANCE`]. Use [`Vec3::equal_within`] for a different tolerance. Components that
/// are infinite must match exactly, and `NaN` only matches `NaN`, so equality stays reflexive
/// for vectors such as `from_angles(Vec3::zero().heading())`.
///
/// # Degenerate inputs
/// The zero vector is a valid value. Operations that need a direction treat a zero
/// direction as a no-op instead of failing: normalising or resizing zero gives zero, and
/// rotating about or reflecting through a zero axis returns the input unchanged. Angles
/// involving the zero vector are `NaN`.
#[derive(Default, Debug, Copy, Clone)]
pub struct Vec3<T = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> PartialEq for Vec3<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(*other)
    }
}

impl<T: Scalar> Vec3<T> {
    #[must_use]
    pub fn new(x: T, y: T, z: T) -> Vec3<T> {
        Vec3 { x, y, z }
    }
    #[must_use]
    pub fn zero() -> Vec3<T> {
        Vec3::new(T::zero(), T::zero(), T::zero())
    }
    #[must_use]
    pub fn x_axis() -> Vec3<T> {
        Vec3::new(T::one(), T::zero(), T::zero())
    }
    #[must_use]
    pub fn y_axis() -> Vec3<T> {
        Vec3::new(T::zero(), T::one(), T::zero())
    }
    #[must_use]
    pub fn z_axis() -> Vec3<T> {
        Vec3::new(T::zero(), T::zero(), T::one())
    }

    /// Returns the unit vector with azimuth `theta` and zenith `phi`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggvec::core::prelude::*;
    /// use std::f32::consts::FRAC_PI_2;
    /// let v = Vec3f::from_angles(FRAC_PI_2, FRAC_PI_2);
    /// assert!(v.equal_within(Vec3f::y_axis(), 1e-6));
    /// ```
    #[must_use]
    pub fn from_angles(theta: T, phi: T) -> Vec3<T> {
        Self::from_angles_with_len(theta, phi, T::one())
    }

    /// Spherical-to-Cartesian conversion:
    /// `x = l·cos(theta)·sin(phi)`, `y = l·sin(theta)·sin(phi)`, `z = l·cos(phi)`.
    #[must_use]
    pub fn from_angles_with_len(theta: T, phi: T, length: T) -> Vec3<T> {
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        Vec3 {
            x: length * cos_theta * sin_phi,
            y: length * sin_theta * sin_phi,
            z: length * cos_phi,
        }
    }

    /// Returns a unit vector in a random direction, drawn from the current thread's generator.
    #[must_use]
    pub fn random() -> Vec3<T> {
        Self::random_with_len(T::one())
    }
    #[must_use]
    pub fn random_with_len(length: T) -> Vec3<T> {
        Self::random_from(&mut rand::thread_rng(), length)
    }
    /// Returns a vector of the given length whose azimuth and zenith are each drawn uniformly
    /// from `[0, 2π)` using `rng`.
    ///
    /// Pass a generator from [`rng::seeded`](crate::util::rng::seeded) for reproducible output.
    #[must_use]
    pub fn random_from<R: Rng>(rng: &mut R, length: T) -> Vec3<T> {
        let theta = rng.gen_range(T::zero()..T::TAU());
        let phi = rng.gen_range(T::zero()..T::TAU());
        Self::from_angles_with_len(theta, phi, length)
    }

    /// Checks equality within the default tolerance, [`Scalar::TOLERANCE`].
    pub fn equal(&self, other: Vec3<T>) -> bool {
        self.equal_within(other, T::TOLERANCE)
    }
    /// Checks whether every pair of components differs by at most `tolerance`.
    ///
    /// Components are compared independently; this is not a bound on the Euclidean distance.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggvec::core::prelude::*;
    /// let a = Vec3f::new(1.0, 2.0, 3.0);
    /// let b = Vec3f::new(1.05, 1.95, 3.0);
    /// assert!(a.equal_within(b, 0.1));
    /// assert!(!a.equal_within(b, 0.01));
    /// ```
    pub fn equal_within(&self, other: Vec3<T>, tolerance: T) -> bool {
        gg_float::within(self.x, other.x, tolerance)
            && gg_float::within(self.y, other.y, tolerance)
            && gg_float::within(self.z, other.z, tolerance)
    }

    /// Exact comparison against the zero vector. This is the test used for degenerate axes.
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }

    /// Returns the squared magnitude of the vector.
    ///
    /// Use this instead of [`mag`](Vec3::mag) when comparing lengths to avoid the square root.
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
            self.x.hypot(self.y).hypot(self.z)
        }
    }

    /// Returns the unit vector in the same direction, or the zero vector if this vector has zero
    /// magnitude. Negative zero components are converted to positive zero.
    #[must_use]
    pub fn normed(&self) -> Vec3<T> {
        let mag = self.mag();
        if mag.is_zero() {
            return Vec3::zero();
        }
        Vec3 {
            x: gg_float::force_positive_zero(self.x / mag),
            y: gg_float::force_positive_zero(self.y / mag),
            z: gg_float::force_positive_zero(self.z / mag),
        }
    }
    /// Normalises in place; see [`normed`](Vec3::normed).
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normed();
        self
    }

    /// Returns a vector in the same direction with magnitude `mag`. The zero vector stays zero.
    #[must_use]
    pub fn resized(&self, mag: T) -> Vec3<T> {
        self.normed() * mag
    }
    pub fn resize(&mut self, mag: T) -> &mut Self {
        *self = self.resized(mag);
        self
    }

    pub fn add_mut(&mut self, other: Vec3<T>) -> &mut Self {
        *self += other;
        self
    }
    pub fn sub_mut(&mut self, other: Vec3<T>) -> &mut Self {
        *self -= other;
        self
    }
    pub fn mul_mut(&mut self, scalar: T) -> &mut Self {
        *self *= scalar;
        self
    }

    /// Computes the Euclidean distance between two points.
    #[must_use]
    pub fn dist(&self, other: Vec3<T>) -> T {
        (*self - other).mag()
    }

    #[must_use]
    pub fn dot(&self, other: Vec3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the right-handed cross product.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggvec::core::prelude::*;
    /// let v = Vec3f::x_axis().cross(Vec3f::y_axis());
    /// assert_eq!(v, Vec3f::z_axis());
    /// ```
    #[must_use]
    pub fn cross(&self, other: Vec3<T>) -> Vec3<T> {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Returns the unsigned angle between two vectors, in `[0, π]`.
    ///
    /// Returns `NaN` if either vector has zero magnitude. The cosine is clamped to `[-1, 1]`
    /// before `acos()`, so (anti)parallel vectors give `0` or `π` rather than `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggvec::core::prelude::*;
    /// let angle = Vec3f::x_axis().angle(Vec3f::y_axis());
    /// assert_eq!(angle, std::f32::consts::FRAC_PI_2);
    /// assert!(Vec3f::zero().angle(Vec3f::x_axis()).is_nan());
    /// ```
    #[must_use]
    pub fn angle(&self, other: Vec3<T>) -> T {
        let m1 = self.mag();
        let m2 = other.mag();
        if m1.is_zero() || m2.is_zero() {
            return T::nan();
        }
        (*self * m1.recip())
            .dot(other * m2.recip())
            .max(-T::one())
            .min(T::one())
            .acos()
    }

    /// Returns the azimuth and zenith `(theta, phi)` of this vector; the inverse of
    /// [`from_angles`](Vec3::from_angles).
    ///
    /// `theta` is `atan2(y, x)`, which is `0` for the zero vector. `phi` is `NaN` for the zero
    /// vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggvec::core::prelude::*;
    /// use std::f32::consts::FRAC_PI_2;
    /// let (theta, phi) = Vec3f::y_axis().heading();
    /// assert_eq!(theta, FRAC_PI_2);
    /// assert_eq!(phi, FRAC_PI_2);
    /// ```
    #[must_use]
    pub fn heading(&self) -> (T, T) {
        let theta = self.y.atan2(self.x);
        let mag = self.mag();
        if mag.is_zero() {
            return (theta, T::nan());
        }
        let phi = (self.z / mag).max(-T::one()).min(T::one()).acos();
        (theta, phi)
    }

    /// Points the vector in the direction `(theta, phi)`, keeping its magnitude.
    pub fn set_heading(&mut self, theta: T, phi: T) -> &mut Self {
        *self = Vec3::from_angles_with_len(theta, phi, self.mag());
        self
    }

    /// Splits this vector into the parts parallel and perpendicular to `axis`, returned in that
    /// order. They sum to the original vector.
    ///
    /// If `axis` is the zero vector, both parts are zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggvec::core::prelude::*;
    /// let v = Vec3f::new(2.0, 3.0, 4.0);
    /// let (parallel, perpendicular) = v.component(Vec3f::new(0.0, 0.0, 5.0));
    /// assert_eq!(parallel, Vec3f::new(0.0, 0.0, 4.0));
    /// assert_eq!(perpendicular, Vec3f::new(2.0, 3.0, 0.0));
    /// ```
    #[must_use]
    pub fn component(&self, axis: Vec3<T>) -> (Vec3<T>, Vec3<T>) {
        if axis.is_zero() {
            return (Vec3::zero(), Vec3::zero());
        }
        let unit = axis.normed();
        let parallel = unit * self.dot(unit);
        (parallel, *self - parallel)
    }

    // Assumes self is perpendicular to normal.
    fn rotated_on_plane(&self, normal: Vec3<T>, radians: T) -> Vec3<T> {
        let (sin, cos) = radians.sin_cos();
        *self * cos + normal.normed().cross(*self) * sin
    }

    /// Returns this vector rotated by `radians` about `axis`, counter-clockwise when looking
    /// down the axis towards the origin.
    ///
    /// The part parallel to `axis` is kept; the perpendicular part is rotated within the plane
    /// normal to `axis`. Rotating about the zero vector returns this vector unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggvec::core::prelude::*;
    /// use std::f32::consts::FRAC_PI_2;
    /// let v = Vec3f::x_axis().rotated_along_axis(Vec3f::z_axis(), FRAC_PI_2);
    /// assert!(v.equal_within(Vec3f::y_axis(), 1e-6));
    /// ```
    #[must_use]
    pub fn rotated_along_axis(&self, axis: Vec3<T>, radians: T) -> Vec3<T> {
        if axis.is_zero() {
            return *self;
        }
        let (parallel, perpendicular) = self.component(axis);
        parallel + perpendicular.rotated_on_plane(axis, radians)
    }
    pub fn rotate_along_axis(&mut self, axis: Vec3<T>, radians: T) -> &mut Self {
        *self = self.rotated_along_axis(axis, radians);
        self
    }

    /// Returns the mirror image of this vector in the plane through the origin with the given
    /// normal. The normal need not be normalised; a zero normal returns this vector unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggvec::core::prelude::*;
    /// let v = Vec3f::new(1.0, 1.0, 1.0);
    /// assert_eq!(v.reflected_through_plane(Vec3f::new(0.0, 0.0, 3.0)), Vec3f::new(1.0, 1.0, -1.0));
    /// ```
    #[must_use]
    pub fn reflected_through_plane(&self, normal: Vec3<T>) -> Vec3<T> {
        if normal.is_zero() {
            return *self;
        }
        let n = normal.normed();
        *self - n * ((T::one() + T::one()) * self.dot(n))
    }
    pub fn reflect_through_plane(&mut self, normal: Vec3<T>) -> &mut Self {
        *self = self.reflected_through_plane(normal);
        self
    }

    /// Linearly interpolates between this vector and `to`, component-wise.
    ///
    /// `t` is not clamped: `t = 0` gives this vector, `t = 1` gives `to`, and values outside
    /// `[0, 1]` extrapolate.
    #[must_use]
    pub fn lerp(&self, to: Vec3<T>, t: T) -> Vec3<T> {
        Vec3 {
            x: linalg::lerp(self.x, to.x, t),
            y: linalg::lerp(self.y, to.y, t),
            z: linalg::lerp(self.z, to.z, t),
        }
    }

    /// Compares two vectors by magnitude.
    ///
    /// Falls back to [`total_cmp()`](f64::total_cmp) on the squared magnitudes, and logs a
    /// warning, if either one is `NaN`.
    #[must_use]
    pub fn cmp_by_mag(&self, other: &Vec3<T>) -> Ordering {
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

pub fn add<T: Scalar>(v1: Vec3<T>, v2: Vec3<T>) -> Vec3<T> {
    v1 + v2
}
pub fn sub<T: Scalar>(v1: Vec3<T>, v2: Vec3<T>) -> Vec3<T> {
    v1 - v2
}
pub fn mult<T: Scalar>(v: Vec3<T>, scalar: T) -> Vec3<T> {
    v * scalar
}
pub fn dist<T: Scalar>(v1: Vec3<T>, v2: Vec3<T>) -> T {
    v1.dist(v2)
}
pub fn dot<T: Scalar>(v1: Vec3<T>, v2: Vec3<T>) -> T {
    v1.dot(v2)
}
pub fn cross<T: Scalar>(v1: Vec3<T>, v2: Vec3<T>) -> Vec3<T> {
    v1.cross(v2)
}
pub fn angle<T: Scalar>(v1: Vec3<T>, v2: Vec3<T>) -> T {
    v1.angle(v2)
}
/// Returns the unit vector in the direction of `v`, or the zero vector if `v` is zero.
pub fn unit<T: Scalar>(v: Vec3<T>) -> Vec3<T> {
    v.normed()
}
pub fn rotate_along_axis<T: Scalar>(v: Vec3<T>, axis: Vec3<T>, radians: T) -> Vec3<T> {
    v.rotated_along_axis(axis, radians)
}
pub fn reflect_through_plane<T: Scalar>(v: Vec3<T>, normal: Vec3<T>) -> Vec3<T> {
    v.reflected_through_plane(normal)
}
pub fn lerp<T: Scalar>(v1: Vec3<T>, v2: Vec3<T>, t: T) -> Vec3<T> {
    v1.lerp(v2, t)
}
/// Interpolates at step `i` of `n`, i.e. with `t = i / n`.
///
/// # Examples
///
/// ```
/// use ggvec::core::prelude::*;
/// let end = Vec3f::new(1.0, 1.0, 1.0);
/// let mid = linalg::vec3::lerp_steps(Vec3f::zero(), end, 2, 1);
/// assert_eq!(mid, Vec3f::new(0.5, 0.5, 0.5));
/// ```
pub fn lerp_steps<T: Scalar>(v1: Vec3<T>, v2: Vec3<T>, n: i32, i: i32) -> Vec3<T> {
    v1.lerp(v2, T::ratio(i, n))
}

impl<T: Scalar> num_traits::Zero for Vec3<T> {
    fn zero() -> Self {
        Vec3::zero()
    }

    fn is_zero(&self) -> bool {
        Vec3::is_zero(self)
    }
}

impl<T: Scalar> From<[T; 3]> for Vec3<T> {
    fn from(value: [T; 3]) -> Self {
        Vec3 {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}

impl<T: Scalar> From<Vec3<T>> for [T; 3] {
    fn from(value: Vec3<T>) -> Self {
        [value.x, value.y, value.z]
    }
}

impl<T: Scalar> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(p) = f.precision() {
            write!(
                f,
                "{{X: {0:.3$}, Y: {1:.3$}, Z: {2:.3$}}}",
                self.x, self.y, self.z, p
            )
        } else {
            write!(f, "{{X: {}, Y: {}, Z: {}}}", self.x, self.y, self.z)
        }
    }
}

impl<T: Scalar> Add<Vec3<T>> for Vec3<T> {
    type Output = Vec3<T>;

    fn add(self, rhs: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl<T: Scalar> AddAssign<Vec3<T>> for Vec3<T> {
    fn add_assign(&mut self, rhs: Vec3<T>) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
        self.z = self.z + rhs.z;
    }
}

impl<T: Scalar> Sub<Vec3<T>> for Vec3<T> {
    type Output = Vec3<T>;

    fn sub(self, rhs: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl<T: Scalar> SubAssign<Vec3<T>> for Vec3<T> {
    fn sub_assign(&mut self, rhs: Vec3<T>) {
        self.x = self.x - rhs.x;
        self.y = self.y - rhs.y;
        self.z = self.z - rhs.z;
    }
}

impl<T: Scalar> Sum<Vec3<T>> for Vec3<T> {
    fn sum<I: Iterator<Item = Vec3<T>>>(iter: I) -> Self {
        iter.fold(Vec3::zero(), |acc, v| acc + v)
    }
}

impl<T: Scalar> Mul<T> for Vec3<T> {
    type Output = Vec3<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Vec3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
impl<T: Scalar> MulAssign<T> for Vec3<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.x = self.x * rhs;
        self.y = self.y * rhs;
        self.z = self.z * rhs;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Vec3<$t>> for $t {
                type Output = Vec3<$t>;

                fn mul(self, rhs: Vec3<$t>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}
impl_scalar_lhs_mul!(f32, f64);

impl<T: Scalar> Neg for Vec3<T> {
    type Output = Vec3<T>;

    fn neg(self) -> Self::Output {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
