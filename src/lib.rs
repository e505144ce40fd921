//! Fixed-dimension Euclidean vectors: [`Vec2`](util::linalg::Vec2) with polar headings and
//! [`Vec3`](util::linalg::Vec3) with spherical headings, axis rotation, plane reflection and
//! parallel/perpendicular decomposition.
//!
//! ```
//! use ggvec::core::prelude::*;
//!
//! let v = Vec3f::new(3.0, 4.0, 12.0);
//! assert_eq!(v.mag(), 13.0);
//! assert_eq!(linalg::vec3::cross(Vec3f::x_axis(), Vec3f::y_axis()), Vec3f::z_axis());
//! ```

pub mod core;
pub mod util;
