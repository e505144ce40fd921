#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use tracing::{error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::{
        config::*,
        error::{Result, VectorError},
    },
    util::{
        gg_float::Scalar,
        linalg,
        linalg::{Vec2, Vec2f, Vec3, Vec3f},
        rng,
    },
};
