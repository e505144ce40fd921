//! Random sources for `random_from()` on the vector types.
//!
//! The plain `random()` constructors draw from [`rand::thread_rng`], a lazily-seeded generator
//! local to each thread, so no process-wide initialisation is needed. Use the functions here when
//! a run must be reproducible.

#[allow(unused_imports)]
use crate::core::prelude::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Returns a generator that produces the same sequence for the same `seed`.
///
/// # Examples
///
/// ```
/// use ggvec::core::prelude::*;
/// let a = Vec2f::random_from(&mut rng::seeded(7), 1.0);
/// let b = Vec2f::random_from(&mut rng::seeded(7), 1.0);
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Returns a generator with a freshly drawn seed. The seed is logged so that the run can be
/// replayed with [`seeded`].
#[must_use]
pub fn from_entropy() -> StdRng {
    let seed = rand::random::<u64>();
    info!("rng::from_entropy(): seed={seed}");
    seeded(seed)
}
