/// Default tolerance for component-wise vector equality, in both 32- and 64-bit vectors.
pub const EPSILON: f64 = 1e-7;
