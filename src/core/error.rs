/// Failures that vector operations report instead of producing non-finite results.
///
/// Most degenerate inputs are handled without an error (see the individual operations): a zero
/// axis leaves a rotation as a no-op, and an angle against the zero vector is `NaN`. The variants
/// here cover the remaining cases, where the caller asked for a checked result.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    #[error("divide by zero")]
    DivisionByZero,

    #[error("cannot calculate angle between zero vectors")]
    ZeroVector,
}

pub type Result<T> = std::result::Result<T, VectorError>;
