use thiserror::Error;

/// Errors from the fallible seams of the crate.
///
/// The numeric core itself is total: out-of-range math follows IEEE rules
/// (inf/NaN propagation) instead of failing. Errors arise only when parsing
/// a projection name or validating an elliptic modulus before dispatch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("unknown projection `{0}`")]
    UnknownProjection(String),
    #[error("unknown modulus kind `{0}`, expected `angle`, `parameter` or `modulus`")]
    UnknownModulusKind(String),
    #[error("elliptic modulus k = {k} is outside [0, 1]")]
    ModulusOutOfRange { k: f32 },
}
