use thiserror::Error;

/// Rejected parameter sets. Checked before any buffer is allocated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("point count must be at least 1")]
    EmptyCount,

    #[error("branch count must be at least 1")]
    NoBranches,

    #[error("radius must be a positive finite number, got {0}")]
    InvalidRadius(f32),

    #[error("randomness must be a non-negative finite number, got {0}")]
    InvalidRandomness(f32),

    #[error("randomness power must be a non-negative finite number, got {0}")]
    InvalidRandomnessPower(f32),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColourParseError {
    #[error("colour must start with '#': {0:?}")]
    MissingHash(String),

    #[error("colour must have 6 hex digits: {0:?}")]
    InvalidLength(String),

    #[error("invalid hex digit in colour: {0:?}")]
    InvalidDigit(String),
}
