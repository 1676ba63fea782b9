//! Error Types
//!
//! Animator construction is the only fallible step: playback itself is pure
//! arithmetic over a precomputed trajectory and never fails.

use thiserror::Error;

/// Errors raised while building an [`Animator`](crate::Animator).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    /// The curve code does not name one of the supported bases.
    #[error("Unknown curve basis code: {0} (expected 0 = Bezier, 1 = CatmullRom, 2 = Hermite)")]
    UnknownBasis(i64),

    /// Resolution outside `1..=MAX_SAMPLES_PER_SEGMENT`.
    #[error(
        "Invalid sample resolution: {0} samples per segment (expected 1..={max})",
        max = crate::sampler::MAX_SAMPLES_PER_SEGMENT
    )]
    InvalidSampleResolution(u32),
}

/// Alias for `Result<T, AnimationError>`.
pub type Result<T> = std::result::Result<T, AnimationError>;
