//! Trajectory animation for scene objects.
//!
//! An [`Animator`] turns a sparse list of control points into a dense
//! [`Trajectory`] once, using one of three cubic bases ([`BasisKind`]), and
//! then plays that trajectory back one point per rendered frame.
//!
//! - [`basis`]: matrix-form Bézier, Catmull-Rom and Hermite evaluation
//! - [`sampler`]: windowing of control points and fixed-resolution sampling
//! - [`cursor`]: frame index and ping-pong direction state
//! - [`animator`]: the façade combining the three

pub mod animator;
pub mod basis;
pub mod cursor;
pub mod errors;
pub mod sampler;

pub use animator::Animator;
pub use basis::BasisKind;
pub use cursor::{Direction, PlaybackCursor, PlaybackMode};
pub use errors::{AnimationError, Result};
pub use sampler::{
    DEFAULT_SAMPLES_PER_SEGMENT, MAX_SAMPLES_PER_SEGMENT, SamplingSettings, Trajectory,
};
