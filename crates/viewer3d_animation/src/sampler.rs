//! Trajectory sampling.
//!
//! Control points are consumed in windows of four. Consecutive windows share
//! one endpoint: window `k` covers points `[3k, 3k + 3]`, so a list of
//! `4 + 3k` points is consumed completely. Points past the last full window
//! never start a new one and are ignored.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::basis::BasisKind;
use crate::errors::{AnimationError, Result};

/// Points per window.
pub const WINDOW_SIZE: usize = 4;
/// Distance between the first points of two consecutive windows.
pub const WINDOW_STRIDE: usize = 3;
/// Default parameter resolution of one segment.
pub const DEFAULT_SAMPLES_PER_SEGMENT: u32 = 100;
/// Highest accepted resolution. Keeps `i / samples` distinct in `f32` and
/// bounds the memory of a single segment.
pub const MAX_SAMPLES_PER_SEGMENT: u32 = 1 << 16;

/// Sampling resolution used when building a trajectory.
///
/// # Example
///
/// ```rust
/// use viewer3d_animation::SamplingSettings;
///
/// let coarse = SamplingSettings { samples_per_segment: 10 };
/// assert!(coarse.validate().is_ok());
/// assert_eq!(SamplingSettings::default().samples_per_segment, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingSettings {
    /// Number of parameter steps per segment. Each segment emits
    /// `samples_per_segment + 1` points, `t = 0` and `t = 1` included.
    pub samples_per_segment: u32,
}

impl Default for SamplingSettings {
    #[inline]
    fn default() -> Self {
        Self {
            samples_per_segment: DEFAULT_SAMPLES_PER_SEGMENT,
        }
    }
}

impl SamplingSettings {
    /// Rejects resolutions outside `1..=MAX_SAMPLES_PER_SEGMENT`.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SAMPLES_PER_SEGMENT).contains(&self.samples_per_segment) {
            return Err(AnimationError::InvalidSampleResolution(
                self.samples_per_segment,
            ));
        }
        Ok(())
    }

    /// Points emitted per window.
    #[inline]
    #[must_use]
    pub fn points_per_segment(&self) -> usize {
        self.samples_per_segment as usize + 1
    }
}

/// Number of 4-point windows a list of `control_points` points yields.
#[inline]
#[must_use]
pub fn window_count(control_points: usize) -> usize {
    if control_points < WINDOW_SIZE {
        0
    } else {
        (control_points - WINDOW_SIZE) / WINDOW_STRIDE + 1
    }
}

/// Number of trailing control points that belong to no window.
#[inline]
#[must_use]
pub fn unused_trailing_points(control_points: usize) -> usize {
    match window_count(control_points) {
        0 => control_points,
        windows => control_points - ((windows - 1) * WINDOW_STRIDE + WINDOW_SIZE),
    }
}

/// Dense, ordered list of curve points.
///
/// Built once and never modified afterwards. The last point of one segment
/// and the first point of the next are both kept, even when they coincide.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    points: Vec<Vec3>,
    segments: usize,
    samples_per_segment: u32,
}

impl Trajectory {
    /// Samples every window of `control_points` with the given basis.
    ///
    /// Fewer than four control points produce an empty trajectory. Invalid
    /// settings are rejected before anything is allocated.
    pub fn sample(
        basis: BasisKind,
        control_points: &[Vec3],
        settings: &SamplingSettings,
    ) -> Result<Self> {
        settings.validate()?;
        Ok(Self::sample_validated(basis, control_points, settings))
    }

    /// [`sample`](Self::sample) for settings that already passed `validate`.
    #[must_use]
    pub(crate) fn sample_validated(
        basis: BasisKind,
        control_points: &[Vec3],
        settings: &SamplingSettings,
    ) -> Self {
        let segments = window_count(control_points.len());
        let samples = settings.samples_per_segment;

        if segments == 0 {
            return Self {
                points: Vec::new(),
                segments: 0,
                samples_per_segment: samples,
            };
        }

        let trailing = unused_trailing_points(control_points.len());
        if trailing > 0 {
            log::warn!(
                "{trailing} trailing control point(s) out of {} do not complete a segment and are ignored",
                control_points.len()
            );
        }

        let mut points = Vec::with_capacity(segments * settings.points_per_segment());
        let step = samples as f32;

        for start in (0..segments).map(|k| k * WINDOW_STRIDE) {
            let window = [
                control_points[start],
                control_points[start + 1],
                control_points[start + 2],
                control_points[start + 3],
            ];
            // i / samples instead of an accumulated step, so t = 1 is hit exactly
            points.extend((0..=samples).map(|i| basis.evaluate(&window, i as f32 / step)));
        }

        log::debug!(
            "Sampled {basis:?} trajectory: {segments} segment(s), {} points",
            points.len()
        );

        Self {
            points,
            segments,
            samples_per_segment: samples,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.points.get(index).copied()
    }

    #[inline]
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.points.iter().copied()
    }

    /// Number of curve segments (4-point windows) that were sampled.
    #[inline]
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments
    }

    #[inline]
    #[must_use]
    pub fn samples_per_segment(&self) -> u32 {
        self.samples_per_segment
    }
}
