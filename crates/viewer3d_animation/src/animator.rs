use glam::Vec3;

use crate::basis::BasisKind;
use crate::cursor::{Direction, PlaybackCursor, PlaybackMode};
use crate::errors::Result;
use crate::sampler::{SamplingSettings, Trajectory, WINDOW_SIZE};

/// Plays a precomputed control-point trajectory back one point per frame.
///
/// The whole trajectory is sampled at construction, so [`advance`](Self::advance)
/// is a lookup plus a cursor step. Control points and basis are fixed for the
/// lifetime of the animator; to change them, build a new one.
///
/// ```rust
/// use glam::Vec3;
/// use viewer3d_animation::{Animator, BasisKind};
///
/// let points = vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ONE];
/// let mut animator = Animator::new(true, BasisKind::Bezier, points);
///
/// assert_eq!(animator.advance(), Vec3::ZERO);
/// assert_eq!(animator.trajectory().len(), 101);
/// ```
#[derive(Debug, Clone)]
pub struct Animator {
    looping: bool,
    basis: BasisKind,
    control_points: Vec<Vec3>,
    trajectory: Trajectory,
    cursor: PlaybackCursor,
}

impl Default for Animator {
    fn default() -> Self {
        Self::inactive()
    }
}

impl Animator {
    /// An animator that never moves anything. Used for objects without animation.
    #[must_use]
    pub fn inactive() -> Self {
        Self {
            looping: false,
            basis: BasisKind::Bezier,
            control_points: Vec::new(),
            trajectory: Trajectory::default(),
            cursor: PlaybackCursor::new(PlaybackMode::Inactive),
        }
    }

    /// Builds an animator with the default sampling resolution.
    #[must_use]
    pub fn new(looping: bool, basis: BasisKind, control_points: Vec<Vec3>) -> Self {
        Self::build(looping, basis, control_points, &SamplingSettings::default())
    }

    /// Builds an animator with a custom sampling resolution.
    pub fn with_settings(
        looping: bool,
        basis: BasisKind,
        control_points: Vec<Vec3>,
        settings: &SamplingSettings,
    ) -> Result<Self> {
        settings.validate()?;
        Ok(Self::build(looping, basis, control_points, settings))
    }

    /// Builds an animator from a raw curve code as found in scene files.
    ///
    /// Unknown codes are rejected here rather than during playback.
    pub fn from_curve_code(
        looping: bool,
        curve: i64,
        control_points: Vec<Vec3>,
        settings: &SamplingSettings,
    ) -> Result<Self> {
        let basis = BasisKind::try_from(curve)?;
        Self::with_settings(looping, basis, control_points, settings)
    }

    fn build(
        looping: bool,
        basis: BasisKind,
        control_points: Vec<Vec3>,
        settings: &SamplingSettings,
    ) -> Self {
        if !control_points.is_empty() && control_points.len() < WINDOW_SIZE {
            log::warn!(
                "Animator needs at least {WINDOW_SIZE} control points, got {}; animation disabled",
                control_points.len()
            );
        }

        let trajectory = Trajectory::sample_validated(basis, &control_points, settings);

        let mode = if trajectory.is_empty() {
            PlaybackMode::Inactive
        } else if looping {
            PlaybackMode::PingPong
        } else {
            PlaybackMode::ForwardWrap
        };

        Self {
            looping,
            basis,
            control_points,
            trajectory,
            cursor: PlaybackCursor::new(mode),
        }
    }

    /// Returns the current trajectory point, then moves to the next frame.
    ///
    /// Inactive animators always return [`Vec3::ZERO`].
    pub fn advance(&mut self) -> Vec3 {
        let Some(point) = self.peek() else {
            return Vec3::ZERO;
        };
        self.cursor.step(self.trajectory.len());
        point
    }

    /// The point the next [`advance`](Self::advance) call will return, if any.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<Vec3> {
        if self.is_active() {
            self.trajectory.get(self.cursor.index())
        } else {
            None
        }
    }

    /// Restarts playback from the first trajectory point.
    pub fn rewind(&mut self) {
        self.cursor.reset();
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.cursor.mode() != PlaybackMode::Inactive
    }

    #[inline]
    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    #[inline]
    #[must_use]
    pub fn basis(&self) -> BasisKind {
        self.basis
    }

    #[inline]
    #[must_use]
    pub fn control_points(&self) -> &[Vec3] {
        &self.control_points
    }

    #[inline]
    #[must_use]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    #[inline]
    #[must_use]
    pub fn cursor(&self) -> &PlaybackCursor {
        &self.cursor
    }

    #[inline]
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.cursor.index()
    }

    #[inline]
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.cursor.direction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn animator_is_send_and_sync() {
        assert_send_sync::<Animator>();
    }

    #[test]
    fn default_is_inactive() {
        let mut animator = Animator::default();
        assert!(!animator.is_active());
        assert_eq!(animator.advance(), Vec3::ZERO);
        assert_eq!(animator.current_index(), 0);
    }

    #[test]
    fn rewind_returns_to_first_point() {
        let points = vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ONE];
        let mut animator = Animator::new(true, BasisKind::Hermite, points);
        for _ in 0..42 {
            animator.advance();
        }
        animator.rewind();
        assert_eq!(animator.current_index(), 0);
        assert_eq!(animator.direction(), Direction::Forward);
        assert_eq!(animator.advance(), Vec3::ZERO);
    }
}
