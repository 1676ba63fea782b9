//! Playback cursor over a precomputed trajectory.

/// Traversal direction of a ping-pong cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// `+1` or `-1`.
    #[inline]
    #[must_use]
    pub const fn sign(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// How the cursor moves after each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    /// No trajectory; the cursor never moves.
    Inactive,
    /// Always steps forward and restarts from the first point after the last.
    ForwardWrap,
    /// Steps forward to the last point, then backward to the first, forever.
    PingPong,
}

/// Frame index plus direction. Owned by a single animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackCursor {
    index: usize,
    direction: Direction,
    mode: PlaybackMode,
}

impl PlaybackCursor {
    #[must_use]
    pub const fn new(mode: PlaybackMode) -> Self {
        Self {
            index: 0,
            direction: Direction::Forward,
            mode,
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// Moves to the next frame of a trajectory with `len` points.
    ///
    /// A zero `len` leaves the cursor untouched whatever the mode.
    #[allow(clippy::cast_possible_wrap)]
    pub fn step(&mut self, len: usize) {
        if len == 0 {
            return;
        }

        match self.mode {
            PlaybackMode::Inactive => {}
            PlaybackMode::ForwardWrap => {
                self.index = (self.index + 1) % len;
            }
            PlaybackMode::PingPong => {
                let next = (self.index as isize + self.direction.sign()).rem_euclid(len as isize);
                self.index = next as usize;

                if self.index == len - 1 {
                    self.direction = Direction::Backward;
                }
                if self.index == 0 {
                    self.direction = Direction::Forward;
                }
            }
        }
    }

    /// Back to the first frame, moving forward. The mode is kept.
    pub fn reset(&mut self) {
        self.index = 0;
        self.direction = Direction::Forward;
    }
}
