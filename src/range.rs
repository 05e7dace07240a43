use core::fmt;

use crate::{Fps, Time, TimeError, TimeResult};

/// A half-open span of media time, a start and a positive duration sharing
/// one timescale.
///
/// # Example
/// ```rust
/// # use frametime::prelude::*;
/// let start = Time::new(12000, 24000, Fps::FPS_24);
/// let duration = Time::new(192000, 24000, Fps::FPS_24);
/// let range = TimeRange::new(start, duration);
/// assert_eq!(range.end().ticks(), 204000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeRange {
    start: Time,
    duration: Time,
}

impl TimeRange {
    /// Create a range from a start and a duration.
    ///
    /// Both must share a timescale; mixing timescales here is a programmer
    /// error, asserted in debug builds. Use [`try_new`](Self::try_new) for a
    /// checked construction.
    pub fn new(start: Time, duration: Time) -> Self {
        debug_assert!(
            start.timescale() == duration.timescale(),
            "timescale does not match"
        );
        Self { start, duration }
    }

    /// Create a range, checking the shared-timescale invariant.
    ///
    /// # Errors
    /// [`TimeError::TimescaleMismatch`] when start and duration disagree.
    pub fn try_new(start: Time, duration: Time) -> TimeResult<Self> {
        if start.timescale() != duration.timescale() {
            return Err(TimeError::TimescaleMismatch {
                left: start.timescale(),
                right: duration.timescale(),
            });
        }
        Ok(Self { start, duration })
    }

    /// Returns the start time.
    pub const fn start(&self) -> Time {
        self.start
    }

    /// Returns the duration.
    pub const fn duration(&self) -> Time {
        self.duration
    }

    /// The first time past the range, `start + duration`.
    pub fn end(&self) -> Time {
        self.start + self.duration
    }

    /// True if both times are valid and the duration is positive.
    pub const fn valid(&self) -> bool {
        self.start.valid() && self.duration.valid() && self.duration.ticks() > 0
    }

    /// True if `time` falls within `[start, end)`.
    pub fn contains(&self, time: &Time) -> bool {
        self.start <= *time && *time < self.end()
    }

    /// True if the two ranges share any time, both treated as half-open.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        !(self.end() <= other.start() || other.end() <= self.start)
    }

    /// Bound a time into the playable interval
    /// `[start, end - one frame]`.
    ///
    /// The last representable position is the boundary of the last full
    /// frame, not one tick past it. With `looping` the interval is a ring
    /// the size of the duration: a time exactly at `end` wraps to `start`,
    /// never to `end` itself. Playback controllers use the looping form to
    /// wrap a seek past the tail back into the range.
    pub fn bound(&self, time: Time, looping: bool) -> Time {
        debug_assert!(self.valid(), "range is not valid");
        debug_assert!(
            time.timescale() == self.start.timescale(),
            "timescale does not match"
        );
        let start = self.start.ticks();
        let last = self.end().ticks() - self.start.tpf();
        let ticks = if looping {
            start + (time.ticks() - start).rem_euclid(self.duration.ticks())
        } else {
            time.ticks().clamp(start, last.max(start))
        };
        Time::new(ticks, time.timescale(), time.fps())
    }

    /// Retag both start and duration with a new rate (see [`Time::convert`]).
    pub fn convert(&self, to: Fps) -> Self {
        Self::new(self.start.convert(to), self.duration.convert(to))
    }

    /// Rebase both start and duration onto a new timescale (see
    /// [`Time::rescale`]).
    pub fn rescale(&self, timescale: i32) -> Self {
        Self::new(self.start.rescale(timescale), self.duration.rescale(timescale))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.start, self.duration)
    }
}
