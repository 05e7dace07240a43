#![doc = r#"
Tick-based time tagged with a frame rate.

A [`Time`] is a signed tick count at an explicit integer timescale (ticks per
second), the representation QuickTime and ffmpeg use for exact media time.
The tagged [`Fps`] relates ticks to frames: at timescale 24000 and 24 fps one
frame lasts 1000 ticks, at 29.97 fps it lasts 800.8 ticks and frame
boundaries no longer fall on whole multiples of the rounded tick duration.
All tick/frame conversions therefore round on the exact rational quotient,
half away from zero, so that `frame_for_ticks` and `ticks_for_frame` stay
consistent inverses on every frame boundary.
"#]

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Sub};

use crate::{Fps, TimeError, TimeResult};

/// A tick count at an integer timescale, tagged with a frame rate.
///
/// `Time` is an immutable value type; every transformation returns a new
/// instance. Negative tick counts are representable.
///
/// # Example
/// ```rust
/// # use frametime::prelude::*;
/// let time = Time::new(12000, 24000, Fps::FPS_24);
/// assert_eq!(time.tpf(), 1000);
/// assert_eq!(time.frame(), 12);
/// assert_eq!(time.ticks_for_frame(12), 12000);
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Time {
    ticks: i64,
    timescale: i32,
    fps: Fps,
}

impl Default for Time {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_TIMESCALE, Fps::FPS_24)
    }
}

impl Time {
    /// The timescale used when none is given, one QuickTime commonly writes.
    pub const DEFAULT_TIMESCALE: i32 = 24000;

    /// Create a time from ticks at a timescale, tagged with a rate.
    pub const fn new(ticks: i64, timescale: i32, fps: Fps) -> Self {
        Self {
            ticks,
            timescale,
            fps,
        }
    }

    /// Create a time, checking that the timescale is positive and the rate
    /// is valid.
    ///
    /// # Errors
    /// [`TimeError::InvalidTimescale`] if `timescale <= 0`,
    /// [`TimeError::InvalidRate`] if the rate's denominator is not positive.
    pub const fn try_new(ticks: i64, timescale: i32, fps: Fps) -> TimeResult<Self> {
        if timescale <= 0 {
            return Err(TimeError::InvalidTimescale(timescale));
        }
        if !fps.valid() {
            return Err(TimeError::InvalidRate {
                numerator: fps.numerator(),
                denominator: fps.denominator(),
            });
        }
        Ok(Self::new(ticks, timescale, fps))
    }

    /// Create a time on the boundary of `frame` at the default timescale.
    pub fn from_frame(frame: i64, fps: Fps) -> Self {
        let mut time = Self::new(0, Self::DEFAULT_TIMESCALE, fps);
        time.ticks = time.ticks_for_frame(frame);
        time
    }

    /// Create a time from seconds at the default timescale.
    ///
    /// The fractional tick remainder is truncated toward zero.
    pub fn from_seconds(seconds: f64, fps: Fps) -> Self {
        Self::new(
            (Self::DEFAULT_TIMESCALE as f64 * seconds) as i64,
            Self::DEFAULT_TIMESCALE,
            fps,
        )
    }

    /// Returns the tick count.
    pub const fn ticks(&self) -> i64 {
        self.ticks
    }

    /// Returns the timescale in ticks per second.
    pub const fn timescale(&self) -> i32 {
        self.timescale
    }

    /// Returns the tagged frame rate.
    pub const fn fps(&self) -> Fps {
        self.fps
    }

    /// True if the timescale is positive.
    pub const fn valid(&self) -> bool {
        self.timescale > 0
    }

    /// The nominal whole-tick duration of one frame,
    /// `round(timescale / fps)`.
    ///
    /// For fractional rates the exact frame duration is not a whole number
    /// of ticks (800.8 at 29.97 fps over timescale 24000); this rounded
    /// value is only used where a whole-tick step is needed, never for
    /// frame-boundary math.
    pub fn tpf(&self) -> i64 {
        debug_assert!(self.valid(), "time is not valid");
        (self.timescale as f64 / self.fps.real()).round() as i64
    }

    /// The frame containing `ticks`, rounding half away from zero on the
    /// exact rational quotient.
    pub fn frame_for_ticks(&self, ticks: i64) -> i64 {
        debug_assert!(self.valid(), "time is not valid");
        debug_assert!(self.fps.valid(), "fps is not valid");
        let per_frame = self.timescale as f64 * self.fps.denominator() as f64;
        (ticks as f64 * self.fps.numerator() as f64 / per_frame).round() as i64
    }

    /// The tick value of the boundary of `frame`.
    ///
    /// Inverse of [`frame_for_ticks`](Self::frame_for_ticks) on every frame
    /// boundary: `frame_for_ticks(ticks_for_frame(f)) == f` for all `f`.
    pub fn ticks_for_frame(&self, frame: i64) -> i64 {
        debug_assert!(self.valid(), "time is not valid");
        debug_assert!(self.fps.valid(), "fps is not valid");
        let per_frame = self.timescale as f64 * self.fps.denominator() as f64;
        (frame as f64 * per_frame / self.fps.numerator() as f64).round() as i64
    }

    /// The frame containing this time's own ticks.
    pub fn frame(&self) -> i64 {
        self.frame_for_ticks(self.ticks)
    }

    /// Snap `ticks` to the nearest frame-boundary tick value.
    ///
    /// Scrubbing UIs use this to avoid landing between frames.
    pub fn align(&self, ticks: i64) -> i64 {
        self.ticks_for_frame(self.frame_for_ticks(ticks))
    }

    /// Elapsed time in seconds.
    pub const fn seconds(&self) -> f64 {
        self.ticks as f64 / self.timescale as f64
    }

    /// Retag this time with a new rate, rescaling ticks by the ratio of the
    /// two real rates. The timescale is unchanged.
    pub fn convert(&self, to: Fps) -> Self {
        Self::new(
            Fps::convert(self.ticks, self.fps, to),
            self.timescale,
            to,
        )
    }

    /// Rebase this time onto a new timescale, keeping the rate.
    ///
    /// Ticks scale proportionally with remainder-based rounding, half away
    /// from zero: a remainder of at least half the old timescale bumps the
    /// quotient. Plain integer division here would silently truncate and
    /// drift against ffmpeg/QuickTime duration math.
    ///
    /// # Example
    /// ```rust
    /// # use frametime::prelude::*;
    /// let time = Time::new(16016, 30000, Fps::FPS_29_97);
    /// let rescaled = time.rescale(24000);
    /// assert_eq!(rescaled.ticks(), 12813);
    /// assert_eq!(rescaled.frame(), 16);
    /// assert_eq!(rescaled.rescale(30000).ticks(), 16016);
    /// ```
    pub fn rescale(&self, timescale: i32) -> Self {
        debug_assert!(self.valid(), "time is not valid");
        debug_assert!(timescale > 0, "timescale is not valid");
        if timescale == self.timescale {
            return *self;
        }
        let numerator = self.ticks as i128 * timescale as i128;
        let mut ticks = numerator / self.timescale as i128;
        let remainder = numerator % self.timescale as i128;
        if remainder.abs() >= self.timescale as i128 / 2 && remainder != 0 {
            ticks += if self.ticks > 0 { 1 } else { -1 };
        }
        Self::new(ticks as i64, timescale, self.fps)
    }

    /// Add `other`, checking that the timescales match.
    ///
    /// # Errors
    /// [`TimeError::TimescaleMismatch`] when they differ; rescale one side
    /// first. The `+` operator asserts the same precondition in debug
    /// builds instead.
    pub fn checked_add(&self, other: &Time) -> TimeResult<Self> {
        if self.timescale != other.timescale {
            return Err(TimeError::TimescaleMismatch {
                left: self.timescale,
                right: other.timescale,
            });
        }
        Ok(Self::new(self.ticks + other.ticks, self.timescale, self.fps))
    }

    /// Subtract `other`, checking that the timescales match.
    ///
    /// # Errors
    /// [`TimeError::TimescaleMismatch`] when they differ.
    pub fn checked_sub(&self, other: &Time) -> TimeResult<Self> {
        if self.timescale != other.timescale {
            return Err(TimeError::TimescaleMismatch {
                left: self.timescale,
                right: other.timescale,
            });
        }
        Ok(Self::new(self.ticks - other.ticks, self.timescale, self.fps))
    }
}

impl PartialEq for Time {
    /// Times compare by ticks and timescale; the rate is a display tag and
    /// not part of a time's identity.
    fn eq(&self, other: &Self) -> bool {
        self.ticks == other.ticks && self.timescale == other.timescale
    }
}

impl Eq for Time {}

impl PartialOrd for Time {
    /// Times order by elapsed seconds, so values at different timescales
    /// compare correctly.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.seconds().partial_cmp(&other.seconds())
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Self) -> Self::Output {
        debug_assert!(
            self.timescale == rhs.timescale,
            "timescale does not match"
        );
        Time::new(self.ticks + rhs.ticks, self.timescale, self.fps)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Self) -> Self::Output {
        debug_assert!(
            self.timescale == rhs.timescale,
            "timescale does not match"
        );
        Time::new(self.ticks - rhs.ticks, self.timescale, self.fps)
    }
}

impl fmt::Display for Time {
    /// Elapsed whole seconds as `H:MM:SS` when at least an hour, else
    /// `MM:SS`; the fractional tick remainder is discarded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut secs = self.seconds() as i64;
        if secs < 0 {
            write!(f, "-")?;
            secs = -secs;
        }
        let mut minutes = secs / 60;
        let hours = minutes / 60;
        secs %= 60;
        minutes %= 60;
        if hours > 0 {
            write!(f, "{hours:02}:{minutes:02}:{secs:02}")
        } else {
            write!(f, "{minutes:02}:{secs:02}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rescale_rounds_half_away_from_zero() {
        let time = Time::new(16016, 30000, Fps::FPS_29_97);
        assert_eq!(time.rescale(24000).ticks(), 12813);

        let time = Time::new(-16016, 30000, Fps::FPS_29_97);
        assert_eq!(time.rescale(24000).ticks(), -12813);
    }

    #[test]
    fn rescale_same_timescale_is_identity() {
        let time = Time::new(12345, 24000, Fps::FPS_24);
        assert_eq!(time.rescale(24000).ticks(), 12345);
    }
}
