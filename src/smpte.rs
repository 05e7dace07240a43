#![doc = r#"
SMPTE timecode derivation and the NTSC drop-frame counting convention.

# What is drop-frame timecode?

NTSC color video runs at 30000/1001 ≈ 29.97 frames per second, but timecode
labels count 30 frames per second. Left alone, the label clock gains about
3.6 seconds per hour against the wall clock. The drop-frame convention fixes
the drift by *skipping label numbers* (no picture frames are discarded):
frames :00 and :01 are dropped at the start of every minute except minutes
divisible by ten, removing 18 labels per ten-minute block.

A drop-frame timecode is written with a period before the frame field,
`01:00:04.00`, where non-drop timecode uses a colon, `01:00:04:00`.

# Counting

Two mappings connect the label space and elapsed frames:

- **forward**: a field-weighted *nominal* count (`FF + SS*Q + MM*Q*60 +
  HH*Q*3600` for quanta `Q`) to the elapsed frame ordinal, subtracting the
  skipped labels;
- **inverse**: an elapsed frame ordinal back to the nominal count, re-adding
  the skips before the ordinal is divided into HH:MM:SS:FF fields.

Both are identities for non-drop rates. [`SmpteTime`] packages the two
mappings together with sign and 24-hour-wrap policies.
"#]

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Sub};

use crate::{Fps, Time, TimeError, TimeResult};

/// The sign of a timecode value.
///
/// The source of a timecode keeps its own signed tick count; the timecode
/// records the sign explicitly so the display fields stay non-negative.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    /// Zero or a positive time.
    #[default]
    Positive,
    /// A negative time, displayed with a leading minus.
    Negative,
}

/// Frame labels dropped at the start of each non-tenth minute.
const DROP_PER_MINUTE: i64 = 2;

/// Frame labels dropped per ten-minute block (9 non-tenth minutes).
const DROP_PER_TEN: i64 = 9 * DROP_PER_MINUTE;

/// An `HH:MM:SS:FF` timecode derived from a [`Time`].
///
/// A `SmpteTime` is a pure derivation: it is recomputed from its source time
/// whenever the time or a display policy changes, and never constructed
/// field by field. Policies:
///
/// - `allow_negatives` (default true): a negative time keeps
///   [`Sign::Negative`]; when disabled it wraps into the positive 24-hour
///   day instead (`-01:xx` displays as `22:xx`).
/// - `wrap_24h` (default true): hours reduce modulo 24.
///
/// # Example
/// ```rust
/// # use frametime::prelude::*;
/// let smpte = SmpteTime::new(Time::from_frame(86496, Fps::FPS_24));
/// assert_eq!(smpte.to_string(), "01:00:04:00");
///
/// let smpte = SmpteTime::new(Time::from_frame(86388, Fps::FPS_23_976));
/// assert_eq!(smpte.to_string(), "01:00:04.00");
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteTime {
    sign: Sign,
    hours: i16,
    minutes: i16,
    seconds: i16,
    frames: i16,
    subframes: i16,
    subframe_divisor: i16,
    time: Time,
    allow_negatives: bool,
    wrap_24h: bool,
}

impl SmpteTime {
    /// Derive a timecode from a time, with both policies enabled.
    pub fn new(time: Time) -> Self {
        Self::derive(time, true, true, 0, 1)
    }

    /// Re-derive with the negative-sign policy changed.
    ///
    /// When disallowed, a negative time maps to `23 - hours` in the
    /// positive day instead of carrying a sign.
    pub fn with_allow_negatives(self, allow_negatives: bool) -> Self {
        Self::derive(
            self.time,
            allow_negatives,
            self.wrap_24h,
            self.subframes,
            self.subframe_divisor,
        )
    }

    /// Re-derive with the 24-hour wrap policy changed.
    ///
    /// When disabled, hours count past 23 instead of reducing modulo 24.
    pub fn with_wrap_24h(self, wrap_24h: bool) -> Self {
        Self::derive(
            self.time,
            self.allow_negatives,
            wrap_24h,
            self.subframes,
            self.subframe_divisor,
        )
    }

    /// Attach a subframe position below the frame field.
    pub fn with_subframes(self, subframes: i16, subframe_divisor: i16) -> Self {
        Self {
            subframes,
            subframe_divisor,
            ..self
        }
    }

    fn derive(
        time: Time,
        allow_negatives: bool,
        wrap_24h: bool,
        subframes: i16,
        subframe_divisor: i16,
    ) -> Self {
        debug_assert!(time.valid(), "time is not valid");
        debug_assert!(time.fps().valid(), "fps is not valid");

        let fps = time.fps();
        let quanta = fps.frame_quanta() as i64;
        let mut frame = time.frame();
        let mut negative = frame < 0;
        if negative {
            frame = -frame;
        }
        // reinsert the skipped labels before slicing into fields
        frame = Self::convert_drop_frame(frame, fps, true);

        let frames = frame % quanta;
        frame /= quanta;
        let seconds = frame % 60;
        frame /= 60;
        let minutes = frame % 60;
        frame /= 60;
        if wrap_24h {
            frame %= 24;
            if negative && !allow_negatives {
                negative = false;
                frame = 23 - frame;
            }
        }
        Self {
            sign: if negative { Sign::Negative } else { Sign::Positive },
            hours: frame as i16,
            minutes: minutes as i16,
            seconds: seconds as i16,
            frames: frames as i16,
            subframes,
            subframe_divisor,
            time,
            allow_negatives,
            wrap_24h,
        }
    }

    /// Returns the sign.
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the hour field.
    pub const fn hours(&self) -> i16 {
        self.hours
    }

    /// Returns the minute field.
    pub const fn minutes(&self) -> i16 {
        self.minutes
    }

    /// Returns the second field.
    pub const fn seconds(&self) -> i16 {
        self.seconds
    }

    /// Returns the frame field.
    pub const fn frames(&self) -> i16 {
        self.frames
    }

    /// Returns the subframe position below the frame field.
    pub const fn subframes(&self) -> i16 {
        self.subframes
    }

    /// Returns the subframe divisor.
    pub const fn subframe_divisor(&self) -> i16 {
        self.subframe_divisor
    }

    /// Returns the source time.
    pub const fn time(&self) -> Time {
        self.time
    }

    /// True if negative times keep their sign (see
    /// [`with_allow_negatives`](Self::with_allow_negatives)).
    pub const fn allow_negatives(&self) -> bool {
        self.allow_negatives
    }

    /// True if hours reduce modulo 24.
    pub const fn wrap_24h(&self) -> bool {
        self.wrap_24h
    }

    /// The signed elapsed frame ordinal of this timecode.
    ///
    /// Recomposes the field-weighted nominal count and subtracts the
    /// drop-frame skips, the exact inverse of the decomposition that built
    /// the fields.
    pub fn frame(&self) -> i64 {
        let fps = self.time.fps();
        let quanta = fps.frame_quanta() as i64;
        let mut frame = self.frames as i64
            + self.seconds as i64 * quanta
            + self.minutes as i64 * quanta * 60
            + self.hours as i64 * quanta * 3600;
        frame = Self::convert_drop_frame(frame, fps, false);
        match self.sign {
            Sign::Positive => frame,
            Sign::Negative => -frame,
        }
    }

    /// Rebuild a time on this timecode's frame boundary.
    pub fn to_time(&self) -> Time {
        Time::from_frame(self.frame(), self.time.fps())
    }

    /// True if every field is within its display range.
    ///
    /// Fields can leave range when the 24-hour wrap is disabled; callers
    /// should not display an invalid instance.
    pub const fn valid(&self) -> bool {
        self.hours >= 0
            && self.hours < 24
            && self.minutes >= 0
            && self.minutes < 60
            && self.seconds >= 0
            && self.seconds < 60
            && self.frames >= 0
            && self.subframes >= 0
            && self.subframe_divisor > 0
    }

    /// Check every field against its display range.
    ///
    /// # Errors
    /// [`TimeError::InvalidTimecode`] when a field is out of range.
    pub const fn validate(&self) -> TimeResult<()> {
        if self.valid() {
            Ok(())
        } else {
            Err(TimeError::InvalidTimecode)
        }
    }

    /// Map between the nominal label count and the drop-frame ordinal.
    ///
    /// With `invert == false` a nominal (non-drop) count becomes the
    /// drop-frame-labeled ordinal by subtracting the skipped labels; with
    /// `invert == true` the skips are re-added. Both directions are the
    /// identity for non-drop rates.
    ///
    /// # Example
    /// ```rust
    /// # use frametime::prelude::*;
    /// let dropped = SmpteTime::convert_drop_frame(86496, Fps::FPS_23_976, false);
    /// assert_eq!(dropped, 86388);
    /// assert_eq!(SmpteTime::convert_drop_frame(dropped, Fps::FPS_23_976, true), 86496);
    /// ```
    pub fn convert_drop_frame(frame: i64, fps: Fps, invert: bool) -> i64 {
        if !fps.drop_frame() {
            return frame;
        }
        let frames_per_minute = fps.frame_quanta() as i64 * 60;
        let frames_per_ten = frames_per_minute * 10 - DROP_PER_TEN;
        let blocks = frame / frames_per_ten;
        let rem = frame % frames_per_ten;
        let mut adjust;
        if invert {
            adjust = blocks * DROP_PER_TEN;
            if rem >= frames_per_minute {
                adjust += (rem / frames_per_minute) * DROP_PER_MINUTE;
            }
        } else {
            adjust = -blocks * DROP_PER_TEN;
            if rem > 1 {
                let minute = rem / frames_per_minute;
                if minute > 0 {
                    adjust -= (minute - 1) * DROP_PER_MINUTE;
                }
            }
        }
        frame + adjust
    }

    /// Rescale a frame ordinal between two rates' labeling conventions.
    ///
    /// The same wall-clock instant keeps the same `HH:MM:SS:FF` label across
    /// rates: a drop-frame ordinal is first widened to its nominal count,
    /// the ordinal is rescaled in nominal label space by the ratio of the
    /// two frame quanta, and a drop-frame destination narrows it back.
    ///
    /// # Example
    /// ```rust
    /// # use frametime::prelude::*;
    /// // 01:00:04:00 at 24 fps, relabeled for 50 fps
    /// assert_eq!(SmpteTime::convert(86496, Fps::FPS_24, Fps::FPS_50), 180200);
    /// // and for 23.976 drop-frame
    /// assert_eq!(SmpteTime::convert(86496, Fps::FPS_24, Fps::FPS_23_976), 86388);
    /// ```
    pub fn convert(frame: i64, from: Fps, to: Fps) -> i64 {
        let mut frame = frame;
        if from.drop_frame() && !to.drop_frame() {
            frame = Self::convert_drop_frame(frame, from, true);
        }
        let from_quanta = from.frame_quanta() as i64;
        let to_quanta = to.frame_quanta() as i64;
        if from_quanta != to_quanta {
            // label space counts in quanta; the real-rate ratio would shift
            // the label by the NTSC 1/1001
            frame = (frame as f64 * to_quanta as f64 / from_quanta as f64).round() as i64;
        }
        if to.drop_frame() && !from.drop_frame() {
            frame = Self::convert_drop_frame(frame, to, false);
        }
        frame
    }
}

impl From<Time> for SmpteTime {
    fn from(time: Time) -> Self {
        Self::new(time)
    }
}

impl PartialEq for SmpteTime {
    /// Timecodes compare by their display fields and sign.
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign
            && self.hours == other.hours
            && self.minutes == other.minutes
            && self.seconds == other.seconds
            && self.frames == other.frames
            && self.subframes == other.subframes
            && self.subframe_divisor == other.subframe_divisor
    }
}

impl PartialOrd for SmpteTime {
    /// Timecodes order by elapsed frame ordinal.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.frame().partial_cmp(&other.frame())
    }
}

impl Add for SmpteTime {
    type Output = SmpteTime;

    /// Sum of the two frame ordinals, at the left operand's rate.
    fn add(self, rhs: Self) -> Self::Output {
        let total = self.frame() + rhs.frame();
        SmpteTime::new(Time::from_frame(total, self.time.fps()))
    }
}

impl Sub for SmpteTime {
    type Output = SmpteTime;

    /// Difference of the two frame ordinals, at the left operand's rate.
    fn sub(self, rhs: Self) -> Self::Output {
        let total = self.frame() - rhs.frame();
        SmpteTime::new(Time::from_frame(total, self.time.fps()))
    }
}

impl fmt::Display for SmpteTime {
    /// `HH:MM:SS:FF`, with a period before the frame field for drop-frame
    /// rates per industry convention.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            write!(f, "-")?;
        }
        let separator = if self.time.fps().drop_frame() { '.' } else { ':' };
        write!(
            f,
            "{:02}:{:02}:{:02}{}{:02}",
            self.hours, self.minutes, self.seconds, separator, self.frames
        )
    }
}
