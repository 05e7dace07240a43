#![doc = r#"
Exact rational frame rates.

# Why rational?

The NTSC color standards run at fractional rates such as 30000/1001
(≈29.97 fps) and 24000/1001 (≈23.976 fps). Storing those as floating point
drifts over long durations; storing them as an exact numerator/denominator
pair keeps every downstream tick and frame computation reproducible.

A rate also carries a drop-frame flag. Drop-frame is a *labeling* convention:
no picture frames are discarded, but certain timecode numbers are skipped so
that the displayed timecode stays aligned with wall-clock time despite the
fractional rate (see the [`smpte`](crate::smpte) module).
"#]

use core::cmp::Ordering;
use core::fmt;

use crate::{TimeError, TimeResult};

/// An exact frame rate expressed as `numerator / denominator` frames per
/// second, with a drop-frame labeling flag.
///
/// `Fps` is a plain value type: it is copied on every use and never mutated
/// through a shared alias. Rates embedded in a [`Time`](crate::Time) keep the
/// value they had at construction.
///
/// # Example
/// ```rust
/// # use frametime::prelude::*;
/// let fps = Fps::FPS_29_97;
/// assert_eq!(fps.numerator(), 30000);
/// assert_eq!(fps.denominator(), 1001);
/// assert!(fps.drop_frame());
/// assert_eq!(fps.frame_quanta(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fps {
    numerator: i64,
    denominator: i32,
    drop_frame: bool,
}

impl Fps {
    /// 23.976 fps (24000/1001) - film transferred to NTSC, drop-frame
    pub const FPS_23_976: Self = Self::new_drop_frame(24000, 1001);
    /// 24 fps - standard film rate
    pub const FPS_24: Self = Self::new(24, 1);
    /// 25 fps - PAL/SECAM television standard
    pub const FPS_25: Self = Self::new(25, 1);
    /// 29.97 fps (30000/1001) - NTSC color television, drop-frame
    pub const FPS_29_97: Self = Self::new_drop_frame(30000, 1001);
    /// 30 fps - NTSC black & white, some digital formats
    pub const FPS_30: Self = Self::new(30, 1);
    /// 47.952 fps (48000/1001) - double-rate NTSC film, drop-frame
    pub const FPS_47_952: Self = Self::new_drop_frame(48000, 1001);
    /// 48 fps - double-rate film
    pub const FPS_48: Self = Self::new(48, 1);
    /// 50 fps - PAL high frame rate
    pub const FPS_50: Self = Self::new(50, 1);
    /// 59.94 fps (60000/1001) - NTSC high frame rate, drop-frame
    pub const FPS_59_94: Self = Self::new_drop_frame(60000, 1001);
    /// 60 fps - high frame rate digital formats
    pub const FPS_60: Self = Self::new(60, 1);

    /// The standard rates checked by [`Fps::guess`], in match order.
    pub const PRESETS: [Self; 10] = [
        Self::FPS_23_976,
        Self::FPS_24,
        Self::FPS_25,
        Self::FPS_29_97,
        Self::FPS_30,
        Self::FPS_47_952,
        Self::FPS_48,
        Self::FPS_50,
        Self::FPS_59_94,
        Self::FPS_60,
    ];

    /// Create a non-drop-frame rate.
    pub const fn new(numerator: i64, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
            drop_frame: false,
        }
    }

    /// Create a drop-frame rate.
    pub const fn new_drop_frame(numerator: i64, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
            drop_frame: true,
        }
    }

    /// Create a rate, checking that the denominator is positive.
    ///
    /// # Errors
    /// [`TimeError::InvalidRate`] if `denominator <= 0`.
    pub const fn try_new(numerator: i64, denominator: i32) -> TimeResult<Self> {
        if denominator <= 0 {
            return Err(TimeError::InvalidRate {
                numerator,
                denominator,
            });
        }
        Ok(Self::new(numerator, denominator))
    }

    /// Returns the numerator.
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Returns the denominator.
    pub const fn denominator(&self) -> i32 {
        self.denominator
    }

    /// True if timecode labels at this rate skip numbers to track wall-clock
    /// time.
    pub const fn drop_frame(&self) -> bool {
        self.drop_frame
    }

    /// True if the denominator is positive.
    ///
    /// A rate is well-formed regardless of the numerator's sign, but every
    /// operation below assumes a positive media rate; callers should check
    /// `valid()` before trusting derived values.
    pub const fn valid(&self) -> bool {
        self.denominator > 0
    }

    /// The rate in frames per second.
    pub const fn real(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// The duration of one frame in seconds.
    pub const fn seconds(&self) -> f64 {
        1.0 / self.real()
    }

    /// The nominal integer rate used for timecode field widths and
    /// drop-frame block sizes.
    ///
    /// 29.97 fps counts 30 frame labels per second, 23.976 counts 24.
    ///
    /// # Example
    /// ```rust
    /// # use frametime::prelude::*;
    /// assert_eq!(Fps::FPS_29_97.frame_quanta(), 30); // not 29!
    /// assert_eq!(Fps::FPS_23_976.frame_quanta(), 24);
    /// ```
    pub fn frame_quanta(&self) -> i16 {
        self.real().round() as i16
    }

    /// Match an observed rate against the standard presets.
    ///
    /// Returns the first preset whose real rate is within 0.005 of
    /// `observed`; the preset spacing guarantees at most one can match.
    /// Anything else is kept as a synthesized `round(observed * 1000)/1000`
    /// non-drop-frame rate.
    ///
    /// # Example
    /// ```rust
    /// # use frametime::prelude::*;
    /// assert_eq!(Fps::guess(23.976), Fps::FPS_23_976);
    /// assert_eq!(Fps::guess(10.0), Fps::new(10000, 1000));
    /// ```
    pub fn guess(observed: f64) -> Self {
        const EPSILON: f64 = 0.005;
        for preset in Self::PRESETS {
            if (preset.real() - observed).abs() < EPSILON {
                return preset;
            }
        }
        Self::new((observed * 1000.0).round() as i64, 1000)
    }

    /// Rescale a frame ordinal from one rate to another.
    ///
    /// Both counts are assumed to start at the same time origin; the ordinal
    /// is scaled by the ratio of the two real rates and rounded to the
    /// nearest frame. This is the building block [`Time`](crate::Time) and
    /// [`SmpteTime`](crate::SmpteTime) use to bridge rates.
    pub fn convert(frame: i64, from: Fps, to: Fps) -> i64 {
        debug_assert!(from.valid() && to.valid(), "rate is not valid");
        (frame as f64 * (to.real() / from.real())).round() as i64
    }
}

impl PartialOrd for Fps {
    /// Rates order by real frame duration, not by raw fields: 24/1 and
    /// 24000/1000 compare equal.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.seconds().partial_cmp(&other.seconds())
    }
}

impl fmt::Display for Fps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{} fps", self.numerator)?;
        } else {
            write!(f, "{:.3} fps", self.real())?;
        }
        if self.drop_frame {
            write!(f, " drop-frame")?;
        }
        Ok(())
    }
}
