#![doc = r#"
Frame-accurate time and SMPTE timecode arithmetic for media playback.

`frametime` represents playback positions the way media containers do: as a
signed tick count at an explicit integer timescale, tagged with an exact
rational frame rate. On top of that it derives frame ordinals, bounded
playback ranges and `HH:MM:SS:FF` SMPTE timecodes, including a bit-exact
rendition of the NTSC drop-frame counting convention.

# Types

- [`Fps`]: an exact numerator/denominator frame rate with a drop-frame
  flag, standard presets and fuzzy matching for observed rates.
- [`Time`]: ticks at a timescale; converts between ticks, frames and
  seconds, and rebases across timescales and rates with defined rounding.
- [`TimeRange`]: a (start, duration) pair with containment, clamping and
  looping for playback bounds.
- [`SmpteTime`]: the timecode derivation, with drop-frame forward/inverse
  counting and cross-rate label conversion.

All four are immutable value types: every transformation returns a new
instance, there is no shared mutable state, and everything is `Send + Sync`
without synchronization.

# Example

```rust
use frametime::prelude::*;

let fps = Fps::guess(23.976);
assert_eq!(fps, Fps::FPS_23_976);

let time = Time::from_frame(86388, fps);
let smpte = SmpteTime::new(time);
assert_eq!(smpte.to_string(), "01:00:04.00");
```
"#]

mod error;
pub use error::*;

mod fps;
pub use fps::*;

mod time;
pub use time::*;

mod range;
pub use range::*;

pub mod smpte;
pub use smpte::{Sign, SmpteTime};

/// Re-exports of every public type.
pub mod prelude {
    pub use crate::error::*;
    pub use crate::fps::*;
    pub use crate::range::*;
    pub use crate::smpte::{Sign, SmpteTime};
    pub use crate::time::*;
}
