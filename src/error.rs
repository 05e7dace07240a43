use thiserror::Error;

#[doc = r#"
A set of errors that can occur while constructing or combining time values
"#]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TimeError {
    /// A frame rate with a non-positive denominator.
    #[error("invalid frame rate {numerator}/{denominator}")]
    InvalidRate {
        /// The offending numerator.
        numerator: i64,
        /// The offending denominator.
        denominator: i32,
    },
    /// A timescale that is zero or negative.
    #[error("invalid timescale {0}")]
    InvalidTimescale(i32),
    /// Two times with different timescales were combined without rescaling.
    #[error("timescale mismatch: {left} != {right}")]
    TimescaleMismatch {
        /// Timescale of the left operand.
        left: i32,
        /// Timescale of the right operand.
        right: i32,
    },
    /// A timecode whose fields fall outside their display ranges.
    #[error("timecode fields out of range")]
    InvalidTimecode,
}

/// The result type used by fallible constructors (see [`TimeError`]).
pub type TimeResult<T> = Result<T, TimeError>;
