use crate::interval::Quality;

/// Crate-level error type for pitch, interval, and tuning operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// An interval was requested without a size.
    #[error("interval size may not be null")]
    NullSize,

    /// Interval sizes count from 1 (unison).
    #[error("interval size must be positive, got {size}")]
    NonpositiveSize { size: i64 },

    /// Interval size was fractional or non-finite.
    #[error("interval size must be an integer, got {size}")]
    NonintegerSize { size: f64 },

    /// An interval was requested without a quality.
    #[error("interval quality may not be null")]
    NullQuality,

    /// The quality cannot be paired with the size (e.g. a perfect second).
    #[error("invalid quality {quality} for interval with size {size}")]
    InvalidQuality { quality: Quality, size: i32 },

    /// The chromatic offset does not match any quality for the size.
    #[error("invalid offset {offset} for interval of size {size}")]
    InvalidOffset { size: i32, offset: i32 },

    /// Octave number was fractional or non-finite.
    #[error("octave must be an integer, got {octave}")]
    NonintegerOctave { octave: f64 },

    /// A value outside one of the closed enumerations was requested.
    #[error("illegal construction of {kind} from `{value}`")]
    IllegalConstruction { kind: &'static str, value: String },

    /// Invalid parameter value.
    #[error("invalid parameter `{name}`: got {value}, {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Notation text could not be read.
    #[error("cannot parse `{input}`: {reason}")]
    Parse { input: String, reason: &'static str },
}

/// Convenience Result type for pitchcraft operations.
pub type Result<T> = std::result::Result<T, Error>;
