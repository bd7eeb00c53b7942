use super::{A4_HZ, TuningSystem};
use crate::interval::Interval;
use crate::pitch::Pitch;
use crate::pitch::named::A_NATURAL_4;
use crate::utils::valid_frequency;

/// Twelve-tone equal temperament: every semitone is a ratio of 2^(1/12).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqualTemperament {
    base: Pitch,
    frequency: f64,
}

impl EqualTemperament {
    /// A4 = 440 Hz.
    pub const A440: EqualTemperament = EqualTemperament {
        base: A_NATURAL_4,
        frequency: A4_HZ,
    };

    /// Equal temperament in which `base` sounds at `frequency` Hz.
    ///
    /// # Errors
    /// Returns `Error::InvalidParameter` if `frequency` is not finite and
    /// positive.
    pub fn new(base: Pitch, frequency: f64) -> crate::Result<Self> {
        valid_frequency(frequency)?;
        Ok(Self { base, frequency })
    }

    pub const fn base(&self) -> Pitch {
        self.base
    }

    pub const fn frequency(&self) -> f64 {
        self.frequency
    }
}

impl Default for EqualTemperament {
    fn default() -> Self {
        Self::A440
    }
}

impl TuningSystem for EqualTemperament {
    fn to_frequency(&self, pitch: &Pitch) -> f64 {
        let half_steps = Interval::between(pitch, &self.base).chromatic_offset();
        let sign = if pitch.is_below(&self.base) { -1 } else { 1 };
        self.frequency * 2.0f64.powf(f64::from(sign * half_steps) / 12.0)
    }
}
