//! Tuning systems: mapping spelled pitches to frequencies in Hz.
//!
//! Two families are provided. [`EqualTemperament`] divides the octave into
//! twelve equal semitones. [`FifthChainTuning`] reaches every pitch by
//! stacking a fixed fifth ratio from a reference and folding back by octaves;
//! with a pure 3/2 fifth that is Pythagorean tuning, with a fifth of
//! 5^(1/4) it is quarter-comma meantone.

mod config;
mod equal;
mod fifth_chain;

pub use config::{Tuning, TuningConfig, TuningKind};
pub use equal::EqualTemperament;
pub use fifth_chain::{FifthChainTuning, PYTHAGOREAN_FIFTH, QUARTER_COMMA_FIFTH};

use crate::pitch::Pitch;
use crate::pitch::named::D_NATURAL_4;

pub(crate) const A4_HZ: f64 = 440.0;
pub(crate) const D4_HZ: f64 = 288.0;

/// Maps a pitch to a frequency in Hz.
///
/// Implementations are pure: the same pitch always yields the same
/// frequency, and the result is finite and positive for any pitch.
pub trait TuningSystem {
    /// Frequency of `pitch` in Hz.
    fn to_frequency(&self, pitch: &Pitch) -> f64;
}

impl<T: TuningSystem + ?Sized> TuningSystem for &T {
    fn to_frequency(&self, pitch: &Pitch) -> f64 {
        (**self).to_frequency(pitch)
    }
}

impl<T: TuningSystem + ?Sized> TuningSystem for Box<T> {
    fn to_frequency(&self, pitch: &Pitch) -> f64 {
        (**self).to_frequency(pitch)
    }
}

/// Equal temperament with A4 = 440 Hz. Used by [`Pitch::frequency`].
pub const EQUAL_TEMPERAMENT_A440: EqualTemperament = EqualTemperament::A440;

/// Pythagorean tuning with D4 = 288 Hz.
pub const PYTHAGOREAN_D288: FifthChainTuning =
    FifthChainTuning::from_parts(D_NATURAL_4, D4_HZ, PYTHAGOREAN_FIFTH);

/// Quarter-comma meantone with D4 = 288 Hz.
pub const QUARTER_COMMA_MEANTONE_D288: FifthChainTuning =
    FifthChainTuning::from_parts(D_NATURAL_4, D4_HZ, QUARTER_COMMA_FIFTH);

/// Equal temperament anchored at `base` sounding at `frequency` Hz.
pub fn make_equal_temperament(base: Pitch, frequency: f64) -> crate::Result<EqualTemperament> {
    EqualTemperament::new(base, frequency)
}

/// Fifth-chain tuning anchored at `base` sounding at `frequency` Hz, with
/// fifths of `fifth_ratio`.
pub fn make_fifth_chain_tuning(
    base: Pitch,
    frequency: f64,
    fifth_ratio: f64,
) -> crate::Result<FifthChainTuning> {
    FifthChainTuning::new(base, frequency, fifth_ratio)
}

/// Pythagorean tuning (pure 3/2 fifths) anchored at `base`.
pub fn make_pythagorean_tuning(base: Pitch, frequency: f64) -> crate::Result<FifthChainTuning> {
    FifthChainTuning::new(base, frequency, PYTHAGOREAN_FIFTH)
}

/// Quarter-comma meantone (fifths of 5^(1/4)) anchored at `base`.
pub fn make_quarter_comma_meantone(
    base: Pitch,
    frequency: f64,
) -> crate::Result<FifthChainTuning> {
    FifthChainTuning::new(base, frequency, QUARTER_COMMA_FIFTH)
}
