use super::TuningSystem;
use crate::interval::Interval;
use crate::pitch::Pitch;
use crate::utils::{positive_modulus, valid_frequency, valid_ratio};

/// A pure fifth, 3/2.
pub const PYTHAGOREAN_FIFTH: f64 = 1.5;

/// The quarter-comma meantone fifth, 5^(1/4).
pub const QUARTER_COMMA_FIFTH: f64 = 1.495_348_781_221_220_5;

/// Position of each natural letter on the line of fifths, relative to C.
const LINE_OF_FIFTHS: [i32; 7] = [0, 2, 4, -1, 1, 3, 5];

/// Spelled pitch classes repeat along the line of fifths with this period:
/// 84 fifths is the first count that is both a whole number of letter cycles
/// (4 * 84 = 48 * 7) and of semitone cycles (7 * 84 = 49 * 12).
const FIFTHS_PERIOD: i32 = 84;

/// Tuning built by stacking a fixed fifth ratio from a reference pitch.
///
/// A pitch is located by walking fifths up or down from the reference until
/// the walk lands on the same letter and accidental in some octave, then
/// folding that octave back onto the pitch:
///
/// `frequency = base_frequency * fifth_ratio^fifths * (1/2)^octave_offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FifthChainTuning {
    base: Pitch,
    frequency: f64,
    fifth_ratio: f64,
}

impl FifthChainTuning {
    /// Fifth-chain tuning in which `base` sounds at `frequency` Hz.
    ///
    /// # Errors
    /// Returns `Error::InvalidParameter` if `frequency` is not finite and
    /// positive, or if `fifth_ratio` is not strictly between 1 and 2.
    pub fn new(base: Pitch, frequency: f64, fifth_ratio: f64) -> crate::Result<Self> {
        valid_frequency(frequency)?;
        valid_ratio(fifth_ratio)?;
        Ok(Self::from_parts(base, frequency, fifth_ratio))
    }

    pub(crate) const fn from_parts(base: Pitch, frequency: f64, fifth_ratio: f64) -> Self {
        Self {
            base,
            frequency,
            fifth_ratio,
        }
    }

    pub const fn base(&self) -> Pitch {
        self.base
    }

    pub const fn frequency(&self) -> f64 {
        self.frequency
    }

    pub const fn fifth_ratio(&self) -> f64 {
        self.fifth_ratio
    }

    /// Locate `pitch` on the chain of fifths through the reference.
    ///
    /// Returns `(fifths, octave_offset)`: the signed number of fifths from
    /// the reference to an octave-equivalent of `pitch`, and how many
    /// octaves that equivalent sits above `pitch`. The fifth count is the
    /// shortest walk, preferring the downward direction on a tie, and lies
    /// in `-42..=41`.
    ///
    /// # Example
    /// ```
    /// use pitchcraft::pitch::named::{C_NATURAL_4, F_SHARP_4};
    /// use pitchcraft::tuning::PYTHAGOREAN_D288;
    ///
    /// // D4 up four fifths reaches F#6, two octaves above F#4
    /// assert_eq!(PYTHAGOREAN_D288.locate(&F_SHARP_4), (4, 2));
    /// // D4 down two fifths reaches C3, one octave below C4
    /// assert_eq!(PYTHAGOREAN_D288.locate(&C_NATURAL_4), (-2, -1));
    /// ```
    pub fn locate(&self, pitch: &Pitch) -> (i32, i32) {
        let distance = line_of_fifths(pitch) - line_of_fifths(&self.base);
        let half = FIFTHS_PERIOD / 2;
        let fifths = positive_modulus(distance + half, FIFTHS_PERIOD) - half;

        let reached = Interval::new(4 * fifths, 7 * fifths).above(&self.base);
        let octave_offset = reached.octave() - pitch.octave();
        (fifths, octave_offset)
    }
}

/// Signed position of a pitch's letter and accidental on the line of fifths
/// (C = 0, G = 1, F = -1, C# = 7, Cb = -7, ...).
///
/// Twelve accidentals move a pitch by one full `FIFTHS_PERIOD`, so the
/// accidental is first folded into `-6..=5`; the position is then exact for
/// every common accidental and correct modulo the period for the rest.
fn line_of_fifths(pitch: &Pitch) -> i32 {
    let accidental = positive_modulus(pitch.accidental().offset(), 12);
    let accidental = if accidental > 5 { accidental - 12 } else { accidental };
    LINE_OF_FIFTHS[pitch.scalar_index() as usize] + 7 * accidental
}

impl TuningSystem for FifthChainTuning {
    fn to_frequency(&self, pitch: &Pitch) -> f64 {
        let (fifths, octave_offset) = self.locate(pitch);
        log::trace!(
            "{} is {} fifths from {} with octave offset {}",
            pitch,
            fifths,
            self.base,
            octave_offset
        );
        self.frequency * self.fifth_ratio.powi(fifths) * 0.5f64.powi(octave_offset)
    }
}
