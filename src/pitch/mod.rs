//! Spelled pitches.
//!
//! A [`Pitch`] is stored as two independent coordinates counted from C in
//! octave 0: the number of letter steps (`absolute_scalar_index`) and the
//! number of semitones (`absolute_chromatic_index`). Letter name, accidental,
//! and octave are derived from that pair, so C♭4 and B3 are different values
//! even though they sound the same.

mod name;
pub mod named;

pub use name::{Accidental, Name};

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::interval::Interval;
use crate::tuning::{EqualTemperament, TuningSystem};
use crate::utils::{floor_div, integral, positive_modulus};

/// An absolute, spelled pitch.
///
/// Equality (`==`) compares both coordinates, so enharmonic spellings are
/// not equal; use [`Pitch::is_enharmonic_to`] for sounding equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pitch {
    absolute_scalar_index: i32,
    absolute_chromatic_index: i32,
}

impl Pitch {
    /// Build a pitch directly from its two coordinates.
    pub const fn new(absolute_scalar_index: i32, absolute_chromatic_index: i32) -> Self {
        Self {
            absolute_scalar_index,
            absolute_chromatic_index,
        }
    }

    /// Build a pitch from its spelling.
    ///
    /// # Example
    /// ```
    /// use pitchcraft::pitch::{Accidental, Name, Pitch};
    ///
    /// let f_sharp = Pitch::from_parts(Name::F, Accidental::SHARP, 4);
    /// assert_eq!(f_sharp.absolute_scalar_index(), 31);
    /// assert_eq!(f_sharp.absolute_chromatic_index(), 54);
    /// ```
    pub const fn from_parts(name: Name, accidental: Accidental, octave: i32) -> Self {
        Self {
            absolute_scalar_index: name.index() + 7 * octave,
            absolute_chromatic_index: name.natural_chromatic_index()
                + accidental.offset()
                + 12 * octave,
        }
    }

    /// Build a pitch from its spelling with an untrusted octave number.
    ///
    /// # Errors
    /// Returns `Error::NonintegerOctave` if `octave` is fractional, NaN, or
    /// infinite, and `Error::InvalidParameter` if the resulting coordinates
    /// do not fit in an `i32`.
    pub fn create(name: Name, accidental: Accidental, octave: f64) -> crate::Result<Self> {
        let whole = integral(octave).ok_or(crate::Error::NonintegerOctave { octave })?;
        let out_of_range = || crate::Error::InvalidParameter {
            name: "octave",
            value: whole.to_string(),
            reason: "pitch coordinates out of range",
        };
        let scalar = whole
            .checked_mul(7)
            .and_then(|steps| steps.checked_add(name.index()))
            .ok_or_else(out_of_range)?;
        let chromatic = whole
            .checked_mul(12)
            .and_then(|semitones| semitones.checked_add(name.natural_chromatic_index()))
            .and_then(|semitones| semitones.checked_add(accidental.offset()))
            .ok_or_else(out_of_range)?;
        Ok(Self::new(scalar, chromatic))
    }

    pub const fn absolute_scalar_index(&self) -> i32 {
        self.absolute_scalar_index
    }

    pub const fn absolute_chromatic_index(&self) -> i32 {
        self.absolute_chromatic_index
    }

    /// Letter class, 0 (C) through 6 (B).
    pub const fn scalar_index(&self) -> i32 {
        positive_modulus(self.absolute_scalar_index, 7)
    }

    /// Semitone class, 0 through 11, regardless of spelling.
    pub const fn chromatic_index(&self) -> i32 {
        positive_modulus(self.absolute_chromatic_index, 12)
    }

    /// Octave of the letter. C♭4 is in octave 4 even though it sounds as B3.
    pub const fn octave(&self) -> i32 {
        floor_div(self.absolute_scalar_index, 7)
    }

    pub const fn name(&self) -> Name {
        Name::from_index(self.absolute_scalar_index)
    }

    pub const fn accidental(&self) -> Accidental {
        let natural = self.name().natural_chromatic_index() + 12 * self.octave();
        Accidental::from_offset(self.absolute_chromatic_index - natural)
    }

    /// Same sounding pitch, spelling ignored.
    pub fn is_enharmonic_to(&self, other: &Pitch) -> bool {
        self.absolute_chromatic_index == other.absolute_chromatic_index
    }

    /// Strictly higher in sounding pitch.
    pub fn is_above(&self, other: &Pitch) -> bool {
        self.absolute_chromatic_index > other.absolute_chromatic_index
    }

    /// Strictly lower in sounding pitch.
    pub fn is_below(&self, other: &Pitch) -> bool {
        self.absolute_chromatic_index < other.absolute_chromatic_index
    }

    /// Same letter and accidental class in any octave.
    pub fn is_octave_of(&self, other: &Pitch) -> bool {
        self.scalar_index() == other.scalar_index()
            && self.chromatic_index() == other.chromatic_index()
    }

    /// Frequency in Hz under equal temperament with A4 = 440 Hz.
    pub fn frequency(&self) -> f64 {
        self.to_frequency(&EqualTemperament::A440)
    }

    /// Frequency in Hz under the given tuning system.
    ///
    /// # Example
    /// ```
    /// use pitchcraft::pitch::named;
    /// use pitchcraft::tuning::PYTHAGOREAN_D288;
    ///
    /// let c4 = named::C_NATURAL_4.to_frequency(&PYTHAGOREAN_D288);
    /// assert_eq!(c4.round(), 256.0);
    /// ```
    pub fn to_frequency<T: TuningSystem + ?Sized>(&self, tuning: &T) -> f64 {
        tuning.to_frequency(self)
    }
}

impl Add<Interval> for Pitch {
    type Output = Pitch;

    fn add(self, interval: Interval) -> Pitch {
        interval.above(&self)
    }
}

impl Sub<Interval> for Pitch {
    type Output = Pitch;

    fn sub(self, interval: Interval) -> Pitch {
        interval.below(&self)
    }
}

impl Sub<Pitch> for Pitch {
    type Output = Interval;

    fn sub(self, other: Pitch) -> Interval {
        Interval::between(&self, &other)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name(), self.accidental(), self.octave())
    }
}

impl FromStr for Pitch {
    type Err = crate::Error;

    /// Parse scientific pitch notation such as `C4`, `F#1`, `Bbb-1`, or `E♭5`.
    fn from_str(s: &str) -> crate::Result<Self> {
        let text = s.trim();
        let parse_error = |reason| crate::Error::Parse {
            input: s.to_string(),
            reason,
        };

        let mut chars = text.char_indices().peekable();
        let (_, letter) = chars.next().ok_or_else(|| parse_error("empty pitch"))?;
        let name = Name::try_from(letter)?;

        let mut offset = 0;
        let mut octave_start = text.len();
        while let Some(&(i, c)) = chars.peek() {
            match Accidental::symbol_offset(c) {
                Some(step) => {
                    offset += step;
                    chars.next();
                }
                None => {
                    octave_start = i;
                    break;
                }
            }
        }

        let octave_text = &text[octave_start..];
        if octave_text.is_empty() {
            return Err(parse_error("missing octave"));
        }
        let octave: f64 = octave_text
            .parse()
            .map_err(|_| parse_error("octave is not a number"))?;

        Pitch::create(name, Accidental::from_offset(offset), octave)
    }
}
