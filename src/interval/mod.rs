//! Intervals between spelled pitches.
//!
//! An [`Interval`] is a displacement in the same two coordinates as a
//! [`Pitch`]: letter steps (`scalar_offset`, one less than the size) and
//! semitones (`chromatic_offset`). Quality is never stored; it is resolved
//! from how far the semitone count sits from the major or perfect interval of
//! the same size.

pub mod named;
mod quality;

pub use quality::{Quality, diatonic_half_steps, is_perfect_class, size_class};

use std::fmt;
use std::str::FromStr;

use crate::pitch::Pitch;
use crate::utils::integral;

/// Conventional names for interval sizes.
pub mod size {
    pub const UNISON: i32 = 1;
    pub const SECOND: i32 = 2;
    pub const THIRD: i32 = 3;
    pub const FOURTH: i32 = 4;
    pub const FIFTH: i32 = 5;
    pub const SIXTH: i32 = 6;
    pub const SEVENTH: i32 = 7;
    pub const OCTAVE: i32 = 8;
    pub const NINTH: i32 = 9;
    pub const TENTH: i32 = 10;
    pub const ELEVENTH: i32 = 11;
    pub const TWELFTH: i32 = 12;
}

/// A displacement between two pitches.
///
/// Equality (`==`) compares both offsets, so an augmented fourth and a
/// diminished fifth differ; use [`Interval::is_enharmonic_to`] to compare
/// semitones only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    scalar_offset: i32,
    chromatic_offset: i32,
}

impl Interval {
    /// Build an interval directly from its offsets. No validation.
    pub const fn new(scalar_offset: i32, chromatic_offset: i32) -> Self {
        Self {
            scalar_offset,
            chromatic_offset,
        }
    }

    /// Build an interval from quality and size.
    ///
    /// # Errors
    /// Returns `Error::NonpositiveSize` if `size < 1`, or
    /// `Error::InvalidQuality` if the quality cannot take that size.
    ///
    /// # Example
    /// ```
    /// use pitchcraft::interval::{Interval, Quality};
    ///
    /// let major_sixth = Interval::create(Quality::Major, 6).unwrap();
    /// assert_eq!(major_sixth.chromatic_offset(), 9);
    /// assert!(Interval::create(Quality::Perfect, 2).is_err());
    /// ```
    pub fn create(quality: Quality, size: i32) -> crate::Result<Self> {
        if size < 1 {
            return Err(crate::Error::NonpositiveSize { size: size as i64 });
        }
        if !quality.is_allowed(size) {
            return Err(crate::Error::InvalidQuality { quality, size });
        }
        Ok(Self::from_quality(quality, size))
    }

    /// Unchecked counterpart of [`Interval::create`] for constant tables.
    pub(crate) const fn from_quality(quality: Quality, size: i32) -> Self {
        Self::new(size - 1, quality.half_steps(size))
    }

    /// Start building an interval from possibly missing parts.
    pub fn builder() -> IntervalBuilder {
        IntervalBuilder::default()
    }

    /// Distance between `a` and `b`, measured from whichever is lower.
    ///
    /// # Example
    /// ```
    /// use pitchcraft::interval::{Interval, named};
    /// use pitchcraft::pitch::named::{C_NATURAL_4, F_SHARP_4};
    ///
    /// assert_eq!(Interval::between(&C_NATURAL_4, &F_SHARP_4), named::AUGMENTED_4);
    /// assert_eq!(Interval::between(&F_SHARP_4, &C_NATURAL_4), named::AUGMENTED_4);
    /// ```
    pub fn between(a: &Pitch, b: &Pitch) -> Self {
        let scalar_offset = a.absolute_scalar_index() - b.absolute_scalar_index();
        let chromatic_offset = a.absolute_chromatic_index() - b.absolute_chromatic_index();
        let sign = if a.is_below(b) { -1 } else { 1 };
        Self::new(sign * scalar_offset, sign * chromatic_offset)
    }

    pub const fn scalar_offset(&self) -> i32 {
        self.scalar_offset
    }

    pub const fn chromatic_offset(&self) -> i32 {
        self.chromatic_offset
    }

    /// Size counted inclusively: unison is 1, octave is 8.
    pub const fn size(&self) -> i32 {
        self.scalar_offset + 1
    }

    /// Resolve the quality from the offsets.
    ///
    /// # Errors
    /// Returns `Error::InvalidOffset` when the semitone count is too far from
    /// the major/perfect interval of this size (e.g. a doubly augmented fifth),
    /// or when the size is below a unison, as for B♯3 measured against C4.
    pub fn quality(&self) -> crate::Result<Quality> {
        let size = self.size();
        if size < 1 {
            return Err(crate::Error::InvalidOffset {
                size,
                offset: self.chromatic_offset,
            });
        }
        Quality::from_offset(size, self.chromatic_offset - diatonic_half_steps(size))
    }

    /// Transpose `pitch` up by this interval.
    pub fn above(&self, pitch: &Pitch) -> Pitch {
        Pitch::new(
            pitch.absolute_scalar_index() + self.scalar_offset,
            pitch.absolute_chromatic_index() + self.chromatic_offset,
        )
    }

    /// Transpose `pitch` down by this interval.
    pub fn below(&self, pitch: &Pitch) -> Pitch {
        Pitch::new(
            pitch.absolute_scalar_index() - self.scalar_offset,
            pitch.absolute_chromatic_index() - self.chromatic_offset,
        )
    }

    /// Same number of semitones, spelling ignored.
    pub fn is_enharmonic_to(&self, other: &Interval) -> bool {
        self.chromatic_offset == other.chromatic_offset
    }

    /// Wider than an octave.
    pub const fn is_compound(&self) -> bool {
        self.scalar_offset > 7
    }

    /// Remove whole octaves from a compound interval; a major ninth becomes a
    /// major second and a double octave becomes an octave. Simple intervals
    /// are returned unchanged.
    pub const fn simple(&self) -> Self {
        if !self.is_compound() {
            return *self;
        }
        let octaves = (self.scalar_offset - 1) / 7;
        Self::new(
            self.scalar_offset - 7 * octaves,
            self.chromatic_offset - 12 * octaves,
        )
    }
}

impl fmt::Display for Interval {
    /// `Major6` by default, `M6` with the alternate flag (`{:#}`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quality() {
            Ok(quality) if f.alternate() => write!(f, "{}{}", quality.abbreviation(), self.size()),
            Ok(quality) => write!(f, "{}{}", quality, self.size()),
            Err(_) => write!(
                f,
                "Interval({}, {})",
                self.scalar_offset, self.chromatic_offset
            ),
        }
    }
}

impl FromStr for Interval {
    type Err = crate::Error;

    /// Parse `M6`, `P5`, `A4`, `d5`, `m3`, `Major6`, `Perfect5`, and so on.
    fn from_str(s: &str) -> crate::Result<Self> {
        let text = s.trim();
        let split = text
            .find(|c: char| !c.is_alphabetic())
            .unwrap_or(text.len());
        let (quality_text, size_text) = text.split_at(split);

        let mut builder = Interval::builder();
        if !size_text.is_empty() {
            let size: f64 = size_text.parse().map_err(|_| crate::Error::Parse {
                input: s.to_string(),
                reason: "size is not a number",
            })?;
            builder = builder.size_value(size);
        }
        if !quality_text.is_empty() {
            builder = builder.quality(quality_text.parse()?);
        }
        builder.build()
    }
}

/// Assembles an [`Interval`] from parts that may be missing or malformed.
///
/// Checks run in a fixed order: size present, integral, positive; then
/// quality present and allowed for the size.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalBuilder {
    quality: Option<Quality>,
    size: Option<f64>,
}

impl IntervalBuilder {
    pub fn quality(mut self, quality: Quality) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn size(mut self, size: i32) -> Self {
        self.size = Some(f64::from(size));
        self
    }

    /// Size from an untrusted numeric value; fractional values fail in
    /// [`IntervalBuilder::build`].
    pub fn size_value(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// # Errors
    /// `NullSize`, `NonintegerSize`, `NonpositiveSize`, `NullQuality`, or
    /// `InvalidQuality`, in that order of precedence.
    pub fn build(self) -> crate::Result<Interval> {
        let raw_size = self.size.ok_or(crate::Error::NullSize)?;
        let size = integral(raw_size).ok_or(crate::Error::NonintegerSize { size: raw_size })?;
        if size < 1 {
            return Err(crate::Error::NonpositiveSize { size: size as i64 });
        }
        let quality = self.quality.ok_or(crate::Error::NullQuality)?;
        Interval::create(quality, size)
    }
}

#[cfg(test)]
mod tests;
