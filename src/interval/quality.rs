use std::fmt;
use std::str::FromStr;

use crate::utils::{floor_div, positive_modulus};

/// Semitones spanned by the major or perfect interval of each size class,
/// unison through seventh.
const DIATONIC_HALF_STEPS: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Zero-based position of a size within its octave (unison = 0, seventh = 6).
pub const fn size_class(size: i32) -> i32 {
    positive_modulus(size - 1, 7)
}

/// Unisons, fourths, fifths, and their compounds take perfect qualities.
pub const fn is_perfect_class(size: i32) -> bool {
    matches!(size_class(size), 0 | 3 | 4)
}

/// Semitones spanned by the major or perfect interval of the given size,
/// including whole octaves for compound sizes.
pub const fn diatonic_half_steps(size: i32) -> i32 {
    DIATONIC_HALF_STEPS[size_class(size) as usize] + 12 * floor_div(size - 1, 7)
}

/// Interval quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Major,
    Minor,
    Perfect,
    Augmented,
    Diminished,
}

impl Quality {
    pub const ALL: [Quality; 5] = [
        Quality::Major,
        Quality::Perfect,
        Quality::Minor,
        Quality::Augmented,
        Quality::Diminished,
    ];

    /// Whether this quality can describe an interval of the given size.
    ///
    /// Perfect pairs only with unison/fourth/fifth/octave sizes, major and
    /// minor only with the others; augmented and diminished pair with any.
    pub const fn is_allowed(self, size: i32) -> bool {
        match self {
            Quality::Perfect => is_perfect_class(size),
            Quality::Major | Quality::Minor => !is_perfect_class(size),
            Quality::Augmented | Quality::Diminished => true,
        }
    }

    /// Semitones from the major/perfect interval of `size` to this quality.
    pub const fn offset(self, size: i32) -> i32 {
        match self {
            Quality::Major | Quality::Perfect => 0,
            Quality::Minor => -1,
            Quality::Augmented => 1,
            Quality::Diminished if is_perfect_class(size) => -1,
            Quality::Diminished => -2,
        }
    }

    /// Total semitones spanned by an interval of this quality and size.
    ///
    /// # Example
    /// ```
    /// use pitchcraft::interval::Quality;
    ///
    /// assert_eq!(Quality::Major.half_steps(6), 9);
    /// assert_eq!(Quality::Diminished.half_steps(5), 6);
    /// assert_eq!(Quality::Minor.half_steps(24), 39);
    /// ```
    pub const fn half_steps(self, size: i32) -> i32 {
        diatonic_half_steps(size) + self.offset(size)
    }

    /// Resolve a quality from its deviation from the major/perfect interval.
    ///
    /// Perfect-class sizes accept deviations -1..=1 and the rest accept
    /// -2..=1. Anything further out (doubly augmented and beyond) is rejected.
    ///
    /// # Errors
    /// Returns `Error::InvalidOffset` when no quality matches.
    pub fn from_offset(size: i32, offset: i32) -> crate::Result<Self> {
        let quality = if is_perfect_class(size) {
            match offset {
                1 => Some(Quality::Augmented),
                0 => Some(Quality::Perfect),
                -1 => Some(Quality::Diminished),
                _ => None,
            }
        } else {
            match offset {
                1 => Some(Quality::Augmented),
                0 => Some(Quality::Major),
                -1 => Some(Quality::Minor),
                -2 => Some(Quality::Diminished),
                _ => None,
            }
        };
        quality.ok_or(crate::Error::InvalidOffset { size, offset })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Quality::Major => "Major",
            Quality::Minor => "Minor",
            Quality::Perfect => "Perfect",
            Quality::Augmented => "Augmented",
            Quality::Diminished => "Diminished",
        }
    }

    /// Conventional one-letter symbol (`M`, `m`, `P`, `A`, `d`).
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Quality::Major => "M",
            Quality::Minor => "m",
            Quality::Perfect => "P",
            Quality::Augmented => "A",
            Quality::Diminished => "d",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quality {
    type Err = crate::Error;

    /// Parse a quality symbol or name. Single letters are case-sensitive
    /// (`M` is major, `m` is minor); words are not.
    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "M" => return Ok(Quality::Major),
            "m" => return Ok(Quality::Minor),
            "P" | "p" => return Ok(Quality::Perfect),
            "A" | "a" => return Ok(Quality::Augmented),
            "d" | "D" => return Ok(Quality::Diminished),
            _ => {}
        }
        match s.to_lowercase().as_str() {
            "maj" | "major" => Ok(Quality::Major),
            "min" | "minor" => Ok(Quality::Minor),
            "perf" | "perfect" => Ok(Quality::Perfect),
            "aug" | "augmented" => Ok(Quality::Augmented),
            "dim" | "diminished" => Ok(Quality::Diminished),
            _ => Err(crate::Error::IllegalConstruction {
                kind: "interval quality",
                value: s.to_string(),
            }),
        }
    }
}
