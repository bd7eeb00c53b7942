use std::fmt;
use std::str::FromStr;

use crate::utils::positive_modulus;

/// Semitone position of each natural letter within its octave, C through B.
const NATURAL_CHROMATIC: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// The seven diatonic letter names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Name {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Name {
    /// All letters in scale order starting from C.
    pub const ALL: [Name; 7] = [
        Name::C,
        Name::D,
        Name::E,
        Name::F,
        Name::G,
        Name::A,
        Name::B,
    ];

    /// Letter for a scalar index; wraps every seven steps.
    pub const fn from_index(index: i32) -> Self {
        Self::ALL[positive_modulus(index, 7) as usize]
    }

    /// Position along the letter circle (C = 0 .. B = 6).
    pub const fn index(self) -> i32 {
        self as i32
    }

    /// Semitones above C of the natural (unaltered) letter.
    pub const fn natural_chromatic_index(self) -> i32 {
        NATURAL_CHROMATIC[self as usize]
    }

    pub const fn letter(self) -> char {
        match self {
            Name::C => 'C',
            Name::D => 'D',
            Name::E => 'E',
            Name::F => 'F',
            Name::G => 'G',
            Name::A => 'A',
            Name::B => 'B',
        }
    }
}

impl TryFrom<char> for Name {
    type Error = crate::Error;

    fn try_from(letter: char) -> crate::Result<Self> {
        match letter.to_ascii_uppercase() {
            'C' => Ok(Name::C),
            'D' => Ok(Name::D),
            'E' => Ok(Name::E),
            'F' => Ok(Name::F),
            'G' => Ok(Name::G),
            'A' => Ok(Name::A),
            'B' => Ok(Name::B),
            _ => Err(crate::Error::IllegalConstruction {
                kind: "pitch name",
                value: letter.to_string(),
            }),
        }
    }
}

impl FromStr for Name {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Name::try_from(letter),
            _ => Err(crate::Error::IllegalConstruction {
                kind: "pitch name",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Chromatic alteration of a letter, in semitones.
///
/// Transposition can push a spelling past double sharp or double flat, so any
/// offset is representable; the five common ones have named constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Accidental(i32);

impl Accidental {
    pub const DOUBLE_FLAT: Accidental = Accidental(-2);
    pub const FLAT: Accidental = Accidental(-1);
    pub const NATURAL: Accidental = Accidental(0);
    pub const SHARP: Accidental = Accidental(1);
    pub const DOUBLE_SHARP: Accidental = Accidental(2);

    /// The five named accidentals, flattest first.
    pub const COMMON: [Accidental; 5] = [
        Accidental::DOUBLE_FLAT,
        Accidental::FLAT,
        Accidental::NATURAL,
        Accidental::SHARP,
        Accidental::DOUBLE_SHARP,
    ];

    pub const fn from_offset(offset: i32) -> Self {
        Accidental(offset)
    }

    pub const fn offset(self) -> i32 {
        self.0
    }

    /// English name for the five common accidentals.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            -2 => Some("DoubleFlat"),
            -1 => Some("Flat"),
            0 => Some("Natural"),
            1 => Some("Sharp"),
            2 => Some("DoubleSharp"),
            _ => None,
        }
    }

    /// Semitone value of a single accidental symbol.
    pub(crate) fn symbol_offset(symbol: char) -> Option<i32> {
        match symbol {
            '#' | '♯' => Some(1),
            'x' | '𝄪' => Some(2),
            'b' | '♭' => Some(-1),
            '𝄫' => Some(-2),
            '♮' => Some(0),
            _ => None,
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = if self.0 > 0 { '#' } else { 'b' };
        for _ in 0..self.0.unsigned_abs() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
