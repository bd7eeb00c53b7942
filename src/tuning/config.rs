use std::fmt;
use std::str::FromStr;

use super::{
    A4_HZ, D4_HZ, EqualTemperament, FifthChainTuning, PYTHAGOREAN_FIFTH, QUARTER_COMMA_FIFTH,
    TuningSystem,
};
use crate::pitch::Pitch;
use crate::pitch::named::{A_NATURAL_4, D_NATURAL_4};

/// Which family of tuning to build.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TuningKind {
    #[default]
    Equal,
    Pythagorean,
    QuarterCommaMeantone,
    /// Fifth-chain tuning with an arbitrary fifth.
    FifthChain { fifth_ratio: f64 },
}

impl TuningKind {
    /// Fifth ratio for the fifth-chain kinds; `None` for equal temperament.
    pub fn fifth_ratio(&self) -> Option<f64> {
        match *self {
            TuningKind::Equal => None,
            TuningKind::Pythagorean => Some(PYTHAGOREAN_FIFTH),
            TuningKind::QuarterCommaMeantone => Some(QUARTER_COMMA_FIFTH),
            TuningKind::FifthChain { fifth_ratio } => Some(fifth_ratio),
        }
    }
}

impl FromStr for TuningKind {
    type Err = crate::Error;

    /// Parse tuning kind from string name, or `fifth-chain(<ratio>)` for a
    /// custom fifth. The ratio is range-checked when the tuning is built.
    fn from_str(name: &str) -> crate::Result<Self> {
        let lowered = name.trim().to_lowercase();
        if let Some(ratio) = lowered
            .strip_prefix("fifth-chain(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let fifth_ratio = ratio.trim().parse().map_err(|_| crate::Error::Parse {
                input: name.to_string(),
                reason: "fifth ratio is not a number",
            })?;
            return Ok(TuningKind::FifthChain { fifth_ratio });
        }
        match lowered.as_str() {
            "equal" | "et" | "12-tet" | "12tet" | "equal-temperament" => Ok(TuningKind::Equal),
            "pythagorean" => Ok(TuningKind::Pythagorean),
            "meantone" | "quarter-comma" | "quarter-comma-meantone" => {
                Ok(TuningKind::QuarterCommaMeantone)
            }
            _ => Err(crate::Error::IllegalConstruction {
                kind: "tuning kind",
                value: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for TuningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningKind::Equal => write!(f, "equal"),
            TuningKind::Pythagorean => write!(f, "pythagorean"),
            TuningKind::QuarterCommaMeantone => write!(f, "meantone"),
            TuningKind::FifthChain { fifth_ratio } => write!(f, "fifth-chain({})", fifth_ratio),
        }
    }
}

/// Parameters for building a [`Tuning`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TuningConfig {
    pub kind: TuningKind,
    /// Reference pitch.
    pub base: Pitch,
    /// Frequency of the reference pitch in Hz.
    pub frequency: f64,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            kind: TuningKind::Equal,
            base: A_NATURAL_4,
            frequency: A4_HZ,
        }
    }
}

impl TuningConfig {
    /// Pythagorean tuning with D4 = 288 Hz.
    pub fn pythagorean() -> Self {
        Self {
            kind: TuningKind::Pythagorean,
            base: D_NATURAL_4,
            frequency: D4_HZ,
        }
    }

    /// Quarter-comma meantone with D4 = 288 Hz.
    pub fn quarter_comma_meantone() -> Self {
        Self {
            kind: TuningKind::QuarterCommaMeantone,
            ..Self::pythagorean()
        }
    }

    /// Validate the parameters and build the tuning.
    ///
    /// # Errors
    /// Returns `Error::InvalidParameter` for a non-positive or non-finite
    /// frequency, or a fifth ratio outside (1, 2).
    pub fn build(&self) -> crate::Result<Tuning> {
        log::debug!(
            "building {} tuning with {} = {} Hz",
            self.kind,
            self.base,
            self.frequency
        );
        match self.kind.fifth_ratio() {
            None => EqualTemperament::new(self.base, self.frequency).map(Tuning::Equal),
            Some(ratio) => {
                FifthChainTuning::new(self.base, self.frequency, ratio).map(Tuning::FifthChain)
            }
        }
    }
}

/// A tuning selected at run time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tuning {
    Equal(EqualTemperament),
    FifthChain(FifthChainTuning),
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::Equal(EqualTemperament::A440)
    }
}

impl TuningSystem for Tuning {
    fn to_frequency(&self, pitch: &Pitch) -> f64 {
        match self {
            Tuning::Equal(tuning) => tuning.to_frequency(pitch),
            Tuning::FifthChain(tuning) => tuning.to_frequency(pitch),
        }
    }
}

impl From<EqualTemperament> for Tuning {
    fn from(tuning: EqualTemperament) -> Self {
        Tuning::Equal(tuning)
    }
}

impl From<FifthChainTuning> for Tuning {
    fn from(tuning: FifthChainTuning) -> Self {
        Tuning::FifthChain(tuning)
    }
}
