//! Spelled pitch and interval arithmetic for Western music, with pluggable
//! tuning systems.
//!
//! Pitches and intervals are kept in two coordinates at once: steps along
//! the seven letter names and steps along the twelve semitones. With both,
//! C♯ and D♭ stay distinct values and transpositions keep their spelling.
//!
//! # Quick Start
//!
//! ```rust
//! use pitchcraft::interval::{self, Interval, Quality};
//! use pitchcraft::pitch::{Pitch, named};
//! use pitchcraft::tuning::{PYTHAGOREAN_D288, TuningSystem};
//!
//! // Transpose with spelling preserved
//! let f_sharp = interval::named::AUGMENTED_4.above(&named::C_NATURAL_4);
//! assert_eq!(f_sharp.to_string(), "F#4");
//!
//! // Measure an interval and resolve its quality
//! let a4: Pitch = "A4".parse().unwrap();
//! let span = Interval::between(&named::F_SHARP_1, &a4);
//! assert_eq!(span.quality().unwrap(), Quality::Minor);
//! assert_eq!(span.size(), 24);
//!
//! // Frequencies
//! assert_eq!(a4.frequency(), 440.0);
//! assert_eq!(PYTHAGOREAN_D288.to_frequency(&named::C_NATURAL_4).round(), 256.0);
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`pitch`] | `Pitch`, letter `Name`, `Accidental`, named pitch constants |
//! | [`interval`] | `Interval`, `Quality`, size names, named interval constants |
//! | [`tuning`] | `TuningSystem` trait, equal temperament, fifth-chain tunings |
//! | [`utils`] | Positive modulus and validation helpers |
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`], which is an alias for
//! `std::result::Result<T, Error>`. The [`Error`] enum covers invalid interval
//! sizes and qualities, unresolvable offsets, non-integer octaves, unknown
//! names, and invalid tuning parameters.
//!
//! # Logging
//!
//! Tuning construction and fifth-chain lookups emit records through the
//! [`log`](https://docs.rs/log) facade; install any logger to see them.
//!
//! # Safety
//!
//! This crate uses `#![forbid(unsafe_code)]`.

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod interval;
pub mod pitch;
pub mod tuning;
pub mod utils;
