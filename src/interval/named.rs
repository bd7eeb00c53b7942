//! Named interval constants for every allowed quality and size from unison
//! to twelfth, e.g. [`MAJOR_6`], [`PERFECT_5`], [`AUGMENTED_4`].

use super::{Interval, Quality};

/// Largest size covered by the named constants.
pub const MAX_SIZE: i32 = 12;

/// Every named interval, grouped by quality in [`Quality::ALL`] order.
pub fn all() -> impl Iterator<Item = Interval> {
    Quality::ALL.into_iter().flat_map(|quality| {
        (1..=MAX_SIZE)
            .filter(move |&size| quality.is_allowed(size))
            .map(move |size| Interval::from_quality(quality, size))
    })
}

macro_rules! named_intervals {
    ($($ident:ident = $quality:ident $size:literal;)*) => {
        $(pub const $ident: Interval = Interval::from_quality(Quality::$quality, $size);)*
    };
}

named_intervals! {
    MAJOR_2 = Major 2;
    MAJOR_3 = Major 3;
    MAJOR_6 = Major 6;
    MAJOR_7 = Major 7;
    MAJOR_9 = Major 9;
    MAJOR_10 = Major 10;
    PERFECT_1 = Perfect 1;
    PERFECT_4 = Perfect 4;
    PERFECT_5 = Perfect 5;
    PERFECT_8 = Perfect 8;
    PERFECT_11 = Perfect 11;
    PERFECT_12 = Perfect 12;
    MINOR_2 = Minor 2;
    MINOR_3 = Minor 3;
    MINOR_6 = Minor 6;
    MINOR_7 = Minor 7;
    MINOR_9 = Minor 9;
    MINOR_10 = Minor 10;
    AUGMENTED_1 = Augmented 1;
    AUGMENTED_2 = Augmented 2;
    AUGMENTED_3 = Augmented 3;
    AUGMENTED_4 = Augmented 4;
    AUGMENTED_5 = Augmented 5;
    AUGMENTED_6 = Augmented 6;
    AUGMENTED_7 = Augmented 7;
    AUGMENTED_8 = Augmented 8;
    AUGMENTED_9 = Augmented 9;
    AUGMENTED_10 = Augmented 10;
    AUGMENTED_11 = Augmented 11;
    AUGMENTED_12 = Augmented 12;
    DIMINISHED_1 = Diminished 1;
    DIMINISHED_2 = Diminished 2;
    DIMINISHED_3 = Diminished 3;
    DIMINISHED_4 = Diminished 4;
    DIMINISHED_5 = Diminished 5;
    DIMINISHED_6 = Diminished 6;
    DIMINISHED_7 = Diminished 7;
    DIMINISHED_8 = Diminished 8;
    DIMINISHED_9 = Diminished 9;
    DIMINISHED_10 = Diminished 10;
    DIMINISHED_11 = Diminished 11;
    DIMINISHED_12 = Diminished 12;
}
