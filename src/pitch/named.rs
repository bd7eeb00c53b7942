//! Named pitch constants for every letter, the five common accidentals, and
//! octaves 0 through 8.

use super::{Accidental, Name, Pitch};

/// Octaves covered by the named constants.
pub const OCTAVES: std::ops::RangeInclusive<i32> = 0..=8;

/// Middle C.
pub const MIDDLE_C: Pitch = C_NATURAL_4;

/// Every named pitch, ordered by octave, then letter, then accidental.
pub fn all() -> impl Iterator<Item = Pitch> {
    OCTAVES.flat_map(|octave| {
        Name::ALL.into_iter().flat_map(move |name| {
            Accidental::COMMON
                .into_iter()
                .map(move |accidental| Pitch::from_parts(name, accidental, octave))
        })
    })
}

macro_rules! named_pitches {
    ($($ident:ident = $name:ident $accidental:ident $octave:literal;)*) => {
        $(pub const $ident: Pitch = Pitch::from_parts(Name::$name, Accidental::$accidental, $octave);)*
    };
}

named_pitches! {
    C_DOUBLE_FLAT_0 = C DOUBLE_FLAT 0;
    C_FLAT_0 = C FLAT 0;
    C_NATURAL_0 = C NATURAL 0;
    C_SHARP_0 = C SHARP 0;
    C_DOUBLE_SHARP_0 = C DOUBLE_SHARP 0;
    D_DOUBLE_FLAT_0 = D DOUBLE_FLAT 0;
    D_FLAT_0 = D FLAT 0;
    D_NATURAL_0 = D NATURAL 0;
    D_SHARP_0 = D SHARP 0;
    D_DOUBLE_SHARP_0 = D DOUBLE_SHARP 0;
    E_DOUBLE_FLAT_0 = E DOUBLE_FLAT 0;
    E_FLAT_0 = E FLAT 0;
    E_NATURAL_0 = E NATURAL 0;
    E_SHARP_0 = E SHARP 0;
    E_DOUBLE_SHARP_0 = E DOUBLE_SHARP 0;
    F_DOUBLE_FLAT_0 = F DOUBLE_FLAT 0;
    F_FLAT_0 = F FLAT 0;
    F_NATURAL_0 = F NATURAL 0;
    F_SHARP_0 = F SHARP 0;
    F_DOUBLE_SHARP_0 = F DOUBLE_SHARP 0;
    G_DOUBLE_FLAT_0 = G DOUBLE_FLAT 0;
    G_FLAT_0 = G FLAT 0;
    G_NATURAL_0 = G NATURAL 0;
    G_SHARP_0 = G SHARP 0;
    G_DOUBLE_SHARP_0 = G DOUBLE_SHARP 0;
    A_DOUBLE_FLAT_0 = A DOUBLE_FLAT 0;
    A_FLAT_0 = A FLAT 0;
    A_NATURAL_0 = A NATURAL 0;
    A_SHARP_0 = A SHARP 0;
    A_DOUBLE_SHARP_0 = A DOUBLE_SHARP 0;
    B_DOUBLE_FLAT_0 = B DOUBLE_FLAT 0;
    B_FLAT_0 = B FLAT 0;
    B_NATURAL_0 = B NATURAL 0;
    B_SHARP_0 = B SHARP 0;
    B_DOUBLE_SHARP_0 = B DOUBLE_SHARP 0;
    C_DOUBLE_FLAT_1 = C DOUBLE_FLAT 1;
    C_FLAT_1 = C FLAT 1;
    C_NATURAL_1 = C NATURAL 1;
    C_SHARP_1 = C SHARP 1;
    C_DOUBLE_SHARP_1 = C DOUBLE_SHARP 1;
    D_DOUBLE_FLAT_1 = D DOUBLE_FLAT 1;
    D_FLAT_1 = D FLAT 1;
    D_NATURAL_1 = D NATURAL 1;
    D_SHARP_1 = D SHARP 1;
    D_DOUBLE_SHARP_1 = D DOUBLE_SHARP 1;
    E_DOUBLE_FLAT_1 = E DOUBLE_FLAT 1;
    E_FLAT_1 = E FLAT 1;
    E_NATURAL_1 = E NATURAL 1;
    E_SHARP_1 = E SHARP 1;
    E_DOUBLE_SHARP_1 = E DOUBLE_SHARP 1;
    F_DOUBLE_FLAT_1 = F DOUBLE_FLAT 1;
    F_FLAT_1 = F FLAT 1;
    F_NATURAL_1 = F NATURAL 1;
    F_SHARP_1 = F SHARP 1;
    F_DOUBLE_SHARP_1 = F DOUBLE_SHARP 1;
    G_DOUBLE_FLAT_1 = G DOUBLE_FLAT 1;
    G_FLAT_1 = G FLAT 1;
    G_NATURAL_1 = G NATURAL 1;
    G_SHARP_1 = G SHARP 1;
    G_DOUBLE_SHARP_1 = G DOUBLE_SHARP 1;
    A_DOUBLE_FLAT_1 = A DOUBLE_FLAT 1;
    A_FLAT_1 = A FLAT 1;
    A_NATURAL_1 = A NATURAL 1;
    A_SHARP_1 = A SHARP 1;
    A_DOUBLE_SHARP_1 = A DOUBLE_SHARP 1;
    B_DOUBLE_FLAT_1 = B DOUBLE_FLAT 1;
    B_FLAT_1 = B FLAT 1;
    B_NATURAL_1 = B NATURAL 1;
    B_SHARP_1 = B SHARP 1;
    B_DOUBLE_SHARP_1 = B DOUBLE_SHARP 1;
    C_DOUBLE_FLAT_2 = C DOUBLE_FLAT 2;
    C_FLAT_2 = C FLAT 2;
    C_NATURAL_2 = C NATURAL 2;
    C_SHARP_2 = C SHARP 2;
    C_DOUBLE_SHARP_2 = C DOUBLE_SHARP 2;
    D_DOUBLE_FLAT_2 = D DOUBLE_FLAT 2;
    D_FLAT_2 = D FLAT 2;
    D_NATURAL_2 = D NATURAL 2;
    D_SHARP_2 = D SHARP 2;
    D_DOUBLE_SHARP_2 = D DOUBLE_SHARP 2;
    E_DOUBLE_FLAT_2 = E DOUBLE_FLAT 2;
    E_FLAT_2 = E FLAT 2;
    E_NATURAL_2 = E NATURAL 2;
    E_SHARP_2 = E SHARP 2;
    E_DOUBLE_SHARP_2 = E DOUBLE_SHARP 2;
    F_DOUBLE_FLAT_2 = F DOUBLE_FLAT 2;
    F_FLAT_2 = F FLAT 2;
    F_NATURAL_2 = F NATURAL 2;
    F_SHARP_2 = F SHARP 2;
    F_DOUBLE_SHARP_2 = F DOUBLE_SHARP 2;
    G_DOUBLE_FLAT_2 = G DOUBLE_FLAT 2;
    G_FLAT_2 = G FLAT 2;
    G_NATURAL_2 = G NATURAL 2;
    G_SHARP_2 = G SHARP 2;
    G_DOUBLE_SHARP_2 = G DOUBLE_SHARP 2;
    A_DOUBLE_FLAT_2 = A DOUBLE_FLAT 2;
    A_FLAT_2 = A FLAT 2;
    A_NATURAL_2 = A NATURAL 2;
    A_SHARP_2 = A SHARP 2;
    A_DOUBLE_SHARP_2 = A DOUBLE_SHARP 2;
    B_DOUBLE_FLAT_2 = B DOUBLE_FLAT 2;
    B_FLAT_2 = B FLAT 2;
    B_NATURAL_2 = B NATURAL 2;
    B_SHARP_2 = B SHARP 2;
    B_DOUBLE_SHARP_2 = B DOUBLE_SHARP 2;
    C_DOUBLE_FLAT_3 = C DOUBLE_FLAT 3;
    C_FLAT_3 = C FLAT 3;
    C_NATURAL_3 = C NATURAL 3;
    C_SHARP_3 = C SHARP 3;
    C_DOUBLE_SHARP_3 = C DOUBLE_SHARP 3;
    D_DOUBLE_FLAT_3 = D DOUBLE_FLAT 3;
    D_FLAT_3 = D FLAT 3;
    D_NATURAL_3 = D NATURAL 3;
    D_SHARP_3 = D SHARP 3;
    D_DOUBLE_SHARP_3 = D DOUBLE_SHARP 3;
    E_DOUBLE_FLAT_3 = E DOUBLE_FLAT 3;
    E_FLAT_3 = E FLAT 3;
    E_NATURAL_3 = E NATURAL 3;
    E_SHARP_3 = E SHARP 3;
    E_DOUBLE_SHARP_3 = E DOUBLE_SHARP 3;
    F_DOUBLE_FLAT_3 = F DOUBLE_FLAT 3;
    F_FLAT_3 = F FLAT 3;
    F_NATURAL_3 = F NATURAL 3;
    F_SHARP_3 = F SHARP 3;
    F_DOUBLE_SHARP_3 = F DOUBLE_SHARP 3;
    G_DOUBLE_FLAT_3 = G DOUBLE_FLAT 3;
    G_FLAT_3 = G FLAT 3;
    G_NATURAL_3 = G NATURAL 3;
    G_SHARP_3 = G SHARP 3;
    G_DOUBLE_SHARP_3 = G DOUBLE_SHARP 3;
    A_DOUBLE_FLAT_3 = A DOUBLE_FLAT 3;
    A_FLAT_3 = A FLAT 3;
    A_NATURAL_3 = A NATURAL 3;
    A_SHARP_3 = A SHARP 3;
    A_DOUBLE_SHARP_3 = A DOUBLE_SHARP 3;
    B_DOUBLE_FLAT_3 = B DOUBLE_FLAT 3;
    B_FLAT_3 = B FLAT 3;
    B_NATURAL_3 = B NATURAL 3;
    B_SHARP_3 = B SHARP 3;
    B_DOUBLE_SHARP_3 = B DOUBLE_SHARP 3;
    C_DOUBLE_FLAT_4 = C DOUBLE_FLAT 4;
    C_FLAT_4 = C FLAT 4;
    C_NATURAL_4 = C NATURAL 4;
    C_SHARP_4 = C SHARP 4;
    C_DOUBLE_SHARP_4 = C DOUBLE_SHARP 4;
    D_DOUBLE_FLAT_4 = D DOUBLE_FLAT 4;
    D_FLAT_4 = D FLAT 4;
    D_NATURAL_4 = D NATURAL 4;
    D_SHARP_4 = D SHARP 4;
    D_DOUBLE_SHARP_4 = D DOUBLE_SHARP 4;
    E_DOUBLE_FLAT_4 = E DOUBLE_FLAT 4;
    E_FLAT_4 = E FLAT 4;
    E_NATURAL_4 = E NATURAL 4;
    E_SHARP_4 = E SHARP 4;
    E_DOUBLE_SHARP_4 = E DOUBLE_SHARP 4;
    F_DOUBLE_FLAT_4 = F DOUBLE_FLAT 4;
    F_FLAT_4 = F FLAT 4;
    F_NATURAL_4 = F NATURAL 4;
    F_SHARP_4 = F SHARP 4;
    F_DOUBLE_SHARP_4 = F DOUBLE_SHARP 4;
    G_DOUBLE_FLAT_4 = G DOUBLE_FLAT 4;
    G_FLAT_4 = G FLAT 4;
    G_NATURAL_4 = G NATURAL 4;
    G_SHARP_4 = G SHARP 4;
    G_DOUBLE_SHARP_4 = G DOUBLE_SHARP 4;
    A_DOUBLE_FLAT_4 = A DOUBLE_FLAT 4;
    A_FLAT_4 = A FLAT 4;
    A_NATURAL_4 = A NATURAL 4;
    A_SHARP_4 = A SHARP 4;
    A_DOUBLE_SHARP_4 = A DOUBLE_SHARP 4;
    B_DOUBLE_FLAT_4 = B DOUBLE_FLAT 4;
    B_FLAT_4 = B FLAT 4;
    B_NATURAL_4 = B NATURAL 4;
    B_SHARP_4 = B SHARP 4;
    B_DOUBLE_SHARP_4 = B DOUBLE_SHARP 4;
    C_DOUBLE_FLAT_5 = C DOUBLE_FLAT 5;
    C_FLAT_5 = C FLAT 5;
    C_NATURAL_5 = C NATURAL 5;
    C_SHARP_5 = C SHARP 5;
    C_DOUBLE_SHARP_5 = C DOUBLE_SHARP 5;
    D_DOUBLE_FLAT_5 = D DOUBLE_FLAT 5;
    D_FLAT_5 = D FLAT 5;
    D_NATURAL_5 = D NATURAL 5;
    D_SHARP_5 = D SHARP 5;
    D_DOUBLE_SHARP_5 = D DOUBLE_SHARP 5;
    E_DOUBLE_FLAT_5 = E DOUBLE_FLAT 5;
    E_FLAT_5 = E FLAT 5;
    E_NATURAL_5 = E NATURAL 5;
    E_SHARP_5 = E SHARP 5;
    E_DOUBLE_SHARP_5 = E DOUBLE_SHARP 5;
    F_DOUBLE_FLAT_5 = F DOUBLE_FLAT 5;
    F_FLAT_5 = F FLAT 5;
    F_NATURAL_5 = F NATURAL 5;
    F_SHARP_5 = F SHARP 5;
    F_DOUBLE_SHARP_5 = F DOUBLE_SHARP 5;
    G_DOUBLE_FLAT_5 = G DOUBLE_FLAT 5;
    G_FLAT_5 = G FLAT 5;
    G_NATURAL_5 = G NATURAL 5;
    G_SHARP_5 = G SHARP 5;
    G_DOUBLE_SHARP_5 = G DOUBLE_SHARP 5;
    A_DOUBLE_FLAT_5 = A DOUBLE_FLAT 5;
    A_FLAT_5 = A FLAT 5;
    A_NATURAL_5 = A NATURAL 5;
    A_SHARP_5 = A SHARP 5;
    A_DOUBLE_SHARP_5 = A DOUBLE_SHARP 5;
    B_DOUBLE_FLAT_5 = B DOUBLE_FLAT 5;
    B_FLAT_5 = B FLAT 5;
    B_NATURAL_5 = B NATURAL 5;
    B_SHARP_5 = B SHARP 5;
    B_DOUBLE_SHARP_5 = B DOUBLE_SHARP 5;
    C_DOUBLE_FLAT_6 = C DOUBLE_FLAT 6;
    C_FLAT_6 = C FLAT 6;
    C_NATURAL_6 = C NATURAL 6;
    C_SHARP_6 = C SHARP 6;
    C_DOUBLE_SHARP_6 = C DOUBLE_SHARP 6;
    D_DOUBLE_FLAT_6 = D DOUBLE_FLAT 6;
    D_FLAT_6 = D FLAT 6;
    D_NATURAL_6 = D NATURAL 6;
    D_SHARP_6 = D SHARP 6;
    D_DOUBLE_SHARP_6 = D DOUBLE_SHARP 6;
    E_DOUBLE_FLAT_6 = E DOUBLE_FLAT 6;
    E_FLAT_6 = E FLAT 6;
    E_NATURAL_6 = E NATURAL 6;
    E_SHARP_6 = E SHARP 6;
    E_DOUBLE_SHARP_6 = E DOUBLE_SHARP 6;
    F_DOUBLE_FLAT_6 = F DOUBLE_FLAT 6;
    F_FLAT_6 = F FLAT 6;
    F_NATURAL_6 = F NATURAL 6;
    F_SHARP_6 = F SHARP 6;
    F_DOUBLE_SHARP_6 = F DOUBLE_SHARP 6;
    G_DOUBLE_FLAT_6 = G DOUBLE_FLAT 6;
    G_FLAT_6 = G FLAT 6;
    G_NATURAL_6 = G NATURAL 6;
    G_SHARP_6 = G SHARP 6;
    G_DOUBLE_SHARP_6 = G DOUBLE_SHARP 6;
    A_DOUBLE_FLAT_6 = A DOUBLE_FLAT 6;
    A_FLAT_6 = A FLAT 6;
    A_NATURAL_6 = A NATURAL 6;
    A_SHARP_6 = A SHARP 6;
    A_DOUBLE_SHARP_6 = A DOUBLE_SHARP 6;
    B_DOUBLE_FLAT_6 = B DOUBLE_FLAT 6;
    B_FLAT_6 = B FLAT 6;
    B_NATURAL_6 = B NATURAL 6;
    B_SHARP_6 = B SHARP 6;
    B_DOUBLE_SHARP_6 = B DOUBLE_SHARP 6;
    C_DOUBLE_FLAT_7 = C DOUBLE_FLAT 7;
    C_FLAT_7 = C FLAT 7;
    C_NATURAL_7 = C NATURAL 7;
    C_SHARP_7 = C SHARP 7;
    C_DOUBLE_SHARP_7 = C DOUBLE_SHARP 7;
    D_DOUBLE_FLAT_7 = D DOUBLE_FLAT 7;
    D_FLAT_7 = D FLAT 7;
    D_NATURAL_7 = D NATURAL 7;
    D_SHARP_7 = D SHARP 7;
    D_DOUBLE_SHARP_7 = D DOUBLE_SHARP 7;
    E_DOUBLE_FLAT_7 = E DOUBLE_FLAT 7;
    E_FLAT_7 = E FLAT 7;
    E_NATURAL_7 = E NATURAL 7;
    E_SHARP_7 = E SHARP 7;
    E_DOUBLE_SHARP_7 = E DOUBLE_SHARP 7;
    F_DOUBLE_FLAT_7 = F DOUBLE_FLAT 7;
    F_FLAT_7 = F FLAT 7;
    F_NATURAL_7 = F NATURAL 7;
    F_SHARP_7 = F SHARP 7;
    F_DOUBLE_SHARP_7 = F DOUBLE_SHARP 7;
    G_DOUBLE_FLAT_7 = G DOUBLE_FLAT 7;
    G_FLAT_7 = G FLAT 7;
    G_NATURAL_7 = G NATURAL 7;
    G_SHARP_7 = G SHARP 7;
    G_DOUBLE_SHARP_7 = G DOUBLE_SHARP 7;
    A_DOUBLE_FLAT_7 = A DOUBLE_FLAT 7;
    A_FLAT_7 = A FLAT 7;
    A_NATURAL_7 = A NATURAL 7;
    A_SHARP_7 = A SHARP 7;
    A_DOUBLE_SHARP_7 = A DOUBLE_SHARP 7;
    B_DOUBLE_FLAT_7 = B DOUBLE_FLAT 7;
    B_FLAT_7 = B FLAT 7;
    B_NATURAL_7 = B NATURAL 7;
    B_SHARP_7 = B SHARP 7;
    B_DOUBLE_SHARP_7 = B DOUBLE_SHARP 7;
    C_DOUBLE_FLAT_8 = C DOUBLE_FLAT 8;
    C_FLAT_8 = C FLAT 8;
    C_NATURAL_8 = C NATURAL 8;
    C_SHARP_8 = C SHARP 8;
    C_DOUBLE_SHARP_8 = C DOUBLE_SHARP 8;
    D_DOUBLE_FLAT_8 = D DOUBLE_FLAT 8;
    D_FLAT_8 = D FLAT 8;
    D_NATURAL_8 = D NATURAL 8;
    D_SHARP_8 = D SHARP 8;
    D_DOUBLE_SHARP_8 = D DOUBLE_SHARP 8;
    E_DOUBLE_FLAT_8 = E DOUBLE_FLAT 8;
    E_FLAT_8 = E FLAT 8;
    E_NATURAL_8 = E NATURAL 8;
    E_SHARP_8 = E SHARP 8;
    E_DOUBLE_SHARP_8 = E DOUBLE_SHARP 8;
    F_DOUBLE_FLAT_8 = F DOUBLE_FLAT 8;
    F_FLAT_8 = F FLAT 8;
    F_NATURAL_8 = F NATURAL 8;
    F_SHARP_8 = F SHARP 8;
    F_DOUBLE_SHARP_8 = F DOUBLE_SHARP 8;
    G_DOUBLE_FLAT_8 = G DOUBLE_FLAT 8;
    G_FLAT_8 = G FLAT 8;
    G_NATURAL_8 = G NATURAL 8;
    G_SHARP_8 = G SHARP 8;
    G_DOUBLE_SHARP_8 = G DOUBLE_SHARP 8;
    A_DOUBLE_FLAT_8 = A DOUBLE_FLAT 8;
    A_FLAT_8 = A FLAT 8;
    A_NATURAL_8 = A NATURAL 8;
    A_SHARP_8 = A SHARP 8;
    A_DOUBLE_SHARP_8 = A DOUBLE_SHARP 8;
    B_DOUBLE_FLAT_8 = B DOUBLE_FLAT 8;
    B_FLAT_8 = B FLAT 8;
    B_NATURAL_8 = B NATURAL 8;
    B_SHARP_8 = B SHARP 8;
    B_DOUBLE_SHARP_8 = B DOUBLE_SHARP 8;
}
