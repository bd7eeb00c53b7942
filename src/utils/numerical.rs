/// Remainder of `a / n` that always lands in `0..n`.
///
/// Offsets on the letter and semitone circles go negative below the origin
/// (C in octave 0), so the plain `%` operator is not enough.
///
/// # Example
/// ```
/// use pitchcraft::utils::positive_modulus;
///
/// assert_eq!(positive_modulus(-1, 7), 6);
/// assert_eq!(positive_modulus(7, 7), 0);
/// ```
pub const fn positive_modulus(a: i32, n: i32) -> i32 {
    ((a % n) + n) % n
}

/// Integer division rounded toward negative infinity.
///
/// Pairs with [`positive_modulus`]: `floor_div(a, n) * n + positive_modulus(a, n) == a`.
pub const fn floor_div(a: i32, n: i32) -> i32 {
    (a - positive_modulus(a, n)) / n
}
