/// Convert a floating value to an integer if it has no fractional part.
///
/// Returns `None` for NaN, infinities, fractional values, and values outside
/// the `i32` range.
pub fn integral(x: f64) -> Option<i32> {
    if !x.is_finite() || x.fract() != 0.0 {
        return None;
    }
    if x < i32::MIN as f64 || x > i32::MAX as f64 {
        return None;
    }
    Some(x as i32)
}

/// Check that a reference frequency is finite and strictly positive.
pub fn valid_frequency(frequency: f64) -> crate::Result<()> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(crate::Error::InvalidParameter {
            name: "frequency",
            value: frequency.to_string(),
            reason: "must be finite and > 0",
        });
    }
    Ok(())
}

/// Check that a generating ratio lies strictly between 1 and 2.
///
/// Anything outside that range cannot stand in for a fifth reduced into one
/// octave.
pub fn valid_ratio(ratio: f64) -> crate::Result<()> {
    if !ratio.is_finite() || ratio <= 1.0 || ratio >= 2.0 {
        return Err(crate::Error::InvalidParameter {
            name: "fifth_ratio",
            value: ratio.to_string(),
            reason: "must lie strictly between 1 and 2",
        });
    }
    Ok(())
}
