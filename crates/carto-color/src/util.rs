//! Numeric helpers.

/// Rounds `value` to `decimals` decimal places.
///
/// The decimal point is shifted by writing the number in exponential
/// notation (`"1.005e2"`) and parsing it back, rather than multiplying by a
/// power of ten. This keeps decimal inputs such as `1.005` from rounding the
/// wrong way due to binary representation error. Halves round up, and
/// non-finite values are returned unchanged.
///
/// # Example
///
/// ```rust
/// use carto_color::round;
///
/// assert_eq!(round(1.005, 2), 1.01);
/// assert_eq!(round(0.5, 2), 0.5);
/// ```
pub fn round(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let shifted: f64 = match format!("{}e{}", value, decimals).parse() {
        Ok(shifted) => shifted,
        Err(_) => return value,
    };
    let rounded = round_half_up(shifted);
    let result: f64 = format!("{}e-{}", rounded, decimals)
        .parse()
        .unwrap_or(value);

    // normalize -0
    if result == 0.0 {
        0.0
    } else {
        result
    }
}

fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
