//! Angles.

use std::f64::consts::PI;

use super::number::number;

/// Parses an angle and returns it in radians.
///
/// Units are `deg` (the default when none is given), `rad`, `grad` and `turn`.
pub fn parse_angle(text: &str) -> Option<f64> {
    let (units, value) = number(text.trim()).ok()?;
    let radians = match units.trim().to_ascii_lowercase().as_str() {
        "" | "deg" => value.to_radians(),
        "rad" => value,
        "grad" => value * PI / 200.0,
        "turn" => value * 2.0 * PI,
        _ => return None,
    };
    Some(radians)
}
