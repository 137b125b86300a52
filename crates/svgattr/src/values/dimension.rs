//! Lengths with units.

use std::fmt;

use nom::{IResult, bytes::complete::take_while};

use super::number::number;

/// Length units accepted in SVG attribute values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Units {
    /// A bare number in user space.
    #[default]
    User,
    Px,
    Pt,
    Pc,
    Mm,
    Cm,
    In,
    Percent,
    Em,
    Ex,
}

impl Units {
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Some(match suffix {
            "" => Units::User,
            "px" => Units::Px,
            "pt" => Units::Pt,
            "pc" => Units::Pc,
            "mm" => Units::Mm,
            "cm" => Units::Cm,
            "in" => Units::In,
            "%" => Units::Percent,
            "em" => Units::Em,
            "ex" => Units::Ex,
            _ => return None,
        })
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Units::User => "",
            Units::Px => "px",
            Units::Pt => "pt",
            Units::Pc => "pc",
            Units::Mm => "mm",
            Units::Cm => "cm",
            Units::In => "in",
            Units::Percent => "%",
            Units::Em => "em",
            Units::Ex => "ex",
        }
    }
}

fn unit_suffix(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_ascii_alphabetic() || c == '%')(input)
}

/// A number with units, converted to pixels on demand.
///
/// ```
/// use svgattr::values::{Dimension, Units};
///
/// let d = Dimension::parse("1in").unwrap();
/// assert_eq!(d.units(), Units::In);
/// assert_eq!(d.calculate_pixels(1.0, 0.0, 96.0), 96.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dimension {
    value: f64,
    units: Units,
    has_value: bool,
}

impl Dimension {
    pub fn new(value: f64, units: Units) -> Self {
        Self {
            value,
            units,
            has_value: true,
        }
    }

    /// Parses `<number><units>`; unknown units are rejected.
    pub fn parse(text: &str) -> Option<Self> {
        let (rest, value) = number(text.trim()).ok()?;
        let (rest, suffix) = unit_suffix(rest).ok()?;
        if !rest.is_empty() {
            return None;
        }
        let units = Units::from_suffix(&suffix.to_ascii_lowercase())?;
        Some(Self::new(value, units))
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn units(&self) -> Units {
        self.units
    }

    /// `false` only for the default dimension, which was never given a number.
    pub fn has_value(&self) -> bool {
        self.has_value
    }

    /// Whether converting to pixels depends on document context (dpi or a reference length).
    pub fn needs_context(&self) -> bool {
        !matches!(self.units, Units::User | Units::Px)
    }

    /// Converts to pixels.
    ///
    /// `length` is the reference length for `%`, `em` and `ex`; `origin` is
    /// added to percentages.
    pub fn calculate_pixels(&self, length: f64, origin: f64, dpi: f64) -> f64 {
        match self.units {
            Units::User | Units::Px => self.value,
            Units::Pt => self.value / 72.0 * dpi,
            Units::Pc => self.value / 6.0 * dpi,
            Units::Mm => self.value / 25.4 * dpi,
            Units::Cm => self.value / 2.54 * dpi,
            Units::In => self.value * dpi,
            Units::Em => self.value * length,
            Units::Ex => self.value * length * 0.5,
            Units::Percent => origin + self.value.clamp(0.0, 100.0) / 100.0 * length,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.units.suffix())
    }
}
