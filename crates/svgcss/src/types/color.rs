//! RGBA color type with parsing for the SVG paint syntaxes.
//!
//! ## Supported Color Formats
//!
//! - **Hex**: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - **RGB**: `rgb(r, g, b)`, `rgba(r, g, b, a)`; channels may be integers or percentages
//! - **HSL**: `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)`
//! - **Named**: the SVG color keywords, plus `transparent`
//!
//! Function names are matched case-insensitively, so `RGB(...)` and `RGBA(...)`
//! parse the same as their lowercase forms.

use std::fmt;

use thiserror::Error;

use super::named_colors;

/// Error returned when color parsing fails.
#[derive(Error, Clone, Debug, PartialEq)]
#[error("{message}")]
pub struct ColorParseError {
    /// Human-readable description of the parsing error.
    pub message: String,
}

impl ColorParseError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A straight-alpha 8-bit RGBA color.
///
/// # Examples
///
/// ```
/// use svgcss::RgbaColor;
///
/// let red = RgbaColor::parse("#f00").unwrap();
/// assert_eq!(red, RgbaColor::rgb(255, 0, 0));
///
/// let half = RgbaColor::parse("rgba(0, 0, 255, 0.5)").unwrap();
/// assert_eq!(half.a, 128);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha component (0 = transparent, 255 = opaque).
    pub a: u8,
}

impl Default for RgbaColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl RgbaColor {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Opaque red, drawn when a paint value cannot be honored.
    pub const SENTINEL: Self = Self::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns a copy of this color with the specified alpha value.
    pub fn with_alpha(self, alpha: u8) -> Self {
        Self { a: alpha, ..self }
    }

    /// Returns the color packed as `0xAARRGGBB`.
    pub fn to_u32(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Parses a color from CSS/SVG syntax.
    ///
    /// Surrounding whitespace is ignored. Keywords such as `none`, `inherit` and
    /// `currentColor` are not colors; callers that accept them should check for
    /// them first.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ColorParseError::new("empty color string"));
        }

        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        let lower = input.to_ascii_lowercase();

        if lower == "transparent" {
            return Ok(Self::TRANSPARENT);
        }

        if lower.starts_with("rgb") {
            return Self::parse_rgb_func(&lower);
        }

        if lower.starts_with("hsl") {
            return Self::parse_hsl_func(&lower);
        }

        Self::parse_named(&lower)
    }

    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let chars: Vec<char> = hex.trim().chars().collect();

        match chars.len() {
            3 => {
                let r = Self::parse_hex_digit(chars[0])? * 17;
                let g = Self::parse_hex_digit(chars[1])? * 17;
                let b = Self::parse_hex_digit(chars[2])? * 17;
                Ok(Self::rgb(r, g, b))
            }
            4 => {
                let r = Self::parse_hex_digit(chars[0])? * 17;
                let g = Self::parse_hex_digit(chars[1])? * 17;
                let b = Self::parse_hex_digit(chars[2])? * 17;
                let a = Self::parse_hex_digit(chars[3])? * 17;
                Ok(Self::rgba(r, g, b, a))
            }
            6 => {
                let r = Self::parse_hex_pair(chars[0], chars[1])?;
                let g = Self::parse_hex_pair(chars[2], chars[3])?;
                let b = Self::parse_hex_pair(chars[4], chars[5])?;
                Ok(Self::rgb(r, g, b))
            }
            8 => {
                let r = Self::parse_hex_pair(chars[0], chars[1])?;
                let g = Self::parse_hex_pair(chars[2], chars[3])?;
                let b = Self::parse_hex_pair(chars[4], chars[5])?;
                let a = Self::parse_hex_pair(chars[6], chars[7])?;
                Ok(Self::rgba(r, g, b, a))
            }
            n => Err(ColorParseError::new(format!("invalid hex color length: {n}"))),
        }
    }

    fn parse_hex_digit(c: char) -> Result<u8, ColorParseError> {
        c.to_digit(16)
            .map(|d| d as u8)
            .ok_or_else(|| ColorParseError::new(format!("invalid hex digit: {c}")))
    }

    fn parse_hex_pair(c1: char, c2: char) -> Result<u8, ColorParseError> {
        let high = Self::parse_hex_digit(c1)?;
        let low = Self::parse_hex_digit(c2)?;
        Ok(high * 16 + low)
    }

    /// Extracts the comma-separated arguments between the parentheses.
    fn function_args<'a>(input: &'a str, name: &str) -> Result<Vec<&'a str>, ColorParseError> {
        let start = input
            .find('(')
            .ok_or_else(|| ColorParseError::new(format!("missing '(' in {name} function")))?;
        let end = input
            .rfind(')')
            .filter(|&end| end > start)
            .ok_or_else(|| ColorParseError::new(format!("missing ')' in {name} function")))?;

        Ok(input[start + 1..end].split(',').map(str::trim).collect())
    }

    fn parse_rgb_func(input: &str) -> Result<Self, ColorParseError> {
        let parts = Self::function_args(input, "rgb")?;
        if parts.len() < 3 {
            return Err(ColorParseError::new("rgb requires at least 3 components"));
        }

        let r = Self::parse_channel(parts[0])?;
        let g = Self::parse_channel(parts[1])?;
        let b = Self::parse_channel(parts[2])?;
        let a = match parts.get(3) {
            Some(alpha) => Self::parse_alpha(alpha)?,
            None => 255,
        };

        Ok(Self::rgba(r, g, b, a))
    }

    fn parse_hsl_func(input: &str) -> Result<Self, ColorParseError> {
        let parts = Self::function_args(input, "hsl")?;
        if parts.len() < 3 {
            return Err(ColorParseError::new("hsl requires at least 3 components"));
        }

        let hue_text = parts[0].strip_suffix("deg").unwrap_or(parts[0]);
        let h = Self::parse_f32(hue_text)?;
        let s = Self::parse_percentage(parts[1])?;
        let l = Self::parse_percentage(parts[2])?;
        let a = match parts.get(3) {
            Some(alpha) => Self::parse_alpha(alpha)?,
            None => 255,
        };

        let (r, g, b) = Self::hsl_to_rgb(h, s, l);
        Ok(Self::rgba(r, g, b, a))
    }

    /// Parses an rgb channel: `0..255` or `0%..100%`, clamped.
    fn parse_channel(s: &str) -> Result<u8, ColorParseError> {
        let value = match s.strip_suffix('%') {
            Some(pct) => Self::parse_f32(pct)? / 100.0 * 255.0,
            None => Self::parse_f32(s)?,
        };
        Ok(value.round().clamp(0.0, 255.0) as u8)
    }

    /// Parses an alpha value: `0..1` or `0%..100%`, clamped.
    fn parse_alpha(s: &str) -> Result<u8, ColorParseError> {
        let value = match s.strip_suffix('%') {
            Some(pct) => Self::parse_f32(pct)? / 100.0,
            None => Self::parse_f32(s)?,
        };
        Ok((value.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    fn parse_f32(s: &str) -> Result<f32, ColorParseError> {
        s.trim()
            .parse()
            .map_err(|_| ColorParseError::new(format!("invalid number: {s}")))
    }

    fn parse_percentage(s: &str) -> Result<f32, ColorParseError> {
        let s = s.trim();
        let number = s.strip_suffix('%').unwrap_or(s);
        Ok((Self::parse_f32(number)? / 100.0).clamp(0.0, 1.0))
    }

    fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
        let h = h.rem_euclid(360.0) / 360.0;

        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return (v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let r = Self::hue_to_rgb(p, q, h + 1.0 / 3.0);
        let g = Self::hue_to_rgb(p, q, h);
        let b = Self::hue_to_rgb(p, q, h - 1.0 / 3.0);

        (
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
        )
    }

    fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    fn parse_named(name: &str) -> Result<Self, ColorParseError> {
        named_colors::lookup(name)
            .map(|(r, g, b)| Self::rgb(r, g, b))
            .ok_or_else(|| ColorParseError::new(format!("unknown color name: {name}")))
    }
}

impl fmt::Display for RgbaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl std::str::FromStr for RgbaColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
