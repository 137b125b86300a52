//! Font attributes and the aggregate font selection.
//!
//! `font-family`, `font-size`, `font-style`, `font-weight` and `font-stretch`
//! each parse on their own. [`FontSelection`] gathers whichever of them an
//! element carries and, at bind time, asks the document's font service for a
//! single matching face.

use svgcss::{AttributeMap, parse_style_attribute};

use super::Keyword;
use crate::context::{FontRequest, NodeLookup};
use crate::property::Resolution;
use crate::values::{Dimension, parse_number};
use crate::variant::FontHandle;

/// The attribute names a font selection reads.
pub const FONT_ATTRIBUTES: [&str; 5] = [
    "font-family",
    "font-size",
    "font-style",
    "font-weight",
    "font-stretch",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl Keyword for FontStyle {
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("normal", Self::Normal),
        ("italic", Self::Italic),
        ("oblique", Self::Oblique),
    ];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontStretch {
    ExtraCondensed,
    Condensed,
    SemiCondensed,
    #[default]
    Normal,
    SemiExpanded,
    Expanded,
    ExtraExpanded,
}

impl Keyword for FontStretch {
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("extra-condensed", Self::ExtraCondensed),
        ("condensed", Self::Condensed),
        ("semi-condensed", Self::SemiCondensed),
        ("normal", Self::Normal),
        ("semi-expanded", Self::SemiExpanded),
        ("expanded", Self::Expanded),
        ("extra-expanded", Self::ExtraExpanded),
    ];
}

/// A numeric font weight: 100 through 900 in steps of 100, or 1000.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl FontWeight {
    pub const NORMAL: Self = FontWeight(400);
    pub const BOLD: Self = FontWeight(700);

    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "normal" => Some(Self::NORMAL),
            "bold" => Some(Self::BOLD),
            number => {
                let value = parse_number(number)?;
                let valid = value.fract() == 0.0
                    && ((100.0..=900.0).contains(&value) && value % 100.0 == 0.0 || value == 1000.0);
                valid.then_some(FontWeight(value as u16))
            }
        }
    }

    pub(crate) fn load(&mut self, text: &str) -> Resolution {
        match Self::parse(text) {
            Some(weight) => {
                *self = weight;
                Resolution::Resolved
            }
            None => Resolution::Unset,
        }
    }
}

pub(crate) fn load_family(family: &mut String, text: &str) -> Resolution {
    *family = text.trim().to_string();
    Resolution::Resolved
}

/// `font-size`. Always resolved at bind time, against the inherited size and dpi.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSize {
    dimension: Dimension,
    pixels: f64,
}

impl Default for FontSize {
    fn default() -> Self {
        Self {
            dimension: Dimension::default(),
            pixels: 16.0,
        }
    }
}

impl FontSize {
    pub fn pixels(&self) -> f64 {
        self.pixels
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub(crate) fn load(&mut self, text: &str) -> Resolution {
        match Dimension::parse(text) {
            Some(dimension) if dimension.value() >= 0.0 => {
                self.dimension = dimension;
                Resolution::Deferred
            }
            _ => Resolution::Unset,
        }
    }

    pub(crate) fn bind<L: NodeLookup + ?Sized>(&mut self, nodes: &L) -> Resolution {
        self.pixels = self
            .dimension
            .calculate_pixels(nodes.font_size(), 0.0, nodes.dpi());
        Resolution::Resolved
    }
}

/// The font described by an element's font attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontSelection {
    pub family: Option<String>,
    /// Has no value when the element leaves the size to inheritance.
    pub size: Dimension,
    pub style: FontStyle,
    pub weight: FontWeight,
    pub stretch: FontStretch,
    pixels: f64,
    font: Option<FontHandle>,
}

impl FontSelection {
    /// Serializes the font attributes present in `attrs` as declaration text,
    /// the raw form a selection is loaded from.
    pub fn declarations(attrs: &AttributeMap) -> String {
        FONT_ATTRIBUTES
            .iter()
            .filter_map(|&name| attrs.get(name).map(|value| format!("{name}: {value}")))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn font(&self) -> Option<FontHandle> {
        self.font
    }

    /// The resolved size in pixels.
    pub fn pixels(&self) -> f64 {
        self.pixels
    }

    /// Parses `name: value` declarations of the font attributes.
    ///
    /// Deferred when at least one attribute was recognized.
    pub(crate) fn load(&mut self, text: &str) -> Resolution {
        *self = FontSelection::default();
        let mut any = false;

        for (name, value) in parse_style_attribute(text).iter() {
            let recognized = match name {
                "font-family" => {
                    self.family = Some(value.trim().to_string());
                    true
                }
                "font-size" => match Dimension::parse(value).filter(|d| d.value() >= 0.0) {
                    Some(size) => {
                        self.size = size;
                        true
                    }
                    None => false,
                },
                "font-style" => FontStyle::from_keyword(value)
                    .map(|style| self.style = style)
                    .is_some(),
                "font-weight" => FontWeight::parse(value)
                    .map(|weight| self.weight = weight)
                    .is_some(),
                "font-stretch" => FontStretch::from_keyword(value)
                    .map(|stretch| self.stretch = stretch)
                    .is_some(),
                _ => false,
            };
            any |= recognized;
        }

        if any {
            Resolution::Deferred
        } else {
            Resolution::Unset
        }
    }

    pub fn request(&self) -> FontRequest {
        FontRequest {
            family: self.family.clone(),
            size: self.pixels,
            style: self.style,
            weight: self.weight,
            stretch: self.stretch,
        }
    }

    pub(crate) fn bind<L: NodeLookup + ?Sized>(&mut self, nodes: &L) -> Resolution {
        self.pixels = if self.size.has_value() {
            self.size.calculate_pixels(nodes.font_size(), 0.0, nodes.dpi())
        } else {
            nodes.font_size()
        };

        let Some(service) = nodes.font_service() else {
            log::debug!("no font service; font selection left unset");
            return Resolution::Unset;
        };

        self.font = service.select_font(&self.request());
        if self.font.is_some() {
            Resolution::Resolved
        } else {
            log::debug!("no font matched {:?}", self.request());
            Resolution::Unset
        }
    }
}
