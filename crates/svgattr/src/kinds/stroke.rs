//! Fill rule and the stroke attributes.

use super::Keyword;
use crate::context::NodeLookup;
use crate::property::Resolution;
use crate::values::{Dimension, Units, parse_number};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

impl Keyword for FillRule {
    const KEYWORDS: &'static [(&'static str, Self)] =
        &[("nonzero", Self::NonZero), ("evenodd", Self::EvenOdd)];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    RoundReverse,
    Square,
    Triangle,
    TriangleReverse,
}

impl Keyword for LineCap {
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("butt", Self::Butt),
        ("round", Self::Round),
        ("round-reverse", Self::RoundReverse),
        ("square", Self::Square),
        ("triangle", Self::Triangle),
        ("triangle-reverse", Self::TriangleReverse),
    ];
}

/// Which end of a stroke a cap applies to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CapSide {
    #[default]
    Both,
    Start,
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
    MiterClip,
}

impl Keyword for LineJoin {
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("miter", Self::Miter),
        ("round", Self::Round),
        ("bevel", Self::Bevel),
        ("miter-clip", Self::MiterClip),
    ];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VectorEffect {
    #[default]
    None,
    NonScalingStroke,
    NonScalingSize,
    NonRotation,
    FixedPosition,
}

impl Keyword for VectorEffect {
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("none", Self::None),
        ("non-scaling-stroke", Self::NonScalingStroke),
        ("non-scaling-size", Self::NonScalingSize),
        ("non-rotation", Self::NonRotation),
        ("fixed-position", Self::FixedPosition),
    ];
}

pub const DEFAULT_MITER_LIMIT: f64 = 4.0;

pub(crate) fn load_miter_limit(limit: &mut f64, text: &str) -> Resolution {
    match parse_number(text) {
        Some(value) => {
            *limit = value.clamp(1.0, 10.0);
            Resolution::Resolved
        }
        None => Resolution::Unset,
    }
}

/// `stroke-width`.
///
/// Plain and `px` widths resolve while parsing. Absolute units such as `pt` or
/// `mm` need the document dpi, and `em`/`ex` need the inherited font size, so
/// those wait for binding. Percentages are not supported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeWidth {
    dimension: Dimension,
    pixels: f64,
}

impl Default for StrokeWidth {
    fn default() -> Self {
        Self {
            dimension: Dimension::new(1.0, Units::User),
            pixels: 1.0,
        }
    }
}

impl StrokeWidth {
    pub fn pixels(&self) -> f64 {
        self.pixels
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub(crate) fn load(&mut self, text: &str) -> Resolution {
        let Some(dimension) = Dimension::parse(text) else {
            return Resolution::Unset;
        };
        if dimension.value() < 0.0 || dimension.units() == Units::Percent {
            return Resolution::Unset;
        }

        self.dimension = dimension;
        if dimension.needs_context() {
            Resolution::Deferred
        } else {
            self.pixels = dimension.value();
            Resolution::Resolved
        }
    }

    pub(crate) fn bind<L: NodeLookup + ?Sized>(&mut self, nodes: &L) -> Resolution {
        self.pixels = self
            .dimension
            .calculate_pixels(nodes.font_size(), 0.0, nodes.dpi());
        Resolution::Resolved
    }
}
