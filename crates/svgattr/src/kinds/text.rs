//! `text-anchor` and `text-align`.

use super::Keyword;

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl Keyword for TextAnchor {
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("start", Self::Start),
        ("middle", Self::Middle),
        ("end", Self::End),
    ];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Middle,
    #[default]
    Baseline,
    Bottom,
}
