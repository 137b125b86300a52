//! `fill` and `stroke`.

use svgcss::RgbaColor;

use crate::context::{BindContext, DrawContext, NodeId, NodeLookup, resolve_variant};
use crate::property::Resolution;
use crate::values::split_url_fallback;
use crate::variant::{PaintSource, TypedValue};

use super::marker::bind_reference;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintTarget {
    Fill,
    Stroke,
}

/// What a paint attribute said.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PaintValue {
    #[default]
    Unset,
    /// The literal `none`: nothing is painted.
    None,
    Color(RgbaColor),
    /// A paint server reference, with the color to use if it cannot be resolved.
    Url {
        href: String,
        fallback: Option<Box<PaintValue>>,
        node: Option<NodeId>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    pub target: PaintTarget,
    pub value: PaintValue,
}

/// Parses the non-url forms.
fn parse_plain(text: &str) -> Option<PaintValue> {
    if text == "none" {
        return Some(PaintValue::None);
    }
    if text == "inherit" || text.eq_ignore_ascii_case("currentColor") {
        return None;
    }
    match RgbaColor::parse(text) {
        Ok(color) => Some(PaintValue::Color(color)),
        Err(err) => {
            log::debug!("unusable paint '{text}': {err}");
            None
        }
    }
}

impl Paint {
    pub fn new(target: PaintTarget) -> Self {
        Self {
            target,
            value: PaintValue::Unset,
        }
    }

    /// Whether the value is the literal `none`.
    pub fn is_explicit_none(&self) -> bool {
        self.value == PaintValue::None
    }

    pub fn node(&self) -> Option<NodeId> {
        match self.value {
            PaintValue::Url { node, .. } => node,
            _ => None,
        }
    }

    pub(crate) fn load(&mut self, text: &str) -> Resolution {
        if let Some((url, rest)) = split_url_fallback(text) {
            let fallback = if rest.is_empty() {
                None
            } else {
                parse_plain(rest).map(Box::new)
            };
            self.value = PaintValue::Url {
                href: url.to_string(),
                fallback,
                node: None,
            };
            return Resolution::Deferred;
        }

        match parse_plain(text) {
            Some(value) => {
                self.value = value;
                Resolution::Resolved
            }
            None => {
                self.value = PaintValue::Unset;
                Resolution::Unset
            }
        }
    }

    pub(crate) fn bind(&mut self, ctx: &mut dyn BindContext) -> Resolution {
        let PaintValue::Url { href, fallback, node } = &mut self.value else {
            return Resolution::Resolved;
        };

        if let Some(target) = bind_reference(ctx, href) {
            *node = Some(target);
            return Resolution::Resolved;
        }

        match fallback.take() {
            Some(value) => {
                self.value = *value;
                Resolution::Resolved
            }
            None => Resolution::Unset,
        }
    }

    /// The paint's own value; a bound reference yields `Reference`.
    pub(crate) fn variant(&self) -> TypedValue {
        match &self.value {
            PaintValue::Color(color) => TypedValue::Color(*color),
            PaintValue::Url {
                node: Some(node), ..
            } => TypedValue::Reference(*node),
            _ => TypedValue::Empty,
        }
    }

    pub(crate) fn draw(&self, ctx: &mut dyn DrawContext, nodes: &dyn NodeLookup) {
        if self.is_explicit_none() {
            match self.target {
                PaintTarget::Fill => ctx.no_fill(),
                PaintTarget::Stroke => ctx.no_stroke(),
            }
            return;
        }

        let resolved = resolve_variant(nodes, self.variant());
        let source = resolved.as_paint().unwrap_or_else(|| {
            log::warn!("{:?} paint resolved to {resolved:?}; using sentinel color", self.target);
            PaintSource::Color(RgbaColor::SENTINEL)
        });

        match self.target {
            PaintTarget::Fill => ctx.fill(source),
            PaintTarget::Stroke => ctx.stroke(source),
        }
    }
}
