//! The concrete property kinds.
//!
//! Every attribute maps to one [`PropertyKind`] variant. The property wrapper
//! owns the shared state (raw text, flags) and forwards parsing, binding and
//! drawing here, where each kind is handled by a `match`.

pub mod clip;
pub mod font;
pub mod marker;
pub mod misc;
pub mod opacity;
pub mod paint;
pub mod stroke;
pub mod text;
pub mod transform;

use crate::context::{BindContext, DrawContext, NodeLookup};
use crate::property::Resolution;
use crate::variant::TypedValue;

pub use clip::ClipPath;
pub use font::{FontSelection, FontSize, FontStretch, FontStyle, FontWeight};
pub use marker::{MarkerOrient, NodeReference};
pub use misc::{ExtendAxis, ExtendMode, PaintOrder, PaintOrderItem, ViewBox};
pub use opacity::{Opacity, OpacityTarget};
pub use paint::{Paint, PaintTarget, PaintValue};
pub use stroke::{CapSide, FillRule, LineCap, LineJoin, StrokeWidth, VectorEffect};
pub use text::{TextAnchor, VerticalAlign};
pub use transform::Transform;

/// A closed set of keywords mapped to values by exact match.
pub trait Keyword: Sized + Copy + 'static {
    const KEYWORDS: &'static [(&'static str, Self)];

    fn from_keyword(text: &str) -> Option<Self> {
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| *keyword == text)
            .map(|(_, value)| *value)
    }
}

/// Parses a keyword into `slot`, leaving it untouched when the text is not recognized.
pub(crate) fn load_keyword<K: Keyword>(slot: &mut K, text: &str) -> Resolution {
    match K::from_keyword(text) {
        Some(value) => {
            *slot = value;
            Resolution::Resolved
        }
        None => Resolution::Unset,
    }
}

/// The typed payload of a property.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyKind {
    Paint(Paint),
    Transform(Transform),
    Opacity(Opacity),
    FillRule(FillRule),
    StrokeWidth(StrokeWidth),
    MiterLimit(f64),
    LineCap { side: CapSide, cap: LineCap },
    LineJoin(LineJoin),
    VectorEffect(VectorEffect),
    FontSize(FontSize),
    FontFamily(String),
    FontStyle(FontStyle),
    FontWeight(FontWeight),
    FontStretch(FontStretch),
    FontSelection(FontSelection),
    TextAlign(TextAnchor),
    Marker(NodeReference),
    Orient(MarkerOrient),
    ClipPath(ClipPath),
    ViewBox(ViewBox),
    PaintOrder(PaintOrder),
    ExtendMode(ExtendMode),
    /// Kept as text only.
    Raw,
}

impl PropertyKind {
    /// Whether a property of this kind draws itself during a normal draw pass.
    ///
    /// Kinds that return `false` are consulted explicitly by their element.
    pub fn auto_draws(&self) -> bool {
        !matches!(
            self,
            PropertyKind::Transform(_)
                | PropertyKind::Marker(_)
                | PropertyKind::Orient(_)
                | PropertyKind::ClipPath(_)
                | PropertyKind::ViewBox(_)
                | PropertyKind::PaintOrder(_)
                | PropertyKind::ExtendMode(_)
                | PropertyKind::Raw
        )
    }

    /// Parses trimmed, non-empty text.
    pub(crate) fn load(&mut self, text: &str) -> Resolution {
        match self {
            PropertyKind::Paint(paint) => paint.load(text),
            PropertyKind::Transform(transform) => transform.load(text),
            PropertyKind::Opacity(opacity) => opacity.load(text),
            PropertyKind::FillRule(rule) => load_keyword(rule, text),
            PropertyKind::StrokeWidth(width) => width.load(text),
            PropertyKind::MiterLimit(limit) => stroke::load_miter_limit(limit, text),
            PropertyKind::LineCap { cap, .. } => load_keyword(cap, text),
            PropertyKind::LineJoin(join) => load_keyword(join, text),
            PropertyKind::VectorEffect(effect) => load_keyword(effect, text),
            PropertyKind::FontSize(size) => size.load(text),
            PropertyKind::FontFamily(family) => font::load_family(family, text),
            PropertyKind::FontStyle(style) => load_keyword(style, text),
            PropertyKind::FontWeight(weight) => weight.load(text),
            PropertyKind::FontStretch(stretch) => load_keyword(stretch, text),
            PropertyKind::FontSelection(selection) => selection.load(text),
            PropertyKind::TextAlign(anchor) => load_keyword(anchor, text),
            PropertyKind::Marker(reference) => reference.load(text),
            PropertyKind::Orient(orient) => orient.load(text),
            PropertyKind::ClipPath(clip) => clip.load(text),
            PropertyKind::ViewBox(view_box) => view_box.load(text),
            PropertyKind::PaintOrder(order) => order.load(text),
            PropertyKind::ExtendMode(mode) => load_keyword(mode, text),
            PropertyKind::Raw => Resolution::Resolved,
        }
    }

    /// Resolves a deferred value against the document.
    pub(crate) fn bind(&mut self, ctx: &mut dyn BindContext) -> Resolution {
        match self {
            PropertyKind::Paint(paint) => paint.bind(ctx),
            PropertyKind::StrokeWidth(width) => width.bind(&*ctx),
            PropertyKind::FontSize(size) => size.bind(&*ctx),
            PropertyKind::FontSelection(selection) => selection.bind(&*ctx),
            PropertyKind::Marker(reference) => reference.bind(ctx),
            PropertyKind::ClipPath(clip) => clip.bind(ctx),
            _ => Resolution::Resolved,
        }
    }

    /// Issues this kind's drawing call.
    pub(crate) fn draw(&self, ctx: &mut dyn DrawContext, nodes: &dyn NodeLookup) {
        match self {
            PropertyKind::Paint(paint) => paint.draw(ctx, nodes),
            PropertyKind::Transform(transform) => ctx.apply_transform(&transform.matrix),
            PropertyKind::Opacity(opacity) => opacity.draw(ctx),
            PropertyKind::FillRule(rule) => ctx.fill_rule(*rule),
            PropertyKind::StrokeWidth(width) => ctx.stroke_width(width.pixels()),
            PropertyKind::MiterLimit(limit) => ctx.stroke_miter_limit(*limit),
            PropertyKind::LineCap { side, cap } => match side {
                CapSide::Both => ctx.stroke_caps(*cap),
                side => ctx.stroke_cap(*cap, *side),
            },
            PropertyKind::LineJoin(join) => ctx.stroke_join(*join),
            PropertyKind::VectorEffect(effect) => {
                if *effect == VectorEffect::NonScalingStroke {
                    ctx.stroke_before_transform(true);
                }
            }
            PropertyKind::FontSize(size) => ctx.text_size(size.pixels()),
            PropertyKind::FontFamily(family) => ctx.text_family(family),
            PropertyKind::FontSelection(selection) => {
                if let Some(font) = selection.font() {
                    ctx.font(font);
                }
            }
            PropertyKind::TextAlign(anchor) => ctx.text_align(*anchor, VerticalAlign::Baseline),
            PropertyKind::Marker(reference) => {
                if let Some(node) = reference.node() {
                    ctx.draw_node(node);
                }
            }
            PropertyKind::FontStyle(_)
            | PropertyKind::FontWeight(_)
            | PropertyKind::FontStretch(_)
            | PropertyKind::Orient(_)
            | PropertyKind::ClipPath(_)
            | PropertyKind::ViewBox(_)
            | PropertyKind::PaintOrder(_)
            | PropertyKind::ExtendMode(_)
            | PropertyKind::Raw => {}
        }
    }

    /// The value exposed to other nodes. References are not followed here.
    pub(crate) fn variant(&self) -> TypedValue {
        match self {
            PropertyKind::Paint(paint) => paint.variant(),
            PropertyKind::Transform(transform) => TypedValue::Matrix(transform.matrix),
            PropertyKind::Opacity(opacity) => TypedValue::Scalar(opacity.value),
            PropertyKind::StrokeWidth(width) => TypedValue::Scalar(width.pixels()),
            PropertyKind::MiterLimit(limit) => TypedValue::Scalar(*limit),
            PropertyKind::FontSize(size) => TypedValue::Scalar(size.pixels()),
            PropertyKind::FontSelection(selection) => {
                selection.font().map_or(TypedValue::Empty, TypedValue::Font)
            }
            PropertyKind::Marker(reference) => reference.variant(),
            PropertyKind::ClipPath(clip) => clip.variant(),
            _ => TypedValue::Empty,
        }
    }

    /// The node this kind refers to, once bound.
    pub(crate) fn referenced_node(&self) -> Option<crate::context::NodeId> {
        match self {
            PropertyKind::Paint(paint) => paint.node(),
            PropertyKind::Marker(reference) => reference.node(),
            PropertyKind::ClipPath(clip) => clip.node(),
            _ => None,
        }
    }
}
