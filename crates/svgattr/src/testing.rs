//! Test utilities.
//!
//! [`RecordingContext`] implements [`DrawContext`] by recording every call,
//! so tests can assert on exactly what a property drew.
//!
//! ```
//! use svgattr::testing::{DrawCall, RecordingContext};
//! use svgattr::{NodeTable, standard_registry};
//!
//! let nodes = NodeTable::new();
//! let width = standard_registry().create("stroke-width", "3").unwrap();
//!
//! let mut ctx = RecordingContext::new();
//! width.draw(&mut ctx, &nodes);
//! assert_eq!(ctx.calls(), &[DrawCall::StrokeWidth(3.0)]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::context::{DrawContext, FontRequest, FontService, NodeId};
use crate::kinds::{CapSide, FillRule, LineCap, LineJoin, TextAnchor, VerticalAlign};
use crate::values::Matrix2D;
use crate::variant::{FontHandle, PaintSource};

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Fill(PaintSource),
    NoFill,
    Stroke(PaintSource),
    NoStroke,
    FillRule(FillRule),
    StrokeWidth(f64),
    StrokeCaps(LineCap),
    StrokeCap(LineCap, CapSide),
    StrokeJoin(LineJoin),
    StrokeMiterLimit(f64),
    Transform(Matrix2D),
    GlobalOpacity(f64),
    FillOpacity(f64),
    StrokeOpacity(f64),
    Font(FontHandle),
    TextSize(f64),
    TextFamily(String),
    TextAlign(TextAnchor, VerticalAlign),
    StrokeBeforeTransform(bool),
    DrawNode(NodeId),
}

/// A drawing context that records calls instead of rendering.
#[derive(Clone, Debug, Default)]
pub struct RecordingContext {
    calls: Vec<DrawCall>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Returns the recorded calls and clears the log.
    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    fn record(&mut self, call: DrawCall) {
        self.calls.push(call);
    }
}

impl DrawContext for RecordingContext {
    fn fill(&mut self, paint: PaintSource) {
        self.record(DrawCall::Fill(paint));
    }

    fn no_fill(&mut self) {
        self.record(DrawCall::NoFill);
    }

    fn stroke(&mut self, paint: PaintSource) {
        self.record(DrawCall::Stroke(paint));
    }

    fn no_stroke(&mut self) {
        self.record(DrawCall::NoStroke);
    }

    fn fill_rule(&mut self, rule: FillRule) {
        self.record(DrawCall::FillRule(rule));
    }

    fn stroke_width(&mut self, width: f64) {
        self.record(DrawCall::StrokeWidth(width));
    }

    fn stroke_caps(&mut self, cap: LineCap) {
        self.record(DrawCall::StrokeCaps(cap));
    }

    fn stroke_cap(&mut self, cap: LineCap, side: CapSide) {
        self.record(DrawCall::StrokeCap(cap, side));
    }

    fn stroke_join(&mut self, join: LineJoin) {
        self.record(DrawCall::StrokeJoin(join));
    }

    fn stroke_miter_limit(&mut self, limit: f64) {
        self.record(DrawCall::StrokeMiterLimit(limit));
    }

    fn apply_transform(&mut self, matrix: &Matrix2D) {
        self.record(DrawCall::Transform(*matrix));
    }

    fn global_opacity(&mut self, opacity: f64) {
        self.record(DrawCall::GlobalOpacity(opacity));
    }

    fn fill_opacity(&mut self, opacity: f64) {
        self.record(DrawCall::FillOpacity(opacity));
    }

    fn stroke_opacity(&mut self, opacity: f64) {
        self.record(DrawCall::StrokeOpacity(opacity));
    }

    fn font(&mut self, font: FontHandle) {
        self.record(DrawCall::Font(font));
    }

    fn text_size(&mut self, size: f64) {
        self.record(DrawCall::TextSize(size));
    }

    fn text_family(&mut self, family: &str) {
        self.record(DrawCall::TextFamily(family.to_string()));
    }

    fn text_align(&mut self, horizontal: TextAnchor, vertical: VerticalAlign) {
        self.record(DrawCall::TextAlign(horizontal, vertical));
    }

    fn stroke_before_transform(&mut self, enabled: bool) {
        self.record(DrawCall::StrokeBeforeTransform(enabled));
    }

    fn draw_node(&mut self, node: NodeId) {
        self.record(DrawCall::DrawNode(node));
    }
}

/// A font service backed by a family-name table. Every lookup is recorded.
///
/// Share it with a node table through an `Rc` to inspect the requests afterwards.
#[derive(Debug, Default)]
pub struct FontTable {
    faces: HashMap<String, FontHandle>,
    requests: RefCell<Vec<FontRequest>>,
}

impl FontTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_face(mut self, family: &str, handle: FontHandle) -> Self {
        self.faces.insert(family.to_string(), handle);
        self
    }

    /// The requests received so far.
    pub fn requests(&self) -> Vec<FontRequest> {
        self.requests.borrow().clone()
    }
}

impl FontService for FontTable {
    fn select_font(&self, request: &FontRequest) -> Option<FontHandle> {
        self.requests.borrow_mut().push(request.clone());
        let family = request.family.as_deref()?;
        self.faces.get(family).copied()
    }
}
