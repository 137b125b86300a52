//! The interfaces properties use to reach the document and the renderer.
//!
//! - [`NodeLookup`]: read-only access to nodes, their values and document metrics
//! - [`BindContext`]: lookup plus the ability to bind other nodes on demand
//! - [`FontService`]: turns a font request into a backend font
//! - [`DrawContext`]: the rendering calls a property can issue

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use crate::error::BindError;
use crate::kinds::font::{FontStretch, FontStyle, FontWeight};
use crate::kinds::stroke::{CapSide, FillRule, LineCap, LineJoin};
use crate::kinds::text::{TextAnchor, VerticalAlign};
use crate::values::{Matrix2D, url_reference};
use crate::variant::{FontHandle, PaintSource, TypedValue};

/// Index of a node in the document's node table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node {}", self.0)
    }
}

/// Read-only view of the document used while resolving values.
pub trait NodeLookup {
    /// Finds a node by its `id` attribute.
    fn find_node_by_id(&self, id: &str) -> Option<NodeId>;

    /// Finds the node named by a `url(#id)` reference.
    fn find_node_by_url(&self, url: &str) -> Option<NodeId> {
        url_reference(url).and_then(|id| self.find_node_by_id(id))
    }

    /// The value a node exposes to properties that reference it.
    fn node_variant(&self, node: NodeId) -> TypedValue;

    /// Whether the node still has unresolved properties.
    fn node_needs_binding(&self, _node: NodeId) -> bool {
        false
    }

    fn dpi(&self) -> f64 {
        96.0
    }

    /// The inherited font size in pixels, the basis for `em` lengths.
    fn font_size(&self) -> f64 {
        16.0
    }

    fn font_service(&self) -> Option<&dyn FontService> {
        None
    }
}

/// Document access during binding.
pub trait BindContext: NodeLookup {
    /// Binds a node's pending properties so its value can be read.
    fn bind_node(&mut self, node: NodeId) -> Result<(), BindError>;

    /// Notifies a node that something it depends on changed.
    fn update_node(&mut self, _node: NodeId) {}
}

/// Follows `Reference` values until a concrete value is reached.
///
/// A chain that revisits a node resolves to `Empty`.
pub fn resolve_variant<L: NodeLookup + ?Sized>(nodes: &L, value: TypedValue) -> TypedValue {
    let mut current = value;
    let mut visited = HashSet::new();

    while let TypedValue::Reference(node) = current {
        if !visited.insert(node) {
            log::debug!("reference chain loops at {node}");
            return TypedValue::Empty;
        }
        current = nodes.node_variant(node);
    }
    current
}

/// A font description ready for selection.
#[derive(Clone, Debug, PartialEq)]
pub struct FontRequest {
    pub family: Option<String>,
    /// Size in pixels.
    pub size: f64,
    pub style: FontStyle,
    pub weight: FontWeight,
    pub stretch: FontStretch,
}

/// Resolves font requests to backend fonts.
pub trait FontService {
    fn select_font(&self, request: &FontRequest) -> Option<FontHandle>;
}

impl<T: FontService + ?Sized> FontService for Rc<T> {
    fn select_font(&self, request: &FontRequest) -> Option<FontHandle> {
        (**self).select_font(request)
    }
}

/// The rendering operations properties issue when drawn.
pub trait DrawContext {
    fn fill(&mut self, paint: PaintSource);
    fn no_fill(&mut self);
    fn stroke(&mut self, paint: PaintSource);
    fn no_stroke(&mut self);
    fn fill_rule(&mut self, rule: FillRule);
    fn stroke_width(&mut self, width: f64);
    /// Sets the cap at both ends of a stroke.
    fn stroke_caps(&mut self, cap: LineCap);
    fn stroke_cap(&mut self, cap: LineCap, side: CapSide);
    fn stroke_join(&mut self, join: LineJoin);
    fn stroke_miter_limit(&mut self, limit: f64);
    fn apply_transform(&mut self, matrix: &Matrix2D);
    fn global_opacity(&mut self, opacity: f64);
    fn fill_opacity(&mut self, opacity: f64);
    fn stroke_opacity(&mut self, opacity: f64);
    fn font(&mut self, font: FontHandle);
    fn text_size(&mut self, size: f64);
    fn text_family(&mut self, family: &str);
    fn text_align(&mut self, horizontal: TextAnchor, vertical: VerticalAlign);
    fn stroke_before_transform(&mut self, enabled: bool);

    /// Draws another node, such as a marker, in the current state.
    fn draw_node(&mut self, _node: NodeId) {}
}
