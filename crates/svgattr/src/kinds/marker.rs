//! Marker references, marker orientation and the shared reference binding.

use crate::context::{BindContext, NodeId, NodeLookup};
use crate::property::Resolution;
use crate::values::{is_url, parse_angle};
use crate::variant::TypedValue;

/// Locates the node behind `url`, binding it first when it has pending properties.
///
/// Returns `None` when the node does not exist or its binding failed, for
/// example because it is already being bound further up the chain.
pub(crate) fn bind_reference(ctx: &mut dyn BindContext, url: &str) -> Option<NodeId> {
    let Some(node) = ctx.find_node_by_url(url) else {
        log::debug!("unresolved reference {url}");
        return None;
    };

    if ctx.node_needs_binding(node) {
        if let Err(err) = ctx.bind_node(node) {
            log::debug!("reference {url} not usable: {err}");
            return None;
        }
    }
    Some(node)
}

/// A `url(#id)` pointing at another node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeReference {
    href: String,
    node: Option<NodeId>,
}

impl NodeReference {
    pub fn href(&self) -> &str {
        &self.href
    }

    /// The referenced node, once bound.
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// Records the url. Anything other than a url leaves the property unset.
    pub(crate) fn load(&mut self, text: &str) -> Resolution {
        self.node = None;
        if !is_url(text) {
            self.href.clear();
            return Resolution::Unset;
        }
        self.href = text.to_string();
        Resolution::Deferred
    }

    pub(crate) fn bind(&mut self, ctx: &mut dyn BindContext) -> Resolution {
        self.node = bind_reference(ctx, &self.href);
        if self.node.is_some() {
            Resolution::Resolved
        } else {
            Resolution::Unset
        }
    }

    pub(crate) fn variant(&self) -> TypedValue {
        self.node.map_or(TypedValue::Empty, TypedValue::Reference)
    }

    /// The referenced node's current value.
    pub fn resolve<L: NodeLookup + ?Sized>(&self, nodes: &L) -> TypedValue {
        crate::context::resolve_variant(nodes, self.variant())
    }
}

/// The `orient` attribute of a marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarkerOrient {
    /// Follow the path direction.
    Auto,
    /// Follow the path direction, negated.
    AutoStartReverse,
    /// A fixed angle in radians.
    Angle(f64),
}

impl Default for MarkerOrient {
    fn default() -> Self {
        MarkerOrient::Angle(0.0)
    }
}

impl MarkerOrient {
    pub(crate) fn load(&mut self, text: &str) -> Resolution {
        let orient = match text {
            "auto" => MarkerOrient::Auto,
            "auto-start-reverse" => MarkerOrient::AutoStartReverse,
            angle => match parse_angle(angle) {
                Some(radians) => MarkerOrient::Angle(radians),
                None => return Resolution::Unset,
            },
        };
        *self = orient;
        Resolution::Resolved
    }

    /// The marker rotation in radians for the segment from `p1` to `p2`.
    ///
    /// ```
    /// use std::f64::consts::FRAC_PI_4;
    /// use svgattr::kinds::MarkerOrient;
    ///
    /// let angle = MarkerOrient::Auto.radians((0.0, 0.0), (1.0, 1.0));
    /// assert!((angle - FRAC_PI_4).abs() < 1e-12);
    /// ```
    pub fn radians(&self, p1: (f64, f64), p2: (f64, f64)) -> f64 {
        let tangent = (p2.1 - p1.1).atan2(p2.0 - p1.0);
        match *self {
            MarkerOrient::Auto => tangent,
            MarkerOrient::AutoStartReverse => -tangent,
            MarkerOrient::Angle(radians) => radians,
        }
    }

    pub fn degrees(&self, p1: (f64, f64), p2: (f64, f64)) -> f64 {
        self.radians(p1, p2).to_degrees()
    }
}
