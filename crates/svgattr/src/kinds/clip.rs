//! `clip-path`.

use crate::context::{BindContext, NodeId, NodeLookup};
use crate::property::Resolution;
use crate::variant::TypedValue;

use super::marker::NodeReference;

/// A clip path reference. Shapes read the referenced node's value; the
/// property itself draws nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClipPath {
    reference: NodeReference,
}

impl ClipPath {
    pub fn node(&self) -> Option<NodeId> {
        self.reference.node()
    }

    pub fn href(&self) -> &str {
        self.reference.href()
    }

    /// `none` and anything that is not a url leave the property unset.
    pub(crate) fn load(&mut self, text: &str) -> Resolution {
        self.reference.load(text)
    }

    pub(crate) fn bind(&mut self, ctx: &mut dyn BindContext) -> Resolution {
        self.reference.bind(ctx)
    }

    pub(crate) fn variant(&self) -> TypedValue {
        self.reference.variant()
    }

    /// The clip node's current value.
    pub fn resolve<L: NodeLookup + ?Sized>(&self, nodes: &L) -> TypedValue {
        self.reference.resolve(nodes)
    }
}
