//! Error types for loading and binding properties.

use thiserror::Error;

use crate::context::NodeId;

/// Errors from [`Property::load_from_chunk`](crate::Property::load_from_chunk).
///
/// Recognized-but-unusable values are not errors: they leave the property
/// unset and the element falls back to inherited or default appearance.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// The attribute text was empty or all whitespace.
    #[error("attribute value is empty")]
    Empty,
}

/// Errors from [`BindContext::bind_node`](crate::BindContext::bind_node).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The node is already being bound further up the call chain.
    #[error("reference cycle through {0}")]
    Cycle(NodeId),

    /// No node with this id exists.
    #[error("unknown {0}")]
    UnknownNode(NodeId),
}
