//! # svgattr - typed SVG attribute properties
//!
//! Turns attribute text into typed [`Property`] values and resolves them in two
//! phases:
//!
//! 1. **Load**: [`Property::load_from_chunk`] parses the text alone. Values that
//!    need the document (`url(#id)` references, font sizes, dpi-dependent
//!    lengths) are marked [`Resolution::Deferred`].
//! 2. **Bind**: [`Property::bind`] resolves deferred values through a
//!    [`BindContext`], binding referenced nodes first when needed.
//!
//! Drawing then hands each resolved value to a [`DrawContext`].
//!
//! ## Quick Start
//!
//! ```rust
//! use svgattr::testing::{DrawCall, RecordingContext};
//! use svgattr::variant::{PaintSource, PatternHandle};
//! use svgattr::{NodeTable, Resolution, TypedValue, standard_registry};
//!
//! let mut nodes = NodeTable::new();
//! nodes.add_node(Some("dots"), TypedValue::Pattern(PatternHandle(7)));
//!
//! let mut fill = standard_registry().create("fill", "url(#dots)").unwrap();
//! assert_eq!(fill.resolution(), Resolution::Deferred);
//! assert_eq!(fill.bind(Some(&mut nodes)), Resolution::Resolved);
//!
//! let mut ctx = RecordingContext::new();
//! fill.draw(&mut ctx, &nodes);
//! assert_eq!(ctx.calls(), &[DrawCall::Fill(PaintSource::Pattern(PatternHandle(7)))]);
//! ```
//!
//! ## Modules
//!
//! - [`values`]: numbers, lengths, angles, transforms and `url()` parsing
//! - [`kinds`]: the concrete property kinds
//! - [`registry`]: attribute name to property constructor table
//! - [`document`]: an in-memory [`NodeTable`] implementing the binding context
//! - [`testing`]: a recording draw context and a simple font service

pub mod context;
pub mod document;
pub mod error;
pub mod kinds;
pub mod property;
pub mod registry;
pub mod testing;
pub mod values;
pub mod variant;

pub use context::{
    BindContext, DrawContext, FontRequest, FontService, NodeId, NodeLookup, resolve_variant,
};
pub use document::{Node, NodeTable};
pub use error::{BindError, PropertyError};
pub use kinds::PropertyKind;
pub use property::{Property, PropertyFlags, Resolution};
pub use registry::{PropertyFactory, PropertyRegistry, standard_registry};
pub use variant::{PaintSource, TypedValue};
