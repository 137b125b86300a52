//! # svgweave
//!
//! SVG attribute handling in two layers:
//!
//! - [`svgcss`] parses stylesheets and inline `style` text into attribute maps.
//! - [`svgattr`] turns attribute text into typed properties that are loaded,
//!   bound against the document and drawn.
//!
//! [`element`] ties them together for a single element.
//!
//! ```rust
//! use svgweave::element::{ElementProperties, cascade_attributes};
//! use svgweave::svgattr::testing::{DrawCall, RecordingContext};
//! use svgweave::svgattr::variant::GradientHandle;
//! use svgweave::svgattr::{NodeTable, PaintSource, TypedValue, standard_registry};
//! use svgweave::svgcss::{AttributeMap, parse_stylesheet};
//!
//! let sheet = parse_stylesheet("#logo { fill: url(#sky); stroke-width: 2 }");
//! let attrs: AttributeMap = [("id", "logo")].into_iter().collect();
//!
//! let mut nodes = NodeTable::new();
//! nodes.add_node(Some("sky"), TypedValue::Gradient(GradientHandle(1)));
//!
//! let merged = cascade_attributes("path", &attrs, &sheet);
//! let mut props = ElementProperties::build(standard_registry(), &merged);
//! props.bind_all(&mut nodes);
//!
//! let mut ctx = RecordingContext::new();
//! props.draw_all(&mut ctx, &nodes);
//! assert_eq!(
//!     ctx.calls(),
//!     &[
//!         DrawCall::Fill(PaintSource::Gradient(GradientHandle(1))),
//!         DrawCall::StrokeWidth(2.0),
//!     ]
//! );
//! ```

pub mod element;

pub use svgattr;
pub use svgcss;

pub use element::{ElementProperties, cascade_attributes};
