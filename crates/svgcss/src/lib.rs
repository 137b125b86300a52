//! # svgcss - a minimal CSS engine for SVG documents
//!
//! Parses `<style>` element text and external stylesheets into selectors that
//! carry flat `name: value` attribute maps, ready to be merged into an
//! element's attributes before they are turned into properties.
//!
//! ## Quick Start
//!
//! ```rust
//! use svgcss::parser::parse_stylesheet;
//!
//! let sheet = parse_stylesheet(r#"
//!     /* shared look */
//!     rect { fill: #336699; stroke-width: 2 }
//!     .highlight { stroke: gold }
//!     rect { stroke-width: 3 }
//! "#);
//!
//! let rect = sheet.element_selector("rect").unwrap();
//! assert_eq!(rect.get_attribute("fill"), Some("#336699"));
//! assert_eq!(rect.get_attribute("stroke-width"), Some("3"));
//! ```
//!
//! ## Supported Features
//!
//! ### Selectors
//! - Element selectors: `rect`, `circle`
//! - Class selectors: `.primary`
//! - ID selectors: `#logo`
//! - At-rules: `@font-face`
//! - Selector lists: `h1, h2 { ... }`
//!
//! Attribute, pseudo-class, pseudo-element and universal selectors are
//! recognized but not stored. Combinators and specificity are not resolved.
//!
//! ### Comments
//! - `/* block */` anywhere
//! - `// line` between rules
//!
//! ### Colors
//! - `#rgb`, `#rrggbb` (with optional alpha), `rgb()`, `rgba()`, `hsl()`,
//!   `hsla()` and the SVG color keywords. See [`RgbaColor`].

pub mod error;
pub mod parser;
pub mod types;

pub use error::CssError;
pub use parser::{parse_style_attribute, parse_stylesheet};
pub use types::{AttributeMap, ColorParseError, RgbaColor, Selector, SelectorKind, StyleSheet};
