//! CSS text scanning.
//!
//! - [`parse_stylesheet`]: lenient entry point producing a [`StyleSheet`]
//! - [`SelectorIter`]: the underlying unit-by-unit selector scan
//! - [`parse_declarations`] / [`InlineStyle`]: declaration blocks and `style` attributes
//! - [`scan`]: CSS whitespace and comment helpers
//!
//! ## Example
//!
//! ```rust
//! use svgcss::parser::parse_stylesheet;
//!
//! let sheet = parse_stylesheet(".warn { fill: red } #logo { stroke: blue }");
//! assert_eq!(sheet.len(), 2);
//! assert_eq!(sheet.class_selector("warn").unwrap().get_attribute("fill"), Some("red"));
//! ```

pub mod declarations;
pub mod scan;
pub mod selectors;

pub use declarations::{InlineStyle, parse_declarations, parse_style_attribute};
pub use selectors::SelectorIter;

use crate::types::StyleSheet;

/// Parses a stylesheet, keeping everything scanned before the first malformed unit.
///
/// This never fails: a syntax error simply ends the scan.
pub fn parse_stylesheet(source: &str) -> StyleSheet {
    let mut sheet = StyleSheet::new();
    let mut iter = SelectorIter::new(source);

    for selector in iter.by_ref() {
        log::trace!("selector {} '{}'", selector.kind(), selector.name());
        sheet.add_selector(selector);
    }

    if iter.stopped_early() {
        log::debug!("stylesheet parsed partially: {} selectors kept", sheet.len());
    }
    sheet
}
