//! Error types for stylesheet loading.
//!
//! Scanning a stylesheet never fails outright: malformed input simply ends the
//! scan. Errors only surface when a caller asks for something that must exist,
//! such as a single selector parsed from text, or when reading a file.

use thiserror::Error;

/// Errors that can occur while loading CSS text.
///
/// # Examples
///
/// ```rust
/// use svgcss::{CssError, Selector};
///
/// let result: Result<Selector, CssError> = "no braces here".parse();
/// assert!(matches!(result, Err(CssError::InvalidSelector(_))));
/// ```
#[derive(Error, Debug)]
pub enum CssError {
    /// The text did not contain a usable `head { block }` unit.
    #[error("invalid selector: {0}")]
    InvalidSelector(String),

    /// An I/O error occurred while reading a stylesheet file.
    #[error("I/O error reading stylesheet")]
    Io(#[from] std::io::Error),
}
