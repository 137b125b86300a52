//! `url(...)` references.

const QUOTES_AND_SPACE: &[char] = &[' ', '\t', '\r', '\n', '\x0C', '\x0B', '"', '\''];

/// Whether `text` is a `url(...)` reference.
pub fn is_url(text: &str) -> bool {
    text.trim_start().starts_with("url(")
}

/// Extracts the referenced id from `url(#id)`.
///
/// Quotes and whitespace around the target are ignored, and a leading `#` or
/// `.` is stripped.
///
/// ```
/// use svgattr::values::url_reference;
///
/// assert_eq!(url_reference("url( '#grad1' )"), Some("grad1"));
/// assert_eq!(url_reference("#grad1"), None);
/// ```
pub fn url_reference(text: &str) -> Option<&str> {
    let inner = text.trim_start().strip_prefix("url(")?;
    let end = inner.find(')')?;
    let target = inner[..end].trim_matches(QUOTES_AND_SPACE);
    let id = target
        .strip_prefix('#')
        .or_else(|| target.strip_prefix('.'))
        .unwrap_or(target);

    (!id.is_empty()).then_some(id)
}

/// Splits a paint value such as `url(#g) red` into the url part and whatever follows it.
pub fn split_url_fallback(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if !is_url(text) {
        return None;
    }
    let end = text.find(')')? + 1;
    Some((&text[..end], text[end..].trim()))
}
