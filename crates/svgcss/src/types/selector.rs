//! A single style rule: kind, name and declared attributes.

use std::fmt;
use std::str::FromStr;

use super::attributes::AttributeMap;
use crate::CssError;
use crate::parser::{SelectorIter, parse_declarations};

/// Classification of a selector head by its leading character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SelectorKind {
    Invalid,
    Element,
    Id,
    Class,
    AtRule,
    Attribute,
    PseudoClass,
    PseudoElement,
    Combinator,
    Universal,
}

impl SelectorKind {
    /// Classifies a selector head.
    ///
    /// `.` class, `#` id, `@` at-rule, `[` attribute, `::` pseudo-element,
    /// `:` pseudo-class, `*` universal, alphabetic element, `,` combinator.
    /// Anything else, including an empty head, is invalid.
    pub fn classify(head: &str) -> Self {
        let mut chars = head.chars();
        match chars.next() {
            Some('.') => SelectorKind::Class,
            Some('#') => SelectorKind::Id,
            Some('@') => SelectorKind::AtRule,
            Some('[') => SelectorKind::Attribute,
            Some(':') if chars.next() == Some(':') => SelectorKind::PseudoElement,
            Some(':') => SelectorKind::PseudoClass,
            Some('*') => SelectorKind::Universal,
            Some(',') => SelectorKind::Combinator,
            Some(c) if c.is_ascii_alphabetic() => SelectorKind::Element,
            _ => SelectorKind::Invalid,
        }
    }

    /// Removes the kind's marker from a head, leaving the bare name.
    pub fn strip_marker(self, head: &str) -> &str {
        match self {
            SelectorKind::Id | SelectorKind::Class | SelectorKind::AtRule => &head[1..],
            SelectorKind::PseudoClass => &head[1..],
            SelectorKind::PseudoElement => &head[2..],
            SelectorKind::Attribute => {
                let inner = &head[1..];
                inner.strip_suffix(']').unwrap_or(inner)
            }
            SelectorKind::Element
            | SelectorKind::Universal
            | SelectorKind::Combinator
            | SelectorKind::Invalid => head,
        }
    }
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SelectorKind::Invalid => "INVALID",
            SelectorKind::Element => "ELEMENT",
            SelectorKind::Id => "ID",
            SelectorKind::Class => "CLASS",
            SelectorKind::AtRule => "ATRULE",
            SelectorKind::Attribute => "ATTRIBUTE",
            SelectorKind::PseudoClass => "PSEUDO_CLASS",
            SelectorKind::PseudoElement => "PSEUDO_ELEMENT",
            SelectorKind::Combinator => "COMBINATOR",
            SelectorKind::Universal => "UNIVERSAL",
        };
        f.write_str(name)
    }
}

/// One CSS rule.
///
/// A selector is null when its name is empty or its declaration block was not
/// well formed. Null selectors are never stored in a stylesheet.
///
/// # Examples
///
/// ```
/// use svgcss::{Selector, SelectorKind};
///
/// let sel = Selector::new(SelectorKind::Class, "warn", "fill: red; stroke-width: 2");
/// assert!(!sel.is_null());
/// assert_eq!(sel.get_attribute("fill"), Some("red"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    kind: SelectorKind,
    name: String,
    attributes: AttributeMap,
    is_null: bool,
}

impl Selector {
    /// Builds a selector from a bare name and the text between its braces.
    pub fn new(kind: SelectorKind, name: impl Into<String>, block: &str) -> Self {
        let name = name.into();
        // A nested `{` means the block belongs to a construct this model does not handle.
        let well_formed = !block.contains('{');
        let attributes = if well_formed {
            parse_declarations(block)
        } else {
            AttributeMap::new()
        };

        Self {
            is_null: name.is_empty() || !well_formed || kind == SelectorKind::Invalid,
            kind,
            name,
            attributes,
        }
    }

    pub fn kind(&self) -> SelectorKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    pub fn is_null(&self) -> bool {
        self.is_null
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Folds another selector's declarations into this one. Incoming values win.
    pub fn merge_properties(&mut self, other: &Selector) {
        self.attributes.merge(&other.attributes);
    }
}

impl FromStr for Selector {
    type Err = CssError;

    /// Parses the first `head { block }` unit of `s`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SelectorIter::new(s)
            .next()
            .filter(|selector| !selector.is_null())
            .ok_or_else(|| CssError::InvalidSelector(s.trim().to_string()))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {{{} }}", self.kind, self.name, self.attributes)
    }
}
