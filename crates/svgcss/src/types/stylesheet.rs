//! Selectors indexed by kind and name.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use super::selector::{Selector, SelectorKind};
use crate::CssError;
use crate::parser::parse_stylesheet;

/// The selectors of one or more CSS texts.
///
/// Only element, id, class and at-rule selectors are indexed. A selector whose
/// kind and name are already present is merged into the existing entry, with
/// later declarations overriding earlier ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSheet {
    ids: HashMap<String, Selector>,
    classes: HashMap<String, Selector>,
    elements: HashMap<String, Selector>,
    at_rules: HashMap<String, Selector>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses CSS text leniently. See [`parse_stylesheet`].
    pub fn parse(source: &str) -> Self {
        parse_stylesheet(source)
    }

    /// Reads and parses an external stylesheet.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CssError> {
        let source = std::fs::read_to_string(path)?;
        Ok(parse_stylesheet(&source))
    }

    fn map_for(&self, kind: SelectorKind) -> Option<&HashMap<String, Selector>> {
        match kind {
            SelectorKind::Id => Some(&self.ids),
            SelectorKind::Class => Some(&self.classes),
            SelectorKind::Element => Some(&self.elements),
            SelectorKind::AtRule => Some(&self.at_rules),
            _ => None,
        }
    }

    fn map_for_mut(&mut self, kind: SelectorKind) -> Option<&mut HashMap<String, Selector>> {
        match kind {
            SelectorKind::Id => Some(&mut self.ids),
            SelectorKind::Class => Some(&mut self.classes),
            SelectorKind::Element => Some(&mut self.elements),
            SelectorKind::AtRule => Some(&mut self.at_rules),
            _ => None,
        }
    }

    /// Adds a selector, merging it into an existing one with the same kind and name.
    ///
    /// Returns `false` when the selector was not stored: it is null, or its kind
    /// has no index.
    pub fn add_selector(&mut self, selector: Selector) -> bool {
        if selector.is_null() {
            return false;
        }

        let Some(map) = self.map_for_mut(selector.kind()) else {
            log::trace!("ignoring {} selector '{}'", selector.kind(), selector.name());
            return false;
        };

        match map.get_mut(selector.name()) {
            Some(existing) => existing.merge_properties(&selector),
            None => {
                map.insert(selector.name().to_string(), selector);
            }
        }
        true
    }

    pub fn get_selector(&self, name: &str, kind: SelectorKind) -> Option<&Selector> {
        self.map_for(kind)?.get(name)
    }

    pub fn id_selector(&self, name: &str) -> Option<&Selector> {
        self.ids.get(name)
    }

    pub fn class_selector(&self, name: &str) -> Option<&Selector> {
        self.classes.get(name)
    }

    pub fn element_selector(&self, name: &str) -> Option<&Selector> {
        self.elements.get(name)
    }

    pub fn at_rule_selector(&self, name: &str) -> Option<&Selector> {
        self.at_rules.get(name)
    }

    pub fn len(&self) -> usize {
        self.ids.len() + self.classes.len() + self.elements.len() + self.at_rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates every stored selector. Order across names is unspecified.
    pub fn selectors(&self) -> impl Iterator<Item = &Selector> {
        self.ids
            .values()
            .chain(self.classes.values())
            .chain(self.elements.values())
            .chain(self.at_rules.values())
    }

    /// Folds another sheet into this one, as if its text followed this sheet's text.
    pub fn merge(&mut self, other: &StyleSheet) {
        for selector in other.sorted() {
            self.add_selector(selector.clone());
        }
    }

    fn sorted(&self) -> Vec<&Selector> {
        let mut all: Vec<&Selector> = self.selectors().collect();
        all.sort_by(|a, b| (a.kind(), a.name()).cmp(&(b.kind(), b.name())));
        all
    }
}

impl fmt::Display for StyleSheet {
    /// One selector per line, ordered by kind then name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for selector in self.sorted() {
            writeln!(f, "{selector}")?;
        }
        Ok(())
    }
}
