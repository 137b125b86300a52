//! Scanning `head { block }` units into selectors.

use std::collections::VecDeque;

use nom::{
    IResult,
    bytes::complete::take_until,
    character::complete::char,
    sequence::{pair, terminated},
};

use super::scan::{skip_trivia, trim_css};
use crate::types::{Selector, SelectorKind};

/// Parses one rule unit, returning the raw head and the raw block.
pub fn rule_unit(input: &str) -> IResult<&str, (&str, &str)> {
    pair(
        terminated(take_until("{"), char('{')),
        terminated(take_until("}"), char('}')),
    )(input)
}

/// Builds the selectors for one unit, one per comma-separated simple selector.
///
/// Returns `None` when the head is structurally invalid. A head that starts
/// with `,` is a combinator and yields no selectors.
pub fn selectors_for_unit(head: &str, block: &str) -> Option<Vec<Selector>> {
    let head = trim_css(head);
    match SelectorKind::classify(head) {
        SelectorKind::Invalid => return None,
        SelectorKind::Combinator => return Some(Vec::new()),
        _ => {}
    }

    let selectors = head
        .split(',')
        .map(trim_css)
        .filter(|part| !part.is_empty())
        .filter_map(|part| match SelectorKind::classify(part) {
            SelectorKind::Invalid => {
                log::debug!("skipping invalid selector '{part}' in list '{head}'");
                None
            }
            kind => Some(Selector::new(kind, kind.strip_marker(part), block)),
        })
        .collect();

    Some(selectors)
}

/// Iterator over the selectors of a CSS text, in source order.
///
/// Whitespace and both comment forms are skipped between units. Iteration
/// ends at the end of input or at the first structurally invalid unit;
/// [`SelectorIter::stopped_early`] tells the two apart.
///
/// ```
/// use svgcss::parser::SelectorIter;
///
/// let names: Vec<String> = SelectorIter::new("rect, circle { fill: red } .a { x: 1 }")
///     .map(|s| s.name().to_string())
///     .collect();
/// assert_eq!(names, ["rect", "circle", "a"]);
/// ```
#[derive(Debug)]
pub struct SelectorIter<'a> {
    remaining: &'a str,
    pending: VecDeque<Selector>,
    stopped_early: bool,
}

impl<'a> SelectorIter<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            remaining: source,
            pending: VecDeque::new(),
            stopped_early: false,
        }
    }

    /// Whether scanning ended on malformed input rather than end of input.
    pub fn stopped_early(&self) -> bool {
        self.stopped_early
    }

    /// The unscanned tail of the source.
    pub fn remaining(&self) -> &'a str {
        self.remaining
    }

    fn stop(&mut self, reason: &str) {
        log::debug!(
            "stylesheet scan stopped: {reason} at '{}'",
            self.remaining.chars().take(32).collect::<String>()
        );
        self.stopped_early = true;
        self.remaining = "";
    }

    /// Scans the next unit into `pending`. Returns `false` when scanning is over.
    fn scan_unit(&mut self) -> bool {
        self.remaining = skip_trivia(self.remaining);
        if self.remaining.is_empty() {
            return false;
        }

        let Ok((rest, (head, block))) = rule_unit(self.remaining) else {
            self.stop("unterminated rule");
            return false;
        };
        if trim_css(head).is_empty() {
            self.stop("empty selector");
            return false;
        }
        let Some(selectors) = selectors_for_unit(head, block) else {
            self.stop("invalid selector");
            return false;
        };

        self.remaining = rest;
        self.pending.extend(selectors);
        true
    }
}

impl Iterator for SelectorIter<'_> {
    type Item = Selector;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(selector) = self.pending.pop_front() {
                return Some(selector);
            }
            if !self.scan_unit() {
                return None;
            }
        }
    }
}
