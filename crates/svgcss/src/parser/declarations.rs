//! Declaration blocks and inline `style` attributes.

use nom::{
    IResult,
    bytes::complete::{take_till, take_until},
    character::complete::char,
    combinator::{opt, rest},
    sequence::{separated_pair, terminated},
};

use super::scan::{strip_comments, trim_css};
use crate::types::AttributeMap;

/// Takes one `;`-terminated declaration (the final one may lack the `;`).
fn declaration(input: &str) -> IResult<&str, &str> {
    terminated(take_till(|c: char| c == ';'), opt(char(';')))(input)
}

/// Splits `name: value` on the first colon.
fn name_value(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_until(":"), char(':'), rest)(input)
}

/// Iterator over the `name: value` pairs of a declaration list.
///
/// Both sides are trimmed of CSS whitespace. Pairs without a colon, or with an
/// empty name or value, are skipped. Comments are not removed; use
/// [`parse_style_attribute`] for text that may contain them.
///
/// ```
/// use svgcss::parser::InlineStyle;
///
/// let pairs: Vec<_> = InlineStyle::new("fill: red; ; stroke:blue").collect();
/// assert_eq!(pairs, [("fill", "red"), ("stroke", "blue")]);
/// ```
#[derive(Clone, Debug)]
pub struct InlineStyle<'a> {
    remaining: &'a str,
}

impl<'a> InlineStyle<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { remaining: text }
    }
}

impl<'a> Iterator for InlineStyle<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        while !self.remaining.is_empty() {
            let (remaining, decl) = declaration(self.remaining).ok()?;
            self.remaining = remaining;

            let Ok((_, (name, value))) = name_value(decl) else {
                continue;
            };
            let name = trim_css(name);
            let value = trim_css(value);
            if !name.is_empty() && !value.is_empty() {
                return Some((name, value));
            }
        }
        None
    }
}

/// Parses the text between a selector's braces into an attribute map.
///
/// Comments are removed first. When a name repeats, the last value wins.
pub fn parse_declarations(block: &str) -> AttributeMap {
    let text = strip_comments(block);
    InlineStyle::new(&text).collect()
}

/// Parses an element's `style` attribute.
pub fn parse_style_attribute(text: &str) -> AttributeMap {
    parse_declarations(text)
}
