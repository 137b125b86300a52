//! Whitespace and comment handling shared by the CSS parsers.

use std::borrow::Cow;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_until, take_while},
    combinator::rest,
    sequence::{preceded, terminated},
};

/// The CSS whitespace set: space, tab, CR, LF, form feed and vertical tab.
pub fn is_css_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0C' | '\x0B')
}

/// Trims CSS whitespace from both ends.
pub fn trim_css(input: &str) -> &str {
    input.trim_matches(is_css_whitespace)
}

/// Parses `/* ... */`. An unterminated comment consumes the rest of the input.
pub fn block_comment(input: &str) -> IResult<&str, &str> {
    preceded(tag("/*"), alt((terminated(take_until("*/"), tag("*/")), rest)))(input)
}

/// Parses `// ...` up to, but not including, the end of the line.
pub fn line_comment(input: &str) -> IResult<&str, &str> {
    preceded(tag("//"), take_while(|c: char| c != '\n'))(input)
}

/// Skips any run of whitespace and comments of either form.
pub fn skip_trivia(mut input: &str) -> &str {
    loop {
        let trimmed = input.trim_start_matches(is_css_whitespace);
        match alt((block_comment, line_comment))(trimmed) {
            Ok((remaining, _)) => input = remaining,
            Err(_) => return trimmed,
        }
    }
}

/// Removes comments from a declaration block.
///
/// Block comments go anywhere. A `//` only starts a line comment where a
/// declaration could begin (block start, after `;`, or at the start of a line),
/// so `//` inside values such as `url(http://host/a.svg#x)` is kept.
pub fn strip_comments(input: &str) -> Cow<'_, str> {
    if !input.contains("/*") && !input.contains("//") {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut remaining = input;
    let mut at_boundary = true;

    while let Some(c) = remaining.chars().next() {
        if remaining.starts_with("/*") {
            remaining = match block_comment(remaining) {
                Ok((after, _)) => after,
                Err(_) => "",
            };
            continue;
        }
        if at_boundary && remaining.starts_with("//") {
            remaining = match line_comment(remaining) {
                Ok((after, _)) => after,
                Err(_) => "",
            };
            continue;
        }

        match c {
            ';' | '\n' => at_boundary = true,
            c if is_css_whitespace(c) => {}
            _ => at_boundary = false,
        }
        out.push(c);
        remaining = &remaining[c.len_utf8()..];
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_trivia_mixed() {
        let input = "  /* a */\n// b\n\t/* c */  rect{}";
        assert_eq!(skip_trivia(input), "rect{}");
    }

    #[test]
    fn test_unterminated_block_comment_consumes_rest() {
        assert_eq!(skip_trivia("/* never closed rect{}"), "");
    }

    #[test]
    fn test_strip_comments_keeps_slashes_in_values() {
        assert_eq!(
            strip_comments("fill: red; /* x */ href: url(http://a/b)"),
            "fill: red;  href: url(http://a/b)"
        );
    }

    #[test]
    fn test_strip_comments_line_comment_after_semicolon() {
        assert_eq!(
            strip_comments("fill: red; // note\n stroke: blue"),
            "fill: red; \n stroke: blue"
        );
    }

    #[test]
    fn test_trim_css_vertical_tab_and_form_feed() {
        assert_eq!(trim_css("\x0B\x0C fill \r\n"), "fill");
    }
}
