//! Numbers and number lists.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_while,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{map_res, opt, recognize},
    sequence::{pair, tuple},
};

fn is_separator(c: char) -> bool {
    c == ',' || svgcss::parser::scan::is_css_whitespace(c)
}

/// Recognizes a number with optional sign, fraction and exponent.
///
/// An `e` not followed by digits is left unconsumed, so `2em` reads as `2`.
fn float_text(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

/// Parses a number. `inf` and `nan` are not numbers here.
pub fn number(input: &str) -> IResult<&str, f64> {
    map_res(float_text, str::parse::<f64>)(input)
}

fn separators(input: &str) -> IResult<&str, &str> {
    take_while(is_separator)(input)
}

/// Parses text that is exactly one number, ignoring surrounding whitespace.
pub fn parse_number(text: &str) -> Option<f64> {
    match number(text.trim()) {
        Ok(("", value)) => Some(value),
        _ => None,
    }
}

/// Reads the next number after any whitespace or commas.
///
/// Returns the number and the text following it.
pub fn next_number(input: &str) -> Option<(f64, &str)> {
    let (input, _) = separators(input).ok()?;
    let (rest, value) = number(input).ok()?;
    Some((value, rest))
}

/// Reads numbers separated by whitespace and/or commas, stopping at the first
/// token that is not a number.
pub fn parse_number_list(text: &str) -> Vec<f64> {
    let mut values = Vec::new();
    let mut remaining = text;
    while let Some((value, rest)) = next_number(remaining) {
        values.push(value);
        remaining = rest;
    }
    values
}
