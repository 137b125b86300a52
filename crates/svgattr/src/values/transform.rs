//! The `transform` attribute syntax.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_until, take_while},
    character::complete::char,
    sequence::{delimited, preceded, tuple},
};

use super::matrix::Matrix2D;
use super::number::parse_number_list;

/// One parsed transform function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformCommand {
    Matrix(Matrix2D),
    Translate(f64, f64),
    Scale(f64, f64),
    Rotate { angle: f64, center: Option<(f64, f64)> },
    SkewX(f64),
    SkewY(f64),
}

impl TransformCommand {
    /// Builds a command from its name and arguments. Wrong arity yields `None`.
    fn from_args(name: &str, args: &[f64]) -> Option<Self> {
        let command = match (name, args) {
            ("matrix", &[a, b, c, d, e, f]) => Self::Matrix(Matrix2D::new(a, b, c, d, e, f)),
            ("translate", &[tx]) => Self::Translate(tx, 0.0),
            ("translate", &[tx, ty]) => Self::Translate(tx, ty),
            ("scale", &[s]) => Self::Scale(s, s),
            ("scale", &[sx, sy]) => Self::Scale(sx, sy),
            ("rotate", &[angle]) => Self::Rotate {
                angle,
                center: None,
            },
            ("rotate", &[angle, cx, cy]) => Self::Rotate {
                angle,
                center: Some((cx, cy)),
            },
            ("skewX", &[angle]) => Self::SkewX(angle),
            ("skewY", &[angle]) => Self::SkewY(angle),
            _ => return None,
        };
        Some(command)
    }

    /// The command as a matrix. Angles are in degrees.
    pub fn to_matrix(&self) -> Matrix2D {
        match *self {
            Self::Matrix(m) => m,
            Self::Translate(tx, ty) => Matrix2D::translation(tx, ty),
            Self::Scale(sx, sy) => Matrix2D::scaling(sx, sy),
            Self::Rotate {
                angle,
                center: None,
            } => Matrix2D::rotation(angle.to_radians()),
            Self::Rotate {
                angle,
                center: Some((cx, cy)),
            } => Matrix2D::rotation_about(angle.to_radians(), cx, cy),
            Self::SkewX(angle) => Matrix2D::skew_x(angle.to_radians()),
            Self::SkewY(angle) => Matrix2D::skew_y(angle.to_radians()),
        }
    }
}

fn command_name(input: &str) -> IResult<&str, &str> {
    alt((
        tag("matrix"),
        tag("translate"),
        tag("scale"),
        tag("rotate"),
        tag("skewX"),
        tag("skewY"),
    ))(input)
}

/// `name ( args )`, with optional whitespace before the parenthesis.
fn command(input: &str) -> IResult<&str, (&str, &str)> {
    tuple((
        command_name,
        preceded(
            take_while(|c: char| c.is_whitespace()),
            delimited(char('('), take_until(")"), char(')')),
        ),
    ))(input)
}

/// Parses the transform functions in `text`, in source order.
///
/// Characters that do not start a recognized function are skipped one at a
/// time. A function with the wrong number of arguments is ignored.
pub fn parse_transform_commands(text: &str) -> Vec<TransformCommand> {
    let mut commands = Vec::new();
    let mut remaining = text;

    while let Some(c) = remaining.chars().next() {
        match command(remaining) {
            Ok((rest, (name, args))) => {
                let args = parse_number_list(args);
                match TransformCommand::from_args(name, &args) {
                    Some(cmd) => commands.push(cmd),
                    None => log::debug!("ignoring {name} with {} arguments", args.len()),
                }
                remaining = rest;
            }
            Err(_) => remaining = &remaining[c.len_utf8()..],
        }
    }
    commands
}

/// Parses a transform list into one matrix.
///
/// Each function is composed onto the running matrix left to right, so the
/// rightmost function is applied to points first. Returns `None` when no
/// function was recognized.
///
/// ```
/// use svgattr::values::parse_transform;
///
/// let m = parse_transform("translate(10,0) scale(2)").unwrap();
/// assert_eq!(m.map_point(1.0, 0.0), (12.0, 0.0));
/// ```
pub fn parse_transform(text: &str) -> Option<Matrix2D> {
    let commands = parse_transform_commands(text);
    if commands.is_empty() {
        return None;
    }
    Some(
        commands
            .iter()
            .fold(Matrix2D::IDENTITY, |running, cmd| running.multiply(&cmd.to_matrix())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_in_order() {
        let commands = parse_transform_commands("translate(5) rotate(45, 1 2) skewX(10)");
        assert_eq!(
            commands,
            vec![
                TransformCommand::Translate(5.0, 0.0),
                TransformCommand::Rotate {
                    angle: 45.0,
                    center: Some((1.0, 2.0))
                },
                TransformCommand::SkewX(10.0),
            ]
        );
    }

    #[test]
    fn test_uniform_scale() {
        assert_eq!(
            parse_transform_commands("scale(3)"),
            vec![TransformCommand::Scale(3.0, 3.0)]
        );
    }

    #[test]
    fn test_junk_is_skipped() {
        let m = parse_transform("%% translate (1, 2) ,,").unwrap();
        assert_eq!(m, Matrix2D::translation(1.0, 2.0));
    }

    #[test]
    fn test_wrong_arity_is_ignored() {
        assert_eq!(parse_transform("matrix(1 2 3)"), None);
        assert_eq!(parse_transform("rotate(1 2)"), None);
    }

    #[test]
    fn test_matrix_composes() {
        let m = parse_transform("translate(1 0) matrix(2 0 0 2 0 0)").unwrap();
        assert_eq!(m.map_point(1.0, 1.0), (3.0, 2.0));
    }
}
