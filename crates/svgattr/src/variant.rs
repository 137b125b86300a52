//! Resolved property values.

use svgcss::RgbaColor;

use crate::context::NodeId;
use crate::values::Matrix2D;

/// Backend handle for a gradient paint server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GradientHandle(pub u32);

/// Backend handle for a pattern paint server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PatternHandle(pub u32);

/// Backend handle for a selected font face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FontHandle(pub u32);

/// The value a property or node exposes to others.
///
/// `Reference` does not copy the target's value; it names the node, and the
/// value is looked up each time it is needed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TypedValue {
    #[default]
    Empty,
    Scalar(f64),
    Color(RgbaColor),
    Matrix(Matrix2D),
    Gradient(GradientHandle),
    Pattern(PatternHandle),
    Font(FontHandle),
    Reference(NodeId),
}

impl TypedValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, TypedValue::Empty)
    }

    /// The value as a paint, when it is one of the paintable kinds.
    pub fn as_paint(&self) -> Option<PaintSource> {
        match *self {
            TypedValue::Color(color) => Some(PaintSource::Color(color)),
            TypedValue::Gradient(handle) => Some(PaintSource::Gradient(handle)),
            TypedValue::Pattern(handle) => Some(PaintSource::Pattern(handle)),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match *self {
            TypedValue::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<Matrix2D> {
        match *self {
            TypedValue::Matrix(matrix) => Some(matrix),
            _ => None,
        }
    }
}

/// What a fill or stroke is painted with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintSource {
    Color(RgbaColor),
    Gradient(GradientHandle),
    Pattern(PatternHandle),
}

impl From<RgbaColor> for TypedValue {
    fn from(color: RgbaColor) -> Self {
        TypedValue::Color(color)
    }
}

impl From<Matrix2D> for TypedValue {
    fn from(matrix: Matrix2D) -> Self {
        TypedValue::Matrix(matrix)
    }
}
