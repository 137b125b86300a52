//! Text-to-value conversions used by the property parsers.

pub mod angle;
pub mod dimension;
pub mod matrix;
pub mod number;
pub mod transform;
pub mod url;

pub use angle::parse_angle;
pub use dimension::{Dimension, Units};
pub use matrix::Matrix2D;
pub use number::{next_number, parse_number, parse_number_list};
pub use transform::{TransformCommand, parse_transform, parse_transform_commands};
pub use url::{is_url, split_url_fallback, url_reference};
