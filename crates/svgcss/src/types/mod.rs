pub mod attributes;
pub mod color;
pub mod named_colors;
pub mod selector;
pub mod stylesheet;

pub use attributes::AttributeMap;
pub use color::{ColorParseError, RgbaColor};
pub use selector::{Selector, SelectorKind};
pub use stylesheet::StyleSheet;
