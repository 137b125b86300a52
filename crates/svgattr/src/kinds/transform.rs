//! `transform`.

use crate::property::Resolution;
use crate::values::{Matrix2D, parse_transform};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub matrix: Matrix2D,
}

impl Transform {
    pub(crate) fn load(&mut self, text: &str) -> Resolution {
        match parse_transform(text) {
            Some(matrix) => {
                self.matrix = matrix;
                Resolution::Resolved
            }
            None => Resolution::Unset,
        }
    }
}
