//! `opacity`, `fill-opacity` and `stroke-opacity`.

use crate::context::DrawContext;
use crate::property::Resolution;
use crate::values::{Dimension, Units};

/// Which opacity a property controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpacityTarget {
    Global,
    Fill,
    Stroke,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Opacity {
    pub target: OpacityTarget,
    /// Always within `0.0..=1.0`.
    pub value: f64,
}

impl Opacity {
    pub fn new(target: OpacityTarget) -> Self {
        Self { target, value: 1.0 }
    }

    /// Accepts a number or a percentage.
    pub(crate) fn load(&mut self, text: &str) -> Resolution {
        let Some(dim) = Dimension::parse(text) else {
            return Resolution::Unset;
        };
        let value = match dim.units() {
            Units::User => dim.value(),
            Units::Percent => dim.calculate_pixels(1.0, 0.0, 96.0),
            _ => return Resolution::Unset,
        };
        self.value = value.clamp(0.0, 1.0);
        Resolution::Resolved
    }

    pub(crate) fn draw(&self, ctx: &mut dyn DrawContext) {
        match self.target {
            OpacityTarget::Global => ctx.global_opacity(self.value),
            OpacityTarget::Fill => ctx.fill_opacity(self.value),
            OpacityTarget::Stroke => ctx.stroke_opacity(self.value),
        }
    }
}
