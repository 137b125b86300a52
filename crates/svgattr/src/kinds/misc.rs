//! `viewBox`, `paint-order` and pattern `extendMode`.

use super::Keyword;
use crate::property::Resolution;
use crate::values::next_number;

/// The `viewBox` rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Reads four numbers; anything less leaves the property unset.
    pub(crate) fn load(&mut self, text: &str) -> Resolution {
        let mut values = [0.0; 4];
        let mut remaining = text;
        for slot in &mut values {
            let Some((value, rest)) = next_number(remaining) else {
                return Resolution::Unset;
            };
            *slot = value;
            remaining = rest;
        }

        let [x, y, width, height] = values;
        *self = ViewBox {
            x,
            y,
            width,
            height,
        };
        Resolution::Resolved
    }

    pub fn translate_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Scales about `(cx, cy)`.
    pub fn scale_by(&mut self, sx: f64, sy: f64, cx: f64, cy: f64) {
        self.x = cx + (self.x - cx) * sx;
        self.y = cy + (self.y - cy) * sy;
        self.width *= sx;
        self.height *= sy;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintOrderItem {
    Fill,
    Stroke,
    Markers,
}

impl Keyword for PaintOrderItem {
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("fill", Self::Fill),
        ("stroke", Self::Stroke),
        ("markers", Self::Markers),
    ];
}

/// The order in which a shape paints its fill, stroke and markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaintOrder(pub [PaintOrderItem; 3]);

impl Default for PaintOrder {
    fn default() -> Self {
        PaintOrder([
            PaintOrderItem::Fill,
            PaintOrderItem::Stroke,
            PaintOrderItem::Markers,
        ])
    }
}

impl PaintOrder {
    /// `normal`, or one or more of `fill`, `stroke` and `markers`.
    ///
    /// Items not named follow in their default order.
    pub(crate) fn load(&mut self, text: &str) -> Resolution {
        if text == "normal" {
            *self = PaintOrder::default();
            return Resolution::Resolved;
        }

        let mut order = Vec::with_capacity(3);
        for word in text.split_whitespace() {
            let Some(item) = PaintOrderItem::from_keyword(word) else {
                return Resolution::Unset;
            };
            if order.contains(&item) {
                return Resolution::Unset;
            }
            order.push(item);
        }
        for item in PaintOrder::default().0 {
            if !order.contains(&item) {
                order.push(item);
            }
        }

        if let Ok(items) = <[PaintOrderItem; 3]>::try_from(order) {
            self.0 = items;
        }
        Resolution::Resolved
    }
}

/// How a pattern tiles along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtendAxis {
    Pad,
    Repeat,
    Reflect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtendMode {
    pub x: ExtendAxis,
    pub y: ExtendAxis,
}

impl Default for ExtendMode {
    fn default() -> Self {
        Self::uniform(ExtendAxis::Repeat)
    }
}

impl ExtendMode {
    pub const fn uniform(axis: ExtendAxis) -> Self {
        Self { x: axis, y: axis }
    }

    const fn xy(x: ExtendAxis, y: ExtendAxis) -> Self {
        Self { x, y }
    }
}

impl Keyword for ExtendMode {
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("pad", Self::uniform(ExtendAxis::Pad)),
        ("repeat", Self::uniform(ExtendAxis::Repeat)),
        ("reflect", Self::uniform(ExtendAxis::Reflect)),
        ("pad-x-pad-y", Self::xy(ExtendAxis::Pad, ExtendAxis::Pad)),
        ("pad-x-repeat-y", Self::xy(ExtendAxis::Pad, ExtendAxis::Repeat)),
        ("pad-x-reflect-y", Self::xy(ExtendAxis::Pad, ExtendAxis::Reflect)),
        ("repeat-x-pad-y", Self::xy(ExtendAxis::Repeat, ExtendAxis::Pad)),
        ("repeat-x-repeat-y", Self::xy(ExtendAxis::Repeat, ExtendAxis::Repeat)),
        ("repeat-x-reflect-y", Self::xy(ExtendAxis::Repeat, ExtendAxis::Reflect)),
        ("reflect-x-pad-y", Self::xy(ExtendAxis::Reflect, ExtendAxis::Pad)),
        ("reflect-x-repeat-y", Self::xy(ExtendAxis::Reflect, ExtendAxis::Repeat)),
        ("reflect-x-reflect-y", Self::xy(ExtendAxis::Reflect, ExtendAxis::Reflect)),
    ];
}
