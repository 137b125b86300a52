//! A single attribute value and its parse, bind, draw lifecycle.
//!
//! A [`Property`] is created from an attribute name, loaded from the
//! attribute's text, optionally bound against the document once the tree is
//! complete, and finally drawn. Loading never consults the document; anything
//! that needs it (references, dpi-dependent lengths, fonts) is deferred until
//! [`Property::bind`].
//!
//! ```
//! use svgattr::{Property, Resolution};
//! use svgattr::kinds::{Paint, PaintTarget, PropertyKind};
//!
//! let mut fill = Property::new("fill", PropertyKind::Paint(Paint::new(PaintTarget::Fill)));
//! assert_eq!(fill.load_from_chunk("#ff0000"), Ok(Resolution::Resolved));
//! assert!(fill.is_set());
//!
//! assert_eq!(fill.load_from_chunk("url(#grad1)"), Ok(Resolution::Deferred));
//! assert!(fill.needs_binding());
//! assert!(!fill.is_set());
//! ```

use bitflags::bitflags;

use crate::context::{BindContext, DrawContext, NodeLookup, resolve_variant};
use crate::error::PropertyError;
use crate::kinds::font::FontSelection;
use crate::kinds::PropertyKind;
use crate::variant::TypedValue;

bitflags! {
    /// State flags of a property.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PropertyFlags: u8 {
        /// The property holds a usable value.
        const SET = 1 << 0;
        /// The value waits on document context.
        const NEEDS_BINDING = 1 << 1;
        /// Drawn during the element's normal draw pass.
        const AUTO_DRAW = 1 << 2;
        const VISIBLE = 1 << 3;
    }
}

/// Where a property stands after loading or binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// A usable value is available.
    Resolved,
    /// No value; the element falls back to inherited or default appearance.
    Unset,
    /// The value waits for [`Property::bind`].
    Deferred,
}

/// One attribute of one element.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    name: String,
    raw: String,
    flags: PropertyFlags,
    kind: PropertyKind,
}

impl Property {
    /// Creates an unloaded property. Auto-draw follows the kind.
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        let mut flags = PropertyFlags::VISIBLE;
        flags.set(PropertyFlags::AUTO_DRAW, kind.auto_draws());
        Self {
            name: name.into(),
            raw: String::new(),
            flags,
            kind,
        }
    }

    /// Builds the font selection for an element from its font attributes.
    ///
    /// Returns `None` when none of the font attributes are present.
    pub fn font_selection(attrs: &svgcss::AttributeMap) -> Option<Property> {
        let declarations = FontSelection::declarations(attrs);
        if declarations.is_empty() {
            return None;
        }

        let mut property = Property::new(
            "font",
            PropertyKind::FontSelection(FontSelection::default()),
        );
        property.load_from_chunk(&declarations).ok()?;
        Some(property)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The text the property was last loaded from.
    pub fn raw_value(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> &PropertyKind {
        &self.kind
    }

    pub fn flags(&self) -> PropertyFlags {
        self.flags
    }

    pub fn is_set(&self) -> bool {
        self.flags.contains(PropertyFlags::SET)
    }

    pub fn needs_binding(&self) -> bool {
        self.flags.contains(PropertyFlags::NEEDS_BINDING)
    }

    pub fn auto_draw(&self) -> bool {
        self.flags.contains(PropertyFlags::AUTO_DRAW)
    }

    pub fn set_auto_draw(&mut self, auto_draw: bool) {
        self.flags.set(PropertyFlags::AUTO_DRAW, auto_draw);
    }

    pub fn visible(&self) -> bool {
        self.flags.contains(PropertyFlags::VISIBLE)
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(PropertyFlags::VISIBLE, visible);
    }

    /// The current state, derived from the flags.
    pub fn resolution(&self) -> Resolution {
        if self.needs_binding() {
            Resolution::Deferred
        } else if self.is_set() {
            Resolution::Resolved
        } else {
            Resolution::Unset
        }
    }

    fn apply(&mut self, resolution: Resolution) -> Resolution {
        self.flags.set(PropertyFlags::SET, resolution == Resolution::Resolved);
        self.flags
            .set(PropertyFlags::NEEDS_BINDING, resolution == Resolution::Deferred);
        resolution
    }

    /// Parses attribute text.
    ///
    /// Only empty text is an error. Text that is present but not usable leaves
    /// the property unset and returns `Ok(Resolution::Unset)`.
    pub fn load_from_chunk(&mut self, text: &str) -> Result<Resolution, PropertyError> {
        self.raw = text.to_string();

        let text = text.trim();
        if text.is_empty() {
            self.apply(Resolution::Unset);
            return Err(PropertyError::Empty);
        }

        let resolution = self.kind.load(text);
        Ok(self.apply(resolution))
    }

    /// Resolves a deferred value against the document.
    ///
    /// Does nothing when the property is not waiting on binding, or when no
    /// context is available yet; the current resolution is returned either way.
    /// A missing or unusable reference leaves the property unset.
    pub fn bind(&mut self, ctx: Option<&mut dyn BindContext>) -> Resolution {
        let Some(ctx) = ctx else {
            return self.resolution();
        };
        if !self.needs_binding() {
            return self.resolution();
        }

        let resolution = self.kind.bind(ctx);
        log::trace!("bound {} '{}': {resolution:?}", self.name, self.raw);
        self.apply(resolution)
    }

    /// Re-reads the raw text and binds again, for use after the document changed.
    pub fn rebind(&mut self, ctx: &mut dyn BindContext) -> Resolution {
        let raw = std::mem::take(&mut self.raw);
        if self.load_from_chunk(&raw).is_err() {
            return Resolution::Unset;
        }
        self.bind(Some(ctx))
    }

    /// Issues the drawing call for this property's value.
    ///
    /// Does nothing unless the property is set, visible and auto-drawn.
    pub fn draw(&self, ctx: &mut dyn DrawContext, nodes: &dyn NodeLookup) {
        if !self.auto_draw() {
            return;
        }
        self.draw_self(ctx, nodes);
    }

    /// Like [`draw`](Self::draw) but ignores auto-draw, for properties an
    /// element consults explicitly (transforms, markers).
    pub fn draw_self(&self, ctx: &mut dyn DrawContext, nodes: &dyn NodeLookup) {
        if self.is_set() && self.visible() {
            self.kind.draw(ctx, nodes);
        }
    }

    /// Tells the referenced node, if any, that it should recompute.
    pub fn update(&self, ctx: &mut dyn BindContext) {
        if let Some(node) = self.kind.referenced_node() {
            ctx.update_node(node);
        }
    }

    /// The property's value, with references followed to the node they name.
    pub fn variant(&self, nodes: &dyn NodeLookup) -> TypedValue {
        if !self.is_set() {
            return TypedValue::Empty;
        }
        resolve_variant(nodes, self.kind.variant())
    }
}
