//! Attribute name to property constructor table.
//!
//! Hosts either build a [`PropertyRegistry`] themselves or use the shared
//! [`standard_registry`], which is populated in one step the first time it is
//! used.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::kinds::{
    CapSide, ClipPath, ExtendMode, FillRule, FontSize, FontStretch, FontStyle, FontWeight,
    LineCap, LineJoin, MarkerOrient, NodeReference, Opacity, OpacityTarget, Paint, PaintOrder,
    PaintTarget, PropertyKind, StrokeWidth, TextAnchor, Transform, VectorEffect, ViewBox,
};
use crate::kinds::stroke::DEFAULT_MITER_LIMIT;
use crate::property::Property;

/// Constructs an unloaded property.
pub type PropertyFactory = Box<dyn Fn() -> Property + Send + Sync>;

static STANDARD: Lazy<PropertyRegistry> = Lazy::new(PropertyRegistry::standard);

/// The shared registry of every standard attribute.
pub fn standard_registry() -> &'static PropertyRegistry {
    &STANDARD
}

/// Maps attribute names to property constructors.
///
/// ```
/// use svgattr::PropertyRegistry;
///
/// let registry = PropertyRegistry::standard();
/// let stroke = registry.create("stroke-linecap-start", "round").unwrap();
/// assert!(stroke.is_set());
/// assert!(registry.create("data-whatever", "1").is_none());
/// ```
#[derive(Default)]
pub struct PropertyRegistry {
    factories: HashMap<String, PropertyFactory>,
}

impl PropertyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a constructor. A later registration for the same name replaces the earlier one.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Property + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Registers a name whose property is `kind` with its default value.
    fn register_kind(&mut self, name: &'static str, kind: PropertyKind) {
        self.register(name, move || Property::new(name, kind.clone()));
    }

    /// Constructs the property for `name` and loads `text` into it.
    ///
    /// Returns `None` for names with no registered constructor. Empty text
    /// still yields a property, left unset.
    pub fn create(&self, name: &str, text: &str) -> Option<Property> {
        let factory = self.factories.get(name)?;
        let mut property = factory();
        if property.load_from_chunk(text).is_err() {
            log::trace!("empty value for {name}");
        }
        Some(property)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// A registry holding every standard attribute.
    pub fn standard() -> Self {
        let mut registry = Self::new();

        registry.register_kind("fill", PropertyKind::Paint(Paint::new(PaintTarget::Fill)));
        registry.register_kind("stroke", PropertyKind::Paint(Paint::new(PaintTarget::Stroke)));
        registry.register_kind("transform", PropertyKind::Transform(Transform::default()));

        for (name, target) in [
            ("opacity", OpacityTarget::Global),
            ("fill-opacity", OpacityTarget::Fill),
            ("stroke-opacity", OpacityTarget::Stroke),
        ] {
            registry.register_kind(name, PropertyKind::Opacity(Opacity::new(target)));
        }

        registry.register_kind("fill-rule", PropertyKind::FillRule(FillRule::default()));
        registry.register_kind("stroke-width", PropertyKind::StrokeWidth(StrokeWidth::default()));
        registry.register_kind("stroke-miterlimit", PropertyKind::MiterLimit(DEFAULT_MITER_LIMIT));

        for (name, side) in [
            ("stroke-linecap", CapSide::Both),
            ("stroke-linecap-start", CapSide::Start),
            ("stroke-linecap-end", CapSide::End),
        ] {
            let cap = LineCap::default();
            registry.register_kind(name, PropertyKind::LineCap { side, cap });
        }

        registry.register_kind("stroke-linejoin", PropertyKind::LineJoin(LineJoin::default()));
        registry.register_kind(
            "vector-effect",
            PropertyKind::VectorEffect(VectorEffect::default()),
        );

        registry.register_kind("font-size", PropertyKind::FontSize(FontSize::default()));
        registry.register_kind("font-family", PropertyKind::FontFamily(String::new()));
        registry.register_kind("font-style", PropertyKind::FontStyle(FontStyle::default()));
        registry.register_kind("font-weight", PropertyKind::FontWeight(FontWeight::default()));
        registry.register_kind("font-stretch", PropertyKind::FontStretch(FontStretch::default()));

        registry.register_kind("text-anchor", PropertyKind::TextAlign(TextAnchor::default()));
        registry.register_kind("text-align", PropertyKind::TextAlign(TextAnchor::default()));

        for name in ["marker", "marker-start", "marker-mid", "marker-end"] {
            registry.register_kind(name, PropertyKind::Marker(NodeReference::default()));
        }
        registry.register_kind("orient", PropertyKind::Orient(MarkerOrient::default()));
        registry.register_kind("clip-path", PropertyKind::ClipPath(ClipPath::default()));

        registry.register_kind("viewBox", PropertyKind::ViewBox(ViewBox::default()));
        registry.register_kind("paint-order", PropertyKind::PaintOrder(PaintOrder::default()));
        registry.register_kind("extendMode", PropertyKind::ExtendMode(ExtendMode::default()));
        registry.register_kind("systemLanguage", PropertyKind::Raw);

        registry
    }
}

impl fmt::Debug for PropertyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyRegistry")
            .field("names", &self.names())
            .finish()
    }
}
