//! Element-level glue: one attribute map per element, then one property per attribute.

use svgattr::{BindContext, DrawContext, NodeLookup, Property, PropertyRegistry, Resolution};
use svgcss::{AttributeMap, StyleSheet, parse_style_attribute};

/// Merges everything that styles an element into a single attribute map.
///
/// Sources are applied in order, later ones overriding earlier ones:
///
/// 1. the element's presentation attributes
/// 2. the stylesheet's element selector for `element_name`
/// 3. a class selector for each name in `class`, in attribute order
/// 4. the id selector named by `id`
/// 5. the inline `style` attribute
///
/// ```
/// use svgweave::element::cascade_attributes;
/// use svgweave::svgcss::{AttributeMap, parse_stylesheet};
///
/// let sheet = parse_stylesheet("rect { fill: blue } .warn { fill: orange }");
/// let attrs: AttributeMap = [("class", "warn"), ("fill", "black")].into_iter().collect();
///
/// let merged = cascade_attributes("rect", &attrs, &sheet);
/// assert_eq!(merged.get("fill"), Some("orange"));
/// ```
pub fn cascade_attributes(
    element_name: &str,
    presentation: &AttributeMap,
    sheet: &StyleSheet,
) -> AttributeMap {
    let mut merged = presentation.clone();

    if let Some(selector) = sheet.element_selector(element_name) {
        merged.merge(selector.attributes());
    }

    if let Some(classes) = presentation.get("class") {
        for class in classes.split_whitespace() {
            match sheet.class_selector(class) {
                Some(selector) => {
                    merged.merge(selector.attributes());
                }
                None => log::trace!("no rule for class '{class}'"),
            }
        }
    }

    if let Some(selector) = presentation.get("id").and_then(|id| sheet.id_selector(id.trim())) {
        merged.merge(selector.attributes());
    }

    if let Some(style) = presentation.get("style") {
        merged.merge(&parse_style_attribute(style));
    }

    merged
}

/// The properties of one element.
#[derive(Clone, Debug, Default)]
pub struct ElementProperties {
    properties: Vec<Property>,
}

impl ElementProperties {
    /// Creates a property for every attribute the registry knows, plus a
    /// `font` selection when any font attribute is present.
    ///
    /// Attributes with no registered constructor are ignored.
    pub fn build(registry: &PropertyRegistry, attributes: &AttributeMap) -> Self {
        let mut properties: Vec<Property> = attributes
            .iter()
            .filter_map(|(name, value)| registry.create(name, value))
            .collect();

        if let Some(font) = Property::font_selection(attributes) {
            properties.push(font);
        }

        Self { properties }
    }

    /// Binds every property still waiting on the document.
    pub fn bind_all(&mut self, ctx: &mut dyn BindContext) {
        for property in &mut self.properties {
            if property.bind(Some(&mut *ctx)) == Resolution::Unset {
                log::trace!("{} '{}' left unset", property.name(), property.raw_value());
            }
        }
    }

    /// Draws the auto-drawn properties in attribute order.
    pub fn draw_all(&self, ctx: &mut dyn DrawContext, nodes: &dyn NodeLookup) {
        for property in &self.properties {
            property.draw(ctx, nodes);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Property> {
        self.properties.iter_mut().find(|p| p.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl IntoIterator for ElementProperties {
    type Item = Property;
    type IntoIter = std::vec::IntoIter<Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}
