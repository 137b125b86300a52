//! An in-memory node table implementing the binding context.
//!
//! Nodes are addressed by [`NodeId`], an index that stays valid for the life of
//! the table. Removing a node leaves a tombstone behind, so a property still
//! holding its id resolves to nothing instead of to some other node.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::context::{BindContext, FontService, NodeId, NodeLookup};
use crate::error::BindError;
use crate::property::Property;
use crate::variant::TypedValue;

/// One document node as seen by properties.
#[derive(Clone, Debug, Default)]
pub struct Node {
    id: Option<String>,
    variant: TypedValue,
    properties: Vec<Property>,
    removed: bool,
}

impl Node {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn variant(&self) -> TypedValue {
        self.variant
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name() == name)
    }

    fn needs_binding(&self) -> bool {
        self.properties.iter().any(Property::needs_binding)
    }
}

/// Document nodes plus the metrics binding needs.
///
/// Binding a node binds each of its pending properties. A node that is
/// reached again while it is still being bound reports
/// [`BindError::Cycle`], so the property that closed the loop resolves as
/// unset and the first binding wins.
pub struct NodeTable {
    nodes: Vec<Node>,
    by_id: HashMap<String, NodeId>,
    in_progress: HashSet<NodeId>,
    updates: HashMap<NodeId, usize>,
    dpi: f64,
    font_size: f64,
    font_service: Option<Box<dyn FontService>>,
}

impl Default for NodeTable {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            by_id: HashMap::new(),
            in_progress: HashSet::new(),
            updates: HashMap::new(),
            dpi: 96.0,
            font_size: 16.0,
            font_service: None,
        }
    }
}

impl NodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    /// Sets the font size `em` lengths are resolved against.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_font_service(mut self, service: impl FontService + 'static) -> Self {
        self.font_service = Some(Box::new(service));
        self
    }

    /// Adds a node. An `id` already in use is taken over by the new node.
    pub fn add_node(&mut self, id: Option<&str>, variant: TypedValue) -> NodeId {
        let node_id = NodeId(self.nodes.len() as u32);
        if let Some(id) = id {
            self.by_id.insert(id.to_string(), node_id);
        }
        self.nodes.push(Node {
            id: id.map(str::to_string),
            variant,
            properties: Vec::new(),
            removed: false,
        });
        node_id
    }

    fn live(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node.0 as usize).filter(|n| !n.removed)
    }

    fn live_mut(&mut self, node: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(node.0 as usize).filter(|n| !n.removed)
    }

    pub fn node(&self, node: NodeId) -> Option<&Node> {
        self.live(node)
    }

    /// Attaches a property to a node. Returns `false` for unknown nodes.
    pub fn add_property(&mut self, node: NodeId, property: Property) -> bool {
        match self.live_mut(node) {
            Some(n) => {
                n.properties.push(property);
                true
            }
            None => false,
        }
    }

    pub fn set_variant(&mut self, node: NodeId, variant: TypedValue) -> bool {
        match self.live_mut(node) {
            Some(n) => {
                n.variant = variant;
                true
            }
            None => false,
        }
    }

    /// Removes a node. Its id stops resolving and references to it read as empty.
    pub fn remove_node(&mut self, node: NodeId) -> bool {
        let Some(n) = self.live_mut(node) else {
            return false;
        };
        n.removed = true;
        n.variant = TypedValue::Empty;
        n.properties.clear();
        let id = n.id.take();

        if let Some(id) = id {
            if self.by_id.get(&id) == Some(&node) {
                self.by_id.remove(&id);
            }
        }
        true
    }

    pub fn property(&self, node: NodeId, name: &str) -> Option<&Property> {
        self.live(node)?.property(name)
    }

    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| !n.removed).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Binds every node in insertion order.
    pub fn bind_all(&mut self) {
        for index in 0..self.nodes.len() {
            let node = NodeId(index as u32);
            if let Err(err) = self.bind_node(node) {
                log::debug!("bind_all: {err}");
            }
        }
    }

    /// How many change notifications `node` has received.
    pub fn update_count(&self, node: NodeId) -> usize {
        self.updates.get(&node).copied().unwrap_or(0)
    }
}

impl NodeLookup for NodeTable {
    fn find_node_by_id(&self, id: &str) -> Option<NodeId> {
        self.by_id.get(id).copied()
    }

    fn node_variant(&self, node: NodeId) -> TypedValue {
        self.live(node).map_or(TypedValue::Empty, Node::variant)
    }

    fn node_needs_binding(&self, node: NodeId) -> bool {
        self.in_progress.contains(&node) || self.live(node).is_some_and(Node::needs_binding)
    }

    fn dpi(&self) -> f64 {
        self.dpi
    }

    fn font_size(&self) -> f64 {
        self.font_size
    }

    fn font_service(&self) -> Option<&dyn FontService> {
        self.font_service.as_deref()
    }
}

impl BindContext for NodeTable {
    fn bind_node(&mut self, node: NodeId) -> Result<(), BindError> {
        if self.live(node).is_none() {
            return Err(BindError::UnknownNode(node));
        }
        if !self.in_progress.insert(node) {
            log::debug!("cycle while binding {node}");
            return Err(BindError::Cycle(node));
        }

        let index = node.0 as usize;
        let mut properties = std::mem::take(&mut self.nodes[index].properties);
        {
            let ctx: &mut dyn BindContext = self;
            for property in &mut properties {
                property.bind(Some(&mut *ctx));
            }
        }
        // The node may have been removed while its properties were out.
        if !self.nodes[index].removed {
            self.nodes[index].properties = properties;
        }

        self.in_progress.remove(&node);
        Ok(())
    }

    fn update_node(&mut self, node: NodeId) {
        *self.updates.entry(node).or_insert(0) += 1;
    }
}

impl fmt::Debug for NodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeTable")
            .field("nodes", &self.nodes)
            .field("dpi", &self.dpi)
            .field("font_size", &self.font_size)
            .field("has_font_service", &self.font_service.is_some())
            .finish()
    }
}
