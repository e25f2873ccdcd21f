// SPDX-License-Identifier: MPL-2.0
//! In-memory reference implementation of the view surface.
//!
//! Holds a flat node list in document order with just enough fidelity for
//! the engine: ids, classes, attributes, text/placeholder, inline styles,
//! layout rects, and parent links for containment checks. Tests and the
//! demo binary build pages with [`NodeSpec`] and drive the engine against
//! this host.

use super::{ElementKind, NodeId, Rect, Surface, Viewport};
use std::collections::BTreeMap;

/// Declarative description of one element, consumed by
/// [`MemorySurface::insert`].
#[derive(Debug, Clone, Default)]
pub struct NodeSpec {
    id: Option<String>,
    kind: ElementKind,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    text: Option<String>,
    rect: Option<Rect>,
    parent: Option<NodeId>,
}

impl NodeSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn kind(mut self, kind: ElementKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn rect(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.rect = Some(Rect::new(x, y, width, height));
        self
    }

    pub fn parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    id: Option<String>,
    kind: ElementKind,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    text: Option<String>,
    placeholder: Option<String>,
    styles: BTreeMap<String, String>,
    rect: Option<Rect>,
    parent: Option<u32>,
    alive: bool,
}

/// The reference host: a scriptable page model.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    nodes: Vec<NodeData>,
    path: String,
    viewport: Viewport,
}

impl MemorySurface {
    pub fn new(path: &str, width: f64, height: f64) -> Self {
        Self {
            nodes: Vec::new(),
            path: path.to_string(),
            viewport: Viewport {
                scroll_offset: 0.0,
                width,
                height,
            },
        }
    }

    /// Adds an element to the page. Insertion order is document order.
    pub fn insert(&mut self, spec: NodeSpec) -> NodeId {
        let index = self.nodes.len() as u32;
        self.nodes.push(NodeData {
            id: spec.id,
            kind: spec.kind,
            classes: spec.classes,
            attrs: spec.attrs,
            text: spec.text,
            placeholder: None,
            styles: BTreeMap::new(),
            rect: spec.rect,
            parent: spec.parent.map(|p| p.0),
            alive: true,
        });
        NodeId(index)
    }

    /// Host-side scroll mutation; the engine observes it via `viewport()`.
    pub fn set_scroll(&mut self, offset: f64) {
        self.viewport.scroll_offset = offset.max(0.0);
    }

    /// Number of live nodes, decoration spawns included.
    pub fn live_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.alive).count()
    }

    fn get(&self, node: NodeId) -> Option<&NodeData> {
        self.nodes.get(node.0 as usize).filter(|n| n.alive)
    }

    fn get_mut(&mut self, node: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(node.0 as usize).filter(|n| n.alive)
    }
}

impl Surface for MemorySurface {
    fn location_path(&self) -> String {
        self.path.clone()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn query_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.alive && n.id.as_deref() == Some(id))
            .map(|i| NodeId(i as u32))
    }

    fn query_class(&self, class: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.alive && n.classes.iter().any(|c| c == class))
            .map(|(i, _)| NodeId(i as u32))
            .collect()
    }

    fn query_attr(&self, name: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.alive && n.attrs.contains_key(name))
            .map(|(i, _)| NodeId(i as u32))
            .collect()
    }

    fn kind(&self, node: NodeId) -> ElementKind {
        self.get(node).map(|n| n.kind).unwrap_or_default()
    }

    fn attr(&self, node: NodeId, name: &str) -> Option<String> {
        self.get(node).and_then(|n| n.attrs.get(name).cloned())
    }

    fn text(&self, node: NodeId) -> Option<String> {
        self.get(node).and_then(|n| n.text.clone())
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(n) = self.get_mut(node) {
            n.text = Some(text.to_string());
        }
    }

    fn placeholder(&self, node: NodeId) -> Option<String> {
        self.get(node).and_then(|n| n.placeholder.clone())
    }

    fn set_placeholder(&mut self, node: NodeId, text: &str) {
        if let Some(n) = self.get_mut(node) {
            n.placeholder = Some(text.to_string());
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.get(node)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.get_mut(node) {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.get_mut(node) {
            n.classes.retain(|c| c != class);
        }
    }

    fn rect(&self, node: NodeId) -> Option<Rect> {
        self.get(node).and_then(|n| n.rect)
    }

    fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.get(node).and_then(|n| n.styles.get(property).cloned())
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(n) = self.get_mut(node) {
            n.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|n| n.parent).map(NodeId)
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        if self.get(node).is_none() || self.get(ancestor).is_none() {
            return false;
        }
        let mut current = Some(node.0);
        while let Some(index) = current {
            if index == ancestor.0 {
                return true;
            }
            current = self.nodes.get(index as usize).and_then(|n| n.parent);
        }
        false
    }

    fn scroll_to(&mut self, node: NodeId) {
        if let Some(rect) = self.rect(node) {
            self.viewport.scroll_offset = rect.y.max(0.0);
        }
    }

    fn spawn_child(&mut self, parent: NodeId, class: &str) -> Option<NodeId> {
        self.get(parent)?;
        let index = self.nodes.len() as u32;
        self.nodes.push(NodeData {
            id: None,
            kind: ElementKind::Other,
            classes: vec![class.to_string()],
            attrs: BTreeMap::new(),
            text: None,
            placeholder: None,
            styles: BTreeMap::new(),
            rect: None,
            parent: Some(parent.0),
            alive: true,
        });
        Some(NodeId(index))
    }

    fn remove_node(&mut self, node: NodeId) {
        if let Some(n) = self.nodes.get_mut(node.0 as usize) {
            n.alive = false;
        }
    }
}
