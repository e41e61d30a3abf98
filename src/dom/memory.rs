// SPDX-License-Identifier: MPL-2.0
//! Retained in-memory node tree.
//!
//! `MemoryDom` is the default [`Substrate`]: an arena of element nodes with
//! attributes, text and ordered children. It renders nothing by itself; the
//! iced front end walks it to build widgets, and tests inspect it directly.

use super::{NodeId, Substrate};
use crate::error::RenderError;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
struct NodeData {
    tag: String,
    attributes: BTreeMap<String, String>,
    text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    listening: bool,
}

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    data: Option<NodeData>,
}

/// Arena-backed element tree.
///
/// Released nodes give their slot back to a free list. A reused slot gets a
/// new generation, so ids of released nodes stay invalid.
#[derive(Debug, Clone, Default)]
pub struct MemoryDom {
    slots: Vec<Slot>,
    free: Vec<usize>,
}

impl MemoryDom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (not released) nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Returns whether `node` is a live node of this tree.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.node(node).is_ok()
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.node(node).ok().map(|data| data.tag.as_str())
    }

    #[must_use]
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node)
            .ok()
            .and_then(|data| data.attributes.get(name))
            .map(String::as_str)
    }

    /// Returns whether the node's `class` attribute lists `class`.
    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.attribute(node, "class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// The node's own text, without descendants.
    #[must_use]
    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.node(node).ok().map(|data| data.text.as_str())
    }

    /// The node's text followed by the text of all descendants, in tree order.
    #[must_use]
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node)
            .map(|data| data.children.as_slice())
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).ok().and_then(|data| data.parent)
    }

    #[must_use]
    pub fn is_listening(&self, node: NodeId) -> bool {
        self.node(node).is_ok_and(|data| data.listening)
    }

    /// Returns whether `ancestor` is `node` or one of its ancestors.
    #[must_use]
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// First descendant of `root` (depth first, `root` included) carrying `class`.
    #[must_use]
    pub fn find_by_class(&self, root: NodeId, class: &str) -> Option<NodeId> {
        if self.has_class(root, class) {
            return Some(root);
        }
        self.children(root)
            .iter()
            .find_map(|&child| self.find_by_class(child, class))
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        if let Ok(data) = self.node(node) {
            out.push_str(&data.text);
            for &child in &data.children {
                self.collect_text(child, out);
            }
        }
    }

    fn node(&self, node: NodeId) -> Result<&NodeData, RenderError> {
        self.slots
            .get(node.raw())
            .filter(|slot| slot.generation == node.generation())
            .and_then(|slot| slot.data.as_ref())
            .ok_or(RenderError::UnknownNode(node))
    }

    fn node_mut(&mut self, node: NodeId) -> Result<&mut NodeData, RenderError> {
        self.slots
            .get_mut(node.raw())
            .filter(|slot| slot.generation == node.generation())
            .and_then(|slot| slot.data.as_mut())
            .ok_or(RenderError::UnknownNode(node))
    }

    fn detach(&mut self, child: NodeId) -> Result<(), RenderError> {
        if let Some(old_parent) = self.node(child)?.parent {
            self.node_mut(old_parent)?.children.retain(|&c| c != child);
            self.node_mut(child)?.parent = None;
        }
        Ok(())
    }
}

impl Substrate for MemoryDom {
    fn create_element(&mut self, tag: &str) -> NodeId {
        let data = NodeData {
            tag: tag.to_string(),
            ..NodeData::default()
        };
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.data = Some(data);
            return NodeId::with_generation(index, slot.generation);
        }
        self.slots.push(Slot {
            generation: 0,
            data: Some(data),
        });
        NodeId::from_raw(self.slots.len() - 1)
    }

    fn set_attribute(
        &mut self,
        node: NodeId,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), RenderError> {
        let data = self.node_mut(node)?;
        match value {
            Some(value) => {
                data.attributes.insert(name.to_string(), value.to_string());
            }
            None => {
                data.attributes.remove(name);
            }
        }
        Ok(())
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), RenderError> {
        let data = self.node_mut(node)?;
        data.text.clear();
        data.text.push_str(text);
        Ok(())
    }

    fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> Result<(), RenderError> {
        self.node(parent)?;
        self.node(child)?;
        if self.is_inclusive_ancestor(child, parent) {
            return Err(RenderError::CycleDetected { parent, child });
        }
        if let Some(reference) = reference {
            if self.parent(reference) != Some(parent) {
                return Err(RenderError::NotAChild {
                    parent,
                    child: reference,
                });
            }
        }

        self.detach(child)?;

        let siblings = &mut self.node_mut(parent)?.children;
        let index = reference
            .and_then(|r| siblings.iter().position(|&c| c == r))
            .unwrap_or(siblings.len());
        siblings.insert(index, child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), RenderError> {
        self.node(parent)?;
        if self.node(child)?.parent != Some(parent) {
            return Err(RenderError::NotAChild { parent, child });
        }
        self.detach(child)
    }

    fn listen_click(&mut self, node: NodeId) -> Result<(), RenderError> {
        self.node_mut(node)?.listening = true;
        Ok(())
    }

    fn first_child(&self, parent: NodeId) -> Option<NodeId> {
        self.children(parent).first().copied()
    }

    fn release(&mut self, node: NodeId) -> Result<(), RenderError> {
        self.detach(node)?;
        let mut pending = vec![node];
        while let Some(id) = pending.pop() {
            let slot = &mut self.slots[id.raw()];
            if let Some(data) = slot.data.take() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(id.raw());
                pending.extend(data.children);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> (MemoryDom, NodeId, NodeId, NodeId) {
        let mut dom = MemoryDom::new();
        let root = dom.create_element("div");
        let a = dom.create_element("span");
        let b = dom.create_element("span");
        dom.insert_before(root, a, None).unwrap();
        dom.insert_before(root, b, None).unwrap();
        (dom, root, a, b)
    }

    #[test]
    fn append_keeps_insertion_order() {
        let (dom, root, a, b) = tree();
        assert_eq!(dom.children(root), &[a, b]);
        assert_eq!(dom.parent(a), Some(root));
    }

    #[test]
    fn insert_before_reference_puts_child_first() {
        let (mut dom, root, a, b) = tree();
        let c = dom.create_element("span");
        dom.insert_before(root, c, Some(a)).unwrap();
        assert_eq!(dom.children(root), &[c, a, b]);
    }

    #[test]
    fn insert_moves_child_from_previous_parent() {
        let (mut dom, root, a, b) = tree();
        dom.insert_before(b, a, None).unwrap();
        assert_eq!(dom.children(root), &[b]);
        assert_eq!(dom.children(b), &[a]);
        assert_eq!(dom.parent(a), Some(b));
    }

    #[test]
    fn insert_rejects_cycles() {
        let (mut dom, root, a, _) = tree();
        let err = dom.insert_before(a, root, None).unwrap_err();
        assert_eq!(err, RenderError::CycleDetected { parent: a, child: root });
    }

    #[test]
    fn insert_rejects_foreign_reference() {
        let (mut dom, root, a, _) = tree();
        let stray = dom.create_element("div");
        let c = dom.create_element("div");
        let err = dom.insert_before(root, c, Some(stray)).unwrap_err();
        assert!(matches!(err, RenderError::NotAChild { .. }));
        assert_eq!(dom.children(root).len(), 2);
        assert_eq!(dom.parent(a), Some(root));
    }

    #[test]
    fn second_removal_reports_not_a_child() {
        let (mut dom, root, a, b) = tree();
        dom.remove_child(root, a).unwrap();
        assert_eq!(dom.children(root), &[b]);
        assert_eq!(
            dom.remove_child(root, a),
            Err(RenderError::NotAChild { parent: root, child: a })
        );
    }

    #[test]
    fn unknown_nodes_are_reported() {
        let mut dom = MemoryDom::new();
        let ghost = NodeId::from_raw(99);
        assert_eq!(
            dom.set_text(ghost, "x"),
            Err(RenderError::UnknownNode(ghost))
        );
        assert!(!dom.contains(ghost));
    }

    #[test]
    fn attributes_and_classes() {
        let (mut dom, root, _, _) = tree();
        dom.set_attribute(root, "class", Some("actions minimal"))
            .unwrap();
        assert!(dom.has_class(root, "minimal"));
        assert!(!dom.has_class(root, "min"));
        dom.set_attribute(root, "class", None).unwrap();
        assert_eq!(dom.attribute(root, "class"), None);
    }

    #[test]
    fn text_content_concatenates_descendants() {
        let (mut dom, root, a, b) = tree();
        dom.set_text(a, "Hello, ").unwrap();
        dom.set_text(b, "world").unwrap();
        assert_eq!(dom.text_content(root), "Hello, world");
        dom.set_text(a, "").unwrap();
        assert_eq!(dom.text_content(root), "world");
    }

    #[test]
    fn release_frees_the_whole_subtree() {
        let (mut dom, root, a, b) = tree();
        let host = dom.create_element("div");
        dom.insert_before(host, root, None).unwrap();
        assert_eq!(dom.node_count(), 4);

        dom.release(root).unwrap();

        assert_eq!(dom.node_count(), 1);
        assert!(dom.children(host).is_empty());
        for node in [root, a, b] {
            assert!(!dom.contains(node));
        }
        assert_eq!(dom.release(root), Err(RenderError::UnknownNode(root)));
    }

    #[test]
    fn reused_slot_does_not_alias_released_id() {
        let mut dom = MemoryDom::new();
        let old = dom.create_element("div");
        dom.release(old).unwrap();

        let new = dom.create_element("span");

        assert_eq!(new.raw(), old.raw());
        assert_ne!(new, old);
        assert_eq!(dom.tag(new), Some("span"));
        assert_eq!(dom.tag(old), None);
        assert_eq!(dom.set_text(old, "x"), Err(RenderError::UnknownNode(old)));
    }

    #[test]
    fn first_child_follows_insertions() {
        let (mut dom, root, a, _) = tree();
        assert_eq!(dom.first_child(root), Some(a));
        let c = dom.create_element("span");
        dom.insert_before(root, c, dom.first_child(root)).unwrap();
        assert_eq!(dom.first_child(root), Some(c));
        assert_eq!(dom.first_child(c), None);
    }

    #[test]
    fn find_by_class_searches_depth_first() {
        let (mut dom, root, a, b) = tree();
        dom.set_attribute(b, "class", Some("target")).unwrap();
        assert_eq!(dom.find_by_class(root, "target"), Some(b));
        assert_eq!(dom.find_by_class(a, "target"), None);
    }
}
