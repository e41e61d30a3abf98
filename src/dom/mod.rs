// SPDX-License-Identifier: MPL-2.0
//! Rendering substrate abstraction.
//!
//! The notification core never talks to a concrete widget tree. It only needs
//! a handful of primitive operations: create a node, set an attribute or its
//! text, insert or remove a child, and subscribe to clicks. Anything that can
//! provide those (a browser DOM binding, a retained scene graph, the in-memory
//! tree in [`memory`]) can host notifications.

pub mod memory;

pub use memory::MemoryDom;

use crate::error::RenderError;

/// Opaque handle to a node owned by a [`Substrate`].
///
/// Substrates that reuse storage bump the generation of a slot when its node
/// is released, so a stale handle never aliases a newer node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    /// Wraps a raw substrate index, first generation.
    #[must_use]
    pub const fn from_raw(raw: usize) -> Self {
        Self::with_generation(raw, 0)
    }

    #[must_use]
    pub const fn with_generation(raw: usize, generation: u32) -> Self {
        Self {
            index: raw,
            generation,
        }
    }

    /// Returns the raw substrate index.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

/// Primitive node operations required by the notification core.
pub trait Substrate {
    /// Creates a detached element with the given tag name.
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Sets (`Some`) or removes (`None`) an attribute.
    fn set_attribute(
        &mut self,
        node: NodeId,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), RenderError>;

    /// Replaces the node's own text content.
    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), RenderError>;

    /// Inserts `child` under `parent` before `reference`, or last when
    /// `reference` is `None`. A child that already has a parent is moved.
    fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> Result<(), RenderError>;

    /// Detaches `child` from `parent`.
    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), RenderError>;

    /// Makes clicks on `node` reach the notification center.
    fn listen_click(&mut self, node: NodeId) -> Result<(), RenderError>;

    /// First child of `parent`, if any.
    fn first_child(&self, parent: NodeId) -> Option<NodeId>;

    /// Frees `node` and its subtree, detaching it first if needed. The ids
    /// are invalid afterwards. Substrates with their own garbage collection
    /// can keep the default, which does nothing.
    fn release(&mut self, node: NodeId) -> Result<(), RenderError> {
        let _ = node;
        Ok(())
    }
}

/// Builds a `class` attribute value from the given class list, skipping empty names.
pub(crate) fn class_list<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    classes
        .into_iter()
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_skips_empty_entries() {
        assert_eq!(class_list(["actions", "", "minimal"]), "actions minimal");
        assert_eq!(class_list(["actions"]), "actions");
        assert_eq!(class_list([""]), "");
    }

    #[test]
    fn node_id_round_trips_raw_index() {
        assert_eq!(NodeId::from_raw(42).raw(), 42);
        assert_eq!(NodeId::from_raw(42).generation(), 0);
    }

    #[test]
    fn generations_distinguish_reused_slots() {
        assert_ne!(NodeId::from_raw(3), NodeId::with_generation(3, 1));
    }
}
