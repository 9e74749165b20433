//! Document arena: create, append, remove, walk.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};
use crate::error::HostError;

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// An in-memory document tree, backed by a slotmap arena.
///
/// All nodes live in a single `SlotMap`. Parent/child relationships are stored
/// in secondary maps so that node removal is O(subtree size) and lookup is O(1).
/// The document always has a `body` element as its root; nodes created but not
/// yet appended anywhere are detached and invisible to id lookups.
#[derive(Debug)]
pub struct Document {
    pub(crate) nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    body: NodeId,
}

impl Document {
    /// Create a document holding only an empty `body`.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let body = nodes.insert(NodeData::element("body"));
        let mut children = SecondaryMap::new();
        children.insert(body, Vec::new());
        Self {
            nodes,
            children,
            parent: SecondaryMap::new(),
            body,
        }
    }

    /// The root `body` element.
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Create a detached node.
    pub fn create(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        id
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), HostError> {
        if !self.contains(parent) || !self.contains(child) {
            return Err(HostError::StaleNode);
        }
        if self.nodes[parent].as_element().is_none() {
            return Err(HostError::NotAnElement);
        }
        if child == parent || self.ancestors(parent).contains(&child) || child == self.body {
            return Err(HostError::Hierarchy);
        }

        self.detach(child);
        self.parent.insert(child, parent);
        self.children
            .get_mut(parent)
            .ok_or(HostError::StaleNode)?
            .push(child);
        Ok(())
    }

    /// Remove a node from its parent's child list without destroying it.
    fn detach(&mut self, id: NodeId) {
        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&c| c != id);
            }
        }
    }

    /// Remove a node and all its descendants.
    ///
    /// Returns the `NodeData` for the removed node, or `None` if it didn't
    /// exist. The body cannot be removed.
    pub fn remove(&mut self, id: NodeId) -> Option<NodeData> {
        if !self.nodes.contains_key(id) || id == self.body {
            return None;
        }

        self.detach(id);

        // Collect all descendants (BFS) to remove them.
        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        let mut removed_root_data = None;

        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                to_remove.extend(kids);
            }
            self.parent.remove(current);
            let data = self.nodes.remove(current);
            if current == id {
                removed_root_data = data;
            }
        }

        removed_root_data
    }

    /// Remove every child subtree of `id`. Listeners go with their nodes.
    pub fn clear_children(&mut self, id: NodeId) -> Result<(), HostError> {
        let kids = self.children.get(id).ok_or(HostError::StaleNode)?.clone();
        for child in kids {
            self.remove(child);
        }
        Ok(())
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node. Returns an empty slice if the node has no
    /// children or does not exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to the root, collecting ancestor node ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Event propagation path: `[target, parent, ..., root]`.
    ///
    /// Empty if `target` does not exist.
    pub fn bubble_path(&self, target: NodeId) -> Vec<NodeId> {
        if !self.contains(target) {
            return Vec::new();
        }
        let mut path = vec![target];
        path.extend(self.ancestors(target));
        path
    }

    /// Whether the node is reachable from the body.
    pub fn is_connected(&self, id: NodeId) -> bool {
        id == self.body || self.ancestors(id).last() == Some(&self.body)
    }

    /// Immutable access to a node's data.
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Mutable access to a node's data.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    /// Number of live nodes, attached or not, including the body.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document holds nothing but its body.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Whether the document contains a node with the given id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// Concatenated text of all descendant text nodes, in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        self.walk_depth_first(id)
            .into_iter()
            .filter_map(|n| self.nodes.get(n).and_then(NodeData::as_text))
            .collect()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
