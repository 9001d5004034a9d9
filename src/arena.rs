use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::node::NodeKind;

/// Data payload for tree nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Kind tag of the node
    pub kind: NodeKind,
    /// Text value, present on leaf nodes only
    pub value: Option<String>,
}

impl NodeData {
    pub fn container(kind: NodeKind) -> Self {
        Self { kind, value: None }
    }

    pub fn leaf(kind: NodeKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: Some(value.into()),
        }
    }
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {:?}", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Tree node in the arena-based document structure.
///
/// Siblings under a shared parent form a doubly linked list; the parent's
/// child links point at the ends of that list. All links are optional
/// indices into the arena, absent on detached nodes and at list ends.
#[derive(Debug)]
pub struct TreeNode {
    /// Node payload: kind tag and optional leaf value
    pub data: NodeData,
    /// Index of the parent node, None for the root and detached nodes
    pub parent: Option<Index>,
    /// Preceding sibling under the same parent
    pub prev_sibling: Option<Index>,
    /// Following sibling under the same parent
    pub next_sibling: Option<Index>,
    /// First node of the child list, None for leaves and empty containers
    pub first_child: Option<Index>,
    /// Last node of the child list
    pub last_child: Option<Index>,
}

/// Arena-based text object model.
///
/// Uses a generational arena for memory-safe node handles and O(1)
/// navigation. Indices stay valid for the lifetime of the tree; an index
/// from another tree resolves to no node.
#[derive(Debug)]
pub struct TreeArena {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Append a node to the end of `parent`'s child list, or install the
    /// root when `parent` is None. Maintains sibling link integrity.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: NodeData, parent: Option<Index>) -> TreeResult<Index> {
        let prev_sibling = match parent {
            Some(parent_idx) => {
                let parent_node = self
                    .arena
                    .get(parent_idx)
                    .ok_or(TreeError::StaleIndex(parent_idx))?;
                if !parent_node.data.kind.is_container() {
                    return Err(TreeError::NotAContainer(parent_node.data.kind));
                }
                parent_node.last_child
            }
            None => {
                if self.root.is_some() {
                    return Err(TreeError::RootAlreadySet);
                }
                None
            }
        };

        let node_idx = self.arena.insert(TreeNode {
            data,
            parent,
            prev_sibling,
            next_sibling: None,
            first_child: None,
            last_child: None,
        });

        if let Some(prev_idx) = prev_sibling {
            if let Some(prev) = self.arena.get_mut(prev_idx) {
                prev.next_sibling = Some(node_idx);
            }
        }
        if let Some(parent_idx) = parent {
            if let Some(parent_node) = self.arena.get_mut(parent_idx) {
                if parent_node.first_child.is_none() {
                    parent_node.first_child = Some(node_idx);
                }
                parent_node.last_child = Some(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        Ok(node_idx)
    }

    /// Unlink a node from its parent and siblings without freeing it.
    ///
    /// The node keeps its own children, so a whole subtree detaches with
    /// it. Detaching an already detached node (or the root) is a no-op.
    #[instrument(level = "trace", skip(self))]
    pub fn detach(&mut self, idx: Index) -> TreeResult<()> {
        let (parent, prev, next) = {
            let node = self.arena.get(idx).ok_or(TreeError::StaleIndex(idx))?;
            (node.parent, node.prev_sibling, node.next_sibling)
        };

        if let Some(prev_idx) = prev {
            if let Some(prev_node) = self.arena.get_mut(prev_idx) {
                prev_node.next_sibling = next;
            }
        }
        if let Some(next_idx) = next {
            if let Some(next_node) = self.arena.get_mut(next_idx) {
                next_node.prev_sibling = prev;
            }
        }
        if let Some(parent_idx) = parent {
            if let Some(parent_node) = self.arena.get_mut(parent_idx) {
                if parent_node.first_child == Some(idx) {
                    parent_node.first_child = next;
                }
                if parent_node.last_child == Some(idx) {
                    parent_node.last_child = prev;
                }
            }
        }

        let node = self.arena.get_mut(idx).ok_or(TreeError::StaleIndex(idx))?;
        node.parent = None;
        node.prev_sibling = None;
        node.next_sibling = None;

        Ok(())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut TreeNode> {
        self.arena.get_mut(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Document-order (preorder) walk over the whole tree.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> TreeIterator {
        TreeIterator::new(self)
    }

    /// Front-to-back walk over one node's child list.
    #[instrument(level = "trace", skip(self))]
    pub fn children(&self, idx: Index) -> ChildIterator {
        ChildIterator {
            arena: self,
            cursor: self.arena.get(idx).and_then(|node| node.first_child),
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        1 + self
            .children(node_idx)
            .map(|(child_idx, _)| self.calculate_depth(child_idx))
            .max()
            .unwrap_or(0)
    }

    /// Collects the values of all leaf nodes below `idx` in document
    /// order. Empty for leaves without a value and for stale indices.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_values(&self, idx: Index) -> Vec<String> {
        let mut values = Vec::new();
        self.collect_leaf_values(idx, &mut values);
        values
    }

    fn collect_leaf_values(&self, node_idx: Index, values: &mut Vec<String>) {
        if let Some(node) = self.get_node(node_idx) {
            if let Some(value) = &node.data.value {
                values.push(value.clone());
            }
            for (child_idx, _) in self.children(node_idx) {
                self.collect_leaf_values(child_idx, values);
            }
        }
    }

    /// Concatenated text of the subtree below `idx`.
    #[instrument(level = "debug", skip(self))]
    pub fn text(&self, idx: Index) -> String {
        self.leaf_values(idx).join("")
    }
}

pub struct TreeIterator<'a> {
    arena: &'a TreeArena,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a TreeArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Sibling below child on the stack: children first, then
                // the following sibling, yields document order.
                if let Some(sibling) = node.next_sibling {
                    self.stack.push(sibling);
                }
                if let Some(child) = node.first_child {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct ChildIterator<'a> {
    arena: &'a TreeArena,
    cursor: Option<Index>,
}

impl<'a> Iterator for ChildIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let current_idx = self.cursor?;
        let node = self.arena.get_node(current_idx)?;
        self.cursor = node.next_sibling;
        Some((current_idx, node))
    }
}
