//! Directional search over the text object model.
//!
//! Four walk strategies parameterized by a [`Criterion`]: a linear
//! sibling walk, an upward walk via parent links, an edge-descent walk
//! from a container's first or last child, and an exhaustive collecting
//! walk. The public operations bind a strategy to a concrete direction.
//!
//! All operations are pure reads. They never fail: a detached node or an
//! index from another tree has no navigational links and yields
//! None/empty, matching the chain-end case.

use generational_arena::Index;
use tracing::instrument;

use crate::arena::TreeArena;
use crate::matcher::Criterion;

/// Navigational direction of a walk, resolved through node links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Previous,
    Next,
    Parent,
}

impl TreeArena {
    fn step(&self, from: Index, direction: Direction) -> Option<Index> {
        let node = self.get_node(from)?;
        match direction {
            Direction::Previous => node.prev_sibling,
            Direction::Next => node.next_sibling,
            Direction::Parent => node.parent,
        }
    }

    /// First match in `direction`, starting at the node adjacent to
    /// `from`. The origin itself is never tested.
    fn find_in_direction(
        &self,
        from: Index,
        direction: Direction,
        criterion: Criterion,
    ) -> Option<Index> {
        let mut cursor = self.step(from, direction);
        while let Some(idx) = cursor {
            let node = self.get_node(idx)?;
            if criterion.is_match(idx, node) {
                return Some(idx);
            }
            cursor = self.step(idx, direction);
        }
        None
    }

    /// First match among the single `direction`-siblings of `from`'s
    /// ancestors, nearest ancestor first. Exactly one relative is tested
    /// per ancestor level.
    fn find_upwards_in_direction(
        &self,
        from: Index,
        direction: Direction,
        criterion: Criterion,
    ) -> Option<Index> {
        let mut ancestor = self.step(from, Direction::Parent);
        while let Some(idx) = ancestor {
            if let Some(relative) = self.step(idx, direction) {
                if let Some(node) = self.get_node(relative) {
                    if criterion.is_match(relative, node) {
                        return Some(relative);
                    }
                }
            }
            ancestor = self.step(idx, Direction::Parent);
        }
        None
    }

    /// All matches in `direction`, in traversal order. Each found node
    /// becomes the origin of the next first-match walk.
    fn find_all_in_direction(
        &self,
        from: Index,
        direction: Direction,
        criterion: Criterion,
    ) -> Vec<Index> {
        let mut found = Vec::new();
        let mut cursor = self.find_in_direction(from, direction, criterion);
        while let Some(idx) = cursor {
            found.push(idx);
            cursor = self.find_in_direction(idx, direction, criterion);
        }
        found
    }

    /// Nearest preceding sibling matching `criterion`.
    #[instrument(level = "trace", skip(self))]
    pub fn find_before(&self, node: Index, criterion: Criterion) -> Option<Index> {
        self.find_in_direction(node, Direction::Previous, criterion)
    }

    /// Nearest following sibling matching `criterion`.
    #[instrument(level = "trace", skip(self))]
    pub fn find_after(&self, node: Index, criterion: Criterion) -> Option<Index> {
        self.find_in_direction(node, Direction::Next, criterion)
    }

    /// Nearest preceding node when no sibling matches at this level:
    /// tests each ancestor's preceding sibling, walking upward.
    #[instrument(level = "trace", skip(self))]
    pub fn find_before_upwards(&self, node: Index, criterion: Criterion) -> Option<Index> {
        self.find_upwards_in_direction(node, Direction::Previous, criterion)
    }

    /// Nearest following node when no sibling matches at this level:
    /// tests each ancestor's following sibling, walking upward.
    #[instrument(level = "trace", skip(self))]
    pub fn find_after_upwards(&self, node: Index, criterion: Criterion) -> Option<Index> {
        self.find_upwards_in_direction(node, Direction::Next, criterion)
    }

    /// All preceding siblings matching `criterion`, nearest first
    /// (reverse document order).
    #[instrument(level = "trace", skip(self))]
    pub fn find_all_before(&self, node: Index, criterion: Criterion) -> Vec<Index> {
        self.find_all_in_direction(node, Direction::Previous, criterion)
    }

    /// All following siblings matching `criterion`, in document order.
    #[instrument(level = "trace", skip(self))]
    pub fn find_all_after(&self, node: Index, criterion: Criterion) -> Vec<Index> {
        self.find_all_in_direction(node, Direction::Next, criterion)
    }

    /// Nearest ancestor matching `criterion`. None for the root and for
    /// detached nodes.
    #[instrument(level = "trace", skip(self))]
    pub fn find_parent(&self, node: Index, criterion: Criterion) -> Option<Index> {
        self.find_in_direction(node, Direction::Parent, criterion)
    }

    /// All ancestors matching `criterion`, nearest first. Without a
    /// criterion this is the full ancestor chain ending at the root.
    #[instrument(level = "trace", skip(self))]
    pub fn find_parents(&self, node: Index, criterion: Criterion) -> Vec<Index> {
        self.find_all_in_direction(node, Direction::Parent, criterion)
    }

    /// First child matching `criterion`: the stored first child if it
    /// matches, otherwise the nearest match walking toward the tail.
    #[instrument(level = "trace", skip(self))]
    pub fn find_first_child(&self, node: Index, criterion: Criterion) -> Option<Index> {
        let head = self.get_node(node)?.first_child?;
        let head_node = self.get_node(head)?;
        if criterion.is_match(head, head_node) {
            return Some(head);
        }
        self.find_in_direction(head, Direction::Next, criterion)
    }

    /// Last child matching `criterion`: the stored last child if it
    /// matches, otherwise the nearest match walking toward the head.
    #[instrument(level = "trace", skip(self))]
    pub fn find_last_child(&self, node: Index, criterion: Criterion) -> Option<Index> {
        let tail = self.get_node(node)?.last_child?;
        let tail_node = self.get_node(tail)?;
        if criterion.is_match(tail, tail_node) {
            return Some(tail);
        }
        self.find_in_direction(tail, Direction::Previous, criterion)
    }

    /// All children matching `criterion`, in document order, including a
    /// matching first child. Empty for leaves and empty containers.
    #[instrument(level = "trace", skip(self))]
    pub fn find_children(&self, node: Index, criterion: Criterion) -> Vec<Index> {
        let head = match self.get_node(node).and_then(|n| n.first_child) {
            Some(head) => head,
            None => return Vec::new(),
        };

        let mut found = Vec::new();
        if let Some(head_node) = self.get_node(head) {
            if criterion.is_match(head, head_node) {
                found.push(head);
            }
        }
        found.extend(self.find_all_in_direction(head, Direction::Next, criterion));
        found
    }
}
