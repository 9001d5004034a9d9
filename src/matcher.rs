//! Match criteria for search operations.

use generational_arena::Index;

use crate::arena::TreeNode;
use crate::node::NodeKind;

/// Criterion a visited node is tested against during a search.
///
/// The default criterion matches every node, so a search without a
/// criterion returns the nearest node in the given direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Criterion {
    /// Matches any node
    #[default]
    Any,
    /// Matches nodes with the given kind tag
    Kind(NodeKind),
    /// Matches only the node with the given index (identity, not
    /// structural equality)
    Node(Index),
}

impl Criterion {
    /// Test `node`, addressed by `candidate`, against this criterion.
    /// No side effects, O(1).
    pub fn is_match(&self, candidate: Index, node: &TreeNode) -> bool {
        match self {
            Criterion::Any => true,
            Criterion::Kind(kind) => node.data.kind == *kind,
            Criterion::Node(target) => candidate == *target,
        }
    }
}

impl From<NodeKind> for Criterion {
    fn from(kind: NodeKind) -> Self {
        Criterion::Kind(kind)
    }
}

impl From<Index> for Criterion {
    fn from(idx: Index) -> Self {
        Criterion::Node(idx)
    }
}
