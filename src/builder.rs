//! Declarative tree assembly from nested node specifications.

use tracing::instrument;

use crate::arena::{NodeData, TreeArena};
use crate::errors::{TreeError, TreeResult};
use crate::node::NodeKind;

/// Nested specification of a tree shape.
///
/// Containers hold child specifications; leaves hold a text value. The
/// convenience constructors cover the common document shapes, e.g.
/// [`NodeSpec::word`] wraps its text in a `Text` leaf the way word
/// containers are populated in practice.
#[derive(Debug, Clone)]
pub enum NodeSpec {
    Container {
        kind: NodeKind,
        children: Vec<NodeSpec>,
    },
    Leaf {
        kind: NodeKind,
        value: String,
    },
}

impl NodeSpec {
    pub fn root(children: Vec<NodeSpec>) -> Self {
        NodeSpec::Container {
            kind: NodeKind::Root,
            children,
        }
    }

    pub fn paragraph(children: Vec<NodeSpec>) -> Self {
        NodeSpec::Container {
            kind: NodeKind::Paragraph,
            children,
        }
    }

    pub fn sentence(children: Vec<NodeSpec>) -> Self {
        NodeSpec::Container {
            kind: NodeKind::Sentence,
            children,
        }
    }

    /// A word container wrapping its text in a single `Text` leaf.
    pub fn word(text: impl Into<String>) -> Self {
        NodeSpec::Container {
            kind: NodeKind::Word,
            children: vec![NodeSpec::text(text)],
        }
    }

    pub fn space(value: impl Into<String>) -> Self {
        NodeSpec::Leaf {
            kind: NodeKind::WhiteSpace,
            value: value.into(),
        }
    }

    pub fn punctuation(value: impl Into<String>) -> Self {
        NodeSpec::Leaf {
            kind: NodeKind::Punctuation,
            value: value.into(),
        }
    }

    pub fn symbol(value: impl Into<String>) -> Self {
        NodeSpec::Leaf {
            kind: NodeKind::Symbol,
            value: value.into(),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        NodeSpec::Leaf {
            kind: NodeKind::Text,
            value: value.into(),
        }
    }

    pub fn source(value: impl Into<String>) -> Self {
        NodeSpec::Leaf {
            kind: NodeKind::Source,
            value: value.into(),
        }
    }
}

/// Constructs trees from node specifications.
pub struct TreeBuilder;

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build a tree from `spec`, validating the container/leaf split.
    ///
    /// Non-recursive: an explicit stack mimics the call stack, with
    /// children pushed in reverse so sibling order follows the
    /// specification.
    #[instrument(level = "debug", skip(self, spec))]
    pub fn build(&self, spec: &NodeSpec) -> TreeResult<TreeArena> {
        let mut tree = TreeArena::new();
        let mut stack = vec![(spec, None)];

        while let Some((current, parent_idx)) = stack.pop() {
            match current {
                NodeSpec::Container { kind, children } => {
                    if !kind.is_container() {
                        return Err(TreeError::InvalidStructure {
                            reason: format!("{kind} nodes cannot hold children"),
                        });
                    }
                    let current_idx = tree.insert_node(NodeData::container(*kind), parent_idx)?;
                    for child in children.iter().rev() {
                        stack.push((child, Some(current_idx)));
                    }
                }
                NodeSpec::Leaf { kind, value } => {
                    if kind.is_container() {
                        return Err(TreeError::InvalidStructure {
                            reason: format!("{kind} nodes require children, not a value"),
                        });
                    }
                    tree.insert_node(NodeData::leaf(*kind, value.clone()), parent_idx)?;
                }
            }
        }

        Ok(tree)
    }
}
