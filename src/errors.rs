use generational_arena::Index;
use thiserror::Error;

use crate::node::NodeKind;

/// Errors raised by tree assembly. Search operations never error: a
/// missing or detached node simply yields an empty result.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("node no longer present in arena: {0:?}")]
    StaleIndex(Index),

    #[error("cannot attach children under a {0} node")]
    NotAContainer(NodeKind),

    #[error("tree already has a root node")]
    RootAlreadySet,

    #[error("invalid node structure: {reason}")]
    InvalidStructure { reason: String },
}

pub type TreeResult<T> = Result<T, TreeError>;
