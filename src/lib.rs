//! Arena-based text object model with directional search.
//!
//! The tree holds a document broken into paragraphs, sentences, words,
//! and token leaves (white space, punctuation, symbols, raw text). Nodes
//! live in a generational arena and are addressed by stable indices;
//! parent, sibling, and child links are optional indices, so navigation
//! is O(1) and a dangling handle simply resolves to nothing.
//!
//! On top of the model sit eleven search operations: nearest
//! sibling/ancestor/descendant matching a [`Criterion`]
//! (`find_before`/`find_after`, the upward variants, `find_parent`), and
//! their exhaustive counterparts (`find_all_before`, `find_all_after`,
//! `find_parents`, `find_children`), plus first/last child lookup.
//! Searches are pure reads and never fail; no match is `None` or an
//! empty vector.
//!
//! ```
//! use texttree::{Criterion, NodeKind, NodeSpec, TreeBuilder};
//!
//! let spec = NodeSpec::root(vec![NodeSpec::paragraph(vec![NodeSpec::sentence(vec![
//!     NodeSpec::word("Some"),
//!     NodeSpec::space(" "),
//!     NodeSpec::word("text"),
//!     NodeSpec::punctuation("."),
//! ])])]);
//! let tree = TreeBuilder::new().build(&spec)?;
//!
//! let root = tree.root().unwrap();
//! let sentence = tree.find_first_child(root, Criterion::Kind(NodeKind::Sentence));
//! assert!(sentence.is_none()); // sentences sit below the paragraph
//!
//! let paragraph = tree.find_first_child(root, Criterion::Any).unwrap();
//! let sentence = tree.find_first_child(paragraph, Criterion::Any).unwrap();
//! let first_word = tree.find_first_child(sentence, Criterion::Kind(NodeKind::Word)).unwrap();
//! let next_word = tree.find_after(first_word, Criterion::Kind(NodeKind::Word)).unwrap();
//! assert_eq!(tree.text(next_word), "text");
//! # Ok::<(), texttree::TreeError>(())
//! ```

pub mod arena;
pub mod builder;
pub mod errors;
pub mod matcher;
pub mod node;
pub mod render;
pub mod search;
pub mod util;

pub use arena::{ChildIterator, NodeData, TreeArena, TreeIterator, TreeNode};
pub use builder::{NodeSpec, TreeBuilder};
pub use errors::{TreeError, TreeResult};
pub use matcher::Criterion;
pub use node::NodeKind;
pub use render::TreeNodeConvert;
