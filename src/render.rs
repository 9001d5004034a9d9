use generational_arena::Index;
use termtree::Tree;

use crate::arena::TreeArena;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for TreeArena {
    fn to_tree_string(&self) -> Tree<String> {
        if let Some(root_idx) = self.root() {
            fn build_tree(arena: &TreeArena, node_idx: Index) -> Tree<String> {
                let label = arena
                    .get_node(node_idx)
                    .map(|node| node.data.to_string())
                    .unwrap_or_default();
                let leaves: Vec<_> = arena
                    .children(node_idx)
                    .map(|(child_idx, _)| build_tree(arena, child_idx))
                    .collect();
                Tree::new(label).with_leaves(leaves)
            }

            build_tree(self, root_idx)
        } else {
            Tree::new("Empty tree".to_string())
        }
    }
}
