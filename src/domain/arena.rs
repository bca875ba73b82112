//! Arena-based assembly structure for tree construction.
//!
//! The builder attaches nodes by index while scanning lines, then the arena
//! is converted into the owned [`TreeNode`] model. Children attached under a
//! leaf payload stay unlinked instead of failing, which is how malformed
//! exports degrade.

use generational_arena::{Arena, Index};

use crate::domain::entities::TreeNode;
use crate::domain::scan::NodePayload;

/// Node under construction.
#[derive(Debug)]
pub struct BuildNode {
    pub payload: NodePayload,
    /// Index of the linked parent, None for top-level or unlinked nodes.
    pub parent: Option<Index>,
    pub children: Vec<Index>,
}

/// Arena holding one parse's nodes plus its top-level accumulator.
///
/// Local to a single parse call; there is no shared or global root state.
#[derive(Debug, Default)]
pub struct TreeArena {
    arena: Arena<BuildNode>,
    roots: Vec<Index>,
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            roots: Vec::new(),
        }
    }

    /// Insert a node.
    ///
    /// With `parent: None` the node is recorded as a top-level root. With a
    /// parent index, the node is linked as its last child only when the
    /// parent is a condition; under a class payload the node is inserted but
    /// stays unlinked, so its subtree never materializes in the output.
    pub fn insert_node(&mut self, payload: NodePayload, parent: Option<Index>) -> Index {
        let attachable = match parent {
            Some(parent_idx) => matches!(
                self.arena.get(parent_idx).map(|n| &n.payload),
                Some(NodePayload::Condition(_))
            ),
            None => false,
        };

        let node_idx = self.arena.insert(BuildNode {
            payload,
            parent: if attachable { parent } else { None },
            children: Vec::new(),
        });

        match parent {
            Some(parent_idx) if attachable => {
                if let Some(parent_node) = self.arena.get_mut(parent_idx) {
                    parent_node.children.push(node_idx);
                }
            }
            Some(_) => {}
            None => self.roots.push(node_idx),
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&BuildNode> {
        self.arena.get(idx)
    }

    /// Top-level node indices in insertion order.
    pub fn roots(&self) -> &[Index] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Convert the subtree rooted at `idx` into the owned model.
    pub fn to_tree(&self, idx: Index) -> Option<TreeNode> {
        let node = self.arena.get(idx)?;
        match &node.payload {
            NodePayload::Class(class_id) => Some(TreeNode::Leaf {
                class_id: *class_id,
            }),
            NodePayload::Condition(condition) => {
                let children = node
                    .children
                    .iter()
                    .filter_map(|&child| self.to_tree(child))
                    .collect();
                Some(TreeNode::Decision {
                    condition: condition.clone(),
                    children,
                })
            }
        }
    }
}
