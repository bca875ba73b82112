//! Domain entities: core data structures

/// Condition text of the synthetic root wrapped around multiple top-level nodes.
pub const SYNTHETIC_ROOT_CONDITION: &str = "Decision Tree Root";

/// Condition text of the sentinel returned for empty or fully unparsable input.
pub const EMPTY_TREE_CONDITION: &str = "Empty tree";

/// A node in a parsed decision tree.
///
/// `Leaf` carries no children field, so attaching below a leaf is
/// unrepresentable in the public model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// A branching condition owning its children in source order.
    Decision {
        condition: String,
        children: Vec<TreeNode>,
    },
    /// A terminal class assignment.
    Leaf { class_id: i64 },
}

impl TreeNode {
    /// Create a decision node with no children yet.
    pub fn decision(condition: impl Into<String>) -> Self {
        TreeNode::Decision {
            condition: condition.into(),
            children: Vec::new(),
        }
    }

    pub fn leaf(class_id: i64) -> Self {
        TreeNode::Leaf { class_id }
    }

    pub fn is_decision(&self) -> bool {
        matches!(self, TreeNode::Decision { .. })
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Condition text, None for leaves.
    pub fn condition(&self) -> Option<&str> {
        match self {
            TreeNode::Decision { condition, .. } => Some(condition),
            TreeNode::Leaf { .. } => None,
        }
    }

    /// Class id, None for decisions.
    pub fn class_id(&self) -> Option<i64> {
        match self {
            TreeNode::Decision { .. } => None,
            TreeNode::Leaf { class_id } => Some(*class_id),
        }
    }

    /// Children slice; empty for leaves.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Decision { children, .. } => children,
            TreeNode::Leaf { .. } => &[],
        }
    }

    /// Number of levels, counting this node as one.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(TreeNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Total number of nodes in the subtree, this node included.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(TreeNode::node_count)
            .sum::<usize>()
    }

    /// Class ids of all leaves in the subtree, left-to-right.
    ///
    /// A bare `Leaf` root reports its own class.
    pub fn leaf_classes(&self) -> Vec<i64> {
        match self {
            TreeNode::Leaf { class_id } => vec![*class_id],
            TreeNode::Decision { children, .. } => {
                let mut classes = Vec::new();
                for child in children {
                    classes.extend(child.leaf_classes());
                }
                classes
            }
        }
    }

    /// True for the `Decision { "Empty tree", [] }` no-data sentinel.
    pub fn is_empty_sentinel(&self) -> bool {
        matches!(
            self,
            TreeNode::Decision { condition, children }
                if condition == EMPTY_TREE_CONDITION && children.is_empty()
        )
    }
}
