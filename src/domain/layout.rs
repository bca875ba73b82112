//! Layout engine: positional facts for drawing a parsed tree.
//!
//! Only decision nodes are boxed; leaf children are folded into the parent
//! entry as `leaf_classes`. The output carries no drawing-library types, so
//! any rendering surface (canvas, vector, terminal) can consume it.

use crate::domain::entities::TreeNode;

/// Label on the first child of a binary decision.
pub const TRUE_BRANCH_LABEL: &str = "True";
/// Label on the second child of a binary decision.
pub const FALSE_BRANCH_LABEL: &str = "False";

/// Spacing constants in logical units.
///
/// Defaults mirror the reference renderer: 192-wide boxes, 48 between two
/// sibling subtrees, 24 once a row gets crowded (three or more).
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    pub node_width: f64,
    /// Gap between sibling footprints for up to two siblings.
    pub wide_gap: f64,
    /// Gap for three or more siblings.
    pub tight_gap: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            node_width: 192.0,
            wide_gap: 48.0,
            tight_gap: 24.0,
        }
    }
}

/// Placement facts for one visible (decision) node.
///
/// Built fresh on every layout pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub condition: String,
    /// `"True"`/`"False"` on the two children of a binary decision, None
    /// otherwise. The convention is positional, not parsed from the
    /// condition's comparison direction.
    pub branch_label: Option<String>,
    /// Class ids of this node's own leaf children, in source order.
    pub leaf_classes: Vec<i64>,
    /// Horizontal center relative to the parent's center; 0.0 for the root.
    pub offset: f64,
    /// Footprint width of the whole subtree.
    pub width: f64,
    pub visible_children: Vec<LayoutNode>,
}

impl LayoutNode {
    /// Footprint interval `(left, right)` around this node's center.
    pub fn span(&self) -> (f64, f64) {
        (-self.width / 2.0, self.width / 2.0)
    }
}

/// Computes [`LayoutNode`] trees from parsed [`TreeNode`]s.
#[derive(Debug, Default)]
pub struct LayoutEngine {
    options: LayoutOptions,
}

impl LayoutEngine {
    pub fn new(options: LayoutOptions) -> Self {
        Self { options }
    }

    /// Lay out a normalized tree.
    ///
    /// A bare leaf root has nothing to box and yields None; callers render
    /// their no-boxes state instead of crashing.
    pub fn layout(&self, root: &TreeNode) -> Option<LayoutNode> {
        match root {
            TreeNode::Leaf { .. } => None,
            TreeNode::Decision { .. } => Some(self.place(root)),
        }
    }

    fn place(&self, node: &TreeNode) -> LayoutNode {
        let condition = node.condition().unwrap_or_default().to_string();

        let mut leaf_classes = Vec::new();
        let mut visible_children = Vec::new();
        for child in node.children() {
            match child {
                TreeNode::Leaf { class_id } => leaf_classes.push(*class_id),
                TreeNode::Decision { .. } => visible_children.push(self.place(child)),
            }
        }

        if visible_children.len() == 2 {
            visible_children[0].branch_label = Some(TRUE_BRANCH_LABEL.to_string());
            visible_children[1].branch_label = Some(FALSE_BRANCH_LABEL.to_string());
        }

        let width = self.space_children(&mut visible_children);

        LayoutNode {
            condition,
            branch_label: None,
            leaf_classes,
            offset: 0.0,
            width,
            visible_children,
        }
    }

    /// Assign child offsets and return the subtree footprint.
    ///
    /// Child footprints are placed side by side and centered under the
    /// parent, so sibling spans stay disjoint no matter how lopsided the
    /// subtrees are.
    fn space_children(&self, children: &mut [LayoutNode]) -> f64 {
        if children.is_empty() {
            return self.options.node_width;
        }

        let gap = self.sibling_gap(children.len());
        let total: f64 = children.iter().map(|c| c.width).sum::<f64>()
            + gap * (children.len() - 1) as f64;

        let mut cursor = -total / 2.0;
        for child in children.iter_mut() {
            child.offset = cursor + child.width / 2.0;
            cursor += child.width + gap;
        }

        total.max(self.options.node_width)
    }

    /// Per-sibling gap, non-increasing as the row gets more crowded.
    fn sibling_gap(&self, sibling_count: usize) -> f64 {
        if sibling_count > 2 {
            self.options.tight_gap
        } else {
            self.options.wide_gap
        }
    }
}

/// Lay out with default spacing.
pub fn layout(root: &TreeNode) -> Option<LayoutNode> {
    LayoutEngine::default().layout(root)
}
