//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use itertools::Itertools;
use termtree::Tree;

use crate::domain::{LayoutNode, TreeNode};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Render a parsed tree for terminal display.
///
/// Leaf nodes are folded away unless `show_leaves` is set, mirroring the
/// layout's decision-skeleton view.
pub fn tree_display(node: &TreeNode, show_leaves: bool) -> Tree<String> {
    match node {
        TreeNode::Leaf { class_id } => Tree::new(format!("class: {}", class_id)),
        TreeNode::Decision {
            condition,
            children,
        } => {
            let leaves: Vec<Tree<String>> = children
                .iter()
                .filter(|child| show_leaves || child.is_decision())
                .map(|child| tree_display(child, show_leaves))
                .collect();
            Tree::new(condition.clone()).with_leaves(leaves)
        }
    }
}

/// Render layout placement facts as indented text lines.
///
/// One line per visible node: branch label, condition, center offset
/// relative to the parent, footprint width, and folded leaf classes.
pub fn layout_lines(root: &LayoutNode) -> Vec<String> {
    let mut lines = Vec::new();
    push_layout_lines(root, 0, &mut lines);
    lines
}

fn push_layout_lines(node: &LayoutNode, level: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(level);
    let label = node
        .branch_label
        .as_deref()
        .map(|l| format!("[{}] ", l))
        .unwrap_or_default();
    let classes = if node.leaf_classes.is_empty() {
        String::new()
    } else {
        format!("  classes: {}", node.leaf_classes.iter().format(", "))
    };
    lines.push(format!(
        "{}{}{}  @ {:+.1} w {:.1}{}",
        indent, label, node.condition, node.offset, node.width, classes
    ));
    for child in &node.visible_children {
        push_layout_lines(child, level + 1, lines);
    }
}
