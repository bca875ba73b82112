//! Tree builder: assembles the node stream into a hierarchy.
//!
//! Depth is driven by flat line order, so construction uses an explicit
//! depth-indexed stack over the arena rather than recursion. A line at depth
//! d closes every open subtree at depth >= d before attaching.

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::TreeArena;
use crate::domain::entities::{TreeNode, EMPTY_TREE_CONDITION, SYNTHETIC_ROOT_CONDITION};
use crate::domain::scan::{scan_lines, Classifier, Encoding};

/// Parses indentation-encoded exports into [`TreeNode`] trees.
///
/// Parsing is total: malformed text degrades to a best-effort partial tree
/// or the empty-tree sentinel, never an error.
#[derive(Debug)]
pub struct TreeBuilder {
    encoding: Encoding,
    classifier: Classifier,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::with_encoding(Encoding::default())
    }

    pub fn with_encoding(encoding: Encoding) -> Self {
        let classifier = Classifier::new(&encoding);
        Self {
            encoding,
            classifier,
        }
    }

    /// Parse export text into a single normalized tree.
    #[instrument(level = "debug", skip(self, text))]
    pub fn parse(&self, text: &str) -> TreeNode {
        let lines = scan_lines(text, &self.encoding);
        debug!("scanned {} usable lines", lines.len());

        let mut arena = TreeArena::new();
        let mut stack: Vec<(usize, Index)> = Vec::new();

        for line in lines {
            let Some(payload) = self.classifier.classify(&line.content) else {
                continue;
            };

            if line.depth == 0 {
                // a top-level line closes everything
                stack.clear();
                let idx = arena.insert_node(payload, None);
                stack.push((0, idx));
                continue;
            }

            while stack
                .last()
                .is_some_and(|&(depth, _)| depth >= line.depth)
            {
                stack.pop();
            }

            let idx = match stack.last() {
                Some(&(_, parent_idx)) => arena.insert_node(payload, Some(parent_idx)),
                // indentation without any open ancestor: accept at top level
                None => arena.insert_node(payload, None),
            };
            stack.push((line.depth, idx));
        }

        normalize_roots(&arena)
    }
}

/// Collapse or wrap the arena's top-level nodes into exactly one root.
fn normalize_roots(arena: &TreeArena) -> TreeNode {
    let roots = arena.roots();
    match roots {
        [] => TreeNode::decision(EMPTY_TREE_CONDITION),
        [single] => arena
            .to_tree(*single)
            .unwrap_or_else(|| TreeNode::decision(EMPTY_TREE_CONDITION)),
        many => TreeNode::Decision {
            condition: SYNTHETIC_ROOT_CONDITION.to_string(),
            children: many.iter().filter_map(|&idx| arena.to_tree(idx)).collect(),
        },
    }
}

/// Parse with the default `|`/`-` encoding and `class`/`clase` keywords.
pub fn parse_tree(text: &str) -> TreeNode {
    TreeBuilder::new().parse(text)
}
