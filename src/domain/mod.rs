//! Domain layer: parsing and layout of decision-tree exports
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config
//! loading). Parsing and layout are total functions of their input text and
//! options: the same input always yields a value-equal tree and layout.

pub mod arena;
pub mod builder;
pub mod entities;
pub mod layout;
pub mod scan;

pub use arena::TreeArena;
pub use builder::{parse_tree, TreeBuilder};
pub use entities::{TreeNode, EMPTY_TREE_CONDITION, SYNTHETIC_ROOT_CONDITION};
pub use layout::{layout, LayoutEngine, LayoutNode, LayoutOptions};
pub use scan::{scan_lines, Classifier, Encoding, NodePayload, RawLine};
