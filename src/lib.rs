//! rstree: decision-tree text exports parsed into trees and drawing layouts
//!
//! Takes the flat, indentation-encoded export format produced by tree-model
//! introspection tools (`|--- feature <= 5.50` / `|   |--- class: 1`) and
//! turns it into a validated hierarchical [`domain::TreeNode`] plus a
//! renderer-agnostic [`domain::LayoutNode`] placement tree.
//!
//! Parsing is deliberately total: malformed exports degrade to best-effort
//! partial trees or the empty-tree sentinel instead of failing. Errors exist
//! only at the file-loading boundary in [`application`].
//!
//! ```
//! use rstree::domain::{layout, parse_tree};
//!
//! let tree = parse_tree("|--- Age <= 30.00\n|   |--- class: 0\n");
//! assert_eq!(tree.leaf_classes(), vec![0]);
//! let placed = layout(&tree).expect("decision root");
//! assert!(placed.visible_children.is_empty());
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{ApplicationError, ApplicationResult, ExportService, ParsedExport};
pub use config::Settings;
pub use domain::{layout, parse_tree, LayoutNode, TreeNode};
