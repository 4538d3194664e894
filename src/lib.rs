//! treeprint - Draw rooted trees as aligned ASCII diagrams
//!
//! This crate provides functionality for:
//! - Rendering any tree exposing labels and ordered children into
//!   equal-width text blocks of spaces, underscores and bars
//! - Loading trees from JSON documents, indented outlines and directories
//! - A command-line front end printing those trees
//!
//! ```
//! use treeprint::{render, Tree};
//!
//! let tree = Tree::new("A").with_child(Tree::new("B")).with_child(Tree::new("C"));
//! let block = render(&tree).unwrap();
//! assert_eq!(block.lines(), ["  A  ", "  |_ ", " |  |", " B  C"]);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fs_tree;
pub mod render;
pub mod tree;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TreePrintError};
pub use render::{print_tree, print_tree_with, render, render_with, Block, Renderer, TreeNode};
pub use tree::{InputFormat, Tree};
