//! Rendering of rooted trees as aligned ASCII blocks.

mod block;
mod layout;
mod node;
mod options;
mod printer;
mod renderer;

pub use block::Block;
pub use layout::{block_width, center, compose, GAP};
pub use node::TreeNode;
pub use options::{RenderOptions, DEFAULT_MAX_DEPTH, DEFAULT_PARALLEL_DEPTH};
pub use printer::{print_tree, print_tree_with, write_block};
pub use renderer::{render, render_with, Renderer};
