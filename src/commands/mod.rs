//! Subcommand implementations

pub mod completions;
pub mod dir;
pub mod render;
