use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::tree::InputFormat;

/// treeprint - Draw trees as aligned ASCII diagrams
#[derive(Parser, Debug)]
#[command(name = "treeprint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a tree read from a JSON or outline document
    Render(RenderArgs),

    /// Render a directory hierarchy
    Dir(DirArgs),

    /// Print the built-in sample tree
    Demo,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Input file ("-" or absent reads standard input)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Input format
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<InputFormat>,

    /// Render sibling subtrees in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Refuse trees deeper than N levels
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<usize>,
}

#[derive(Args, Debug)]
pub struct DirArgs {
    /// Directory to render
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Maximum depth to display (0 = unlimited)
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Include hidden files
    #[arg(short, long)]
    pub all: bool,

    /// Print the tree as a JSON document instead of rendering it
    #[arg(long)]
    pub json: bool,
}
