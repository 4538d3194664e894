//! Dir command implementation

use std::io::{self, Write};

use crate::cli::DirArgs;
use crate::config::Config;
use crate::error::{Result, TreePrintError};
use crate::fs_tree::{load_dir, DirOptions};
use crate::render::{write_block, RenderOptions};

use super::render::render_tree;

/// Run the dir command
pub fn run(args: DirArgs, config: &Config) -> Result<()> {
    let mut options = DirOptions::from(&config.dir);
    if let Some(depth) = args.max_depth {
        options = options.with_max_depth(depth);
    }
    if args.all {
        options = options.with_hidden(true);
    }

    tracing::info!(path = %args.path.display(), ?options, "Loading directory");

    let tree = load_dir(&args.path, &options)?;
    let mut out = io::stdout().lock();

    if args.json {
        let json = tree.to_json(true)?;
        writeln!(out, "{}", json).map_err(TreePrintError::Output)?;
        return out.flush().map_err(TreePrintError::Output);
    }

    let block = render_tree(
        &tree,
        RenderOptions::from(&config.render),
        config.render.parallel,
    )?;
    write_block(&block, &mut out)
}
