//! Render and demo command implementations

use std::io::{self, Read};
use std::path::Path;

use crate::cli::RenderArgs;
use crate::config::Config;
use crate::error::{Result, TreePrintError};
use crate::render::{write_block, Block, RenderOptions, Renderer};
use crate::tree::Tree;

/// Run the render command
pub fn run(args: RenderArgs, config: &Config) -> Result<()> {
    let text = read_input(args.file.as_deref())?;
    let format = args.format.unwrap_or(config.input.default_format);
    let tree = Tree::parse(&text, format)?;

    tracing::info!(?format, nodes = tree.node_count(), "Rendering tree");

    let mut options = RenderOptions::from(&config.render);
    if let Some(depth) = args.max_depth {
        options = options.with_max_depth(depth);
    }
    let parallel = args.parallel || config.render.parallel;

    let block = render_tree(&tree, options, parallel)?;
    write_block(&block, &mut io::stdout().lock())
}

/// Run the demo command
pub fn run_demo(config: &Config) -> Result<()> {
    let options = RenderOptions::from(&config.render);
    let block = render_tree(&Tree::sample(), options, config.render.parallel)?;
    write_block(&block, &mut io::stdout().lock())
}

pub(crate) fn render_tree(tree: &Tree, options: RenderOptions, parallel: bool) -> Result<Block> {
    let renderer = Renderer::new(options);
    if parallel {
        renderer.render_parallel(tree)
    } else {
        renderer.render(tree)
    }
}

/// Read the whole document from `path`, or from stdin for `None` and `-`.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|e| TreePrintError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| TreePrintError::Io {
                    path: "<stdin>".into(),
                    source: e,
                })?;
            Ok(text)
        }
    }
}
