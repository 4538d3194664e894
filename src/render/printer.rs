use std::io::Write;

use crate::error::{Result, TreePrintError};

use super::block::Block;
use super::node::TreeNode;
use super::renderer::Renderer;

/// Write every line of `block` to `out`, one per line, root line first.
pub fn write_block<W: Write + ?Sized>(block: &Block, out: &mut W) -> Result<()> {
    for line in block.lines() {
        writeln!(out, "{}", line).map_err(TreePrintError::Output)?;
    }
    out.flush().map_err(TreePrintError::Output)
}

/// Render `root` with default options and write it to `out`.
pub fn print_tree<N, W>(root: &N, out: &mut W) -> Result<()>
where
    N: TreeNode + ?Sized,
    W: Write + ?Sized,
{
    let block = Renderer::default().render(root)?;
    write_block(&block, out)
}

/// Render `root` through `get_info` and write it to `out`.
///
/// `get_info` returns a node's label and its children, so any tree shape can
/// be printed without implementing [`TreeNode`].
pub fn print_tree_with<'t, N, L, C, F, W>(root: &'t N, get_info: F, out: &mut W) -> Result<()>
where
    N: ?Sized,
    L: AsRef<str>,
    C: IntoIterator<Item = &'t N>,
    F: Fn(&'t N) -> (L, C),
    W: Write + ?Sized,
{
    let block = Renderer::default().render_with(root, get_info)?;
    write_block(&block, out)
}
