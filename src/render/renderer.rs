use std::collections::HashSet;
use std::iter::Enumerate;

use crate::error::{Result, TreePrintError};

use super::block::Block;
use super::layout::compose;
use super::node::{node_id, NodeId, TreeNode};
use super::options::RenderOptions;

/// Renders trees into [`Block`]s.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

/// Where a subtree root sits in the whole tree.
#[derive(Debug, Clone, Default)]
struct Position {
    depth: usize,
    /// Child indices from the tree root
    path: Vec<usize>,
    /// Identities of every ancestor of the subtree root
    ancestors: Vec<NodeId>,
}

/// A node whose children are still being rendered.
struct Frame<'t, N: ?Sized, I> {
    node: &'t N,
    label: String,
    pending: Enumerate<I>,
    blocks: Vec<Block>,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a tree whose nodes implement [`TreeNode`].
    pub fn render<N>(&self, root: &N) -> Result<Block>
    where
        N: TreeNode + ?Sized,
    {
        self.render_with(root, |node| (node.label(), node.children()))
    }

    /// Render a tree through an accessor returning each node's label and children.
    ///
    /// The traversal keeps its own stack on the heap, so deep trees do not grow
    /// the call stack.
    pub fn render_with<'t, N, L, C, F>(&self, root: &'t N, get_info: F) -> Result<Block>
    where
        N: ?Sized,
        L: AsRef<str>,
        C: IntoIterator<Item = &'t N>,
        F: Fn(&'t N) -> (L, C),
    {
        let block = walk(root, &get_info, self.options.max_depth, Position::default())?;
        tracing::debug!(width = block.width(), height = block.height(), "Rendered tree");
        Ok(block)
    }

    /// Like [`render`](Self::render), rendering sibling subtrees on the rayon pool.
    pub fn render_parallel<N>(&self, root: &N) -> Result<Block>
    where
        N: TreeNode + Sync + ?Sized,
    {
        self.render_with_parallel(root, |node| (node.label(), node.children()))
    }

    /// Like [`render_with`](Self::render_with), rendering sibling subtrees on the
    /// rayon pool down to `parallel_depth`. Output is identical to the sequential
    /// traversal.
    pub fn render_with_parallel<'t, N, L, C, F>(&self, root: &'t N, get_info: F) -> Result<Block>
    where
        N: Sync + ?Sized,
        L: AsRef<str>,
        C: IntoIterator<Item = &'t N>,
        F: Fn(&'t N) -> (L, C) + Sync,
    {
        let block = walk_parallel(root, &get_info, &self.options, Position::default())?;
        tracing::debug!(
            width = block.width(),
            height = block.height(),
            parallel_depth = self.options.parallel_depth,
            "Rendered tree in parallel"
        );
        Ok(block)
    }
}

/// Render a tree with default options.
pub fn render<N>(root: &N) -> Result<Block>
where
    N: TreeNode + ?Sized,
{
    Renderer::default().render(root)
}

/// Render a tree through an accessor with default options.
pub fn render_with<'t, N, L, C, F>(root: &'t N, get_info: F) -> Result<Block>
where
    N: ?Sized,
    L: AsRef<str>,
    C: IntoIterator<Item = &'t N>,
    F: Fn(&'t N) -> (L, C),
{
    Renderer::default().render_with(root, get_info)
}

/// Check a node against the guards and read its label and children.
fn enter<'t, N, L, C, F>(
    node: &'t N,
    get_info: &F,
    max_depth: usize,
    depth: usize,
    path: &[usize],
    is_ancestor: impl Fn(&NodeId) -> bool,
) -> Result<(String, C::IntoIter)>
where
    N: ?Sized,
    L: AsRef<str>,
    C: IntoIterator<Item = &'t N>,
    F: Fn(&'t N) -> (L, C),
{
    if node_id(node).is_some_and(|id| is_ancestor(&id)) {
        return Err(TreePrintError::Cycle { depth });
    }
    if depth > max_depth {
        return Err(TreePrintError::DepthLimitExceeded { limit: max_depth });
    }

    let (label, children) = get_info(node);
    let label = label.as_ref();
    if label.is_empty() {
        return Err(TreePrintError::EmptyLabel {
            path: path.to_vec(),
        });
    }

    tracing::trace!(depth, label, "Visiting node");
    Ok((label.to_string(), children.into_iter()))
}

/// Post-order traversal over an explicit stack.
fn walk<'t, N, L, C, F>(
    root: &'t N,
    get_info: &F,
    max_depth: usize,
    origin: Position,
) -> Result<Block>
where
    N: ?Sized,
    L: AsRef<str>,
    C: IntoIterator<Item = &'t N>,
    F: Fn(&'t N) -> (L, C),
{
    let Position {
        depth: base_depth,
        mut path,
        ancestors,
    } = origin;
    let mut on_path: HashSet<NodeId> = ancestors.into_iter().collect();

    let (label, children) = enter(root, get_info, max_depth, base_depth, &path, |id| {
        on_path.contains(id)
    })?;
    on_path.extend(node_id(root));

    let mut current = Frame {
        node: root,
        label,
        pending: children.enumerate(),
        blocks: Vec::new(),
    };
    // Ancestors of `current`, innermost last
    let mut stack: Vec<Frame<'t, N, C::IntoIter>> = Vec::new();

    loop {
        if let Some((index, child)) = current.pending.next() {
            path.push(index);
            let depth = base_depth + stack.len() + 1;
            let (label, children) = enter(child, get_info, max_depth, depth, &path, |id| {
                on_path.contains(id)
            })?;
            on_path.extend(node_id(child));

            let frame = Frame {
                node: child,
                label,
                pending: children.enumerate(),
                blocks: Vec::new(),
            };
            stack.push(std::mem::replace(&mut current, frame));
            continue;
        }

        if let Some(id) = node_id(current.node) {
            on_path.remove(&id);
        }
        let block = compose(&current.label, std::mem::take(&mut current.blocks));

        match stack.pop() {
            Some(parent) => {
                current = parent;
                current.blocks.push(block);
                path.pop();
            }
            None => return Ok(block),
        }
    }
}

/// Fan children out on rayon down to `parallel_depth`, then hand each subtree
/// to the sequential traversal.
fn walk_parallel<'t, N, L, C, F>(
    node: &'t N,
    get_info: &F,
    options: &RenderOptions,
    position: Position,
) -> Result<Block>
where
    N: Sync + ?Sized,
    L: AsRef<str>,
    C: IntoIterator<Item = &'t N>,
    F: Fn(&'t N) -> (L, C) + Sync,
{
    use rayon::prelude::*;

    if position.depth >= options.parallel_depth {
        return walk(node, get_info, options.max_depth, position);
    }

    let (label, children) = enter(
        node,
        get_info,
        options.max_depth,
        position.depth,
        &position.path,
        |id| position.ancestors.contains(id),
    )?;
    let children: Vec<&'t N> = children.collect();

    let mut ancestors = position.ancestors.clone();
    ancestors.extend(node_id(node));

    let blocks = children
        .into_par_iter()
        .enumerate()
        .map(|(index, child)| {
            let mut path = position.path.clone();
            path.push(index);
            walk_parallel(
                child,
                get_info,
                options,
                Position {
                    depth: position.depth + 1,
                    path,
                    ancestors: ancestors.clone(),
                },
            )
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(compose(&label, blocks))
}
