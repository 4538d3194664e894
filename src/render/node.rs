use std::borrow::Cow;

/// Read access to a tree: a label and an ordered list of children.
///
/// The renderer never mutates nodes. Children are visited left to right in the
/// order returned here. Trees that cannot implement this trait directly can be
/// rendered through [`Renderer::render_with`](super::Renderer::render_with),
/// which takes an accessor closure instead.
pub trait TreeNode {
    /// Text printed for this node. Must not be empty.
    fn label(&self) -> Cow<'_, str>;

    /// Ordered children (empty for leaves).
    fn children(&self) -> Vec<&Self>;
}

/// Identity of a node on the current path: its address and its size.
///
/// The size tells apart unsized nodes sharing a start address, such as a
/// string slice and its own prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId {
    addr: usize,
    size: usize,
}

/// `None` for zero-sized nodes, which have no usable identity; those are
/// bounded by the depth limit alone.
pub(crate) fn node_id<N: ?Sized>(node: &N) -> Option<NodeId> {
    let size = std::mem::size_of_val(node);
    if size == 0 {
        return None;
    }
    Some(NodeId {
        addr: (node as *const N).cast::<()>() as usize,
        size,
    })
}
