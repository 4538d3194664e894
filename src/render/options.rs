use crate::config::RenderConfig;

/// Default limit on tree depth before rendering is refused.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Default number of levels below the root rendered on the rayon pool.
pub const DEFAULT_PARALLEL_DEPTH: usize = 4;

/// Configuration options for rendering a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Deepest level accepted below the root (root is level 0)
    pub max_depth: usize,

    /// Levels whose children are rendered in parallel by `render_parallel`.
    /// Deeper subtrees are rendered sequentially on the worker that reached them.
    pub parallel_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            parallel_depth: DEFAULT_PARALLEL_DEPTH,
        }
    }
}

impl RenderOptions {
    /// Create a new RenderOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum tree depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set how many levels fan out onto the thread pool
    pub fn with_parallel_depth(mut self, depth: usize) -> Self {
        self.parallel_depth = depth;
        self
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            parallel_depth: config.parallel_depth,
        }
    }
}
