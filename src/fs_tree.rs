//! Load a directory hierarchy as a [`Tree`].

use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::config::DirConfig;
use crate::error::{Result, TreePrintError};
use crate::tree::{close_levels, Tree};

/// Options for reading a directory into a tree.
#[derive(Debug, Clone, Default)]
pub struct DirOptions {
    /// Maximum depth to descend (None = unlimited)
    pub max_depth: Option<usize>,

    /// Include hidden files/directories (starting with .)
    pub include_hidden: bool,
}

impl DirOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum recursion depth (0 = unlimited)
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = (depth > 0).then_some(depth);
        self
    }

    /// Set whether to include hidden files
    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }
}

impl From<&DirConfig> for DirOptions {
    fn from(config: &DirConfig) -> Self {
        Self::new()
            .with_max_depth(config.max_depth)
            .with_hidden(config.include_hidden)
    }
}

/// Walk `root` into a tree labelled by file name, children sorted by name.
///
/// Directories are labelled with a trailing `/`. Entries that cannot be read
/// are skipped with a warning. Symlinks are not followed.
pub fn load_dir(root: &Path, options: &DirOptions) -> Result<Tree> {
    let canonical = root.canonicalize().map_err(|e| TreePrintError::Io {
        path: root.to_path_buf(),
        source: e,
    })?;

    let mut walker = WalkDir::new(&canonical)
        .follow_links(false)
        .sort_by_file_name();
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    let include_hidden = options.include_hidden;
    let entries = walker
        .into_iter()
        .filter_entry(|e| include_hidden || e.depth() == 0 || !is_hidden(e));

    // Open directories from the root down to the last entry seen
    let mut stack: Vec<Tree> = Vec::new();
    for result in entries {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "Skipping unreadable entry");
                continue;
            }
        };

        let depth = entry.depth();
        close_levels(&mut stack, depth);
        stack.push(Tree::new(entry_label(&entry, root)));
    }

    close_levels(&mut stack, 1);
    let tree = stack.pop().ok_or_else(|| TreePrintError::Io {
        path: root.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "directory yielded no entries"),
    })?;

    tracing::debug!(path = %canonical.display(), nodes = tree.node_count(), "Loaded directory tree");
    Ok(tree)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// The root keeps the name it was given on the command line.
fn entry_label(entry: &DirEntry, root: &Path) -> String {
    let name = if entry.depth() == 0 {
        root.display().to_string()
    } else {
        entry.file_name().to_string_lossy().into_owned()
    };

    if entry.file_type().is_dir() && !name.ends_with('/') {
        format!("{}/", name)
    } else {
        name
    }
}
