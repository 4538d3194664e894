//! Owned tree type and the text formats it loads from.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TreePrintError};
use crate::render::TreeNode;

/// A labelled node owning its children.
///
/// Serializes as `{"label": "...", "children": [...]}`; `children` may be
/// omitted for leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    pub label: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Tree>,
}

/// Text format of a tree document
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// JSON if the document starts with `{`, outline otherwise
    #[default]
    Auto,
    /// `{"label": ..., "children": [...]}` documents
    Json,
    /// One node per line, nesting given by indentation
    Outline,
}

impl Tree {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Append a child, builder style.
    pub fn with_child(mut self, child: Tree) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes, this one included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }

    /// The tree printed by `treeprint demo`.
    pub fn sample() -> Self {
        Tree::new("05")
            .with_child(Tree::new("02").with_child(Tree::new("01")))
            .with_child(
                Tree::new("04")
                    .with_child(Tree::new("01"))
                    .with_child(
                        Tree::new("02")
                            .with_child(Tree::new("03"))
                            .with_child(Tree::new("06")),
                    )
                    .with_child(Tree::new("09"))
                    .with_child(Tree::new("08"))
                    .with_child(Tree::new("02")),
            )
            .with_child(Tree::new("06"))
    }

    /// Parse `text` in the given format.
    pub fn parse(text: &str, format: InputFormat) -> Result<Self> {
        match format {
            InputFormat::Json => Self::from_json(text),
            InputFormat::Outline => Self::from_outline(text),
            InputFormat::Auto if text.trim_start().starts_with('{') => Self::from_json(text),
            InputFormat::Auto => Self::from_outline(text),
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let tree: Tree = serde_json::from_str(text)?;
        tracing::debug!(nodes = tree.node_count(), "Parsed JSON tree");
        Ok(tree)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Parse an indented outline.
    ///
    /// Each non-blank line is a node whose depth is its indentation in units.
    /// The unit is one tab, or the width of the first space-indented line.
    /// The first line is the root and must not be indented.
    pub fn from_outline(text: &str) -> Result<Self> {
        let mut stack: Vec<Tree> = Vec::new();
        let mut unit = None;

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let content = raw.trim();
            if content.is_empty() {
                continue;
            }

            let indent = &raw[..raw.len() - raw.trim_start().len()];
            let level = indent_level(indent, &mut unit)
                .map_err(|message| TreePrintError::Outline { line, message })?;

            if level == 0 && !stack.is_empty() {
                return Err(TreePrintError::Outline {
                    line,
                    message: "a second top-level node; an outline has one root".to_string(),
                });
            }
            if level > 0 && stack.is_empty() {
                return Err(TreePrintError::Outline {
                    line,
                    message: "the root node must not be indented".to_string(),
                });
            }
            if level > stack.len() {
                return Err(TreePrintError::Outline {
                    line,
                    message: format!(
                        "indented {} levels under a node at level {}",
                        level,
                        stack.len().saturating_sub(1)
                    ),
                });
            }

            close_levels(&mut stack, level);
            stack.push(Tree::new(content));
        }

        close_levels(&mut stack, 1);
        let tree = stack.pop().ok_or(TreePrintError::EmptyInput)?;
        tracing::debug!(nodes = tree.node_count(), "Parsed outline");
        Ok(tree)
    }
}

impl TreeNode for Tree {
    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.label)
    }

    fn children(&self) -> Vec<&Self> {
        self.children.iter().collect()
    }
}

/// Fold the open nodes deeper than `depth` into their parents.
///
/// `stack` holds the path of still-open nodes, root first. The root is
/// never folded.
pub(crate) fn close_levels(stack: &mut Vec<Tree>, depth: usize) {
    while stack.len() > depth.max(1) {
        let Some(child) = stack.pop() else { break };
        if let Some(parent) = stack.last_mut() {
            parent.children.push(child);
        }
    }
}

fn indent_level(indent: &str, unit: &mut Option<usize>) -> std::result::Result<usize, String> {
    if indent.is_empty() {
        return Ok(0);
    }
    if indent.chars().all(|c| c == '\t') {
        return Ok(indent.len());
    }
    if !indent.chars().all(|c| c == ' ') {
        return Err("indentation must use only spaces or only tabs".to_string());
    }

    let spaces = indent.len();
    let unit = *unit.get_or_insert(spaces);
    if spaces % unit != 0 {
        return Err(format!(
            "indentation of {} spaces is not a multiple of {}",
            spaces, unit
        ));
    }
    Ok(spaces / unit)
}
