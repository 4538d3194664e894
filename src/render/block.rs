use std::borrow::Cow;
use std::fmt;

/// The rendering of one subtree: equal-width text lines, root line first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
    width: usize,
}

impl Block {
    /// A childless node renders as its bare label.
    pub fn leaf(label: &str) -> Self {
        Self {
            lines: vec![label.to_string()],
            width: label.chars().count(),
        }
    }

    /// Wrap lines that the caller has already padded to `width`.
    pub(crate) fn from_padded(lines: Vec<String>, width: usize) -> Self {
        debug_assert!(lines.iter().all(|line| line.chars().count() == width));
        Self { lines, width }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Width shared by every line
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Line `row`, or blank padding of the block's width when the block is shorter.
    pub(crate) fn row_or_blank(&self, row: usize) -> Cow<'_, str> {
        match self.lines.get(row) {
            Some(line) => Cow::Borrowed(line.as_str()),
            None => Cow::Owned(" ".repeat(self.width)),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
