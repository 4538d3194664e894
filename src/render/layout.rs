//! Column arithmetic for joining child blocks under a parent label.
//!
//! A parent with children renders as:
//!
//! ```text
//!       05          <- node line: label centered over the whole block
//!   ____|____       <- span line: only when there are 2+ children
//!  |    |    |      <- links line: one bar centered over each child
//!  02   04   06     <- child rows joined with GAP, then centered
//! ```
//!
//! The width formula and the centering bias are load-bearing: changing
//! either shifts bars away from the labels they sit under.

use super::block::Block;

/// Separator placed between adjacent children on every joined row.
pub const GAP: &str = "  ";

/// Center `text` in `width` columns.
///
/// When the padding is odd the extra space goes left only if both the padding
/// and the target width are odd, otherwise right. Text at least `width` wide
/// is returned unchanged.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = width - len;
    let left = pad / 2 + (pad & width & 1);

    let mut out = String::with_capacity(text.len() + pad);
    out.extend(std::iter::repeat(' ').take(left));
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(pad - left));
    out
}

/// Width of a parent block given its label length and its children's widths.
pub fn block_width(label_len: usize, child_widths: &[usize]) -> usize {
    if child_widths.is_empty() {
        return label_len;
    }
    let natural = child_widths.iter().sum::<usize>() + GAP.len() * child_widths.len() - 1;
    natural.max(label_len)
}

/// Build the block for `label` sitting above already rendered `children`.
pub fn compose(label: &str, children: Vec<Block>) -> Block {
    if children.is_empty() {
        return Block::leaf(label);
    }

    let label_len = label.chars().count();
    let widths: Vec<usize> = children.iter().map(Block::width).collect();
    let total = block_width(label_len, &widths);

    let node_line = center(label, total);

    let bars: Vec<String> = widths.iter().map(|&w| center("|", w)).collect();
    let links_line = center(&bars.join(GAP), total);

    let mut lines = Vec::with_capacity(3 + children.iter().map(Block::height).max().unwrap_or(0));
    lines.push(node_line);

    if children.len() > 1 {
        lines.push(span_line(label_len, total, &links_line));
    }
    lines.push(links_line);

    let height = children.iter().map(Block::height).max().unwrap_or(0);
    for row in 0..height {
        let cells: Vec<_> = children.iter().map(|child| child.row_or_blank(row)).collect();
        lines.push(center(&cells.join(GAP), total));
    }

    Block::from_padded(lines, total)
}

/// Underscore rule from the outermost child bars to the bar under the label's center.
fn span_line(label_len: usize, total: usize, links_line: &str) -> String {
    // links_line is pure ASCII, so byte offsets are columns
    let first_bar = links_line.find('|').unwrap_or(0);
    let last_bar = links_line.rfind('|').unwrap_or(first_bar);

    let left_indent = first_bar + 1;
    let right_indent = total - last_bar;
    let span_width = total.saturating_sub(left_indent + right_indent + 1);

    let pad = total - label_len;
    let label_start = pad / 2 + (pad & total & 1);
    let label_center = label_start + label_len.saturating_sub(1) / 2;

    let left_span = label_center.saturating_sub(left_indent).min(span_width);
    let right_span = span_width - left_span;

    let mut line = String::with_capacity(total);
    line.push_str(&" ".repeat(left_indent));
    line.push_str(&"_".repeat(left_span));
    line.push('|');
    line.push_str(&"_".repeat(right_span));
    line.push_str(&" ".repeat(right_indent));
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaves(labels: &[&str]) -> Vec<Block> {
        labels.iter().map(|l| Block::leaf(l)).collect()
    }

    #[test]
    fn test_center_bias() {
        // odd padding into an even width: extra space goes right
        assert_eq!(center("A", 2), "A ");
        // odd padding into an odd width: extra space goes left
        assert_eq!(center("ab", 5), "  ab ");
        assert_eq!(center("|", 3), " | ");
        assert_eq!(center("05", 34), format!("{}05{}", " ".repeat(16), " ".repeat(16)));
    }

    #[test]
    fn test_center_never_truncates() {
        assert_eq!(center("abcdef", 3), "abcdef");
        assert_eq!(center("abc", 3), "abc");
    }

    #[test]
    fn test_block_width() {
        assert_eq!(block_width(2, &[]), 2);
        assert_eq!(block_width(1, &[1]), 2);
        assert_eq!(block_width(4, &[1, 1, 1]), 8);
        assert_eq!(block_width(17, &[1, 1]), 17);
    }

    #[test]
    fn test_compose_leaf() {
        assert_eq!(compose("X", vec![]).lines(), ["X"]);
    }

    #[test]
    fn test_compose_single_child_has_no_span() {
        let block = compose("A", leaves(&["B"]));
        assert_eq!(block.lines(), ["A ", "| ", "B "]);
        assert_eq!(block.width(), 2);
    }

    #[test]
    fn test_compose_three_children() {
        let block = compose("root", leaves(&["a", "b", "c"]));
        assert_eq!(block.lines(), ["  root  ", " __|__  ", "|  |  | ", "a  b  c "]);
    }

    #[test]
    fn test_compose_label_wider_than_children() {
        let block = compose("wide-parent-label", leaves(&["x", "y"]));
        assert_eq!(
            block.lines(),
            [
                "wide-parent-label",
                "        |_       ",
                "       |  |      ",
                "       x  y      ",
            ]
        );
    }

    #[test]
    fn test_compose_pads_shorter_children() {
        let left = compose("left", leaves(&["l1", "l2"]));
        let block = compose("p", vec![left, Block::leaf("r")]);
        assert_eq!(
            block.lines(),
            [
                "     p     ",
                "     |____ ",
                "    |     |",
                "   left   r",
                "   _|_     ",
                "  |   |    ",
                "  l1  l2   ",
            ]
        );
    }

    #[test]
    fn test_span_bar_sits_under_label_center() {
        let block = compose("root", leaves(&["a", "b", "c"]));
        let node_line = &block.lines()[0];
        let span = &block.lines()[1];
        let label_center = node_line.find("root").unwrap() + (4 - 1) / 2;
        assert_eq!(span.find('|'), Some(label_center));
        assert_eq!(span.matches('|').count(), 1);
    }

    #[test]
    fn test_links_line_has_one_bar_per_child() {
        let block = compose("n", leaves(&["one", "two", "three", "four"]));
        let links = &block.lines()[2];
        assert_eq!(links.matches('|').count(), 4);
        let labels = &block.lines()[3];
        for (bar, word) in links
            .match_indices('|')
            .map(|(i, _)| i)
            .zip(["one", "two", "three", "four"])
        {
            let start = labels.find(word).unwrap();
            assert!(bar >= start && bar < start + word.len(), "bar {bar} not over {word}");
        }
    }
}
