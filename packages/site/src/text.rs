//! Blog body renderer
//!
//! Blog posts are written in a small markdown subset:
//!
//! - `## ` and `### ` headings
//! - `- ` bullet lines (contiguous lines form one list)
//! - blank lines between blocks
//! - `**bold**` spans inside paragraphs
//!
//! [`parse_blocks`] turns such a body into typed [`Block`]s in a single
//! forward pass. It never fails: anything it does not recognise becomes a
//! paragraph, and an unmatched `**` stays literal.

/// Inline run inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
}

/// One structural block of a rendered body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading2(String),
    Heading3(String),
    BulletList(Vec<String>),
    Paragraph(Vec<Inline>),
}

/// Line scanner state. A list is only closed when a non-bullet line (or
/// the end of input) is seen.
#[derive(Debug, Default)]
enum ScanState {
    #[default]
    Default,
    InList(Vec<String>),
}

#[derive(Debug, Default)]
struct BlockScanner {
    state: ScanState,
    blocks: Vec<Block>,
}

impl BlockScanner {
    fn feed(&mut self, raw: &str) {
        let line = raw.trim();

        if let Some(text) = line.strip_prefix("## ") {
            self.flush();
            self.blocks.push(Block::Heading2(text.to_string()));
        } else if let Some(text) = line.strip_prefix("### ") {
            self.flush();
            self.blocks.push(Block::Heading3(text.to_string()));
        } else if let Some(item) = line.strip_prefix("- ") {
            if let ScanState::InList(items) = &mut self.state {
                items.push(item.to_string());
            } else {
                self.state = ScanState::InList(vec![item.to_string()]);
            }
        } else if line.is_empty() {
            self.flush();
        } else {
            self.flush();
            self.blocks.push(Block::Paragraph(parse_inline(line)));
        }
    }

    fn flush(&mut self) {
        if let ScanState::InList(items) = std::mem::take(&mut self.state) {
            self.blocks.push(Block::BulletList(items));
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush();
        self.blocks
    }
}

/// Parse a blog body into blocks.
pub fn parse_blocks(content: &str) -> Vec<Block> {
    let mut scanner = BlockScanner::default();
    for line in content.split('\n') {
        scanner.feed(line);
    }
    scanner.finish()
}

/// Resolve `**bold**` spans, left to right, shortest match first.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    const MARKER: &str = "**";

    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(open) = rest.find(MARKER) {
        let after_open = &rest[open + MARKER.len()..];
        let Some(close) = after_open.find(MARKER) else {
            break;
        };

        plain.push_str(&rest[..open]);
        let bold = &after_open[..close];
        if !bold.is_empty() {
            if !plain.is_empty() {
                spans.push(Inline::Text(std::mem::take(&mut plain)));
            }
            spans.push(Inline::Bold(bold.to_string()));
        }
        rest = &after_open[close + MARKER.len()..];
    }

    plain.push_str(rest);
    if !plain.is_empty() {
        spans.push(Inline::Text(plain));
    }
    spans
}

/// Split plain service/industry copy on blank lines.
pub fn paragraphs(content: &str) -> Vec<&str> {
    content
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    fn bold(s: &str) -> Inline {
        Inline::Bold(s.to_string())
    }

    #[test]
    fn heading_paragraph_and_list() {
        let blocks = parse_blocks("## Title\n\nSome **bold** text.\n- one\n- two\n");

        assert_eq!(
            blocks,
            vec![
                Block::Heading2("Title".to_string()),
                Block::Paragraph(vec![text("Some "), bold("bold"), text(" text.")]),
                Block::BulletList(vec!["one".to_string(), "two".to_string()]),
            ]
        );
    }

    #[test]
    fn heading_closes_open_list() {
        let blocks = parse_blocks("- a\n- b\n### Next");

        assert_eq!(
            blocks,
            vec![
                Block::BulletList(vec!["a".to_string(), "b".to_string()]),
                Block::Heading3("Next".to_string()),
            ]
        );
    }

    #[test]
    fn blank_line_splits_lists() {
        let blocks = parse_blocks("- a\n\n- b");

        assert_eq!(
            blocks,
            vec![
                Block::BulletList(vec!["a".to_string()]),
                Block::BulletList(vec!["b".to_string()]),
            ]
        );
    }

    #[test]
    fn lines_are_trimmed_before_classification() {
        let blocks = parse_blocks("   ## Indented  \n\t- item ");

        assert_eq!(
            blocks,
            vec![
                Block::Heading2("Indented".to_string()),
                Block::BulletList(vec!["item".to_string()]),
            ]
        );
    }

    #[test]
    fn bullet_and_heading_text_keep_markers() {
        let blocks = parse_blocks("- **Lower cost**: free traffic\n## A **b**");

        assert_eq!(
            blocks,
            vec![
                Block::BulletList(vec!["**Lower cost**: free traffic".to_string()]),
                Block::Heading2("A **b**".to_string()),
            ]
        );
    }

    #[test]
    fn prefix_without_space_is_a_paragraph() {
        let blocks = parse_blocks("##NoSpace\n-dash");

        assert_eq!(
            blocks,
            vec![
                Block::Paragraph(vec![text("##NoSpace")]),
                Block::Paragraph(vec![text("-dash")]),
            ]
        );
    }

    #[test]
    fn empty_input_has_no_blocks() {
        assert!(parse_blocks("").is_empty());
        assert!(parse_blocks("\n\n  \n").is_empty());
    }

    #[test]
    fn parsing_is_deterministic() {
        let body = "## A\n- x\n- y\nSome **b** here";
        assert_eq!(parse_blocks(body), parse_blocks(body));
    }

    #[test]
    fn unmatched_marker_stays_literal() {
        assert_eq!(parse_inline("a ** b"), vec![text("a ** b")]);
        assert_eq!(
            parse_inline("**x** and ** y"),
            vec![bold("x"), text(" and ** y")]
        );
    }

    #[test]
    fn bold_matches_shortest_pair() {
        assert_eq!(
            parse_inline("**a** b **c**"),
            vec![bold("a"), text(" b "), bold("c")]
        );
    }

    #[test]
    fn empty_bold_span_is_dropped() {
        assert_eq!(parse_inline("x****y"), vec![text("xy")]);
    }

    #[test]
    fn leading_bold_has_no_empty_text() {
        assert_eq!(
            parse_inline("**Be consistent**: publish"),
            vec![bold("Be consistent"), text(": publish")]
        );
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let copy = "First.\n\nSecond line one.\nSecond line two.\n\nThird.";
        assert_eq!(
            paragraphs(copy),
            vec!["First.", "Second line one.\nSecond line two.", "Third."]
        );
    }
}
