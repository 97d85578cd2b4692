use crate::block::{Block, Document, HEADING_LEVEL, List, ListItem, Span};
use crate::inline::parse_inline;

const BULLET_MARKER: &str = "- ";
const HEADING_SUFFIX: char = ':';

/// Parse plain text into a document
pub fn build_document(text: &str) -> Document {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut state = BuildState::default();

    log::debug!("Building document from {} lines", lines.len());

    let mut i = 0;
    while i < lines.len() {
        let line = classify(lines[i]);
        log::trace!("Line {}: {:?}", i + 1, line);

        match line {
            Line::Blank if !state.items.is_empty() => {
                match next_non_blank(&lines, i + 1) {
                    // Blank lines before another bullet stay inside the list
                    Some(next) if matches!(classify(lines[next]), Line::Bullet(_)) => {
                        i = next;
                        continue;
                    }
                    _ => state.flush_list(),
                }
            }
            Line::Blank => {}
            Line::Bullet(rest) => {
                state.items.push(ListItem {
                    content: parse_inline(rest),
                });
            }
            Line::Heading(heading) => {
                state.flush_list();
                state.blocks.push(Block::Heading {
                    level: HEADING_LEVEL,
                    content: vec![Span::Text(heading.to_string())],
                });
            }
            Line::Paragraph(paragraph) => {
                state.flush_list();
                state.blocks.push(Block::Paragraph {
                    content: parse_inline(paragraph),
                });
            }
        }

        i += 1;
    }

    state.flush_list();

    log::debug!("Built document with {} blocks", state.blocks.len());
    Document::new(state.blocks)
}

/// A line after trailing whitespace is trimmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    /// Text after the bullet marker
    Bullet(&'a str),
    /// Whole line, trailing colon included
    Heading(&'a str),
    Paragraph(&'a str),
}

fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim_end();

    if line.is_empty() {
        return Line::Blank;
    }
    if let Some(rest) = line.strip_prefix(BULLET_MARKER) {
        return Line::Bullet(rest);
    }
    if line.ends_with(HEADING_SUFFIX) && !line.starts_with(' ') {
        return Line::Heading(line);
    }
    Line::Paragraph(line)
}

/// Index of the first non-blank line at or after `from`.
///
/// Callers inspect only that one line; later bullets do not count.
fn next_non_blank(lines: &[&str], from: usize) -> Option<usize> {
    (from..lines.len()).find(|&j| classify(lines[j]) != Line::Blank)
}

#[derive(Default)]
struct BuildState {
    blocks: Vec<Block>,
    // Bullet items not yet emitted as a list
    items: Vec<ListItem>,
}

impl BuildState {
    fn flush_list(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.items);
        log::trace!("Closing bullet list with {} items", items.len());
        self.blocks.push(Block::BulletList(List { items }));
    }
}
