/// ADF format version written on every document
pub const ADF_VERSION: u32 = 1;

/// Level used for every heading line
pub const HEADING_LEVEL: u8 = 3;

/// Inline text spans
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Code(String),
    /// Auto-detected URL; `href` is the same string as `text`.
    Link { text: String, href: String },
}

impl Span {
    /// Build a link span whose target is its own text.
    pub fn link(url: &str) -> Self {
        Span::Link {
            text: url.to_string(),
            href: url.to_string(),
        }
    }

    /// Literal text carried by the span, whatever its kind.
    pub fn text(&self) -> &str {
        match self {
            Span::Text(text) | Span::Code(text) | Span::Link { text, .. } => text,
        }
    }
}

/// A single bullet item. Serialized as one paragraph holding `content`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub content: Vec<Span>,
}

/// An unordered list; never built with zero items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub items: Vec<ListItem>,
}

/// Block-level elements parsed from plain text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, content: Vec<Span> },
    Paragraph { content: Vec<Span> },
    BulletList(List),
}

impl Block {
    /// ADF node type name for this block.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::BulletList(_) => "bulletList",
        }
    }
}

/// Root of a converted document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub version: u32,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            version: ADF_VERSION,
            blocks,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
