//! ADF JSON output.
//!
//! The document model stays free of wire concerns; these mirror types add the
//! constant `type` tags, `attrs` and `marks` that the ADF format requires.

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::block::{Block, Document, ListItem, Span};
use crate::config::OutputConfig;

#[derive(Serialize)]
struct AdfDoc<'a> {
    version: u32,
    #[serde(rename = "type")]
    node_type: &'static str,
    content: Vec<AdfBlock<'a>>,
}

impl<'a> From<&'a Document> for AdfDoc<'a> {
    fn from(doc: &'a Document) -> Self {
        Self {
            version: doc.version,
            node_type: "doc",
            content: doc.blocks.iter().map(AdfBlock::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum AdfBlock<'a> {
    #[serde(rename = "paragraph")]
    Paragraph { content: Vec<AdfText<'a>> },
    #[serde(rename = "heading")]
    Heading {
        attrs: HeadingAttrs,
        content: Vec<AdfText<'a>>,
    },
    #[serde(rename = "bulletList")]
    BulletList { content: Vec<AdfBlock<'a>> },
    #[serde(rename = "listItem")]
    ListItem { content: Vec<AdfBlock<'a>> },
}

#[derive(Serialize)]
struct HeadingAttrs {
    level: u8,
}

impl<'a> From<&'a Block> for AdfBlock<'a> {
    fn from(block: &'a Block) -> Self {
        match block {
            Block::Paragraph { content } => AdfBlock::Paragraph {
                content: spans(content),
            },
            Block::Heading { level, content } => AdfBlock::Heading {
                attrs: HeadingAttrs { level: *level },
                content: spans(content),
            },
            Block::BulletList(list) => AdfBlock::BulletList {
                content: list.items.iter().map(AdfBlock::from).collect(),
            },
        }
    }
}

impl<'a> From<&'a ListItem> for AdfBlock<'a> {
    fn from(item: &'a ListItem) -> Self {
        AdfBlock::ListItem {
            content: vec![AdfBlock::Paragraph {
                content: spans(&item.content),
            }],
        }
    }
}

#[derive(Serialize)]
struct AdfText<'a> {
    #[serde(rename = "type")]
    node_type: &'static str,
    text: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    marks: Vec<AdfMark<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum AdfMark<'a> {
    Code,
    Link { attrs: LinkAttrs<'a> },
}

#[derive(Serialize)]
struct LinkAttrs<'a> {
    href: &'a str,
}

impl<'a> From<&'a Span> for AdfText<'a> {
    fn from(span: &'a Span) -> Self {
        let marks = match span {
            Span::Text(_) => Vec::new(),
            Span::Code(_) => vec![AdfMark::Code],
            Span::Link { href, .. } => vec![AdfMark::Link {
                attrs: LinkAttrs { href },
            }],
        };
        Self {
            node_type: "text",
            text: span.text(),
            marks,
        }
    }
}

fn spans(content: &[Span]) -> Vec<AdfText<'_>> {
    content.iter().map(AdfText::from).collect()
}

/// Convert a document to a JSON value.
pub fn to_value(doc: &Document) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(AdfDoc::from(doc))
}

/// Render a document as pretty-printed ADF JSON with two-space indentation.
pub fn to_json(doc: &Document) -> Result<String, serde_json::Error> {
    to_json_with_config(doc, &OutputConfig::default())
}

/// Render a document as ADF JSON using the given output settings.
pub fn to_json_with_config(
    doc: &Document,
    config: &OutputConfig,
) -> Result<String, serde_json::Error> {
    let adf = AdfDoc::from(doc);

    if config.compact {
        return serde_json::to_string(&adf);
    }

    let indent = " ".repeat(config.indent);
    let mut out = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
    adf.serialize(&mut serializer)?;

    String::from_utf8(out).map_err(serde_json::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::List;
    use serde_json::json;

    fn text(s: &str) -> Span {
        Span::Text(s.to_string())
    }

    #[test]
    fn empty_document() {
        let doc = Document::new(Vec::new());
        assert_eq!(
            to_value(&doc).unwrap(),
            json!({"version": 1, "type": "doc", "content": []})
        );
    }

    #[test]
    fn paragraph_with_all_span_kinds() {
        let doc = Document::new(vec![Block::Paragraph {
            content: vec![
                text("see "),
                Span::Code("make".to_string()),
                Span::link("https://x.io"),
            ],
        }]);
        assert_eq!(
            to_value(&doc).unwrap(),
            json!({
                "version": 1,
                "type": "doc",
                "content": [{
                    "type": "paragraph",
                    "content": [
                        {"type": "text", "text": "see "},
                        {"type": "text", "text": "make", "marks": [{"type": "code"}]},
                        {
                            "type": "text",
                            "text": "https://x.io",
                            "marks": [{"type": "link", "attrs": {"href": "https://x.io"}}]
                        }
                    ]
                }]
            })
        );
    }

    #[test]
    fn heading_carries_level() {
        let doc = Document::new(vec![Block::Heading {
            level: 3,
            content: vec![text("Tasks:")],
        }]);
        assert_eq!(
            to_value(&doc).unwrap()["content"][0],
            json!({
                "type": "heading",
                "attrs": {"level": 3},
                "content": [{"type": "text", "text": "Tasks:"}]
            })
        );
    }

    #[test]
    fn list_items_wrap_a_paragraph() {
        let doc = Document::new(vec![Block::BulletList(List {
            items: vec![
                ListItem {
                    content: vec![text("a")],
                },
                ListItem {
                    content: vec![text("b")],
                },
            ],
        })]);
        assert_eq!(
            to_value(&doc).unwrap()["content"][0],
            json!({
                "type": "bulletList",
                "content": [
                    {
                        "type": "listItem",
                        "content": [{"type": "paragraph", "content": [{"type": "text", "text": "a"}]}]
                    },
                    {
                        "type": "listItem",
                        "content": [{"type": "paragraph", "content": [{"type": "text", "text": "b"}]}]
                    }
                ]
            })
        );
    }

    #[test]
    fn pretty_output_keeps_key_order() {
        let doc = Document::new(vec![Block::Heading {
            level: 3,
            content: vec![text("T:")],
        }]);
        let expected = r#"{
  "version": 1,
  "type": "doc",
  "content": [
    {
      "type": "heading",
      "attrs": {
        "level": 3
      },
      "content": [
        {
          "type": "text",
          "text": "T:"
        }
      ]
    }
  ]
}"#;
        assert_eq!(to_json(&doc).unwrap(), expected);
    }

    #[test]
    fn custom_indent() {
        let doc = Document::new(Vec::new());
        let config = OutputConfig {
            indent: 4,
            compact: false,
        };
        assert_eq!(
            to_json_with_config(&doc, &config).unwrap(),
            "{\n    \"version\": 1,\n    \"type\": \"doc\",\n    \"content\": []\n}"
        );
    }

    #[test]
    fn compact_output() {
        let doc = Document::new(vec![Block::Paragraph {
            content: vec![text("hi")],
        }]);
        let config = OutputConfig {
            indent: 2,
            compact: true,
        };
        assert_eq!(
            to_json_with_config(&doc, &config).unwrap(),
            r#"{"version":1,"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"hi"}]}]}"#
        );
    }

    #[test]
    fn non_ascii_is_written_as_utf8() {
        let doc = Document::new(vec![Block::Paragraph {
            content: vec![text("naïve – ok")],
        }]);
        assert!(to_json(&doc).unwrap().contains("\"naïve – ok\""));
    }
}
