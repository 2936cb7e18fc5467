//! Structured text documents
//!
//! DatoCMS delivers rich text as a DAST tree (`{"schema": "dast", "document": ...}`)
//! next to a list of embedded block records. [`ContentDocument`] is the flattened,
//! fully resolved form of that tree which the renderer consumes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// GraphQL typename of the image block records embedded in post content
pub const IMAGE_BLOCK_TYPENAME: &str = "ImageBlockRecord";

/// Errors raised while resolving a DAST tree into a [`ContentDocument`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("{node} node at position {index} is missing `{field}`")]
    MissingField {
        node: &'static str,
        index: usize,
        field: &'static str,
    },

    #[error("heading at position {index} has level {level}, expected 1-6")]
    InvalidHeadingLevel { index: usize, level: u64 },

    #[error("block at position {index} references unknown record `{item}`")]
    UnresolvedBlock { index: usize, item: String },
}

/// A semantic annotation on an inline span
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Code,
    Strong,
    Emphasis,
    Underline,
    Strikethrough,
    Highlight,
    #[serde(other)]
    Other,
}

/// A run of text inside a paragraph or heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    pub value: String,
    pub marks: Vec<Mark>,
}

impl InlineSpan {
    /// Plain text span without marks
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            marks: Vec::new(),
        }
    }

    /// Span carrying the `code` mark
    pub fn code(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            marks: vec![Mark::Code],
        }
    }

    pub fn has_mark(&self, mark: &Mark) -> bool {
        self.marks.contains(mark)
    }
}

/// One structural unit of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph { children: Vec<InlineSpan> },
    Heading { level: u8, children: Vec<InlineSpan> },
    Image { id: String, url: String },
    Code { language: Option<String>, code: String },
    /// Any node type the renderer does not project (lists, blockquotes, ...)
    Unknown { kind: String },
}

/// An ordered sequence of blocks, consumed once per page render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentDocument {
    pub blocks: Vec<Block>,
}

impl ContentDocument {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Resolve a structured text field into a document
    pub fn from_structured_text(text: &StructuredText) -> Result<Self, ContentError> {
        let records: HashMap<&str, &BlockRecord> =
            text.blocks.iter().map(|b| (b.id.as_str(), b)).collect();

        let blocks = text
            .value
            .document
            .children
            .iter()
            .enumerate()
            .map(|(index, node)| resolve_block(index, node, &records))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { blocks })
    }
}

/// Structured text field as returned by the CMS (`content { value blocks }`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredText {
    pub value: DastValue,
    pub blocks: Vec<BlockRecord>,
}

/// The `value` of a structured text field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DastValue {
    pub schema: String,
    pub document: DastNode,
}

/// A raw DAST node; every attribute is optional so unknown node types still parse
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DastNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "__typename", skip_serializing_if = "Option::is_none")]
    pub typename: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DastNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

/// An embedded record from the `blocks` list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockRecord {
    #[serde(rename = "__typename")]
    pub typename: String,
    pub id: String,
    pub image: Option<ImageRef>,
}

/// `image { url }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
}

fn resolve_block(
    index: usize,
    node: &DastNode,
    records: &HashMap<&str, &BlockRecord>,
) -> Result<Block, ContentError> {
    if node.typename.as_deref() == Some(IMAGE_BLOCK_TYPENAME) {
        let url = node
            .image
            .as_ref()
            .map(|i| i.url.clone())
            .ok_or(ContentError::MissingField {
                node: "image",
                index,
                field: "image.url",
            })?;
        return Ok(Block::Image {
            id: node.id.clone().unwrap_or_default(),
            url,
        });
    }

    let block = match node.kind.as_str() {
        "paragraph" => Block::Paragraph {
            children: collect_spans(&node.children),
        },
        "code" => Block::Code {
            language: node.language.clone().filter(|l| !l.is_empty()),
            code: node.code.clone().ok_or(ContentError::MissingField {
                node: "code",
                index,
                field: "code",
            })?,
        },
        "block" => {
            let item = node.item.as_deref().ok_or(ContentError::MissingField {
                node: "block",
                index,
                field: "item",
            })?;
            let record = records
                .get(item)
                .ok_or_else(|| ContentError::UnresolvedBlock {
                    index,
                    item: item.to_string(),
                })?;
            match (&record.typename[..], &record.image) {
                (IMAGE_BLOCK_TYPENAME, Some(image)) => Block::Image {
                    id: record.id.clone(),
                    url: image.url.clone(),
                },
                (IMAGE_BLOCK_TYPENAME, None) => {
                    return Err(ContentError::MissingField {
                        node: "image",
                        index,
                        field: "image.url",
                    })
                }
                (other, _) => Block::Unknown {
                    kind: other.to_string(),
                },
            }
        }
        kind if kind.starts_with("heading") => {
            let level = node.level.ok_or(ContentError::MissingField {
                node: "heading",
                index,
                field: "level",
            })?;
            if !(1..=6).contains(&level) {
                return Err(ContentError::InvalidHeadingLevel { index, level });
            }
            Block::Heading {
                level: level as u8,
                children: collect_spans(&node.children),
            }
        }
        other => Block::Unknown {
            kind: other.to_string(),
        },
    };

    Ok(block)
}

/// Flatten inline nodes into spans; links and other wrappers keep their text
fn collect_spans(nodes: &[DastNode]) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    for node in nodes {
        match (node.kind.as_str(), &node.value) {
            ("span", Some(value)) => spans.push(InlineSpan {
                value: value.clone(),
                marks: node.marks.clone(),
            }),
            _ => spans.extend(collect_spans(&node.children)),
        }
    }
    spans
}
