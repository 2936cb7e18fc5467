//! Display nodes produced by the document renderer

use std::borrow::Cow;

/// What a display node draws
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Structural line break between blocks
    Separator,
    Paragraph,
    /// Plain inline text
    Text,
    /// Inline monospace text (span with the `code` mark)
    InlineCode,
    Image { src: String, alt: Option<String> },
    Heading { level: u8 },
    /// Outer container of a fenced code block
    CodeBlock,
    /// The code element nested in a code block
    CodeToken { language: String },
}

/// Payload of a display node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeContent {
    Empty,
    /// Literal text, escaped when written out
    Text(String),
    Children(Vec<DisplayNode>),
    /// Pre-rendered HTML, only produced by the highlighting pass
    Markup(String),
}

/// A presentation-ready node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNode {
    pub kind: NodeKind,
    /// Style-class hint for the presentation layer
    pub class: Option<String>,
    pub content: NodeContent,
}

impl DisplayNode {
    pub fn separator() -> Self {
        Self {
            kind: NodeKind::Separator,
            class: None,
            content: NodeContent::Empty,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            class: None,
            content: NodeContent::Text(value.into()),
        }
    }

    pub fn inline_code(value: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::InlineCode,
            class: Some(INLINE_CODE_CLASS.to_string()),
            content: NodeContent::Text(value.into()),
        }
    }

    pub fn paragraph(children: Vec<DisplayNode>) -> Self {
        Self {
            kind: NodeKind::Paragraph,
            class: None,
            content: NodeContent::Children(children),
        }
    }

    pub fn heading(level: u8, children: Vec<DisplayNode>) -> Self {
        Self {
            kind: NodeKind::Heading { level },
            class: None,
            content: NodeContent::Children(children),
        }
    }

    pub fn image(src: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Image {
                src: src.into(),
                alt: None,
            },
            class: Some(CONTENT_IMAGE_CLASS.to_string()),
            content: NodeContent::Empty,
        }
    }

    pub fn code_block(language: &str, code: impl Into<String>) -> Self {
        let token = Self {
            kind: NodeKind::CodeToken {
                language: language.to_string(),
            },
            class: Some(format!("language-{}", language)),
            content: NodeContent::Text(code.into()),
        };
        Self {
            kind: NodeKind::CodeBlock,
            class: Some(CODE_BLOCK_CLASS.to_string()),
            content: NodeContent::Children(vec![token]),
        }
    }

    /// HTML tag for this node
    pub fn tag(&self) -> Cow<'static, str> {
        let tag = match &self.kind {
            NodeKind::Separator => "br",
            NodeKind::Paragraph => "p",
            NodeKind::Text | NodeKind::InlineCode => "span",
            NodeKind::Image { .. } => "img",
            NodeKind::Heading { level: 1 } => "h1",
            NodeKind::Heading { level: 2 } => "h2",
            NodeKind::Heading { level: 3 } => "h3",
            NodeKind::Heading { level: 4 } => "h4",
            NodeKind::Heading { level: 5 } => "h5",
            NodeKind::Heading { level: 6 } => "h6",
            NodeKind::Heading { level } => return Cow::Owned(format!("h{}", level)),
            NodeKind::CodeBlock => "pre",
            NodeKind::CodeToken { .. } => "code",
        };
        Cow::Borrowed(tag)
    }

    pub fn is_separator(&self) -> bool {
        self.kind == NodeKind::Separator
    }

    pub fn children(&self) -> &[DisplayNode] {
        match &self.content {
            NodeContent::Children(children) => children,
            _ => &[],
        }
    }

    /// Literal text of a leaf node
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            NodeContent::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Class on inline code spans
pub const INLINE_CODE_CLASS: &str = "code-span";

/// Class on embedded content images
pub const CONTENT_IMAGE_CLASS: &str = "content-image";

/// Class on fenced code block containers
pub const CODE_BLOCK_CLASS: &str = "line-numbers";
