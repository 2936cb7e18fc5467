//! Structured text to display nodes

use crate::config::RenderConfig;
use crate::content::{Block, ContentDocument, InlineSpan, Mark};

use super::node::DisplayNode;

/// Options for projecting a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit a separator before image blocks too (off: images are never preceded by one)
    pub separator_before_images: bool,

    /// Language used for code blocks without a language tag
    pub default_language: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            separator_before_images: false,
            default_language: "javascript".to_string(),
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        Self {
            separator_before_images: config.separator_before_images,
            default_language: config.default_language.clone(),
        }
    }
}

/// Projects a [`ContentDocument`] into an ordered sequence of display nodes
#[derive(Debug, Clone, Default)]
pub struct DocumentRenderer {
    options: RenderOptions,
}

impl DocumentRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Walk the document once and produce its display nodes
    pub fn render(&self, document: &ContentDocument) -> Vec<DisplayNode> {
        let mut nodes = Vec::with_capacity(document.len() * 2);

        for (index, block) in document.blocks.iter().enumerate() {
            let node = match block {
                Block::Paragraph { children } => Some(DisplayNode::paragraph(
                    children.iter().map(paragraph_span).collect(),
                )),
                Block::Heading { level, children } => Some(DisplayNode::heading(
                    *level,
                    children.iter().map(|s| DisplayNode::text(&s.value)).collect(),
                )),
                Block::Image { url, .. } => Some(DisplayNode::image(url)),
                Block::Code { language, code } => {
                    let language = language
                        .as_deref()
                        .unwrap_or(&self.options.default_language);
                    Some(DisplayNode::code_block(language, code))
                }
                Block::Unknown { kind } => {
                    tracing::trace!("Skipping unsupported block `{}` at {}", kind, index);
                    None
                }
            };

            let Some(node) = node else { continue };

            if index != 0 && self.wants_separator(block) {
                nodes.push(DisplayNode::separator());
            }
            nodes.push(node);
        }

        nodes
    }

    fn wants_separator(&self, block: &Block) -> bool {
        match block {
            Block::Image { .. } => self.options.separator_before_images,
            _ => true,
        }
    }
}

fn paragraph_span(span: &InlineSpan) -> DisplayNode {
    if span.has_mark(&Mark::Code) {
        DisplayNode::inline_code(&span.value)
    } else {
        DisplayNode::text(&span.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::node::{NodeContent, NodeKind};

    fn paragraph(text: &str) -> Block {
        Block::Paragraph {
            children: vec![InlineSpan::plain(text)],
        }
    }

    fn image(id: &str) -> Block {
        Block::Image {
            id: id.to_string(),
            url: format!("https://cdn/{}.png", id),
        }
    }

    fn separators(nodes: &[DisplayNode]) -> usize {
        nodes.iter().filter(|n| n.is_separator()).count()
    }

    fn content_nodes(nodes: &[DisplayNode]) -> usize {
        nodes.iter().filter(|n| !n.is_separator()).count()
    }

    #[test]
    fn test_empty_and_single_block_have_no_separator() {
        let renderer = DocumentRenderer::new();
        assert!(renderer.render(&ContentDocument::default()).is_empty());

        let nodes = renderer.render(&ContentDocument::new(vec![paragraph("only")]));
        assert_eq!(nodes.len(), 1);
        assert_eq!(separators(&nodes), 0);
    }

    #[test]
    fn test_separator_between_blocks_preserves_order() {
        let doc = ContentDocument::new(vec![
            paragraph("one"),
            Block::Heading {
                level: 3,
                children: vec![InlineSpan::plain("two")],
            },
            Block::Code {
                language: Some("rust".to_string()),
                code: "three".to_string(),
            },
        ]);
        let nodes = DocumentRenderer::new().render(&doc);
        let tags: Vec<_> = nodes.iter().map(|n| n.tag()).collect();
        assert_eq!(tags, vec!["p", "br", "h3", "br", "pre"]);
    }

    #[test]
    fn test_paragraph_marks() {
        let doc = ContentDocument::new(vec![Block::Paragraph {
            children: vec![InlineSpan::plain("a"), InlineSpan::code("b")],
        }]);
        let nodes = DocumentRenderer::new().render(&doc);
        assert_eq!(
            nodes,
            vec![DisplayNode::paragraph(vec![
                DisplayNode::text("a"),
                DisplayNode::inline_code("b"),
            ])]
        );
        assert_eq!(nodes[0].children()[1].class.as_deref(), Some("code-span"));
    }

    #[test]
    fn test_code_block_default_language() {
        let doc = ContentDocument::new(vec![Block::Code {
            language: None,
            code: "print(1)".to_string(),
        }]);
        let nodes = DocumentRenderer::new().render(&doc);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].kind, NodeKind::CodeBlock);

        let token = &nodes[0].children()[0];
        assert_eq!(token.tag(), "code");
        assert_eq!(token.class.as_deref(), Some("language-javascript"));
        assert_eq!(token.text_content(), Some("print(1)"));
    }

    #[test]
    fn test_code_block_configured_default_language() {
        let renderer = DocumentRenderer::with_options(RenderOptions {
            default_language: "bash".to_string(),
            ..RenderOptions::default()
        });
        let doc = ContentDocument::new(vec![Block::Code {
            language: None,
            code: "ls".to_string(),
        }]);
        let nodes = renderer.render(&doc);
        assert_eq!(
            nodes[0].children()[0].class.as_deref(),
            Some("language-bash")
        );
    }

    #[test]
    fn test_heading_ignores_marks() {
        let doc = ContentDocument::new(vec![Block::Heading {
            level: 2,
            children: vec![InlineSpan::plain("Hi"), InlineSpan::code("there")],
        }]);
        let nodes = DocumentRenderer::new().render(&doc);
        assert_eq!(nodes[0].tag(), "h2");
        assert_eq!(
            nodes[0].children(),
            &[DisplayNode::text("Hi"), DisplayNode::text("there")]
        );
    }

    #[test]
    fn test_image_node() {
        let doc = ContentDocument::new(vec![Block::Image {
            id: "x7".to_string(),
            url: "https://cdn/x7.png".to_string(),
        }]);
        let nodes = DocumentRenderer::new().render(&doc);
        assert_eq!(nodes.len(), 1);
        assert_eq!(
            nodes[0].kind,
            NodeKind::Image {
                src: "https://cdn/x7.png".to_string(),
                alt: None,
            }
        );
        assert_eq!(nodes[0].class.as_deref(), Some("content-image"));
        assert_eq!(nodes[0].content, NodeContent::Empty);
    }

    #[test]
    fn test_images_skip_separator_by_default() {
        let doc = ContentDocument::new(vec![paragraph("a"), image("i1"), paragraph("b")]);
        let nodes = DocumentRenderer::new().render(&doc);
        let tags: Vec<_> = nodes.iter().map(|n| n.tag()).collect();
        assert_eq!(tags, vec!["p", "img", "br", "p"]);
    }

    #[test]
    fn test_separator_before_images_when_enabled() {
        let renderer = DocumentRenderer::with_options(RenderOptions {
            separator_before_images: true,
            ..RenderOptions::default()
        });
        let doc = ContentDocument::new(vec![paragraph("a"), image("i1"), paragraph("b")]);
        let nodes = renderer.render(&doc);
        assert_eq!(separators(&nodes), doc.len() - 1);
        let tags: Vec<_> = nodes.iter().map(|n| n.tag()).collect();
        assert_eq!(tags, vec!["p", "br", "img", "br", "p"]);
    }

    #[test]
    fn test_leading_image_has_no_separator() {
        let renderer = DocumentRenderer::with_options(RenderOptions {
            separator_before_images: true,
            ..RenderOptions::default()
        });
        let nodes = renderer.render(&ContentDocument::new(vec![image("i0"), paragraph("a")]));
        let tags: Vec<_> = nodes.iter().map(|n| n.tag()).collect();
        assert_eq!(tags, vec!["img", "br", "p"]);
    }

    #[test]
    fn test_unknown_block_is_dropped() {
        let doc = ContentDocument::new(vec![
            paragraph("a"),
            Block::Unknown {
                kind: "blockquote".to_string(),
            },
            paragraph("b"),
        ]);
        let nodes = DocumentRenderer::new().render(&doc);
        assert_eq!(content_nodes(&nodes), 2);
        assert_eq!(separators(&nodes), 1);
    }

    #[test]
    fn test_separator_count_lower_bound() {
        let renderer = DocumentRenderer::new();
        let doc = ContentDocument::new(vec![
            paragraph("a"),
            paragraph("b"),
            Block::Code {
                language: None,
                code: "x".to_string(),
            },
            paragraph("c"),
        ]);
        assert!(separators(&renderer.render(&doc)) >= doc.len() - 1);
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = ContentDocument::new(vec![
            paragraph("a"),
            image("i1"),
            Block::Code {
                language: Some("json".to_string()),
                code: "{}".to_string(),
            },
        ]);
        let renderer = DocumentRenderer::new();
        assert_eq!(renderer.render(&doc), renderer.render(&doc));
    }
}
