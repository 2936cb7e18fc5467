//! HTML serialisation of display nodes

use crate::helpers::html_escape;

use super::node::{DisplayNode, NodeContent, NodeKind};

/// Serialise a node sequence to an HTML fragment
pub fn to_html(nodes: &[DisplayNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &DisplayNode) {
    let tag = node.tag();
    let class_attr = node
        .class
        .as_deref()
        .map(|c| format!(r#" class="{}""#, html_escape(c)))
        .unwrap_or_default();

    match &node.kind {
        NodeKind::Separator => {
            out.push_str("<br>");
            return;
        }
        NodeKind::Image { src, alt } => {
            out.push_str(&format!(
                r#"<img src="{}" alt="{}"{}>"#,
                html_escape(src),
                html_escape(alt.as_deref().unwrap_or("")),
                class_attr
            ));
            return;
        }
        _ => {}
    }

    out.push_str(&format!("<{}{}>", tag, class_attr));
    match &node.content {
        NodeContent::Empty => {}
        NodeContent::Text(text) => out.push_str(&html_escape(text)),
        NodeContent::Markup(markup) => out.push_str(markup),
        NodeContent::Children(children) => {
            for child in children {
                write_node(out, child);
            }
        }
    }
    out.push_str(&format!("</{}>", tag));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_html() {
        let nodes = vec![DisplayNode::paragraph(vec![
            DisplayNode::text("use "),
            DisplayNode::inline_code("Vec<u8>"),
        ])];
        assert_eq!(
            to_html(&nodes),
            r#"<p><span>use </span><span class="code-span">Vec&lt;u8&gt;</span></p>"#
        );
    }

    #[test]
    fn test_void_elements() {
        let nodes = vec![
            DisplayNode::image("https://cdn/a.png?w=1&h=2"),
            DisplayNode::separator(),
        ];
        assert_eq!(
            to_html(&nodes),
            r#"<img src="https://cdn/a.png?w=1&amp;h=2" alt="" class="content-image"><br>"#
        );
    }

    #[test]
    fn test_code_block_html() {
        let nodes = vec![DisplayNode::code_block("rust", "if a < b {}")];
        assert_eq!(
            to_html(&nodes),
            r#"<pre class="line-numbers"><code class="language-rust">if a &lt; b {}</code></pre>"#
        );
    }

    #[test]
    fn test_markup_is_not_escaped() {
        let mut node = DisplayNode::code_block("rust", "fn");
        if let NodeContent::Children(children) = &mut node.content {
            children[0].content = NodeContent::Markup(r#"<span class="keyword">fn</span>"#.into());
        }
        assert!(to_html(&[node]).contains(r#"<span class="keyword">fn</span>"#));
    }
}
