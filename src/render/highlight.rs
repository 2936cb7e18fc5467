//! Syntax highlighting pass over rendered code blocks
//!
//! Runs after the renderer has produced its node sequence. Each code token's
//! literal text is replaced with class-annotated markup; colours come from the
//! [`StyleMap`](super::StyleMap) stylesheet, not from this pass.

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::helpers::html_escape;

use super::node::{DisplayNode, NodeContent, NodeKind};

/// Class-based code highlighter
pub struct CodeHighlighter {
    syntax_set: SyntaxSet,
    line_numbers: bool,
}

impl CodeHighlighter {
    /// Create a new highlighter with the bundled syntax definitions
    pub fn new(line_numbers: bool) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            line_numbers,
        }
    }

    /// Highlight every code token in `nodes`, returning how many were processed
    pub fn highlight_all(&self, nodes: &mut [DisplayNode]) -> usize {
        let mut count = 0;
        for node in nodes.iter_mut() {
            count += self.highlight_node(node);
        }
        count
    }

    fn highlight_node(&self, node: &mut DisplayNode) -> usize {
        if let NodeKind::CodeToken { language } = &node.kind {
            if let NodeContent::Text(code) = &node.content {
                let markup = self.highlight(code, language);
                node.content = NodeContent::Markup(markup);
                return 1;
            }
            return 0;
        }

        match &mut node.content {
            NodeContent::Children(children) => self.highlight_all(children),
            _ => 0,
        }
    }

    /// Highlight a code string
    pub fn highlight(&self, code: &str, language: &str) -> String {
        let mut html = match self.syntax_for(language) {
            Some(syntax) => match self.classed_html(code, syntax) {
                Ok(html) => html,
                Err(e) => {
                    tracing::warn!("Highlighting {} failed: {}", language, e);
                    html_escape(code)
                }
            },
            None => {
                tracing::debug!("No syntax for `{}`, leaving code plain", language);
                html_escape(code)
            }
        };

        if self.line_numbers {
            html.push_str(&line_number_rows(code));
        }
        html
    }

    fn classed_html(&self, code: &str, syntax: &SyntaxReference) -> Result<String, syntect::Error> {
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, ClassStyle::Spaced);
        for line in LinesWithEndings::from(code) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }
        Ok(generator.finalize())
    }

    fn syntax_for(&self, language: &str) -> Option<&SyntaxReference> {
        self.syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
            .filter(|s| s.name != "Plain Text")
    }
}

impl Default for CodeHighlighter {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Gutter markup: one empty row per source line
fn line_number_rows(code: &str) -> String {
    let lines = code.lines().count().max(1);
    format!(
        r#"<span aria-hidden="true" class="line-numbers-rows">{}</span>"#,
        "<span></span>".repeat(lines)
    )
}
