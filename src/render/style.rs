//! Code colour table
//!
//! Token colours are plain data: a map from highlight scope to CSS colour,
//! turned into a stylesheet for the presentation layer. Nothing in the renderer
//! depends on it.
//!
//! Keys are dotted scope paths (`keyword`, `entity.name.function`). The
//! highlighter tags each token with every word of its scope, so a key becomes
//! a compound class selector and a longer path outranks a shorter one.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Background shared by code blocks and inline code
const CODE_BACKGROUND: &str = "#263238";

/// Ordered token class -> colour table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    tokens: IndexMap<String, String>,
}

impl Default for StyleMap {
    fn default() -> Self {
        let tokens = [
            ("keyword", "#c792ea"),
            ("storage", "#c792ea"),
            ("string", "#c3e88d"),
            ("comment", "#546e7a"),
            ("punctuation", "#89ddff"),
            ("entity", "#ffcb6b"),
            ("keyword.operator", "#ffcb6b"),
            ("markup.underline.link", "#ffcb6b"),
            ("markup.inserted", "#c3e88d"),
            ("constant.numeric", "#f78c6c"),
            ("entity.name.function", "#82aaff"),
            ("support.function", "#82aaff"),
            ("variable.function", "#82aaff"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self { tokens }
    }
}

impl StyleMap {
    /// An empty table
    pub fn empty() -> Self {
        Self {
            tokens: IndexMap::new(),
        }
    }

    /// Default palette with `overrides` applied on top
    pub fn with_overrides(overrides: &IndexMap<String, String>) -> Self {
        let mut map = Self::default();
        for (token, colour) in overrides {
            map.set(token, colour);
        }
        map
    }

    pub fn set(&mut self, token: &str, colour: &str) {
        self.tokens.insert(token.to_string(), colour.to_string());
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.tokens.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Stylesheet for code blocks, inline code and highlighted tokens
    pub fn to_css(&self) -> String {
        let mut css = format!(
            r#".code-span {{
  background-color: {bg};
  color: #f8f8f2;
  padding: 0.2em 0.2em;
  border-radius: 4px;
  font-family: monospace;
}}

pre.line-numbers {{
  position: relative;
  background-color: {bg};
  color: #eeffff;
  padding: 1em 1em 1em 3.8em;
  border-radius: 4px;
  font-family: "Fira Code", "Consolas", "Monaco", "Courier New", Courier, monospace;
  font-size: 0.9em;
  white-space: pre-wrap;
  overflow-x: auto;
  line-height: 1.5;
}}

pre.line-numbers .line-numbers-rows {{
  position: absolute;
  top: 1em;
  left: 0;
  width: 3em;
  pointer-events: none;
  counter-reset: linenumber;
  border-right: 1px solid #546e7a;
}}

pre.line-numbers .line-numbers-rows > span {{
  display: block;
  counter-increment: linenumber;
}}

pre.line-numbers .line-numbers-rows > span::before {{
  content: counter(linenumber);
  display: block;
  padding-right: 0.8em;
  text-align: right;
  color: #546e7a;
}}
"#,
            bg = CODE_BACKGROUND
        );

        for (token, colour) in &self.tokens {
            css.push_str(&format!(
                "\npre.line-numbers {} {{\n  color: {};\n}}\n",
                selector(token),
                colour
            ));
        }

        css.push_str(
            "\n@media (max-width: 768px) {\n  pre.line-numbers {\n    font-size: 0.8em;\n    padding: 0.5em 0.5em 0.5em 3.8em;\n  }\n}\n",
        );
        css
    }
}

/// `entity.name.function` -> `.entity.name.function`
fn selector(token: &str) -> String {
    token
        .split(|c: char| c == '.' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| format!(".{}", word))
        .collect()
}
