//! Markdown rendering

use pulldown_cmark::{html, Options, Parser};

use crate::config::MarkdownConfig;

/// Markdown renderer wrapping pulldown-cmark with a configured extension set
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a renderer from the configured Markdown options
    pub fn new(config: &MarkdownConfig) -> Self {
        let mut options = Options::empty();
        if config.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if config.footnotes {
            options.insert(Options::ENABLE_FOOTNOTES);
        }
        if config.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if config.tasklists {
            options.insert(Options::ENABLE_TASKLISTS);
        }
        if config.smart_punctuation {
            options.insert(Options::ENABLE_SMART_PUNCTUATION);
        }

        Self { options }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(&MarkdownConfig::default())
    }
}
