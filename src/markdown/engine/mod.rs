mod comrak;

pub use self::comrak::{create_comrak_options, render_markdown};

use crate::markdown::renderer::{Highlighter, ImageRewriter};

/// Contract of the Markdown rendering engine used by the document assembler
pub trait MarkdownEngine {
    /// Render a Markdown body (front matter already removed) to HTML
    fn render(&self, body: &str) -> String;

    /// Replace the hook used to highlight fenced code blocks
    fn set_highlighter(&mut self, highlighter: Box<dyn Highlighter>);

    /// Replace the rule applied to every image source
    fn set_image_rewriter(&mut self, rewriter: Box<dyn ImageRewriter>);

    /// CSS the rendered output depends on, such as highlight themes
    fn stylesheet(&self) -> Option<String> {
        None
    }

    /// Extra markup for the document head, such as diagram scripts
    fn head_markup(&self) -> Vec<String> {
        Vec::new()
    }
}
