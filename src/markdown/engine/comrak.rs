use comrak::nodes::NodeValue;
use comrak::{format_html, parse_document, Arena, Options};
use log::warn;

use crate::config::ConvertOptions;
use crate::markdown::renderer::ImageRewriter;

/// Create the baseline comrak options for a conversion.
///
/// Plugins switch on further extensions afterwards.
pub fn create_comrak_options(settings: &ConvertOptions) -> Options<'static> {
    let mut options = Options::default();

    // Render options
    options.render.hardbreaks = settings.breaks;
    options.render.github_pre_lang = false;
    options.render.unsafe_ = true; // Raw HTML blocks carry diagram markup

    // Heading IDs are assigned after rendering
    options.extension.header_ids = None;

    // Parse options
    options.parse.smart = true;

    options
}

/// Render markdown to HTML using comrak, rewriting image sources on the way
pub fn render_markdown(
    content: &str,
    options: &Options<'static>,
    image_rewriter: Option<&dyn ImageRewriter>,
) -> String {
    let arena = Arena::new();
    let root = parse_document(&arena, content, options);

    if let Some(rewriter) = image_rewriter {
        for node in root.descendants() {
            if let NodeValue::Image(ref mut link) = node.data.borrow_mut().value {
                link.url = rewriter.rewrite(&link.url);
            }
        }
    }

    let mut html = Vec::new();
    if let Err(e) = format_html(root, options, &mut html) {
        warn!("Failed to format rendered markdown: {}", e);
    }

    String::from_utf8_lossy(&html).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::renderer::BaseUrlRewriter;

    #[test]
    fn test_comrak_rendering() {
        let options = create_comrak_options(&ConvertOptions::default());
        let markdown = "# Hello, World!\n\nThis is a **bold** statement.";
        let html = render_markdown(markdown, &options, None);

        assert!(html.contains("<h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_breaks_option() {
        let mut settings = ConvertOptions::default();
        let markdown = "first\nsecond";

        let soft = render_markdown(markdown, &create_comrak_options(&settings), None);
        assert!(!soft.contains("<br />"));

        settings.breaks = true;
        let hard = render_markdown(markdown, &create_comrak_options(&settings), None);
        assert!(hard.contains("<br />"));
    }

    #[test]
    fn test_code_block_language_class() {
        let options = create_comrak_options(&ConvertOptions::default());
        let html = render_markdown("```rust\nfn main() {}\n```", &options, None);

        assert!(html.contains("<pre><code class=\"language-rust\">"));
    }

    #[test]
    fn test_image_rewriting() {
        let options = create_comrak_options(&ConvertOptions::default());
        let rewriter = BaseUrlRewriter::new("https://cdn.example.com/docs");
        let markdown = "![logo](img/logo.png) ![remote](https://example.com/a.png)";
        let html = render_markdown(markdown, &options, Some(&rewriter));

        assert!(html.contains("src=\"https://cdn.example.com/docs/img/logo.png\""));
        assert!(html.contains("src=\"https://example.com/a.png\""));
    }
}
