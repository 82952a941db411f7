use log::{debug, info};

use crate::config::defaults::default_document_title;
use crate::config::{ConvertOptions, RenderConfig, TocPosition};
use crate::document::styles::compose_styles;
use crate::document::template::{render_document, DocumentParts};
use crate::front_matter::{extract_title_from_html, parse_front_matter};
use crate::markdown::toc::{build_toc_with_title, ensure_heading_ids, extract_headings};
use crate::markdown::{MarkdownEngine, MarkdownRenderer};
use crate::plugins::PluginRegistry;
use crate::utils::error::ConvertError;

/// Turns Markdown documents into standalone HTML pages.
///
/// Holds the caller's options and the plugin registry; each call to
/// [`Assembler::assemble`] is independent of every other.
#[derive(Clone)]
pub struct Assembler {
    registry: PluginRegistry,
    options: ConvertOptions,
}

impl Assembler {
    /// Create an assembler with an explicit plugin registry
    pub fn new(registry: PluginRegistry, options: ConvertOptions) -> Self {
        Self { registry, options }
    }

    /// Create an assembler with the standard plugin registry
    pub fn with_options(options: ConvertOptions) -> Self {
        Self::new(PluginRegistry::standard(), options)
    }

    /// Get the caller's options
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a Markdown document, optionally with front matter, to HTML.
    ///
    /// `css` is appended after the built-in and highlight styles. `title`
    /// wins over a front matter title, which wins over the first `<h1>`.
    pub fn assemble(
        &self,
        markdown: &str,
        css: Option<&str>,
        title: Option<&str>,
    ) -> Result<String, ConvertError> {
        let renderer = MarkdownRenderer::new(&self.options, &self.registry)?;
        Ok(self.assemble_with(&renderer, markdown, css, title))
    }

    /// Convert a document with a caller-supplied rendering engine
    pub fn assemble_with(
        &self,
        engine: &dyn MarkdownEngine,
        markdown: &str,
        css: Option<&str>,
        title: Option<&str>,
    ) -> String {
        let (front_matter, body) = parse_front_matter(markdown);
        let config = RenderConfig::resolve(&self.options, &front_matter);
        debug!("Effective render config: {:?}", config);

        let rendered = engine.render(body);
        let content = self.apply_toc(rendered, &config);

        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .or_else(|| front_matter.title().map(str::to_string))
            .or_else(|| extract_title_from_html(&content))
            .unwrap_or_else(default_document_title);

        let highlight_css = if self.options.highlight {
            engine.stylesheet()
        } else {
            None
        };
        let styles = compose_styles(
            self.options.include_default_styles,
            highlight_css.as_deref(),
            css,
        );
        let head = engine.head_markup();

        info!("Assembled document '{}'", title);
        render_document(&DocumentParts {
            title: &title,
            styles: &styles,
            head: &head,
            content: &content,
        })
    }

    /// Add heading anchors and place the table of contents
    fn apply_toc(&self, rendered: String, config: &RenderConfig) -> String {
        if !config.generate_toc {
            return rendered;
        }

        if config.toc_position == TocPosition::None {
            return ensure_heading_ids(&rendered, config.toc_depth);
        }

        let extracted = extract_headings(&rendered, config.toc_depth);
        debug!("Collected {} headings for the table of contents", extracted.headings.len());
        let toc = build_toc_with_title(&extracted.headings, &self.options.toc_title);

        match config.toc_position {
            TocPosition::Top => toc + &extracted.content,
            _ => extracted.content + &toc,
        }
    }
}

/// Convert a Markdown document with the standard plugins
pub fn convert(
    markdown: &str,
    css: Option<&str>,
    title: Option<&str>,
    options: &ConvertOptions,
) -> Result<String, ConvertError> {
    Assembler::with_options(options.clone()).assemble(markdown, css, title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::RENDERER;

    const TOC_MARKER: &str = "<nav class=\"table-of-contents\">";

    fn options(generate_toc: bool, toc_position: TocPosition) -> ConvertOptions {
        let mut options = ConvertOptions::default();
        options.generate_toc = generate_toc;
        options.toc_position = toc_position;
        options
    }

    fn body_of(html: &str) -> &str {
        let start = html.find("<body>").unwrap();
        &html[start..]
    }

    #[test]
    fn test_toc_on_top() {
        let html = convert("# Title\n\n## Part\n\nBody", None, None, &options(true, TocPosition::Top)).unwrap();
        let body = body_of(&html);

        let toc_at = body.find(TOC_MARKER).unwrap();
        let heading_at = body.find("<h1 id=\"title\">Title</h1>").unwrap();
        assert!(toc_at < heading_at);
        assert!(body.contains("<a href=\"#part\">Part</a>"));
    }

    #[test]
    fn test_toc_at_bottom() {
        let html = convert("# Title\n\nBody", None, None, &options(true, TocPosition::Bottom)).unwrap();
        let body = body_of(&html);

        let toc_at = body.find(TOC_MARKER).unwrap();
        let heading_at = body.find("<h1 id=\"title\">Title</h1>").unwrap();
        assert!(heading_at < toc_at);
    }

    #[test]
    fn test_toc_none_keeps_anchor_ids() {
        let html = convert("# Title\n\nBody", None, None, &options(true, TocPosition::None)).unwrap();

        assert!(!html.contains(TOC_MARKER));
        assert!(html.contains("<h1 id=\"title\">Title</h1>"));
    }

    #[test]
    fn test_generate_toc_false_skips_ids_for_every_position() {
        for position in [TocPosition::Top, TocPosition::Bottom, TocPosition::None] {
            let html = convert("# Title\n\nBody", None, None, &options(false, position)).unwrap();

            assert!(!html.contains(TOC_MARKER), "TOC emitted for {}", position);
            assert!(html.contains("<h1>Title</h1>"), "IDs assigned for {}", position);
        }
    }

    #[test]
    fn test_front_matter_disables_toc() {
        let markdown = "---\ngenerateToc: false\n---\n# Title\nBody";
        let html = convert(markdown, None, None, &options(true, TocPosition::Top)).unwrap();

        assert!(!html.contains(TOC_MARKER));
        assert!(html.contains("<h1>Title</h1>"));
        assert!(!html.contains("generateToc"));
    }

    #[test]
    fn test_front_matter_position_and_depth() {
        let markdown = "---\ntocPosition: bottom\ntocDepth: 1\n---\n# Top\n\n## Hidden\n";
        let html = convert(markdown, None, None, &ConvertOptions::default()).unwrap();
        let body = body_of(&html);

        assert!(body.find("<h1 id=\"top\">").unwrap() < body.find(TOC_MARKER).unwrap());
        assert!(!body.contains("href=\"#hidden\""));
        assert!(body.contains("<h2>Hidden</h2>"));
    }

    #[test]
    fn test_toc_depth_from_options() {
        let mut opts = options(true, TocPosition::Top);
        opts.toc_depth = 2;
        let html = convert("# A\n\n## B\n\n### C\n", None, None, &opts).unwrap();

        assert!(html.contains("href=\"#b\""));
        assert!(!html.contains("href=\"#c\""));
        assert!(html.contains("<h3>C</h3>"));
    }

    #[test]
    fn test_no_headings_no_toc() {
        let html = convert("Just text.", None, None, &ConvertOptions::default()).unwrap();
        assert!(!html.contains(TOC_MARKER));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = convert("Body", None, Some("<script>"), &ConvertOptions::default()).unwrap();
        assert!(html.contains("<title>&lt;script&gt;</title>"));
    }

    #[test]
    fn test_title_precedence() {
        let markdown = "---\ntitle: From Front Matter\n---\n# From Heading\n";
        let defaults = ConvertOptions::default();

        let html = convert(markdown, None, Some("From Caller"), &defaults).unwrap();
        assert!(html.contains("<title>From Caller</title>"));

        let html = convert(markdown, None, None, &defaults).unwrap();
        assert!(html.contains("<title>From Front Matter</title>"));

        let html = convert("# From Heading\n", None, None, &defaults).unwrap();
        assert!(html.contains("<title>From Heading</title>"));

        let html = convert("text", None, Some("  "), &defaults).unwrap();
        assert!(html.contains("<title>Untitled</title>"));
    }

    #[test]
    fn test_styles_and_scripts() {
        let html = convert("# T", Some("h1 { color: red; }"), None, &ConvertOptions::default()).unwrap();
        assert!(html.contains(".markdown-body"));
        assert!(html.contains("h1 { color: red; }"));
        assert!(html.contains("mermaid.min.js"));

        let mut bare = ConvertOptions::default();
        bare.include_default_styles = false;
        bare.highlight = false;
        bare.mermaid_server.clear();
        let html = convert("# T", None, None, &bare).unwrap();
        assert!(!html.contains("<style>"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_malformed_front_matter_is_body() {
        let markdown = "---\ntitle: Broken\n# Heading\n";
        let html = convert(markdown, None, None, &ConvertOptions::default()).unwrap();

        assert!(html.contains("title: Broken"));
    }

    #[test]
    fn test_renderer_unavailable() {
        let mut registry = PluginRegistry::standard();
        registry.unregister(RENDERER).unwrap();
        let assembler = Assembler::new(registry, ConvertOptions::default());

        let result = assembler.assemble("# Title", None, None);
        assert!(matches!(result, Err(ConvertError::RendererUnavailable)));
    }

    #[test]
    fn test_repeated_conversions_are_independent() {
        let assembler = Assembler::with_options(ConvertOptions::default());
        let first = assembler.assemble("---\ngenerateToc: false\n---\n# A\n", None, None).unwrap();
        let second = assembler.assemble("# A\n", None, None).unwrap();

        assert!(!first.contains(TOC_MARKER));
        assert!(second.contains(TOC_MARKER));
        assert!(assembler.options().generate_toc);
    }

    #[test]
    fn test_raw_html_headings() {
        let markdown = "# Real\n\n<!-- <h2>Draft</h2> -->\n\n<h2 title=\"<h3>x</h3>\">Quoted</h2>\n";
        let html = convert(markdown, None, None, &ConvertOptions::default()).unwrap();

        assert!(!html.contains("href=\"#draft\""));
        assert!(!html.contains("href=\"#x\""));
        assert!(html.contains("<a href=\"#quoted\">Quoted</a>"));
        assert!(html.contains("<!-- <h2>Draft</h2> -->"));
    }

    #[test]
    fn test_cjk_headings() {
        let html = convert("# 概要\n\n## 詳細 Notes\n", None, None, &ConvertOptions::default()).unwrap();

        assert!(html.contains("<h1 id=\"概要\">概要</h1>"));
        assert!(html.contains("<a href=\"#詳細-notes\">詳細 Notes</a>"));
    }
}
