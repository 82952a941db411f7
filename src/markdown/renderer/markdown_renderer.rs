use std::sync::Arc;

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::config::ConvertOptions;
use crate::markdown::engine::{create_comrak_options, render_markdown, MarkdownEngine};
use crate::markdown::renderer::images::{BaseUrlRewriter, ImageRewriter};
use crate::markdown::renderer::syntax::{Highlighter, SyntaxHighlighter};
use crate::plugins::{Plugin, PluginRegistry};
use crate::utils::error::ConvertError;

lazy_static! {
    static ref CODE_BLOCK_REGEX: Regex =
        Regex::new(r#"(?s)<pre><code class="language-([^"]+)">(.*?)</code></pre>"#).unwrap();
}

/// Markdown renderer driven by the registered plugins
pub struct MarkdownRenderer {
    settings: ConvertOptions,
    options: comrak::Options<'static>,
    plugins: Vec<Arc<dyn Plugin>>,
    highlighter: Option<Box<dyn Highlighter>>,
    image_rewriter: Option<Box<dyn ImageRewriter>>,
}

impl MarkdownRenderer {
    /// Create a renderer from conversion options and a plugin registry.
    ///
    /// Fails with [`ConvertError::RendererUnavailable`] when the registry has
    /// no Markdown renderer.
    pub fn new(settings: &ConvertOptions, registry: &PluginRegistry) -> Result<Self, ConvertError> {
        if !registry.has_renderer() {
            return Err(ConvertError::RendererUnavailable);
        }

        let plugins = registry.plugins();
        let mut options = create_comrak_options(settings);
        for plugin in &plugins {
            plugin.configure(&mut options, settings);
        }

        let highlighter: Option<Box<dyn Highlighter>> = if settings.highlight {
            Some(Box::new(SyntaxHighlighter::with_theme(&settings.highlight_style)))
        } else {
            None
        };

        let image_rewriter: Option<Box<dyn ImageRewriter>> = if settings.image_base_url.is_empty() {
            None
        } else {
            Some(Box::new(BaseUrlRewriter::new(&settings.image_base_url)))
        };

        debug!(
            "Markdown renderer ready with plugins: {}",
            registry.names().join(", ")
        );

        Ok(MarkdownRenderer {
            settings: settings.clone(),
            options,
            plugins,
            highlighter,
            image_rewriter,
        })
    }

    /// Highlight every fenced code block that names a language.
    ///
    /// A block the highlighter rejects keeps its escaped plain rendering.
    fn highlight_code_blocks(&self, html: &str) -> String {
        let highlighter = match &self.highlighter {
            Some(highlighter) => highlighter,
            None => return html.to_string(),
        };

        CODE_BLOCK_REGEX
            .replace_all(html, |caps: &regex::Captures| {
                let lang = html_escape::decode_html_entities(&caps[1]).to_string();
                let code = html_escape::decode_html_entities(&caps[2]).to_string();

                match highlighter.highlight(&code, &lang) {
                    Ok(highlighted) => highlighted,
                    Err(e) => {
                        warn!("Syntax highlighting failed: {}", e);
                        caps[0].to_string()
                    }
                }
            })
            .into_owned()
    }
}

impl MarkdownEngine for MarkdownRenderer {
    /// Render Markdown content to HTML with all enabled features
    fn render(&self, body: &str) -> String {
        let source = self
            .plugins
            .iter()
            .fold(body.to_string(), |source, plugin| plugin.pre_render(source, &self.settings));

        let html = render_markdown(&source, &self.options, self.image_rewriter.as_deref());

        let html = self
            .plugins
            .iter()
            .fold(html, |html, plugin| plugin.post_render(html, &self.settings));

        self.highlight_code_blocks(&html)
    }

    fn set_highlighter(&mut self, highlighter: Box<dyn Highlighter>) {
        self.highlighter = Some(highlighter);
    }

    fn set_image_rewriter(&mut self, rewriter: Box<dyn ImageRewriter>) {
        self.image_rewriter = Some(rewriter);
    }

    fn stylesheet(&self) -> Option<String> {
        self.highlighter.as_ref().and_then(|h| h.stylesheet())
    }

    fn head_markup(&self) -> Vec<String> {
        self.plugins
            .iter()
            .filter_map(|plugin| plugin.head_markup(&self.settings))
            .collect()
    }
}
