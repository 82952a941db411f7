//! Built-in renderer plugins

use comrak::Options;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use super::{Plugin, CHECKBOX, EMOJI, MERMAID, PLANTUML, RENDERER};
use crate::config::ConvertOptions;

lazy_static! {
    static ref MERMAID_BLOCK_REGEX: Regex =
        Regex::new(r#"(?s)<pre><code class="language-mermaid">(.*?)</code></pre>"#).unwrap();
}

/// The comrak Markdown renderer with GitHub Flavored Markdown extensions
pub struct ComrakPlugin;

impl Plugin for ComrakPlugin {
    fn name(&self) -> &str {
        RENDERER
    }

    fn configure(&self, options: &mut Options<'_>, _settings: &ConvertOptions) {
        options.extension.strikethrough = true;
        options.extension.tagfilter = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.footnotes = true;
        options.extension.description_lists = true;
    }
}

/// Emoji shortcodes such as `:tada:`
pub struct EmojiPlugin;

impl Plugin for EmojiPlugin {
    fn name(&self) -> &str {
        EMOJI
    }

    fn configure(&self, options: &mut Options<'_>, settings: &ConvertOptions) {
        options.extension.shortcodes = settings.emoji;
    }
}

/// Task list checkboxes, `- [x] done`
pub struct CheckboxPlugin;

impl Plugin for CheckboxPlugin {
    fn name(&self) -> &str {
        CHECKBOX
    }

    fn configure(&self, options: &mut Options<'_>, _settings: &ConvertOptions) {
        options.extension.tasklist = true;
    }
}

/// Client-side mermaid diagrams from ```` ```mermaid ```` fences
pub struct MermaidPlugin;

impl Plugin for MermaidPlugin {
    fn name(&self) -> &str {
        MERMAID
    }

    fn post_render(&self, html: String, settings: &ConvertOptions) -> String {
        if settings.mermaid_server.is_empty() {
            return html;
        }

        // The source stays entity-escaped; the browser decodes it for mermaid
        MERMAID_BLOCK_REGEX
            .replace_all(&html, "<div class=\"mermaid\">$1</div>")
            .into_owned()
    }

    fn head_markup(&self, settings: &ConvertOptions) -> Option<String> {
        if settings.mermaid_server.is_empty() {
            return None;
        }

        Some(format!(
            "<script src=\"{}\"></script>\n<script>mermaid.initialize({{ startOnLoad: true }});</script>",
            html_escape::encode_double_quoted_attribute(&settings.mermaid_server)
        ))
    }
}

/// PlantUML diagrams rendered by a PlantUML server
pub struct PlantumlPlugin;

impl Plugin for PlantumlPlugin {
    fn name(&self) -> &str {
        PLANTUML
    }

    fn pre_render(&self, source: String, settings: &ConvertOptions) -> String {
        if settings.plantuml_server.is_empty() {
            return source;
        }

        replace_plantuml_blocks(
            &source,
            settings.plantuml_open_marker.trim(),
            settings.plantuml_close_marker.trim(),
            &settings.plantuml_server,
        )
    }
}

/// Replace marker-delimited diagram blocks with server image references.
///
/// Markers must sit on their own lines and are ignored inside fenced code.
/// An unterminated block is left as written.
fn replace_plantuml_blocks(source: &str, open: &str, close: &str, server: &str) -> String {
    let mut output = String::with_capacity(source.len());
    let mut fence: Option<&str> = None;
    let mut block: Option<(&str, Vec<&str>)> = None;

    for line in source.split_inclusive('\n') {
        let trimmed = line.trim();

        if let Some((_, lines)) = block.as_mut() {
            if trimmed == close {
                output.push_str(&plantuml_image(lines, server));
                block = None;
            } else {
                lines.push(line);
            }
            continue;
        }

        let current = fence;
        match current {
            Some(marker) if trimmed.starts_with(marker) => fence = None,
            Some(_) => {}
            None if trimmed.starts_with("```") => fence = Some("```"),
            None if trimmed.starts_with("~~~") => fence = Some("~~~"),
            None if trimmed == open => {
                block = Some((line, Vec::new()));
                continue;
            }
            None => {}
        }

        output.push_str(line);
    }

    if let Some((open_line, lines)) = block {
        warn!("Unterminated PlantUML block, leaving it as text");
        output.push_str(open_line);
        for line in lines {
            output.push_str(line);
        }
    }

    output
}

fn plantuml_image(lines: &[&str], server: &str) -> String {
    let mut diagram = String::from("@startuml\n");
    for line in lines {
        diagram.push_str(line.trim_end_matches(['\r', '\n']));
        diagram.push('\n');
    }
    diagram.push_str("@enduml");

    debug!("Encoding PlantUML diagram of {} lines", lines.len());
    let src = format!("{}/svg/~h{}", server.trim_end_matches('/'), hex::encode(diagram.as_bytes()));

    format!(
        "\n<p class=\"plantuml\"><img src=\"{}\" alt=\"PlantUML diagram\"></p>\n\n",
        html_escape::encode_double_quoted_attribute(&src)
    )
}
