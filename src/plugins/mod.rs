//! Plugin system for mdpage
//! Renderer capabilities are registered by name and looked up at conversion time

pub mod builtin;
pub mod registry;

use comrak::Options;

use crate::config::ConvertOptions;

pub use builtin::{CheckboxPlugin, ComrakPlugin, EmojiPlugin, MermaidPlugin, PlantumlPlugin};
pub use registry::PluginRegistry;

/// Name under which the Markdown renderer itself is registered
pub const RENDERER: &str = "comrak";
pub const EMOJI: &str = "emoji";
pub const CHECKBOX: &str = "checkbox";
pub const MERMAID: &str = "mermaid";
pub const PLANTUML: &str = "plantuml";

/// Plugin trait that all renderer plugins implement.
///
/// Every hook has a pass-through default, so a plugin only overrides the
/// stages it takes part in.
pub trait Plugin: Send + Sync {
    /// Name the plugin is registered under
    fn name(&self) -> &str;

    /// Adjust parser and renderer options before parsing
    fn configure(&self, _options: &mut Options<'_>, _settings: &ConvertOptions) {}

    /// Transform the Markdown source before parsing
    fn pre_render(&self, source: String, _settings: &ConvertOptions) -> String {
        source
    }

    /// Transform the rendered HTML before code highlighting
    fn post_render(&self, html: String, _settings: &ConvertOptions) -> String {
        html
    }

    /// Markup the plugin needs in the document head
    fn head_markup(&self, _settings: &ConvertOptions) -> Option<String> {
        None
    }
}
