use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::config::defaults;
use crate::front_matter::FrontMatter;

/// Placement of the generated table of contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TocPosition {
    /// Before the rendered content
    Top,
    /// After the rendered content
    Bottom,
    /// Not inserted; headings still receive anchor IDs
    None,
}

impl TocPosition {
    /// Get the name of the position as used in options files
    pub fn name(&self) -> &'static str {
        match self {
            TocPosition::Top => "top",
            TocPosition::Bottom => "bottom",
            TocPosition::None => "none",
        }
    }
}

impl fmt::Display for TocPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TocPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(TocPosition::Top),
            "bottom" => Ok(TocPosition::Bottom),
            "none" => Ok(TocPosition::None),
            other => Err(format!(
                "unknown TOC position '{}', expected top, bottom or none",
                other
            )),
        }
    }
}

/// Every option recognized by a conversion.
///
/// Options files use camelCase keys; fields missing from a file keep their
/// built-in default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Soft line breaks become `<br>`
    #[serde(default = "defaults::default_breaks")]
    pub breaks: bool,

    /// Expand emoji shortcodes such as `:smile:`
    #[serde(default = "defaults::default_emoji")]
    pub emoji: bool,

    /// Highlight fenced code blocks
    #[serde(default = "defaults::default_highlight")]
    pub highlight: bool,

    /// Name of the highlighting theme
    #[serde(default = "defaults::default_highlight_style")]
    pub highlight_style: String,

    /// Include the built-in stylesheet
    #[serde(default = "defaults::default_include_default_styles")]
    pub include_default_styles: bool,

    /// Mermaid script URL; empty disables mermaid
    #[serde(default = "defaults::default_mermaid_server")]
    pub mermaid_server: String,

    /// PlantUML server URL; empty disables PlantUML
    #[serde(default = "defaults::default_plantuml_server")]
    pub plantuml_server: String,

    /// Line opening a PlantUML block
    #[serde(default = "defaults::default_plantuml_open_marker")]
    pub plantuml_open_marker: String,

    /// Line closing a PlantUML block
    #[serde(default = "defaults::default_plantuml_close_marker")]
    pub plantuml_close_marker: String,

    /// Generate a table of contents and heading anchors
    #[serde(default = "defaults::default_generate_toc")]
    pub generate_toc: bool,

    /// Deepest heading level that is collected
    #[serde(default = "defaults::default_toc_depth")]
    pub toc_depth: u8,

    /// Where the table of contents goes
    #[serde(default = "defaults::default_toc_position")]
    pub toc_position: TocPosition,

    /// Label shown above the table of contents
    #[serde(default = "defaults::default_toc_title")]
    pub toc_title: String,

    /// Prefix for relative image sources; empty leaves them untouched
    #[serde(default)]
    pub image_base_url: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            breaks: defaults::default_breaks(),
            emoji: defaults::default_emoji(),
            highlight: defaults::default_highlight(),
            highlight_style: defaults::default_highlight_style(),
            include_default_styles: defaults::default_include_default_styles(),
            mermaid_server: defaults::default_mermaid_server(),
            plantuml_server: defaults::default_plantuml_server(),
            plantuml_open_marker: defaults::default_plantuml_open_marker(),
            plantuml_close_marker: defaults::default_plantuml_close_marker(),
            generate_toc: defaults::default_generate_toc(),
            toc_depth: defaults::default_toc_depth(),
            toc_position: defaults::default_toc_position(),
            toc_title: defaults::default_toc_title(),
            image_base_url: String::new(),
        }
    }
}

/// The effective TOC settings of one conversion.
///
/// Built from the caller's options, then overridden by the document's
/// front matter. Never changed after [`RenderConfig::resolve`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub generate_toc: bool,
    pub toc_depth: u8,
    pub toc_position: TocPosition,
}

impl RenderConfig {
    /// Take the TOC settings from the caller's options alone
    pub fn from_options(options: &ConvertOptions) -> Self {
        RenderConfig {
            generate_toc: options.generate_toc,
            toc_depth: options.toc_depth.min(6),
            toc_position: options.toc_position,
        }
    }

    /// Merge the caller's options with front matter overrides.
    ///
    /// Only `generateToc`, `tocDepth` and `tocPosition` are read from the
    /// front matter. Values of the wrong shape are ignored.
    pub fn resolve(options: &ConvertOptions, front_matter: &FrontMatter) -> Self {
        let mut config = Self::from_options(options);

        if let Some(value) = front_matter.get("generateToc") {
            match value {
                Value::Bool(flag) => config.generate_toc = *flag,
                other => warn!("Ignoring front matter generateToc: {:?}", other),
            }
        }

        if let Some(value) = front_matter.get("tocDepth") {
            match value.as_u64() {
                Some(depth) if (1..=6).contains(&depth) => config.toc_depth = depth as u8,
                _ => warn!("Ignoring front matter tocDepth: {:?}", value),
            }
        }

        if let Some(value) = front_matter.get("tocPosition") {
            match value.as_str().map(TocPosition::from_str) {
                Some(Ok(position)) => config.toc_position = position,
                _ => warn!("Ignoring front matter tocPosition: {:?}", value),
            }
        }

        config
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::from_options(&ConvertOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::front_matter::parse_front_matter;

    #[test]
    fn test_toc_position_from_str() {
        assert_eq!("top".parse::<TocPosition>(), Ok(TocPosition::Top));
        assert_eq!(" Bottom ".parse::<TocPosition>(), Ok(TocPosition::Bottom));
        assert_eq!("NONE".parse::<TocPosition>(), Ok(TocPosition::None));
        assert!("sidebar".parse::<TocPosition>().is_err());
    }

    #[test]
    fn test_partial_options_keep_defaults() {
        let options: ConvertOptions =
            serde_yaml::from_str("tocDepth: 2\ntocPosition: bottom\n").unwrap();

        assert_eq!(options.toc_depth, 2);
        assert_eq!(options.toc_position, TocPosition::Bottom);
        assert!(options.generate_toc);
        assert_eq!(options.highlight_style, "InspiredGitHub");
        assert_eq!(options.plantuml_open_marker, "@startuml");
    }

    #[test]
    fn test_front_matter_overrides_caller() {
        let mut options = ConvertOptions::default();
        options.generate_toc = true;
        options.toc_depth = 2;

        let (front_matter, _) = parse_front_matter(
            "---\ngenerateToc: false\ntocDepth: 5\ntocPosition: none\n---\nBody",
        );
        let config = RenderConfig::resolve(&options, &front_matter);

        assert!(!config.generate_toc);
        assert_eq!(config.toc_depth, 5);
        assert_eq!(config.toc_position, TocPosition::None);
    }

    #[test]
    fn test_invalid_front_matter_values_are_ignored() {
        let options = ConvertOptions::default();
        let (front_matter, _) = parse_front_matter(
            "---\ngenerateToc: maybe\ntocDepth: 9\ntocPosition: left\n---\nBody",
        );
        let config = RenderConfig::resolve(&options, &front_matter);

        assert_eq!(config, RenderConfig::from_options(&options));
    }

    #[test]
    fn test_unrelated_front_matter_keys_do_not_leak() {
        let options = ConvertOptions::default();
        let (front_matter, _) =
            parse_front_matter("---\nhighlight: false\nbreaks: true\n---\nBody");
        let config = RenderConfig::resolve(&options, &front_matter);

        assert_eq!(config, RenderConfig::default());
    }
}
