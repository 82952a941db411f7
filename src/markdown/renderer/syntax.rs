use lazy_static::lazy_static;
use log::warn;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{css_for_theme_with_class_style, ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::utils::error::ConvertError;

lazy_static! {
    static ref SYNTAX_SET: SyntaxSet = SyntaxSet::load_defaults_newlines();
    static ref THEME_SET: ThemeSet = ThemeSet::load_defaults();
}

const DEFAULT_THEME: &str = "InspiredGitHub";

/// Hook used to highlight fenced code blocks
pub trait Highlighter: Send + Sync {
    /// Highlight `code` written in `lang`, returning the full block markup
    fn highlight(&self, code: &str, lang: &str) -> Result<String, ConvertError>;

    /// CSS for the classes the highlighter emits
    fn stylesheet(&self) -> Option<String> {
        None
    }
}

/// Syntect-backed highlighter emitting classed spans
pub struct SyntaxHighlighter {
    current_theme: String,
}

impl SyntaxHighlighter {
    /// Create a new syntax highlighter with the default theme
    pub fn new() -> Self {
        SyntaxHighlighter {
            current_theme: DEFAULT_THEME.to_string(),
        }
    }

    /// Create a highlighter for a named theme, falling back to the default
    pub fn with_theme(theme_name: &str) -> Self {
        let mut highlighter = Self::new();
        if !highlighter.set_theme(theme_name) {
            warn!("Unknown highlight style '{}', using {}", theme_name, DEFAULT_THEME);
        }
        highlighter
    }

    /// Set the syntax highlighting theme
    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        if THEME_SET.themes.contains_key(theme_name) {
            self.current_theme = theme_name.to_string();
            true
        } else {
            false
        }
    }

    /// Get the name of the active theme
    pub fn theme_name(&self) -> &str {
        &self.current_theme
    }

    /// Get the list of available themes
    pub fn available_themes() -> Vec<String> {
        THEME_SET.themes.keys().map(|k| k.to_string()).collect()
    }

    fn theme(&self) -> Option<&'static Theme> {
        THEME_SET
            .themes
            .get(&self.current_theme)
            .or_else(|| THEME_SET.themes.get(DEFAULT_THEME))
    }
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for SyntaxHighlighter {
    fn highlight(&self, code: &str, lang: &str) -> Result<String, ConvertError> {
        let syntax = SYNTAX_SET
            .find_syntax_by_token(lang)
            .ok_or_else(|| ConvertError::Highlight(format!("no syntax for language '{}'", lang)))?;

        let mut html_generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, ClassStyle::Spaced);

        for line in LinesWithEndings::from(code) {
            html_generator
                .parse_html_for_line_which_includes_newline(line)
                .map_err(|e| ConvertError::Highlight(e.to_string()))?;
        }

        Ok(format!(
            "<div class=\"highlight\"><pre class=\"highlight {}\"><code>{}</code></pre></div>",
            html_escape::encode_double_quoted_attribute(lang),
            html_generator.finalize()
        ))
    }

    fn stylesheet(&self) -> Option<String> {
        let theme = self.theme()?;
        match css_for_theme_with_class_style(theme, ClassStyle::Spaced) {
            Ok(css) => Some(css),
            Err(e) => {
                warn!("Failed to build CSS for theme {}: {}", self.current_theme, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_highlighting() {
        let highlighter = SyntaxHighlighter::new();
        let code = "fn main() {\n    println!(\"Hello, World!\");\n}\n";
        let html = highlighter.highlight(code, "rust").unwrap();

        assert!(html.contains("<div class=\"highlight\">"));
        assert!(html.contains("<pre class=\"highlight rust\">"));
        assert!(html.contains("<span class=\""));
    }

    #[test]
    fn test_unknown_language_is_an_error() {
        let highlighter = SyntaxHighlighter::new();
        assert!(highlighter.highlight("x", "no-such-language").is_err());
    }

    #[test]
    fn test_theme_selection() {
        let mut highlighter = SyntaxHighlighter::with_theme("base16-ocean.dark");
        assert_eq!(highlighter.theme_name(), "base16-ocean.dark");

        assert!(!highlighter.set_theme("missing-theme"));
        assert_eq!(highlighter.theme_name(), "base16-ocean.dark");

        let fallback = SyntaxHighlighter::with_theme("missing-theme");
        assert_eq!(fallback.theme_name(), DEFAULT_THEME);
        assert!(SyntaxHighlighter::available_themes().contains(&DEFAULT_THEME.to_string()));
    }

    #[test]
    fn test_stylesheet() {
        let css = SyntaxHighlighter::new().stylesheet().unwrap();
        assert!(css.contains('{'));
    }
}
