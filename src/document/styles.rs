/// Stylesheet included when `includeDefaultStyles` is on
pub const DEFAULT_STYLES: &str = r#"
html { -webkit-text-size-adjust: 100%; }
body {
  margin: 0;
  color: #24292f;
  background: #ffffff;
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
  font-size: 16px;
  line-height: 1.6;
}
.markdown-body { box-sizing: border-box; max-width: 980px; margin: 0 auto; padding: 32px; }
.markdown-body h1, .markdown-body h2 { border-bottom: 1px solid #d0d7de; padding-bottom: .3em; }
.markdown-body h1, .markdown-body h2, .markdown-body h3,
.markdown-body h4, .markdown-body h5, .markdown-body h6 { margin-top: 24px; margin-bottom: 16px; line-height: 1.25; }
.markdown-body a { color: #0969da; text-decoration: none; }
.markdown-body a:hover { text-decoration: underline; }
.markdown-body img { max-width: 100%; }
.markdown-body blockquote { margin: 0; padding: 0 1em; color: #57606a; border-left: .25em solid #d0d7de; }
.markdown-body table { border-collapse: collapse; }
.markdown-body th, .markdown-body td { padding: 6px 13px; border: 1px solid #d0d7de; }
.markdown-body code { padding: .2em .4em; font-size: 85%; background: rgba(175, 184, 193, .2); border-radius: 6px; }
.markdown-body pre { padding: 16px; overflow: auto; font-size: 85%; background: #f6f8fa; border-radius: 6px; }
.markdown-body pre code { padding: 0; background: transparent; }
.markdown-body .highlight pre { margin-bottom: 0; }
.markdown-body .mermaid, .markdown-body .plantuml { text-align: center; }
.table-of-contents { margin: 16px 0 24px; padding: 12px 16px; background: #f6f8fa; border-radius: 6px; }
.table-of-contents .toc-title { margin: 0 0 8px; font-weight: 600; }
.table-of-contents ul { margin: 0; padding-left: 1.2em; list-style: none; }
.table-of-contents .toc-list { padding-left: 0; }
"#;

/// Join the style sheets of a document in cascade order: default styles,
/// highlight theme, then the caller's own CSS
pub fn compose_styles(include_default: bool, highlight: Option<&str>, custom: Option<&str>) -> String {
    let mut sheets: Vec<&str> = Vec::new();

    if include_default {
        sheets.push(DEFAULT_STYLES.trim());
    }
    if let Some(css) = highlight {
        sheets.push(css.trim());
    }
    if let Some(css) = custom {
        sheets.push(css.trim());
    }

    sheets
        .into_iter()
        .filter(|css| !css.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_order() {
        let css = compose_styles(true, Some(".code { color: red; }"), Some("body { color: blue; }"));

        let default_at = css.find(".markdown-body").unwrap();
        let highlight_at = css.find(".code { color: red; }").unwrap();
        let custom_at = css.find("body { color: blue; }").unwrap();
        assert!(default_at < highlight_at && highlight_at < custom_at);
    }

    #[test]
    fn test_compose_nothing() {
        assert_eq!(compose_styles(false, None, Some("   ")), "");
        assert_eq!(compose_styles(false, None, Some("p {}")), "p {}");
    }
}
