/// The pieces placed into the HTML envelope
pub struct DocumentParts<'a> {
    /// Plain title text; escaped when written
    pub title: &'a str,
    /// CSS for the single `<style>` block
    pub styles: &'a str,
    /// Raw markup appended to `<head>`, such as scripts
    pub head: &'a [String],
    /// Rendered body content
    pub content: &'a str,
}

/// Wrap rendered content in a standalone HTML document
pub fn render_document(parts: &DocumentParts<'_>) -> String {
    let mut html = String::with_capacity(parts.content.len() + parts.styles.len() + 512);

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", html_escape::encode_text(parts.title)));

    if !parts.styles.is_empty() {
        html.push_str("<style>\n");
        html.push_str(parts.styles);
        html.push_str("\n</style>\n");
    }

    for markup in parts.head {
        html.push_str(markup);
        html.push('\n');
    }

    html.push_str("</head>\n<body>\n<article class=\"markdown-body\">\n");
    html.push_str(parts.content);
    if !parts.content.ends_with('\n') {
        html.push('\n');
    }
    html.push_str("</article>\n</body>\n</html>\n");

    html
}
