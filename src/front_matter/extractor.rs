use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref H1_REGEX: Regex = Regex::new(r"(?is)<h1(?:\s[^>]*)?>(.*?)</h1\s*>").unwrap();
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Extract the plain text of the first `<h1>` in rendered HTML
pub fn extract_title_from_html(html: &str) -> Option<String> {
    let captures = H1_REGEX.captures(html)?;
    let text = TAG_REGEX.replace_all(&captures[1], "");
    let text = html_escape::decode_html_entities(&text).trim().to_string();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
