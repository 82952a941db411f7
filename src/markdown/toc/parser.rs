use lazy_static::lazy_static;
use regex::Regex;

use super::identifier::generate_id;

lazy_static! {
    // The regex crate has no backreferences, so each level gets its own pattern
    static ref HEADING_REGEXES: Vec<Regex> = (1..=6)
        .map(|level| {
            Regex::new(&format!(
                r#"(?is)<h{0}(\s(?:[^>"']|"[^"]*"|'[^']*')*)?>(.*?)</h{0}\s*>"#,
                level
            ))
            .unwrap()
        })
        .collect();

    static ref ID_ATTR_REGEX: Regex =
        Regex::new(r#"(?i)\s+id\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap();

    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();

    static ref COMMENT_REGEX: Regex = Regex::new(r"(?s)<!--.*?(?:-->|$)").unwrap();
}

/// A heading found in rendered content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// 1 for `<h1>` through 6 for `<h6>`
    pub level: u8,
    /// Plain text with tags stripped and entities decoded
    pub text: String,
    /// Anchor ID, either pre-existing or generated
    pub id: String,
    /// Position in document order, starting at 0
    pub source_order: usize,
}

impl Heading {
    pub fn new(level: u8, text: impl Into<String>, id: impl Into<String>, source_order: usize) -> Self {
        Self {
            level,
            text: text.into(),
            id: id.into(),
            source_order,
        }
    }
}

/// Rendered content with anchor IDs written in, plus its headings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedHeadings {
    /// The content with an `id` on every heading up to the requested depth
    pub content: String,
    /// Headings in document order
    pub headings: Vec<Heading>,
}

/// A heading element located in the source HTML
struct HeadingMatch {
    start: usize,
    end: usize,
    /// Offset just past the `>` of the opening tag
    open_tag_end: usize,
    level: u8,
    attrs: String,
    inner: String,
    id: Option<String>,
}

/// Extract headings from rendered HTML, assigning IDs where missing.
///
/// Headings of levels 1 through `min(max_depth, 6)` are collected. Headings
/// that already carry a non-empty `id` keep it, so running this twice leaves
/// the first run's IDs in place.
pub fn extract_headings(html: &str, max_depth: u8) -> ExtractedHeadings {
    let matches = find_headings(html, max_depth);
    let (content, headings) = assign_ids(html, matches);
    ExtractedHeadings { content, headings }
}

/// Only write missing IDs into the content, without collecting headings
pub fn ensure_heading_ids(html: &str, max_depth: u8) -> String {
    let matches = find_headings(html, max_depth);
    assign_ids(html, matches).0
}

/// Scan level by level, then restore document order.
///
/// Headings inside comments are skipped, as is any match that starts
/// within an earlier heading, such as one quoted in an attribute value.
fn find_headings(html: &str, max_depth: u8) -> Vec<HeadingMatch> {
    let depth = usize::from(max_depth.min(6));
    let scanned = mask_comments(html);
    let mut matches = Vec::new();

    for (index, regex) in HEADING_REGEXES.iter().take(depth).enumerate() {
        let level = (index + 1) as u8;

        for caps in regex.captures_iter(&scanned) {
            let whole = match caps.get(0) {
                Some(m) => m,
                None => continue,
            };
            let attrs = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            let open_tag_end = caps.get(1).map(|m| m.end()).unwrap_or(whole.start() + 3) + 1;

            matches.push(HeadingMatch {
                start: whole.start(),
                end: whole.end(),
                open_tag_end,
                level,
                attrs: attrs.to_string(),
                inner: caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default(),
                id: existing_id(attrs),
            });
        }
    }

    matches.sort_by_key(|m| m.start);

    let mut accepted: Vec<HeadingMatch> = Vec::with_capacity(matches.len());
    for m in matches {
        if accepted.last().map_or(true, |prev| m.start >= prev.end) {
            accepted.push(m);
        }
    }
    accepted
}

/// Blank out comments byte for byte so match offsets still index `html`
fn mask_comments(html: &str) -> String {
    COMMENT_REGEX
        .replace_all(html, |caps: &regex::Captures| " ".repeat(caps[0].len()))
        .into_owned()
}

fn existing_id(attrs: &str) -> Option<String> {
    ID_ATTR_REGEX
        .captures(attrs)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .filter(|id| !id.is_empty())
}

/// Rebuild the content with IDs on every matched heading
fn assign_ids(html: &str, matches: Vec<HeadingMatch>) -> (String, Vec<Heading>) {
    let mut content = String::with_capacity(html.len() + matches.len() * 24);
    let mut headings = Vec::with_capacity(matches.len());
    let mut cursor = 0;

    for (source_order, m) in matches.into_iter().enumerate() {
        let text = heading_text(&m.inner);

        let id = match m.id {
            Some(id) => id,
            None => {
                let id = generate_id(&text);
                let attrs = ID_ATTR_REGEX.replace_all(&m.attrs, "");
                content.push_str(&html[cursor..m.start]);
                content.push_str(&format!("<h{}{} id=\"{}\">", m.level, attrs, id));
                cursor = m.open_tag_end;
                id
            }
        };

        headings.push(Heading::new(m.level, text, id, source_order));
    }

    content.push_str(&html[cursor..]);
    (content, headings)
}

/// Strip tags, decode entities and trim
fn heading_text(inner: &str) -> String {
    let stripped = TAG_REGEX.replace_all(inner, "");
    html_escape::decode_html_entities(&stripped).trim().to_string()
}
