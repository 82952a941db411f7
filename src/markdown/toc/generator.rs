use super::parser::Heading;
use crate::config::defaults::default_toc_title;

/// A heading and the headings nested under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocNode {
    pub heading: Heading,
    pub children: Vec<TocNode>,
}

impl TocNode {
    pub fn new(heading: Heading) -> Self {
        Self {
            heading,
            children: Vec::new(),
        }
    }

    /// Append this heading and its children as list items
    fn write_html(&self, html: &mut String) {
        html.push_str(&format!(
            "<li class=\"toc-level-{}\"><a href=\"#{}\">{}</a>",
            self.heading.level,
            html_escape::encode_double_quoted_attribute(&self.heading.id),
            html_escape::encode_text(&self.heading.text)
        ));

        if !self.children.is_empty() {
            html.push_str("\n<ul class=\"toc-sublist\">\n");
            for child in &self.children {
                child.write_html(html);
            }
            html.push_str("</ul>\n");
        }

        html.push_str("</li>\n");
    }
}

/// Build the heading hierarchy from a flat, document-ordered sequence.
///
/// A heading nests under the nearest preceding heading with a lower level,
/// however many levels apart they are; no intermediate nodes are created.
/// A heading with no such predecessor starts a new top-level node.
pub fn build_toc_tree(headings: &[Heading]) -> Vec<TocNode> {
    let mut forest = Vec::new();
    let mut stack: Vec<TocNode> = Vec::new();

    for heading in headings {
        // Close every open node at the same level or deeper
        while let Some(top) = stack.pop() {
            if top.heading.level < heading.level {
                stack.push(top);
                break;
            }
            attach(&mut stack, &mut forest, top);
        }

        stack.push(TocNode::new(heading.clone()));
    }

    while let Some(node) = stack.pop() {
        attach(&mut stack, &mut forest, node);
    }

    forest
}

fn attach(stack: &mut [TocNode], forest: &mut Vec<TocNode>, node: TocNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => forest.push(node),
    }
}

/// Build table of contents markup with the default label
pub fn build_toc(headings: &[Heading]) -> String {
    build_toc_with_title(headings, &default_toc_title())
}

/// Build table of contents markup.
///
/// Returns an empty string when there are no headings. Each nesting step
/// opens exactly one sub-list, even when the level jumps by more than one.
pub fn build_toc_with_title(headings: &[Heading], title: &str) -> String {
    if headings.is_empty() {
        return String::new();
    }

    let mut html = String::from("<nav class=\"table-of-contents\">\n");
    html.push_str(&format!(
        "<p class=\"toc-title\">{}</p>\n<ul class=\"toc-list\">\n",
        html_escape::encode_text(title)
    ));

    for node in build_toc_tree(headings) {
        node.write_html(&mut html);
    }

    html.push_str("</ul>\n</nav>\n");
    html
}
