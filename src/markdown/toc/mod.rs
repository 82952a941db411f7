//! Heading anchors and table of contents generation

mod identifier;
mod parser;
mod generator;

pub use identifier::generate_id;
pub use parser::{extract_headings, ensure_heading_ids, ExtractedHeadings, Heading};
pub use generator::{build_toc, build_toc_tree, build_toc_with_title, TocNode};
