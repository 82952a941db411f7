pub mod renderer;
pub mod toc;
pub mod engine;

pub use engine::MarkdownEngine;
pub use renderer::{BaseUrlRewriter, Highlighter, ImageRewriter, MarkdownRenderer, SyntaxHighlighter};
pub use toc::{build_toc, build_toc_tree, ensure_heading_ids, extract_headings, generate_id, ExtractedHeadings, Heading, TocNode};
