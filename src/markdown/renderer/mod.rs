mod syntax;
mod images;
mod markdown_renderer;

pub use syntax::{Highlighter, SyntaxHighlighter};
pub use images::{BaseUrlRewriter, ImageRewriter};
pub use markdown_renderer::MarkdownRenderer;
