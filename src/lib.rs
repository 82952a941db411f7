//! mdpage turns Markdown documents, optionally carrying front matter, into
//! standalone HTML pages with heading anchors and a table of contents.
//!
//! ```no_run
//! use mdpage::{convert, ConvertOptions};
//!
//! let html = convert("# Hello\n\n## World\n", None, None, &ConvertOptions::default()).unwrap();
//! assert!(html.contains("table-of-contents"));
//! ```

pub mod config;
pub mod document;
pub mod front_matter;
pub mod markdown;
pub mod plugins;
pub mod utils;

pub use config::{ConvertOptions, RenderConfig, TocPosition};
pub use document::{convert, Assembler};
pub use front_matter::{parse_front_matter, FrontMatter};
pub use markdown::{build_toc, ensure_heading_ids, extract_headings, generate_id, Heading};
pub use plugins::PluginRegistry;
pub use utils::error::{BoxResult, ConvertError};
