pub mod types;
pub mod parser;
pub mod extractor;

// Re-export the most common items for convenience
pub use types::FrontMatter;
pub use parser::parse_front_matter;
pub use extractor::extract_title_from_html;
