use crate::config::types::TocPosition;

/// Soft line breaks stay soft by default
pub fn default_breaks() -> bool {
    false
}

/// Emoji shortcodes are expanded by default
pub fn default_emoji() -> bool {
    true
}

/// Code blocks are highlighted by default
pub fn default_highlight() -> bool {
    true
}

/// Default syntect theme used for code blocks
pub fn default_highlight_style() -> String {
    "InspiredGitHub".to_string()
}

/// The built-in stylesheet is included by default
pub fn default_include_default_styles() -> bool {
    true
}

/// Script URL for client-side mermaid rendering
pub fn default_mermaid_server() -> String {
    "https://unpkg.com/mermaid/dist/mermaid.min.js".to_string()
}

/// PlantUML server base URL
pub fn default_plantuml_server() -> String {
    "https://www.plantuml.com/plantuml".to_string()
}

/// Line that opens a PlantUML block
pub fn default_plantuml_open_marker() -> String {
    "@startuml".to_string()
}

/// Line that closes a PlantUML block
pub fn default_plantuml_close_marker() -> String {
    "@enduml".to_string()
}

/// A table of contents is generated by default
pub fn default_generate_toc() -> bool {
    true
}

/// Deepest heading level collected into the table of contents
pub fn default_toc_depth() -> u8 {
    3
}

/// Where the table of contents is placed
pub fn default_toc_position() -> TocPosition {
    TocPosition::Top
}

/// Label shown above the table of contents
pub fn default_toc_title() -> String {
    "Table of Contents".to_string()
}

/// Title used when neither the caller, the front matter nor an h1 provides one
pub fn default_document_title() -> String {
    "Untitled".to_string()
}
