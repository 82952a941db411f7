use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Metadata declared in a document's front matter block
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FrontMatter {
    /// Declared values by key, in no particular order
    #[serde(flatten)]
    pub entries: HashMap<String, Value>,
}

impl FrontMatter {
    /// Create an empty front matter
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Set a value, replacing any previous one
    pub fn insert(&mut self, key: String, value: Value) {
        self.entries.insert(key, value);
    }

    /// The document title, when declared as a non-empty string
    pub fn title(&self) -> Option<&str> {
        self.get("title")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|title| !title.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_lookup() {
        let mut front_matter = FrontMatter::new();
        assert_eq!(front_matter.title(), None);

        front_matter.insert("title".to_string(), Value::String("  Notes ".to_string()));
        assert_eq!(front_matter.title(), Some("Notes"));

        front_matter.insert("title".to_string(), Value::Bool(true));
        assert_eq!(front_matter.title(), None);
    }
}
