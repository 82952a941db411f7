//! Plugin registry for managing renderer plugins

use std::collections::HashMap;
use std::sync::Arc;
use log::debug;

use super::{CheckboxPlugin, ComrakPlugin, EmojiPlugin, MermaidPlugin, Plugin, PlantumlPlugin, RENDERER};

/// Registry of named renderer plugins
#[derive(Clone, Default)]
pub struct PluginRegistry {
    /// Registered plugins indexed by name
    plugins: HashMap<String, Arc<dyn Plugin>>,
    /// Registration order (for deterministic execution)
    load_order: Vec<String>,
}

impl PluginRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the renderer and every built-in plugin
    pub fn standard() -> Self {
        let mut registry = Self::new();
        let builtins: [Arc<dyn Plugin>; 5] = [
            Arc::new(ComrakPlugin),
            Arc::new(EmojiPlugin),
            Arc::new(CheckboxPlugin),
            Arc::new(MermaidPlugin),
            Arc::new(PlantumlPlugin),
        ];

        for plugin in builtins {
            // Names are distinct, so registration cannot fail here
            let _ = registry.register(plugin);
        }

        registry
    }

    /// Register a plugin
    pub fn register(&mut self, plugin: Arc<dyn Plugin>) -> Result<(), String> {
        let name = plugin.name().to_string();

        if self.plugins.contains_key(&name) {
            return Err(format!("Plugin '{}' is already registered", name));
        }

        debug!("Registering plugin: {}", name);
        self.load_order.push(name.clone());
        self.plugins.insert(name, plugin);

        Ok(())
    }

    /// Unregister a plugin
    pub fn unregister(&mut self, name: &str) -> Result<(), String> {
        if self.plugins.remove(name).is_none() {
            return Err(format!("Plugin '{}' is not registered", name));
        }

        debug!("Unregistering plugin: {}", name);
        self.load_order.retain(|n| n != name);

        Ok(())
    }

    /// Check whether a plugin is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// Check whether the Markdown renderer is available
    pub fn has_renderer(&self) -> bool {
        self.contains(RENDERER)
    }

    /// Get a plugin by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Plugin>> {
        self.plugins.get(name).cloned()
    }

    /// Get all plugins in registration order
    pub fn plugins(&self) -> Vec<Arc<dyn Plugin>> {
        self.load_order
            .iter()
            .filter_map(|name| self.plugins.get(name).cloned())
            .collect()
    }

    /// Get the registered names in registration order
    pub fn names(&self) -> &[String] {
        &self.load_order
    }

    /// Get the number of registered plugins
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::{CHECKBOX, EMOJI, MERMAID, PLANTUML};

    struct TestPlugin;

    impl Plugin for TestPlugin {
        fn name(&self) -> &str {
            "test"
        }
    }

    #[test]
    fn test_registry_operations() {
        let mut registry = PluginRegistry::new();
        assert!(registry.is_empty());

        // Register plugin
        assert!(registry.register(Arc::new(TestPlugin)).is_ok());
        assert_eq!(registry.len(), 1);

        // Get plugin
        assert!(registry.get("test").is_some());
        assert!(registry.contains("test"));

        // Try to register duplicate
        assert!(registry.register(Arc::new(TestPlugin)).is_err());

        // Unregister plugin
        assert!(registry.unregister("test").is_ok());
        assert!(registry.is_empty());

        // Try to unregister non-existent
        assert!(registry.unregister("test").is_err());
    }

    #[test]
    fn test_standard_registry() {
        let registry = PluginRegistry::standard();

        assert!(registry.has_renderer());
        assert_eq!(registry.names(), &[RENDERER, EMOJI, CHECKBOX, MERMAID, PLANTUML]);
        assert_eq!(registry.plugins().len(), 5);
    }

    #[test]
    fn test_renderer_can_be_removed() {
        let mut registry = PluginRegistry::standard();
        registry.unregister(RENDERER).unwrap();

        assert!(!registry.has_renderer());
        assert!(registry.contains(MERMAID));
    }
}
