use crate::config::AliasConfig;
use std::collections::HashMap;

/// Immutable alias table mapping caller-facing model names to the
/// identifiers the backend actually serves. Built once at startup and
/// shared read-only across requests.
#[derive(Debug, Clone)]
pub struct ModelAliases {
    // Entries keep configuration order for listing; the map backs lookup.
    entries: Vec<AliasConfig>,
    lookup: HashMap<String, String>,
}

impl ModelAliases {
    pub fn new(entries: Vec<AliasConfig>) -> Self {
        let lookup = entries
            .iter()
            .map(|e| (e.alias.clone(), e.model.clone()))
            .collect();
        Self { entries, lookup }
    }

    /// Resolves an alias to its backend model identifier. Unknown names
    /// pass through unchanged, so callers may address backend models
    /// directly. Never fails.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.lookup.get(name).map(String::as_str).unwrap_or(name)
    }

    /// All alias names, in configuration order.
    pub fn aliases(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.alias.as_str()).collect()
    }

    /// The full alias → identifier mapping, in configuration order.
    pub fn mapping(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.alias.as_str(), e.model.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
