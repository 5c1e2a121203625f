//! File-type registry — symbolic tags to filename extensions.
//!
//! The built-in table is a compile-time perfect hash map. Configuration may
//! add tags or override built-in extensions.

use std::collections::BTreeMap;

use phf::phf_map;

static BUILTIN_FILE_TYPES: phf::Map<&'static str, &'static str> = phf_map! {
    "org" => ".org",
    "markdown-yaml" => ".md",
    "markdown-toml" => ".md",
    "text" => ".txt",
};

/// Resolves file-type tags to extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTypeRegistry {
    overrides: BTreeMap<String, String>,
}

impl FileTypeRegistry {
    /// Registry with only the built-in tags.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Registry with `overrides` layered over the built-in tags.
    pub fn with_overrides(overrides: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            overrides: overrides.into_iter().collect(),
        }
    }

    /// Add or replace a tag.
    pub fn insert(&mut self, tag: impl Into<String>, extension: impl Into<String>) {
        self.overrides.insert(tag.into(), extension.into());
    }

    /// The extension for `tag`, if it is known.
    pub fn resolve(&self, tag: &str) -> Option<&str> {
        self.overrides
            .get(tag)
            .map(String::as_str)
            .or_else(|| BUILTIN_FILE_TYPES.get(tag).copied())
    }

    /// Every known tag, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = BUILTIN_FILE_TYPES
            .keys()
            .copied()
            .chain(self.overrides.keys().map(String::as_str))
            .collect();
        tags.sort_unstable();
        tags.dedup();
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tags_resolve() {
        let registry = FileTypeRegistry::builtin();
        assert_eq!(registry.resolve("org"), Some(".org"));
        assert_eq!(registry.resolve("markdown-yaml"), Some(".md"));
        assert_eq!(registry.resolve("text"), Some(".txt"));
        assert_eq!(registry.resolve("pdf"), None);
    }

    #[test]
    fn overrides_take_precedence() {
        let mut registry = FileTypeRegistry::builtin();
        registry.insert("text", ".text");
        registry.insert("typst", ".typ");
        assert_eq!(registry.resolve("text"), Some(".text"));
        assert_eq!(registry.resolve("typst"), Some(".typ"));
        assert_eq!(
            registry.tags(),
            vec!["markdown-toml", "markdown-yaml", "org", "text", "typst"]
        );
    }
}
