//! Configuration types for notename.
//!
//! [`Config::load`] layers `~/.config/notename/config.toml` and `NOTENAME_*`
//! environment variables over the embedded defaults. [`Config::defaults`]
//! returns the embedded defaults without touching the filesystem (useful in
//! tests). [`Config::settings`] validates a config into the [`Settings`]
//! snapshot a [`Compiler`](crate::Compiler) works from.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::keywords::{KeywordComparator, KeywordSort};
use crate::registry::FileTypeRegistry;
use crate::types::{ComponentOrder, FieldName};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[naming]
component_order = ["identifier", "signature", "title", "keywords"]

[keywords]
sort       = true
comparator = "lexicographic"

[file_types]
"#;

const ENV_PREFIX: &str = "NOTENAME";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/notename/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub naming: NamingConfig,
    #[serde(default)]
    pub keywords: KeywordsConfig,
    /// Extra or overriding file-type tags, `tag = ".ext"`.
    #[serde(default)]
    pub file_types: BTreeMap<String, String>,
}

/// `[naming]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct NamingConfig {
    #[serde(default = "default_component_order")]
    pub component_order: Vec<FieldName>,
}

fn default_component_order() -> Vec<FieldName> {
    ComponentOrder::default().fields().to_vec()
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            component_order: default_component_order(),
        }
    }
}

/// `[keywords]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordsConfig {
    #[serde(default = "default_sort")]
    pub sort: bool,
    #[serde(default)]
    pub comparator: KeywordComparator,
}

fn default_sort() -> bool { true }

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self {
            sort: default_sort(),
            comparator: KeywordComparator::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/notename/config.toml` and `NOTENAME_*`
    /// environment variables, layered on top of the built-in defaults. A
    /// missing file is not an error.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();
        tracing::debug!(path = %path.display(), "loading config");
        Self::layered(&path, false)
    }

    /// Load from an explicit file, which must exist.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        Self::layered(path.as_ref(), true)
    }

    fn layered(path: &Path, required: bool) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(required))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("naming.component_order")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Validate into a [`Settings`] snapshot.
    pub fn settings(&self) -> Result<Settings> {
        Ok(Settings {
            order: ComponentOrder::new(self.naming.component_order.iter().copied())?,
            sort: KeywordSort {
                enabled: self.keywords.sort,
                comparator: self.keywords.comparator,
            },
            registry: FileTypeRegistry::with_overrides(self.file_types.clone()),
        })
    }
}

/// Validated configuration, owned by a compiler for its whole lifetime.
#[derive(Debug, Clone)]
pub struct Settings {
    pub order: ComponentOrder,
    pub sort: KeywordSort,
    pub registry: FileTypeRegistry,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            order: ComponentOrder::default(),
            sort: KeywordSort::by(KeywordComparator::Lexicographic),
            registry: FileTypeRegistry::builtin(),
        }
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("notename")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
