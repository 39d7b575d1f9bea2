//! Configuration types for emojisearch.
//!
//! [`Config::load`] reads `~/.config/emojisearch/config.toml`, creating it
//! with hardcoded defaults if it does not yet exist. [`Config::load_from`]
//! reads an explicit file instead. Both are layered on top of the built-in
//! defaults and overridden by `EMOJISEARCH__<SECTION>__<KEY>` environment
//! variables. [`Config::from_env`] skips the file layer, and
//! [`Config::defaults`] returns the defaults without touching the
//! filesystem or the environment (useful in tests).

use crate::catalog::{Catalog, CatalogError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
addr = "127.0.0.1:8080"

[search]
# Return each matching emoji once instead of once per matching include term.
distinct = false

[catalog]
# Load the catalog from this file instead of the built-in one.
# path = "/path/to/catalog.toml"
"#;

const ENV_PREFIX: &str = "EMOJISEARCH";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// `[server]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
}

fn default_addr() -> String { "127.0.0.1:8080".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { addr: default_addr() }
    }
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub distinct: bool,
}

/// `[catalog]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// The configured catalog file, or the built-in catalog when unset.
    pub fn open(&self) -> Result<Catalog, CatalogError> {
        match &self.path {
            Some(path) => Catalog::from_path(path),
            None => Ok(Catalog::builtin()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/emojisearch/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        Self::load_from(&path)
    }

    /// Load from an explicit file, layered on top of the built-in defaults.
    /// The file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path))
            .add_source(environment())
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// The built-in defaults overridden by the environment. Used when no
    /// config file can be read.
    pub fn from_env() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(environment())
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
}

// ---------------------------------------------------------------------------
// Source helpers
// ---------------------------------------------------------------------------

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("emojisearch")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
