//! Configuration management for platter.
//!
//! Loads configuration from ${PLATTER_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogOptions;
use crate::notifier::DEFAULT_LEAD_DISTANCE;

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for platter configuration and data directories.
    //!
    //! PLATTER_HOME resolution order:
    //! 1. PLATTER_HOME environment variable (if set)
    //! 2. ~/.config/platter (default)
    //! 3. ./.platter when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the platter home directory.
    pub fn platter_home() -> PathBuf {
        if let Ok(home) = std::env::var("PLATTER_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".platter"),
            |h| h.join(".config").join("platter"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        platter_home().join("config.toml")
    }

    /// Returns the directory for log files.
    pub fn logs_dir() -> PathBuf {
        platter_home().join("logs")
    }
}

/// Mock catalog settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub size: usize,
    pub seed: u64,
    pub page_size: usize,
    pub latency_ms: u64,
    pub lookup_latency_ms: u64,
    pub search_latency_ms: u64,
    pub fail_every: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let defaults = CatalogOptions::default();
        Self {
            size: defaults.size,
            seed: defaults.seed,
            page_size: defaults.page_size,
            latency_ms: defaults.latency.as_millis() as u64,
            lookup_latency_ms: defaults.lookup_latency.as_millis() as u64,
            search_latency_ms: defaults.search_latency.as_millis() as u64,
            fail_every: defaults.fail_every,
        }
    }
}

/// List surface settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Rows per card.
    pub item_height: usize,
    /// Cards rendered beyond each viewport edge.
    pub overscan: usize,
    /// Distance from the end of loaded items at which the next page is requested.
    pub lead_distance: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            item_height: 8,
            overscan: 2,
            lead_distance: DEFAULT_LEAD_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log filter used when `PLATTER_LOG` is unset.
    pub log_level: String,
    /// Page fetch timeout in milliseconds.
    pub fetch_timeout_ms: u64,
    pub catalog: CatalogConfig,
    pub list: ListConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            fetch_timeout_ms: 5000,
            catalog: CatalogConfig::default(),
            list: ListConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the default path.
    /// Returns defaults if file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Self = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?
        } else {
            Self::default()
        };
        config
            .validate()
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Writes the commented default template to `path`.
    ///
    /// Fails if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Rejects values the list surface or the catalog cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.page_size == 0 {
            anyhow::bail!("catalog.page_size must be at least 1");
        }
        if self.list.item_height == 0 {
            anyhow::bail!("list.item_height must be at least 1");
        }
        if self.fetch_timeout_ms == 0 {
            anyhow::bail!("fetch_timeout_ms must be at least 1");
        }
        Ok(())
    }

    pub const fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    pub fn catalog_options(&self) -> CatalogOptions {
        CatalogOptions {
            size: self.catalog.size,
            seed: self.catalog.seed,
            page_size: self.catalog.page_size,
            latency: Duration::from_millis(self.catalog.latency_ms),
            lookup_latency: Duration::from_millis(self.catalog.lookup_latency_ms),
            search_latency: Duration::from_millis(self.catalog.search_latency_ms),
            fail_every: self.catalog.fail_every,
        }
    }
}
