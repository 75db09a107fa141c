// config.rs — gpa configuration file.
//
// Example `/etc/gpa/gpa.toml`:
//
//   [storage]
//   snapshot = "/var/cache/gpa/policy.jsonl"
//
//   [polkit]
//   templates_dir = "/usr/share/gpa/templates"
//   rules_dir = "/etc/polkit-1/rules.d"
//
// Every key is optional. Command-line flags override file values.

use std::path::{Path, PathBuf};

use gpa_template::PolkitConfig;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "/etc/gpa/gpa.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpaConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub polkit: PolkitConfig,
}

/// Policy storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSONL snapshot of stored policy entries.
    #[serde(default = "default_snapshot")]
    pub snapshot: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            snapshot: default_snapshot(),
        }
    }
}

fn default_snapshot() -> PathBuf {
    PathBuf::from("/var/cache/gpa/policy.jsonl")
}

impl GpaConfig {
    /// Parse the config file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Like [`GpaConfig::load`], but a missing file yields the defaults.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn apply_overrides(
        &mut self,
        snapshot: Option<PathBuf>,
        templates_dir: Option<PathBuf>,
        rules_dir: Option<PathBuf>,
    ) {
        if let Some(snapshot) = snapshot {
            self.storage.snapshot = snapshot;
        }
        if let Some(dir) = templates_dir {
            self.polkit.templates_dir = dir;
        }
        if let Some(dir) = rules_dir {
            self.polkit.rules_dir = dir;
        }
    }
}
