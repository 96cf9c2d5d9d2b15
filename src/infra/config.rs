// src/infra/config.rs - Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::infra::paths;
use crate::io::output::OutputFormat;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub coins: CoinsConfig,

    #[serde(default)]
    pub words: WordsConfig,

    #[serde(default)]
    pub caesar: CaesarConfig,

    #[serde(default)]
    pub stairs: StairsConfig,

    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// List inputs start with their length ("n, then n integers").
    #[serde(default)]
    pub counted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinsConfig {
    pub denominations: Vec<u64>,
}

impl Default for CoinsConfig {
    fn default() -> Self {
        Self {
            denominations: vec![25, 10, 5, 1],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordsConfig {
    pub case_sensitive: bool,
    pub strip_punctuation: bool,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            strip_punctuation: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaesarConfig {
    pub shift: i64,
}

impl Default for CaesarConfig {
    fn default() -> Self {
        Self { shift: 3 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StairsConfig {
    pub steps: Vec<u64>,
}

impl Default for StairsConfig {
    fn default() -> Self {
        Self { steps: vec![1, 2] }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Upper bound on rows produced by the combinatorial drills.
    pub max_rows: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_rows: 1_000_000,
        }
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        match paths::config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
