use hookshelf_core::Case;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawShelfConfig {
    #[serde(default)]
    pub registry: RawRegistryConfig,

    #[serde(default)]
    pub project: RawProjectConfig,
}

/// Registry config as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawRegistryConfig {
    /// "bundled", a directory, or an http(s) URL
    pub location: Option<String>,
}

/// Project config as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawProjectConfig {
    /// Directory under the project root that registry paths are written to
    pub base_dir: Option<PathBuf>,

    /// File naming convention for copied files
    pub naming: Option<Case>,

    /// Replace existing files instead of skipping them
    pub overwrite: Option<bool>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShelfConfig {
    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub project: ProjectConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub location: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_REGISTRY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub base_dir: PathBuf,
    pub naming: Case,
    pub overwrite: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            naming: Case::Camel,
            overwrite: false,
        }
    }
}

/// Registry used when nothing is configured
pub const DEFAULT_REGISTRY: &str = "bundled";

/// Default directory for copied sources, relative to the project root
pub const DEFAULT_BASE_DIR: &str = "src";
