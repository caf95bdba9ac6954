use super::types::{
    ProjectConfig, RawProjectConfig, RawRegistryConfig, RawShelfConfig, RegistryConfig,
    ShelfConfig,
};
use anyhow::Result;
use hookshelf_core::{PROJECT_CONFIG_FILE, ShelfError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the project config path (useful for isolated e2e tests)
pub const PROJECT_CONFIG_ENV: &str = "HOOKSHELF_PROJECT_CONFIG";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project) for the project at `root`
    pub fn load(root: &Path) -> Result<ShelfConfig> {
        let mut raw = RawShelfConfig::default();

        // Layer 1: User config
        let user_path = Self::user_config_path();
        if let Some(user_config) = Self::read_layer(&user_path)? {
            raw = Self::merge_raw(raw, user_config);
        }

        // Layer 2: Project config
        let project_path = Self::project_config_path(root);
        if let Some(project_config) = Self::read_layer(&project_path)? {
            raw = Self::merge_raw(raw, project_config);
        }

        Ok(Self::finalize(raw))
    }

    /// Get user config path (`$XDG_CONFIG_HOME/hookshelf/config.toml`)
    pub fn user_config_path() -> PathBuf {
        hookshelf_paths::user_config_path()
    }

    /// Get project config path for a project root
    pub fn project_config_path(root: &Path) -> PathBuf {
        match std::env::var_os(PROJECT_CONFIG_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => root.join(PROJECT_CONFIG_FILE),
        }
    }

    /// Read one config layer; a missing file is not an error
    fn read_layer(path: &Path) -> Result<Option<RawShelfConfig>> {
        if !path.is_file() {
            return Ok(None);
        }
        debug!("Reading config layer {:?}", path);

        let contents =
            std::fs::read_to_string(path).map_err(|e| ShelfError::io(path, e))?;
        let raw = toml::from_str(&contents).map_err(|e| {
            ShelfError::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;
        Ok(Some(raw))
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawShelfConfig, overlay: RawShelfConfig) -> RawShelfConfig {
        RawShelfConfig {
            registry: RawRegistryConfig {
                location: overlay.registry.location.or(base.registry.location),
            },
            project: RawProjectConfig {
                base_dir: overlay.project.base_dir.or(base.project.base_dir),
                naming: overlay.project.naming.or(base.project.naming),
                overwrite: overlay.project.overwrite.or(base.project.overwrite),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawShelfConfig) -> ShelfConfig {
        let registry_defaults = RegistryConfig::default();
        let project_defaults = ProjectConfig::default();

        ShelfConfig {
            registry: RegistryConfig {
                location: raw.registry.location.unwrap_or(registry_defaults.location),
            },
            project: ProjectConfig {
                base_dir: raw.project.base_dir.unwrap_or(project_defaults.base_dir),
                naming: raw.project.naming.unwrap_or(project_defaults.naming),
                overwrite: raw.project.overwrite.unwrap_or(project_defaults.overwrite),
            },
        }
    }

    /// Save config to a specific path
    ///
    /// Creates parent directories if they don't exist.
    pub fn save_to_path(config: &ShelfConfig, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ShelfError::io(parent, e))?;
        }

        let toml = toml::to_string_pretty(config)?;
        std::fs::write(path, toml).map_err(|e| ShelfError::io(path, e))?;

        Ok(())
    }

    /// Load a single config file with defaults applied (for testing)
    #[cfg(test)]
    pub fn load_from_path(path: &Path) -> Result<ShelfConfig> {
        Ok(Self::finalize(Self::read_layer(path)?.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookshelf_core::Case;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::TempDir;

    // ==================== Save Tests ====================

    #[test]
    fn test_save_creates_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(PROJECT_CONFIG_FILE);

        let config = ShelfConfig {
            project: ProjectConfig {
                base_dir: PathBuf::from("app"),
                naming: Case::Kebab,
                overwrite: false,
            },
            ..Default::default()
        };

        ConfigLoader::save_to_path(&config, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("location = \"bundled\""));
        assert!(contents.contains("base_dir = \"app\""));
        assert!(contents.contains("naming = \"kebab\""));
        assert!(contents.contains("overwrite = false"));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("deep").join("config.toml");

        ConfigLoader::save_to_path(&ShelfConfig::default(), &path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_saved_config_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(PROJECT_CONFIG_FILE);

        let config = ShelfConfig {
            registry: RegistryConfig {
                location: "../registry".to_string(),
            },
            project: ProjectConfig {
                base_dir: PathBuf::from("lib"),
                naming: Case::Kebab,
                overwrite: true,
            },
        };
        ConfigLoader::save_to_path(&config, &path).unwrap();

        let loaded = ConfigLoader::load_from_path(&path).unwrap();
        assert_eq!(loaded.registry.location, "../registry");
        assert_eq!(loaded.project.base_dir, PathBuf::from("lib"));
        assert_eq!(loaded.project.naming, Case::Kebab);
        assert!(loaded.project.overwrite);
    }

    // ==================== Load Tests ====================

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.toml");

        let config = ConfigLoader::load_from_path(&path).unwrap();

        assert_eq!(config.registry.location, "bundled");
        assert_eq!(config.project.base_dir, PathBuf::from("src"));
    }

    #[test]
    fn test_load_partial_toml_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(PROJECT_CONFIG_FILE);

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[project]
naming = "kebab"
"#
        )
        .unwrap();

        let config = ConfigLoader::load_from_path(&path).unwrap();

        assert_eq!(config.project.naming, Case::Kebab);
        assert_eq!(config.project.base_dir, PathBuf::from("src"));
        assert!(!config.project.overwrite);
        assert_eq!(config.registry.location, "bundled");
    }

    #[test]
    fn test_load_invalid_toml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("invalid.toml");

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "this is not valid toml {{{{").unwrap();

        let err = ConfigLoader::load_from_path(&path).unwrap_err();
        let shelf_err = err.downcast_ref::<ShelfError>().unwrap();
        assert!(matches!(shelf_err, ShelfError::Config(msg) if msg.contains("invalid.toml")));
    }

    #[test]
    fn test_merge_raw_overlay_overrides_base() {
        let base = RawShelfConfig {
            registry: RawRegistryConfig {
                location: Some("/shared/registry".to_string()),
            },
            project: RawProjectConfig {
                base_dir: Some(PathBuf::from("src")),
                naming: Some(Case::Camel),
                overwrite: Some(false),
            },
        };

        let overlay = RawShelfConfig {
            registry: RawRegistryConfig { location: None },
            project: RawProjectConfig {
                base_dir: Some(PathBuf::from("app")),
                naming: Some(Case::Kebab),
                overwrite: None, // Should preserve base value
            },
        };

        let merged = ConfigLoader::merge_raw(base, overlay);

        assert_eq!(merged.registry.location, Some("/shared/registry".to_string()));
        assert_eq!(merged.project.base_dir, Some(PathBuf::from("app")));
        assert_eq!(merged.project.naming, Some(Case::Kebab));
        assert_eq!(merged.project.overwrite, Some(false));
    }

    #[test]
    #[serial]
    fn test_load_layers_user_and_project() {
        let temp_dir = TempDir::new().unwrap();
        let xdg = temp_dir.path().join("xdg");
        let root = temp_dir.path().join("app");
        std::fs::create_dir_all(xdg.join("hookshelf")).unwrap();
        std::fs::create_dir_all(&root).unwrap();

        std::fs::write(
            xdg.join("hookshelf/config.toml"),
            "[registry]\nlocation = \"https://hooks.example.com\"\n\n[project]\nnaming = \"kebab\"\n",
        )
        .unwrap();
        std::fs::write(
            root.join(PROJECT_CONFIG_FILE),
            "[project]\nbase_dir = \"lib\"\n",
        )
        .unwrap();

        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", &xdg);
            std::env::remove_var(PROJECT_CONFIG_ENV);
        }
        let config = ConfigLoader::load(&root);
        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
        let config = config.unwrap();

        assert_eq!(config.registry.location, "https://hooks.example.com");
        assert_eq!(config.project.naming, Case::Kebab);
        assert_eq!(config.project.base_dir, PathBuf::from("lib"));
    }

    #[test]
    #[serial]
    fn test_project_config_path_default_and_override() {
        unsafe {
            std::env::remove_var(PROJECT_CONFIG_ENV);
        }
        assert_eq!(
            ConfigLoader::project_config_path(Path::new("/work/app")),
            PathBuf::from("/work/app/hookshelf.toml")
        );

        unsafe {
            std::env::set_var(PROJECT_CONFIG_ENV, "/tmp/isolated/hookshelf.toml");
        }
        let overridden = ConfigLoader::project_config_path(Path::new("/work/app"));
        unsafe {
            std::env::remove_var(PROJECT_CONFIG_ENV);
        }
        assert_eq!(overridden, PathBuf::from("/tmp/isolated/hookshelf.toml"));
    }

    #[test]
    #[serial]
    fn test_user_config_path_is_under_hookshelf() {
        let path = ConfigLoader::user_config_path();
        assert!(path.to_string_lossy().contains("hookshelf"));
        assert!(path.ends_with("config.toml"));
    }
}
