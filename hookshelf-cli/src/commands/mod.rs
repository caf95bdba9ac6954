pub mod add;
pub mod config;
pub mod info;
pub mod init;
pub mod list;

use anyhow::{Context, Result};
use hookshelf_core::{Project, Registry, RegistryLocation, Resolver};
use std::path::Path;
use tracing::debug;

use crate::config::{ConfigLoader, ShelfConfig};

/// The project a command runs against, with its merged configuration
pub struct Workspace {
    pub config: ShelfConfig,
    pub project: Project,
}

impl Workspace {
    /// Find the project root above `cwd` and load its configuration
    pub fn open(cwd: &Path) -> Result<Self> {
        let root = Project::find_root(cwd);
        debug!("Project root: {:?}", root);

        let config = ConfigLoader::load(&root)?;
        let project = Project::new(&root, &config.project.base_dir);
        Ok(Self { config, project })
    }

    /// Load the configured registry, or `location` when given on the command line
    pub fn registry(&self, location: Option<&str>) -> Result<Registry> {
        let location = RegistryLocation::parse(location.unwrap_or(&self.config.registry.location))
            .relative_to(self.project.root());
        Registry::open(&location).with_context(|| format!("Failed to load registry {}", location))
    }

    pub fn resolver<'a>(&self, registry: &'a Registry) -> Resolver<'a> {
        Resolver::new(registry, self.config.project.naming)
    }

    /// `path` relative to the project root, for display
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(self.project.root())
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// Points the user config layer at an empty temp dir for the guard's lifetime.
/// Tests holding one must be `#[serial]`.
#[cfg(test)]
pub(crate) struct IsolatedConfig {
    xdg: tempfile::TempDir,
    previous: Option<std::ffi::OsString>,
}

#[cfg(test)]
impl IsolatedConfig {
    pub(crate) fn new() -> Self {
        let xdg = tempfile::TempDir::new().unwrap();
        let previous = std::env::var_os("XDG_CONFIG_HOME");
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", xdg.path());
            std::env::remove_var(crate::config::PROJECT_CONFIG_ENV);
        }
        Self { xdg, previous }
    }

    /// Write the user config file inside the isolated dir
    pub(crate) fn write_user_config(&self, contents: &str) {
        let path = hookshelf_paths::user_config_path();
        assert!(path.starts_with(self.xdg.path()));
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }
}

#[cfg(test)]
impl Drop for IsolatedConfig {
    fn drop(&mut self) {
        unsafe {
            match self.previous.take() {
                Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }
    }
}
