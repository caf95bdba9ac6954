//! Consumer project detection

use std::path::{Path, PathBuf};

use crate::error::{Result, ShelfError};
use crate::resolver::Resolver;
use crate::writer::has_content;

/// Marks a TypeScript project; required before anything is added
pub const TSCONFIG_FILE: &str = "tsconfig.json";

/// Project-level hookshelf configuration file
pub const PROJECT_CONFIG_FILE: &str = "hookshelf.toml";

const PACKAGE_JSON: &str = "package.json";

/// How much of a requested item is already in the project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallState {
    /// The item and every dependency are present
    Installed,
    /// The item or some dependency is present, but not all
    Partial,
    Missing,
}

/// A consumer project: its root and where registry files land inside it
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    base_dir: PathBuf,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            base_dir: base_dir.into(),
        }
    }

    /// Walk up from `start` to the nearest directory holding `package.json`
    /// or `hookshelf.toml`. Falls back to `start` itself.
    pub fn find_root(start: &Path) -> PathBuf {
        start
            .ancestors()
            .find(|dir| dir.join(PACKAGE_JSON).is_file() || dir.join(PROJECT_CONFIG_FILE).is_file())
            .unwrap_or(start)
            .to_path_buf()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory registry paths are written under
    pub fn destination(&self) -> PathBuf {
        self.root.join(&self.base_dir)
    }

    pub fn has_tsconfig(&self) -> bool {
        self.root.join(TSCONFIG_FILE).is_file()
    }

    /// Fail with a configuration error unless this is a TypeScript project
    pub fn require_typescript(&self) -> Result<()> {
        if self.has_tsconfig() {
            Ok(())
        } else {
            Err(ShelfError::Config(format!(
                "{} not found in {}; hookshelf copies TypeScript sources and needs a TypeScript project",
                TSCONFIG_FILE,
                self.root.display()
            )))
        }
    }

    /// Whether `name` and its dependencies already exist in the project
    pub fn install_state(&self, resolver: &Resolver<'_>, name: &str) -> Result<InstallState> {
        let plan = resolver.plan(name)?;
        let destination = self.destination();
        let present = plan
            .iter()
            .filter(|entry| has_content(&destination.join(resolver.target_path(entry))))
            .count();

        Ok(if present == plan.len() {
            InstallState::Installed
        } else if present == 0 {
            InstallState::Missing
        } else {
            InstallState::Partial
        })
    }
}
