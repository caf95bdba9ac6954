//! Error types for hookshelf-core

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for hookshelf-core
#[derive(Error, Debug)]
pub enum ShelfError {
    /// Requested item is not in the registry
    #[error("'{name}' was not found in the registry")]
    NotFound { name: String },

    /// Registry index or source content is invalid
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Project configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote registry could not be fetched
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// Target path would escape the destination root
    #[error("Refusing to write outside the destination root: {path}")]
    UnsafePath { path: String },

    /// File system failure
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ShelfError {
    /// Wrap an IO error with the path it happened at
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors found while loading or reading a registry
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Failed to parse registry index: {0}")]
    Parse(String),

    #[error("Duplicate registry item '{0}'")]
    DuplicateName(String),

    #[error("'{item}' depends on '{dependency}', which is not in the registry")]
    DanglingDependency { item: String, dependency: String },

    #[error("Dependency cycle: {}", .0.join(" -> "))]
    Cycle(Vec<String>),

    #[error("Source file missing from registry: {0}")]
    MissingSource(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_name() {
        let err = ShelfError::NotFound {
            name: "useToggle".to_string(),
        };
        assert!(err.to_string().contains("useToggle"));
    }

    #[test]
    fn io_error_keeps_path_and_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ShelfError::io("/tmp/hooks/useToggle.ts", io_err);
        let msg = err.to_string();
        assert!(msg.contains("/tmp/hooks/useToggle.ts"));
        assert!(msg.contains("denied"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn registry_error_converts() {
        let err: ShelfError = RegistryError::DuplicateName("useBoolean".to_string()).into();
        assert!(matches!(err, ShelfError::Registry(_)));
        assert!(err.to_string().contains("useBoolean"));
    }

    #[test]
    fn cycle_displays_path() {
        let err = RegistryError::Cycle(vec![
            "useA".to_string(),
            "useB".to_string(),
            "useA".to_string(),
        ]);
        assert_eq!(err.to_string(), "Dependency cycle: useA -> useB -> useA");
    }

    #[test]
    fn dangling_dependency_names_both_sides() {
        let err = RegistryError::DanglingDependency {
            item: "useLocalStorage".to_string(),
            dependency: "useEventCallback".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("useLocalStorage"));
        assert!(msg.contains("useEventCallback"));
    }
}
