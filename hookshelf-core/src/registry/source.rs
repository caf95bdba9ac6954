//! Where registry content is read from

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;
use url::Url;

use super::bundled;
use crate::error::{RegistryError, Result, ShelfError};

/// File name of the index at the root of every registry
pub const INDEX_FILE: &str = "registry.json";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Read access to a registry's files by registry-relative path
pub trait RegistrySource {
    /// Human-readable location, for messages
    fn describe(&self) -> String;

    /// Read one file. A missing file is [`RegistryError::MissingSource`].
    fn read(&self, path: &str) -> Result<String>;
}

/// Registry compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledSource;

impl RegistrySource for BundledSource {
    fn describe(&self) -> String {
        "bundled registry".to_string()
    }

    fn read(&self, path: &str) -> Result<String> {
        bundled::FILES
            .iter()
            .find(|(name, _)| *name == path)
            .map(|(_, content)| content.to_string())
            .ok_or_else(|| RegistryError::MissingSource(path.to_string()).into())
    }
}

/// Registry checked out in a local directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl RegistrySource for DirectorySource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn read(&self, path: &str) -> Result<String> {
        let full = self.root.join(path);
        debug!("Reading registry file {:?}", full);
        std::fs::read_to_string(&full).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RegistryError::MissingSource(path.to_string()).into()
            } else {
                ShelfError::io(full, e)
            }
        })
    }
}

/// Registry served over HTTP(S) from a base URL
#[derive(Debug, Clone)]
pub struct HttpSource {
    base: Url,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(base: &str) -> Result<Self> {
        // Url::join replaces the last segment unless the base ends with '/'
        let normalized = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{}/", base)
        };
        let base = Url::parse(&normalized).map_err(|e| ShelfError::Fetch {
            url: base.to_string(),
            message: e.to_string(),
        })?;
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(concat!("hookshelf/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ShelfError::Fetch {
                url: base.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { base, client })
    }

    /// Absolute URL for a registry-relative path
    pub fn url_for(&self, path: &str) -> Result<Url> {
        self.base.join(path).map_err(|e| ShelfError::Fetch {
            url: format!("{}{}", self.base, path),
            message: e.to_string(),
        })
    }
}

impl RegistrySource for HttpSource {
    fn describe(&self) -> String {
        self.base.to_string()
    }

    fn read(&self, path: &str) -> Result<String> {
        let url = self.url_for(path)?;
        debug!("Fetching {}", url);

        let fetch_err = |message: String| ShelfError::Fetch {
            url: url.to_string(),
            message,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| fetch_err(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::MissingSource(path.to_string()).into());
        }
        if !status.is_success() {
            return Err(fetch_err(format!("HTTP {}", status)));
        }

        response.text().map_err(|e| fetch_err(e.to_string()))
    }
}

/// Parsed registry location setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryLocation {
    Bundled,
    Directory(PathBuf),
    Remote(String),
}

impl RegistryLocation {
    /// `"bundled"` (or empty), an `http(s)://` URL, or a directory path
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("bundled") {
            RegistryLocation::Bundled
        } else if value.starts_with("http://") || value.starts_with("https://") {
            RegistryLocation::Remote(value.to_string())
        } else {
            RegistryLocation::Directory(PathBuf::from(value))
        }
    }

    /// Resolve a relative directory against `base`
    pub fn relative_to(self, base: &Path) -> Self {
        match self {
            RegistryLocation::Directory(dir) if dir.is_relative() => {
                RegistryLocation::Directory(base.join(dir))
            }
            other => other,
        }
    }

    /// Open a source for this location
    pub fn open(&self) -> Result<Box<dyn RegistrySource>> {
        Ok(match self {
            RegistryLocation::Bundled => Box::new(BundledSource),
            RegistryLocation::Directory(dir) => Box::new(DirectorySource::new(dir.clone())),
            RegistryLocation::Remote(url) => Box::new(HttpSource::new(url)?),
        })
    }
}

impl fmt::Display for RegistryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryLocation::Bundled => write!(f, "bundled"),
            RegistryLocation::Directory(dir) => write!(f, "{}", dir.display()),
            RegistryLocation::Remote(url) => write!(f, "{}", url),
        }
    }
}
