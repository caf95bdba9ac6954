//! Registry index and content sources
//!
//! A registry is a `registry.json` index plus one source file per entry,
//! read through a [`RegistrySource`]:
//!
//! - [`BundledSource`] - compiled into the binary
//! - [`DirectorySource`] - a local checkout
//! - [`HttpSource`] - a base URL

mod bundled;
mod entry;
mod source;

pub use entry::{ItemKind, RegistryEntry, RegistryIndex};
pub use source::{
    BundledSource, DirectorySource, HttpSource, INDEX_FILE, RegistryLocation, RegistrySource,
};

use tracing::debug;

use crate::error::{Result, ShelfError};
use crate::naming::to_camel_case;

/// A loaded, validated registry
pub struct Registry {
    index: RegistryIndex,
    source: Box<dyn RegistrySource>,
}

impl Registry {
    /// Read and validate the index from `source`
    pub fn load(source: Box<dyn RegistrySource>) -> Result<Self> {
        let json = source.read(INDEX_FILE)?;
        let index = RegistryIndex::from_json(&json)?;
        debug!(
            "Loaded {} registry items from {}",
            index.items.len(),
            source.describe()
        );
        Ok(Self { index, source })
    }

    /// The registry compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::load(Box::new(BundledSource))
    }

    /// Open and load the registry at `location`
    pub fn open(location: &RegistryLocation) -> Result<Self> {
        Self::load(location.open()?)
    }

    pub fn index(&self) -> &RegistryIndex {
        &self.index
    }

    pub fn describe(&self) -> String {
        self.source.describe()
    }

    /// Find an entry by name.
    ///
    /// Kebab-case input (`use-toggle`) also matches the camelCase entry.
    pub fn entry(&self, name: &str) -> Result<&RegistryEntry> {
        self.index
            .get(name)
            .or_else(|| self.index.get(&to_camel_case(name)))
            .ok_or_else(|| ShelfError::NotFound {
                name: name.to_string(),
            })
    }

    /// Source text of an entry
    pub fn read_source(&self, entry: &RegistryEntry) -> Result<String> {
        self.source.read(&entry.canonical_path())
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("source", &self.source.describe())
            .field("items", &self.index.items.len())
            .finish()
    }
}
