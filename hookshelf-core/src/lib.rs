//! hookshelf-core: registry resolution and file copying for hookshelf
//!
//! hookshelf copies hook sources from a registry into a consumer project:
//!
//! - **Registry** - [`Registry`] loads and validates a `registry.json` index
//!   from a [`RegistrySource`] (bundled, directory or HTTP)
//! - **Resolution** - [`Resolver`] flattens an entry's dependencies into
//!   ordered [`FileTarget`]s
//! - **Writing** - [`Writer`] copies targets under a destination root,
//!   skipping files that already exist
//! - **Naming** - [`naming`] converts between camelCase and kebab-case
//!
//! # Quick Start
//!
//! ```no_run
//! use hookshelf_core::{Case, Project, Registry, Resolver, Writer};
//!
//! fn example() -> hookshelf_core::Result<()> {
//!     let registry = Registry::bundled()?;
//!     let resolver = Resolver::new(&registry, Case::Camel);
//!     let targets = resolver.resolve("useToggle")?;
//!
//!     let project = Project::new(".", "src");
//!     project.require_typescript()?;
//!     let report = Writer::default().write(&targets, &project.destination())?;
//!     println!("wrote {} files", report.written_count());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod naming;
pub mod project;
pub mod registry;
pub mod resolver;
pub mod writer;

pub use error::{RegistryError, Result, ShelfError};
pub use naming::{Case, convert_path, to_camel_case, to_case, to_kebab_case};
pub use project::{InstallState, PROJECT_CONFIG_FILE, Project, TSCONFIG_FILE};
pub use registry::{
    BundledSource, DirectorySource, HttpSource, ItemKind, Registry, RegistryEntry, RegistryIndex,
    RegistryLocation, RegistrySource,
};
pub use resolver::{FileTarget, Resolver};
pub use writer::{WriteReport, Writer, WriterConfig};
