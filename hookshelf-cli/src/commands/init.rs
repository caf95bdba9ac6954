//! `hookshelf init` - write a project config file

use anyhow::{Result, bail};
use clap::Args;
use hookshelf_core::{PROJECT_CONFIG_FILE, Project};
use std::path::Path;

use crate::config::{ConfigLoader, ShelfConfig};

/// Init arguments
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Replace an existing hookshelf.toml
    #[arg(long)]
    pub force: bool,
}

/// Run init command
pub fn run(args: InitArgs, cwd: &Path) -> Result<()> {
    let root = Project::find_root(cwd);
    let path = root.join(PROJECT_CONFIG_FILE);

    if path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to replace it)",
            path.display()
        );
    }

    ConfigLoader::save_to_path(&ShelfConfig::default(), &path)?;
    println!("Wrote {}", path.display());

    if !Project::new(&root, "").has_tsconfig() {
        println!();
        println!("Note: no tsconfig.json in {}.", root.display());
        println!("hookshelf add needs a TypeScript project.");
    }

    Ok(())
}
