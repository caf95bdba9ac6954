//! `hookshelf add` - copy registry items into the project

use anyhow::Result;
use clap::Args;
use hookshelf_core::{InstallState, Writer, WriterConfig};
use std::path::Path;

use super::Workspace;

/// Add arguments
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Items to add, e.g. useToggle or use-toggle
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Replace files that already exist
    #[arg(long)]
    pub overwrite: bool,

    /// Show what would be written without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Registry to read from ("bundled", a directory, or a URL)
    #[arg(long)]
    pub registry: Option<String>,
}

/// Run add command
pub fn run(args: AddArgs, cwd: &Path) -> Result<()> {
    let workspace = Workspace::open(cwd)?;
    workspace.project.require_typescript()?;

    let registry = workspace.registry(args.registry.as_deref())?;
    let resolver = workspace.resolver(&registry);
    let overwrite = args.overwrite || workspace.config.project.overwrite;

    let mut pending = Vec::new();
    for name in &args.names {
        let entry = registry.entry(name)?;
        match workspace.project.install_state(&resolver, &entry.name)? {
            InstallState::Installed if !overwrite => {
                println!("{} is already installed", entry.name);
            }
            _ => pending.push(entry.name.clone()),
        }
    }

    if pending.is_empty() {
        return Ok(());
    }

    let targets = resolver.resolve_many(&pending)?;
    let writer = Writer::new(WriterConfig {
        overwrite,
        dry_run: args.dry_run,
    });
    let report = writer.write(&targets, &workspace.project.destination())?;

    let verb = if report.dry_run { "would write" } else { "created" };
    for path in &report.written {
        println!("  {:<12} {}", verb, workspace.display_path(path));
    }
    for path in &report.skipped {
        println!("  {:<12} {}", "exists", workspace.display_path(path));
    }

    println!();
    if report.dry_run {
        println!(
            "Dry run: {} file(s) would be written, {} already present.",
            report.written_count(),
            report.skipped.len()
        );
    } else {
        println!(
            "Added {}: {} file(s) written, {} already present.",
            pending.join(", "),
            report.written_count(),
            report.skipped.len()
        );
    }

    Ok(())
}
