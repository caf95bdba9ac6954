//! `hookshelf info` - show one registry item and what it pulls in

use anyhow::Result;
use clap::Args;
use hookshelf_core::writer::has_content;
use std::path::Path;

use super::Workspace;

/// Info arguments
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Item name
    pub name: String,

    /// Registry to read from ("bundled", a directory, or a URL)
    #[arg(long)]
    pub registry: Option<String>,
}

/// Run info command
pub fn run(args: InfoArgs, cwd: &Path) -> Result<()> {
    let workspace = Workspace::open(cwd)?;
    let registry = workspace.registry(args.registry.as_deref())?;
    let resolver = workspace.resolver(&registry);

    let entry = registry.entry(&args.name)?;
    let plan = resolver.plan(&entry.name)?;
    let destination = workspace.project.destination();

    println!("Name:         {}", entry.name);
    println!("Type:         {}", entry.kind);
    println!(
        "Description:  {}",
        if entry.description.is_empty() {
            "No description"
        } else {
            &entry.description
        }
    );
    println!("Registry:     {}", registry.describe());
    println!(
        "Dependencies: {}",
        if entry.dependencies.is_empty() {
            "none".to_string()
        } else {
            entry.dependencies.join(", ")
        }
    );
    println!();
    println!("Files (in write order):");

    for item in plan {
        let path = destination.join(resolver.target_path(item));
        let marker = if has_content(&path) { "✓" } else { "○" };
        println!("  {} {}", marker, workspace.display_path(&path));
    }

    Ok(())
}
