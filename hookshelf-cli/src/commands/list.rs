//! `hookshelf list` - show registry items

use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use hookshelf_core::{InstallState, ItemKind};
use std::path::Path;

use super::Workspace;

/// List arguments
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show one kind of item (hook, util, type)
    #[arg(long)]
    pub kind: Option<ItemKind>,

    /// Registry to read from ("bundled", a directory, or a URL)
    #[arg(long)]
    pub registry: Option<String>,
}

/// Run list command
pub fn run(args: ListArgs, cwd: &Path) -> Result<()> {
    let workspace = Workspace::open(cwd)?;
    let registry = workspace.registry(args.registry.as_deref())?;
    let resolver = workspace.resolver(&registry);

    let items: Vec<_> = registry
        .index()
        .items
        .iter()
        .filter(|item| args.kind.is_none_or(|kind| item.kind == kind))
        .collect();

    if items.is_empty() {
        match args.kind {
            Some(kind) => println!("No {} items in {}.", kind, registry.describe()),
            None => println!("Registry {} is empty.", registry.describe()),
        }
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Name").fg(Color::Cyan),
        Cell::new("Type").fg(Color::Cyan),
        Cell::new("Installed").fg(Color::Cyan),
        Cell::new("Description").fg(Color::Cyan),
    ]);

    for item in items {
        let installed = match workspace.project.install_state(&resolver, &item.name)? {
            InstallState::Installed => Cell::new("✓").fg(Color::Green),
            InstallState::Partial => Cell::new("partial").fg(Color::Yellow),
            InstallState::Missing => Cell::new(""),
        };

        table.add_row(vec![
            Cell::new(&item.name),
            Cell::new(item.kind),
            installed,
            Cell::new(&item.description),
        ]);
    }

    println!("{table}");
    Ok(())
}
