use crate::config::ConfigLoader;
use anyhow::Result;
use clap::{Args, Subcommand};
use hookshelf_core::Project;
use std::path::Path;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration (merged)
    Show,
    /// Show configuration file paths
    Path,
}

pub fn run(args: ConfigArgs, cwd: &Path) -> Result<()> {
    let root = Project::find_root(cwd);
    match args.command {
        ConfigCommands::Show => show_config(&root),
        ConfigCommands::Path => show_paths(&root),
    }
}

fn show_config(root: &Path) -> Result<()> {
    let config = ConfigLoader::load(root)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{}", toml_str);
    Ok(())
}

fn show_paths(root: &Path) -> Result<()> {
    println!("User config:    {:?}", ConfigLoader::user_config_path());
    println!(
        "Project config: {:?}",
        ConfigLoader::project_config_path(root)
    );
    Ok(())
}
