use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "hookshelf",
    about = "Copy hook sources from a registry into your project"
)]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Run as if started in this directory
    #[arg(long, global = true, value_name = "DIR")]
    cwd: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add hooks and their dependencies to the project
    Add(commands::add::AddArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Show an item and the files it would add
    Info(commands::info::InfoArgs),
    /// Write a hookshelf.toml for this project
    Init(commands::init::InitArgs),
    /// List registry items
    List(commands::list::ListArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cwd = match cli.cwd {
        Some(dir) => dir
            .canonicalize()
            .with_context(|| format!("Cannot use {} as working directory", dir.display()))?,
        None => std::env::current_dir().context("Cannot determine working directory")?,
    };

    match cli.command {
        Commands::Add(args) => commands::add::run(args, &cwd),
        Commands::Config(args) => commands::config::run(args, &cwd),
        Commands::Info(args) => commands::info::run(args, &cwd),
        Commands::Init(args) => commands::init::run(args, &cwd),
        Commands::List(args) => commands::list::run(args, &cwd),
    }
}
