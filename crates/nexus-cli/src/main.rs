mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nexus::Config;
use std::env;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nexus")]
#[command(version, about = "nexus CLI - file-based routing for client-side apps", long_about = None)]
struct Cli {
    /// Config file (relative paths inside it resolve against its directory)
    #[arg(short, long, default_value = nexus::config::CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate everything, then keep it in sync with the pages directory
    Dev,

    /// Generate the entry module, mirrored pages and HTML shell once
    Build,

    /// Print the route list
    Routes {
        /// Also list the reserved app shell and not-found pages
        #[arg(short, long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    // Execute command
    match cli.command {
        Commands::Dev => commands::dev::execute(config)?,
        Commands::Build => commands::build::execute(config)?,
        Commands::Routes { all } => commands::routes::execute(config, all)?,
    }

    Ok(())
}

/// Loads the config and anchors its paths at the config file's directory
fn load_config(path: &Path) -> Result<Config> {
    let config = Config::load(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    let root = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent.to_path_buf(),
        None => env::current_dir()?,
    };

    Ok(config.rooted_at(&root))
}
