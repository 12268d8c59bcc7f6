use anyhow::{Context, Result};
use colored::Colorize;
use nexus::{Config, Site};

pub fn execute(config: Config) -> Result<()> {
    println!("{}", "Generating router...".green().bold());
    println!();

    let site = Site::setup(config).context("Failed to generate router")?;

    super::routes::print_routes(&site.routes());
    println!();
    println!(
        "  {} Entry module: {}",
        "✓".green(),
        site.config().entry_path().display()
    );
    println!(
        "  {} HTML shell: {}",
        "✓".green(),
        site.config().html.path.display()
    );

    Ok(())
}
