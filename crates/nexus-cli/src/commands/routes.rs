use anyhow::{Context, Result};
use colored::Colorize;
use nexus::{Config, RouteRecord, RouteTable};

pub fn execute(config: Config, all: bool) -> Result<()> {
    let table = RouteTable::scan(&config.pages.dir, &config.pages.extensions)
        .with_context(|| format!("Failed to scan {}", config.pages.dir.display()))?;

    if all {
        print_routes(&table.records());
    } else {
        print_routes(&table.routes());
    }

    Ok(())
}

/// Prints one line per route: pattern, then the mirrored module
pub fn print_routes(routes: &[RouteRecord]) {
    if routes.is_empty() {
        println!("  {} No pages found", "ℹ".cyan());
        return;
    }

    println!("{}", "Routes:".cyan().bold());
    let width = routes.iter().map(|r| r.pattern.len()).max().unwrap_or(0);
    for route in routes {
        let pattern = if route.is_reserved() {
            format!("{:width$}", route.pattern, width = width).dimmed()
        } else {
            format!("{:width$}", route.pattern, width = width).normal()
        };
        println!("  {} {}  {}", "→".green(), pattern, route.file);
    }
}
