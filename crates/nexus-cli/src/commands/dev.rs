use anyhow::{Context, Result};
use colored::Colorize;
use nexus::{Config, PageWatcher, Site, WatchLoop};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

pub fn execute(config: Config) -> Result<()> {
    println!("{}", "Preparing development environment...".green().bold());
    println!();

    // Initial scan and generation; any failure here aborts startup
    let site = Site::setup(config).context("Initial page scan failed")?;
    super::routes::print_routes(&site.routes());
    println!();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(watch(site))
}

async fn watch(site: Site) -> Result<()> {
    let pages = site.config().pages.clone();
    let watcher = PageWatcher::new(&pages.dir, &pages.extensions)
        .with_context(|| format!("Failed to watch {}", pages.dir.display()))?;
    let (_watcher, events) = watcher.into_parts();

    let site = Arc::new(RwLock::new(site));
    let reconcile = tokio::spawn(WatchLoop::new(site).run(events));

    println!("  {} Watching {} for changes", "👀".cyan(), pages.dir.display());
    println!("  {} Press Ctrl+C to stop", "ℹ".cyan());
    println!();

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result.context("Failed to listen for Ctrl+C")?;
            info!("Shutting down");
        }
        joined = reconcile => {
            joined.context("Watch loop terminated abnormally")?;
            warn!("Watch loop stopped; no longer watching");
        }
    }

    Ok(())
}
