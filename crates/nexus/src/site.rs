// File: src/site.rs
// Purpose: Owns the route table and keeps the generated artifacts in sync with it

use nexus_router::{output_file, page_path, Reserved, RouteRecord};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::emit::{EntryEmitter, EntryModule};
use crate::error::Result;
use crate::html::write_shell;
use crate::mirror::Mirror;
use crate::table::RouteTable;
use crate::watch::PageEvent;

/// The route table together with the writers of every generated artifact
///
/// One `Site` exists per process. It is built by [`Site::setup`] and then
/// driven by [`PageEvent`]s.
#[derive(Debug, Clone)]
pub struct Site {
    config: Config,
    table: RouteTable,
    mirror: Mirror,
    emitter: EntryEmitter,
}

impl Site {
    /// Scan the page directory and prepare the writers, without writing anything
    pub fn load(config: Config) -> Result<Self> {
        let table = RouteTable::scan(&config.pages.dir, &config.pages.extensions)?;
        let mirror = Mirror::new(&config.pages.dir, config.mirror_dir());
        let emitter = match &config.build.template {
            Some(template) => EntryEmitter::with_template_file(config.entry_path(), template)?,
            None => EntryEmitter::new(config.entry_path()),
        };

        Ok(Self {
            config,
            table,
            mirror,
            emitter,
        })
    }

    /// Scan, then write the mirrored tree, the entry module and the HTML shell
    pub fn setup(config: Config) -> Result<Self> {
        let site = Self::load(config)?;

        for path in site.table.paths()? {
            site.mirror.mirror(&path)?;
        }
        site.emit()?;
        site.write_html()?;

        info!(
            "Generated {} routes ({} pages) into {:?}",
            site.table.routes().len(),
            site.table.len(),
            site.config.build.out_dir
        );
        Ok(site)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Public route list of the underlying table
    pub fn routes(&self) -> Vec<RouteRecord> {
        self.table.routes()
    }

    /// Re-render the entry module from the current route list and reserved pages
    pub fn emit(&self) -> Result<()> {
        let routes = self.table.routes();
        let module = EntryModule::new(&routes)
            .with_app(self.table.reserved(Reserved::App))
            .with_not_found(self.table.reserved(Reserved::NotFound));
        self.emitter.emit(&module)
    }

    /// Write the HTML shell pointing at the entry module
    pub fn write_html(&self) -> Result<()> {
        let src = entry_src(&self.config.html.path, self.emitter.out_path());
        write_shell(&self.config.html.path, &self.config.html.title, &src)
    }

    /// Apply one filesystem event
    ///
    /// - Add: mirror, upsert the route, re-emit
    /// - Change: mirror only
    /// - Remove: remove the route, re-emit, delete the mirrored copy
    /// - Resync: reconcile the whole table with the disk, see [`Site::resync`]
    ///
    /// On failure the route table is left as it was before the event.
    pub fn apply(&mut self, event: &PageEvent) -> Result<()> {
        match event {
            PageEvent::Add(path) => {
                self.mirror.mirror(path)?;
                let previous = self.table.add_route(path);
                if let Err(e) = self.emit() {
                    self.table.remove_route(path);
                    if let Some(record) = previous {
                        self.table.restore(record);
                    }
                    return Err(e);
                }
                info!("Added page {}", path);
            }
            PageEvent::Change(path) => {
                self.mirror.mirror(path)?;
                debug!("Refreshed page {}", path);
            }
            PageEvent::Remove(path) => {
                let removed = self.table.remove_route(path);
                if let Err(e) = self.emit() {
                    if let Some(record) = removed {
                        self.table.restore(record);
                    }
                    return Err(e);
                }
                self.discard(&output_file(path));
                info!("Removed page {}", path);
            }
            PageEvent::Resync(dir) => {
                let (added, removed) = self.resync()?;
                info!("Resynced after {}: {} added, {} removed", dir, added, removed);
            }
        }
        Ok(())
    }

    /// Bring the table, the mirror and the entry module back in line with the disk
    ///
    /// Pages on disk without a record are mirrored and added, records whose
    /// page is gone are dropped together with their mirrored copy, and the
    /// entry module is emitted once if anything changed. Returns the number
    /// of added and removed records. On failure the table is unchanged.
    pub fn resync(&mut self) -> Result<(usize, usize)> {
        let paths = self.table.paths()?;
        let on_disk: HashSet<String> = paths.iter().map(|p| output_file(p)).collect();

        let added: Vec<&String> = paths
            .iter()
            .filter(|p| self.table.get(&output_file(p)).is_none())
            .collect();
        let stale: Vec<String> = self
            .table
            .records()
            .into_iter()
            .map(|r| r.file)
            .filter(|file| !on_disk.contains(file))
            .collect();

        if added.is_empty() && stale.is_empty() {
            return Ok((0, 0));
        }

        for path in &added {
            self.mirror.mirror(path)?;
        }

        let before = self.table.clone();
        for path in &added {
            self.table.add_route(path);
        }
        for file in &stale {
            self.table.remove_file(file);
        }
        if let Err(e) = self.emit() {
            self.table = before;
            return Err(e);
        }

        for file in &stale {
            self.discard(file);
        }
        Ok((added.len(), stale.len()))
    }

    /// Delete a mirrored copy whose record is already gone
    fn discard(&self, file: &str) {
        if let Err(e) = self.mirror.discard(file) {
            warn!("Failed to delete mirrored {}: {}", file, e);
        }
    }
}

/// Script URL of the entry module as seen from the HTML shell
fn entry_src(html_path: &Path, entry_path: &Path) -> String {
    let base = html_path.parent().unwrap_or_else(|| Path::new(""));
    match page_path(base, entry_path) {
        Some(relative) => format!("./{}", relative),
        None => entry_path.to_string_lossy().replace('\\', "/"),
    }
}
