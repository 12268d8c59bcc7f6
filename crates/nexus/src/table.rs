// File: src/table.rs
// Purpose: In-memory route table keyed by output file

use nexus_router::{classify, is_page, page_path, Reserved, RouteRecord};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{NexusError, Result};

/// Route records for every page under a page root
///
/// Records are keyed by their output `file`, so adding the same page twice
/// (or the same page under both source extensions) replaces the earlier
/// record instead of duplicating it.
#[derive(Debug, Clone)]
pub struct RouteTable {
    root: PathBuf,
    extensions: Vec<String>,
    records: HashMap<String, RouteRecord>,
}

impl RouteTable {
    /// Create an empty table for the given page root
    pub fn new(root: impl Into<PathBuf>, extensions: &[String]) -> Self {
        Self {
            root: root.into(),
            extensions: extensions.to_vec(),
            records: HashMap::new(),
        }
    }

    /// Create a table populated from every page currently under `root`
    pub fn scan(root: impl Into<PathBuf>, extensions: &[String]) -> Result<Self> {
        let mut table = Self::new(root, extensions);
        for path in table.paths()? {
            table.add_route(&path);
        }
        debug!("Scanned {} pages under {:?}", table.len(), table.root);
        Ok(table)
    }

    /// Page root this table was built from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Recognised page source extensions
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Lists the page paths currently on disk, sorted
    ///
    /// This walks the page root every time and does not consult the table.
    /// A missing page root yields no paths.
    pub fn paths(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = entry.map_err(|source| NexusError::Scan {
                root: self.root.clone(),
                source,
            })?;

            if !entry.file_type().is_file() || !is_page(entry.path(), &self.extensions) {
                continue;
            }

            if let Some(page) = page_path(&self.root, entry.path()) {
                paths.push(page);
            }
        }

        paths.sort();
        Ok(paths)
    }

    /// Classify `path` and upsert its record, returning the replaced one
    pub fn add_route(&mut self, path: &str) -> Option<RouteRecord> {
        let record = classify(path);
        self.records.insert(record.file.clone(), record)
    }

    /// Remove the record of `path`, if present
    pub fn remove_route(&mut self, path: &str) -> Option<RouteRecord> {
        self.remove_file(&classify(path).file)
    }

    /// Remove the record with output file `file`, if present
    pub fn remove_file(&mut self, file: &str) -> Option<RouteRecord> {
        self.records.remove(file)
    }

    /// Puts a previously removed or replaced record back
    pub(crate) fn restore(&mut self, record: RouteRecord) {
        self.records.insert(record.file.clone(), record);
    }

    /// Public route list: reserved pages excluded, sorted by (depth, file)
    ///
    /// Returns a fresh snapshot; later mutations do not affect it.
    pub fn routes(&self) -> Vec<RouteRecord> {
        let mut routes: Vec<RouteRecord> = self
            .records
            .values()
            .filter(|r| !r.is_reserved())
            .cloned()
            .collect();
        sort_routes(&mut routes);
        routes
    }

    /// Every record, reserved pages included, sorted by (depth, file)
    pub fn records(&self) -> Vec<RouteRecord> {
        let mut records: Vec<RouteRecord> = self.records.values().cloned().collect();
        sort_routes(&mut records);
        records
    }

    /// The reserved record of the given kind, if that page exists
    pub fn reserved(&self, kind: Reserved) -> Option<&RouteRecord> {
        self.records.values().find(|r| r.reserved() == Some(kind))
    }

    /// Looks up a record by output file
    pub fn get(&self, file: &str) -> Option<&RouteRecord> {
        self.records.get(file)
    }

    /// Number of records, reserved pages included
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Sorts routes by depth, then output file
fn sort_routes(routes: &mut [RouteRecord]) {
    routes.sort_by(|a, b| a.depth.cmp(&b.depth).then_with(|| a.file.cmp(&b.file)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn table_with(paths: &[&str]) -> RouteTable {
        let mut table = RouteTable::new("pages", &["tsx".to_string(), "jsx".to_string()]);
        for path in paths {
            table.add_route(path);
        }
        table
    }

    fn files(routes: &[RouteRecord]) -> Vec<&str> {
        routes.iter().map(|r| r.file.as_str()).collect()
    }

    #[test]
    fn test_routes_sorted_by_depth_then_file() {
        let table = table_with(&["index.tsx", "about.tsx", "blog/[slug].tsx", "404.tsx"]);
        assert_eq!(
            files(&table.routes()),
            vec!["about.js", "index.js", "blog/[slug].js"]
        );
    }

    #[test]
    fn test_routes_exclude_reserved_but_records_keep_them() {
        let table = table_with(&["index.tsx", "app.tsx", "404.tsx"]);
        assert_eq!(files(&table.routes()), vec!["index.js"]);
        assert_eq!(table.len(), 3);
        assert_eq!(files(&table.records()), vec!["404.js", "app.js", "index.js"]);
        assert!(table.reserved(Reserved::App).is_some());
        assert!(table.reserved(Reserved::NotFound).is_some());
    }

    #[test]
    fn test_duplicate_add_replaces() {
        let mut table = table_with(&["about.tsx"]);
        let previous = table.add_route("about.tsx");
        assert!(previous.is_some());
        assert_eq!(table.routes().len(), 1);

        // Same output file from the other extension
        table.add_route("about.jsx");
        assert_eq!(files(&table.routes()), vec!["about.js"]);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut table = table_with(&["index.tsx"]);
        assert!(table.remove_route("missing.tsx").is_none());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_remove_file_uses_output_name() {
        let mut table = table_with(&["blog/post.tsx"]);

        let removed = table.remove_file("blog/post.js").unwrap();
        assert_eq!(removed.pattern, "/blog/post");
        assert!(table.is_empty());
        assert!(table.remove_file("blog/post.js").is_none());
    }

    #[test]
    fn test_restore_puts_record_back() {
        let mut table = table_with(&["index.tsx", "about.tsx"]);
        let removed = table.remove_route("about.tsx").unwrap();
        table.restore(removed);
        assert_eq!(files(&table.routes()), vec!["about.js", "index.js"]);
    }

    #[test]
    fn test_paths_lists_pages_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("pages");
        fs::create_dir_all(root.join("blog")).unwrap();
        fs::write(root.join("index.tsx"), "").unwrap();
        fs::write(root.join("about.jsx"), "").unwrap();
        fs::write(root.join("blog/[slug].tsx"), "").unwrap();
        fs::write(root.join("styles.css"), "").unwrap();

        let table = RouteTable::new(&root, &["tsx".to_string(), "jsx".to_string()]);
        assert_eq!(
            table.paths().unwrap(),
            vec!["about.jsx", "blog/[slug].tsx", "index.tsx"]
        );
        // paths() does not seed the table
        assert!(table.is_empty());
    }

    #[test]
    fn test_scan_missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let table = RouteTable::scan(dir.path().join("pages"), &["tsx".to_string()]).unwrap();
        assert!(table.is_empty());
    }
}
