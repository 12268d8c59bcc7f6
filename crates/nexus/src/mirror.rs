// File: src/mirror.rs
// Purpose: Copies page sources into the build output tree under their output names

use nexus_router::output_file;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{NexusError, Result};

/// Writes byte-for-byte copies of page files into the mirror directory
#[derive(Debug, Clone)]
pub struct Mirror {
    pages_dir: PathBuf,
    mirror_dir: PathBuf,
}

impl Mirror {
    pub fn new(pages_dir: impl Into<PathBuf>, mirror_dir: impl Into<PathBuf>) -> Self {
        Self {
            pages_dir: pages_dir.into(),
            mirror_dir: mirror_dir.into(),
        }
    }

    pub fn mirror_dir(&self) -> &Path {
        &self.mirror_dir
    }

    /// Destination of a page path inside the mirror directory
    pub fn destination(&self, path: &str) -> PathBuf {
        self.mirror_dir.join(output_file(path))
    }

    /// Copy the page at `path` to its output name, overwriting
    ///
    /// Parent directories are created as needed. Returns the destination.
    pub fn mirror(&self, path: &str) -> Result<PathBuf> {
        let source = self.pages_dir.join(path);
        let target = self.destination(path);

        let bytes = fs::read(&source).map_err(|e| NexusError::io(&source, e))?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| NexusError::io(parent, e))?;
        }
        fs::write(&target, bytes).map_err(|e| NexusError::io(&target, e))?;

        debug!("Mirrored {:?} -> {:?}", source, target);
        Ok(target)
    }

    /// Delete the mirrored copy with output name `file`
    ///
    /// A copy that is already gone is not an error.
    pub fn discard(&self, file: &str) -> Result<()> {
        let target = self.mirror_dir.join(file);
        match fs::remove_file(&target) {
            Ok(()) => {
                debug!("Discarded {:?}", target);
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(NexusError::io(&target, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_copies_under_output_name() {
        let dir = tempfile::tempdir().unwrap();
        let pages = dir.path().join("pages");
        fs::create_dir_all(pages.join("blog")).unwrap();
        fs::write(pages.join("blog/[slug].tsx"), "export default 1").unwrap();

        let mirror = Mirror::new(&pages, dir.path().join(".nexus/pages"));
        let target = mirror.mirror("blog/[slug].tsx").unwrap();

        assert_eq!(target, dir.path().join(".nexus/pages/blog/[slug].js"));
        assert_eq!(fs::read_to_string(target).unwrap(), "export default 1");
    }

    #[test]
    fn test_mirror_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let pages = dir.path().join("pages");
        fs::create_dir_all(&pages).unwrap();
        let mirror = Mirror::new(&pages, dir.path().join("out"));

        fs::write(pages.join("about.jsx"), "v1").unwrap();
        mirror.mirror("about.jsx").unwrap();
        fs::write(pages.join("about.jsx"), "v2").unwrap();
        let target = mirror.mirror("about.jsx").unwrap();

        assert_eq!(fs::read_to_string(target).unwrap(), "v2");
    }

    #[test]
    fn test_mirror_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = Mirror::new(dir.path().join("pages"), dir.path().join("out"));

        let err = mirror.mirror("gone.tsx").unwrap_err();
        assert!(matches!(err, NexusError::Io { .. }));
        assert!(!dir.path().join("out/gone.js").exists());
    }

    #[test]
    fn test_discard_removes_copy() {
        let dir = tempfile::tempdir().unwrap();
        let pages = dir.path().join("pages");
        fs::create_dir_all(pages.join("blog")).unwrap();
        fs::write(pages.join("blog/post.tsx"), "post").unwrap();

        let mirror = Mirror::new(&pages, dir.path().join("out"));
        let target = mirror.mirror("blog/post.tsx").unwrap();

        mirror.discard("blog/post.js").unwrap();
        assert!(!target.exists());
        // Already gone
        mirror.discard("blog/post.js").unwrap();
    }
}
