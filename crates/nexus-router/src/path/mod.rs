/// Page path utilities
///
/// A *page path* is the location of a page file relative to the page root,
/// always `/`-separated regardless of platform (`blog/[slug].tsx`).

use std::path::{Component, Path};

/// Page source extensions recognised by default
pub const DEFAULT_EXTENSIONS: &[&str] = &["tsx", "jsx"];

/// Extension of every mirrored page module
pub const OUTPUT_EXTENSION: &str = "js";

/// Converts a filesystem path into a page path relative to `root`
///
/// Returns `None` when `path` does not live under `root` or names the root
/// itself.
///
/// # Examples
///
/// ```
/// use nexus_router::path::page_path;
/// use std::path::Path;
///
/// let page = page_path(Path::new("/app/pages"), Path::new("/app/pages/blog/[slug].tsx"));
/// assert_eq!(page.as_deref(), Some("blog/[slug].tsx"));
///
/// assert_eq!(page_path(Path::new("/app/pages"), Path::new("/app/src/main.tsx")), None);
/// ```
pub fn page_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;

    let segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}

/// Checks whether `path` carries one of the given source extensions
pub fn is_page<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |ext| extensions.iter().any(|x| x.as_ref() == ext))
}

/// Strips the extension from the file name of a page path
///
/// Dots in directory names and a leading dot in the file name are kept.
///
/// ```
/// use nexus_router::path::strip_extension;
///
/// assert_eq!(strip_extension("blog/[...rest].tsx"), "blog/[...rest]");
/// assert_eq!(strip_extension("v1.2/index"), "v1.2/index");
/// ```
pub fn strip_extension(path: &str) -> &str {
    let name_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[name_start..].rfind('.') {
        Some(dot) if dot > 0 => &path[..name_start + dot],
        _ => path,
    }
}
