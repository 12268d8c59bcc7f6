//! # nexus router
//!
//! Pure file-system page classification for the nexus client-side router.
//!
//! Every page file under the page root becomes exactly one [`RouteRecord`]:
//! - Static pages (`about.tsx` → `/about`)
//! - Index pages (`blog/index.tsx` → `/blog`)
//! - Dynamic parameters (`blog/[slug].tsx` → `/blog/:slug`)
//! - Catch-all pages (`docs/[...rest].tsx` → `/docs/*rest`)
//! - The reserved application shell (`app.tsx`) and not-found page (`404.tsx`)
//!
//! Classification never touches the filesystem and never looks at sibling
//! files, so it can run in any order.
//!
//! ## Example
//!
//! ```
//! use nexus_router::classify;
//!
//! let route = classify("blog/[slug].tsx");
//! assert_eq!(route.file, "blog/[slug].js");
//! assert_eq!(route.depth, 2);
//! assert_eq!(route.pattern, "/blog/:slug");
//! assert_eq!(route.component, "./pages/blog/[slug].js");
//! ```

use serde::Serialize;

pub mod path;
pub mod route;

pub use path::{is_page, page_path, strip_extension, DEFAULT_EXTENSIONS, OUTPUT_EXTENSION};
pub use route::{classify_segment, parse_pattern, PatternSegmentType};

/// Directory, relative to the entry module, holding the mirrored page modules
pub const MIRROR_DIR: &str = "pages";

/// Stem of the application shell page at the page root
pub const APP_STEM: &str = "app";

/// Stem of the not-found page at the page root
pub const NOT_FOUND_STEM: &str = "404";

/// Pattern of the application shell (wraps every route)
pub const APP_PATTERN: &str = "";

/// Pattern of the not-found page (matches anything left unmatched)
pub const NOT_FOUND_PATTERN: &str = "*";

/// A route derived from one page file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RouteRecord {
    /// Output file name of the mirrored module, relative to the mirror dir
    pub file: String,
    /// Number of `/`-separated segments in the page path
    pub depth: usize,
    /// URL pattern like "/blog/:slug"
    pub pattern: String,
    /// Import specifier of the page module, relative to the entry module
    pub component: String,
}

/// Kind of reserved page, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reserved {
    /// Application shell rendered around every route
    App,
    /// Page rendered when no route matches
    NotFound,
}

impl Reserved {
    /// Detects a reserved page from its output file name
    ///
    /// Only files at the page root are reserved; `admin/app.js` is an
    /// ordinary route.
    pub fn from_file(file: &str) -> Option<Self> {
        match strip_extension(file) {
            APP_STEM => Some(Reserved::App),
            NOT_FOUND_STEM => Some(Reserved::NotFound),
            _ => None,
        }
    }

    /// URL pattern assigned to this reserved page
    pub fn pattern(self) -> &'static str {
        match self {
            Reserved::App => APP_PATTERN,
            Reserved::NotFound => NOT_FOUND_PATTERN,
        }
    }
}

impl RouteRecord {
    /// Which reserved page this record is, if any
    pub fn reserved(&self) -> Option<Reserved> {
        Reserved::from_file(&self.file)
    }

    /// Whether this record is excluded from the public route list
    pub fn is_reserved(&self) -> bool {
        self.reserved().is_some()
    }
}

/// Derives the output file name of a page path
///
/// ```
/// use nexus_router::output_file;
///
/// assert_eq!(output_file("index.tsx"), "index.js");
/// assert_eq!(output_file("blog/[slug].jsx"), "blog/[slug].js");
/// ```
pub fn output_file(path: &str) -> String {
    format!("{}.{}", strip_extension(path), OUTPUT_EXTENSION)
}

/// Classifies a page path into a route record (pure, total)
///
/// `path` is relative to the page root and `/`-separated. See the crate
/// documentation for the pattern conventions.
pub fn classify(path: &str) -> RouteRecord {
    let file = output_file(path);
    let depth = path.split('/').count();

    let pattern = match Reserved::from_file(&file) {
        Some(reserved) => reserved.pattern().to_string(),
        None => parse_pattern(strip_extension(path)),
    };

    let component = format!("./{}/{}", MIRROR_DIR, file);

    RouteRecord {
        file,
        depth,
        pattern,
        component,
    }
}
