// File: src/config.rs
// Purpose: Configuration parsing from nexus.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NexusError, Result};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "nexus.toml";

/// Project configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub pages: PagesConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub html: HtmlConfig,
}

/// Page discovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesConfig {
    /// Directory containing page files (default: "pages")
    #[serde(default = "default_pages_dir")]
    pub dir: PathBuf,

    /// Recognised page source extensions (default: tsx, jsx)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

/// Generated artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Build output directory (default: ".nexus")
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Entry module file name inside `out_dir` (default: "main.js")
    #[serde(default = "default_entry")]
    pub entry: String,

    /// Custom Tera template for the entry module
    #[serde(default)]
    pub template: Option<PathBuf>,
}

/// HTML shell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HtmlConfig {
    /// Where the shell is written (default: "index.html")
    #[serde(default = "default_html_path")]
    pub path: PathBuf,

    #[serde(default = "default_title")]
    pub title: String,
}

fn default_pages_dir() -> PathBuf {
    PathBuf::from("pages")
}

fn default_extensions() -> Vec<String> {
    nexus_router::DEFAULT_EXTENSIONS
        .iter()
        .map(|e| e.to_string())
        .collect()
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(".nexus")
}

fn default_entry() -> String {
    "main.js".to_string()
}

fn default_html_path() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_title() -> String {
    "nexus".to_string()
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            dir: default_pages_dir(),
            extensions: default_extensions(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            entry: default_entry(),
            template: None,
        }
    }
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            path: default_html_path(),
            title: default_title(),
        }
    }
}

impl Config {
    /// Load configuration from a nexus.toml file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| NexusError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        toml::from_str(&content).map_err(|e| NexusError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load configuration from default path (./nexus.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(CONFIG_FILE)
    }

    /// Re-roots every relative path of this config under `root`
    pub fn rooted_at(mut self, root: &Path) -> Self {
        self.pages.dir = root.join(&self.pages.dir);
        self.build.out_dir = root.join(&self.build.out_dir);
        self.build.template = self.build.template.map(|t| root.join(t));
        self.html.path = root.join(&self.html.path);
        self
    }

    /// Full path of the generated entry module
    pub fn entry_path(&self) -> PathBuf {
        self.build.out_dir.join(&self.build.entry)
    }

    /// Directory receiving the mirrored page modules
    pub fn mirror_dir(&self) -> PathBuf {
        self.build.out_dir.join(nexus_router::MIRROR_DIR)
    }
}
