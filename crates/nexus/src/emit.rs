// File: src/emit.rs
// Purpose: Renders the route list into the generated entry module

use nexus_router::RouteRecord;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use tracing::debug;

use crate::error::{NexusError, Result};
use crate::html::MOUNT_ID;

/// Built-in entry module template
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/main.js.tera");

/// Everything the entry module is rendered from
///
/// `app` wraps every page and `not_found` serves paths no route matches.
/// Both are `null` in the template when the page does not exist.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EntryModule<'a> {
    pub routes: &'a [RouteRecord],
    pub app: Option<&'a RouteRecord>,
    pub not_found: Option<&'a RouteRecord>,
}

impl<'a> EntryModule<'a> {
    /// Module for `routes` without reserved pages
    pub fn new(routes: &'a [RouteRecord]) -> Self {
        Self {
            routes,
            app: None,
            not_found: None,
        }
    }

    pub fn with_app(mut self, app: Option<&'a RouteRecord>) -> Self {
        self.app = app;
        self
    }

    pub fn with_not_found(mut self, not_found: Option<&'a RouteRecord>) -> Self {
        self.not_found = not_found;
        self
    }
}

/// Writes the entry module that wires every route to its page component
#[derive(Debug, Clone)]
pub struct EntryEmitter {
    out_path: PathBuf,
    template: String,
}

impl EntryEmitter {
    /// Emitter using the built-in template
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// Emitter using a custom Tera template file
    pub fn with_template_file(out_path: impl Into<PathBuf>, template: &Path) -> Result<Self> {
        let source = fs::read_to_string(template).map_err(|source| NexusError::Template {
            path: template.to_path_buf(),
            source,
        })?;

        Ok(Self {
            out_path: out_path.into(),
            template: source,
        })
    }

    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// Render the module text without touching the filesystem
    ///
    /// The template sees `routes` in the given order, the optional `app` and
    /// `not_found` records, and the `mount_id` of the HTML shell.
    pub fn render(&self, module: &EntryModule<'_>) -> Result<String> {
        let mut context = Context::from_serialize(module)?;
        context.insert("mount_id", MOUNT_ID);
        Ok(Tera::one_off(&self.template, &context, false)?)
    }

    /// Render and write the entry module, overwriting any previous one
    pub fn emit(&self, module: &EntryModule<'_>) -> Result<()> {
        let text = self.render(module)?;

        if let Some(parent) = self.out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| NexusError::io(parent, e))?;
        }
        fs::write(&self.out_path, text).map_err(|e| NexusError::io(&self.out_path, e))?;

        debug!("Emitted {} routes to {:?}", module.routes.len(), self.out_path);
        Ok(())
    }
}
