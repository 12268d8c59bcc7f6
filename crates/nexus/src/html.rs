// File: src/html.rs
// Purpose: Writes the static HTML shell that loads the generated entry module

use maud::{html, Markup, DOCTYPE};
use std::fs;
use std::path::Path;

use crate::error::{NexusError, Result};

/// Id of the element the client router mounts into
pub const MOUNT_ID: &str = "nexus";

/// Renders the HTML shell
///
/// `entry_src` is the script URL of the entry module, relative to the shell.
pub fn render_shell(title: &str, entry_src: &str) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
            }
            body {
                div id=(MOUNT_ID) {}
                script type="module" src=(entry_src) {}
            }
        }
    }
}

/// Writes the HTML shell to `path`, overwriting
pub fn write_shell(path: &Path, title: &str, entry_src: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| NexusError::io(parent, e))?;
    }
    fs::write(path, render_shell(title, entry_src).into_string())
        .map_err(|e| NexusError::io(path, e))
}
