// File: src/watch.rs
// Purpose: Turns filesystem notifications into page events and applies them one at a time

use nexus_router::{is_page, page_path};
use notify::event::{CreateKind, ModifyKind, RemoveKind};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::{error, info};

use crate::error::{NexusError, Result};
use crate::site::Site;

/// Capacity of the channel between the notify thread and the loop
const EVENT_BUFFER: usize = 100;

/// A change under the page root, identified by its page path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Add(String),
    Change(String),
    Remove(String),
    /// A directory was created, moved or removed; the pages below it may
    /// have appeared or vanished without events of their own
    Resync(String),
}

impl PageEvent {
    pub fn path(&self) -> &str {
        match self {
            PageEvent::Add(p)
            | PageEvent::Change(p)
            | PageEvent::Remove(p)
            | PageEvent::Resync(p) => p,
        }
    }
}

/// Translates one notify event into page events
///
/// Paths outside `root` are dropped. Page files map to add/change/remove;
/// renames are reported per path, so a page that still exists counts as
/// added and one that is gone counts as removed. Any other path that is
/// created as a directory, renamed or removed asks for a resync, since a
/// directory move reports only the directory itself.
pub fn page_events<S: AsRef<str>>(
    event: &Event,
    root: &Path,
    extensions: &[S],
) -> Vec<PageEvent> {
    let mut events: Vec<PageEvent> = Vec::new();
    for path in &event.paths {
        let Some(page) = page_path(root, path) else {
            continue;
        };
        let page_event = if is_page(path, extensions) {
            file_event(&event.kind, path, page)
        } else {
            tree_event(&event.kind, path, page)
        };
        if let Some(page_event) = page_event {
            if !events.contains(&page_event) {
                events.push(page_event);
            }
        }
    }
    events
}

fn file_event(kind: &EventKind, path: &Path, page: String) -> Option<PageEvent> {
    match kind {
        EventKind::Create(CreateKind::File) | EventKind::Create(CreateKind::Any) => {
            Some(PageEvent::Add(page))
        }
        EventKind::Modify(ModifyKind::Name(_)) => {
            if path.exists() {
                Some(PageEvent::Add(page))
            } else {
                Some(PageEvent::Remove(page))
            }
        }
        EventKind::Modify(ModifyKind::Metadata(_)) => None,
        EventKind::Modify(_) => Some(PageEvent::Change(page)),
        EventKind::Remove(_) => Some(PageEvent::Remove(page)),
        _ => None,
    }
}

fn tree_event(kind: &EventKind, path: &Path, page: String) -> Option<PageEvent> {
    match kind {
        EventKind::Create(CreateKind::Folder)
        | EventKind::Modify(ModifyKind::Name(_))
        | EventKind::Remove(RemoveKind::Folder)
        | EventKind::Remove(RemoveKind::Any) => Some(PageEvent::Resync(page)),
        EventKind::Create(CreateKind::Any) if path.is_dir() => Some(PageEvent::Resync(page)),
        _ => None,
    }
}

/// Watches the page root and forwards page events over a channel
pub struct PageWatcher {
    rx: mpsc::Receiver<PageEvent>,
    watcher: RecommendedWatcher,
}

impl PageWatcher {
    /// Start watching `root` recursively
    pub fn new(root: &Path, extensions: &[String]) -> Result<Self> {
        let root: PathBuf = root
            .canonicalize()
            .map_err(|e| NexusError::io(root, e))?;
        let extensions = extensions.to_vec();
        let (tx, rx) = mpsc::channel(EVENT_BUFFER);

        let watch_root = root.clone();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            match res {
                Ok(event) => {
                    for page_event in page_events(&event, &watch_root, &extensions) {
                        if tx.blocking_send(page_event).is_err() {
                            // Loop has shut down
                            return;
                        }
                    }
                }
                Err(e) => error!("Watch error: {:?}", e),
            }
        })?;

        watcher.watch(&root, RecursiveMode::Recursive)?;
        info!("Watching: {:?}", root);

        Ok(Self { rx, watcher })
    }

    /// Split into the watcher guard and the event receiver
    ///
    /// Events stop once the guard is dropped.
    pub fn into_parts(self) -> (RecommendedWatcher, mpsc::Receiver<PageEvent>) {
        (self.watcher, self.rx)
    }
}

/// Single consumer applying page events to a shared [`Site`]
pub struct WatchLoop {
    site: Arc<RwLock<Site>>,
}

impl WatchLoop {
    pub fn new(site: Arc<RwLock<Site>>) -> Self {
        Self { site }
    }

    /// Apply events until the channel closes
    ///
    /// Each event holds the write lock for its whole mutate-and-emit step.
    /// A failing event is logged and dropped; the loop keeps going.
    pub async fn run(self, mut events: mpsc::Receiver<PageEvent>) {
        while let Some(event) = events.recv().await {
            let mut site = self.site.write().await;
            if let Err(e) = site.apply(&event) {
                error!("Dropped {:?}: {}", event, e);
            }
        }
        info!("Watch loop stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{DataChange, RenameMode};

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    fn translate(kind: EventKind, path: &str) -> Vec<PageEvent> {
        page_events(&event(kind, path), Path::new("/site/pages"), &["tsx", "jsx"])
    }

    #[test]
    fn test_create_is_add() {
        assert_eq!(
            translate(EventKind::Create(CreateKind::File), "/site/pages/blog/[slug].tsx"),
            vec![PageEvent::Add("blog/[slug].tsx".to_string())]
        );
    }

    #[test]
    fn test_folder_create_is_resync() {
        assert_eq!(
            translate(EventKind::Create(CreateKind::Folder), "/site/pages/blog"),
            vec![PageEvent::Resync("blog".to_string())]
        );
    }

    #[test]
    fn test_directory_move_is_resync() {
        let moved_out = translate(
            EventKind::Modify(ModifyKind::Name(RenameMode::From)),
            "/site/pages/blog",
        );
        assert_eq!(moved_out, vec![PageEvent::Resync("blog".to_string())]);

        let renamed = page_events(
            &Event::new(EventKind::Modify(ModifyKind::Name(RenameMode::Both)))
                .add_path(PathBuf::from("/site/pages/blog"))
                .add_path(PathBuf::from("/site/pages/posts")),
            Path::new("/site/pages"),
            &["tsx"],
        );
        assert_eq!(
            renamed,
            vec![
                PageEvent::Resync("blog".to_string()),
                PageEvent::Resync("posts".to_string()),
            ]
        );
    }

    #[test]
    fn test_directory_remove_is_resync() {
        assert_eq!(
            translate(EventKind::Remove(RemoveKind::Folder), "/site/pages/blog"),
            vec![PageEvent::Resync("blog".to_string())]
        );
    }

    #[test]
    fn test_page_root_itself_is_dropped() {
        assert!(translate(EventKind::Remove(RemoveKind::Folder), "/site/pages").is_empty());
    }

    #[test]
    fn test_data_modify_is_change() {
        assert_eq!(
            translate(
                EventKind::Modify(ModifyKind::Data(DataChange::Content)),
                "/site/pages/about.jsx"
            ),
            vec![PageEvent::Change("about.jsx".to_string())]
        );
    }

    #[test]
    fn test_remove_is_remove() {
        assert_eq!(
            translate(EventKind::Remove(RemoveKind::File), "/site/pages/about.tsx"),
            vec![PageEvent::Remove("about.tsx".to_string())]
        );
    }

    #[test]
    fn test_rename_of_missing_path_is_remove() {
        assert_eq!(
            translate(
                EventKind::Modify(ModifyKind::Name(RenameMode::From)),
                "/site/pages/old.tsx"
            ),
            vec![PageEvent::Remove("old.tsx".to_string())]
        );
    }

    #[test]
    fn test_non_pages_are_dropped() {
        assert!(translate(EventKind::Create(CreateKind::File), "/site/pages/styles.css").is_empty());
        assert!(
            translate(EventKind::Modify(ModifyKind::Data(DataChange::Any)), "/site/pages/notes.md")
                .is_empty()
        );
        assert!(translate(EventKind::Create(CreateKind::File), "/site/src/main.tsx").is_empty());
    }

    #[test]
    fn test_event_path() {
        assert_eq!(PageEvent::Change("a.tsx".to_string()).path(), "a.tsx");
        assert_eq!(PageEvent::Resync("blog".to_string()).path(), "blog");
    }
}
