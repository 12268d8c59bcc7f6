//! # nexus
//!
//! Keeps a client-side router in sync with a directory of page components.
//!
//! - [`RouteTable`]: one record per page, sorted and filtered for the router
//! - [`Mirror`]: copies page sources into the build output under their module names
//! - [`EntryEmitter`]: renders the route list into the generated entry module
//! - [`Site`]: owns all of the above and applies [`PageEvent`]s
//! - [`PageWatcher`] / [`WatchLoop`]: feed filesystem changes into a shared `Site`
//!
//! ```no_run
//! use nexus::{Config, Site};
//!
//! let site = Site::setup(Config::load_default()?)?;
//! for route in site.routes() {
//!     println!("{} -> {}", route.pattern, route.component);
//! }
//! # Ok::<(), nexus::NexusError>(())
//! ```

pub mod config;
pub mod emit;
pub mod error;
pub mod html;
pub mod mirror;
pub mod site;
pub mod table;
pub mod watch;

pub use config::Config;
pub use emit::{EntryEmitter, EntryModule};
pub use error::{NexusError, Result};
pub use mirror::Mirror;
pub use nexus_router::{classify, Reserved, RouteRecord};
pub use site::Site;
pub use table::RouteTable;
pub use watch::{PageEvent, PageWatcher, WatchLoop};
