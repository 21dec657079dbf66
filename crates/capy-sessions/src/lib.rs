//! capy-sessions: Session catalog for Linux display managers.
//!
//! Provides:
//! - Discovery of session .desktop files in xsessions / wayland-sessions directories
//! - TryExec probing against absolute paths and `$PATH`
//! - An ordered, immutable catalog with the previously used session's index
//! - A synthetic failsafe session for X11 directories

mod catalog;
mod desktop_entry;
mod error;
mod exec;
mod paths;
mod scanner;
mod types;

pub use catalog::{CatalogConfig, SessionCatalog};
pub use desktop_entry::{ParsedEntry, parse_entry};
pub use error::CatalogError;
pub use exec::is_executable;
pub use paths::{
    DEFAULT_WAYLAND_SESSION_DIR, DEFAULT_X11_SESSION_DIR, default_session_sources, search_path,
    split_search_path,
};
pub use scanner::{FAILSAFE_FILE, scan_directory};
pub use types::{SessionEntry, SessionKind, SessionSource};
