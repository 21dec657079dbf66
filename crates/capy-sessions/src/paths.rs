//! Path helpers for session directories and the executable search path.

use crate::types::{SessionKind, SessionSource};
use std::ffi::OsStr;
use std::path::PathBuf;

pub const DEFAULT_X11_SESSION_DIR: &str = "/usr/share/xsessions";
pub const DEFAULT_WAYLAND_SESSION_DIR: &str = "/usr/share/wayland-sessions";

/// Default session directories, X11 first.
pub fn default_session_sources() -> Vec<SessionSource> {
    vec![
        SessionSource::new(SessionKind::X11, DEFAULT_X11_SESSION_DIR),
        SessionSource::new(SessionKind::Wayland, DEFAULT_WAYLAND_SESSION_DIR),
    ]
}

/// Snapshot of `$PATH` as an ordered list of directories.
pub fn search_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|value| split_search_path(&value))
        .unwrap_or_default()
}

/// Split a colon-separated search path, skipping empty segments.
pub fn split_search_path(value: impl AsRef<OsStr>) -> Vec<PathBuf> {
    std::env::split_paths(&value)
        .filter(|dir| !dir.as_os_str().is_empty())
        .collect()
}
