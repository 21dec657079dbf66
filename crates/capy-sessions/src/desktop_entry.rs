//! Session desktop entry parsing.
//!
//! Only `Name=`, `Exec=`, `Comment=` and `TryExec=` are read. Lines are
//! matched by prefix with no section handling and no escape processing.

use crate::exec::is_executable;
use crate::types::SessionKind;
use std::path::PathBuf;

const WAYLAND_SUFFIX: &str = " (Wayland)";

/// Fields read from a session .desktop file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedEntry {
    pub name: String,
    pub exec: String,
    pub comment: String,
    /// Result of the last `TryExec=` probe, true if there was none.
    pub exec_allowed: bool,
}

/// Parse the contents of a session .desktop file.
///
/// Never fails. When several `TryExec=` lines are present only the last one
/// decides `exec_allowed`.
pub fn parse_entry(content: &str, kind: SessionKind, search_paths: &[PathBuf]) -> ParsedEntry {
    let mut entry = ParsedEntry {
        exec_allowed: true,
        ..Default::default()
    };

    for line in content.lines() {
        if let Some(name) = line.strip_prefix("Name=") {
            entry.name = match kind {
                SessionKind::Wayland => format!("{}{}", name, WAYLAND_SUFFIX),
                SessionKind::X11 => name.to_string(),
            };
        } else if let Some(exec) = line.strip_prefix("Exec=") {
            entry.exec = exec.to_string();
        } else if let Some(comment) = line.strip_prefix("Comment=") {
            entry.comment = comment.to_string();
        } else if let Some(try_exec) = line.strip_prefix("TryExec=") {
            entry.exec_allowed = is_executable(try_exec, search_paths);
        }
    }

    entry
}
