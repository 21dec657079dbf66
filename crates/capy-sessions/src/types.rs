//! Shared types for session discovery.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Display server protocol a session runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    X11,
    Wayland,
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionKind::X11 => write!(f, "x11"),
            SessionKind::Wayland => write!(f, "wayland"),
        }
    }
}

/// A launchable session discovered in a session directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionEntry {
    pub kind: SessionKind,
    /// Directory the entry was found in
    pub directory: PathBuf,
    /// File name, e.g. "plasma.desktop". Used as the session identity.
    pub file: String,
    /// Display name, with " (Wayland)" appended for Wayland sessions
    pub name: String,
    pub exec: String,
    pub comment: String,
}

/// A (kind, directory) pair registered with the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSource {
    pub kind: SessionKind,
    pub directory: PathBuf,
}

impl SessionSource {
    pub fn new(kind: SessionKind, directory: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            directory: directory.into(),
        }
    }
}
