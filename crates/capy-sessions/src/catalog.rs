//! Session Catalog implementation.

use crate::error::CatalogError;
use crate::paths::{default_session_sources, search_path};
use crate::scanner::scan_directory;
use crate::types::{SessionEntry, SessionSource};
use log::info;

use std::path::PathBuf;

/// Inputs for building a [`SessionCatalog`].
#[derive(Clone, Debug, Default)]
pub struct CatalogConfig {
    /// Directories to scan, in order.
    pub sources: Vec<SessionSource>,
    /// File name of the previously selected session.
    pub last_session: String,
    /// Directories searched for bare `TryExec=` names.
    /// `None` snapshots `$PATH` at the start of each directory scan.
    pub search_paths: Option<Vec<PathBuf>>,
}

impl CatalogConfig {
    /// Config scanning the default xsessions and wayland-sessions directories.
    pub fn with_defaults(last_session: impl Into<String>) -> Self {
        Self {
            sources: default_session_sources(),
            last_session: last_session.into(),
            search_paths: None,
        }
    }
}

/// Immutable, ordered list of available sessions.
#[derive(Clone, Debug)]
pub struct SessionCatalog {
    sessions: Vec<SessionEntry>,
    last_index: usize,
}

impl SessionCatalog {
    /// Scan every configured source and build the catalog.
    pub fn build(config: &CatalogConfig) -> Self {
        info!("Scanning session directories...");

        let mut sessions = Vec::new();
        for source in &config.sources {
            let found = match &config.search_paths {
                Some(paths) => scan_directory(source.kind, &source.directory, paths),
                None => scan_directory(source.kind, &source.directory, &search_path()),
            };
            sessions.extend(found);
        }

        let last_index = sessions
            .iter()
            .position(|s| s.file == config.last_session)
            .unwrap_or(0);

        info!(
            "Session catalog ready: {} sessions, last index {}",
            sessions.len(),
            last_index
        );

        Self {
            sessions,
            last_index,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Get the session at `index`.
    pub fn get(&self, index: usize) -> Result<&SessionEntry, CatalogError> {
        self.sessions.get(index).ok_or(CatalogError::OutOfRange {
            index,
            len: self.sessions.len(),
        })
    }

    /// Position of the previously selected session, 0 if it wasn't found.
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    /// The session at [`last_index`](Self::last_index), if the catalog isn't empty.
    pub fn last_session(&self) -> Option<&SessionEntry> {
        self.sessions.get(self.last_index)
    }

    /// Index of the first session with the given file name.
    pub fn position(&self, file: &str) -> Option<usize> {
        self.sessions.iter().position(|s| s.file == file)
    }

    pub fn entries(&self) -> &[SessionEntry] {
        &self.sessions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SessionEntry> {
        self.sessions.iter()
    }
}

impl<'a> IntoIterator for &'a SessionCatalog {
    type Item = &'a SessionEntry;
    type IntoIter = std::slice::Iter<'a, SessionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
