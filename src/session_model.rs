//! Role-based list view over the session catalog, for list widgets.

use capy_sessions::SessionCatalog;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionRole {
    Directory,
    File,
    Name,
    Exec,
    Comment,
}

impl SessionRole {
    pub const ALL: [SessionRole; 5] = [
        SessionRole::Directory,
        SessionRole::File,
        SessionRole::Name,
        SessionRole::Exec,
        SessionRole::Comment,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SessionRole::Directory => "directory",
            SessionRole::File => "file",
            SessionRole::Name => "name",
            SessionRole::Exec => "exec",
            SessionRole::Comment => "comment",
        }
    }
}

pub struct SessionModel<'a> {
    catalog: &'a SessionCatalog,
}

impl<'a> SessionModel<'a> {
    pub fn new(catalog: &'a SessionCatalog) -> Self {
        Self { catalog }
    }

    pub fn role_names() -> HashMap<SessionRole, &'static str> {
        SessionRole::ALL.iter().map(|r| (*r, r.name())).collect()
    }

    pub fn row_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn last_index(&self) -> usize {
        self.catalog.last_index()
    }

    /// Value of `role` for `row`, `None` when the row doesn't exist.
    pub fn data(&self, row: usize, role: SessionRole) -> Option<String> {
        let session = self.catalog.get(row).ok()?;
        let value = match role {
            SessionRole::Directory => session.directory.to_string_lossy().into_owned(),
            SessionRole::File => session.file.clone(),
            SessionRole::Name => session.name.clone(),
            SessionRole::Exec => session.exec.clone(),
            SessionRole::Comment => session.comment.clone(),
        };
        Some(value)
    }
}
