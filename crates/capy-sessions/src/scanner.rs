//! Session directory scanning.

use crate::desktop_entry::parse_entry;
use crate::types::{SessionEntry, SessionKind};
use log::{debug, warn};

use std::fs;
use std::path::{Path, PathBuf};

const SESSION_FILE_SUFFIX: &str = ".desktop";

pub const FAILSAFE_FILE: &str = "failsafe";
const FAILSAFE_NAME: &str = "Failsafe";
const FAILSAFE_EXEC: &str = "failsafe";
const FAILSAFE_COMMENT: &str = "Failsafe Session";

/// Scan one session directory.
///
/// Entries come back in directory listing order. Files that can't be read or
/// whose `TryExec=` probe fails are dropped. X11 directories always end with
/// the failsafe session, even when the directory is missing.
pub fn scan_directory(
    kind: SessionKind,
    directory: &Path,
    search_paths: &[PathBuf],
) -> Vec<SessionEntry> {
    let mut sessions = Vec::new();

    let walker = walkdir::WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!("Skipping unreadable entry in {}: {}", directory.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let file = match entry.file_name().to_str() {
            Some(name) if name.ends_with(SESSION_FILE_SUFFIX) => name.to_string(),
            _ => continue,
        };

        let content = match fs::read(entry.path()) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Cannot read session file {}: {}", entry.path().display(), e);
                continue;
            }
        };

        let parsed = parse_entry(&String::from_utf8_lossy(&content), kind, search_paths);
        if !parsed.exec_allowed {
            debug!("Session {} hidden: TryExec target not executable", file);
            continue;
        }

        sessions.push(SessionEntry {
            kind,
            directory: directory.to_path_buf(),
            file,
            name: parsed.name,
            exec: parsed.exec,
            comment: parsed.comment,
        });
    }

    if kind == SessionKind::X11 {
        sessions.push(failsafe_session(directory));
    }

    debug!(
        "Found {} {} sessions in {}",
        sessions.len(),
        kind,
        directory.display()
    );

    sessions
}

fn failsafe_session(directory: &Path) -> SessionEntry {
    SessionEntry {
        kind: SessionKind::X11,
        directory: directory.to_path_buf(),
        file: FAILSAFE_FILE.to_string(),
        name: FAILSAFE_NAME.to_string(),
        exec: FAILSAFE_EXEC.to_string(),
        comment: FAILSAFE_COMMENT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::tests::create_executable;
    use tempfile::TempDir;

    fn write_session(dir: &Path, file: &str, content: &str) {
        fs::write(dir.join(file), content).unwrap();
    }

    fn files(sessions: &[SessionEntry]) -> Vec<&str> {
        sessions.iter().map(|s| s.file.as_str()).collect()
    }

    #[test]
    fn test_empty_x11_dir_has_only_failsafe() {
        let dir = TempDir::new().unwrap();
        let sessions = scan_directory(SessionKind::X11, dir.path(), &[]);

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].file, "failsafe");
        assert_eq!(sessions[0].name, "Failsafe");
        assert_eq!(sessions[0].exec, "failsafe");
        assert_eq!(sessions[0].comment, "Failsafe Session");
        assert_eq!(sessions[0].directory, dir.path());
    }

    #[test]
    fn test_missing_dir() {
        let missing = Path::new("/definitely/missing/xsessions");
        assert_eq!(files(&scan_directory(SessionKind::X11, missing, &[])), vec!["failsafe"]);
        assert!(scan_directory(SessionKind::Wayland, missing, &[]).is_empty());
    }

    #[test]
    fn test_wayland_dir_has_no_failsafe() {
        let dir = TempDir::new().unwrap();
        write_session(dir.path(), "gnome.desktop", "Name=GNOME\nExec=gnome-session\n");

        let sessions = scan_directory(SessionKind::Wayland, dir.path(), &[]);
        assert_eq!(files(&sessions), vec!["gnome.desktop"]);
        assert_eq!(sessions[0].name, "GNOME (Wayland)");
        assert_eq!(sessions[0].kind, SessionKind::Wayland);
    }

    #[test]
    fn test_filters_by_suffix_and_file_type() {
        let dir = TempDir::new().unwrap();
        write_session(dir.path(), "i3.desktop", "Name=i3\nExec=i3\n");
        write_session(dir.path(), "README", "Name=Readme\n");
        write_session(dir.path(), "i3.desktop.bak", "Name=Backup\n");
        fs::create_dir(dir.path().join("nested.desktop")).unwrap();
        write_session(
            &dir.path().join("nested.desktop"),
            "deep.desktop",
            "Name=Deep\n",
        );

        let sessions = scan_directory(SessionKind::X11, dir.path(), &[]);
        assert_eq!(files(&sessions), vec!["i3.desktop", "failsafe"]);
    }

    #[test]
    fn test_try_exec_filters_sessions() {
        let dir = TempDir::new().unwrap();
        let bin_dir = TempDir::new().unwrap();
        create_executable(bin_dir.path(), "startxfce4");
        let search = vec![bin_dir.path().to_path_buf()];

        write_session(
            dir.path(),
            "xfce.desktop",
            "Name=Xfce\nExec=startxfce4\nTryExec=startxfce4\n",
        );
        write_session(
            dir.path(),
            "ghost.desktop",
            "Name=Ghost\nExec=ghost\nTryExec=/definitely/missing/binary\n",
        );
        write_session(dir.path(), "plain.desktop", "Name=Plain\nExec=plain\n");

        let sessions = scan_directory(SessionKind::X11, dir.path(), &search);
        let mut found = files(&sessions);
        assert_eq!(found.pop(), Some("failsafe"));
        found.sort();
        assert_eq!(found, vec!["plain.desktop", "xfce.desktop"]);
    }

    #[test]
    fn test_invalid_utf8_is_parsed_lossily() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("odd.desktop"), b"Name=Odd\xff\nExec=odd\n").unwrap();

        let sessions = scan_directory(SessionKind::Wayland, dir.path(), &[]);
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].exec, "odd");
        assert!(sessions[0].name.starts_with("Odd"));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_is_skipped() {
        use crate::exec::tests::running_as_root;
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        if running_as_root(dir.path()) {
            return;
        }

        write_session(dir.path(), "i3.desktop", "Name=i3\nExec=i3\n");
        write_session(dir.path(), "locked.desktop", "Name=Locked\nExec=locked\n");
        let locked = dir.path().join("locked.desktop");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let sessions = scan_directory(SessionKind::X11, dir.path(), &[]);
        assert_eq!(files(&sessions), vec!["i3.desktop", "failsafe"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_session_file() {
        let dir = TempDir::new().unwrap();
        let store = TempDir::new().unwrap();
        write_session(store.path(), "real.desktop", "Name=Linked\nExec=linked\n");
        std::os::unix::fs::symlink(
            store.path().join("real.desktop"),
            dir.path().join("linked.desktop"),
        )
        .unwrap();

        let sessions = scan_directory(SessionKind::Wayland, dir.path(), &[]);
        assert_eq!(files(&sessions), vec!["linked.desktop"]);
        assert_eq!(sessions[0].name, "Linked (Wayland)");
    }
}
