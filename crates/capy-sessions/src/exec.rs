//! TryExec resolution.

use log::debug;
use std::path::{Path, PathBuf};

/// Check whether `path_or_name` names a file the current user may execute.
///
/// Absolute paths are checked directly. Anything else is looked up in
/// `search_paths` in order and the first executable hit wins. Lookup errors
/// count as "not executable".
pub fn is_executable(path_or_name: &str, search_paths: &[PathBuf]) -> bool {
    let path = Path::new(path_or_name);
    if path.is_absolute() {
        return check_candidate(path);
    }

    // Names like "bin/startx" are joined onto each search dir rather than
    // resolved against the working directory.
    if path.components().count() > 1 {
        return search_paths
            .iter()
            .any(|dir| check_candidate(&dir.join(path)));
    }

    if search_paths.is_empty() {
        return false;
    }

    let joined = match std::env::join_paths(search_paths) {
        Ok(j) => j,
        Err(e) => {
            debug!("Cannot search for {}: {}", path_or_name, e);
            return false;
        }
    };

    which::which_in(path_or_name, Some(joined), cwd()).is_ok()
}

/// Existing regular file with execute access for the current user.
fn check_candidate(path: &Path) -> bool {
    which::which_in(path, None::<&str>, cwd()).is_ok()
}

fn cwd() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"))
}
