//! Persisted greeter state

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.json";

/// The session the user picked last time
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastSession {
    /// Session file name, e.g. "plasma.desktop"
    #[serde(default)]
    pub session: String,
}

impl LastSession {
    /// Default location, e.g. ~/.local/state/CapyGreeter/state.json
    pub fn default_path() -> Option<PathBuf> {
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .map(|dir| dir.join("CapyGreeter").join(STATE_FILE))
    }

    /// Read the recorded session. A missing or unparsable state file means
    /// nothing was recorded yet, so the catalog falls back to index 0.
    pub fn load(path: &Path) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            return Self::default();
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            debug!("Discarding unreadable greeter state {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Record this session for the next greeter start.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_vec_pretty(self)?)
    }
}
