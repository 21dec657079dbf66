//! Greeter configuration (session directories).

use capy_sessions::{
    DEFAULT_WAYLAND_SESSION_DIR, DEFAULT_X11_SESSION_DIR, SessionKind, SessionSource,
};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreeterConfig {
    pub x11_session_dir: PathBuf,
    pub wayland_session_dir: PathBuf,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            x11_session_dir: PathBuf::from(DEFAULT_X11_SESSION_DIR),
            wayland_session_dir: PathBuf::from(DEFAULT_WAYLAND_SESSION_DIR),
        }
    }
}

impl GreeterConfig {
    /// Default location, e.g. ~/.config/CapyGreeter/config.json
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("CapyGreeter").join(CONFIG_FILE))
    }

    /// Load from config file, or return default if missing or malformed.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!("Ignoring malformed config {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Session sources in scan order: X11 first, then Wayland.
    pub fn to_sources(&self) -> Vec<SessionSource> {
        vec![
            SessionSource::new(SessionKind::X11, &self.x11_session_dir),
            SessionSource::new(SessionKind::Wayland, &self.wayland_session_dir),
        ]
    }
}
