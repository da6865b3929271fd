// Application state module
// Immutable per-process state shared by every request task

use std::io;
use std::path::PathBuf;

use super::types::Config;
use crate::fs::home;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Base directory every request path resolves under
    pub root: PathBuf,
}

impl AppState {
    /// Build state from configuration, resolving the filesystem root.
    ///
    /// The `fs.root` override wins; otherwise the platform home directory is
    /// used. Fails when neither names a usable directory.
    pub fn from_config(config: Config) -> io::Result<Self> {
        let root = match config.fs.root {
            Some(ref path) if !path.is_empty() => PathBuf::from(path),
            _ => home::base_dir()?,
        };

        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("filesystem root {} is not a directory", root.display()),
            ));
        }

        Ok(Self { config, root })
    }
}
