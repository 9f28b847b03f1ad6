//! Database and export paths given by the user.

use std::path::PathBuf;

/// `~` and `~/…` are resolved against the home directory; anything else
/// is taken as is.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        if path == "~" {
            return home;
        }
        if let Some(rest) = path.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Database path as stored in the config and passed to SQLite.
pub fn db_path_string(path: &str) -> String {
    expand_tilde(path).to_string_lossy().to_string()
}
