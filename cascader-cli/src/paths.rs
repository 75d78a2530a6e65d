//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "cascader";
const APPLICATION: &str = "cascader";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory, creating it if needed.
///
/// - Linux: `$XDG_CACHE_HOME/cascader` or `~/.cache/cascader`
/// - macOS: `~/Library/Caches/dev.cascader.cascader`
/// - Windows: `C:\Users\<User>\AppData\Local\cascader\cascader\cache`
pub fn cache_dir() -> Option<PathBuf> {
    let dir = project_dirs()?.cache_dir().to_path_buf();
    fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Get the path to the log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("cascader.log"))
}
