//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "selector";
const APPLICATION: &str = "selector-demo";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory, where the log file lives.
///
/// - Linux: `$XDG_CACHE_HOME/selector-demo` or `~/.cache/selector-demo`
/// - macOS: `~/Library/Caches/dev.selector.selector-demo`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/selector-demo` or `~/.config/selector-demo`
/// - macOS: `~/Library/Application Support/dev.selector.selector-demo`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the default config file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}

/// Number of archived log files kept next to `latest.log`.
const MAX_OLD_LOGS: usize = 10;

/// Archive the previous `latest.log` under a timestamped name and prune
/// the oldest archives. Call before creating the new log file.
pub fn rotate_logs(latest: &Path) {
    let Some(dir) = latest.parent() else { return };

    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(latest, dir.join(format!("{}.log", stamp)));
    }

    let Ok(entries) = fs::read_dir(dir) else { return };
    let mut archived: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != "latest.log"
        })
        .collect();

    if archived.len() <= MAX_OLD_LOGS {
        return;
    }
    archived.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());
    for entry in archived.iter().take(archived.len() - MAX_OLD_LOGS) {
        let _ = fs::remove_file(entry.path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_archives_latest() {
        let dir = std::env::temp_dir().join(format!("selector-demo-rotate-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let latest = dir.join("latest.log");
        fs::write(&latest, "previous run").unwrap();

        rotate_logs(&latest);

        assert!(!latest.exists());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);
        fs::remove_dir_all(&dir).unwrap();
    }
}
