use crate::error::LatencyError;
use glob::Pattern;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

/// Glob matched against file names when scanning for logs.
pub const LOG_FILE_PATTERN: &str = "*.txt";

static LOG_FILE_GLOB: Lazy<Pattern> =
    Lazy::new(|| Pattern::new(LOG_FILE_PATTERN).expect("log file pattern is a valid glob"));

/// Discovers candidate log files in `dir`.
///
/// Only regular files directly inside `dir` whose name matches
/// [`LOG_FILE_PATTERN`] are returned; subdirectories are not searched.
/// Paths are sorted by file name so the selection menu numbering is stable
/// between runs.
///
/// # Errors
///
/// Returns `LatencyError::ReadDir` if the directory or one of its entries
/// cannot be read.
pub fn discover_logs(dir: &Path) -> Result<Vec<PathBuf>, LatencyError> {
    let entries = fs::read_dir(dir).map_err(|e| LatencyError::read_dir(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LatencyError::read_dir(dir, e))?;

        let path = entry.path();

        // Follows symlinks, so a linked log is still a candidate.
        if !path.is_file() {
            continue;
        }

        if LOG_FILE_GLOB.matches(&entry.file_name().to_string_lossy()) {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(dir = %dir.display(), count = paths.len(), "discovered log files");

    Ok(paths)
}

/// The name shown for a discovered file in menus and logs.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
