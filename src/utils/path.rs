//! Path utilities.
//!
//! Trailing-separator normalization for the staging directory, plus the
//! Windows long-path conversion used before local file operations.

use std::path::{Path, PathBuf};

/// Strip trailing `/` and `\` separators from `path`.
///
/// A path made only of separators collapses to `/` so that it keeps naming
/// the root rather than becoming a relative empty path. Non-UTF-8 paths are
/// returned unchanged.
pub(crate) fn trim_trailing_separators(path: &Path) -> PathBuf {
    let Some(s) = path.to_str() else {
        return path.to_path_buf();
    };

    let trimmed = s.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() && !s.is_empty() {
        PathBuf::from("/")
    } else {
        PathBuf::from(trimmed)
    }
}

/// Convert a path for safe use with file operations.
///
/// On Windows this prefixes `\\?\` (or `\\?\UNC\`) so paths longer than
/// `MAX_PATH` keep working once a temp file name is appended.
#[cfg(windows)]
pub(crate) fn safe_path(path: &Path) -> PathBuf {
    let s = path.as_os_str().to_string_lossy();
    if s.starts_with(r"\\?\") {
        return path.to_path_buf();
    }
    if let Some(unc) = s.strip_prefix(r"\\") {
        return PathBuf::from(format!(r"\\?\UNC\{unc}"));
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    PathBuf::from(format!(r"\\?\{}", absolute.display()))
}

/// Convert a path for safe use with file operations.
///
/// On non-Windows platforms this returns the path unchanged.
#[cfg(not(windows))]
pub(crate) fn safe_path(path: &Path) -> PathBuf {
    path.to_path_buf()
}
