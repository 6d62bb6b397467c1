//! Local-to-local file copy.
//!
//! Files are written atomically: contents go to a temp file next to the
//! destination, which is then renamed over it. A failed copy therefore never
//! leaves a partial or empty destination file behind.

use crate::options::TransferOptions;
use crate::utils::path::safe_path;
use std::fs::{self, File};
use std::io;
use std::path::Path;

use super::utils::{copy_file_contents, preserve_times};

/// Copy the local file `src` to `dst`, replacing `dst` if it exists.
///
/// Returns the number of bytes copied.
///
/// # Errors
///
/// Fails if `src` is missing or is a directory, if the parent of `dst` does
/// not exist, or if any read, write or rename is refused.
pub(crate) fn copy_local(src: &Path, dst: &Path, options: &TransferOptions) -> io::Result<u64> {
    let src_meta = fs::metadata(src)?;
    if src_meta.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("source is a directory: {}", src.display()),
        ));
    }

    let src_file = File::open(src)?;
    let temp_file = local_temp_file(dst, options)?;

    let bytes = copy_file_contents(&src_file, temp_file.as_file(), src_meta.len())?;

    if options.fsync {
        temp_file.as_file().sync_all()?;
    }
    if options.preserve_permissions {
        fs::set_permissions(temp_file.path(), src_meta.permissions())?;
    }

    temp_file.persist(safe_path(dst)).map_err(|e| e.error)?;

    if options.preserve_times {
        if let Err(e) = preserve_times(&src_meta, dst) {
            options.warn(&format!("Could not set times on {}: {e}", dst.display()));
        }
    }

    Ok(bytes)
}

/// Create a temp file in the directory that will hold `dst`.
///
/// The file is removed on drop unless it gets persisted.
pub(crate) fn local_temp_file(
    dst: &Path,
    options: &TransferOptions,
) -> io::Result<tempfile::NamedTempFile> {
    let parent = match dst.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let parent = safe_path(parent);

    #[cfg(unix)]
    if !options.preserve_permissions {
        use std::os::unix::fs::PermissionsExt;
        // 0o666 lets the umask decide, as for any freshly created file
        return tempfile::Builder::new()
            .permissions(fs::Permissions::from_mode(0o666))
            .tempfile_in(&parent);
    }
    #[cfg(not(unix))]
    let _ = options;

    tempfile::NamedTempFile::new_in(&parent)
}
