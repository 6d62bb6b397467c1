//! Remote-to-remote copy through a local staging file.
//!
//! There is no direct path between two remote sessions, so each file is
//! downloaded into the staging directory and uploaded from there. Staging
//! files get random names rather than the source's basename, so same-named
//! files from different source directories never share a staging path.

use crate::endpoint::RemoteSession;
use crate::options::TransferOptions;
use crate::utils::path::safe_path;
use std::io;
use std::path::Path;
use tempfile::TempPath;

/// Length of a staging file name, drawn from `[0-9a-zA-Z]`.
pub(crate) const STAGING_NAME_LEN: usize = 10;

/// Reserve a fresh staging path directly inside `staging_dir`.
///
/// The name is claimed by creating an empty file exclusively, retrying on
/// collision, so concurrent routers sharing a staging dir cannot pick the
/// same path. The file is removed when the returned path is dropped.
pub(crate) fn reserve_staging_path(staging_dir: &Path) -> io::Result<TempPath> {
    tempfile::Builder::new()
        .prefix("")
        .suffix("")
        .rand_bytes(STAGING_NAME_LEN)
        .tempfile_in(safe_path(staging_dir))
        .map(tempfile::NamedTempFile::into_temp_path)
}

/// Download `src` from `source` and upload it to `dst` on `destination`.
///
/// Stops at the first failed hop. The staging file is removed on every exit
/// path; a failed removal is reported through the warn sink and never
/// changes the outcome.
pub(crate) fn copy_via_staging<S, D>(
    source: &S,
    destination: &D,
    staging_dir: &Path,
    src: &Path,
    dst: &Path,
    options: &TransferOptions,
) -> io::Result<()>
where
    S: RemoteSession + ?Sized,
    D: RemoteSession + ?Sized,
{
    let staging = reserve_staging_path(staging_dir)?;

    #[cfg(feature = "tracing")]
    tracing::trace!(staging = %staging.display(), src = %src.display(), "staging remote file");

    let result = source
        .receive(src, &staging, options)
        .and_then(|()| destination.send(&staging, dst, options));

    discard(staging, options);
    result
}

fn discard(staging: TempPath, options: &TransferOptions) {
    let path = staging.to_path_buf();
    match staging.close() {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => options.warn(&format!(
            "Failed to remove staging file {}: {e}",
            path.display()
        )),
    }
}
