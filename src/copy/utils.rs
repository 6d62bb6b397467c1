//! Helpers shared by the local copy and the scp transport.

use filetime::{FileTime, set_file_times};
use std::fs::{File, Metadata};
use std::io;
use std::path::Path;

/// Copy everything from `src` to `dst` using the best available method.
///
/// `len` is the size the source reported before the copy and only sizes the
/// chunks; copying always runs to end of file. On Linux this uses
/// `copy_file_range(2)` so the data never enters userspace, falling back to
/// `io::copy` when the kernel or filesystem refuses before anything was
/// written, or when the source reports no size (procfs, sysfs, pipes).
pub(crate) fn copy_file_contents(src: &File, dst: &File, len: u64) -> io::Result<u64> {
    #[cfg(target_os = "linux")]
    {
        if len == 0 {
            return io::copy(&mut io::BufReader::new(src), &mut &*dst);
        }
        copy_file_range_all(src, dst, len)
    }
    #[cfg(not(target_os = "linux"))]
    {
        let _ = len;
        io::copy(&mut io::BufReader::new(src), &mut &*dst)
    }
}

#[cfg(target_os = "linux")]
fn copy_file_range_all(src: &File, dst: &File, len: u64) -> io::Result<u64> {
    use std::os::unix::io::AsRawFd;

    const CHUNK: u64 = 128 * 1024 * 1024;

    let chunk = len.clamp(1, CHUNK) as usize;
    let mut copied: u64 = 0;
    loop {
        // SAFETY: both descriptors are open for the lifetime of the borrows and
        // null offsets tell the kernel to use (and advance) the file positions.
        let n = unsafe {
            libc::copy_file_range(
                src.as_raw_fd(),
                std::ptr::null_mut(),
                dst.as_raw_fd(),
                std::ptr::null_mut(),
                chunk,
                0,
            )
        };

        if n < 0 {
            let err = io::Error::last_os_error();
            let unsupported = matches!(
                err.raw_os_error(),
                Some(libc::EXDEV | libc::ENOSYS | libc::EINVAL | libc::EOPNOTSUPP)
            );
            if copied == 0 && unsupported {
                return io::copy(&mut io::BufReader::new(src), &mut &*dst);
            }
            return Err(err);
        }
        if n == 0 {
            // some filesystems report 0 instead of refusing; a plain read settles it
            if copied == 0 {
                return io::copy(&mut io::BufReader::new(src), &mut &*dst);
            }
            break;
        }
        copied += n as u64;
    }

    Ok(copied)
}

/// Apply the source's access and modification times to `dst`.
pub(crate) fn preserve_times(src_meta: &Metadata, dst: &Path) -> io::Result<()> {
    let atime = FileTime::from_last_access_time(src_meta);
    let mtime = FileTime::from_last_modification_time(src_meta);
    set_file_times(dst, atime, mtime)
}

/// `(mtime, atime)` in whole seconds, the shape scp carries on the wire.
///
/// Returns `None` for times before the epoch.
#[cfg_attr(not(feature = "ssh2"), allow(dead_code))]
pub(crate) fn scp_times(src_meta: &Metadata) -> Option<(u64, u64)> {
    let mtime = FileTime::from_last_modification_time(src_meta).unix_seconds();
    let atime = FileTime::from_last_access_time(src_meta).unix_seconds();
    Some((u64::try_from(mtime).ok()?, u64::try_from(atime).ok()?))
}
