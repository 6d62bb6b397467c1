//! Error types for sshcopy.
//!
//! Only configuration and argument-shape problems surface as [`Error`].
//! Transfer failures never do: a copy reports them as `Ok(false)`, with the
//! underlying cause sent to the log.
//!
//! | Category | Errors |
//! |----------|--------|
//! | Construction | [`Error::InvalidConfiguration`] |
//! | Call arguments | [`Error::InvalidArgument`] |

use std::io;
use thiserror::Error;

/// Result type for sshcopy operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Check if an IO error indicates "no space left on device".
///
/// Used to tag failed transfers in the log; it never changes the outcome
/// reported to the caller.
///
/// | Platform | Error Detection |
/// |----------|-----------------|
/// | Unix | `ENOSPC` (errno 28) |
/// | Windows | `ERROR_DISK_FULL` (0x70) |
///
/// # Example
///
/// ```
/// use std::io;
/// use sshcopy::is_no_space_error;
///
/// let error = io::Error::new(io::ErrorKind::StorageFull, "disk full");
/// assert!(is_no_space_error(&error));
/// ```
pub fn is_no_space_error(error: &io::Error) -> bool {
    if error.kind() == io::ErrorKind::StorageFull {
        return true;
    }

    #[cfg(unix)]
    {
        if let Some(raw_error) = error.raw_os_error() {
            const ENOSPC: i32 = 28;
            return raw_error == ENOSPC;
        }
    }

    #[cfg(windows)]
    {
        if let Some(raw_error) = error.raw_os_error() {
            const ERROR_DISK_FULL: i32 = 112;
            return raw_error == ERROR_DISK_FULL;
        }
    }

    false
}

/// Errors raised before any transfer is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The router cannot be built from the given endpoints and staging dir.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The source and destination paths passed to a copy do not line up.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }

    pub(crate) fn argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }
}
