//! Configuration options for transfers.
//!
//! # Example
//!
//! ```
//! use sshcopy::TransferOptions;
//!
//! let options = TransferOptions::default()
//!     .with_file_mode(0o600)
//!     .without_fsync();
//! ```

/// Options applied to every transfer a router performs.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `file_mode` | `0o644` | Mode of files created on a remote endpoint |
/// | `preserve_times` | `true` | Carry mtime/atime to the destination |
/// | `preserve_permissions` | `true` | Copy permissions on local copies |
/// | `fsync` | `true` | Sync local files to disk before renaming |
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransferOptions {
    /// Unix mode for files created on a remote destination (default: `0o644`)
    pub file_mode: i32,

    /// Whether to carry modification and access times across (default: true)
    ///
    /// Applies to local copies and to files sent to a remote endpoint.
    pub preserve_times: bool,

    /// Whether local copies keep the source permissions (default: true)
    pub preserve_permissions: bool,

    /// Whether locally written files are synced before rename (default: true)
    pub fsync: bool,

    /// Callback for warnings (optional)
    ///
    /// If not set and the `tracing` feature is enabled, warnings are logged
    /// via tracing. Otherwise they are dropped.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub warn_handler: Option<fn(&str)>,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            file_mode: 0o644,
            preserve_times: true,
            preserve_permissions: true,
            fsync: true,
            warn_handler: None,
        }
    }
}

impl TransferOptions {
    /// Route warnings to `handler` instead of the log
    #[must_use]
    pub fn with_warn_handler(mut self, handler: fn(&str)) -> Self {
        self.warn_handler = Some(handler);
        self
    }

    /// Set the mode of files created on a remote endpoint
    ///
    /// Only the permission bits (`0o7777`) are kept.
    #[must_use]
    pub fn with_file_mode(mut self, mode: i32) -> Self {
        self.file_mode = mode & 0o7777;
        self
    }

    /// Disable fsync for faster (but less durable) local writes
    #[must_use]
    pub fn without_fsync(mut self) -> Self {
        self.fsync = false;
        self
    }

    /// Stop carrying timestamps to the destination
    #[must_use]
    pub fn without_times(mut self) -> Self {
        self.preserve_times = false;
        self
    }

    /// Let local copies take default umask permissions
    #[must_use]
    pub fn without_permissions(mut self) -> Self {
        self.preserve_permissions = false;
        self
    }

    pub(crate) fn warn(&self, msg: &str) {
        if let Some(handler) = self.warn_handler {
            handler(msg);
        } else {
            #[cfg(feature = "tracing")]
            tracing::warn!("{}", msg);
        }
    }
}
