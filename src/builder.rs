//! Builder API for constructing a [`Router`].
//!
//! The builder is a fluent alternative to [`Router::new`] plus
//! [`Router::with_options`]. Endpoints left unset are local.
//!
//! # Examples
//!
//! ## Local copy
//!
//! ```no_run
//! use sshcopy::{Router, RouterBuilder};
//! # struct NoRemote;
//! # impl sshcopy::RemoteSession for NoRemote {
//! #     fn is_connected(&self) -> bool { false }
//! #     fn send(&self, _: &std::path::Path, _: &std::path::Path, _: &sshcopy::TransferOptions) -> std::io::Result<()> { Ok(()) }
//! #     fn receive(&self, _: &std::path::Path, _: &std::path::Path, _: &sshcopy::TransferOptions) -> std::io::Result<()> { Ok(()) }
//! # }
//!
//! let router: Router<NoRemote> = RouterBuilder::new().no_fsync().build()?;
//! router.copy("notes.txt", "notes.bak")?;
//! # Ok::<(), sshcopy::Error>(())
//! ```
//!
//! ## Remote to remote
//!
//! ```no_run
//! # #[cfg(feature = "ssh2")]
//! # fn demo(a: ssh2::Session, b: ssh2::Session) -> sshcopy::Result<()> {
//! use sshcopy::RouterBuilder;
//!
//! let router = RouterBuilder::new()
//!     .source(a)
//!     .destination(b)
//!     .staging_dir("/var/tmp/sshcopy")
//!     .file_mode(0o600)
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use crate::copy::Router;
use crate::endpoint::{Endpoint, RemoteSession};
use crate::error::Result;
use crate::options::TransferOptions;
use std::path::{Path, PathBuf};

/// A builder for configuring a [`Router`].
#[derive(Debug, Clone)]
pub struct RouterBuilder<S> {
    source: Endpoint<S>,
    destination: Endpoint<S>,
    staging_dir: Option<PathBuf>,
    options: TransferOptions,
}

impl<S> Default for RouterBuilder<S> {
    fn default() -> Self {
        Self {
            source: Endpoint::Local,
            destination: Endpoint::Local,
            staging_dir: None,
            options: TransferOptions::default(),
        }
    }
}

impl<S: RemoteSession> RouterBuilder<S> {
    /// Start with both endpoints local and default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read from `session` instead of the local filesystem.
    #[must_use]
    pub fn source(mut self, session: S) -> Self {
        self.source = Endpoint::Remote(session);
        self
    }

    /// Write to `session` instead of the local filesystem.
    #[must_use]
    pub fn destination(mut self, session: S) -> Self {
        self.destination = Endpoint::Remote(session);
        self
    }

    /// Local directory used to stage remote-to-remote copies.
    ///
    /// Required when both endpoints are remote.
    #[must_use]
    pub fn staging_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.staging_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Replace all transfer options at once.
    #[must_use]
    pub fn options(mut self, options: TransferOptions) -> Self {
        self.options = options;
        self
    }

    /// Mode for files created on a remote destination.
    #[must_use]
    pub fn file_mode(mut self, mode: i32) -> Self {
        self.options = self.options.with_file_mode(mode);
        self
    }

    /// Skip fsync on locally written files.
    #[must_use]
    pub fn no_fsync(mut self) -> Self {
        self.options = self.options.without_fsync();
        self
    }

    /// Don't carry timestamps across.
    #[must_use]
    pub fn no_times(mut self) -> Self {
        self.options = self.options.without_times();
        self
    }

    /// Don't copy permissions on local copies.
    #[must_use]
    pub fn no_permissions(mut self) -> Self {
        self.options = self.options.without_permissions();
        self
    }

    /// Route warnings, such as failed transfers and cleanup errors, to `handler`.
    #[must_use]
    pub fn on_warning(mut self, handler: fn(&str)) -> Self {
        self.options = self.options.with_warn_handler(handler);
        self
    }

    /// Validate the configuration and build the router.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Router::new`].
    pub fn build(self) -> Result<Router<S>> {
        Ok(Router::new(self.source, self.destination, self.staging_dir.as_deref())?
            .with_options(self.options))
    }
}

impl<S: RemoteSession> Router<S> {
    /// Start a [`RouterBuilder`].
    pub fn builder() -> RouterBuilder<S> {
        RouterBuilder::new()
    }
}
