//! The transfer router.
//!
//! A [`Router`] is bound to a source endpoint, a destination endpoint and,
//! when both are remote, a local staging directory. Every [`Router::copy`]
//! call picks one [`Strategy`] from the endpoints, then moves each
//! source/destination pair in order, stopping at the first failure.

mod batch;
mod local;
mod staged;
mod strategy;
mod utils;


pub use batch::Paths;
pub use strategy::Strategy;

#[cfg_attr(not(feature = "ssh2"), allow(unused_imports))]
pub(crate) use local::local_temp_file;
#[cfg_attr(not(feature = "ssh2"), allow(unused_imports))]
pub(crate) use utils::scp_times;

use batch::Batch;
use crate::endpoint::{Endpoint, RemoteSession};
use crate::error::{Error, Result, is_no_space_error};
use crate::options::TransferOptions;
use crate::utils::path::trim_trailing_separators;
use std::path::{Path, PathBuf};
use strategy::Route;

/// Copies files between a source and a destination endpoint.
///
/// The router holds no per-call state and can be reused for any number of
/// copies. Transfers run sequentially on the calling thread.
///
/// # Example
///
/// ```no_run
/// # #[cfg(feature = "ssh2")]
/// # fn demo(source: ssh2::Session, destination: ssh2::Session) -> sshcopy::Result<()> {
/// use sshcopy::{Endpoint, Router};
/// use std::path::Path;
///
/// let router = Router::new(
///     Endpoint::Remote(source),
///     Endpoint::Remote(destination),
///     Some(Path::new("/var/tmp/staging/")),
/// )?;
///
/// let ok = router.copy(
///     ["/srv/a/report.txt", "/srv/b/report.txt"],
///     ["/backup/a-report.txt", "/backup/b-report.txt"],
/// )?;
/// assert!(ok);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Router<S> {
    source: Endpoint<S>,
    destination: Endpoint<S>,
    staging_dir: Option<PathBuf>,
    options: TransferOptions,
}

impl<S: RemoteSession> Router<S> {
    /// Build a router for `source` → `destination`.
    ///
    /// `staging_dir` is only used when both endpoints are remote; trailing
    /// path separators are stripped from it. Nothing is touched on disk here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if:
    /// - a remote source session is not connected
    /// - a remote destination session is not connected
    /// - both endpoints are remote and `staging_dir` is missing or empty
    pub fn new(
        source: Endpoint<S>,
        destination: Endpoint<S>,
        staging_dir: Option<&Path>,
    ) -> Result<Self> {
        if source.session().is_some_and(|s| !s.is_connected()) {
            return Err(Error::config("source must be local or a connected session"));
        }
        if destination.session().is_some_and(|s| !s.is_connected()) {
            return Err(Error::config(
                "destination must be local or a connected session",
            ));
        }

        let staging_dir = staging_dir
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(trim_trailing_separators);
        if source.is_remote() && destination.is_remote() && staging_dir.is_none() {
            return Err(Error::config(
                "a local staging directory is required when source and destination are both remote",
            ));
        }

        Ok(Self {
            source,
            destination,
            staging_dir,
            options: TransferOptions::default(),
        })
    }

    /// Replace the transfer options.
    #[must_use]
    pub fn with_options(mut self, options: TransferOptions) -> Self {
        self.options = options;
        self
    }

    /// The strategy every copy on this router uses.
    pub fn strategy(&self) -> Strategy {
        Strategy::select(&self.source, &self.destination)
    }

    /// The normalized staging directory, if one was given.
    pub fn staging_dir(&self) -> Option<&Path> {
        self.staging_dir.as_deref()
    }

    /// The transfer options in effect.
    pub fn options(&self) -> &TransferOptions {
        &self.options
    }

    /// Copy `sources` to `destinations`.
    ///
    /// Both arguments are either single paths or equal-length sequences.
    /// Pairs are transferred in order; the first failed transfer ends the
    /// call with `Ok(false)` and later pairs are not attempted. Pairs that
    /// already succeeded stay in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if only one side is a sequence or
    /// the sequences differ in length. Transfer failures are never errors.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn demo<S: sshcopy::RemoteSession>(router: sshcopy::Router<S>) -> sshcopy::Result<()> {
    /// // one file
    /// router.copy("/etc/hosts", "/tmp/hosts")?;
    ///
    /// // a batch
    /// router.copy(vec!["a.txt", "b.txt"], vec!["x.txt", "y.txt"])?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn copy(&self, sources: impl Into<Paths>, destinations: impl Into<Paths>) -> Result<bool> {
        let batch = Batch::pair(sources.into(), destinations.into())?;
        Ok(self.run(&batch))
    }

    /// Copy every `(source, destination)` pair of an ordered mapping.
    ///
    /// Equivalent to [`Router::copy`] with the keys as sources and the values
    /// as destinations, in the mapping's iteration order. Any ordered map or
    /// sequence of pairs works.
    ///
    /// # Errors
    ///
    /// Never fails in practice: a mapping always has matching sides. The
    /// `Result` keeps the signature in line with [`Router::copy`].
    pub fn copy_mapping<I, K, V>(&self, mapping: I) -> Result<bool>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<Path>,
        V: AsRef<Path>,
    {
        let batch = Batch::from_mapping(mapping);
        Ok(self.run(&batch))
    }

    fn run(&self, batch: &Batch) -> bool {
        let route = Route::resolve(&self.source, &self.destination, self.staging_dir());
        let strategy = route.strategy();

        #[cfg(feature = "tracing")]
        tracing::debug!(%strategy, files = batch.len(), "starting copy");

        for (index, (src, dst)) in batch.iter().enumerate() {
            #[cfg(feature = "tracing")]
            tracing::trace!(index, src = %src.display(), dst = %dst.display(), "copying");

            if let Err(e) = route.transfer(src, dst, &self.options) {
                let hint = if is_no_space_error(&e) {
                    " (no space left on device)"
                } else {
                    ""
                };
                self.options.warn(&format!(
                    "{strategy} copy of {} to {} failed{hint}: {e}; skipping {} remaining",
                    src.display(),
                    dst.display(),
                    batch.len() - index - 1,
                ));
                return false;
            }
        }

        true
    }
}
