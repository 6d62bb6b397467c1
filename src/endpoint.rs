//! Endpoints and the session seam.
//!
//! Each side of a copy is an [`Endpoint`]: either the local filesystem or a
//! remote filesystem reached through an already-authenticated session.
//! Sessions are supplied by the caller; this crate never opens, authenticates
//! or closes them. All it needs from one is the [`RemoteSession`] trait.

use crate::options::TransferOptions;
use std::io;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

/// A pre-authenticated handle to a remote filesystem.
///
/// Implementations perform exactly one single-file transfer per call and
/// block until it finishes. Failures are reported as `Err`; the router turns
/// them into a `false` outcome, so implementations should not panic.
///
/// With the `ssh2` feature enabled, `ssh2::Session` implements this trait
/// over scp.
pub trait RemoteSession {
    /// Whether this handle can be used for transfers.
    ///
    /// Checked once when a [`Router`](crate::Router) is built. Routers refuse
    /// handles that report `false` here.
    fn is_connected(&self) -> bool;

    /// Upload the local file at `local` to `remote` on this session.
    fn send(&self, local: &Path, remote: &Path, options: &TransferOptions) -> io::Result<()>;

    /// Download `remote` from this session into the local file at `local`.
    fn receive(&self, remote: &Path, local: &Path, options: &TransferOptions) -> io::Result<()>;
}

macro_rules! forward_remote_session {
    ($($ptr:ty),*) => {$(
        impl<S: RemoteSession + ?Sized> RemoteSession for $ptr {
            fn is_connected(&self) -> bool {
                (**self).is_connected()
            }

            fn send(
                &self,
                local: &Path,
                remote: &Path,
                options: &TransferOptions,
            ) -> io::Result<()> {
                (**self).send(local, remote, options)
            }

            fn receive(
                &self,
                remote: &Path,
                local: &Path,
                options: &TransferOptions,
            ) -> io::Result<()> {
                (**self).receive(remote, local, options)
            }
        }
    )*};
}

forward_remote_session!(&S, Box<S>, Rc<S>, Arc<S>);

/// One side of a copy.
#[derive(Debug, Clone)]
pub enum Endpoint<S> {
    /// The local filesystem.
    Local,
    /// A remote filesystem reached through `S`.
    Remote(S),
}

impl<S> Endpoint<S> {
    /// Returns `true` for [`Endpoint::Local`].
    pub fn is_local(&self) -> bool {
        matches!(self, Endpoint::Local)
    }

    /// Returns `true` for [`Endpoint::Remote`].
    pub fn is_remote(&self) -> bool {
        !self.is_local()
    }

    /// The session behind a remote endpoint.
    pub fn session(&self) -> Option<&S> {
        match self {
            Endpoint::Local => None,
            Endpoint::Remote(session) => Some(session),
        }
    }
}

impl<S> Default for Endpoint<S> {
    fn default() -> Self {
        Endpoint::Local
    }
}

impl<S> From<Option<S>> for Endpoint<S> {
    fn from(session: Option<S>) -> Self {
        session.map_or(Endpoint::Local, Endpoint::Remote)
    }
}
