//! Transfer strategy table.
//!
//! The strategy is a pure function of which endpoints are remote:
//!
//! | source | destination | strategy |
//! |--------|-------------|----------|
//! | local | remote | [`Strategy::LocalToRemote`] |
//! | local | local | [`Strategy::LocalToLocal`] |
//! | remote | local | [`Strategy::RemoteToLocal`] |
//! | remote | remote | [`Strategy::RemoteToRemote`] |

use crate::endpoint::{Endpoint, RemoteSession};
use crate::options::TransferOptions;
use std::fmt;
use std::io;
use std::path::Path;

use super::local::copy_local;
use super::staged::copy_via_staging;

/// How a single file travels from source to destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Plain copy on the local filesystem.
    LocalToLocal,
    /// Upload through the destination session.
    LocalToRemote,
    /// Download through the source session.
    RemoteToLocal,
    /// Download into a local staging file, then upload it.
    RemoteToRemote,
}

impl Strategy {
    /// Pick the strategy for a pair of endpoints.
    pub fn select<S>(source: &Endpoint<S>, destination: &Endpoint<S>) -> Self {
        match (source.is_remote(), destination.is_remote()) {
            (false, true) => Strategy::LocalToRemote,
            (false, false) => Strategy::LocalToLocal,
            (true, false) => Strategy::RemoteToLocal,
            (true, true) => Strategy::RemoteToRemote,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::LocalToLocal => "local -> local",
            Strategy::LocalToRemote => "local -> remote",
            Strategy::RemoteToLocal => "remote -> local",
            Strategy::RemoteToRemote => "remote -> remote",
        })
    }
}

/// A strategy bound to the sessions it needs, resolved once per copy call.
pub(crate) enum Route<'a, S> {
    LocalToLocal,
    LocalToRemote {
        destination: &'a S,
    },
    RemoteToLocal {
        source: &'a S,
    },
    RemoteToRemote {
        source: &'a S,
        destination: &'a S,
        staging_dir: Option<&'a Path>,
    },
}

impl<'a, S: RemoteSession> Route<'a, S> {
    pub(crate) fn resolve(
        source: &'a Endpoint<S>,
        destination: &'a Endpoint<S>,
        staging_dir: Option<&'a Path>,
    ) -> Self {
        match (source, destination) {
            (Endpoint::Local, Endpoint::Local) => Route::LocalToLocal,
            (Endpoint::Local, Endpoint::Remote(destination)) => {
                Route::LocalToRemote { destination }
            }
            (Endpoint::Remote(source), Endpoint::Local) => Route::RemoteToLocal { source },
            (Endpoint::Remote(source), Endpoint::Remote(destination)) => Route::RemoteToRemote {
                source,
                destination,
                staging_dir,
            },
        }
    }

    pub(crate) fn strategy(&self) -> Strategy {
        match self {
            Route::LocalToLocal => Strategy::LocalToLocal,
            Route::LocalToRemote { .. } => Strategy::LocalToRemote,
            Route::RemoteToLocal { .. } => Strategy::RemoteToLocal,
            Route::RemoteToRemote { .. } => Strategy::RemoteToRemote,
        }
    }

    /// Move one file along this route.
    pub(crate) fn transfer(
        &self,
        src: &Path,
        dst: &Path,
        options: &TransferOptions,
    ) -> io::Result<()> {
        match *self {
            Route::LocalToLocal => copy_local(src, dst, options).map(drop),
            Route::LocalToRemote { destination } => destination.send(src, dst, options),
            Route::RemoteToLocal { source } => source.receive(src, dst, options),
            Route::RemoteToRemote {
                source,
                destination,
                staging_dir,
            } => {
                // Routers refuse to build without a staging dir for this case.
                let staging_dir = staging_dir.ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "no local staging directory configured",
                    )
                })?;
                copy_via_staging(source, destination, staging_dir, src, dst, options)
            }
        }
    }
}
