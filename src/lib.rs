//! # sshcopy
//!
//! Copy files between the local filesystem and remote filesystems reached
//! through already-authenticated SSH sessions.
//!
//! ## Core Features
//!
//! - **Four routes, one call**: local→local, local→remote, remote→local and
//!   remote→remote, picked from the endpoints you give the [`Router`]
//! - **Remote to remote**: staged through a local directory, one randomly
//!   named file per transfer, removed on every exit path
//! - **Batches**: copy equal-length lists of paths, or an ordered mapping of
//!   source to destination, stopping at the first failure
//! - **Atomic local writes**: local destinations are written to a temp file
//!   and renamed into place
//! - **Bring your own session**: anything implementing [`RemoteSession`]
//!   works; `ssh2::Session` does with the `ssh2` feature
//!
//! ## Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "ssh2")]
//! # fn demo(source: ssh2::Session, destination: ssh2::Session) -> sshcopy::Result<()> {
//! use sshcopy::{Endpoint, Router};
//! use std::path::Path;
//!
//! let router = Router::new(
//!     Endpoint::Remote(source),
//!     Endpoint::Remote(destination),
//!     Some(Path::new("/var/tmp/staging")),
//! )?;
//!
//! if !router.copy("/srv/data/blah.txt", "/backup/blah.txt")? {
//!     eprintln!("copy failed, see log for the cause");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors versus failures
//!
//! Only misconfiguration and mismatched path arguments are reported as
//! [`Error`]. A transfer that fails (missing file, dropped connection, full
//! disk) makes the copy return `Ok(false)`; its cause goes to the warning
//! sink (see [`TransferOptions::warn_handler`]) or, with the `tracing`
//! feature, to the log.
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Structured logging with tracing crate (default) |
//! | `serde` | Serialize/Deserialize for [`TransferOptions`] and [`Strategy`] |
//! | `ssh2` | [`RemoteSession`] for `ssh2::Session` over scp |
//! | `full` | Enable all optional features |

#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod copy;
mod endpoint;
mod error;
mod options;
mod utils;

#[cfg(feature = "ssh2")]
mod scp;

pub use builder::RouterBuilder;
pub use copy::{Paths, Router, Strategy};
pub use endpoint::{Endpoint, RemoteSession};
pub use error::{Error, Result, is_no_space_error};
pub use options::TransferOptions;
