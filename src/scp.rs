//! scp transport for `ssh2::Session` (requires `ssh2` feature)
//!
//! Sessions must already be connected and authenticated by the caller.

use crate::copy::{local_temp_file, scp_times};
use crate::endpoint::RemoteSession;
use crate::options::TransferOptions;
use crate::utils::path::safe_path;
use ssh2::{Channel, Session};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

impl RemoteSession for Session {
    /// A session is usable once its handshake produced a remote banner.
    fn is_connected(&self) -> bool {
        self.banner().is_some()
    }

    fn send(&self, local: &Path, remote: &Path, options: &TransferOptions) -> io::Result<()> {
        let mut file = File::open(local)?;
        let meta = file.metadata()?;
        if !meta.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a regular file: {}", local.display()),
            ));
        }

        let times = if options.preserve_times {
            scp_times(&meta)
        } else {
            None
        };

        let mut channel = self
            .scp_send(remote, options.file_mode, meta.len(), times)
            .map_err(io::Error::from)?;
        io::copy(&mut file, &mut channel)?;
        finish(channel)
    }

    fn receive(&self, remote: &Path, local: &Path, options: &TransferOptions) -> io::Result<()> {
        let (mut channel, stat) = self.scp_recv(remote).map_err(io::Error::from)?;
        let temp_file = local_temp_file(local, options)?;

        let expected = stat.size();
        let written = io::copy(&mut (&mut channel).take(expected), &mut temp_file.as_file())?;
        if written != expected {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "{} ended after {written} of {expected} bytes",
                    remote.display()
                ),
            ));
        }
        finish(channel)?;

        if options.fsync {
            temp_file.as_file().sync_all()?;
        }
        #[cfg(unix)]
        if options.preserve_permissions {
            use std::os::unix::fs::PermissionsExt;
            let mode = (stat.mode() as u32) & 0o7777;
            std::fs::set_permissions(temp_file.path(), std::fs::Permissions::from_mode(mode))?;
        }

        temp_file.persist(safe_path(local)).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Close an scp channel the way libssh2 expects.
fn finish(mut channel: Channel) -> io::Result<()> {
    channel.send_eof().map_err(io::Error::from)?;
    channel.wait_eof().map_err(io::Error::from)?;
    channel.close().map_err(io::Error::from)?;
    channel.wait_close().map_err(io::Error::from)
}
