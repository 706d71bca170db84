//! Connect-error classification.
//!
//! The only place that inspects socket errors. Everything else in the prober
//! works with [`ConnectFailure`].

use std::error::Error;
use std::io;

/// How a failed connection attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectFailure {
    /// The remote host answered the SYN with a reset: it is up, nothing listens.
    Refused,
    /// Timeout, no route, name resolution failure, or anything unrecognized.
    Other,
}

/// Maps a connect error onto [`ConnectFailure`].
///
/// Relies on the platform errno mapping of [`io::ErrorKind`] (`ECONNREFUSED`,
/// `WSAECONNREFUSED`) and follows wrapped `io::Error` sources, since resolvers
/// and proxies may box the original error. Unknown shapes are `Other`.
pub fn classify_connect_error(err: &io::Error) -> ConnectFailure {
    let mut current: Option<&(dyn Error + 'static)> = Some(err as &(dyn Error + 'static));

    while let Some(e) = current {
        if let Some(io_err) = e.downcast_ref::<io::Error>() {
            if io_err.kind() == io::ErrorKind::ConnectionRefused {
                return ConnectFailure::Refused;
            }
            current = io_err.get_ref().map(|inner| inner as &(dyn Error + 'static));
        } else {
            current = e.source();
        }
    }

    ConnectFailure::Other
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
