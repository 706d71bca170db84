//! Host reachability probing.
//!
//! A probe infers presence from how a TCP connect ends, not from any
//! application protocol: an accepted or actively refused connection both prove
//! the host is on the network, anything else means it is not.

use async_trait::async_trait;

pub mod classify;
pub mod tcp;

pub use tcp::TcpProber;

/// Per-host result of one probe attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Connected,
    RefusedAtTransport,
    Unreachable,
}

impl CheckOutcome {
    /// `Connected` and `RefusedAtTransport` both count as presence.
    pub fn is_present(&self) -> bool {
        !matches!(self, CheckOutcome::Unreachable)
    }
}

/// Anything that can tell whether a single host is reachable.
///
/// Implementations must resolve every failure into a [`CheckOutcome`].
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, host: &str) -> CheckOutcome;
}
