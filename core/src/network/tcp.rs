use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::{TcpStream, lookup_host};
use tokio::time::timeout;
use tracing::{debug, info};

use super::classify::{ConnectFailure, classify_connect_error};
use super::{CheckOutcome, Probe};

/// Probes hosts with a single bounded TCP connect on a shared port.
#[derive(Debug, Clone)]
pub struct TcpProber {
    port: u16,
    probe_timeout: Duration,
}

impl TcpProber {
    pub fn new(port: u16, probe_timeout: Duration) -> Self {
        Self { port, probe_timeout }
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

#[async_trait]
impl Probe for TcpProber {
    async fn probe(&self, host: &str) -> CheckOutcome {
        info!("trying {host}:{}...", self.port);
        let outcome = handshake_probe(host, self.port, self.probe_timeout).await;
        debug!("{host}:{} answered with {outcome:?}", self.port);
        outcome
    }
}

/// One bounded presence check against `host:port`.
///
/// The name is resolved once and every address it yields is tried in order.
/// The first address that accepts or actively refuses settles the check, so a
/// host with an IPv6 address that is filtered and an IPv4 one that refuses
/// still counts as present. Resolution and all attempts share `probe_timeout`;
/// if it runs out before any address answers the host is unreachable. Never
/// returns an error.
pub async fn handshake_probe(host: &str, port: u16, probe_timeout: Duration) -> CheckOutcome {
    let check = async {
        match lookup_host((host, port)).await {
            Ok(addrs) => first_presence(addrs).await,
            Err(e) => {
                debug!("{host}:{port} did not resolve: {e}");
                CheckOutcome::Unreachable
            }
        }
    };

    match timeout(probe_timeout, check).await {
        Ok(outcome) => outcome,
        Err(_elapsed) => CheckOutcome::Unreachable,
    }
}

/// Connects to each address in turn until one of them shows presence.
async fn first_presence(addrs: impl IntoIterator<Item = SocketAddr>) -> CheckOutcome {
    for addr in addrs {
        let outcome = connect_once(addr).await;
        if outcome.is_present() {
            return outcome;
        }
    }
    CheckOutcome::Unreachable
}

async fn connect_once(addr: SocketAddr) -> CheckOutcome {
    match TcpStream::connect(addr).await {
        Ok(stream) => {
            drop(stream);
            CheckOutcome::Connected
        }
        Err(e) => match classify_connect_error(&e) {
            ConnectFailure::Refused => CheckOutcome::RefusedAtTransport,
            ConnectFailure::Other => {
                debug!("{addr} unreachable: {e}");
                CheckOutcome::Unreachable
            }
        },
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
