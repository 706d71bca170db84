#![cfg(test)]
use std::time::Duration;

use lanwatch_core::network::tcp::handshake_probe;
use lanwatch_core::{CheckOutcome, Probe, TcpProber};

use crate::utils::{closed_port, open_port};

const TIMEOUT: Duration = Duration::from_secs(2);

/// A listening port is reported as connected and the connection is not kept.
#[tokio::test]
async fn listener_yields_connected() {
    let (listener, port) = open_port().await;
    let prober = TcpProber::new(port, TIMEOUT);

    assert_eq!(prober.probe("127.0.0.1").await, CheckOutcome::Connected);

    // the accepted socket is already closed on the prober side: reading sees EOF
    let (mut stream, _) = listener.accept().await.unwrap();
    let mut buf = [0u8; 16];
    let read = tokio::io::AsyncReadExt::read(&mut stream, &mut buf).await.unwrap();
    assert_eq!(read, 0, "prober must not send any data");
}

/// Nothing listening on a live host is still presence.
#[tokio::test]
async fn refused_port_yields_refused_at_transport() {
    let port = closed_port().await;
    let outcome = handshake_probe("127.0.0.1", port, TIMEOUT).await;

    assert_eq!(outcome, CheckOutcome::RefusedAtTransport);
    assert!(outcome.is_present());
}

/// Name resolution failures are absence, not errors.
#[tokio::test]
async fn unresolvable_name_yields_unreachable() {
    let outcome = handshake_probe("no-such-device.invalid", 1234, TIMEOUT).await;
    assert_eq!(outcome, CheckOutcome::Unreachable);
    assert!(!outcome.is_present());
}
