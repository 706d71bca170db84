#![cfg(test)]
use std::sync::{Arc, Mutex};
use std::time::Duration;

use lanwatch_common::{Config, PresenceStatus, Transition};
use lanwatch_core::{Delays, Notifier, Poller, TcpProber, poller};

use crate::utils::{closed_port, open_port};

#[derive(Default, Clone)]
struct Recorder(Arc<Mutex<Vec<Transition>>>);

impl Notifier for Recorder {
    fn notify_transition(&self, transition: Transition) {
        self.0.lock().unwrap().push(transition);
    }
}

fn config(hosts: &[&str], port: u16) -> Config {
    let mut cfg = Config::with_hosts(hosts.iter().map(|h| h.to_string()).collect());
    cfg.port = port;
    cfg.timeout = Duration::from_secs(1);
    cfg
}

/// The first host fails to resolve, the second refuses: the cycle is present.
#[tokio::test]
async fn unreachable_then_refused_is_present() {
    let port = closed_port().await;
    let cfg = config(&["no-such-device.invalid", "127.0.0.1"], port);
    let prober = TcpProber::new(cfg.port, cfg.timeout);

    let status = poller::evaluate(&prober, &cfg.hosts).await;
    assert_eq!(status, PresenceStatus::Present);
}

#[tokio::test]
async fn only_unreachable_hosts_is_absent() {
    let cfg = config(&["a.invalid", "b.invalid"], 1234);
    let prober = TcpProber::new(cfg.port, cfg.timeout);

    let status = poller::evaluate(&prober, &cfg.hosts).await;
    assert_eq!(status, PresenceStatus::Absent);
}

/// A full tick against a live listener: one notification, long delay.
#[tokio::test]
async fn tick_against_loopback_notifies_once() {
    let (_listener, port) = open_port().await;
    let cfg = config(&["127.0.0.1"], port);
    let recorder = Recorder::default();

    let mut poller = Poller::new(
        TcpProber::new(cfg.port, cfg.timeout),
        recorder.clone(),
        cfg.hosts.clone(),
        Delays::from(&cfg),
    );

    let first = poller.tick().await;
    let second = poller.tick().await;

    assert_eq!(first, cfg.delay_present);
    assert_eq!(second, cfg.delay_present);
    assert_eq!(
        *recorder.0.lock().unwrap(),
        vec![Transition::new(PresenceStatus::Unknown, PresenceStatus::Present)]
    );
}
