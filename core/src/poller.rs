//! The adaptive polling loop.
//!
//! Each cycle walks the configured hosts in order and stops at the first one
//! that shows presence. The cycle result is compared with the stored aggregate
//! status; a difference is a transition and goes to the [`Notifier`]. The loop
//! then sleeps for the delay that belongs to the *new* status: long while
//! present, short while absent.

use std::time::Duration;

use lanwatch_common::{Config, PresenceStatus, Transition};
use tracing::debug;

use crate::network::Probe;
use crate::notify::Notifier;

/// Sleep intervals per aggregate status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    pub present: Duration,
    pub absent: Duration,
}

impl Delays {
    /// `Unknown` never survives a cycle; it falls back to the short interval.
    pub fn for_status(&self, status: PresenceStatus) -> Duration {
        match status {
            PresenceStatus::Present => self.present,
            PresenceStatus::Absent | PresenceStatus::Unknown => self.absent,
        }
    }
}

impl From<&Config> for Delays {
    fn from(cfg: &Config) -> Self {
        Self {
            present: cfg.delay_present,
            absent: cfg.delay_absent,
        }
    }
}

/// Runs one cycle over `hosts` and returns `Present` or `Absent`.
///
/// Hosts after the first positive outcome are not probed.
pub async fn evaluate<P>(prober: &P, hosts: &[String]) -> PresenceStatus
where
    P: Probe + ?Sized,
{
    for host in hosts {
        if prober.probe(host).await.is_present() {
            return PresenceStatus::Present;
        }
    }
    PresenceStatus::Absent
}

/// Folds a cycle result into the stored status.
pub fn advance(
    current: PresenceStatus,
    observed: PresenceStatus,
) -> (PresenceStatus, Option<Transition>) {
    if current == observed {
        (current, None)
    } else {
        (observed, Some(Transition::new(current, observed)))
    }
}

pub struct Poller<P, N> {
    prober: P,
    notifier: N,
    hosts: Vec<String>,
    delays: Delays,
    status: PresenceStatus,
}

impl<P, N> Poller<P, N>
where
    P: Probe,
    N: Notifier,
{
    pub fn new(prober: P, notifier: N, hosts: Vec<String>, delays: Delays) -> Self {
        Self {
            prober,
            notifier,
            hosts,
            delays,
            status: PresenceStatus::Unknown,
        }
    }

    pub fn status(&self) -> PresenceStatus {
        self.status
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    /// Runs one cycle, notifies on a change and returns how long to sleep.
    pub async fn tick(&mut self) -> Duration {
        let observed = evaluate(&self.prober, &self.hosts).await;
        let (status, transition) = advance(self.status, observed);

        if let Some(transition) = transition {
            self.notifier.notify_transition(transition);
        }
        self.status = status;

        let delay = self.delays.for_status(status);
        debug!("{status}, next check in {}s", delay.as_secs());
        delay
    }

    /// Polls forever. Only dropping the future stops it.
    pub async fn run(mut self) {
        loop {
            let delay = self.tick().await;
            tokio::time::sleep(delay).await;
        }
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
