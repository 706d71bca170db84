//! Presence detection engine: the TCP prober, the adaptive poller and the
//! transition notifiers.

pub mod network;
pub mod notify;
pub mod poller;

pub use network::{CheckOutcome, Probe, TcpProber};
pub use notify::{LogNotifier, Notifier, Notifiers, WebhookNotifier};
pub use poller::{Delays, Poller};
