//! Transition notification.
//!
//! The poller hands every status change to a [`Notifier`] and moves on. Delivery
//! happens in the background; its success or failure never feeds back into
//! polling.

use std::sync::Arc;
use std::time::Duration;

use lanwatch_common::{PresenceStatus, Transition};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, warn};

const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Receives aggregate status changes. Must return promptly.
pub trait Notifier: Send + Sync {
    fn notify_transition(&self, transition: Transition);
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify_transition(&self, transition: Transition) {
        (**self).notify_transition(transition)
    }
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify_transition(&self, transition: Transition) {
        (**self).notify_transition(transition)
    }
}

/// Writes each transition to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_transition(&self, transition: Transition) {
        info!("changing presence from {transition}");
    }
}

/// Fans one transition out to several notifiers, in order.
#[derive(Default)]
pub struct Notifiers {
    inner: Vec<Box<dyn Notifier>>,
}

impl Notifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, notifier: impl Notifier + 'static) -> Self {
        self.inner.push(Box::new(notifier));
        self
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Notifier for Notifiers {
    fn notify_transition(&self, transition: Transition) {
        for notifier in &self.inner {
            notifier.notify_transition(transition);
        }
    }
}

#[derive(Debug, Serialize)]
struct WebhookPayload {
    from: PresenceStatus,
    to: PresenceStatus,
    status: PresenceStatus,
}

impl From<Transition> for WebhookPayload {
    fn from(t: Transition) -> Self {
        Self {
            from: t.from,
            to: t.to,
            status: t.to,
        }
    }
}

/// POSTs a JSON body to every configured URL on each transition.
///
/// Each request runs on its own tokio task, so this must be used from inside a
/// runtime. Failures are logged and dropped; there are no retries.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: Client,
    urls: Arc<[String]>,
}

impl WebhookNotifier {
    pub fn new(urls: Vec<String>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(WEBHOOK_TIMEOUT)
            .no_proxy()
            .use_rustls_tls()
            .build()?;
        Ok(Self {
            client,
            urls: urls.into(),
        })
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }
}

impl Notifier for WebhookNotifier {
    fn notify_transition(&self, transition: Transition) {
        for url in self.urls.iter() {
            let client = self.client.clone();
            let url = url.clone();
            let payload = WebhookPayload::from(transition);

            tokio::spawn(async move {
                match client.post(&url).json(&payload).send().await {
                    Ok(resp) if resp.status().is_success() => {
                        debug!("webhook {url} accepted {}", payload.status);
                    }
                    Ok(resp) => warn!("webhook {url} answered {}", resp.status()),
                    Err(e) => warn!("webhook {url} failed: {e}"),
                }
            });
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
