use std::process::ExitCode;

use lanwatch_common::Config;
use lanwatch_core::{Delays, LogNotifier, Notifiers, Poller, TcpProber, WebhookNotifier};
use tracing::{info, warn};

use crate::terminal::print;

pub async fn watch(cfg: Config) -> anyhow::Result<ExitCode> {
    let mut notifiers = Notifiers::new().with(LogNotifier);
    if !cfg.webhooks.is_empty() {
        notifiers = notifiers.with(WebhookNotifier::new(cfg.webhooks.clone())?);
    }

    let prober = TcpProber::new(cfg.port, cfg.timeout);
    let delays = Delays::from(&cfg);
    let poller = Poller::new(prober, notifiers, cfg.hosts, delays);

    print::header("watching for presence");

    tokio::select! {
        _ = poller.run() => {}
        res = tokio::signal::ctrl_c() => {
            if let Err(e) = res {
                warn!("failed to listen for shutdown signal: {e}");
            }
            info!("shutting down");
        }
    }

    Ok(ExitCode::SUCCESS)
}
