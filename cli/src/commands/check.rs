use std::process::ExitCode;

use lanwatch_common::{Config, PresenceStatus};
use lanwatch_core::{TcpProber, poller};

use crate::terminal::print;

/// One cycle, no notifications. The exit status carries the result.
pub async fn check(cfg: Config) -> anyhow::Result<ExitCode> {
    let prober = TcpProber::new(cfg.port, cfg.timeout);
    let status: PresenceStatus = poller::evaluate(&prober, &cfg.hosts).await;

    print::fat_separator();
    print::aligned_line("Status", print::status(status));

    Ok(match status {
        PresenceStatus::Present => ExitCode::SUCCESS,
        _ => ExitCode::from(1),
    })
}
