pub mod check;
pub mod watch;

use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use lanwatch_common::config::{self, Config, ConfigError};

#[derive(Parser, Debug)]
#[command(name = "lanwatch")]
#[command(about = "Presence detection for devices on the local network.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Port to probe on every host
    #[arg(long, env = "PORT", global = true, default_value_t = config::DEFAULT_PORT, value_parser = config::parse_port)]
    pub port: u16,

    /// Hosts to probe, in order, split on the hosts separator
    #[arg(long, env = "HOSTS", global = true)]
    pub hosts: Option<String>,

    /// Separator for the hosts and webhooks lists
    #[arg(long, env = "HOSTS_SEPARATOR", global = true, default_value = config::DEFAULT_HOSTS_SEPARATOR)]
    pub hosts_separator: String,

    /// Webhook URLs notified on every presence change
    #[arg(long, env = "WEBHOOKS", global = true)]
    pub webhooks: Option<String>,

    /// Seconds to wait between checks while present
    #[arg(long, env = "CHECK_DELAY_PRESENT", global = true, default_value_t = config::DEFAULT_DELAY_PRESENT_SECS, value_parser = config::parse_delay_secs)]
    pub delay_present: u64,

    /// Seconds to wait between checks while absent
    #[arg(long, env = "CHECK_DELAY_ABSENT", global = true, default_value_t = config::DEFAULT_DELAY_ABSENT_SECS, value_parser = config::parse_delay_secs)]
    pub delay_absent: u64,

    /// Seconds before a single connection attempt is given up
    #[arg(long, env = "CHECK_TIMEOUT", global = true, default_value_t = config::DEFAULT_TIMEOUT_SECS, value_parser = config::parse_timeout_secs)]
    pub timeout: u64,

    /// More output per occurrence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Less output per occurrence
    #[arg(short, long, action = ArgAction::Count, global = true, conflicts_with = "verbose")]
    pub quiet: u8,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Poll the hosts forever and report presence changes (default)
    #[command(alias = "w")]
    Watch,
    /// Run a single check; exit status 0 when present, 1 when absent
    #[command(alias = "c")]
    Check,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn active_command(&self) -> Commands {
        self.command.unwrap_or(Commands::Watch)
    }

    /// Validates the parsed values into the runtime [`Config`].
    pub fn to_config(&self) -> Result<Config, ConfigError> {
        let raw_hosts = self.hosts.as_deref().ok_or(ConfigError::NoHosts)?;
        let hosts = config::split_hosts(raw_hosts, &self.hosts_separator)?;
        let webhooks = match self.webhooks.as_deref() {
            Some(raw) => config::split_webhooks(raw, &self.hosts_separator)?,
            None => Vec::new(),
        };

        Ok(Config {
            port: self.port,
            hosts,
            webhooks,
            delay_present: Duration::from_secs(self.delay_present),
            delay_absent: Duration::from_secs(self.delay_absent),
            timeout: Duration::from_secs(self.timeout),
        })
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
