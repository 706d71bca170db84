use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use lanwatch_common::{Config, PresenceStatus};
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "lanwatch::print";

const KEY_WIDTH: usize = 14;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn aligned_line<V: Display>(key: &str, value: V) {
    let dots: String = ".".repeat(KEY_WIDTH.saturating_sub(key.len()));
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!(
        "{} {}{}{} {}",
        prefix,
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value.to_string().color(colors::TEXT_DEFAULT)
    ));
}

pub fn status(status: PresenceStatus) -> ColoredString {
    match status {
        PresenceStatus::Present => status.as_str().color(colors::PRESENT).bold(),
        PresenceStatus::Absent => status.as_str().color(colors::ABSENT).bold(),
        PresenceStatus::Unknown => status.as_str().dimmed(),
    }
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

/// Prints the effective settings before polling starts.
pub fn config_summary(cfg: &Config) {
    let hosts: String = cfg
        .hosts
        .iter()
        .map(|h| h.color(colors::ACCENT).to_string())
        .collect::<Vec<String>>()
        .join(", ");

    aligned_line("Hosts", hosts);
    aligned_line("Port", cfg.port);
    aligned_line("Timeout", format!("{}s", cfg.timeout.as_secs()));
    aligned_line("Delay present", format!("{}s", cfg.delay_present.as_secs()));
    aligned_line("Delay absent", format!("{}s", cfg.delay_absent.as_secs()));
    aligned_line("Webhooks", cfg.webhooks.len());
}
