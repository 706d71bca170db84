pub mod config;
pub mod status;

pub use config::{Config, ConfigError};
pub use status::{PresenceStatus, Transition};
