//! Configuration system for the railyard cart tools.
//!
//! Settings persist to disk as RON files, accept CLI overrides via clap,
//! and tolerate missing or unknown fields so older files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CartConfig, Config, DebugConfig, MAX_SEARCH_SENSITIVITY, default_config_dir};
pub use error::ConfigError;
