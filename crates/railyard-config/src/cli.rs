//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Railyard command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "railyard", about = "Cart lookup and placement tools")]
pub struct CliArgs {
    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Search inset used to recover freshly placed carts.
    #[arg(long, allow_negative_numbers = true)]
    pub spawn_sensitivity: Option<f32>,

    /// Height above a cart at which refused items are dropped.
    #[arg(long)]
    pub drop_offset: Option<f32>,

    /// Run as a mirrored (non-authoritative) side.
    #[arg(long)]
    pub remote: bool,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(sensitivity) = args.spawn_sensitivity {
            self.carts.spawn_search_sensitivity = sensitivity;
        }
        if let Some(offset) = args.drop_offset {
            self.carts.drop_offset_y = offset;
        }
        if args.remote {
            self.carts.remote = true;
        }
    }
}
