//! Command implementations for sprig.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every handler returns the process exit code it wants,
//! so the assistant's exit code can travel up unchanged.

mod cleanup;
mod config_cmd;
mod start;

use crate::cli::{Cli, Command};
use crate::error::Result;

/// Dispatch a parsed CLI invocation to its handler.
pub fn dispatch(cli: Cli) -> Result<i32> {
    match cli.command {
        None => start::cmd_start(cli.path_file.as_deref()),
        Some(Command::Cleanup) => cleanup::cmd_cleanup(),
        Some(Command::Config) => config_cmd::cmd_config(),
    }
}
