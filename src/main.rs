//! sprig: start a coding assistant inside an isolated git worktree.
//!
//! This is the main entry point for the `sprig` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and maps errors to the
//! documented exit codes. When the launched assistant is the terminal
//! action, its exit code becomes sprig's own.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod gh;
pub mod git;
pub mod launch;
pub mod prompt;
pub mod repo;
pub mod worktree;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders its own help/version/usage output.
            let code = if err.use_stderr() {
                exit_codes::FAILURE
            } else {
                exit_codes::SUCCESS
            };
            let _ = err.print();
            return ExitCode::from(code as u8);
        }
    };

    match commands::dispatch(cli) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
