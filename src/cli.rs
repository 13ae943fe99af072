//! CLI argument parsing for sprig.
//!
//! Uses clap derive macros for declarative argument definitions. Running
//! without a subcommand starts the interactive creation flow; actual
//! implementations are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Start a coding assistant inside an isolated git worktree.
///
/// With no subcommand, sprig interactively creates a new worktree on a new
/// branch and launches the configured assistant inside it.
#[derive(Parser, Debug)]
#[command(name = "sprig")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Write the new worktree path to this file instead of launching the
    /// assistant (for a calling shell to consume).
    #[arg(long, value_name = "PATH")]
    pub path_file: Option<PathBuf>,

    /// Print version.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands for sprig.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Review existing worktrees and reclaim the ones safe to remove.
    ///
    /// A worktree is considered safe when its branch is merged into the
    /// default branch, or its review request is merged.
    #[command(alias = "clean")]
    Cleanup,

    /// Show the effective configuration and where it is stored.
    ///
    /// Creates the config file with defaults when it does not exist yet.
    Config,
}

impl Cli {
    /// Parse command line arguments without exiting on error, so main can
    /// map usage errors to the documented exit code.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Cli::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_default_mode() {
        let cli = Cli::try_parse_from(["sprig"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.path_file.is_none());
    }

    #[test]
    fn parse_path_file() {
        let cli = Cli::try_parse_from(["sprig", "--path-file", "/tmp/out"]).unwrap();
        assert_eq!(cli.path_file, Some(PathBuf::from("/tmp/out")));
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_cleanup() {
        let cli = Cli::try_parse_from(["sprig", "cleanup"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Cleanup)));
    }

    #[test]
    fn parse_clean_alias() {
        let cli = Cli::try_parse_from(["sprig", "clean"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Cleanup)));
    }

    #[test]
    fn parse_config() {
        let cli = Cli::try_parse_from(["sprig", "config"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Config)));
    }

    #[test]
    fn unknown_positional_is_an_error() {
        let result = Cli::try_parse_from(["sprig", "bogus"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().use_stderr());
    }

    #[test]
    fn version_flags() {
        for flag in ["-v", "--version"] {
            let err = Cli::try_parse_from(["sprig", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayVersion);
            assert!(!err.use_stderr());
        }
    }

    #[test]
    fn help_flags() {
        for flag in ["-h", "--help"] {
            let err = Cli::try_parse_from(["sprig", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
            assert!(!err.use_stderr());
        }
    }
}
