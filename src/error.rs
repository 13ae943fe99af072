//! Error types for sprig.
//!
//! A single crate-wide error enum; every variant maps to an exit code so
//! `main` can translate failures without inspecting them further.

use crate::exit_codes;
use thiserror::Error;

/// Errors that can occur during sprig execution.
#[derive(Error, Debug)]
pub enum SprigError {
    /// The working directory is not inside a git repository.
    #[error("not inside a git repository")]
    NotARepository,

    /// A required external tool could not be found on PATH.
    #[error("required tool `{0}` was not found on PATH")]
    MissingDependency(String),

    /// A git command exited nonzero on the fatal channel.
    #[error("git {verb} failed (exit code {exit_code}): {stderr}")]
    CommandFailed {
        verb: String,
        exit_code: i32,
        stderr: String,
    },

    /// Invalid input or environment problem described for the user.
    #[error("{0}")]
    UserError(String),
}

impl SprigError {
    /// The process exit code this error maps to.
    pub fn exit_code(&self) -> i32 {
        match self {
            SprigError::NotARepository
            | SprigError::MissingDependency(_)
            | SprigError::CommandFailed { .. }
            | SprigError::UserError(_) => exit_codes::FAILURE,
        }
    }
}

/// Convenience result type for sprig operations.
pub type Result<T> = std::result::Result<T, SprigError>;
