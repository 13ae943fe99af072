//! Git command runner for sprig.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling. All git operations should go through this
//! module.
//!
//! Two call paths are deliberately kept separate:
//! - [`run_git`] is the fatal channel: a nonzero exit becomes
//!   `SprigError::CommandFailed`.
//! - [`probe_git`] is the expected-negative channel for existence checks:
//!   a nonzero exit simply means "no".

use crate::error::{Result, SprigError};
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns true if stdout is empty.
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty()
    }

    /// Returns stdout lines as a vector.
    pub fn lines(&self) -> Vec<&str> {
        if self.stdout.is_empty() {
            Vec::new()
        } else {
            self.stdout.lines().collect()
        }
    }
}

/// Run a git command with the specified working directory.
///
/// Callers probing for existence must use [`probe_git`] instead so an
/// expected "no" never travels on the fatal channel.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(SprigError::CommandFailed)` - On non-zero exit code, carrying the
///   verb, exit code, and stderr text
///
/// # Examples
///
/// ```no_run
/// use sprig::git::run_git;
/// use std::path::Path;
///
/// let output = run_git(Path::new("."), &["status", "--porcelain"])?;
/// println!("Changes: {}", output.stdout);
/// # Ok::<(), sprig::error::SprigError>(())
/// ```
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();
    let verb = args.first().copied().unwrap_or("").to_string();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            SprigError::UserError(format!(
                "failed to execute git {}: {} (is git installed?)",
                verb, e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let stderr = if git_output.stderr.is_empty() {
            git_output.stdout
        } else {
            git_output.stderr
        };

        Err(SprigError::CommandFailed {
            verb,
            exit_code,
            stderr,
        })
    }
}

/// Existence probe: run a git command and report only whether it succeeded.
///
/// A git binary that cannot be spawned at all also reads as `false`; callers
/// that need git guaranteed should check [`git_available`] up front.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `true` - The command exited with code 0
/// * `false` - The command exited nonzero (the expected negative answer,
///   e.g. "that ref does not exist") or could not be spawned
///
/// # Examples
///
/// ```no_run
/// use sprig::git::probe_git;
/// use std::path::Path;
///
/// let exists = probe_git(
///     Path::new("."),
///     &["show-ref", "--verify", "--quiet", "refs/heads/main"],
/// );
/// ```
pub fn probe_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> bool {
    Command::new("git")
        .current_dir(cwd.as_ref())
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Check whether the git binary can be spawned at all.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}
