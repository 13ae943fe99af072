//! Assistant process launch.
//!
//! The assistant runs with inherited standard streams inside the new
//! worktree; sprig's only job afterwards is to propagate its exit code.

use crate::config::Config;
use crate::error::{Result, SprigError};
use crate::exit_codes;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

/// Spawn the configured assistant in `workdir` and wait for it to exit.
///
/// Returns the child's exit code so the caller can propagate it as sprig's
/// own. A child terminated by a signal reads as failure.
pub fn launch_assistant(config: &Config, workdir: &Path) -> Result<i32> {
    let mut words = shell_words::split(&config.assistant).map_err(|e| {
        SprigError::UserError(format!(
            "invalid assistant command `{}`: {}",
            config.assistant, e
        ))
    })?;
    if words.is_empty() {
        return Err(SprigError::UserError(
            "assistant command is empty; set one with `sprig config`".to_string(),
        ));
    }
    let program = words.remove(0);

    let status = Command::new(&program)
        .args(&words)
        .args(&config.assistant_args)
        .current_dir(workdir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                SprigError::MissingDependency(program.clone())
            } else {
                SprigError::UserError(format!("failed to launch `{}`: {}", program, e))
            }
        })?;

    Ok(status.code().unwrap_or(exit_codes::FAILURE))
}
