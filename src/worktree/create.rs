//! Worktree creation.

use crate::error::Result;
use crate::git::run_git;
use std::path::Path;

/// Create a new branch from `base_ref` and a worktree checked out onto it,
/// rooted at `path`, in a single git call.
///
/// No pre-creation directory setup and no rollback: if git fails partway,
/// the error is surfaced verbatim and nothing is cleaned up.
pub fn create_worktree<P: AsRef<Path>>(
    repo_root: P,
    path: &Path,
    base_ref: &str,
    branch: &str,
) -> Result<()> {
    let path_str = path.to_string_lossy();
    run_git(
        repo_root,
        &["worktree", "add", "-b", branch, &path_str, base_ref],
    )?;
    Ok(())
}
