//! Worktree enumeration from `git worktree list --porcelain`.

use crate::error::Result;
use crate::git::run_git;
use std::path::{Path, PathBuf};

/// One worktree attached to the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorktreeEntry {
    /// Absolute path to the worktree directory.
    pub path: PathBuf,
    /// Associated branch name, or `None` when detached.
    pub branch: Option<String>,
    /// Whether this is the primary (original) worktree.
    pub is_primary: bool,
}

/// List all worktrees attached to the repository.
///
/// Stale registrations (directory manually deleted) are pruned first, so
/// the returned entries all have a backing directory. Exactly one entry is
/// primary and it is always first: git documents that the main worktree
/// leads the porcelain listing, and the parser relies on that.
pub fn list_worktrees<P: AsRef<Path>>(repo_root: P) -> Result<Vec<WorktreeEntry>> {
    let repo_root = repo_root.as_ref();
    run_git(repo_root, &["worktree", "prune"])?;
    let output = run_git(repo_root, &["worktree", "list", "--porcelain"])?;
    Ok(parse_worktree_porcelain(&output.stdout))
}

/// Parse the porcelain listing: records separated by blank lines, each with
/// a `worktree <path>` line followed by either `branch refs/heads/<name>`
/// or a `detached` marker.
pub(crate) fn parse_worktree_porcelain(raw: &str) -> Vec<WorktreeEntry> {
    let mut entries = Vec::new();
    let mut current_path: Option<PathBuf> = None;
    let mut current_branch: Option<String> = None;

    for line in raw.lines() {
        if line.is_empty() {
            flush(&mut entries, &mut current_path, &mut current_branch);
            continue;
        }

        if let Some(value) = line.strip_prefix("worktree ") {
            flush(&mut entries, &mut current_path, &mut current_branch);
            current_path = Some(PathBuf::from(value.trim()));
        } else if let Some(value) = line.strip_prefix("branch ") {
            current_branch = value.trim().strip_prefix("refs/heads/").map(String::from);
        } else if line == "detached" {
            current_branch = None;
        }
    }

    flush(&mut entries, &mut current_path, &mut current_branch);
    entries
}

fn flush(
    entries: &mut Vec<WorktreeEntry>,
    current_path: &mut Option<PathBuf>,
    current_branch: &mut Option<String>,
) {
    if let Some(path) = current_path.take() {
        entries.push(WorktreeEntry {
            path,
            branch: current_branch.take(),
            is_primary: entries.is_empty(),
        });
    } else {
        current_branch.take();
    }
}
