//! Cleanup-safety classification and batch reclaim.
//!
//! Classification is a pure read+derive pass over live repository state and
//! is safe to run repeatedly; only [`reclaim`] mutates anything.

use crate::error::Result;
use crate::gh::{self, PullRequest};
use crate::git::{probe_git, run_git};
use crate::repo::DEFAULT_REMOTE;
use crate::worktree::WorktreeEntry;
use std::collections::HashSet;
use std::path::Path;

/// A secondary worktree with its cleanup-safety signals.
///
/// Derived and transient: upstream state (merges, remote deletions, review
/// status) can change between runs, so candidates are never cached.
#[derive(Debug, Clone)]
pub struct CleanupCandidate {
    pub entry: WorktreeEntry,
    /// The branch appears in the set merged into the default branch.
    pub merged: bool,
    /// No remote-tracking ref exists for the branch (false when detached).
    pub remote_deleted: bool,
    /// Most recent review request for the branch, when one could be found.
    pub pull_request: Option<PullRequest>,
    /// Composite verdict; see [`safe_to_reclaim`].
    pub safe: bool,
}

/// Outcome of a reclaim batch.
#[derive(Debug, Default)]
pub struct ReclaimReport {
    /// Number of worktrees successfully removed.
    pub removed: usize,
    /// Per-item failure descriptions, each identifying the offending item.
    pub errors: Vec<String>,
}

/// Classify every secondary worktree in `entries`.
///
/// `merged` comes from one `branch --merged` query; the remote-deletion
/// signal is an existence probe per branch; the review-request lookup is
/// best-effort and never fatal.
pub fn classify_worktrees<P: AsRef<Path>>(
    repo_root: P,
    default_branch: &str,
    entries: Vec<WorktreeEntry>,
) -> Result<Vec<CleanupCandidate>> {
    let repo_root = repo_root.as_ref();
    let merged_set = merged_branches(repo_root, default_branch)?;

    let mut candidates = Vec::new();
    for entry in entries.into_iter().filter(|e| !e.is_primary) {
        let merged = entry
            .branch
            .as_deref()
            .map(|branch| merged_set.contains(branch))
            .unwrap_or(false);

        let remote_deleted = match entry.branch.as_deref() {
            Some(branch) => {
                let remote_ref = format!("refs/remotes/{}/{}", DEFAULT_REMOTE, branch);
                !probe_git(repo_root, &["show-ref", "--verify", "--quiet", &remote_ref])
            }
            // No branch to probe for; the signal reads as "not deleted".
            None => false,
        };

        let pull_request = entry
            .branch
            .as_deref()
            .and_then(|branch| gh::find_pull_request(repo_root, branch));

        let safe = safe_to_reclaim(
            merged,
            remote_deleted,
            entry.branch.is_none(),
            pull_request.as_ref(),
        );

        candidates.push(CleanupCandidate {
            entry,
            merged,
            remote_deleted,
            pull_request,
            safe,
        });
    }

    Ok(candidates)
}

/// Branches already merged into the default branch.
///
/// The default branch may have been resolved from the remote's symbolic HEAD
/// without a local ref of that name existing; the qualified remote-tracking
/// ref is the merge target then.
fn merged_branches(repo_root: &Path, default_branch: &str) -> Result<HashSet<String>> {
    let local_ref = format!("refs/heads/{}", default_branch);
    let merge_target = if probe_git(repo_root, &["show-ref", "--verify", "--quiet", &local_ref]) {
        default_branch.to_string()
    } else {
        format!("{}/{}", DEFAULT_REMOTE, default_branch)
    };

    let output = run_git(
        repo_root,
        &[
            "branch",
            "--merged",
            &merge_target,
            "--format=%(refname:short)",
        ],
    )?;
    Ok(output
        .lines()
        .iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect())
}

/// Composite safe-to-reclaim verdict.
///
/// A merged review request counts even when the local merge check disagrees:
/// squash and rebase merges rewrite history, so the review state is the more
/// authoritative signal there.
pub(crate) fn safe_to_reclaim(
    merged: bool,
    remote_deleted: bool,
    detached: bool,
    pull_request: Option<&PullRequest>,
) -> bool {
    merged
        || (remote_deleted && detached)
        || pull_request.map(PullRequest::is_merged).unwrap_or(false)
}

/// Remove each confirmed candidate's worktree and delete its local branch.
///
/// Removal is forced (a dirty working tree does not block it). The branch
/// deletion afterwards is best-effort: the worktree is already gone and the
/// branch may legitimately not exist locally, so its failure is swallowed.
/// Individual failures are collected and the batch always runs to the end.
pub fn reclaim<P: AsRef<Path>>(repo_root: P, candidates: &[CleanupCandidate]) -> ReclaimReport {
    let repo_root = repo_root.as_ref();
    let mut report = ReclaimReport::default();

    for candidate in candidates {
        let path_str = candidate.entry.path.to_string_lossy();
        match run_git(repo_root, &["worktree", "remove", "--force", &path_str]) {
            Ok(_) => {
                report.removed += 1;
                if let Some(branch) = candidate.entry.branch.as_deref() {
                    let _ = run_git(repo_root, &["branch", "-D", branch]);
                }
            }
            Err(err) => {
                let label = candidate
                    .entry
                    .branch
                    .clone()
                    .unwrap_or_else(|| path_str.to_string());
                report.errors.push(format!("{}: {}", label, err));
            }
        }
    }

    report
}
