//! Workspace path derivation and branch-name validation.

use crate::git::probe_git;
use std::path::{Path, PathBuf};

/// Derive the on-disk path for a new worktree.
///
/// Path separators in the branch name become hyphens, then the directory is
/// placed next to the repository: `{parent}/{repo}-{sanitized-branch}`.
/// Pure function, no I/O.
pub fn worktree_path(parent_dir: &Path, repo_name: &str, branch: &str) -> PathBuf {
    let sanitized = branch.replace('/', "-");
    parent_dir.join(format!("{}-{}", repo_name, sanitized))
}

/// Validate a proposed branch name.
///
/// Returns a human-readable rejection reason, or `None` when the name is
/// usable. Rejections are not errors; the interactive layer shows the reason
/// and asks again. Both checks are read-only probes: a nonzero exit from the
/// existence probe is the expected "does not exist" signal.
pub fn validate_branch_name<P: AsRef<Path>>(repo_root: P, name: &str) -> Option<String> {
    let repo_root = repo_root.as_ref();

    if name.trim().is_empty() {
        return Some("branch name must not be empty".to_string());
    }

    if !probe_git(repo_root, &["check-ref-format", "--branch", name]) {
        return Some(format!("`{}` is not a valid git branch name", name));
    }

    let local_ref = format!("refs/heads/{}", name);
    if probe_git(repo_root, &["show-ref", "--verify", "--quiet", &local_ref]) {
        return Some(format!("a branch named `{}` already exists", name));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{create_test_repo, git};

    #[test]
    fn test_worktree_path_replaces_separators() {
        let path = worktree_path(Path::new("/work"), "app", "feat/login");
        assert_eq!(path, PathBuf::from("/work/app-feat-login"));
    }

    #[test]
    fn test_worktree_path_plain_branch() {
        let path = worktree_path(Path::new("/work"), "app", "bugfix");
        assert_eq!(path, PathBuf::from("/work/app-bugfix"));
    }

    #[test]
    fn test_worktree_path_nested_branch() {
        let path = worktree_path(Path::new("/srv/repos"), "svc", "team/feat/x");
        assert_eq!(path, PathBuf::from("/srv/repos/svc-team-feat-x"));
    }

    #[test]
    fn test_validate_accepts_fresh_name() {
        let temp_dir = create_test_repo();
        assert_eq!(validate_branch_name(temp_dir.path(), "new-feature"), None);
    }

    #[test]
    fn test_validate_rejects_existing_branch() {
        let temp_dir = create_test_repo();
        git(temp_dir.path(), &["branch", "taken"]);

        let reason = validate_branch_name(temp_dir.path(), "taken");
        assert!(reason.is_some());
        assert!(reason.unwrap().contains("already exists"));
    }

    #[test]
    fn test_validate_rejects_bad_syntax() {
        let temp_dir = create_test_repo();
        for bad in ["has space", "double..dot", "trailing.lock", "-leading"] {
            let reason = validate_branch_name(temp_dir.path(), bad);
            assert!(reason.is_some(), "expected `{bad}` to be rejected");
            assert!(!reason.unwrap().is_empty());
        }
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let temp_dir = create_test_repo();
        let reason = validate_branch_name(temp_dir.path(), "  ");
        assert!(reason.is_some());
        assert!(reason.unwrap().contains("empty"));
    }
}
