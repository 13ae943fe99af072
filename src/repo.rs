//! Repository inspection: root, remote, default branch, and the normalized
//! branch list used to pick a base for new worktrees.
//!
//! All text-parsing assumptions about git's output live here so they can be
//! exercised against fixture strings instead of live processes.

use crate::error::{Result, SprigError};
use crate::git::{probe_git, run_git};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The canonical remote sprig talks to.
pub const DEFAULT_REMOTE: &str = "origin";

/// Last-resort default branch when nothing can be resolved.
const FALLBACK_DEFAULT_BRANCH: &str = "main";

/// A branch usable as the base for a new worktree.
///
/// `name` is the short display form with the remote prefix stripped;
/// `refname` is what gets handed to git, the local name when a local branch
/// of that short name exists, the remote-qualified form otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchEntry {
    pub name: String,
    pub refname: String,
}

/// Snapshot of repository state, built fresh on every invocation.
#[derive(Debug, Clone)]
pub struct RepositoryInfo {
    /// Absolute path to the primary worktree root.
    pub root: PathBuf,
    /// Final path segment of the root.
    pub name: String,
    /// Directory containing the root; new worktrees are created next to it.
    pub parent_dir: PathBuf,
    /// URL of the canonical remote, when one is configured.
    pub remote_url: Option<String>,
    /// Merge target for cleanup and default base for new worktrees.
    pub default_branch: String,
    /// Deduplicated branches, default branch first, then ordinal order.
    pub branches: Vec<BranchEntry>,
}

impl RepositoryInfo {
    /// Inspect the repository containing `cwd`.
    ///
    /// Fails with `SprigError::NotARepository` outside any repository.
    /// A missing remote is not an error.
    pub fn inspect<P: AsRef<Path>>(cwd: P) -> Result<Self> {
        let root = repo_root(cwd.as_ref())?;

        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| {
                SprigError::UserError(format!(
                    "repository root {} has no name component",
                    root.display()
                ))
            })?;
        let parent_dir = root.parent().map(Path::to_path_buf).unwrap_or_else(|| root.clone());

        let remote_url = remote_url(&root);
        let default_branch = resolve_default_branch(&root);
        let branches = branch_entries(&root, &default_branch)?;

        Ok(Self {
            root,
            name,
            parent_dir,
            remote_url,
            default_branch,
            branches,
        })
    }
}

/// Resolve the repository root via `git rev-parse --show-toplevel`.
///
/// Works from any location inside the repository, including linked worktrees.
fn repo_root(cwd: &Path) -> Result<PathBuf> {
    match run_git(cwd, &["rev-parse", "--show-toplevel"]) {
        Ok(output) => Ok(PathBuf::from(output.stdout)),
        Err(SprigError::CommandFailed { .. }) => Err(SprigError::NotARepository),
        Err(other) => Err(other),
    }
}

/// URL of the canonical remote; absence yields `None`, never an error.
fn remote_url(root: &Path) -> Option<String> {
    run_git(root, &["remote", "get-url", DEFAULT_REMOTE])
        .ok()
        .filter(|output| !output.is_empty())
        .map(|output| output.stdout)
}

/// Determine the default branch, trying each probe only when the previous
/// one failed:
///
/// 1. the remote's symbolic HEAD pointer
/// 2. a local branch literally named `main`
/// 3. a local branch literally named `master`
/// 4. the currently checked-out branch
/// 5. the literal `main`
fn resolve_default_branch(root: &Path) -> String {
    let remote_head = format!("refs/remotes/{}/HEAD", DEFAULT_REMOTE);
    if let Ok(output) = run_git(root, &["symbolic-ref", "--short", &remote_head])
        && let Some(short) = output.stdout.strip_prefix(&format!("{}/", DEFAULT_REMOTE))
        && !short.is_empty()
    {
        return short.to_string();
    }

    for candidate in ["main", "master"] {
        let local_ref = format!("refs/heads/{}", candidate);
        if probe_git(root, &["show-ref", "--verify", "--quiet", &local_ref]) {
            return candidate.to_string();
        }
    }

    if let Ok(output) = run_git(root, &["branch", "--show-current"])
        && !output.stdout.is_empty()
    {
        return output.stdout;
    }

    FALLBACK_DEFAULT_BRANCH.to_string()
}

/// Enumerate local and remote branches in one query and normalize them.
fn branch_entries(root: &Path, default_branch: &str) -> Result<Vec<BranchEntry>> {
    let output = run_git(
        root,
        &["for-each-ref", "--format=%(refname)", "refs/heads", "refs/remotes"],
    )?;
    Ok(normalize_branches(output.lines(), default_branch))
}

/// Normalize full refnames into deduplicated display entries.
///
/// Local refs win a short-name collision with their remote-tracking
/// counterpart. The remote's symbolic HEAD pseudo-branch is skipped, as are
/// refs of remotes other than the canonical one. The default branch sorts
/// first; everything else follows in ordinal order.
pub(crate) fn normalize_branches<'a, I>(refs: I, default_branch: &str) -> Vec<BranchEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let remote_prefix = format!("refs/remotes/{}/", DEFAULT_REMOTE);
    let mut by_name: BTreeMap<String, BranchEntry> = BTreeMap::new();

    for raw in refs {
        let raw = raw.trim();
        if let Some(local) = raw.strip_prefix("refs/heads/") {
            by_name.insert(
                local.to_string(),
                BranchEntry {
                    name: local.to_string(),
                    refname: local.to_string(),
                },
            );
        } else if let Some(remote) = raw.strip_prefix(&remote_prefix) {
            if remote == "HEAD" {
                continue;
            }
            by_name.entry(remote.to_string()).or_insert_with(|| BranchEntry {
                name: remote.to_string(),
                refname: format!("{}/{}", DEFAULT_REMOTE, remote),
            });
        }
    }

    let mut branches: Vec<BranchEntry> = by_name.into_values().collect();
    branches.sort_by(|a, b| {
        (a.name != default_branch)
            .cmp(&(b.name != default_branch))
            .then_with(|| a.name.cmp(&b.name))
    });
    branches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{create_test_repo, create_test_repo_with_remote, git};
    use tempfile::TempDir;

    #[test]
    fn test_inspect_outside_repo_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = RepositoryInfo::inspect(temp_dir.path());
        assert!(matches!(result, Err(SprigError::NotARepository)));
    }

    #[test]
    fn test_inspect_basic_fields() {
        let temp_dir = create_test_repo();
        let info = RepositoryInfo::inspect(temp_dir.path()).unwrap();

        let expected_root = temp_dir.path().canonicalize().unwrap();
        assert_eq!(info.root.canonicalize().unwrap(), expected_root);
        assert_eq!(
            info.name,
            expected_root.file_name().unwrap().to_string_lossy()
        );
        assert!(info.remote_url.is_none());
        assert_eq!(info.default_branch, "main");
    }

    #[test]
    fn test_inspect_from_subdirectory() {
        let temp_dir = create_test_repo();
        let subdir = temp_dir.path().join("src").join("nested");
        std::fs::create_dir_all(&subdir).unwrap();

        let info = RepositoryInfo::inspect(&subdir).unwrap();
        let expected_root = temp_dir.path().canonicalize().unwrap();
        assert_eq!(info.root.canonicalize().unwrap(), expected_root);
    }

    #[test]
    fn test_inspect_reports_remote_url() {
        let temp_dir = create_test_repo_with_remote();
        let info = RepositoryInfo::inspect(temp_dir.path()).unwrap();
        assert!(info.remote_url.is_some());
    }

    #[test]
    fn test_default_branch_from_remote_head() {
        let temp_dir = create_test_repo_with_remote();
        let path = temp_dir.path();
        git(path, &["branch", "trunk"]);
        git(path, &["fetch", "origin"]);
        git(
            path,
            &[
                "symbolic-ref",
                "refs/remotes/origin/HEAD",
                "refs/remotes/origin/trunk",
            ],
        );

        let info = RepositoryInfo::inspect(path).unwrap();
        assert_eq!(info.default_branch, "trunk");
    }

    #[test]
    fn test_default_branch_falls_back_to_master() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path();
        git(path, &["init"]);
        git(path, &["symbolic-ref", "HEAD", "refs/heads/master"]);
        git(path, &["config", "user.email", "test@example.com"]);
        git(path, &["config", "user.name", "Test User"]);
        std::fs::write(path.join("README.md"), "# Test\n").unwrap();
        git(path, &["add", "."]);
        git(path, &["commit", "-m", "Initial commit"]);

        let info = RepositoryInfo::inspect(path).unwrap();
        assert_eq!(info.default_branch, "master");
    }

    #[test]
    fn test_default_branch_falls_back_to_current_branch() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path();
        git(path, &["init"]);
        git(path, &["symbolic-ref", "HEAD", "refs/heads/develop"]);
        git(path, &["config", "user.email", "test@example.com"]);
        git(path, &["config", "user.name", "Test User"]);
        std::fs::write(path.join("README.md"), "# Test\n").unwrap();
        git(path, &["add", "."]);
        git(path, &["commit", "-m", "Initial commit"]);

        let info = RepositoryInfo::inspect(path).unwrap();
        assert_eq!(info.default_branch, "develop");
    }

    #[test]
    fn test_branches_default_first_then_ordinal() {
        let temp_dir = create_test_repo();
        let path = temp_dir.path();
        git(path, &["branch", "zeta"]);
        git(path, &["branch", "alpha"]);

        let info = RepositoryInfo::inspect(path).unwrap();
        let names: Vec<&str> = info.branches.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["main", "alpha", "zeta"]);
    }

    #[test]
    fn test_local_ref_wins_over_remote() {
        let temp_dir = create_test_repo_with_remote();
        let path = temp_dir.path();
        git(path, &["branch", "feature"]);
        git(path, &["fetch", "origin"]);

        let info = RepositoryInfo::inspect(path).unwrap();
        let feature = info
            .branches
            .iter()
            .find(|b| b.name == "feature")
            .expect("feature branch missing");
        assert_eq!(feature.refname, "feature");
    }

    #[test]
    fn test_remote_only_branch_uses_qualified_ref() {
        let temp_dir = create_test_repo_with_remote();
        let path = temp_dir.path();
        git(path, &["branch", "remote-only"]);
        git(path, &["fetch", "origin"]);
        git(path, &["branch", "-D", "remote-only"]);

        let info = RepositoryInfo::inspect(path).unwrap();
        let entry = info
            .branches
            .iter()
            .find(|b| b.name == "remote-only")
            .expect("remote-only branch missing");
        assert_eq!(entry.refname, "origin/remote-only");
    }

    #[test]
    fn test_normalize_prefers_local_regardless_of_order() {
        let refs = vec!["refs/remotes/origin/foo", "refs/heads/foo"];
        let branches = normalize_branches(refs, "main");
        assert_eq!(branches.len(), 1);
        assert_eq!(branches[0].name, "foo");
        assert_eq!(branches[0].refname, "foo");
    }

    #[test]
    fn test_normalize_skips_remote_head_and_other_remotes() {
        let refs = vec![
            "refs/heads/main",
            "refs/remotes/origin/HEAD",
            "refs/remotes/origin/main",
            "refs/remotes/upstream/mirror",
        ];
        let branches = normalize_branches(refs, "main");
        let names: Vec<&str> = branches.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["main"]);
    }

    #[test]
    fn test_normalize_keeps_slashed_local_branches() {
        let refs = vec!["refs/heads/feat/login", "refs/heads/main"];
        let branches = normalize_branches(refs, "main");
        let names: Vec<&str> = branches.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["main", "feat/login"]);
    }

    #[test]
    fn test_normalize_default_branch_sorts_first() {
        let refs = vec![
            "refs/heads/alpha",
            "refs/heads/main",
            "refs/remotes/origin/beta",
        ];
        let branches = normalize_branches(refs, "main");
        let names: Vec<&str> = branches.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["main", "alpha", "beta"]);
    }
}
