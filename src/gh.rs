//! Best-effort review-request lookup through the GitHub CLI.
//!
//! The `gh` tool is an optional dependency: when it is not installed, not
//! authenticated, or the repository has no forge counterpart, every lookup
//! degrades to `None`. Nothing in this module is ever fatal.

use serde::Deserialize;
use std::path::Path;
use std::process::{Command, Stdio};

/// Summary of the most recent review request for a branch.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub url: String,
}

impl PullRequest {
    /// Whether the review request's state denotes "merged".
    pub fn is_merged(&self) -> bool {
        self.state.eq_ignore_ascii_case("merged")
    }
}

/// Check whether the `gh` binary can be spawned at all.
pub fn gh_available() -> bool {
    Command::new("gh")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

/// Look up the most recent review request whose head branch matches.
///
/// Any failure along the way (spawn, nonzero exit, unparsable output) yields
/// `None`; the cleanup classifier treats that as "no review request".
pub fn find_pull_request<P: AsRef<Path>>(repo_root: P, branch: &str) -> Option<PullRequest> {
    let output = Command::new("gh")
        .current_dir(repo_root.as_ref())
        .args([
            "pr",
            "list",
            "--head",
            branch,
            "--state",
            "all",
            "--limit",
            "1",
            "--json",
            "number,title,state,url",
        ])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    parse_pr_list(&String::from_utf8_lossy(&output.stdout))
}

/// Parse `gh pr list --json` output: a JSON array, most recent first.
pub(crate) fn parse_pr_list(raw: &str) -> Option<PullRequest> {
    let mut prs: Vec<PullRequest> = serde_json::from_str(raw.trim()).ok()?;
    if prs.is_empty() {
        None
    } else {
        Some(prs.remove(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pr_list_takes_first_entry() {
        let raw = r#"[
            {"number": 42, "title": "Add login", "state": "MERGED", "url": "https://example.com/pull/42"},
            {"number": 17, "title": "Old attempt", "state": "CLOSED", "url": "https://example.com/pull/17"}
        ]"#;
        let pr = parse_pr_list(raw).unwrap();
        assert_eq!(pr.number, 42);
        assert_eq!(pr.title, "Add login");
        assert!(pr.is_merged());
    }

    #[test]
    fn test_parse_pr_list_empty_array() {
        assert!(parse_pr_list("[]").is_none());
    }

    #[test]
    fn test_parse_pr_list_garbage_is_none() {
        assert!(parse_pr_list("no pull requests found").is_none());
        assert!(parse_pr_list("").is_none());
    }

    #[test]
    fn test_is_merged_is_case_insensitive() {
        let mut pr = PullRequest {
            number: 1,
            title: "t".to_string(),
            state: "merged".to_string(),
            url: "u".to_string(),
        };
        assert!(pr.is_merged());
        pr.state = "OPEN".to_string();
        assert!(!pr.is_merged());
    }
}
