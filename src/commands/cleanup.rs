//! The `sprig cleanup` command: classify and reclaim idle worktrees.

use crate::error::{Result, SprigError};
use crate::exit_codes;
use crate::gh;
use crate::git::git_available;
use crate::prompt;
use crate::repo::RepositoryInfo;
use crate::worktree::{CleanupCandidate, classify_worktrees, list_worktrees, reclaim};
use std::env;

/// Execute the `sprig cleanup` command.
///
/// Enumerates secondary worktrees (pruning stale ones), classifies each for
/// cleanup safety, and lets the operator pick which to reclaim; the safe
/// ones are preselected. Partial batch failure is reported, not fatal.
pub fn cmd_cleanup() -> Result<i32> {
    if !git_available() {
        return Err(SprigError::MissingDependency("git".to_string()));
    }

    let cwd = env::current_dir().map_err(|e| {
        SprigError::UserError(format!("failed to get current working directory: {}", e))
    })?;
    let repo = RepositoryInfo::inspect(&cwd)?;

    let entries = list_worktrees(&repo.root)?;
    let secondaries: Vec<_> = entries.into_iter().filter(|e| !e.is_primary).collect();
    if secondaries.is_empty() {
        println!("No secondary worktrees found.");
        return Ok(exit_codes::SUCCESS);
    }

    if !gh::gh_available() {
        eprintln!("note: `gh` is not installed; review-request status will not be checked");
    }

    let candidates = classify_worktrees(&repo.root, &repo.default_branch, secondaries)?;

    println!(
        "Worktrees of {} (merge target: {}):",
        repo.name, repo.default_branch
    );
    let mut default_selection = Vec::new();
    for (i, candidate) in candidates.iter().enumerate() {
        print_candidate(i, candidate);
        if candidate.safe {
            default_selection.push(i);
        }
    }
    println!();

    if default_selection.is_empty() {
        println!("Nothing looks safe to remove automatically.");
    }

    let Some(selection) = prompt::prompt_multi_select(
        "Select worktrees to remove (enter for the safe ones, `all`, `none`)",
        candidates.len(),
        &default_selection,
    )?
    else {
        return cancelled();
    };
    if selection.is_empty() {
        return cancelled();
    }

    let selected: Vec<CleanupCandidate> =
        selection.iter().map(|&i| candidates[i].clone()).collect();
    let question = format!("Remove {} worktree(s) and their branches?", selected.len());
    let Some(confirmed) = prompt::prompt_confirm(&question, false)? else {
        return cancelled();
    };
    if !confirmed {
        return cancelled();
    }

    let report = reclaim(&repo.root, &selected);
    println!("Removed {} worktree(s).", report.removed);
    if !report.errors.is_empty() {
        eprintln!("{} item(s) failed:", report.errors.len());
        for error in &report.errors {
            eprintln!("  - {}", error);
        }
    }

    Ok(exit_codes::SUCCESS)
}

fn print_candidate(index: usize, candidate: &CleanupCandidate) {
    let branch = candidate.entry.branch.as_deref().unwrap_or("(detached)");
    let verdict = if candidate.safe { "safe to remove" } else { "keep" };
    println!(
        "  {}) {} at {} [{}]",
        index + 1,
        branch,
        candidate.entry.path.display(),
        verdict
    );

    let mut signals = Vec::new();
    if candidate.merged {
        signals.push("merged into default branch".to_string());
    }
    if candidate.remote_deleted {
        signals.push("remote branch deleted".to_string());
    }
    if let Some(pr) = &candidate.pull_request {
        signals.push(format!(
            "PR #{} {} ({})",
            pr.number,
            pr.state.to_lowercase(),
            pr.url
        ));
    }
    if !signals.is_empty() {
        println!("       {}", signals.join(", "));
    }
}

fn cancelled() -> Result<i32> {
    eprintln!("Cancelled.");
    Ok(exit_codes::SUCCESS)
}
