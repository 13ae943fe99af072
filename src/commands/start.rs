//! The default interactive flow: create a worktree and launch the assistant.
//!
//! Sequence: inspect the repository, pick a base branch, name the new
//! branch (validated, retry on rejection), confirm, create the worktree in
//! one git call, then either launch the assistant inside it or hand the
//! path to the calling shell via `--path-file`.

use crate::config::Config;
use crate::error::{Result, SprigError};
use crate::exit_codes;
use crate::git::git_available;
use crate::launch::launch_assistant;
use crate::prompt;
use crate::repo::RepositoryInfo;
use crate::worktree::{create_worktree, validate_branch_name, worktree_path};
use std::env;
use std::fs;
use std::path::Path;

/// Execute the default (no subcommand) mode.
pub fn cmd_start(path_file: Option<&Path>) -> Result<i32> {
    if !git_available() {
        return Err(SprigError::MissingDependency("git".to_string()));
    }

    let cwd = env::current_dir().map_err(|e| {
        SprigError::UserError(format!("failed to get current working directory: {}", e))
    })?;
    let repo = RepositoryInfo::inspect(&cwd)?;

    eprintln!("Repository: {} ({})", repo.name, repo.root.display());
    if let Some(url) = &repo.remote_url {
        eprintln!("Remote:     {}", url);
    }

    // The default branch sorts first, so index 0 is the natural default.
    let base_ref = if repo.branches.is_empty() {
        repo.default_branch.clone()
    } else {
        let names: Vec<String> = repo.branches.iter().map(|b| b.name.clone()).collect();
        let Some(index) = prompt::prompt_select("Base branch", &names, 0)? else {
            return cancelled();
        };
        repo.branches[index].refname.clone()
    };

    let branch = loop {
        let Some(candidate) = prompt::prompt_line("New branch name: ")? else {
            return cancelled();
        };
        match validate_branch_name(&repo.root, &candidate) {
            Some(reason) => eprintln!("{}", reason),
            None => break candidate,
        }
    };

    let path = worktree_path(&repo.parent_dir, &repo.name, &branch);
    let question = format!(
        "Create worktree at {} from {}?",
        path.display(),
        base_ref
    );
    let Some(confirmed) = prompt::prompt_confirm(&question, true)? else {
        return cancelled();
    };
    if !confirmed {
        return cancelled();
    }

    create_worktree(&repo.root, &path, &base_ref, &branch)?;
    eprintln!("Created worktree {} on branch {}", path.display(), branch);

    if let Some(file) = path_file {
        fs::write(file, path.as_os_str().as_encoded_bytes()).map_err(|e| {
            SprigError::UserError(format!("failed to write {}: {}", file.display(), e))
        })?;
        return Ok(exit_codes::SUCCESS);
    }

    let config = Config::load();
    launch_assistant(&config, &path)
}

fn cancelled() -> Result<i32> {
    eprintln!("Cancelled.");
    Ok(exit_codes::SUCCESS)
}
