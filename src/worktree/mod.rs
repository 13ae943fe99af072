//! Worktree lifecycle operations for sprig.
//!
//! This module covers the full life of an isolated workspace:
//!
//! - Deriving its on-disk path and validating the proposed branch name
//! - Creating the branch and worktree in one git call
//! - Enumerating existing worktrees (primary first, stale entries pruned)
//! - Classifying secondary worktrees for cleanup safety
//! - Reclaiming confirmed candidates without aborting the batch

mod cleanup;
mod create;
mod list;
mod naming;

pub use cleanup::{CleanupCandidate, ReclaimReport, classify_worktrees, reclaim};
pub use create::create_worktree;
pub use list::{WorktreeEntry, list_worktrees};
pub use naming::{validate_branch_name, worktree_path};
