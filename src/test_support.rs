use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

pub(crate) fn create_test_repo() -> TempDir {
    create_repo(false)
}

pub(crate) fn create_test_repo_with_remote() -> TempDir {
    create_repo(true)
}

fn create_repo(add_origin_remote: bool) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Ensure the repo uses a deterministic default branch name across environments.
    // This sets HEAD to an unborn `main` branch before the first commit.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    // Initial commit (required for worktree creation)
    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    if add_origin_remote {
        // Remote pointing to itself; a fetch materializes refs/remotes/origin/*.
        let path_str = path.to_string_lossy().to_string();
        git(path, &["remote", "add", "origin", &path_str]);
        git(path, &["fetch", "origin"]);
    }

    temp_dir
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}
