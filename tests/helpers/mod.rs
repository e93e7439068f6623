#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn git(repo_path: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Helper to create a test git repository
pub fn create_test_repo() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init"]);
    git(&repo_path, &["config", "user.name", "Test User"]);
    git(&repo_path, &["config", "user.email", "test@example.com"]);
    git(&repo_path, &["config", "commit.gpgsign", "false"]);

    (temp_dir, repo_path)
}

/// Helper to create a commit, returning its short hash
pub fn create_commit(repo_path: &Path, file: &str, content: &str, message: &str) -> String {
    fs::write(repo_path.join(file), content).expect("Failed to write file");
    git(repo_path, &["add", file]);
    git(repo_path, &["commit", "-m", message]);
    git(repo_path, &["log", "-1", "--format=%h"])
}

/// Helper to create `count` commits, returning short hashes oldest first
pub fn create_commits(repo_path: &Path, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            create_commit(
                repo_path,
                "file.txt",
                &format!("content {}", i),
                &format!("Commit {}", i),
            )
        })
        .collect()
}

/// Root commit of the repository
pub fn root_commit(repo_path: &Path) -> String {
    let full = git(repo_path, &["rev-list", "--max-parents=0", "HEAD"]);
    git(repo_path, &["rev-parse", "--short", &full])
}

/// Overwrite the ref HEAD points at with garbage
pub fn break_current_branch(repo_path: &Path) {
    let branch = git(repo_path, &["symbolic-ref", "HEAD"]);
    fs::write(repo_path.join(".git").join(branch), "this is not a hash\n")
        .expect("Failed to overwrite branch ref");
}

/// Path as a string, the way a user would pass it on the command line
pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
