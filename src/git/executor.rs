use crate::error::{GitError, GitResult};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// Default git executable
pub const DEFAULT_GIT_BINARY: &str = "git";

/// Result of executing a git command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub success: bool,
}

/// Executes git commands within a repository directory
#[derive(Debug)]
pub struct GitExecutor {
    repo_path: PathBuf,
    binary: String,
}

impl GitExecutor {
    /// Create a new GitExecutor for the given repository path
    pub fn new<P: AsRef<Path>>(repo_path: P) -> Self {
        Self::with_binary(repo_path, DEFAULT_GIT_BINARY)
    }

    /// Create a GitExecutor that runs a specific git executable
    pub fn with_binary<P: AsRef<Path>>(repo_path: P, binary: &str) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
            binary: binary.to_string(),
        }
    }

    /// Run git with `args` (without the leading "git") and wait for it.
    ///
    /// Non-zero exits become errors.
    /// Example: executor.run(&["log", "--oneline"])
    pub fn run<S: AsRef<OsStr>>(&self, args: &[S]) -> GitResult<CommandOutput> {
        let output = self.spawn(args)?;
        self.process_output(output, args)
    }

    fn spawn<S: AsRef<OsStr>>(&self, args: &[S]) -> GitResult<Output> {
        debug!(
            binary = %self.binary,
            dir = %self.repo_path.display(),
            command = %render_args(args),
            "running git"
        );

        // git's messages are matched below, so keep them untranslated
        let output = Command::new(&self.binary)
            .args(args)
            .current_dir(&self.repo_path)
            .env("LC_ALL", "C")
            .output()?;
        Ok(output)
    }

    /// Process command output into CommandOutput struct
    fn process_output<S: AsRef<OsStr>>(
        &self,
        output: Output,
        args: &[S],
    ) -> GitResult<CommandOutput> {
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);
        let success = output.status.success();

        debug!(exit_code, success, "git finished");

        if !success {
            if stderr.contains("not a git repository") {
                return Err(GitError::NotARepository);
            }
            if stderr.contains("does not have any commits yet") {
                return Err(GitError::NoCommits);
            }
            return Err(GitError::CommandFailed(format!(
                "Command 'git {}' failed with exit code {}: {}",
                render_args(args),
                exit_code,
                stderr.trim()
            )));
        }

        Ok(CommandOutput {
            stdout,
            stderr,
            exit_code,
            success,
        })
    }

    /// Get the repository path
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Get the git executable this executor runs
    pub fn binary(&self) -> &str {
        &self.binary
    }
}

fn render_args<S: AsRef<OsStr>>(args: &[S]) -> String {
    args.iter()
        .map(|a| a.as_ref().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let repo_path = temp_dir.path().to_path_buf();

        Command::new("git")
            .args(["init"])
            .current_dir(&repo_path)
            .output()
            .unwrap();

        (temp_dir, repo_path)
    }

    #[test]
    fn test_run_status() {
        let (_temp, repo_path) = create_test_repo();
        let executor = GitExecutor::new(&repo_path);

        let output = executor.run(&["status", "--porcelain"]).unwrap();
        assert!(output.success);
        assert_eq!(output.exit_code, 0);
    }

    fn commit(repo_path: &Path, message: &str) {
        Command::new("git")
            .args(["-c", "user.name=Test User", "-c", "user.email=test@example.com"])
            .args(["commit", "--allow-empty", "-m", message])
            .current_dir(repo_path)
            .output()
            .unwrap();
    }

    #[test]
    fn test_run_log_empty_repo_has_no_commits() {
        let (_temp, repo_path) = create_test_repo();
        let executor = GitExecutor::new(&repo_path);

        let result = executor.run(&["log", "--oneline"]);
        assert!(matches!(result, Err(GitError::NoCommits)));
    }

    #[test]
    fn test_run_log_broken_branch_fails() {
        let (_temp, repo_path) = create_test_repo();
        commit(&repo_path, "first");
        let executor = GitExecutor::new(&repo_path);
        let branch = executor.run(&["symbolic-ref", "HEAD"]).unwrap();
        let ref_file = repo_path.join(".git").join(branch.stdout.trim());
        std::fs::write(ref_file, "this is not a hash\n").unwrap();

        let result = executor.run(&["log", "--oneline"]);
        assert!(matches!(result, Err(GitError::CommandFailed(_))));
    }

    #[test]
    fn test_run_outside_repository() {
        let temp_dir = TempDir::new().unwrap();
        let executor = GitExecutor::new(temp_dir.path());

        let result = executor.run(&["log", "--oneline"]);
        assert!(matches!(result, Err(GitError::NotARepository)));
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let executor = GitExecutor::new(temp_dir.path().join("does-not-exist"));

        let result = executor.run(&["status"]);
        assert!(matches!(result, Err(GitError::IoError(_))));
    }

    #[test]
    fn test_missing_binary() {
        let (_temp, repo_path) = create_test_repo();
        let executor = GitExecutor::with_binary(&repo_path, "git-binary-that-does-not-exist");

        let result = executor.run(&["--version"]);
        assert!(matches!(result, Err(GitError::IoError(_))));
    }

    #[test]
    fn test_accessors() {
        let (_temp, repo_path) = create_test_repo();
        let executor = GitExecutor::new(&repo_path);

        assert_eq!(executor.repo_path(), repo_path.as_path());
        assert_eq!(executor.binary(), DEFAULT_GIT_BINARY);
    }
}
