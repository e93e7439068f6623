use crate::error::{GitError, GitResult};
use crate::git::executor::GitExecutor;
use crate::git::parser::{self, CommitEntry};
use tracing::{info, warn};

/// Something that can list a repository's commits.
///
/// Implementations return commits newest first, the way `git log` does.
pub trait CommitLog {
    fn newest_first(&self) -> GitResult<Vec<CommitEntry>>;
}

/// A git repository on disk, queried through the system git binary
#[derive(Debug)]
pub struct Repository {
    path: String,
    executor: GitExecutor,
}

impl Repository {
    /// Open the repository at `path` using the default git binary.
    ///
    /// `path` is kept exactly as given; nothing is checked until the log
    /// is queried.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let executor = GitExecutor::new(&path);

        Self { path, executor }
    }

    /// Open the repository at `path` with a preconfigured executor
    pub fn with_executor(path: impl Into<String>, executor: GitExecutor) -> Self {
        Self {
            path: path.into(),
            executor,
        }
    }

    /// The repository path as given
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl CommitLog for Repository {
    fn newest_first(&self) -> GitResult<Vec<CommitEntry>> {
        let output = match self.executor.run(&["log", "--oneline", "--no-color"]) {
            Ok(output) => output,
            Err(GitError::NoCommits) => {
                warn!(repo = %self.path, "repository has no commits yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let commits = parser::parse_oneline_log(&output.stdout)?;
        info!(repo = %self.path, commits = commits.len(), "read commit log");
        Ok(commits)
    }
}
