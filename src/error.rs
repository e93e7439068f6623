use std::io;
use thiserror::Error;

use crate::config::settings::ConfigError;

/// Errors that can occur while querying a repository's history
#[derive(Debug, Error)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Current branch has no commits yet")]
    NoCommits,

    #[error("Git command failed: {0}")]
    CommandFailed(String),

    #[error("Failed to parse git output: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Top-level application error
///
/// `Invocation` covers bad command lines, `RepositoryQuery` everything that
/// goes wrong while reading history. Module errors convert via `From`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid invocation: {0}")]
    Invocation(String),

    #[error("Repository query failed: {0}")]
    RepositoryQuery(#[from] GitError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Invocation(_) => 2,
            _ => 1,
        }
    }
}

/// Result type for git operations
pub type GitResult<T> = std::result::Result<T, GitError>;

/// Result type for application-level operations
pub type AppResult<T> = std::result::Result<T, AppError>;
