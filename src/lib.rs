pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod script;

// Re-export commonly used types for convenience
pub use error::{AppError, AppResult, GitError, GitResult};
pub use git::{CommitEntry, CommitLog, MemoryLog, Repository};
pub use script::{ScriptEntry, ScriptLine, generate, render};
