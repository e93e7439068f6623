pub mod executor;
pub mod memory;
pub mod parser;
pub mod repository;

// Re-export commonly used types
pub use executor::{CommandOutput, DEFAULT_GIT_BINARY, GitExecutor};
pub use memory::MemoryLog;
pub use parser::{CommitEntry, parse_oneline_log};
pub use repository::{CommitLog, Repository};
