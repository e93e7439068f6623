use crate::error::GitResult;
use crate::git::parser::CommitEntry;
use crate::git::repository::CommitLog;

/// In-memory commit log, for tests and benchmarks
#[derive(Debug, Clone, Default)]
pub struct MemoryLog {
    newest_first: Vec<CommitEntry>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from hashes listed newest first
    pub fn from_hashes<I, S>(hashes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            newest_first: hashes.into_iter().map(CommitEntry::from_hash).collect(),
        }
    }

    /// Record a new commit on top of the log
    pub fn commit(&mut self, hash: impl Into<String>, subject: impl Into<String>) {
        self.newest_first.insert(
            0,
            CommitEntry {
                hash: hash.into(),
                subject: subject.into(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.newest_first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.newest_first.is_empty()
    }
}

impl CommitLog for MemoryLog {
    fn newest_first(&self) -> GitResult<Vec<CommitEntry>> {
        Ok(self.newest_first.clone())
    }
}
