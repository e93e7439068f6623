use crate::error::{GitError, GitResult};

/// Parse `git log --oneline` output.
///
/// Each non-blank line is `<short hash> <subject>`; the hash is the first
/// whitespace-delimited token. Order is preserved (git prints newest first).
pub fn parse_oneline_log(output: &str) -> GitResult<Vec<CommitEntry>> {
    let mut commits = Vec::new();

    for (lineno, line) in output.lines().enumerate() {
        let line = line.trim_start();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.splitn(2, char::is_whitespace);
        let hash = parts.next().unwrap_or_default();
        if !hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(GitError::ParseError(format!(
                "line {}: expected a commit hash, got {:?}",
                lineno + 1,
                hash
            )));
        }
        let subject = parts.next().unwrap_or_default().trim();

        commits.push(CommitEntry {
            hash: hash.to_string(),
            subject: subject.to_string(),
        });
    }

    Ok(commits)
}

/// One commit as listed by the log query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitEntry {
    pub hash: String,
    pub subject: String,
}

impl CommitEntry {
    /// Entry with an empty subject
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            subject: String::new(),
        }
    }
}
