//! Turning a commit log into the snapshot script.

pub mod line;

pub use line::{DEFAULT_INDEX_WIDTH, ScriptEntry, ScriptLine, ScriptParseError};

use crate::error::AppResult;
use crate::git::{CommitEntry, CommitLog};

/// Build script lines for `repo` from commits listed newest first.
///
/// The result is oldest first, numbered from 1.
pub fn render(repo: &str, newest_first: &[CommitEntry], width: usize) -> Vec<ScriptLine> {
    newest_first
        .iter()
        .rev()
        .enumerate()
        .map(|(i, commit)| ScriptLine::new(i + 1, commit.hash.as_str(), repo).with_width(width))
        .collect()
}

/// Query `log` and render the full script. Nothing is returned on failure.
pub fn generate<L: CommitLog + ?Sized>(
    repo: &str,
    log: &L,
    width: usize,
) -> AppResult<Vec<ScriptLine>> {
    let commits = log.newest_first()?;
    Ok(render(repo, &commits, width))
}
