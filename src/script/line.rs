use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default zero-padded width of the sequence number
pub const DEFAULT_INDEX_WIDTH: usize = 3;

/// One line of the generated script:
/// `<index>-<hash>: git --git-dir=<repo>/.git archive <hash>^{tree}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub index: usize,
    pub hash: String,
    pub repo: String,
    pub width: usize,
}

impl ScriptLine {
    pub fn new(index: usize, hash: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            index,
            hash: hash.into(),
            repo: repo.into(),
            width: DEFAULT_INDEX_WIDTH,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Snapshot label, e.g. `001-abc1234`. Longer indices are never truncated.
    pub fn name(&self) -> String {
        format!("{:0width$}-{}", self.index, self.hash, width = self.width)
    }

    /// The archive command for this snapshot
    pub fn command(&self) -> String {
        format!(
            "git --git-dir={}/.git archive {}^{{tree}}",
            self.repo, self.hash
        )
    }
}

impl fmt::Display for ScriptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.command())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptParseError {
    #[error("Missing ':' separator in script line: {0}")]
    MissingSeparator(String),

    #[error("Empty command in script line: {0}")]
    EmptyCommand(String),
}

/// A script line split back into snapshot name and shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub name: String,
    pub command: String,
}

impl ScriptEntry {
    /// Split at the first ':'; leading whitespace of the command is dropped.
    pub fn parse(line: &str) -> Result<Self, ScriptParseError> {
        let (name, command) = line
            .split_once(':')
            .ok_or_else(|| ScriptParseError::MissingSeparator(line.to_string()))?;
        let command = command.trim_start();
        if command.is_empty() {
            return Err(ScriptParseError::EmptyCommand(line.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            command: command.to_string(),
        })
    }
}

impl FromStr for ScriptEntry {
    type Err = ScriptParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&ScriptLine> for ScriptEntry {
    fn from(line: &ScriptLine) -> Self {
        Self {
            name: line.name(),
            command: line.command(),
        }
    }
}
