use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Print one `git archive` command per commit of a repository, oldest first
#[derive(Debug, Parser)]
#[command(name = "git-snapshots", version, about, long_about = None)]
pub struct Cli {
    /// Path to the git repository; used verbatim in the emitted commands
    pub repo: String,

    /// TOML config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More diagnostics on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// No diagnostics at all
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// What the command line asked for
#[derive(Debug)]
pub enum Parsed {
    /// Generate the script
    Run(Cli),
    /// `--help` or `--version`; print it and exit successfully
    Info(clap::Error),
}

/// Parse `args` (including the program name).
///
/// Bad command lines become `AppError::Invocation` instead of exiting.
pub fn parse_args<I, T>(args: I) -> AppResult<Parsed>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Parsed::Run(cli)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(Parsed::Info(e))
        }
        Err(e) => Err(AppError::Invocation(e.to_string().trim_end().to_string())),
    }
}

impl Cli {
    /// Tracing filter for this run, `None` when diagnostics are off.
    ///
    /// `default` is used when no `-v` was given.
    pub fn log_filter(&self, default: &str) -> Option<String> {
        if self.quiet {
            return None;
        }

        let filter = match self.verbose {
            0 => default,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        Some(filter.to_string())
    }
}
