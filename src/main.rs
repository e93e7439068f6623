use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use git_snapshots::cli::{self, Cli, Parsed};
use git_snapshots::config::Config;
use git_snapshots::git::GitExecutor;
use git_snapshots::{AppResult, Repository, script};

fn main() -> ExitCode {
    let cli = match cli::parse_args(std::env::args_os()) {
        Ok(Parsed::Run(cli)) => cli,
        Ok(Parsed::Info(info)) => info.exit(),
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(e.exit_code());
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> AppResult<()> {
    let config = Config::load(cli.config.as_deref())?;
    init_tracing(cli, &config);
    debug!(
        config = ?cli.config,
        git = %config.git.binary,
        width = config.output.index_width,
        "configured"
    );

    let executor = GitExecutor::with_binary(&cli.repo, &config.git.binary);
    let repo = Repository::with_executor(cli.repo.as_str(), executor);

    // Whole listing first: on failure nothing reaches stdout
    let lines = script::generate(repo.path(), &repo, config.output.index_width)?;

    let mut out = BufWriter::new(io::stdout().lock());
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    Ok(())
}

fn init_tracing(cli: &Cli, config: &Config) {
    let Some(filter) = cli.log_filter(&config.log.filter) else {
        return;
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}
