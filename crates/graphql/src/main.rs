mod cli;
mod command;
mod command_result;
mod commands;
mod file_discovery;
mod output_utils;

use clap::Parser;
use std::process::ExitCode;
use tracing::Level;

pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: Level = Level::INFO;
const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.cmd.take() else {
        return match cli.run_default().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                ExitCode::FAILURE
            },
        };
    };
    command.run(cli).await.report()
}

/// Maps a `LOG_LEVEL` value to a tracing level, ignoring case and
/// surrounding whitespace. `VERBOSE` is an alias for `DEBUG`.
fn parse_log_level(value: &str) -> Option<Level> {
    let level = match value.trim().to_ascii_uppercase().as_str() {
        "ERROR" => Level::ERROR,
        "WARN" => Level::WARN,
        "INFO" => Level::INFO,
        "DEBUG" | "VERBOSE" => Level::DEBUG,
        "TRACE" => Level::TRACE,
        _ => return None,
    };
    Some(level)
}

/// Installs a stderr fmt subscriber so stdout carries only command output.
/// Records the libraries emit through the `log` facade land here too.
fn init_logging(verbose: bool) {
    let env_value = std::env::var(LOG_LEVEL_ENV_VAR).ok();
    let parsed = env_value.as_deref().map(parse_log_level);
    let level = match (verbose, parsed) {
        (true, _) => Level::DEBUG,
        (false, Some(Some(level))) => level,
        (false, _) => DEFAULT_LOG_LEVEL,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("logging at `{level}`");

    if !verbose && let (Some(value), Some(None)) = (&env_value, parsed) {
        log::warn!("ignoring invalid `{LOG_LEVEL_ENV_VAR}` value `{}`", value.trim());
    }
}
