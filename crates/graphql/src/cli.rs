use crate::commands::CommandEnum;
use clap::CommandFactory;

/// Inspect minigql documents: parse diagnostics, token streams and ASTs.
///
/// Log verbosity comes from `LOG_LEVEL` (`error` through `trace`, or
/// `verbose`) unless `--verbose` is passed.
#[derive(clap::Parser, Debug)]
#[command(name = "minigql", version, propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<CommandEnum>,

    /// Log at debug level regardless of `LOG_LEVEL`.
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Runs when no subcommand was given: shows the long help on stdout.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        let help = Self::command().render_long_help();
        println!("{help}");
        Ok(())
    }
}
