use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct AstCmd {
    #[arg(
        help="Print the JSON on a single line.",
        long,
    )]
    compact: bool,

    #[arg(
        help="Path to the GraphQL file to parse.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for AstCmd {
    /// Prints the best-effort AST even when there are parse errors; the
    /// errors go to stderr and the exit code reports failure.
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match Self::read_source(&self.file_path) {
            Ok(source) => source,
            Err(result) => return result,
        };

        let result = minigql::parser::parse(&source);
        let json = if self.compact {
            serde_json::to_string(result.ast())
        } else {
            serde_json::to_string_pretty(result.ast())
        };
        let json = match json {
            Ok(json) => json,
            Err(e) => return CommandResult::failure(format_args!(
                "{} Failed to serialize the AST: {e}",
                output_utils::RED_X,
            )),
        };

        if result.has_errors() {
            CommandResult::failure(format_args!(
                "{} {} parse errors:\n{}",
                output_utils::RED_X,
                result.errors.len(),
                result.format_errors(Some(&source)),
            )).with_stdout(json)
        } else {
            CommandResult::success(format_args!("{json}"))
        }
    }
}
