use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use std::path::Path;

pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;

    /// Reads a GraphQL source file, or produces the failed
    /// [`CommandResult`] to return if it can't be read.
    fn read_source(path: &Path) -> Result<String, CommandResult> {
        std::fs::read_to_string(path).map_err(|e| CommandResult::failure(format_args!(
            "{} Failed to read {path:#?}: {e}",
            output_utils::RED_X,
        )))
    }
}
