use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use minigql::parser::token_source::StrGraphQLTokenSource;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct TokensCmd {
    #[arg(
        help="Path to the GraphQL file to tokenize.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for TokensCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match Self::read_source(&self.file_path) {
            Ok(source) => source,
            Err(result) => return result,
        };

        let mut output = String::new();
        let mut num_illegal = 0;
        for token in StrGraphQLTokenSource::new(&source) {
            if matches!(token.kind, minigql::parser::token::GraphQLTokenKind::Illegal(_)) {
                num_illegal += 1;
            }
            let _ = writeln!(
                output,
                "{:>6}..{:<6} {}",
                token.span.start,
                token.span.end,
                token.kind,
            );
        }
        log::debug!("Lexed {:#?} with {num_illegal} illegal characters.", self.file_path);

        CommandResult::success(format_args!("{}", output.trim_end()))
    }
}
