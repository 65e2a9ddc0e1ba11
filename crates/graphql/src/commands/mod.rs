mod ast;
mod parse;
mod tokens;

use crate::Cli;
use crate::CommandResult;
use ast::AstCmd;
use parse::ParseCmd;
use tokens::TokensCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "minigql")]
pub(crate) enum CommandEnum {
    /// Print the parsed document of a file as JSON.
    Ast(Box<AstCmd>),
    /// Parse GraphQL files and report definitions and diagnostics.
    Parse(Box<ParseCmd>),
    /// Print the token stream of a file.
    Tokens(Box<TokensCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Ast(cmd) => cmd.run(cli).await,
            Self::Parse(cmd) => cmd.run(cli).await,
            Self::Tokens(cmd) => cmd.run(cli).await,
        }
    }
}
