pub(crate) mod parse;
pub(crate) mod run;
pub(crate) mod tokens;

use crate::Cli;
use crate::CommandResult;
use parse::ParseCmd;
use run::RunCmd;
use tokens::TokensCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "minigql")]
pub(crate) enum CommandEnum {
    /// Parse documents and summarize their definitions.
    Parse(Box<ParseCmd>),
    /// Execute a document against resolvers backed by a JSON fixture.
    Run(Box<RunCmd>),
    /// Print the tokens of a document, one per line.
    Tokens(Box<TokensCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Parse(cmd) => cmd.run(cli).await,
            Self::Run(cmd) => cmd.run(cli).await,
            Self::Tokens(cmd) => cmd.run(cli).await,
        }
    }
}
