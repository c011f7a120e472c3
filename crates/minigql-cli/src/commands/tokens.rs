use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use minigql::token_source::StrGraphQLTokenSource;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct TokensCmd {
    #[arg(
        help="Path to the document to tokenize.",
        name="FILE",
    )]
    file: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for TokensCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match std::fs::read_to_string(&self.file)
            .with_context(|| format!("Failed to read {:?}", self.file))
        {
            Ok(source) => source,
            Err(e) => return CommandResult::error(&e),
        };

        CommandResult::stdout(format_args!("{}", render_tokens(&source)))
    }
}

/// One line per token, through the final `EOF`: `KIND "literal" @start..end`.
pub(crate) fn render_tokens(source: &str) -> String {
    let mut output = String::new();
    for token in StrGraphQLTokenSource::new(source) {
        let _ = writeln!(
            output,
            "{:<10} {:?} @{}..{}",
            token.kind.name(),
            token.literal,
            token.span.start,
            token.span.end,
        );
    }
    output.truncate(output.trim_end().len());
    output
}
