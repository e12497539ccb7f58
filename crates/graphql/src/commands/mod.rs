mod import;

use crate::Cli;
use crate::CommandResult;
use import::ImportCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Resolve `# import` directives into a single, self-contained schema.
    Import(Box<ImportCmd>),
}
impl CommandEnum {
    pub(crate) fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Import(cmd) => cmd.run(cli)
        }
    }
}
