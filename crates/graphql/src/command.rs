use crate::Cli;
use crate::CommandResult;

pub(crate) trait RunnableCommand: std::fmt::Debug {
    fn run(self, cli: Cli) -> CommandResult;
}
