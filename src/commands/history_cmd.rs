use crate::commands::{Command, CommandContext, CommandResult, Output};

pub struct HistCommand;

impl Command for HistCommand {
    fn name(&self) -> &'static str {
        "hist"
    }

    fn summary(&self) -> &'static str {
        "show the numbered command history"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        Ok(Output::Text(ctx.history.numbered()))
    }
}
