use crate::commands::{Command, CommandContext, CommandResult, Output};

pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn summary(&self) -> &'static str {
        "display available commands"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let width = ctx.registry.names().iter().map(|n| n.len()).max().unwrap_or(0);

        let mut stdout = String::from("Available commands:\n");
        for cmd in ctx.registry.iter() {
            stdout.push_str(&format!("\n  {:<width$}  {}", cmd.name(), cmd.summary(), width = width));
        }
        Ok(Output::Text(stdout))
    }
}
