// src/commands/ls/mod.rs
use crate::commands::{Command, CommandContext, CommandResult, Output};

pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn summary(&self) -> &'static str {
        "list the current directory"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let dir = ctx.current_dir()?;
        Ok(Output::Listing(dir.entries()))
    }
}
