// src/commands/touch/mod.rs
use crate::commands::utils::flat_name;
use crate::commands::{Command, CommandContext, CommandResult, Output};
use crate::fs::{path, Node};

pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn summary(&self) -> &'static str {
        "create an empty file if it does not exist"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let name = flat_name(ctx.args, "touch", "file operand")?;
        let dir = ctx.current_dir_mut()?;

        if !path::is_dot_name(name) && !dir.contains(name) {
            dir.insert(name, Node::file(""));
        }
        Ok(Output::Empty)
    }
}
