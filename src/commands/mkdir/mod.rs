// src/commands/mkdir/mod.rs
use crate::commands::utils::flat_name;
use crate::commands::{Command, CommandContext, CommandResult, Output, ShellError};
use crate::fs::{path, Node};

pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn summary(&self) -> &'static str {
        "create a directory in the current directory"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let name = flat_name(ctx.args, "mkdir", "operand")?;
        let dir = ctx.current_dir_mut()?;

        // `.` and `..` always name existing directories.
        if path::is_dot_name(name) || dir.contains(name) {
            return Err(ShellError::AlreadyExists {
                command: "mkdir",
                path: name.to_string(),
            });
        }

        dir.insert(name, Node::empty_dir());
        Ok(Output::Empty)
    }
}
