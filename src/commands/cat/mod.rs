// src/commands/cat/mod.rs
use crate::commands::utils::flat_name;
use crate::commands::{Command, CommandContext, CommandResult, Output, ShellError};
use crate::fs::{path, Node};

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn summary(&self) -> &'static str {
        "print the content of a file"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let name = flat_name(ctx.args, "cat", "file operand")?;
        let dir = ctx.current_dir()?;

        let is_directory = || ShellError::IsDirectory {
            command: "cat",
            path: name.to_string(),
        };
        if path::is_dot_name(name) {
            return Err(is_directory());
        }

        match dir.get(name) {
            Some(Node::File(file)) => Ok(Output::Text(file.content.clone())),
            Some(Node::Directory(_)) => Err(is_directory()),
            None => Err(ShellError::NoSuchFile {
                command: "cat",
                path: name.to_string(),
            }),
        }
    }
}
