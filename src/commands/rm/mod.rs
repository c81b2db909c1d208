// src/commands/rm/mod.rs
use crate::commands::utils::flat_name;
use crate::commands::{Command, CommandContext, CommandResult, Output, ShellError};
use crate::fs::path;

pub struct RmCommand;

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn summary(&self) -> &'static str {
        "remove a file or directory (recursively)"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let name = flat_name(ctx.args, "rm", "operand")?;
        if path::is_dot_name(name) {
            return Err(ShellError::RefuseDotRemoval);
        }

        // Only entries of the current directory are addressable, so the
        // current directory itself always survives.
        ctx.current_dir_mut()?
            .remove(name)
            .ok_or_else(|| ShellError::CannotRemove { path: name.to_string() })?;
        log::debug!("removed '{}' from '{}'", name, ctx.cwd);
        Ok(Output::Empty)
    }
}
