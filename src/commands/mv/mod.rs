// src/commands/mv/mod.rs
use crate::commands::{Command, CommandContext, CommandResult, Output, ShellError};
use crate::fs::{path, Node};

pub struct MvCommand;

impl Command for MvCommand {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn summary(&self) -> &'static str {
        "move or rename a file or directory"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let (src, dest) = match (ctx.arg(0), ctx.arg(1)) {
            (Some(src), Some(dest)) => (src, dest),
            _ => {
                return Err(ShellError::MissingOperand {
                    command: "mv",
                    operand: "destination file operand",
                })
            }
        };

        // 源
        let (src_parent, src_name) =
            path::split_parent_and_name(src.trim_end_matches('/'), ctx.cwd.as_str());
        let source_dir = ctx.fs.directory(&src_parent).map_err(|_| ShellError::CannotAccess {
            command: "mv",
            path: src_parent.clone(),
        })?;
        if src_name.is_empty() || path::is_dot_name(&src_name) || !source_dir.contains(&src_name) {
            return Err(ShellError::CannotStat {
                command: "mv",
                path: src.to_string(),
            });
        }
        let src_path = path::join(&src_parent, &src_name);

        // 目标: a trailing slash, `.` or `..` names a directory that keeps the source name
        let last_segment = dest.rsplit('/').next().unwrap_or(dest);
        let (dest_parent, dest_name) = if last_segment.is_empty() || path::is_dot_name(last_segment) {
            (path::resolve(dest, ctx.cwd.as_str()), src_name.clone())
        } else {
            path::split_parent_and_name(dest, ctx.cwd.as_str())
        };
        let dest_dir = ctx.fs.directory(&dest_parent).map_err(|_| ShellError::CannotAccess {
            command: "mv",
            path: dest_parent.clone(),
        })?;

        if path::join(&dest_parent, &dest_name) == src_path {
            return Ok(Output::Empty);
        }

        // An existing directory at the destination receives the source under its own name.
        let (container, final_name) = match dest_dir.get(&dest_name) {
            Some(Node::Directory(_)) => (path::join(&dest_parent, &dest_name), src_name.clone()),
            _ => (dest_parent, dest_name),
        };
        let final_path = path::join(&container, &final_name);

        if final_path == src_path {
            return Ok(Output::Empty);
        }
        if path::is_within(&container, &src_path) {
            return Err(ShellError::MoveIntoSelf {
                from: src.to_string(),
                to: final_path,
            });
        }

        let node = ctx.fs.detach(&src_parent, &src_name).map_err(|_| ShellError::CannotStat {
            command: "mv",
            path: src.to_string(),
        })?;
        match ctx.fs.directory_mut(&container) {
            Ok(target) => {
                target.insert(final_name, node);
            }
            Err(e) => {
                log::warn!("mv: destination vanished after detaching source: {}", e);
                if let Ok(dir) = ctx.fs.directory_mut(&src_parent) {
                    dir.insert(src_name, node);
                }
                return Err(ShellError::CannotAccess {
                    command: "mv",
                    path: container,
                });
            }
        }
        log::debug!("moved '{}' to '{}'", src_path, final_path);

        follow_moved_cwd(ctx, &src_path, &final_path);
        Ok(Output::Empty)
    }
}

/// Keep `cwd` pointing at a live directory: follow it into the moved subtree,
/// then fall back to the nearest surviving ancestor if an overwrite removed it.
fn follow_moved_cwd(ctx: &mut CommandContext<'_>, src_path: &str, final_path: &str) {
    if path::is_within(ctx.cwd.as_str(), src_path) {
        let rest = ctx.cwd[src_path.len()..].to_string();
        *ctx.cwd = format!("{}{}", final_path, rest);
    }
    while !ctx.fs.is_directory(ctx.cwd.as_str()) {
        *ctx.cwd = path::dirname(ctx.cwd.as_str());
    }
}
