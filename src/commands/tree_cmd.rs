use crate::commands::{Command, CommandContext, CommandResult, Output, ShellError, TreeLine};
use crate::fs::{path, Directory, DirentEntry, Node};

pub struct TreeCommand;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

impl Command for TreeCommand {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn summary(&self) -> &'static str {
        "show the whole file system from the root"
    }

    /// Always renders from the root, whatever the current directory is.
    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let root = ctx.fs.directory(path::ROOT).map_err(|_| ShellError::CannotAccess {
            command: "tree",
            path: path::ROOT.to_string(),
        })?;

        let mut lines = Vec::new();
        build_tree(root, "", &mut lines);
        Ok(Output::Tree(lines))
    }
}

fn build_tree(dir: &Directory, prefix: &str, lines: &mut Vec<TreeLine>) {
    let count = dir.len();
    for (idx, (name, node)) in dir.children.iter().enumerate() {
        let is_last = idx + 1 == count;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };

        lines.push(TreeLine {
            prefix: format!("{}{}", prefix, connector),
            entry: DirentEntry {
                name: name.clone(),
                kind: node.kind(),
            },
        });

        if let Node::Directory(sub) = node {
            let child_prefix = format!("{}{}", prefix, if is_last { SPACE } else { PIPE });
            build_tree(sub, &child_prefix, lines);
        }
    }
}
