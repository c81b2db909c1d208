// src/commands/types.rs
use std::fmt;

use serde::Serialize;

use super::errors::ShellError;
use super::registry::CommandRegistry;
use crate::fs::{Directory, DirentEntry, InMemoryFs};
use crate::history::History;

/// What a successful command hands to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Output {
    /// Success with nothing to show.
    Empty,
    /// Plain text, e.g. file content or the history listing.
    Text(String),
    /// Informational message that is not an error.
    Notice(String),
    /// Directory entries tagged by kind.
    Listing(Vec<DirentEntry>),
    /// Lines of a rendered tree below the root.
    Tree(Vec<TreeLine>),
    /// Ask the renderer to drop its scrollback.
    Clear,
}

impl Output {
    pub fn text(s: impl Into<String>) -> Self {
        Output::Text(s.into())
    }

    /// Whether rendering this produces no visible text.
    pub fn is_blank(&self) -> bool {
        match self {
            Output::Empty | Output::Clear => true,
            Output::Text(s) | Output::Notice(s) => s.is_empty(),
            Output::Listing(entries) => entries.is_empty(),
            Output::Tree(_) => false,
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Empty | Output::Clear => Ok(()),
            Output::Text(s) | Output::Notice(s) => f.write_str(s),
            Output::Listing(entries) => {
                let names: Vec<String> = entries.iter().map(DirentEntry::display_name).collect();
                f.write_str(&names.join("  "))
            }
            Output::Tree(lines) => {
                f.write_str("/")?;
                for line in lines {
                    write!(f, "\n{}", line)?;
                }
                Ok(())
            }
        }
    }
}

/// One entry of a tree rendering: connector prefix plus the entry itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeLine {
    pub prefix: String,
    #[serde(flatten)]
    pub entry: DirentEntry,
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.entry.display_name())
    }
}

/// 命令执行结果
pub type CommandResult = Result<Output, ShellError>;

/// 命令执行上下文
pub struct CommandContext<'a> {
    pub args: &'a [String],
    pub fs: &'a mut InMemoryFs,
    pub cwd: &'a mut String,
    pub home: &'a str,
    pub history: &'a History,
    pub registry: &'a CommandRegistry,
}

impl<'a> CommandContext<'a> {
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).map(String::as_str)
    }

    /// The directory named by `cwd`.
    pub fn current_dir(&self) -> Result<&Directory, ShellError> {
        match self.fs.directory(self.cwd.as_str()) {
            Ok(dir) => Ok(dir),
            Err(e) => {
                log::warn!("current directory is unusable: {}", e);
                Err(ShellError::CurrentDirectory { path: self.cwd.clone() })
            }
        }
    }

    pub fn current_dir_mut(&mut self) -> Result<&mut Directory, ShellError> {
        let cwd = self.cwd.as_str();
        match self.fs.directory_mut(cwd) {
            Ok(dir) => Ok(dir),
            Err(e) => {
                log::warn!("current directory is unusable: {}", e);
                Err(ShellError::CurrentDirectory { path: cwd.to_string() })
            }
        }
    }
}

/// 命令 trait
pub trait Command {
    fn name(&self) -> &'static str;

    /// One-line description shown by `help`.
    fn summary(&self) -> &'static str;

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::NodeKind;

    fn entry(name: &str, kind: NodeKind) -> DirentEntry {
        DirentEntry { name: name.to_string(), kind }
    }

    #[test]
    fn test_listing_display() {
        let out = Output::Listing(vec![
            entry("home", NodeKind::Directory),
            entry("a.txt", NodeKind::File),
        ]);
        assert_eq!(out.to_string(), "home/  a.txt");
        assert!(Output::Listing(vec![]).is_blank());
    }

    #[test]
    fn test_tree_display() {
        let out = Output::Tree(vec![
            TreeLine { prefix: "└── ".to_string(), entry: entry("home", NodeKind::Directory) },
            TreeLine { prefix: "    └── ".to_string(), entry: entry("a", NodeKind::File) },
        ]);
        assert_eq!(out.to_string(), "/\n└── home/\n    └── a");
    }

    #[test]
    fn test_output_serializes_tagged() {
        let out = Output::Listing(vec![entry("home", NodeKind::Directory)]);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "listing", "value": [{"name": "home", "kind": "directory"}]})
        );
        assert_eq!(serde_json::to_value(Output::Empty).unwrap(), serde_json::json!({"type": "empty"}));
    }
}
