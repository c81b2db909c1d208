//! vfs-shell - An in-memory file system driven by shell-like commands
//!
//! This library provides a tree of directories and text files that lives
//! entirely in memory, a small set of shell commands operating on it, and a
//! session that tracks the working directory and command history.

pub mod commands;
pub mod fs;
pub mod history;
pub mod shell;

pub use commands::{Command, CommandResult, ErrorKind, Output, ShellError};
pub use fs::{FsError, InMemoryFs, Node, NodeKind};
pub use history::History;
pub use shell::{Shell, ShellOptions};
