//! Command Errors
//!
//! Every failure a command can report. All of them are recoverable: the
//! session prints the message and waits for the next command.

use thiserror::Error;

/// Broad category of a [`ShellError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    WrongType,
    UnsupportedArgument,
    UnknownCommand,
    MissingOperand,
    /// The current directory no longer resolves to a directory.
    Inaccessible,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("{command}: missing {operand}")]
    MissingOperand {
        command: &'static str,
        operand: &'static str,
    },

    #[error("{command}: cannot use '{name}': paths with slashes are not supported")]
    UnsupportedArgument { command: &'static str, name: String },

    #[error("rm: refusing to remove '.' or '..' directory")]
    RefuseDotRemoval,

    #[error("mv: cannot move '{from}' to a subdirectory of itself, '{to}'")]
    MoveIntoSelf { from: String, to: String },

    #[error("{command}: no such directory: {path}")]
    NoSuchDirectory { command: &'static str, path: String },

    #[error("{command}: cannot access '{path}': No such directory")]
    CannotAccess { command: &'static str, path: String },

    #[error("{command}: cannot stat '{path}': No such file or directory")]
    CannotStat { command: &'static str, path: String },

    #[error("rm: cannot remove '{path}': No such file or directory")]
    CannotRemove { path: String },

    #[error("{command}: {path}: No such file")]
    NoSuchFile { command: &'static str, path: String },

    #[error("{command}: cannot create directory '{path}': File exists")]
    AlreadyExists { command: &'static str, path: String },

    #[error("{command}: {path}: Is a directory")]
    IsDirectory { command: &'static str, path: String },

    #[error("cannot access current directory: {path}")]
    CurrentDirectory { path: String },

    #[error("command not found: {name}")]
    CommandNotFound { name: String },
}

impl ShellError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShellError::MissingOperand { .. } => ErrorKind::MissingOperand,
            ShellError::UnsupportedArgument { .. }
            | ShellError::RefuseDotRemoval
            | ShellError::MoveIntoSelf { .. } => ErrorKind::UnsupportedArgument,
            ShellError::NoSuchDirectory { .. }
            | ShellError::CannotAccess { .. }
            | ShellError::CannotStat { .. }
            | ShellError::CannotRemove { .. }
            | ShellError::NoSuchFile { .. } => ErrorKind::NotFound,
            ShellError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            ShellError::IsDirectory { .. } => ErrorKind::WrongType,
            ShellError::CurrentDirectory { .. } => ErrorKind::Inaccessible,
            ShellError::CommandNotFound { .. } => ErrorKind::UnknownCommand,
        }
    }

    /// Exit status a shell would report for this error.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::UnknownCommand => 127,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ShellError::MissingOperand { command: "touch", operand: "file operand" };
        assert_eq!(err.to_string(), "touch: missing file operand");

        let err = ShellError::AlreadyExists { command: "mkdir", path: "a".to_string() };
        assert_eq!(err.to_string(), "mkdir: cannot create directory 'a': File exists");

        let err = ShellError::CommandNotFound { name: "foo".to_string() };
        assert_eq!(err.to_string(), "command not found: foo");
    }

    #[test]
    fn test_kinds_and_exit_codes() {
        let err = ShellError::IsDirectory { command: "cat", path: "home".to_string() };
        assert_eq!(err.kind(), ErrorKind::WrongType);
        assert_eq!(err.exit_code(), 1);

        let err = ShellError::CommandNotFound { name: "foo".to_string() };
        assert_eq!(err.kind(), ErrorKind::UnknownCommand);
        assert_eq!(err.exit_code(), 127);

        assert_eq!(ShellError::RefuseDotRemoval.kind(), ErrorKind::UnsupportedArgument);
    }
}
