//! cd - Change directory
//!
//! Supports:
//! - cd        - change to the home directory
//! - cd ..     - go up one level (notice at the root)
//! - cd /      - go to the root
//! - cd <path> - absolute or relative, `.` and `..` allowed anywhere

use crate::commands::{Command, CommandContext, CommandResult, Output, ShellError};
use crate::fs::path;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn summary(&self) -> &'static str {
        "change the current directory"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let target = match ctx.arg(0) {
            Some(t) => t,
            None => {
                if !ctx.fs.is_directory(ctx.home) {
                    return Err(ShellError::NoSuchDirectory {
                        command: "cd",
                        path: ctx.home.to_string(),
                    });
                }
                *ctx.cwd = ctx.home.to_string();
                return Ok(Output::Empty);
            }
        };

        match target {
            ".." => {
                if ctx.cwd.as_str() == path::ROOT {
                    return Ok(Output::Notice("Already at root directory".to_string()));
                }
                *ctx.cwd = path::dirname(ctx.cwd.as_str());
            }
            "/" => *ctx.cwd = path::ROOT.to_string(),
            _ => {
                if !target.starts_with('/') {
                    ctx.current_dir()?;
                }
                let resolved = path::resolve(target, ctx.cwd.as_str());
                if !ctx.fs.is_directory(&resolved) {
                    return Err(ShellError::NoSuchDirectory {
                        command: "cd",
                        path: target.to_string(),
                    });
                }
                *ctx.cwd = resolved;
            }
        }
        Ok(Output::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::mkdir::MkdirCommand;
    use crate::commands::test_support::TestEnv;
    use crate::commands::ErrorKind;

    #[test]
    fn test_cd_relative_and_back() {
        let mut env = TestEnv::new();
        env.run(&CdCommand, &["docs"]).unwrap();
        assert_eq!(env.cwd, "/home/docs");
        env.run(&CdCommand, &[".."]).unwrap();
        assert_eq!(env.cwd, "/home");
    }

    #[test]
    fn test_cd_mkdir_round_trip() {
        let mut env = TestEnv::new();
        let before = env.cwd.clone();
        env.run(&MkdirCommand, &["foo"]).unwrap();
        env.run(&CdCommand, &["foo"]).unwrap();
        env.run(&CdCommand, &[".."]).unwrap();
        assert_eq!(env.cwd, before);
    }

    #[test]
    fn test_cd_no_args_goes_home() {
        let mut env = TestEnv::new();
        env.run(&CdCommand, &["/"]).unwrap();
        assert_eq!(env.cwd, "/");
        env.run(&CdCommand, &[]).unwrap();
        assert_eq!(env.cwd, "/home");
    }

    #[test]
    fn test_cd_up_at_root_is_notice() {
        let mut env = TestEnv::new();
        env.run(&CdCommand, &["/"]).unwrap();
        let out = env.run(&CdCommand, &[".."]).unwrap();
        assert_eq!(out, Output::Notice("Already at root directory".to_string()));
        assert_eq!(env.cwd, "/");
    }

    #[test]
    fn test_cd_nested_paths() {
        let mut env = TestEnv::new();
        env.run(&CdCommand, &["/home/./docs/../docs/"]).unwrap();
        assert_eq!(env.cwd, "/home/docs");
        env.run(&CdCommand, &["../.."]).unwrap();
        assert_eq!(env.cwd, "/");
    }

    #[test]
    fn test_cd_into_file_or_missing_fails() {
        let mut env = TestEnv::new();
        let err = env.run(&CdCommand, &["a.txt"]).unwrap_err();
        assert_eq!(err.to_string(), "cd: no such directory: a.txt");
        assert_eq!(err.kind(), ErrorKind::NotFound);

        assert!(env.run(&CdCommand, &["nowhere"]).is_err());
        assert_eq!(env.cwd, "/home");
    }

    #[test]
    fn test_cd_absolute_from_stale_cwd() {
        let mut env = TestEnv::new();
        env.cwd = "/home/gone".to_string();
        let err = env.run(&CdCommand, &["docs"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Inaccessible);

        env.run(&CdCommand, &["/home/docs"]).unwrap();
        assert_eq!(env.cwd, "/home/docs");
    }

    #[test]
    fn test_cd_home_removed() {
        let mut env = TestEnv::new();
        env.run(&CdCommand, &["/"]).unwrap();
        env.fs.detach("/", "home").unwrap();
        assert!(env.run(&CdCommand, &[]).is_err());
        assert_eq!(env.cwd, "/");
    }
}
