// src/commands/mod.rs
pub mod cat;
pub mod cd_cmd;
pub mod clear_cmd;
pub mod errors;
pub mod help_cmd;
pub mod history_cmd;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod registry;
pub mod rm;
pub mod touch;
pub mod tree_cmd;
pub mod types;
pub mod utils;

pub use errors::{ErrorKind, ShellError};
pub use registry::{create_default_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult, Output, TreeLine};

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::fs::InMemoryFs;
    use crate::history::History;

    /// Owns everything a `CommandContext` borrows.
    pub struct TestEnv {
        pub fs: InMemoryFs,
        pub cwd: String,
        pub home: String,
        pub history: History,
        pub registry: CommandRegistry,
    }

    impl TestEnv {
        /// `/home` with a file `a.txt` ("hello") and an empty directory `docs`.
        pub fn new() -> Self {
            let mut fs = InMemoryFs::new();
            fs.write_file("/home/a.txt", "hello").unwrap();
            fs.mkdir_all("/home/docs").unwrap();
            Self {
                fs,
                cwd: "/home".to_string(),
                home: "/home".to_string(),
                history: History::new(),
                registry: create_default_registry(),
            }
        }

        pub fn run(&mut self, cmd: &dyn Command, args: &[&str]) -> CommandResult {
            let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
            let mut ctx = CommandContext {
                args: &args,
                fs: &mut self.fs,
                cwd: &mut self.cwd,
                home: &self.home,
                history: &self.history,
                registry: &self.registry,
            };
            cmd.execute(&mut ctx)
        }

        pub fn names(&self, path: &str) -> Vec<String> {
            self.fs
                .directory(path)
                .unwrap()
                .entries()
                .into_iter()
                .map(|e| e.name)
                .collect()
        }
    }
}
