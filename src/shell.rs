//! Shell Session
//!
//! Main entry point for the virtual shell.
//! Ties together the file system tree, the command registry and the history.

use crate::commands::{create_default_registry, CommandContext, CommandRegistry, CommandResult, Output, ShellError};
use crate::fs::{path, FsError, InMemoryFs};
use crate::history::History;

/// Home directory of the seeded layout.
pub const DEFAULT_HOME: &str = "/home";

const PROMPT_USER: &str = "user@machine";

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>My Website</title>
  <link rel="stylesheet" href="styles.css">
</head>
<body>
  <h1>Welcome to My Website</h1>
  <p>This is a simple website for demonstration.</p>
  <script src="script.js"></script>
</body>
</html>"#;

const STYLES_CSS: &str = r#"body {
  font-family: Arial, sans-serif;
  margin: 0;
  padding: 20px;
  background-color: #f5f5f5;
}

h1 {
  color: #333;
}

p {
  color: #666;
}"#;

const SCRIPT_JS: &str = r#"document.addEventListener("DOMContentLoaded", function() {
  console.log("Website loaded successfully!");

  // Add event listener to h1 element
  const heading = document.querySelector("h1");
  if (heading) {
    heading.addEventListener("click", function() {
      alert("You clicked the heading!");
    });
  }
});"#;

/// Options for creating a Shell.
#[derive(Debug, Clone, Default)]
pub struct ShellOptions {
    /// Working directory (defaults to the home directory, or `/` when empty)
    pub cwd: Option<String>,
    /// Target of a bare `cd`
    pub home: Option<String>,
    /// Initial history (defaults to the seeded `ls`)
    pub history: Option<Vec<String>>,
    /// Start from an empty root instead of the seed layout
    pub empty: bool,
}

/// One interactive session over an in-memory tree.
pub struct Shell {
    fs: InMemoryFs,
    cwd: String,
    home: String,
    history: History,
    registry: CommandRegistry,
}

impl Shell {
    /// Create a new Shell.
    pub fn new(options: ShellOptions) -> Self {
        let home = path::resolve(options.home.as_deref().unwrap_or(DEFAULT_HOME), path::ROOT);

        let mut fs = InMemoryFs::new();
        if !options.empty {
            init_filesystem(&mut fs, &home);
        }

        let default_cwd = if options.empty { path::ROOT } else { home.as_str() };
        let mut cwd = path::resolve(options.cwd.as_deref().unwrap_or(default_cwd), path::ROOT);

        // Ensure cwd exists
        if let Err(e) = fs.mkdir_all(&cwd) {
            log::warn!("cannot use '{}' as working directory: {}", cwd, e);
            cwd = path::ROOT.to_string();
        }

        let history = match options.history {
            Some(entries) => History::from_entries(entries),
            None if options.empty => History::new(),
            None => History::from_entries(vec!["ls".to_string()]),
        };

        Self {
            fs,
            cwd,
            home,
            history,
            registry: create_default_registry(),
        }
    }

    /// Execute one line of input.
    ///
    /// Blank input is ignored. Anything else is recorded in the history
    /// verbatim before it is dispatched, even if it turns out to be unknown.
    pub fn exec(&mut self, input: &str) -> CommandResult {
        let line = input.trim();
        if line.is_empty() {
            return Ok(Output::Empty);
        }
        self.history.push(line);

        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();
        let args: Vec<String> = parts.map(String::from).collect();

        let cmd = self
            .registry
            .get(&name)
            .ok_or_else(|| ShellError::CommandNotFound { name: name.clone() })?;
        log::debug!("dispatching '{}' with args {:?} in '{}'", name, args, self.cwd);

        let mut ctx = CommandContext {
            args: &args,
            fs: &mut self.fs,
            cwd: &mut self.cwd,
            home: &self.home,
            history: &self.history,
            registry: &self.registry,
        };
        let result = cmd.execute(&mut ctx);
        if let Err(e) = &result {
            log::debug!("'{}' failed: {}", name, e);
        }
        result
    }

    /// Recall the previous history entry for the input box.
    pub fn history_previous(&mut self) -> Option<&str> {
        self.history.previous()
    }

    /// Recall the next history entry, `""` past the newest.
    pub fn history_next(&mut self) -> &str {
        self.history.next()
    }

    /// Read a file relative to cwd.
    pub fn read_file(&self, file: &str) -> Result<&str, FsError> {
        let resolved = path::resolve(file, &self.cwd);
        self.fs.read_file(&resolved)
    }

    /// Write a file relative to cwd, creating parent directories.
    pub fn write_file(&mut self, file: &str, content: &str) -> Result<(), FsError> {
        let resolved = path::resolve(file, &self.cwd);
        self.fs.write_file(&resolved, content)
    }

    /// Get current working directory.
    pub fn get_cwd(&self) -> &str {
        &self.cwd
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn fs(&self) -> &InMemoryFs {
        &self.fs
    }

    /// Prompt shown before each input line.
    pub fn prompt(&self) -> String {
        format!("{}:{}$ ", PROMPT_USER, self.cwd)
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellOptions::default())
    }
}

/// Populate the seed layout: the home directory holding a tiny web site.
fn init_filesystem(fs: &mut InMemoryFs, home: &str) {
    let files = [
        ("index.html", INDEX_HTML),
        ("styles.css", STYLES_CSS),
        ("script.js", SCRIPT_JS),
    ];
    for (name, content) in files {
        let file = path::join(home, name);
        if let Err(e) = fs.write_file(&file, content) {
            log::warn!("failed to seed '{}': {}", file, e);
        }
    }
}
