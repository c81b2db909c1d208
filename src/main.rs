use std::io::{BufRead, IsTerminal, Write};

use clap::Parser;
use vfs_shell::{CommandResult, Output, Shell, ShellOptions};

#[derive(Parser)]
#[command(name = "vfs-shell")]
#[command(about = "An in-memory file system driven by shell-like commands")]
#[command(version)]
struct Cli {
    /// Execute commands from the command line, separated by ';'
    #[arg(short = 'c')]
    commands: Option<String>,

    /// Working directory within the virtual file system
    #[arg(long = "cwd")]
    cwd: Option<String>,

    /// Directory a bare `cd` returns to
    #[arg(long = "home")]
    home: Option<String>,

    /// Start from an empty root instead of the sample site
    #[arg(long = "empty")]
    empty: bool,

    /// Output one JSON object per command (command, output, stdout, stderr, exitCode)
    #[arg(long = "json")]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Script file with one command per line
    #[arg()]
    script_file: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut shell = Shell::new(ShellOptions {
        cwd: cli.cwd.clone(),
        home: cli.home.clone(),
        history: None,
        empty: cli.empty,
    });

    // Determine command source: -c, file, or stdin
    let lines: Vec<String> = if let Some(ref s) = cli.commands {
        s.split(';').map(String::from).collect()
    } else if let Some(ref file) = cli.script_file {
        match std::fs::read_to_string(file) {
            Ok(content) => content.lines().map(String::from).collect(),
            Err(e) => {
                eprintln!("Error: Cannot read script file: {}: {}", file, e);
                std::process::exit(1);
            }
        }
    } else if std::io::stdin().is_terminal() {
        std::process::exit(interactive(&mut shell, cli.json));
    } else {
        std::io::stdin().lock().lines().map_while(Result::ok).collect()
    };

    let mut exit_code = 0;
    for line in &lines {
        if line.trim().is_empty() {
            continue;
        }
        let result = shell.exec(line);
        exit_code = report(line.trim(), &result, cli.json);
    }
    std::process::exit(exit_code);
}

/// Read-eval-print loop with a prompt, until end of input.
fn interactive(shell: &mut Shell, json: bool) -> i32 {
    let stdin = std::io::stdin();
    let mut exit_code = 0;
    loop {
        print!("{}", shell.prompt());
        if std::io::stdout().flush().is_err() {
            break;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                log::error!("failed to read input: {}", e);
                exit_code = 1;
                break;
            }
        }
        if line.trim().is_empty() {
            continue;
        }
        let result = shell.exec(&line);
        exit_code = report(line.trim(), &result, json);
    }
    println!();
    exit_code
}

/// Print one command's result and return its exit status.
fn report(line: &str, result: &CommandResult, json: bool) -> i32 {
    let exit_code = match result {
        Ok(_) => 0,
        Err(e) => e.exit_code(),
    };

    if json {
        let (output, stdout, stderr) = match result {
            Ok(out) => (serde_json::to_value(out).unwrap_or_default(), out.to_string(), String::new()),
            Err(e) => (serde_json::Value::Null, String::new(), e.to_string()),
        };
        println!(
            "{}",
            serde_json::json!({
                "command": line,
                "output": output,
                "stdout": stdout,
                "stderr": stderr,
                "exitCode": exit_code,
            })
        );
        return exit_code;
    }

    match result {
        Ok(Output::Clear) => print!("\x1B[2J\x1B[H"),
        Ok(out) if out.is_blank() => {}
        Ok(out) => println!("{}", out),
        Err(e) => eprintln!("{}", e),
    }
    exit_code
}
