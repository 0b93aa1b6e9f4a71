// dbgkit CLI - debugger extension commands over process snapshots.
//
// Subcommands:
//   exec           Run console lines against a snapshot, then exit
//   repl           Open the interactive console
//   list-commands  Show the registered commands

mod repl;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use dbgkit_cli::exit_codes::{
    EXIT_COMMAND_FAILED, EXIT_ERROR, EXIT_SNAPSHOT_UNREADABLE, EXIT_SUCCESS,
};
use dbgkit_cli::output::StdoutSink;
use dbgkit_cli::settings::Settings;
use dbgkit_commands::{register_builtin_commands, CommandRegistry};
use dbgkit_snapshot::ProcessSnapshot;

fn long_version() -> &'static str {
    if cfg!(debug_assertions) {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " (", env!("GIT_COMMIT_HASH"), ")",
            "\nbuild:   debug",
            "\ntarget:  ", env!("TARGET"),
        )
    } else {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " (", env!("GIT_COMMIT_HASH"), ")",
            "\nbuild:   release",
            "\ntarget:  ", env!("TARGET"),
        )
    }
}

#[derive(Parser)]
#[command(name = "dbgkit")]
#[command(about = "Debugger extension commands over process snapshots")]
#[command(long_version = long_version())]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run console lines against a snapshot, then exit
    #[command(after_help = "\
Examples:
  dbgkit exec --snapshot core.json 'dm nconn, uptime'
  dbgkit exec --snapshot core.json 'mbr listener fd backlog'
  DBGKIT_SNAPSHOT=core.json dbgkit exec 'mbr listener'")]
    Exec {
        /// Snapshot file to inspect
        #[arg(long, env = "DBGKIT_SNAPSHOT", value_name = "FILE")]
        snapshot: PathBuf,

        /// Console lines, run in order
        #[arg(required = true, value_name = "LINE")]
        lines: Vec<String>,
    },

    /// Open an interactive console on a snapshot
    Repl {
        /// Snapshot file to inspect
        #[arg(long, env = "DBGKIT_SNAPSHOT", value_name = "FILE")]
        snapshot: PathBuf,
    },

    /// List the registered commands
    ListCommands,
}

/// CLI-level failure: a message for stderr plus the process exit code.
#[derive(Debug)]
struct CliError {
    code: u8,
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn general(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    fn snapshot(msg: impl Into<String>) -> Self {
        Self { code: EXIT_SNAPSHOT_UNREADABLE, message: msg.into(), hint: None }
    }

    /// Exit code only; the failure was already reported on the command's
    /// own output stream.
    fn silent(code: u8) -> Self {
        Self { code, message: String::new(), hint: None }
    }

    fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Exec { snapshot, lines }) => cmd_exec(&snapshot, &lines),
        Some(Commands::Repl { snapshot }) => cmd_repl(&snapshot),
        Some(Commands::ListCommands) => cmd_list_commands(),
        None => {
            eprintln!("Usage: dbgkit <command> [options]");
            eprintln!("       dbgkit --help for more information");
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

fn build_registry() -> Result<CommandRegistry, CliError> {
    let mut registry = CommandRegistry::new();
    register_builtin_commands(&mut registry)
        .map_err(|err| CliError::general(err.to_string()))?;
    Ok(registry)
}

fn load_snapshot(path: &Path) -> Result<ProcessSnapshot, CliError> {
    ProcessSnapshot::load(path).map_err(|err| {
        CliError::snapshot(format!("cannot load snapshot {}: {}", path.display(), err))
            .with_hint("expected a JSON capture with a top-level \"variables\" array")
    })
}

fn cmd_exec(path: &Path, lines: &[String]) -> Result<(), CliError> {
    let registry = build_registry()?;
    let snapshot = load_snapshot(path)?;
    let mut sink = StdoutSink;
    for line in lines {
        if let Err(err) = registry.dispatch(&snapshot, &mut sink, line) {
            // Dispatch failures print like command output; the exit code
            // carries the status. Remaining lines do not run.
            println!("{}", err);
            return Err(CliError::silent(EXIT_COMMAND_FAILED));
        }
    }
    Ok(())
}

fn cmd_repl(path: &Path) -> Result<(), CliError> {
    let registry = build_registry()?;
    let snapshot = load_snapshot(path)?;
    let settings = Settings::load();
    repl::run(&registry, &snapshot, &settings)
        .map_err(|err| CliError::general(format!("console failed: {}", err)))
}

fn cmd_list_commands() -> Result<(), CliError> {
    let registry = build_registry()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for command in registry.iter() {
        writeln!(
            handle,
            "{:<8} {:<6} {}",
            command.name(),
            command.category(),
            command.summary()
        )
        .map_err(|err| CliError::general(err.to_string()))?;
    }
    Ok(())
}
