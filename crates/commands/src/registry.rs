//! Command registry and dispatch
//!
//! The registry is the seam between a debugger host and its extension
//! commands. Design principles:
//!
//! - Registration is explicit: the host calls `register`, nothing happens
//!   at load time
//! - Commands are objects behind a trait, so hosts can mix built-ins with
//!   their own
//! - Dispatch never prints: per-expression output goes through the sink the
//!   host passed in, and a returned error is the host's to render

use std::fmt;

use dbgkit_core::{EvalContext, EvalError, OutputSink};

// ============================================================================
// Categories
// ============================================================================

/// Classification tag attached to every command, used to group the help
/// surface the way debugger front ends group theirs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandCategory {
    /// Commands that examine program data.
    Data,
    /// User-defined convenience commands.
    User,
}

impl CommandCategory {
    /// Display name for the category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::User => "user",
        }
    }
}

impl fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Completion protocol
// ============================================================================

/// Reply to a completion request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Sentinel: the host should run its own symbol completion instead.
    Symbols,
    /// Explicit candidate list. Empty means "nothing to offer", which is
    /// distinct from falling back to symbols.
    Candidates(Vec<String>),
}

// ============================================================================
// Errors
// ============================================================================

/// Failure to add a command to the registry.
#[derive(Debug)]
pub enum RegistryError {
    /// A command with this name is already registered.
    DuplicateName(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName(name) => {
                write!(f, "command \"{}\" is already registered", name)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Failure reported by dispatch or by a command that had to abort.
///
/// Per-expression failures inside a batch are not errors at this level;
/// commands report those on their own output lines and return `Ok`.
#[derive(Debug)]
pub enum CommandError {
    /// The input line named no registered command.
    UnknownCommand(String),
    /// The argument string was unusable; the payload is the usage line.
    Usage(&'static str),
    /// The command's target expression failed to evaluate.
    Eval { expr: String, reason: EvalError },
    /// The command's target evaluated to a value with no fields.
    NotAggregate { expr: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand(name) => write!(f, "undefined command: \"{}\"", name),
            Self::Usage(usage) => f.write_str(usage),
            Self::Eval { expr, reason } => {
                write!(f, "cannot evaluate \"{}\": {}", expr, reason)
            }
            Self::NotAggregate { expr } => {
                write!(f, "\"{}\" is not an aggregate value", expr)
            }
        }
    }
}

impl std::error::Error for CommandError {}

// ============================================================================
// Command trait
// ============================================================================

/// An extension command the host can invoke by name.
pub trait Command {
    /// Name the command is invoked by
    fn name(&self) -> &'static str;

    /// Category tag for help grouping
    fn category(&self) -> CommandCategory;

    /// One-line description for command listings
    fn summary(&self) -> &'static str;

    /// Usage line printed when the arguments are unusable
    fn usage(&self) -> &'static str;

    /// Run the command against `arg`, the raw text after the command word.
    /// Implementations should:
    /// - Write result lines through `out`, one per item, in input order
    /// - Return `Err` only for failures that abort the whole command
    fn invoke(
        &self,
        ctx: &dyn EvalContext,
        out: &mut dyn OutputSink,
        arg: &str,
    ) -> Result<(), CommandError>;

    /// Complete the argument buffer (the text after the command word).
    /// The default hands the request back to the host's symbol completion.
    fn complete(&self, _ctx: &dyn EvalContext, _buffer: &str) -> Completion {
        Completion::Symbols
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Owns the registered commands and routes input lines to them.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command under its own name. Names must be unique.
    pub fn register(&mut self, command: Box<dyn Command>) -> Result<(), RegistryError> {
        let name = command.name();
        if self.find(name).is_some() {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }
        log::debug!("registered command {} ({})", name, command.category());
        self.commands.push(command);
        Ok(())
    }

    /// Look up a command by exact name.
    pub fn find(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// All commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|c| c.as_ref())
    }

    /// Dispatch one input line: first word selects the command, the rest is
    /// its argument string. Blank lines are a no-op.
    pub fn dispatch(
        &self,
        ctx: &dyn EvalContext,
        out: &mut dyn OutputSink,
        line: &str,
    ) -> Result<(), CommandError> {
        let Some((name, arg)) = split_line(line) else {
            return Ok(());
        };
        let Some(command) = self.find(name) else {
            return Err(CommandError::UnknownCommand(name.to_string()));
        };
        command.invoke(ctx, out, arg)
    }

    /// Completion for a full input line.
    ///
    /// While the first word is still being typed the candidates are command
    /// names; once a command word is complete the request is routed to that
    /// command with the argument portion of the buffer.
    pub fn complete_line(&self, ctx: &dyn EvalContext, buffer: &str) -> Completion {
        let trimmed = buffer.trim_start();
        match trimmed.split_once(char::is_whitespace) {
            None => {
                let candidates = self
                    .commands
                    .iter()
                    .map(|c| c.name().to_string())
                    .filter(|name| name.starts_with(trimmed))
                    .collect();
                Completion::Candidates(candidates)
            }
            Some((name, arg_buffer)) => match self.find(name) {
                Some(command) => command.complete(ctx, arg_buffer),
                None => Completion::Candidates(Vec::new()),
            },
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Split an input line into command word and argument string.
fn split_line(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => Some((name, rest)),
        None => Some((trimmed, "")),
    }
}
