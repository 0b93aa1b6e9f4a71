//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract; scripts rely on them.
//!
//! # Exit Codes
//!
//! | Code | Domain    | Description                                   |
//! |------|-----------|-----------------------------------------------|
//! | 0    | Universal | Success                                       |
//! | 1    | Universal | General error (unspecified)                   |
//! | 2    | Universal | CLI usage error (bad args, missing options)   |
//! | 3    | snapshot  | Snapshot file unreadable or malformed         |
//! | 4    | exec      | A command line failed (usage, eval, unknown)  |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant below
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into the relevant command's error handling

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
/// Argument parsing failures exit with this code automatically.
pub const EXIT_USAGE: u8 = 2;

/// Snapshot file could not be read or parsed.
pub const EXIT_SNAPSHOT_UNREADABLE: u8 = 3;

/// A dispatched command line failed during `exec`.
/// Per-expression failures inside `dm` do not trigger this; only a
/// whole-command abort (bad usage, unknown command, failed target) does.
pub const EXIT_COMMAND_FAILED: u8 = 4;
