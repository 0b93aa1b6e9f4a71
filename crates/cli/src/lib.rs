//! Library half of the `dbgkit` binary: everything the console needs
//! that can be tested without a terminal.

pub mod editor;
pub mod exit_codes;
pub mod output;
pub mod settings;
pub mod util;
