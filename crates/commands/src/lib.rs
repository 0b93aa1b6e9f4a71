//! Inspection commands for a debugger host
//!
//! This crate supplies a small command registry plus two built-in
//! commands and a field-name completion routine:
//!
//! - `dm` prints a comma-separated batch of expressions, one line each,
//!   reporting per-expression failures inline without aborting the batch
//! - `mbr` prints selected (or all) members of an aggregate value
//! - [`complete_fields`] turns a partially typed argument buffer into
//!   field-name candidates, deferring to the host's symbol completion
//!   while the object expression is still being typed
//!
//! Hosts provide evaluation through [`dbgkit_core::EvalContext`] and
//! collect output through [`dbgkit_core::OutputSink`]; nothing here
//! prints or reads on its own.
//!
//! ```ignore
//! let mut registry = CommandRegistry::new();
//! register_builtin_commands(&mut registry)?;
//! registry.dispatch(&host, &mut sink, "dm x, y")?;
//! ```

pub mod complete;
pub mod display_many;
pub mod members;
pub mod registry;

#[cfg(test)]
pub mod harness;

pub use complete::complete_fields;
pub use display_many::DisplayMany;
pub use members::Members;
pub use registry::{
    Command, CommandCategory, CommandError, CommandRegistry, Completion, RegistryError,
};

/// Register every built-in command.
///
/// Hosts call this once during startup; registration is an explicit step,
/// not a load-time side effect.
pub fn register_builtin_commands(registry: &mut CommandRegistry) -> Result<(), RegistryError> {
    registry.register(Box::new(DisplayMany))?;
    registry.register(Box::new(Members))?;
    Ok(())
}
