//! Snapshot host binding for dbgkit.
//!
//! A [`ProcessSnapshot`] is a JSON capture of a debuggee's variables taken at
//! some stopped point: names, typed values, and struct layouts, including
//! members whose memory could not be read at capture time. The snapshot
//! implements [`dbgkit_core::EvalContext`], so every dbgkit command runs
//! against it unchanged.
//!
//! The expression language of this binding is deliberately small: a captured
//! variable name followed by zero or more `.member` steps (`point.x`,
//! `server.conn.fd`). Indexing, casts, and arithmetic belong to richer hosts.

pub mod error;
pub mod eval;
pub mod snapshot;
pub mod value;

pub use error::SnapshotError;
pub use snapshot::{ProcessSnapshot, Variable};
pub use value::{Field, StructValue, Value};
